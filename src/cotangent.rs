//! Canned cotangent values, one per second of the minute.
//!
//! Second `s` maps to the angle 6°×s measured clockwise from 12 o'clock. The
//! table stores the slope factor used to find where the sweep ray crosses a
//! scanline, so the wipe never calls into trigonometry at runtime.

/// Seconds in a minute; also the table length.
pub const SECONDS_PER_MINUTE: usize = 60;

/// `cot(6°×s - 90°)` for every second, the run-over-rise of the sweep ray.
/// The axis-aligned seconds (0, 15, 30, 45) are zeroed to avoid an infinite
/// slope.
pub const COTANGENT_BY_SECONDS: [f64; SECONDS_PER_MINUTE] = [
    0.0, // 12 o'clock, zeroed
    -0.10510423526567597,
    -0.2125565616700213,
    -0.3249196962329061,
    -0.4452286853085366,
    -0.5773502691896258,
    -0.7265425280053606,
    -0.9004040442978389,
    -1.110612514829193,
    -1.376381920471173,
    -1.7320508075688754,
    -2.2460367739042164,
    -3.0776835371752513,
    -4.704630109478442,
    -9.51436445422259,
    0.0, // 3 o'clock, zeroed
    9.514364454222585,
    4.704630109478455,
    3.077683537175254,
    2.2460367739042164,
    1.7320508075688774,
    1.3763819204711738,
    1.110612514829193,
    0.90040404429784,
    0.726542528005361,
    0.577350269189626,
    0.4452286853085361,
    0.3249196962329064,
    0.21255656167002226,
    0.10510423526567644,
    0.0, // 6 o'clock, zeroed
    -0.10510423526567632,
    -0.2125565616700219,
    -0.3249196962329063,
    -0.445228685308536,
    -0.5773502691896254,
    -0.7265425280053608,
    -0.90040404429784,
    -1.1106125148291923,
    -1.3763819204711734,
    -1.7320508075688774,
    -2.2460367739042146,
    -3.0776835371752522,
    -4.704630109478455,
    -9.51436445422256,
    0.0, // 9 o'clock, zeroed
    9.514364454222623,
    4.70463010947846,
    3.07768353717525,
    2.2460367739042186,
    1.7320508075688767,
    1.376381920471174,
    1.110612514829193,
    0.9004040442978406,
    0.7265425280053611,
    0.5773502691896264,
    0.445228685308536,
    0.3249196962329065,
    0.21255656167002263,
    0.10510423526567635,
];

/// Look up the slope factor for `second`, or `None` outside `0..60`.
pub fn cotangent(second: u8) -> Option<f64> {
    COTANGENT_BY_SECONDS.get(usize::from(second)).copied()
}
