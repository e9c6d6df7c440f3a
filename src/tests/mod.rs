//! Integration tests for the terminal clock host.
//!
//! Unit tests live next to the code they cover; these exercise the library
//! end to end the way the binary drives it.

mod face_tests;
