//! Library side of the `energy-dimensions` command: logging setup and output
//! rendering, shared by the binary and its tests.

pub mod logging;
pub mod outcome;
pub mod render;
