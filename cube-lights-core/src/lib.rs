#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod animations;
pub mod config;
pub mod cube;
pub mod dimmer;
pub mod errors;
#[cfg(any(feature = "std", feature = "embassy"))]
pub mod fps;
pub mod logging;
pub mod pacing;
#[cfg(feature = "embassy")]
pub mod runner;
pub mod sensors;
pub mod vector;
pub mod wiring;

pub use cube::{BigCube, Cube, SmallCube};
pub use errors::{CubeError, CubeResult};
pub use vector::Vector;
