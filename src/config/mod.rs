//! Configuration: environment-driven settings plus the fixed
//! registration rule constants.

pub mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
