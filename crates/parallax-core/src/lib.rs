pub mod angle;
pub mod config;
pub mod constants;
pub mod controller;
pub mod offset;
pub mod tracker;

pub use angle::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use offset::*;
pub use tracker::*;
