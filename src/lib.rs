//! Balls bouncing inside a box.
//!
//! The `domain` module holds the bounce logic, `simulation` groups balls sharing a region and
//! `simulator` runs a simulation inside a Bevy app.


pub mod config;
pub mod domain;
mod resource;
pub mod simulation;
pub mod simulator;

pub use config::{Config, ConfigError};
pub use simulation::{Simulation, SimulationError};
pub use simulator::{Simulator, SimulatorError};
