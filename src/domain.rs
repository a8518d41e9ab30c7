//! The domain module encapsulates the core logic. It defines the `Ball` and `Region` entities,
//! along with the rules governing how a ball bounces off the walls of its region.
//!
//! Drawing is delegated to a `Canvas` so the logic stays independent of any rendering backend.

mod ball;
mod basis;
mod canvas;
mod collision;
mod region;

pub use ball::{Ball, BallError, MAX_SPEED};
pub use basis::{Position, Rgb, Velocity};
pub use canvas::Canvas;
pub use collision::{Bounds, HasBounds, Wall};
pub use region::{Region, RegionError};
