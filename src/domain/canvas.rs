//! Rendering collaborator.

use super::{Bounds, Position, Rgb};

/// Drawing surface with the origin in the top-left corner and the y-axis pointing down.
///
/// Circles are addressed by the top-left corner of their bounding square.
pub trait Canvas {
    fn fill_circle(&mut self, position: Position, diameter: i32, color: Rgb);

    fn erase_circle(&mut self, position: Position, diameter: i32);

    fn draw_rectangle(&mut self, bounds: Bounds, color: Rgb);
}
