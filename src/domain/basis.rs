//! Basic building blocks.

use std::ops::Add;

use serde::Deserialize;

/// Top-left corner of an object on the canvas. The y-axis points down.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn with_x(self, x: i32) -> Self {
        Self { x, ..self }
    }

    pub fn with_y(self, y: i32) -> Self {
        Self { y, ..self }
    }
}

impl From<Position> for (i32, i32) {
    fn from(value: Position) -> Self {
        (value.x, value.y)
    }
}

impl From<Position> for (f32, f32) {
    fn from(value: Position) -> Self {
        (value.x as f32, value.y as f32)
    }
}

/// Saturates at the bounds of `i32`; walls clamp the position back afterwards.
impl Add<Velocity> for Position {
    type Output = Position;

    fn add(self, rhs: Velocity) -> Self::Output {
        Self {
            x: self.x.saturating_add(rhs.dx),
            y: self.y.saturating_add(rhs.dy),
        }
    }
}

/// Displacement per step.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Velocity {
    dx: i32,
    dy: i32,
}

impl Velocity {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn dx(&self) -> i32 {
        self.dx
    }

    pub fn dy(&self) -> i32 {
        self.dy
    }

    pub fn reflect_x(self) -> Self {
        Self {
            dx: self.dx.saturating_neg(),
            ..self
        }
    }

    pub fn reflect_y(self) -> Self {
        Self {
            dy: self.dy.saturating_neg(),
            ..self
        }
    }
}

impl From<Velocity> for (i32, i32) {
    fn from(value: Velocity) -> Self {
        (value.dx, value.dy)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
