//! Ball moving inside a region and bouncing off its walls.

use std::sync::Arc;

use log::{debug, trace};
use rand::Rng;
use thiserror::Error;

use super::{Bounds, Canvas, HasBounds, Position, Region, Rgb, Velocity, Wall};

/// Default limit for the speed of randomly created balls on each axis.
pub const MAX_SPEED: i32 = 7;

#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    position: Position,
    velocity: Velocity,
    diameter: i32,
    color: Rgb,
    region: Arc<Region>,
}

impl Ball {
    /// Only the diameter is validated. A ball starting on or past a wall is placed against that
    /// wall by the next `advance`.
    pub fn new(
        position: Position,
        velocity: Velocity,
        diameter: i32,
        region: Arc<Region>,
    ) -> Result<Self, BallError> {
        if !region.fits(diameter) {
            return Err(BallError::DoesNotFit {
                diameter,
                width: region.width(),
                height: region.height(),
            });
        }

        Ok(Self {
            position,
            velocity,
            diameter,
            color: Rgb::default(),
            region,
        })
    }

    /// Place a ball at a random position inside the region and give it a random velocity with
    /// nonzero components in `-max_speed..=max_speed`.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        diameter: i32,
        max_speed: i32,
        region: Arc<Region>,
    ) -> Result<Self, BallError> {
        if max_speed < 1 {
            return Err(BallError::InvalidMaxSpeed(max_speed));
        }
        if !region.fits(diameter) {
            return Err(BallError::DoesNotFit {
                diameter,
                width: region.width(),
                height: region.height(),
            });
        }

        let position = Position::new(
            region.left() + rng.random_range(0..region.width() - diameter),
            region.top() + rng.random_range(0..region.height() - diameter),
        );
        let velocity = Velocity::new(
            nonzero_speed(rng, max_speed),
            nonzero_speed(rng, max_speed),
        );

        debug!("created ball at {position:?} moving with {velocity:?}");

        Self::new(position, velocity, diameter, region)
    }

    pub fn with_color(self, color: Rgb) -> Self {
        Self { color, ..self }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x()
    }

    pub fn y(&self) -> i32 {
        self.position.y()
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn diameter(&self) -> i32 {
        self.diameter
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Move by one step of the current velocity. Whenever an edge reaches a wall, the ball is
    /// placed against that wall and the velocity on that axis is reversed.
    pub fn advance(&mut self) {
        self.position = self.position + self.velocity;

        let enclosure = self.region.bounds();
        for wall in Wall::iter() {
            if self.bounds().reaches(*wall, &enclosure) {
                self.rest_against(*wall);
                trace!(
                    "ball bounced off {wall:?} wall at {:?}, now moving with {:?}",
                    self.position,
                    self.velocity
                );
            }
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_circle(self.position, self.diameter, self.color);
    }

    pub fn erase(&self, canvas: &mut dyn Canvas) {
        canvas.erase_circle(self.position, self.diameter);
    }

    /// Erase the ball, advance it and draw it at its new position.
    pub fn step(&mut self, canvas: &mut dyn Canvas) {
        self.erase(canvas);
        self.advance();
        self.draw(canvas);
    }

    fn rest_against(&mut self, wall: Wall) {
        self.position = match wall {
            Wall::Left => self.position.with_x(self.region.left()),
            Wall::Right => self.position.with_x(self.region.right() - self.diameter),
            Wall::Top => self.position.with_y(self.region.top()),
            Wall::Bottom => self.position.with_y(self.region.bottom() - self.diameter),
        };
        self.velocity = if wall.is_vertical() {
            self.velocity.reflect_x()
        } else {
            self.velocity.reflect_y()
        };
    }
}

impl HasBounds for Ball {
    fn bounds(&self) -> Bounds {
        Bounds::from_corner(self.position, self.diameter, self.diameter)
    }
}

fn nonzero_speed<R: Rng + ?Sized>(rng: &mut R, max_speed: i32) -> i32 {
    loop {
        let speed = rng.random_range(-max_speed..=max_speed);
        if speed != 0 {
            return speed;
        }
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum BallError {
    #[error("diameter {diameter} does not fit into region of size {width}x{height}")]
    DoesNotFit {
        diameter: i32,
        width: i32,
        height: i32,
    },
    #[error("invalid max speed {0}")]
    InvalidMaxSpeed(i32),
}
