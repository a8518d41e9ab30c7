//! Rectangular region the balls are confined to.

use thiserror::Error;

use super::{Bounds, Canvas, HasBounds, Rgb};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Region {
    bounds: Bounds,
}

impl Region {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self, RegionError> {
        if left >= right || top >= bottom {
            return Err(RegionError::Degenerate {
                left,
                top,
                right,
                bottom,
            });
        }
        // Width and height must be representable.
        if right.checked_sub(left).is_none() || bottom.checked_sub(top).is_none() {
            return Err(RegionError::TooLarge {
                left,
                top,
                right,
                bottom,
            });
        }
        Ok(Self {
            bounds: Bounds {
                left,
                top,
                right,
                bottom,
            },
        })
    }

    pub fn left(&self) -> i32 {
        self.bounds.left
    }

    pub fn right(&self) -> i32 {
        self.bounds.right
    }

    pub fn top(&self) -> i32 {
        self.bounds.top
    }

    pub fn bottom(&self) -> i32 {
        self.bounds.bottom
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Check if an object of the given diameter has room to move on both axes.
    pub fn fits(&self, diameter: i32) -> bool {
        diameter > 0 && diameter < self.width() && diameter < self.height()
    }

    pub fn contains(&self, object: &dyn HasBounds) -> bool {
        object.is_within(self)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_rectangle(self.bounds, Rgb::BLACK);
    }
}

impl HasBounds for Region {
    fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum RegionError {
    #[error("degenerate region: left {left}, top {top}, right {right}, bottom {bottom}")]
    Degenerate {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },
    #[error("region too large: left {left}, top {top}, right {right}, bottom {bottom}")]
    TooLarge {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },
}
