//! Collision detection against axis-aligned walls.

use std::slice::Iter;

use super::Position;

pub trait HasBounds {
    fn is_within(&self, other: &dyn HasBounds) -> bool {
        self.bounds().is_within(&other.bounds())
    }

    fn bounds(&self) -> Bounds;
}

/// Axis-aligned rectangle in canvas coordinates (y-axis pointing down).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    /// The far edges saturate at the bounds of `i32`.
    pub fn from_corner(position: Position, width: i32, height: i32) -> Self {
        Self {
            left: position.x(),
            top: position.y(),
            right: position.x().saturating_add(width),
            bottom: position.y().saturating_add(height),
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn top_left_corner(&self) -> Position {
        Position::new(self.left, self.top)
    }

    pub fn is_within(&self, other: &Bounds) -> bool {
        self.left >= other.left
            && self.right <= other.right
            && self.top >= other.top
            && self.bottom <= other.bottom
    }

    /// Check if the edge facing `wall` has reached or passed that wall of `enclosure`.
    pub fn reaches(&self, wall: Wall, enclosure: &Bounds) -> bool {
        match wall {
            Wall::Left => self.left <= enclosure.left,
            Wall::Right => self.right >= enclosure.right,
            Wall::Top => self.top <= enclosure.top,
            Wall::Bottom => self.bottom >= enclosure.bottom,
        }
    }
}

/// Walls are checked in this order, horizontal axis first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

impl Wall {
    pub fn iter() -> Iter<'static, Wall> {
        static WALLS: [Wall; 4] = [Wall::Left, Wall::Right, Wall::Top, Wall::Bottom];
        WALLS.iter()
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Wall::Left | Wall::Right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const ENCLOSURE: Bounds = Bounds {
        left: 0,
        top: 0,
        right: 100,
        bottom: 100,
    };

    #[test]
    fn test_bounds_from_corner() {
        let bounds = Bounds::from_corner(Position::new(5, 7), 10, 20);
        assert_eq!(
            bounds,
            Bounds {
                left: 5,
                top: 7,
                right: 15,
                bottom: 27
            }
        );
        assert_eq!(bounds.width(), 10);
        assert_eq!(bounds.height(), 20);
        assert_eq!(bounds.top_left_corner(), Position::new(5, 7));
    }

    #[test]
    fn test_bounds_from_corner_saturates() {
        let bounds = Bounds::from_corner(Position::new(i32::MAX - 3, i32::MAX), 10, 10);
        assert_eq!(bounds.right, i32::MAX);
        assert_eq!(bounds.bottom, i32::MAX);
        assert!(bounds.reaches(Wall::Right, &ENCLOSURE));
        assert!(bounds.reaches(Wall::Bottom, &ENCLOSURE));
    }

    #[rstest]
    #[case::inside(Position::new(10, 10), true)]
    #[case::touching_top_left(Position::new(0, 0), true)]
    #[case::touching_bottom_right(Position::new(90, 90), true)]
    #[case::past_left(Position::new(-1, 10), false)]
    #[case::past_right(Position::new(91, 10), false)]
    #[case::past_top(Position::new(10, -1), false)]
    #[case::past_bottom(Position::new(10, 91), false)]
    fn test_bounds_is_within(#[case] position: Position, #[case] expected: bool) {
        let bounds = Bounds::from_corner(position, 10, 10);
        assert_eq!(bounds.is_within(&ENCLOSURE), expected);
    }

    #[rstest]
    #[case::left(Position::new(0, 50), Wall::Left, true)]
    #[case::left_past(Position::new(-4, 50), Wall::Left, true)]
    #[case::left_clear(Position::new(1, 50), Wall::Left, false)]
    #[case::right(Position::new(90, 50), Wall::Right, true)]
    #[case::right_past(Position::new(95, 50), Wall::Right, true)]
    #[case::right_clear(Position::new(89, 50), Wall::Right, false)]
    #[case::top(Position::new(50, 0), Wall::Top, true)]
    #[case::top_clear(Position::new(50, 1), Wall::Top, false)]
    #[case::bottom(Position::new(50, 90), Wall::Bottom, true)]
    #[case::bottom_clear(Position::new(50, 89), Wall::Bottom, false)]
    fn test_bounds_reaches(#[case] position: Position, #[case] wall: Wall, #[case] expected: bool) {
        let bounds = Bounds::from_corner(position, 10, 10);
        assert_eq!(bounds.reaches(wall, &ENCLOSURE), expected);
    }

    #[test]
    fn test_wall_order() {
        assert_eq!(
            Wall::iter().copied().collect::<Vec<_>>(),
            vec![Wall::Left, Wall::Right, Wall::Top, Wall::Bottom]
        );
        assert!(Wall::Left.is_vertical());
        assert!(!Wall::Bottom.is_vertical());
    }
}
