use std::fmt;

use crate::Point;

/// A single step between orthogonally adjacent cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves, in the fixed order used for neighbor enumeration.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// The coordinate offset of one step in this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Move::Up => Point::new(0, -1),
            Move::Down => Point::new(0, 1),
            Move::Left => Point::new(-1, 0),
            Move::Right => Point::new(1, 0),
        }
    }

    /// Apply this move to a cell position.
    #[inline]
    pub fn apply(self, p: Point) -> Point {
        p + self.delta()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_order() {
        assert_eq!(Move::ALL, [Move::Up, Move::Down, Move::Left, Move::Right]);
    }

    #[test]
    fn deltas_are_unit_steps() {
        for mv in Move::ALL {
            let d = mv.delta();
            assert_eq!(d.x.abs() + d.y.abs(), 1);
        }
        assert_eq!(Move::Up.apply(Point::new(2, 2)), Point::new(2, 1));
        assert_eq!(Move::Right.apply(Point::new(2, 2)), Point::new(3, 2));
    }

    #[test]
    fn display_names() {
        let names: Vec<String> = Move::ALL.iter().map(Move::to_string).collect();
        assert_eq!(names, ["up", "down", "left", "right"]);
    }
}
