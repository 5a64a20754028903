//! The maze grid and its text-format parser.

use std::fmt;

use crate::{Move, Point};

/// An immutable rectangular maze: a wall bitmap plus start and goal cells.
///
/// Construct one with [`parse`](Self::parse) from ASCII art, with
/// [`new`](Self::new) from raw parts, or with [`MazeGen`](crate::MazeGen).
/// Once built a maze never changes, so it can be shared freely between
/// searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: i32,
    height: i32,
    walls: Vec<bool>,
    start: Point,
    goal: Point,
}

impl Maze {
    /// Parse a maze from its text form.
    ///
    /// `A` marks the start cell and `B` the goal; exactly one of each must
    /// be present. Spaces are open floor and any other character is a
    /// wall. Rows may have different lengths; missing trailing cells count
    /// as open.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let lines: Vec<&str> = s.lines().collect();
        let height = lines.len() as i32;
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as i32;
        if width == 0 || height == 0 {
            return Err(MazeError::Empty);
        }

        let mut walls = vec![false; (width * height) as usize];
        let mut starts = Vec::new();
        let mut goals = Vec::new();

        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    'A' => starts.push(p),
                    'B' => goals.push(p),
                    ' ' => {}
                    _ => walls[(p.y * width + p.x) as usize] = true,
                }
            }
        }

        if starts.len() != 1 {
            return Err(MazeError::StartCount(starts.len()));
        }
        if goals.len() != 1 {
            return Err(MazeError::GoalCount(goals.len()));
        }

        Self::new(width, height, walls, starts[0], goals[0])
    }

    /// Build a maze from raw parts, validating the endpoint preconditions.
    ///
    /// `walls` is row-major with `width * height` entries. `start` and
    /// `goal` must be in bounds and open; they may coincide.
    pub fn new(
        width: i32,
        height: i32,
        walls: Vec<bool>,
        start: Point,
        goal: Point,
    ) -> Result<Self, MazeError> {
        if width <= 0 || height <= 0 || walls.len() != (width * height) as usize {
            return Err(MazeError::Empty);
        }
        let maze = Self {
            width,
            height,
            walls,
            start,
            goal,
        };
        for p in [start, goal] {
            if !maze.contains(p) {
                return Err(MazeError::OutOfBounds(p));
            }
            if maze.is_wall(p) {
                return Err(MazeError::WalledEndpoint(p));
            }
        }
        Ok(maze)
    }

    /// Width of the maze in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the maze in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether `p` is inside the maze rectangle.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether `p` is blocked. Out-of-range points count as walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        !self.contains(p) || self.walls[(p.y * self.width + p.x) as usize]
    }

    /// Whether `p` is an in-bounds open cell.
    #[inline]
    pub fn open(&self, p: Point) -> bool {
        !self.is_wall(p)
    }

    /// Append every passable 4-neighbor of `p` into `buf`, each with the
    /// move that reaches it, in the fixed order up, down, left, right.
    /// The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<(Move, Point)>) {
        for mv in Move::ALL {
            let np = mv.apply(p);
            if self.open(np) {
                buf.push((mv, np));
            }
        }
    }
}

impl fmt::Display for Maze {
    /// Canonical text form: `#` walls, `A`/`B` endpoints, spaces elsewhere.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..self.width {
                let p = Point::new(x, y);
                let ch = if self.is_wall(p) {
                    '#'
                } else if p == self.start {
                    'A'
                } else if p == self.goal {
                    'B'
                } else {
                    ' '
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when building a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The maze has no cells.
    Empty,
    /// The text must contain exactly one `A` start marker.
    StartCount(usize),
    /// The text must contain exactly one `B` goal marker.
    GoalCount(usize),
    /// An endpoint lies outside the maze rectangle.
    OutOfBounds(Point),
    /// An endpoint sits on a wall cell.
    WalledEndpoint(Point),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze has no cells"),
            Self::StartCount(n) => {
                write!(f, "maze must have exactly one start point, found {n}")
            }
            Self::GoalCount(n) => write!(f, "maze must have exactly one goal, found {n}"),
            Self::OutOfBounds(p) => write!(f, "endpoint {p} is outside the maze"),
            Self::WalledEndpoint(p) => write!(f, "endpoint {p} sits on a wall"),
        }
    }
}

impl std::error::Error for MazeError {}
