use amaze_core::{Maze, Move, Point};

/// Minimal search interface over a maze-like grid.
///
/// The engine only ever reads through this trait, so a grid can be shared
/// by reference across any number of searches.
pub trait Navigate {
    /// The start cell.
    fn start(&self) -> Point;

    /// The goal cell.
    fn goal(&self) -> Point;

    /// Append the passable neighbors of `p` into `buf`, each with the move
    /// that reaches it, in a fixed deterministic order. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<(Move, Point)>);
}

impl Navigate for Maze {
    fn start(&self) -> Point {
        Maze::start(self)
    }

    fn goal(&self) -> Point {
        Maze::goal(self)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<(Move, Point)>) {
        Maze::neighbors(self, p, buf);
    }
}
