//! **amaze-core** — maze grid model for the amaze workspace.
//!
//! Provides the geometry primitives, the [`Maze`] wall grid with its
//! text-format parser, and random maze generation.
//!
//! The text format: `A` marks the start cell, `B` the goal, spaces are open
//! floor, and any other character is a wall. Rows may have different
//! lengths; missing trailing cells count as open.

pub mod geom;
pub mod mapgen;
pub mod maze;
pub mod moves;

pub use geom::Point;
pub use mapgen::MazeGen;
pub use maze::{Maze, MazeError};
pub use moves::Move;
