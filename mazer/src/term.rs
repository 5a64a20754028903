//! Terminal rendering of mazes, solution paths, and search coverage.

use std::collections::HashSet;

use crossterm::style::{StyledContent, Stylize};

use amaze_core::{Maze, Point};
use amaze_search::Solution;

use crate::overlay::{CellKind, classify};

/// Print the maze with optional solution-path and explored overlays.
///
/// Colored output uses two-column blocks; `plain` falls back to one
/// character per cell.
pub fn print(
    maze: &Maze,
    solution: Option<&Solution>,
    explored: Option<&HashSet<Point>>,
    plain: bool,
) {
    let path: HashSet<Point> = solution
        .map(|s| s.cells.iter().copied().collect())
        .unwrap_or_default();

    println!();
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let kind = classify(maze, Point::new(x, y), &path, explored);
            if plain {
                print!("{}", plain_char(kind));
            } else {
                print!("{}", colored(kind));
            }
        }
        println!();
    }
    println!();
}

fn plain_char(kind: CellKind) -> char {
    match kind {
        CellKind::Wall => '▓',
        CellKind::Start => 'A',
        CellKind::Goal => 'B',
        CellKind::Path => '*',
        CellKind::Explored => '.',
        CellKind::Open => ' ',
    }
}

fn colored(kind: CellKind) -> StyledContent<&'static str> {
    match kind {
        CellKind::Wall => "  ".on_dark_grey(),
        CellKind::Start => "A ".black().on_red(),
        CellKind::Goal => "B ".black().on_green(),
        CellKind::Path => "**".black().on_yellow(),
        CellKind::Explored => "..".black().on_dark_red(),
        CellKind::Open => "  ".on_white(),
    }
}
