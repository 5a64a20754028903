//! Shared cell classification for the terminal and image renderers.

use std::collections::HashSet;

use amaze_core::{Maze, Point};

/// What a rendered cell represents, in overlay precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Wall,
    Start,
    Goal,
    Path,
    Explored,
    Open,
}

/// Classify `p` against the maze and the optional overlays.
pub fn classify(
    maze: &Maze,
    p: Point,
    path: &HashSet<Point>,
    explored: Option<&HashSet<Point>>,
) -> CellKind {
    if maze.is_wall(p) {
        CellKind::Wall
    } else if p == maze.start() {
        CellKind::Start
    } else if p == maze.goal() {
        CellKind::Goal
    } else if path.contains(&p) {
        CellKind::Path
    } else if explored.is_some_and(|e| e.contains(&p)) {
        CellKind::Explored
    } else {
        CellKind::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_precedence() {
        let maze = Maze::parse("A B").unwrap();
        let cell = Point::new(1, 0);
        let path = HashSet::from([cell]);
        let explored = HashSet::from([cell]);

        assert_eq!(classify(&maze, maze.start(), &path, None), CellKind::Start);
        assert_eq!(classify(&maze, maze.goal(), &path, None), CellKind::Goal);
        // Path wins over explored.
        assert_eq!(
            classify(&maze, cell, &path, Some(&explored)),
            CellKind::Path
        );
        assert_eq!(
            classify(&maze, cell, &HashSet::new(), Some(&explored)),
            CellKind::Explored
        );
        assert_eq!(classify(&maze, cell, &HashSet::new(), None), CellKind::Open);
        assert_eq!(
            classify(&maze, Point::new(0, 1), &path, None),
            CellKind::Wall
        );
    }
}
