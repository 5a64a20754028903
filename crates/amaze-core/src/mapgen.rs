//! Random maze generation.
//!
//! Carves open space out of a solid wall grid with a drunk walk, then
//! places the start and goal on two distant carved cells. Every carved
//! cell stays connected to the carving origin, so generated mazes always
//! have a solution.

use rand::{Rng, RngExt};

use crate::{Maze, MazeError, Move, Point};

/// Configuration for random maze generation.
#[derive(Debug, Clone)]
pub struct MazeGen {
    /// Proportion of cells to carve open, 0.0 to 1.0.
    pub fill_pct: f64,
    /// Number of walks, each restarting from the center.
    pub walks: usize,
}

impl Default for MazeGen {
    fn default() -> Self {
        Self {
            fill_pct: 0.45,
            walks: 8,
        }
    }
}

impl MazeGen {
    /// Generate a `width` x `height` maze using `rng`.
    pub fn generate<R: Rng>(&self, rng: &mut R, width: i32, height: i32) -> Result<Maze, MazeError> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::Empty);
        }

        let total = (width * height) as usize;
        let target = ((total as f64 * self.fill_pct) as usize).max(1);
        let center = Point::new(width / 2, height / 2);
        let mut open = vec![false; total];
        let mut carved = 0usize;

        for _ in 0..self.walks.max(1) {
            let mut pos = center;
            let step_limit = total * 4; // safety limit per walk

            for _ in 0..step_limit {
                if carved >= target {
                    break;
                }

                let i = (pos.y * width + pos.x) as usize;
                if !open[i] {
                    open[i] = true;
                    carved += 1;
                }

                // Step to a random cardinal neighbor, clamped to bounds.
                let mv = Move::ALL[rng.random_range(0..Move::ALL.len())];
                let next = mv.apply(pos);
                if next.x >= 0 && next.x < width && next.y >= 0 && next.y < height {
                    pos = next;
                }
                // else stay put
            }
        }

        // Endpoints: the carved cells nearest the top-left and bottom-right
        // corners. The center is always carved, so both fall on open floor.
        let mut start = center;
        let mut goal = center;
        for y in 0..height {
            for x in 0..width {
                if !open[(y * width + x) as usize] {
                    continue;
                }
                let p = Point::new(x, y);
                if p.x + p.y < start.x + start.y {
                    start = p;
                }
                if p.x + p.y > goal.x + goal.y {
                    goal = p;
                }
            }
        }

        let walls = open.iter().map(|&o| !o).collect();
        Maze::new(width, height, walls, start, goal)
    }
}
