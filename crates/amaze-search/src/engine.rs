//! The search engine: expansion loop and path reconstruction.

use std::collections::HashSet;

use amaze_core::{Move, Point};

use crate::SearchError;
use crate::distance::manhattan;
use crate::frontier::{Entry, Frontier};
use crate::node::{NodeId, SearchNode};
use crate::traits::Navigate;

/// Frontier strategy driving the expansion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Uninformed LIFO expansion. Finds a path, not necessarily a short one.
    DepthFirst,
    /// Uninformed FIFO expansion. Shortest path in move count on unit-cost
    /// grids.
    BreadthFirst,
    /// Informed min-`f` expansion with the Manhattan heuristic. Matches the
    /// breadth-first path length on unit-cost grids.
    BestFirst,
}

impl Strategy {
    fn frontier(self) -> Frontier {
        match self {
            Self::DepthFirst => Frontier::stack(),
            Self::BreadthFirst => Frontier::queue(),
            Self::BestFirst => Frontier::priority(),
        }
    }

    /// Heuristic value for `state`; zero for the uninformed strategies.
    fn estimate(self, state: Point, goal: Point) -> i32 {
        match self {
            Self::BestFirst => manhattan(state, goal),
            _ => 0,
        }
    }
}

/// A reconstructed path, ordered start to goal.
///
/// `cells` excludes the start cell, so both sequences have equal length:
/// applying `actions[i]` reaches `cells[i]`. Both are empty when the start
/// already was the goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub actions: Vec<Move>,
    pub cells: Vec<Point>,
}

impl Solution {
    /// Path length in moves.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the path has zero moves.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Drives searches over any [`Navigate`] grid.
///
/// Owns the node arena and the per-search bookkeeping, reusing its
/// allocations across calls. Each [`solve`](Self::solve) call creates a
/// fresh frontier and explored set; the accessors afterwards describe the
/// most recent call, whether it succeeded or not.
pub struct Searcher {
    /// Node arena. Parent links are indices into this vector, so nodes
    /// moved off the frontier stay alive until the search concludes.
    nodes: Vec<SearchNode>,
    explored: HashSet<Point>,
    explored_count: usize,
    solution: Option<Solution>,
    /// Scratch buffer for neighbor queries.
    nbuf: Vec<(Move, Point)>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    /// Create a new searcher.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            explored: HashSet::new(),
            explored_count: 0,
            solution: None,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Search `grid` from its start to its goal using `strategy`.
    ///
    /// Returns the reconstructed path, or [`SearchError::NoSolution`] once
    /// the frontier is exhausted. The path is also retained and available
    /// through [`solution`](Self::solution) afterwards.
    pub fn solve(
        &mut self,
        grid: &impl Navigate,
        strategy: Strategy,
    ) -> Result<Solution, SearchError> {
        self.nodes.clear();
        self.explored.clear();
        self.explored_count = 0;
        self.solution = None;

        let start = grid.start();
        let goal = grid.goal();

        self.nodes
            .push(SearchNode::root(start, strategy.estimate(start, goal)));
        let mut frontier = strategy.frontier();
        frontier.add(Entry {
            id: 0,
            state: start,
            f: self.nodes[0].f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = 'search: loop {
            if frontier.is_empty() {
                break 'search None;
            }

            let entry = match frontier.remove() {
                Ok(entry) => entry,
                Err(err) => {
                    self.nbuf = nbuf;
                    return Err(err);
                }
            };
            self.explored_count += 1;
            log::trace!(
                "expanding {} (g={}, f={})",
                entry.state,
                self.nodes[entry.id].g,
                entry.f
            );

            if entry.state == goal {
                break 'search Some(entry.id);
            }

            self.explored.insert(entry.state);

            nbuf.clear();
            grid.neighbors(entry.state, &mut nbuf);
            let parent_g = self.nodes[entry.id].g;

            for &(action, state) in nbuf.iter() {
                if self.explored.contains(&state) || frontier.contains_state(state) {
                    continue;
                }
                let id = self.nodes.len();
                self.nodes.push(SearchNode::child(
                    state,
                    entry.id,
                    parent_g,
                    action,
                    strategy.estimate(state, goal),
                ));
                frontier.add(Entry {
                    id,
                    state,
                    f: self.nodes[id].f,
                });
            }
        };

        self.nbuf = nbuf;

        match outcome {
            Some(goal_id) => {
                let solution = self.reconstruct(goal_id);
                log::debug!(
                    "{strategy:?}: {} move path, {} nodes explored",
                    solution.len(),
                    self.explored_count
                );
                self.solution = Some(solution.clone());
                Ok(solution)
            }
            None => {
                log::debug!(
                    "{strategy:?}: frontier exhausted after {} nodes",
                    self.explored_count
                );
                Err(SearchError::NoSolution)
            }
        }
    }

    /// Walk parent links from `goal_id` back to the root, then reverse so
    /// the sequences run start to goal.
    fn reconstruct(&self, goal_id: NodeId) -> Solution {
        let steps = self.nodes[goal_id].g as usize;
        let mut actions = Vec::with_capacity(steps);
        let mut cells = Vec::with_capacity(steps);

        let mut id = goal_id;
        while let Some(parent) = self.nodes[id].parent {
            cells.push(self.nodes[id].state);
            if let Some(action) = self.nodes[id].action {
                actions.push(action);
            }
            id = parent;
        }
        actions.reverse();
        cells.reverse();
        Solution { actions, cells }
    }

    /// Nodes removed from the frontier during the most recent search.
    pub fn explored_count(&self) -> usize {
        self.explored_count
    }

    /// States expanded (added to the closed set) during the most recent
    /// search, for visualizing coverage.
    pub fn explored(&self) -> &HashSet<Point> {
        &self.explored
    }

    /// The most recent successful search's path, if any.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amaze_core::Maze;
    use std::collections::VecDeque;

    const MAZE: &str = "\
#####B#
##### #
####  #
#### ##
     ##
A######";

    const DETOUR: &str = "\
A
 #
  B";

    const RING: &str = "\
#######
#     #
# ### #
#A# B #
# ### #
#     #
#######";

    const ENCLOSED: &str = "\
A
 ###
 #B#
 ### ";

    const STRATEGIES: [Strategy; 3] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::BestFirst,
    ];

    /// Reference shortest-path length by plain flood fill.
    fn flood_distance(maze: &Maze, from: Point, to: Point) -> Option<usize> {
        let mut dist = vec![usize::MAX; (maze.width() * maze.height()) as usize];
        let idx = |p: Point| (p.y * maze.width() + p.x) as usize;
        let mut queue = VecDeque::from([from]);
        dist[idx(from)] = 0;
        let mut buf = Vec::new();
        while let Some(p) = queue.pop_front() {
            if p == to {
                return Some(dist[idx(p)]);
            }
            buf.clear();
            maze.neighbors(p, &mut buf);
            for &(_, np) in buf.iter() {
                if dist[idx(np)] == usize::MAX {
                    dist[idx(np)] = dist[idx(p)] + 1;
                    queue.push_back(np);
                }
            }
        }
        None
    }

    /// Walk the action sequence from the start and check it reproduces the
    /// cell sequence and ends on the goal.
    fn assert_round_trip(maze: &Maze, solution: &Solution) {
        assert_eq!(solution.actions.len(), solution.cells.len());
        let mut pos = maze.start();
        for (action, cell) in solution.actions.iter().zip(&solution.cells) {
            pos = action.apply(pos);
            assert!(maze.open(pos));
            assert_eq!(pos, *cell);
        }
        assert_eq!(pos, maze.goal());
    }

    #[test]
    fn start_equals_goal_succeeds_immediately() {
        let maze = Maze::new(3, 3, vec![false; 9], Point::new(1, 1), Point::new(1, 1)).unwrap();
        let mut searcher = Searcher::new();
        for strategy in STRATEGIES {
            let solution = searcher.solve(&maze, strategy).unwrap();
            assert!(solution.is_empty());
            assert!(solution.cells.is_empty());
            assert_eq!(searcher.explored_count(), 1);
            assert!(searcher.explored().is_empty());
        }
    }

    #[test]
    fn adjacent_goal_is_one_move() {
        let maze = Maze::parse("AB").unwrap();
        let mut searcher = Searcher::new();
        for strategy in STRATEGIES {
            let solution = searcher.solve(&maze, strategy).unwrap();
            assert_eq!(solution.actions, vec![Move::Right]);
            assert_eq!(solution.cells, vec![Point::new(1, 0)]);
        }
    }

    #[test]
    fn detour_around_center_wall() {
        let maze = Maze::parse(DETOUR).unwrap();
        let mut searcher = Searcher::new();
        let solution = searcher.solve(&maze, Strategy::BreadthFirst).unwrap();
        assert_eq!(solution.len(), 4);
        assert!(searcher.explored_count() <= 9);
        assert_round_trip(&maze, &solution);

        let best = searcher.solve(&maze, Strategy::BestFirst).unwrap();
        assert_eq!(best.len(), 4);
    }

    #[test]
    fn breadth_first_is_optimal() {
        let mut searcher = Searcher::new();
        for text in [MAZE, DETOUR, RING] {
            let maze = Maze::parse(text).unwrap();
            let shortest = flood_distance(&maze, maze.start(), maze.goal()).unwrap();
            let solution = searcher.solve(&maze, Strategy::BreadthFirst).unwrap();
            assert_eq!(solution.len(), shortest);
            assert_round_trip(&maze, &solution);
        }
    }

    #[test]
    fn best_first_matches_breadth_first_length() {
        let mut searcher = Searcher::new();
        for text in [MAZE, DETOUR, RING] {
            let maze = Maze::parse(text).unwrap();
            let shortest = flood_distance(&maze, maze.start(), maze.goal()).unwrap();
            let solution = searcher.solve(&maze, Strategy::BestFirst).unwrap();
            assert_eq!(solution.len(), shortest);
            assert_round_trip(&maze, &solution);
        }
    }

    #[test]
    fn depth_first_finds_a_valid_path() {
        let mut searcher = Searcher::new();
        for text in [MAZE, DETOUR, RING] {
            let maze = Maze::parse(text).unwrap();
            let solution = searcher.solve(&maze, Strategy::DepthFirst).unwrap();
            assert_round_trip(&maze, &solution);
        }
    }

    #[test]
    fn enclosed_goal_has_no_solution() {
        let maze = Maze::parse(ENCLOSED).unwrap();
        assert_eq!(flood_distance(&maze, maze.start(), maze.goal()), None);
        let mut searcher = Searcher::new();
        for strategy in STRATEGIES {
            assert_eq!(searcher.solve(&maze, strategy), Err(SearchError::NoSolution));
            assert_eq!(searcher.solution(), None);
            // The whole component reachable from the start gets explored.
            assert_eq!(searcher.explored().len(), 11);
            assert!(searcher.explored().contains(&maze.start()));
        }
    }

    #[test]
    fn accessors_describe_the_latest_search() {
        let solvable = Maze::parse(MAZE).unwrap();
        let blocked = Maze::parse(ENCLOSED).unwrap();
        let mut searcher = Searcher::new();

        let first = searcher.solve(&solvable, Strategy::BreadthFirst).unwrap();
        assert_eq!(searcher.solution(), Some(&first));
        assert!(searcher.explored_count() > 0);

        searcher.solve(&blocked, Strategy::BreadthFirst).unwrap_err();
        assert_eq!(searcher.solution(), None);

        let again = searcher.solve(&solvable, Strategy::BestFirst).unwrap();
        assert_eq!(searcher.solution(), Some(&again));
        assert_round_trip(&solvable, &again);
    }
}
