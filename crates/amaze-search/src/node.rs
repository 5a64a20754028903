use amaze_core::{Move, Point};

/// Index of a node in a search arena.
pub type NodeId = usize;

/// One state reached during a search, with a backlink to its predecessor.
///
/// Nodes are immutable once constructed. Parent links always point at
/// earlier arena entries, so the arena forms a tree rooted at the start
/// node and backlinks stay valid for the whole search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    /// The cell this node reached.
    pub state: Point,
    /// Arena index of the node this one was expanded from.
    pub parent: Option<NodeId>,
    /// The move taken from the parent to reach `state`.
    pub action: Option<Move>,
    /// Accumulated path cost from the start, 1 per move.
    pub g: i32,
    /// Heuristic estimate from `state` to the goal; 0 for uninformed search.
    pub h: i32,
    /// Priority value `g + h`, used only by the best-first frontier.
    pub f: i32,
}

impl SearchNode {
    /// The start node: zero cost, no parent, no action.
    pub fn root(state: Point, h: i32) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            g: 0,
            h,
            f: h,
        }
    }

    /// A node expanded from `parent` (whose cost is `parent_g`) by taking
    /// `action`.
    pub fn child(state: Point, parent: NodeId, parent_g: i32, action: Move, h: i32) -> Self {
        let g = parent_g + 1;
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
            g,
            h,
            f: g + h,
        }
    }
}
