//! Exhaustive enumeration of simple paths by backtracking.
//!
//! The search is the classic recursive one, unrolled onto an explicit frame
//! stack so paths can be handed out one at a time:
//!
//! 1. On entering a node, if one of its neighbours that is not on the current
//!    path is the finish, report `path + finish` (without walking into it).
//! 2. Then, for each neighbour that is neither on the path nor the finish,
//!    push it, search from it, and pop it again.
//!
//! Paths come out in the order induced by the neighbour lists. The number of
//! simple paths can grow exponentially with the number of branch points.

use maze_core::Cell;

use crate::graph::{Graph, NodeId};

/// Lazy enumeration of every simple path from start to finish.
pub struct Backtrack<'g> {
    graph: &'g Graph,
    start: NodeId,
    finish: NodeId,
    path: Vec<NodeId>,
    on_path: Vec<bool>,
    // (node, index of the next neighbour to descend into)
    frames: Vec<(NodeId, usize)>,
    started: bool,
}

impl<'g> Backtrack<'g> {
    pub fn new(graph: &'g Graph, start: NodeId, finish: NodeId) -> Self {
        Self {
            graph,
            start,
            finish,
            path: Vec::new(),
            on_path: vec![false; graph.len()],
            frames: Vec::new(),
            started: false,
        }
    }

    /// Push `node` onto the path and open a frame for it. Returns the path
    /// through the finish if the finish is one step away.
    fn enter(&mut self, node: NodeId) -> Option<Vec<Cell>> {
        log::trace!("push {}", self.graph.cell(node));
        self.path.push(node);
        self.on_path[node.index()] = true;
        self.frames.push((node, 0));

        let reaches_finish = self
            .graph
            .node(node)
            .neighbors()
            .iter()
            .any(|&n| n == self.finish && !self.on_path[n.index()]);
        if !reaches_finish {
            return None;
        }

        log::trace!("found finish {}", self.graph.cell(self.finish));
        let mut cells = self.graph.cells(&self.path);
        cells.push(self.graph.cell(self.finish));
        Some(cells)
    }

    fn leave(&mut self) {
        self.frames.pop();
        if let Some(node) = self.path.pop() {
            self.on_path[node.index()] = false;
        }
    }
}

impl Iterator for Backtrack<'_> {
    type Item = Vec<Cell>;

    fn next(&mut self) -> Option<Vec<Cell>> {
        if !self.started {
            self.started = true;
            if let Some(found) = self.enter(self.start) {
                return Some(found);
            }
        }

        loop {
            let graph = self.graph;
            let (node, cursor) = self.frames.last_mut()?;
            let neighbors = graph.node(*node).neighbors();
            let Some(&next) = neighbors.get(*cursor) else {
                self.leave();
                continue;
            };
            *cursor += 1;

            if next == self.finish || self.on_path[next.index()] {
                continue;
            }
            if let Some(found) = self.enter(next) {
                return Some(found);
            }
        }
    }
}
