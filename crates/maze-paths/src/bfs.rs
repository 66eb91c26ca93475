use std::collections::VecDeque;

use maze_core::Cell;

use crate::graph::{Graph, NodeId};

/// Breadth-first search for the path with the fewest edges.
///
/// Yields at most one path: the search stops as soon as the finish node is
/// dequeued. Edge costs are ignored.
pub struct Bfs<'g> {
    graph: &'g Graph,
    finish: NodeId,
    queue: VecDeque<NodeId>,
    // Set when a node is first enqueued; nodes are never queued twice.
    seen: Vec<bool>,
    parent: Vec<Option<NodeId>>,
    done: bool,
}

impl<'g> Bfs<'g> {
    pub fn new(graph: &'g Graph, start: NodeId, finish: NodeId) -> Self {
        let mut seen = vec![false; graph.len()];
        seen[start.index()] = true;
        Self {
            graph,
            finish,
            queue: VecDeque::from([start]),
            seen,
            parent: vec![None; graph.len()],
            done: false,
        }
    }

    fn trace(&self, mut id: NodeId) -> Vec<Cell> {
        let mut path = vec![self.graph.cell(id)];
        while let Some(p) = self.parent[id.index()] {
            path.push(self.graph.cell(p));
            id = p;
        }
        path.reverse();
        path
    }
}

impl Iterator for Bfs<'_> {
    type Item = Vec<Cell>;

    fn next(&mut self) -> Option<Vec<Cell>> {
        if self.done {
            return None;
        }

        while let Some(current) = self.queue.pop_front() {
            log::trace!("dequeue {}", self.graph.cell(current));

            if current == self.finish {
                log::trace!("finish {}", self.graph.cell(current));
                self.done = true;
                return Some(self.trace(current));
            }

            for (n, _) in self.graph.neighbors(current) {
                if self.seen[n.index()] {
                    continue;
                }
                self.seen[n.index()] = true;
                self.parent[n.index()] = Some(current);
                self.queue.push_back(n);
                log::trace!(
                    "enqueue {} from {}",
                    self.graph.cell(n),
                    self.graph.cell(current)
                );
            }
        }

        self.done = true;
        None
    }
}
