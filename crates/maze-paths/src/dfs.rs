use maze_core::Cell;

use crate::graph::{Graph, NodeId};

/// Iterative depth-first traversal.
///
/// Each time the finish node is popped, the iterator yields every node
/// visited so far, in visit order (so the sequence starts at the start and
/// ends at the finish, but may wander through dead ends on the way). The
/// traversal is not cut short by a match: it resumes on the next call and
/// only ends when the stack is empty.
pub struct Dfs<'g> {
    graph: &'g Graph,
    finish: NodeId,
    stack: Vec<NodeId>,
    visited: Vec<bool>,
    order: Vec<NodeId>,
}

impl<'g> Dfs<'g> {
    pub fn new(graph: &'g Graph, start: NodeId, finish: NodeId) -> Self {
        Self {
            graph,
            finish,
            stack: vec![start],
            visited: vec![false; graph.len()],
            order: Vec::new(),
        }
    }
}

impl Iterator for Dfs<'_> {
    type Item = Vec<Cell>;

    fn next(&mut self) -> Option<Vec<Cell>> {
        while let Some(current) = self.stack.pop() {
            log::trace!("pop {}", self.graph.cell(current));
            if self.visited[current.index()] {
                continue;
            }
            self.visited[current.index()] = true;
            self.order.push(current);

            for (n, _) in self.graph.neighbors(current) {
                if self.visited[n.index()] {
                    continue;
                }
                self.stack.push(n);
                log::trace!("push {}", self.graph.cell(n));
            }

            if current == self.finish {
                log::trace!("found finish {}", self.graph.cell(current));
                return Some(self.graph.cells(&self.order));
            }
        }
        None
    }
}
