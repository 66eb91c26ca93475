use std::cmp::Ordering;
use std::collections::BinaryHeap;

use maze_core::Cell;

use crate::graph::{Graph, NodeId};

/// Distance of a node nothing has reached yet.
pub const UNREACHABLE: u64 = u64::MAX;

/// Heap entry, ordered so the `BinaryHeap` (a max-heap) pops the smallest
/// distance first, and among equal distances the earliest inserted node.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    id: NodeId,
    dist: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Weighted shortest path by total edge cost.
///
/// Yields at most one path. The search runs on the first call to `next`.
pub struct Dijkstra<'g> {
    graph: &'g Graph,
    start: NodeId,
    finish: NodeId,
    done: bool,
}

impl<'g> Dijkstra<'g> {
    pub fn new(graph: &'g Graph, start: NodeId, finish: NodeId) -> Self {
        Self {
            graph,
            start,
            finish,
            done: false,
        }
    }

    fn search(&self) -> Option<Vec<Cell>> {
        let n = self.graph.len();
        let mut dist = vec![UNREACHABLE; n];
        let mut parent: Vec<Option<NodeId>> = vec![None; n];
        let mut closed = vec![false; n];
        let mut open = BinaryHeap::new();

        dist[self.start.index()] = 0;
        open.push(NodeRef {
            id: self.start,
            dist: 0,
        });

        while let Some(NodeRef { id: current, dist: d }) = open.pop() {
            let ci = current.index();
            if closed[ci] || d > dist[ci] {
                continue;
            }
            closed[ci] = true;

            log::trace!("settle {} at {}", self.graph.cell(current), d);
            if current == self.finish {
                return Some(self.trace(&parent, current));
            }

            for (nb, cost) in self.graph.neighbors(current) {
                let ni = nb.index();
                let tentative = d + u64::from(cost);
                if closed[ni] || tentative >= dist[ni] {
                    continue;
                }
                dist[ni] = tentative;
                parent[ni] = Some(current);
                open.push(NodeRef {
                    id: nb,
                    dist: tentative,
                });
            }
        }

        // Everything left is unreachable.
        log::trace!("finish {} unreachable", self.graph.cell(self.finish));
        None
    }

    fn trace(&self, parent: &[Option<NodeId>], mut id: NodeId) -> Vec<Cell> {
        let mut ids = vec![id];
        while let Some(p) = parent[id.index()] {
            ids.push(p);
            id = p;
        }
        ids.reverse();
        self.graph.cells(&ids)
    }
}

impl Iterator for Dijkstra<'_> {
    type Item = Vec<Cell>;

    fn next(&mut self) -> Option<Vec<Cell>> {
        if self.done {
            return None;
        }
        self.done = true;
        self.search()
    }
}
