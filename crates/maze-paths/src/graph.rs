//! Index-addressed weighted graph over maze cells.
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`], so the
//! cyclic neighbour structure needs no shared ownership.

use std::collections::HashMap;
use std::fmt;

use maze_core::{Cell, Direction};

/// Handle to a node inside one [`Graph`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in insertion order.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A graph vertex wrapping one [`Cell`].
///
/// `neighbors` and `costs` are parallel: `costs[i]` is the weight of the edge
/// to `neighbors[i]`. Order is insertion order, not geometry. The geometric
/// view is kept separately in `links`, indexed by [`Direction`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphNode {
    cell: Cell,
    neighbors: Vec<NodeId>,
    costs: Vec<u32>,
    links: [Option<NodeId>; 4],
}

impl GraphNode {
    fn new(cell: Cell) -> Self {
        Self {
            cell,
            neighbors: Vec::new(),
            costs: Vec::new(),
            links: [None; 4],
        }
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    #[inline]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    #[inline]
    pub fn costs(&self) -> &[u32] {
        &self.costs
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Nearest node along the corridor leaving this node towards `dir`.
    #[inline]
    pub fn link(&self, dir: Direction) -> Option<NodeId> {
        self.links[dir.index()]
    }
}

/// Undirected weighted graph of maze cells.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    lookup: HashMap<Cell, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node for `cell`. Adding the same cell twice returns the
    /// existing node.
    pub fn add_node(&mut self, cell: Cell) -> NodeId {
        if let Some(&id) = self.lookup.get(&cell) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(GraphNode::new(cell));
        self.lookup.insert(cell, id);
        id
    }

    /// Connect `a` and `b` in both directions with the same cost: `b` is
    /// appended to `a`'s neighbours, then `a` to `b`'s.
    ///
    /// # Panics
    ///
    /// Panics if either id does not belong to this graph.
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, cost: u32) {
        let na = &mut self.nodes[a.0];
        na.neighbors.push(b);
        na.costs.push(cost);
        let nb = &mut self.nodes[b.0];
        nb.neighbors.push(a);
        nb.costs.push(cost);
    }

    /// Record that `b` is the next node from `a` towards `dir` (and `a` the
    /// next node from `b` the other way).
    pub fn link(&mut self, a: NodeId, dir: Direction, b: NodeId) {
        self.nodes[a.0].links[dir.index()] = Some(b);
        self.nodes[b.0].links[dir.opposite().index()] = Some(a);
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &GraphNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn cell(&self, id: NodeId) -> Cell {
        self.nodes[id.0].cell
    }

    /// Look a node up by cell value (position and state).
    #[inline]
    pub fn find(&self, cell: &Cell) -> Option<NodeId> {
        self.lookup.get(cell).copied()
    }

    #[inline]
    pub fn contains(&self, cell: &Cell) -> bool {
        self.lookup.contains_key(cell)
    }

    /// Neighbours of `id` with their edge costs, in insertion order.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, u32)> + '_ {
        let n = &self.nodes[id.0];
        n.neighbors.iter().copied().zip(n.costs.iter().copied())
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(GraphNode::degree).sum::<usize>() / 2
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &GraphNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Cost of the cheapest edge between `a` and `b`, if they are adjacent.
    pub fn edge_cost(&self, a: NodeId, b: NodeId) -> Option<u32> {
        self.neighbors(a)
            .filter(|&(n, _)| n == b)
            .map(|(_, c)| c)
            .min()
    }

    /// Total cost of walking `path` edge by edge. `None` if a cell is not a
    /// node or two consecutive cells are not adjacent.
    pub fn path_cost(&self, path: &[Cell]) -> Option<u64> {
        let ids = path
            .iter()
            .map(|c| self.find(c))
            .collect::<Option<Vec<_>>>()?;
        ids.windows(2).try_fold(0u64, |acc, w| {
            self.edge_cost(w[0], w[1]).map(|c| acc + u64::from(c))
        })
    }

    /// Map a sequence of node ids to their cells.
    pub fn cells(&self, ids: &[NodeId]) -> Vec<Cell> {
        ids.iter().map(|&id| self.cell(id)).collect()
    }
}
