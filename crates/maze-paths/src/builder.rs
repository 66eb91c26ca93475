//! Grid-to-graph compaction.
//!
//! A single row-major pass turns a [`MazeGrid`] into a sparse [`Graph`]
//! whose nodes are the cells where something happens (corridor ends, branch
//! points, the start and the finish). Straight runs of open cells between
//! two such cells collapse into one edge weighted by the run length.
//!
//! State carried through the scan:
//!
//! - a `(prev, cur, next)` window of states along the row, where anything
//!   outside the grid reads as blocked;
//! - `left`, the last node on this row still waiting for a node to its east;
//! - `top[x]`, the last node in column `x` still waiting for a node to its
//!   south. A blocked cell clears it.

use maze_core::{Cell, CellState, Direction, MazeGrid, Point};

use crate::error::BuildError;
use crate::graph::{Graph, NodeId};

/// Build the compacted graph for `grid`.
///
/// Fails only if the grid has no start or no finish. A grid without open
/// cells produces an empty graph.
pub fn build_graph(grid: &MazeGrid) -> Result<Graph, BuildError> {
    let start = grid.start_cell().ok_or(BuildError::MissingStart)?;
    let finish = grid.finish_cell().ok_or(BuildError::MissingFinish)?;

    let width = grid.width();
    let height = grid.height();
    let mut graph = Graph::new();
    let mut top: Vec<Option<NodeId>> = vec![None; width as usize];

    for y in 0..height {
        let mut left: Option<NodeId> = None;
        let mut cur = CellState::Blocked;
        let mut next = grid.state_at(Point::new(0, y));

        for x in 0..width {
            let prev = cur;
            cur = next;
            next = grid.state_at(Point::new(x + 1, y));

            let col = x as usize;
            if !cur.is_open() {
                top[col] = None;
                continue;
            }

            let p = Point::new(x, y);
            let cell = Cell { pos: p, state: cur };
            let above = grid.is_open(p.step(Direction::North));
            let below = grid.is_open(p.step(Direction::South));
            let endpoint = cell == start || cell == finish;

            let node = match (prev.is_open(), next.is_open()) {
                // Inside a corridor: only branch points and endpoints matter.
                (true, true) => {
                    if endpoint || above || below {
                        let n = graph.add_node(cell);
                        join_horizontal(&mut graph, left, n);
                        left = Some(n);
                        Some(n)
                    } else {
                        None
                    }
                }
                // Corridor ends here.
                (true, false) => {
                    let n = graph.add_node(cell);
                    join_horizontal(&mut graph, left, n);
                    left = None;
                    Some(n)
                }
                // Corridor starts here.
                (false, true) => {
                    let n = graph.add_node(cell);
                    log::trace!("new left node {}", cell);
                    left = Some(n);
                    Some(n)
                }
                // Walled in on both sides: a vertical pass-through unless it
                // ends a vertical corridor or is the start/finish.
                (false, false) => {
                    if endpoint || above != below {
                        log::trace!("vertical end point {}", cell);
                        Some(graph.add_node(cell))
                    } else {
                        None
                    }
                }
            };

            if let Some(n) = node {
                if above {
                    join_vertical(&mut graph, top[col], n);
                }
                top[col] = if below { Some(n) } else { None };
            }
        }
    }

    log::debug!(
        "built graph with {} nodes and {} edges from a {}x{} grid",
        graph.len(),
        graph.edge_count(),
        width,
        height
    );
    Ok(graph)
}

fn join_horizontal(graph: &mut Graph, left: Option<NodeId>, node: NodeId) {
    let Some(left) = left else {
        return;
    };
    let cost = (graph.cell(node).col() - graph.cell(left).col()) as u32;
    graph.link(left, Direction::East, node);
    graph.add_undirected_edge(node, left, cost);
    log::trace!(
        "connected {} :W {} E: {}",
        graph.cell(left),
        cost,
        graph.cell(node)
    );
}

fn join_vertical(graph: &mut Graph, top: Option<NodeId>, node: NodeId) {
    let Some(top) = top else {
        return;
    };
    let cost = (graph.cell(node).row() - graph.cell(top).row()) as u32;
    graph.link(top, Direction::South, node);
    graph.add_undirected_edge(node, top, cost);
    log::trace!(
        "connected {} :N {} S: {}",
        graph.cell(top),
        cost,
        graph.cell(node)
    );
}
