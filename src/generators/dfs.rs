use rand::Rng;

use super::log::Recorder;
use super::{logical_nodes, node_neighbors};
use crate::maze::Coord;

/// Recursive backtracker with an explicit stack.
pub(super) fn randomized_dfs<R: Rng + ?Sized>(recorder: &mut Recorder, rng: &mut R) {
    let nodes = logical_nodes(recorder.grid()).collect::<Vec<_>>();

    // Initialize the starting point
    let start = nodes[rng.random_range(0..nodes.len())];
    recorder.open_node(start);

    // The stack will keep only carved nodes
    let mut stack: Vec<Coord> = vec![start];

    while let Some(&cell) = stack.last() {
        // Unvisited nodes are exactly the ones still walled in
        let neighbors = node_neighbors(recorder.grid(), cell)
            .filter(|&c| !recorder.grid()[c].is_open())
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            stack.pop();
            continue;
        }

        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        recorder.open_edge(cell, neighbor);
        // Carve onwards from the neighbor; `cell` stays below it to be revisited on backtrack
        stack.push(neighbor);
    }
}
