use rand::Rng;

use super::log::Recorder;
use super::{logical_nodes, node_index, node_neighbors};
use crate::maze::Coord;

/// Wilson's algorithm: loop-erased random walks from unvisited nodes into the growing tree.
pub(super) fn wilson<R: Rng + ?Sized>(recorder: &mut Recorder, rng: &mut R) {
    let mut unvisited = logical_nodes(recorder.grid()).collect::<Vec<_>>();
    let mut in_tree = vec![false; unvisited.len()];

    // Seed the tree with one random node
    let root = unvisited.swap_remove(rng.random_range(0..unvisited.len()));
    in_tree[node_index(recorder.grid(), root)] = true;
    recorder.open_node(root);

    // Position of each node in the current walk, if it is on it
    let mut walk_position: Vec<Option<usize>> = vec![None; in_tree.len()];

    while !unvisited.is_empty() {
        let origin = unvisited[rng.random_range(0..unvisited.len())];
        let mut walk: Vec<Coord> = vec![origin];
        walk_position[node_index(recorder.grid(), origin)] = Some(0);

        loop {
            let Some(&current) = walk.last() else {
                break;
            };
            let neighbors = node_neighbors(recorder.grid(), current).collect::<Vec<_>>();
            let next = neighbors[rng.random_range(0..neighbors.len())];
            let next_idx = node_index(recorder.grid(), next);

            if in_tree[next_idx] {
                walk.push(next);
                break;
            }
            match walk_position[next_idx] {
                // Loop: erase everything walked since `next`
                Some(pos) => {
                    for erased in walk.drain(pos + 1..) {
                        walk_position[node_index(recorder.grid(), erased)] = None;
                    }
                }
                None => {
                    walk_position[next_idx] = Some(walk.len());
                    walk.push(next);
                }
            }
        }

        // Commit the loop-erased walk; its last node already belongs to the tree
        for pair in walk.windows(2) {
            recorder.open_edge(pair[0], pair[1]);
        }
        for &node in &walk {
            let idx = node_index(recorder.grid(), node);
            walk_position[idx] = None;
            in_tree[idx] = true;
        }
        unvisited.retain(|&node| !in_tree[node_index(recorder.grid(), node)]);
    }
}
