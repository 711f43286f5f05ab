use std::collections::{BinaryHeap, HashMap, HashSet};
use std::{cmp::Reverse, rc::Rc};

use super::{SearchReport, TrackedCell, step_cost};
use crate::maze::{Coord, Grid};

/// Best-first search ordered by accumulated cost plus `heuristic(cell)`.
///
/// Uniform-cost search and A* differ only in the heuristic.
pub(super) fn best_first(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    heuristic: impl Fn(Coord) -> usize,
) -> SearchReport {
    // Priority queue, using Reverse to turn the max-heap into a min-heap
    let mut pq: BinaryHeap<Reverse<TrackedCell>> = BinaryHeap::new();
    pq.push(Reverse(TrackedCell {
        heuristic_cost: heuristic(start),
        ..TrackedCell::root(start)
    }));
    let mut sequence = 1;

    // Minimum known cost to reach each cell
    let mut costs = HashMap::from([(start, 0)]);
    let mut closed = HashSet::new();
    let mut expanded = 0;

    while let Some(Reverse(current)) = pq.pop() {
        // Skip stale entries superseded by a cheaper push
        if !closed.insert(current.coord) {
            continue;
        }
        expanded += 1;
        if current.coord == goal {
            return SearchReport {
                path: Some(current.into_path()),
                expanded,
            };
        }

        let rc_current = Rc::new(current);
        for neighbor in grid.open_neighbors(rc_current.coord) {
            if closed.contains(&neighbor) {
                continue;
            }
            let new_cost = rc_current.traveling_cost + step_cost(grid, neighbor);
            // Only consider neighbors that we can reach with a lower cost
            let is_cheaper = costs
                .get(&neighbor)
                .is_none_or(|&existing_cost| new_cost < existing_cost);
            if is_cheaper {
                costs.insert(neighbor, new_cost);
                pq.push(Reverse(TrackedCell {
                    coord: neighbor,
                    parent: Some(rc_current.clone()),
                    traveling_cost: new_cost,
                    heuristic_cost: heuristic(neighbor),
                    sequence,
                }));
                sequence += 1;
            }
        }
    }

    SearchReport {
        path: None,
        expanded,
    }
}

pub(super) fn solve_uniform_cost(grid: &Grid, start: Coord, goal: Coord) -> SearchReport {
    best_first(grid, start, goal, |_| 0)
}
