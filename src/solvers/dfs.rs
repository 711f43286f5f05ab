use std::collections::HashSet;
use std::rc::Rc;

use super::{SearchReport, TrackedCell};
use crate::maze::{Coord, Grid};

/// Last-in first-out search. Finds a path, not necessarily the shortest one.
pub(super) fn solve_dfs(grid: &Grid, start: Coord, goal: Coord) -> SearchReport {
    let mut stack = vec![TrackedCell::root(start)];
    let mut visited = HashSet::new();
    let mut expanded = 0;

    while let Some(current) = stack.pop() {
        // A cell can sit on the stack more than once; only its first pop counts
        if !visited.insert(current.coord) {
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
        let neighbors = grid
            .open_neighbors(rc_current.coord)
            .filter(|c| !visited.contains(c))
            .collect::<Vec<_>>();
        // Push in reverse so the first neighbor in scan order is explored first
        for neighbor in neighbors.into_iter().rev() {
            stack.push(TrackedCell {
                coord: neighbor,
                parent: Some(rc_current.clone()),
                traveling_cost: rc_current.traveling_cost + 1,
                heuristic_cost: 0,
                sequence: 0,
            });
        }
    }

    SearchReport {
        path: None,
        expanded,
    }
}
