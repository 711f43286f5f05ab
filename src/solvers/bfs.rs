use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use super::{SearchReport, TrackedCell};
use crate::maze::{Coord, Grid};

pub(super) fn solve_bfs(grid: &Grid, start: Coord, goal: Coord) -> SearchReport {
    let mut queue = VecDeque::from([TrackedCell::root(start)]);
    let mut visited = HashSet::from([start]);
    let mut expanded = 0;

    while let Some(current) = queue.pop_front() {
        expanded += 1;
        if current.coord == goal {
            return SearchReport {
                path: Some(current.into_path()),
                expanded,
            };
        }

        let rc_current = Rc::new(current);
        for neighbor in grid.open_neighbors(rc_current.coord) {
            // Mark on enqueue so each cell enters the queue once
            if visited.insert(neighbor) {
                queue.push_back(TrackedCell {
                    coord: neighbor,
                    parent: Some(rc_current.clone()),
                    traveling_cost: rc_current.traveling_cost + 1,
                    heuristic_cost: 0,
                    sequence: 0,
                });
            }
        }
    }

    SearchReport {
        path: None,
        expanded,
    }
}

/// Breadth-first distance in steps between two cells, without building a path.
///
/// Returns `Some(0)` when `from == to` and `None` when either is a wall, out of bounds, or
/// the two are not connected.
pub fn bfs_distance(grid: &Grid, from: Coord, to: Coord) -> Option<usize> {
    if !grid.is_open(from) || !grid.is_open(to) {
        return None;
    }
    if from == to {
        return Some(0);
    }

    let mut queue = VecDeque::from([(from, 0)]);
    let mut visited = HashSet::from([from]);
    while let Some((cell, dist)) = queue.pop_front() {
        for neighbor in grid.open_neighbors(cell) {
            if neighbor == to {
                return Some(dist + 1);
            }
            if visited.insert(neighbor) {
                queue.push_back((neighbor, dist + 1));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::CellState;

    #[test]
    fn test_bfs_distance() {
        let mut grid = Grid::with_open_interior(7, 7).unwrap();
        assert_eq!(bfs_distance(&grid, (1, 1), (1, 1)), Some(0));
        assert_eq!(bfs_distance(&grid, (1, 1), (5, 5)), Some(8));
        assert_eq!(bfs_distance(&grid, (0, 0), (5, 5)), None);
        assert_eq!(bfs_distance(&grid, (1, 1), (50, 5)), None);

        // Wall off the corner
        grid.set((4, 5), CellState::Wall).unwrap();
        grid.set((5, 4), CellState::Wall).unwrap();
        assert_eq!(bfs_distance(&grid, (1, 1), (5, 5)), None);
    }

    #[test]
    fn test_bfs_follows_corridor() {
        let mut grid = Grid::new(7, 5).unwrap();
        // A U-shaped corridor: (1,1) down to (1,3), across to (5,3), up to (5,1)
        for cell in [(1, 1), (1, 2), (1, 3), (2, 3), (3, 3), (4, 3), (5, 3), (5, 2), (5, 1)] {
            grid.set(cell, CellState::Path).unwrap();
        }
        let report = solve_bfs(&grid, (1, 1), (5, 1));
        let path = report.path.unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path[4], (3, 3));
        assert_eq!(report.expanded, 9);
        assert_eq!(bfs_distance(&grid, (1, 1), (5, 1)), Some(8));
    }
}
