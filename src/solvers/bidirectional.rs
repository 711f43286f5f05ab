use std::collections::{HashMap, VecDeque};

use super::SearchReport;
use crate::maze::{Coord, Grid, Path};

/// One side of the search: its frontier and, for every cell it reached, the cell it came from.
struct Side {
    frontier: VecDeque<Coord>,
    parents: HashMap<Coord, Option<Coord>>,
}

impl Side {
    fn new(origin: Coord) -> Self {
        Side {
            frontier: VecDeque::from([origin]),
            parents: HashMap::from([(origin, None)]),
        }
    }

    /// Chain of cells from `cell` back to this side's origin.
    fn chain(&self, cell: Coord) -> Path {
        let mut chain = vec![cell];
        let mut current = cell;
        while let Some(&Some(parent)) = self.parents.get(&current) {
            chain.push(parent);
            current = parent;
        }
        chain
    }

    fn depth(&self, cell: Coord) -> usize {
        self.chain(cell).len() - 1
    }

    /// Expands one full layer of the frontier. Returns every cell reached that the other side
    /// had already visited, in discovery order.
    fn expand_layer(&mut self, grid: &Grid, other: &Side, expanded: &mut usize) -> Vec<Coord> {
        let mut meetings = Vec::new();
        for _ in 0..self.frontier.len() {
            let Some(current) = self.frontier.pop_front() else {
                break;
            };
            *expanded += 1;
            for neighbor in grid.open_neighbors(current) {
                if self.parents.contains_key(&neighbor) {
                    continue;
                }
                self.parents.insert(neighbor, Some(current));
                if other.parents.contains_key(&neighbor) {
                    meetings.push(neighbor);
                }
                self.frontier.push_back(neighbor);
            }
        }
        meetings
    }
}

/// Breadth-first search grown from both ends, one layer at a time, alternating sides.
///
/// The search stops after the first layer in which a cell turns up in both visited sets.
/// Among the meeting cells of that layer the one with the shortest total path is kept, which
/// keeps the result shortest. Returning at the first meeting cell alone is not enough: a later
/// cell of the same layer can join the two sides through a shallower part of the other tree.
pub(super) fn solve_bidirectional(grid: &Grid, start: Coord, goal: Coord) -> SearchReport {
    if start == goal {
        return SearchReport {
            path: Some(vec![start]),
            expanded: 1,
        };
    }

    let mut forward = Side::new(start);
    let mut backward = Side::new(goal);
    let mut expanded = 0;
    let mut forward_turn = true;

    while !forward.frontier.is_empty() && !backward.frontier.is_empty() {
        let meetings = if forward_turn {
            forward.expand_layer(grid, &backward, &mut expanded)
        } else {
            backward.expand_layer(grid, &forward, &mut expanded)
        };
        forward_turn = !forward_turn;

        let meeting = meetings
            .into_iter()
            .min_by_key(|&cell| forward.depth(cell) + backward.depth(cell));
        if let Some(meeting) = meeting {
            // start -> meeting, then the backward chain past the shared meeting cell
            let mut path = forward.chain(meeting);
            path.reverse();
            path.extend(backward.chain(meeting).into_iter().skip(1));
            return SearchReport {
                path: Some(path),
                expanded,
            };
        }
    }

    SearchReport {
        path: None,
        expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{CellState, is_valid_path};

    #[test]
    fn test_meets_in_the_middle_of_a_corridor() {
        let mut grid = Grid::new(11, 5).unwrap();
        (1..10).for_each(|x| grid.set((x, 1), CellState::Path).unwrap());
        let report = solve_bidirectional(&grid, (1, 1), (9, 1));
        let path = report.path.unwrap();
        assert_eq!(path, (1..10).map(|x| (x, 1)).collect::<Vec<_>>());
        // Each side walks half the corridor
        assert!(report.expanded <= 9);
    }

    #[test]
    fn test_adjacent_endpoints() {
        let grid = Grid::with_open_interior(5, 5).unwrap();
        let path = solve_bidirectional(&grid, (1, 1), (2, 1)).path.unwrap();
        assert_eq!(path, vec![(1, 1), (2, 1)]);
    }

    #[test]
    fn test_picks_shortest_meeting_in_room() {
        let mut grid = Grid::with_open_interior(9, 9).unwrap();
        // Pillars so that several meeting cells appear in the same layer
        for cell in [(3, 3), (5, 3), (3, 5), (5, 5)] {
            grid.set(cell, CellState::Wall).unwrap();
        }
        let path = solve_bidirectional(&grid, (1, 4), (7, 4)).path.unwrap();
        assert!(is_valid_path(&grid, &path, (1, 4), (7, 4)));
        assert_eq!(path.len() - 1, 6);
    }
}
