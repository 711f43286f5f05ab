use super::SearchReport;
use super::uniform_cost::best_first;
use crate::maze::{Coord, Grid, manhattan};

/// A* with the Manhattan distance to the goal, which never overestimates on a 4-connected
/// unit-cost grid.
pub(super) fn solve_astar(grid: &Grid, start: Coord, goal: Coord) -> SearchReport {
    best_first(grid, start, goal, |cell| manhattan(cell, goal))
}
