use std::cmp::Ordering;
use std::rc::Rc;

mod astar;
mod bfs;
mod bidirectional;
mod dfs;
mod uniform_cost;

use astar::solve_astar;
use bfs::solve_bfs;
use bidirectional::solve_bidirectional;
use dfs::solve_dfs;
use uniform_cost::solve_uniform_cost;

pub use bfs::bfs_distance;

use crate::error::MazeError;
use crate::maze::{Coord, Grid, Path};

/// A frontier entry that remembers how it was reached.
struct TrackedCell {
    /// Coordinates of the cell in the grid
    coord: Coord,
    /// The parent cell from which this cell was reached
    parent: Option<Rc<TrackedCell>>,
    /// Cost to reach this cell from the start
    traveling_cost: usize,
    /// Estimated cost to reach the goal from this cell (for A* algorithm)
    heuristic_cost: usize,
    /// Push order, so equal priorities pop first-in first-out
    sequence: usize,
}

impl TrackedCell {
    fn root(coord: Coord) -> Self {
        TrackedCell {
            coord,
            parent: None,
            traveling_cost: 0,
            heuristic_cost: 0,
            sequence: 0,
        }
    }

    fn priority(&self) -> usize {
        self.traveling_cost + self.heuristic_cost
    }

    /// Walks the parent chain back to the root and returns the path root-first.
    fn into_path(self) -> Path {
        let mut path = vec![self.coord];
        let mut parent = self.parent;
        while let Some(cell) = parent {
            path.push(cell.coord);
            parent = cell.parent.clone();
        }
        path.reverse();
        path
    }
}

// Ordered so that the smaller cell is the one to expand first; wrap in `Reverse` for a
// min-heap. Ties on priority prefer the cell nearer the goal, then the older entry.
impl Ord for TrackedCell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority()
            .cmp(&other.priority())
            .then(self.heuristic_cost.cmp(&other.heuristic_cost))
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for TrackedCell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TrackedCell {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TrackedCell {}

/// Cost of stepping onto `to`. Every open cell costs the same today.
fn step_cost(grid: &Grid, to: Coord) -> usize {
    debug_assert!(grid.is_open(to));
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Bfs,
    Dfs,
    UniformCost,
    AStar,
    Bidirectional,
}

impl Solver {
    pub const ALL: [Solver; 5] = [
        Solver::Bfs,
        Solver::Dfs,
        Solver::UniformCost,
        Solver::AStar,
        Solver::Bidirectional,
    ];
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::UniformCost => write!(f, "Uniform-Cost Search (UCS)"),
            Solver::AStar => write!(f, "A* Search"),
            Solver::Bidirectional => write!(f, "Bidirectional Search"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Solver::Bfs),
            "dfs" => Ok(Solver::Dfs),
            "ucs" | "dijkstra" => Ok(Solver::UniformCost),
            "a*" | "astar" => Ok(Solver::AStar),
            "bidirectional" => Ok(Solver::Bidirectional),
            _ => Err(MazeError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// The path found, or `None` if `end` cannot be reached.
    pub path: Option<Path>,
    /// Number of distinct cells taken off the frontier and expanded.
    pub expanded: usize,
}

/// Runs a search and reports the path together with how much work it took.
///
/// Walls are impassable. A start or end that is itself a wall is unreachable.
/// Fails only when `start` or `end` lies outside the grid.
pub fn search(
    grid: &Grid,
    start: Coord,
    end: Coord,
    solver: Solver,
) -> Result<SearchReport, MazeError> {
    grid.get(start)?;
    grid.get(end)?;

    let report = if !grid.is_open(start) || !grid.is_open(end) {
        SearchReport {
            path: None,
            expanded: 0,
        }
    } else {
        match solver {
            Solver::Bfs => solve_bfs(grid, start, end),
            Solver::Dfs => solve_dfs(grid, start, end),
            Solver::UniformCost => solve_uniform_cost(grid, start, end),
            Solver::AStar => solve_astar(grid, start, end),
            Solver::Bidirectional => solve_bidirectional(grid, start, end),
        }
    };

    tracing::debug!(
        "[solve] {} from {:?} to {:?}: {} after expanding {} cells",
        solver,
        start,
        end,
        match &report.path {
            Some(path) => format!("{} steps", crate::maze::path_len(path)),
            None => "unreachable".to_string(),
        },
        report.expanded
    );
    Ok(report)
}

/// Finds a path from `start` to `end`; `Ok(None)` means the end is unreachable.
pub fn solve(
    grid: &Grid,
    start: Coord,
    end: Coord,
    solver: Solver,
) -> Result<Option<Path>, MazeError> {
    search(grid, start, end, solver).map(|report| report.path)
}
