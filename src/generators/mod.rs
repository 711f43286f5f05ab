use rand::{Rng, SeedableRng, rngs::StdRng};

mod binary_tree;
mod dfs;
mod kruskal;
pub mod log;
pub mod playback;
mod recur_div;
mod wilson;

use binary_tree::binary_tree;
use dfs::randomized_dfs;
use kruskal::randomized_kruskal;
use recur_div::recursive_division;
use wilson::wilson;

pub use log::{GenerationLog, GenerationStep, InitialState, StepKind};
pub use playback::Playback;

use crate::error::MazeError;
use crate::maze::{Coord, Grid};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    Dfs,
    Kruskal,
    BinaryTree,
    Wilson,
    RecurDiv,
}

impl Generator {
    pub const ALL: [Generator; 5] = [
        Generator::Dfs,
        Generator::Kruskal,
        Generator::BinaryTree,
        Generator::Wilson,
        Generator::RecurDiv,
    ];

    /// The grid state this generator's log starts from.
    pub fn initial_state(self) -> InitialState {
        match self {
            Generator::RecurDiv => InitialState::OpenInterior,
            _ => InitialState::Walls,
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Dfs => write!(f, "Randomized Depth-First Search (DFS)"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
            Generator::BinaryTree => write!(f, "Binary Tree"),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
            Generator::RecurDiv => write!(f, "Recursive Division"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "dfs" => Ok(Generator::Dfs),
            "kruskal" => Ok(Generator::Kruskal),
            "binary_tree" => Ok(Generator::BinaryTree),
            "wilson" => Ok(Generator::Wilson),
            "recursive_division" => Ok(Generator::RecurDiv),
            _ => Err(MazeError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Builds a maze of `cols x rows` cells with the chosen algorithm.
///
/// Returns the finished grid together with the log that reproduces it from
/// [`Generator::initial_state`]. Start and end are left for the caller to assign.
pub fn generate_maze<R: Rng + ?Sized>(
    cols: u16,
    rows: u16,
    generator: Generator,
    rng: &mut R,
) -> Result<(Grid, GenerationLog), MazeError> {
    let mut recorder = log::Recorder::new(cols, rows, generator.initial_state())?;
    match generator {
        Generator::Dfs => randomized_dfs(&mut recorder, rng),
        Generator::Kruskal => randomized_kruskal(&mut recorder, rng),
        Generator::BinaryTree => binary_tree(&mut recorder, rng),
        Generator::Wilson => wilson(&mut recorder, rng),
        Generator::RecurDiv => recursive_division(&mut recorder, rng),
    }
    let (grid, log) = recorder.finish();
    tracing::debug!(
        "[generate] {} built a {}x{} maze in {} steps",
        generator,
        cols,
        rows,
        log.len()
    );
    Ok((grid, log))
}

/// Logical nodes (odd coordinates) of a grid in raster order.
fn logical_nodes(grid: &Grid) -> impl Iterator<Item = Coord> + use<> {
    let (cols, rows) = (grid.cols(), grid.rows());
    (1..rows)
        .step_by(2)
        .flat_map(move |y| (1..cols).step_by(2).map(move |x| (x, y)))
}

/// Number of logical nodes per row and per column.
fn node_dims(grid: &Grid) -> (u16, u16) {
    (grid.cols() / 2, grid.rows() / 2)
}

/// Dense index of a logical node, for per-node bookkeeping.
fn node_index(grid: &Grid, node: Coord) -> usize {
    let (node_cols, _) = node_dims(grid);
    (node.1 / 2) as usize * node_cols as usize + (node.0 / 2) as usize
}

/// Get the neighboring logical nodes of a node.
/// A neighbor is a node two cells away in a cardinal direction, scanned North, South, East, West.
fn node_neighbors(grid: &Grid, node: Coord) -> impl Iterator<Item = Coord> + use<> {
    let (x, y) = node;
    let (cols, rows) = (grid.cols(), grid.rows());
    [
        // Stepping onto the border row or column is as out of range as stepping past it
        (y > 1).then(|| (x, y - 2)),
        (y + 2 < rows - 1).then(|| (x, y + 2)),
        (x + 2 < cols - 1).then(|| (x + 2, y)),
        (x > 1).then(|| (x - 2, y)),
    ]
    .into_iter()
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::CellState;
    use quickcheck::{QuickCheck, TestResult};
    use std::collections::VecDeque;

    /// Checks that the open cells form a single tree that contains every logical node.
    fn is_perfect_maze(grid: &Grid) -> bool {
        let open = grid.open_cells().collect::<Vec<_>>();
        let Some(&first) = open.first() else {
            return false;
        };
        if !logical_nodes(grid).all(|n| grid[n].is_open()) {
            return false;
        }

        let mut seen = std::collections::HashSet::from([first]);
        let mut queue = VecDeque::from([first]);
        while let Some(cell) = queue.pop_front() {
            for next in grid.open_neighbors(cell) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        // Count each adjacency once, looking only South and East
        let edges = open
            .iter()
            .map(|&(x, y)| {
                [(x, y + 1), (x + 1, y)]
                    .into_iter()
                    .filter(|&c| grid.is_open(c))
                    .count()
            })
            .sum::<usize>();
        seen.len() == open.len() && edges + 1 == open.len()
    }

    #[test]
    fn test_logical_nodes() {
        let grid = Grid::new(7, 5).unwrap();
        let nodes = logical_nodes(&grid).collect::<Vec<_>>();
        assert_eq!(nodes, vec![(1, 1), (3, 1), (5, 1), (1, 3), (3, 3), (5, 3)]);
        assert_eq!(node_dims(&grid), (3, 2));
        assert_eq!(node_index(&grid, (5, 3)), 5);
    }

    #[test]
    fn test_node_neighbors() {
        let grid = Grid::new(7, 7).unwrap();
        let neighbors = node_neighbors(&grid, (3, 3)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(3, 1), (3, 5), (5, 3), (1, 3)]);
        let corner = node_neighbors(&grid, (1, 1)).collect::<Vec<_>>();
        assert_eq!(corner, vec![(1, 3), (3, 1)]);
        let corner = node_neighbors(&grid, (5, 5)).collect::<Vec<_>>();
        assert_eq!(corner, vec![(5, 3), (3, 5)]);
    }

    #[test]
    fn test_parse_generator() {
        assert_eq!("DFS".parse::<Generator>(), Ok(Generator::Dfs));
        assert_eq!("Binary_Tree".parse::<Generator>(), Ok(Generator::BinaryTree));
        assert_eq!(
            "Recursive_Division".parse::<Generator>(),
            Ok(Generator::RecurDiv)
        );
        assert_eq!(
            "prim".parse::<Generator>(),
            Err(MazeError::UnknownAlgorithm("prim".to_string()))
        );
    }

    #[test]
    fn test_rejects_invalid_dimensions() {
        let mut rng = rng_from_seed(Some(0));
        for generator in Generator::ALL {
            assert_eq!(
                generate_maze(8, 9, generator, &mut rng).unwrap_err(),
                MazeError::InvalidDimensions { cols: 8, rows: 9 }
            );
            assert!(generate_maze(3, 9, generator, &mut rng).is_err());
        }
    }

    #[test]
    fn test_every_generator_builds_perfect_maze() {
        for generator in Generator::ALL {
            for (cols, rows) in [(5, 5), (5, 9), (13, 7), (19, 13), (25, 19)] {
                for seed in 0..5 {
                    let mut rng = rng_from_seed(Some(seed));
                    let (grid, _) = generate_maze(cols, rows, generator, &mut rng).unwrap();
                    assert!(
                        is_perfect_maze(&grid),
                        "{} failed on {}x{} with seed {}",
                        generator,
                        cols,
                        rows,
                        seed
                    );
                }
            }
        }
    }

    #[test]
    fn test_border_stays_closed() {
        for generator in Generator::ALL {
            let mut rng = rng_from_seed(Some(11));
            let (grid, _) = generate_maze(15, 11, generator, &mut rng).unwrap();
            for y in 0..grid.rows() {
                for x in 0..grid.cols() {
                    if grid.is_boundary(x, y) {
                        assert_eq!(grid[(x, y)], CellState::Wall);
                    }
                }
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        for generator in Generator::ALL {
            let first = generate_maze(21, 15, generator, &mut rng_from_seed(Some(42))).unwrap();
            let second = generate_maze(21, 15, generator, &mut rng_from_seed(Some(42))).unwrap();
            assert_eq!(first, second, "{} is not deterministic", generator);
        }
    }

    #[test]
    fn test_log_replays_to_generated_grid() {
        for generator in Generator::ALL {
            let mut rng = rng_from_seed(Some(7));
            let (grid, log) = generate_maze(17, 11, generator, &mut rng).unwrap();
            assert_eq!(log.initial_state(), generator.initial_state());
            assert_eq!(log.replay().unwrap(), grid);

            let mut playback = Playback::new(log).unwrap();
            playback.finish();
            assert_eq!(playback.into_grid(), grid);
        }
    }

    #[test]
    fn quickcheck_random_mazes_are_perfect_and_replayable() {
        fn prop(seed: u64, half_cols: u8, half_rows: u8, choice: u8) -> TestResult {
            // Map arbitrary bytes onto odd sides between 5 and 41
            let cols = 5 + 2 * (half_cols % 19) as u16;
            let rows = 5 + 2 * (half_rows % 19) as u16;
            let generator = Generator::ALL[choice as usize % Generator::ALL.len()];
            let mut rng = rng_from_seed(Some(seed));
            let Ok((grid, log)) = generate_maze(cols, rows, generator, &mut rng) else {
                return TestResult::failed();
            };
            let mut playback = match Playback::new(log.clone()) {
                Ok(playback) => playback,
                Err(_) => return TestResult::failed(),
            };
            playback.finish();
            TestResult::from_bool(
                is_perfect_maze(&grid)
                    && log.replay().as_ref() == Ok(&grid)
                    && playback.grid() == &grid,
            )
        }
        QuickCheck::new()
            .tests(60)
            .quickcheck(prop as fn(u64, u8, u8, u8) -> TestResult);
    }
}
