use crate::error::MazeError;
use crate::maze::{CellState, Coord, Grid};

/// What a generation step does to its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Carves an edge cell between two logical nodes.
    BreakWall,
    /// Opens a logical node.
    Path,
    /// Fills a cell back in (recursive division only).
    BuildWall,
}

impl StepKind {
    /// The state the target cell holds after the step.
    pub fn resulting_state(self) -> CellState {
        match self {
            StepKind::BreakWall | StepKind::Path => CellState::Path,
            StepKind::BuildWall => CellState::Wall,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationStep {
    pub x: u16,
    pub y: u16,
    pub kind: StepKind,
}

impl GenerationStep {
    pub fn coord(&self) -> Coord {
        (self.x, self.y)
    }

    /// The one state transition shared by live generation, batch replay and stepping.
    pub(crate) fn apply(&self, grid: &mut Grid) {
        grid.put(self.coord(), self.kind.resulting_state());
    }
}

/// The grid state a log must be replayed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialState {
    /// Every cell is a wall.
    Walls,
    /// Wall border around an open interior.
    OpenInterior,
}

/// Ordered, immutable record of every mutation a generator made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationLog {
    cols: u16,
    rows: u16,
    initial: InitialState,
    steps: Box<[GenerationStep]>,
}

impl GenerationLog {
    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn initial_state(&self) -> InitialState {
        self.initial
    }

    pub fn steps(&self) -> &[GenerationStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// A fresh grid in the state the first step expects.
    pub fn initial_grid(&self) -> Result<Grid, MazeError> {
        match self.initial {
            InitialState::Walls => Grid::new(self.cols, self.rows),
            InitialState::OpenInterior => Grid::with_open_interior(self.cols, self.rows),
        }
    }

    /// Applies every step in one batch to a fresh initial grid.
    pub fn replay(&self) -> Result<Grid, MazeError> {
        let mut grid = self.initial_grid()?;
        self.steps.iter().for_each(|step| step.apply(&mut grid));
        Ok(grid)
    }
}

/// Applies steps to a grid while recording them, so the finished log replays to the same grid.
pub(crate) struct Recorder {
    grid: Grid,
    initial: InitialState,
    steps: Vec<GenerationStep>,
}

impl Recorder {
    pub fn new(cols: u16, rows: u16, initial: InitialState) -> Result<Self, MazeError> {
        let grid = match initial {
            InitialState::Walls => Grid::new(cols, rows)?,
            InitialState::OpenInterior => Grid::with_open_interior(cols, rows)?,
        };
        Ok(Recorder {
            grid,
            initial,
            steps: Vec::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn record(&mut self, coord: Coord, kind: StepKind) {
        let step = GenerationStep {
            x: coord.0,
            y: coord.1,
            kind,
        };
        step.apply(&mut self.grid);
        self.steps.push(step);
    }

    /// Opens a logical node unless it is already open.
    pub fn open_node(&mut self, node: Coord) {
        if !self.grid[node].is_open() {
            self.record(node, StepKind::Path);
        }
    }

    /// Opens the edge between two orthogonally adjacent logical nodes: the `from` node if
    /// still closed, then the edge cell, then the `to` node if still closed.
    pub fn open_edge(&mut self, from: Coord, to: Coord) {
        self.open_node(from);
        self.record(edge_between(from, to), StepKind::BreakWall);
        self.open_node(to);
    }

    pub fn finish(self) -> (Grid, GenerationLog) {
        let log = GenerationLog {
            cols: self.grid.cols(),
            rows: self.grid.rows(),
            initial: self.initial,
            steps: self.steps.into_boxed_slice(),
        };
        (self.grid, log)
    }
}

/// The edge cell between two logical nodes that are two cells apart.
pub(crate) fn edge_between(a: Coord, b: Coord) -> Coord {
    (a.0.min(b.0) + a.0.abs_diff(b.0) / 2, a.1.min(b.1) + a.1.abs_diff(b.1) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_between() {
        assert_eq!(edge_between((1, 1), (3, 1)), (2, 1));
        assert_eq!(edge_between((3, 5), (3, 3)), (3, 4));
    }

    #[test]
    fn test_open_edge_is_idempotent_on_nodes() {
        let mut recorder = Recorder::new(7, 5, InitialState::Walls).unwrap();
        recorder.open_edge((1, 1), (3, 1));
        recorder.open_edge((3, 1), (5, 1));
        let (grid, log) = recorder.finish();
        let kinds = log.steps().iter().map(|s| s.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                StepKind::Path,
                StepKind::BreakWall,
                StepKind::Path,
                StepKind::BreakWall,
                StepKind::Path,
            ]
        );
        assert_eq!(grid.open_cells().count(), 5);
        assert_eq!(log.replay().unwrap(), grid);
    }

    #[test]
    fn test_build_wall_replays_against_open_interior() {
        let mut recorder = Recorder::new(5, 5, InitialState::OpenInterior).unwrap();
        recorder.record((2, 1), StepKind::BuildWall);
        recorder.record((2, 2), StepKind::BuildWall);
        let (grid, log) = recorder.finish();
        assert_eq!(log.initial_state(), InitialState::OpenInterior);
        assert_eq!(grid[(2, 1)], CellState::Wall);
        assert_eq!(grid[(2, 3)], CellState::Path);
        assert_eq!(log.replay().unwrap(), grid);
    }
}
