use crate::error::MazeError;
use crate::maze::Grid;

use super::log::{GenerationLog, GenerationStep};

/// Steps through a [`GenerationLog`] one record at a time.
///
/// The grid starts in the log's declared initial state and only ever changes by applying the
/// next record, so a fully advanced playback matches [`GenerationLog::replay`].
pub struct Playback {
    log: GenerationLog,
    grid: Grid,
    /// Index of the next step to apply. Always between 0 and `log.len()`.
    current_step: usize,
}

impl Playback {
    pub fn new(log: GenerationLog) -> Result<Self, MazeError> {
        let grid = log.initial_grid()?;
        Ok(Playback {
            log,
            grid,
            current_step: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn log(&self) -> &GenerationLog {
        &self.log
    }

    /// Number of steps applied so far.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.log.len()
    }

    pub fn is_finished(&self) -> bool {
        self.current_step >= self.log.len()
    }

    /// The step the next call to [`Playback::apply_next_step`] will apply.
    pub fn peek(&self) -> Option<&GenerationStep> {
        self.log.steps().get(self.current_step)
    }

    /// Applies one step and returns whether more steps remain.
    /// Does nothing and returns `false` once the log is exhausted.
    pub fn apply_next_step(&mut self) -> bool {
        match self.log.steps().get(self.current_step) {
            None => false,
            Some(step) => {
                step.apply(&mut self.grid);
                self.current_step += 1;
                !self.is_finished()
            }
        }
    }

    /// Applies every remaining step.
    pub fn finish(&mut self) {
        while self.apply_next_step() {}
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
