use std::time::Duration;

use crate::error::MazeError;
use crate::maze::{Coord, Grid};
use crate::router::estimate_total_distance;

/// Size and pacing of one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelConfig {
    pub name: &'static str,
    pub cols: u16,
    pub rows: u16,
    /// Time allowed to finish the level
    pub time_limit: Duration,
    /// Slack added on top of the estimated step count
    pub extra_steps: usize,
    /// Number of waypoints to scatter
    pub waypoints: usize,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::PRESETS[0].clone()
    }
}

impl LevelConfig {
    pub const PRESETS: [LevelConfig; 3] = [
        LevelConfig {
            name: "Level 1",
            cols: 13,
            rows: 7,
            time_limit: Duration::from_secs(30),
            extra_steps: 10,
            waypoints: 3,
        },
        LevelConfig {
            name: "Level 2",
            cols: 19,
            rows: 13,
            time_limit: Duration::from_secs(90),
            extra_steps: 5,
            waypoints: 3,
        },
        LevelConfig {
            name: "Level 3",
            cols: 25,
            rows: 19,
            time_limit: Duration::from_secs(75),
            extra_steps: 3,
            waypoints: 3,
        },
    ];

    /// The preset for a 1-based level number.
    pub fn level(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::PRESETS.get(idx))
            .cloned()
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        Grid::check_dimensions(self.cols, self.rows)
    }

    /// Steps the player may take: the greedy distance estimate plus this level's slack.
    pub fn step_budget(
        &self,
        grid: &Grid,
        start: Coord,
        waypoints: &[Coord],
        goal: Coord,
    ) -> Result<Option<usize>, MazeError> {
        let estimate = estimate_total_distance(grid, start, waypoints, goal)?;
        Ok(estimate.map(|steps| steps + self.extra_steps))
    }
}
