use thiserror::Error;

/// Errors raised by maze construction and queries.
///
/// Failing to find a route is not an error: solvers and the router report it as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Both dimensions must be odd and at least [`crate::maze::Grid::MIN_SIDE`].
    #[error("invalid maze dimensions {cols}x{rows}: both sides must be odd and at least 5")]
    InvalidDimensions { cols: u16, rows: u16 },
    /// A coordinate outside `[0, cols) x [0, rows)` was used.
    #[error("coordinate {coord:?} is out of bounds for a {cols}x{rows} grid")]
    OutOfBounds {
        coord: (u16, u16),
        cols: u16,
        rows: u16,
    },
    /// Start and end must be two distinct open cells at odd coordinates.
    #[error("coordinate {coord:?} cannot be an endpoint: it must be a distinct open node at odd coordinates")]
    InvalidEndpoint { coord: (u16, u16) },
    /// An algorithm name that matches no generator or solver.
    #[error("unknown algorithm name: {0}")]
    UnknownAlgorithm(String),
}
