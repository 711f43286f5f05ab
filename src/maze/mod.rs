pub mod cell;
pub mod grid;

pub use cell::CellState;
pub use grid::Grid;

/// A `(x, y)` grid coordinate; `x` indexes columns and `y` rows.
pub type Coord = (u16, u16);

/// An ordered sequence of orthogonally adjacent open cells from a start to an end.
pub type Path = Vec<Coord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Number of moves along a path (a single-cell path has length 0).
pub fn path_len(path: &[Coord]) -> usize {
    path.len().saturating_sub(1)
}

/// Manhattan distance between two coordinates.
pub fn manhattan(a: Coord, b: Coord) -> usize {
    a.0.abs_diff(b.0) as usize + a.1.abs_diff(b.1) as usize
}

/// Checks that `path` runs from `start` to `end` through open cells, one orthogonal step at a time.
pub fn is_valid_path(grid: &Grid, path: &[Coord], start: Coord, end: Coord) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&end)
        && path.iter().all(|&c| grid.is_open(c))
        && path.windows(2).all(|w| manhattan(w[0], w[1]) == 1)
}
