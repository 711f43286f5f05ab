use crate::error::MazeError;

use super::Coord;
use super::cell::CellState;

/// Rectangular cell storage with odd dimensions.
///
/// Logical maze nodes sit at odd coordinates; the even coordinates between them are the
/// material that generators carve or build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[CellState]>,
    cols: u16,
    rows: u16,
}

impl Grid {
    /// Smallest accepted side length.
    pub const MIN_SIDE: u16 = 5;

    /// Creates a grid where every cell is a wall.
    pub fn new(cols: u16, rows: u16) -> Result<Self, MazeError> {
        Self::filled(cols, rows, CellState::Wall)
    }

    /// Creates a grid with a wall border and an open interior.
    pub fn with_open_interior(cols: u16, rows: u16) -> Result<Self, MazeError> {
        let mut grid = Self::filled(cols, rows, CellState::Path)?;
        (0..rows).for_each(|y| {
            (0..cols).for_each(|x| {
                if grid.is_boundary(x, y) {
                    grid.put((x, y), CellState::Wall);
                }
            });
        });
        Ok(grid)
    }

    fn filled(cols: u16, rows: u16, cell: CellState) -> Result<Self, MazeError> {
        Self::check_dimensions(cols, rows)?;
        let data = vec![cell; cols as usize * rows as usize].into_boxed_slice();
        Ok(Grid { data, cols, rows })
    }

    /// Fails unless both sides are odd and at least [`Grid::MIN_SIDE`].
    pub fn check_dimensions(cols: u16, rows: u16) -> Result<(), MazeError> {
        let valid = |side: u16| side >= Self::MIN_SIDE && side % 2 == 1;
        if valid(cols) && valid(rows) {
            Ok(())
        } else {
            Err(MazeError::InvalidDimensions { cols, rows })
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// All cells in raster order (row by row).
    pub fn cells(&self) -> &[CellState] {
        &self.data
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.cols && coord.1 < self.rows
    }

    pub fn is_boundary(&self, x: u16, y: u16) -> bool {
        x == 0 || y == 0 || x == self.cols - 1 || y == self.rows - 1
    }

    /// Whether the coordinate is in bounds and not a wall.
    pub fn is_open(&self, coord: Coord) -> bool {
        self.is_in_bounds(coord) && self[coord].is_open()
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since cols and rows are u16 (assuming usize is at least 32 bits)
        y as usize * self.cols as usize + x as usize
    }

    fn check_bounds(&self, coord: Coord) -> Result<(), MazeError> {
        if self.is_in_bounds(coord) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                coord,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }

    pub fn get(&self, coord: Coord) -> Result<CellState, MazeError> {
        self.check_bounds(coord)?;
        Ok(self[coord])
    }

    pub fn set(&mut self, coord: Coord, cell: CellState) -> Result<(), MazeError> {
        self.check_bounds(coord)?;
        self.put(coord, cell);
        Ok(())
    }

    /// Unchecked write for coordinates the crate produced against this grid's dimensions.
    pub(crate) fn put(&mut self, coord: Coord, cell: CellState) {
        let idx = self.ravel_index(coord.0, coord.1);
        self.data[idx] = cell;
    }

    /// The up-to-four in-bounds orthogonal neighbors, scanned North, South, East, West.
    pub fn neighbors4(&self, coord: Coord) -> impl Iterator<Item = Coord> + use<> {
        let (x, y) = coord;
        let (cols, rows) = (self.cols, self.rows);
        [
            // NOTE: wrapping_sub maps 0 - 1 to u16::MAX and saturating_add caps at u16::MAX;
            // both land out of bounds because the largest dimension is u16::MAX.
            (x, y.wrapping_sub(1)),
            (x, y.saturating_add(1)),
            (x.saturating_add(1), y),
            (x.wrapping_sub(1), y),
        ]
        .into_iter()
        .filter(move |&(nx, ny)| x < cols && y < rows && nx < cols && ny < rows)
    }

    /// The open orthogonal neighbors of a cell, in the same scan order as [`Grid::neighbors4`].
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors4(coord).filter(|&c| self[c].is_open())
    }

    /// Coordinates of every open cell in raster order.
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(|&c| self[c].is_open())
    }

    fn coords(&self) -> impl DoubleEndedIterator<Item = Coord> + use<> {
        let (cols, rows) = (self.cols, self.rows);
        (0..rows).flat_map(move |y| (0..cols).map(move |x| (x, y)))
    }

    /// The first cell with the given state in raster order.
    pub fn find(&self, state: CellState) -> Option<Coord> {
        self.coords().find(|&c| self[c] == state)
    }

    /// Default endpoints after generation: the first `Path` cell in raster order as start
    /// and the last `Path` cell in reverse raster order as end.
    pub fn default_endpoints(&self) -> Option<(Coord, Coord)> {
        let start = self.find(CellState::Path)?;
        let end = self.coords().rev().find(|&c| self[c] == CellState::Path)?;
        (start != end).then_some((start, end))
    }

    /// Marks `start` and `end`, demoting any previous `Start`/`End` cell to `Path` so that
    /// exactly one of each exists afterwards.
    ///
    /// Both must be open logical nodes (odd coordinates) and must differ; nothing changes
    /// on error.
    pub fn mark_endpoints(&mut self, start: Coord, end: Coord) -> Result<(), MazeError> {
        self.check_bounds(start)?;
        self.check_bounds(end)?;
        if start == end {
            return Err(MazeError::InvalidEndpoint { coord: end });
        }
        for coord in [start, end] {
            let is_node = coord.0 % 2 == 1 && coord.1 % 2 == 1;
            if !is_node || !self[coord].is_open() {
                return Err(MazeError::InvalidEndpoint { coord });
            }
        }
        self.data
            .iter_mut()
            .filter(|cell| matches!(cell, CellState::Start | CellState::End))
            .for_each(|cell| *cell = CellState::Path);
        self.put(start, CellState::Start);
        self.put(end, CellState::End);
        Ok(())
    }

    /// Prints the grid row by row to stdout.
    pub fn display(&self) {
        for y in 0..self.rows {
            for x in 0..self.cols {
                print!("{}", self[(x, y)]);
            }
            println!();
        }
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = CellState;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}
