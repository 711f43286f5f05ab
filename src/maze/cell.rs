use crossterm::style::{Color, Stylize};

use std::fmt;

/// State of a single grid cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Impassable material.
    #[default]
    Wall,
    /// An open cell that can be walked through.
    Path,
    /// The open cell a route starts from.
    Start,
    /// The open cell a route ends at.
    End,
}

impl CellState {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Whether the cell can be walked through.
    pub fn is_open(self) -> bool {
        self != CellState::Wall
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            CellState::Wall => "⬜".with(Color::White),
            CellState::Path => "  ".with(Color::Reset),
            CellState::Start => "🟩".with(Color::Green),
            CellState::End => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                CellState::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
