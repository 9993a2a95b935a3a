//! Square-centric board state: the authoritative answer to "what occupies
//! this square" and "which highlight state is this square in".

use std::fmt::{self, Write};

use crate::chess::core::{Square, BOARD_WIDTH};
use crate::chess::registry::PieceId;

/// Highlight state of a square. It decides what clicking the square does
/// while a piece is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    /// Not a destination of the selected piece.
    #[default]
    None,
    /// Empty square the selected piece can move to.
    Movable,
    /// Enemy-occupied square the selected piece can capture on.
    Attackable,
}

/// Contents of a single square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    occupant: Option<PieceId>,
    highlight: Highlight,
}

impl Cell {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn highlight(&self) -> Highlight {
        self.highlight
    }
}

/// The 8×8 grid of cells. Cells hold non-owning [`PieceId`] handles; the
/// pieces themselves live in [`crate::chess::registry::Registry`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
}

impl Board {
    /// Creates a board without pieces or highlights.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn cell(&self, square: Square) -> &Cell {
        &self.cells[usize::from(square.y())][usize::from(square.x())]
    }

    fn cell_mut(&mut self, square: Square) -> &mut Cell {
        &mut self.cells[usize::from(square.y())][usize::from(square.x())]
    }

    /// The piece standing on `square`, if any.
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<PieceId> {
        self.cell(square).occupant
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn highlight(&self, square: Square) -> Highlight {
        self.cell(square).highlight
    }

    pub(crate) fn set_highlight(&mut self, square: Square, highlight: Highlight) {
        self.cell_mut(square).highlight = highlight;
    }

    /// Resets every square to [`Highlight::None`].
    pub(crate) fn clear_highlights(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                cell.highlight = Highlight::None;
            }
        }
    }

    /// Puts a piece onto an empty square.
    ///
    /// # Panics
    ///
    /// Double-occupying a square is a programming error.
    pub(crate) fn put(&mut self, square: Square, piece: PieceId) {
        let cell = self.cell_mut(square);
        assert!(
            cell.occupant.is_none(),
            "can't put piece to already occupied square {square}"
        );
        cell.occupant = Some(piece);
    }

    /// Removes the piece standing on `square` and returns it.
    ///
    /// # Panics
    ///
    /// Taking a piece from an empty square is a programming error.
    pub(crate) fn take(&mut self, square: Square) -> PieceId {
        self.cell_mut(square)
            .occupant
            .take()
            .unwrap_or_else(|| panic!("can't take piece from empty square {square}"))
    }
}

impl fmt::Display for Board {
    /// Dumps occupancy and highlight state: '.' for empty squares, 'o' for
    /// occupied ones, '*' and 'x' for movable and attackable squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                f.write_char(match (cell.highlight, cell.occupant) {
                    (Highlight::Movable, _) => '*',
                    (Highlight::Attackable, _) => 'x',
                    (Highlight::None, Some(_)) => 'o',
                    (Highlight::None, None) => '.',
                })?;
                if x + 1 != usize::from(BOARD_WIDTH) {
                    f.write_char(' ')?;
                }
            }
            if y + 1 != usize::from(BOARD_WIDTH) {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}
