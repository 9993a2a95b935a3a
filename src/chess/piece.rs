//! Individual pieces and the keys they are registered under.

use std::fmt;

use crate::chess::core::{PieceKind, Square, Team};
use crate::chess::movegen::{self, Rays};

/// Identifies a piece for its whole lifetime: the ordinal disambiguates pieces
/// of the same kind and team (e.g. rook #0 and rook #1) and never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceKey {
    #[allow(missing_docs)]
    pub team: Team,
    #[allow(missing_docs)]
    pub kind: PieceKind,
    #[allow(missing_docs)]
    pub ordinal: u8,
}

impl fmt::Display for PieceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} #{}", self.team, self.kind, self.ordinal)
    }
}

/// A piece on the board. Its position always matches the board cell holding
/// it: [`crate::chess::game::Game::make_move`] updates both together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    key: PieceKey,
    position: Square,
    /// Only meaningful for pawns: once set, the two-square advance is gone.
    has_moved: bool,
}

impl Piece {
    pub(crate) const fn new(key: PieceKey, position: Square, has_moved: bool) -> Self {
        Self {
            key,
            position,
            has_moved,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn key(&self) -> PieceKey {
        self.key
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn team(&self) -> Team {
        self.key.team
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.key.kind
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn ordinal(&self) -> u8 {
        self.key.ordinal
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn position(&self) -> Square {
        self.position
    }

    /// Whether a pawn has already used up its first move.
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Raw movement geometry of this piece, ignoring board occupancy.
    #[must_use]
    pub fn rays(&self) -> Rays {
        movegen::generate(self.kind(), self.team(), self.position, self.has_moved)
    }

    pub(crate) fn relocate(&mut self, destination: Square) {
        self.position = destination;
        if self.kind() == PieceKind::Pawn {
            self.has_moved = true;
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.position)
    }
}
