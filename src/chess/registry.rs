//! Piece store: a flat collection of [`Piece`] records with constant-time
//! lookup by `(team, kind, ordinal)`.

use std::collections::HashMap;

use crate::chess::core::{PieceKind, Square, Team};
use crate::chess::piece::{Piece, PieceKey};

/// Stable handle of a piece within a [`Registry`]. Board cells refer to their
/// occupants through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(usize);

/// Owns all pieces of a game. Captured pieces are removed from both the
/// store and the key index; their slot is never reused so stale handles can
/// not alias a different piece.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    pieces: Vec<Option<Piece>>,
    index: HashMap<PieceKey, PieceId>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new piece with the lowest ordinal not yet taken by a live
    /// piece of the same team and kind.
    pub(crate) fn insert(
        &mut self,
        team: Team,
        kind: PieceKind,
        position: Square,
        has_moved: bool,
    ) -> PieceId {
        let key = (0..=u8::MAX)
            .map(|ordinal| PieceKey {
                team,
                kind,
                ordinal,
            })
            .find(|key| !self.index.contains_key(key))
            .unwrap_or_else(|| panic!("too many {team} {kind} pieces"));
        let id = PieceId(self.pieces.len());
        self.pieces.push(Some(Piece::new(key, position, has_moved)));
        let previous = self.index.insert(key, id);
        debug_assert!(previous.is_none());
        id
    }

    /// Removes a captured piece and returns it.
    ///
    /// # Panics
    ///
    /// Removing a piece twice is a programming error.
    pub(crate) fn remove(&mut self, id: PieceId) -> Piece {
        let piece = self.pieces[id.0]
            .take()
            .unwrap_or_else(|| panic!("piece {id:?} was already removed"));
        let removed = self.index.remove(&piece.key());
        debug_assert_eq!(removed, Some(id));
        piece
    }

    /// Returns the piece behind the handle.
    ///
    /// # Panics
    ///
    /// If the piece has been captured.
    #[must_use]
    pub fn get(&self, id: PieceId) -> &Piece {
        self.pieces[id.0]
            .as_ref()
            .unwrap_or_else(|| panic!("piece {id:?} is no longer on the board"))
    }

    pub(crate) fn get_mut(&mut self, id: PieceId) -> &mut Piece {
        self.pieces[id.0]
            .as_mut()
            .unwrap_or_else(|| panic!("piece {id:?} is no longer on the board"))
    }

    /// Looks a live piece up by its registry key.
    #[must_use]
    pub fn find(&self, team: Team, kind: PieceKind, ordinal: u8) -> Option<PieceId> {
        self.index
            .get(&PieceKey {
                team,
                kind,
                ordinal,
            })
            .copied()
    }

    /// Iterates over live pieces in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(index, piece)| piece.as_ref().map(|piece| (PieceId(index), piece)))
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ordinals_per_team_and_kind() {
        let mut registry = Registry::new();
        let first = registry.insert(Team::White, PieceKind::Rook, Square::new(0, 7), false);
        let second = registry.insert(Team::White, PieceKind::Rook, Square::new(7, 7), false);
        let black = registry.insert(Team::Black, PieceKind::Rook, Square::new(0, 0), false);
        assert_eq!(registry.get(first).ordinal(), 0);
        assert_eq!(registry.get(second).ordinal(), 1);
        assert_eq!(registry.get(black).ordinal(), 0);
        assert_eq!(registry.find(Team::White, PieceKind::Rook, 1), Some(second));
        assert_eq!(registry.find(Team::White, PieceKind::Rook, 2), None);
        assert_eq!(registry.iter().count(), 3);
    }

    #[test]
    fn removal() {
        let mut registry = Registry::new();
        let knight = registry.insert(Team::Black, PieceKind::Knight, Square::new(1, 0), false);
        let bishop = registry.insert(Team::Black, PieceKind::Bishop, Square::new(2, 0), false);
        assert_eq!(registry.remove(knight).kind(), PieceKind::Knight);
        assert_eq!(registry.find(Team::Black, PieceKind::Knight, 0), None);
        assert_eq!(
            registry.iter().map(|(id, _)| id).collect::<Vec<_>>(),
            vec![bishop]
        );
    }

    #[test]
    #[should_panic(expected = "is no longer on the board")]
    fn captured_piece_lookup() {
        let mut registry = Registry::new();
        let queen = registry.insert(Team::White, PieceKind::Queen, Square::new(3, 7), false);
        let _ = registry.remove(queen);
        let _ = registry.get(queen);
    }
}
