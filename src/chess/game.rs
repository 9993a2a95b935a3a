//! A game in progress: the board together with the pieces standing on it.
//!
//! [`Game::make_move`] is the only way to relocate pieces once the game is
//! set up and it keeps the board and the piece records in sync.

use std::fmt;

use anyhow::bail;

use crate::chess::board::Board;
use crate::chess::core::{PieceKind, Square, Team, BOARD_WIDTH};
use crate::chess::piece::Piece;
use crate::chess::registry::{PieceId, Registry};

/// Placement of the standard starting position, rank 8 first.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_ROW: [PieceKind; BOARD_WIDTH as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Board state plus the registry owning every piece on it.
#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
    registry: Registry,
}

impl Game {
    /// Creates the standard starting position: Black occupies rows 0 and 1,
    /// White rows 6 and 7, with ordinals assigned left to right.
    ///
    /// ```
    /// use kibitz::chess::game::{Game, STARTING_PLACEMENT};
    ///
    /// let game = Game::starting();
    /// assert_eq!(game.to_string(), STARTING_PLACEMENT);
    /// assert_eq!(game.pieces().count(), 32);
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut game = Self::empty();
        for team in [Team::Black, Team::White] {
            for (x, kind) in (0..BOARD_WIDTH).zip(BACK_ROW) {
                let _ = game.place(team, kind, Square::new(x, team.back_row()));
            }
            for x in 0..BOARD_WIDTH {
                let _ = game.place(team, PieceKind::Pawn, Square::new(x, team.pawn_row()));
            }
        }
        game
    }

    /// Creates a board without any pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the piece placement field of [Forsyth-Edwards Notation]: ranks
    /// separated by '/' starting from rank 8, digits for runs of empty
    /// squares. Pawns standing anywhere but their starting row have already
    /// spent their first move.
    ///
    /// # Errors
    ///
    /// If the placement is malformed.
    ///
    /// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    pub fn from_placement(input: &str) -> anyhow::Result<Self> {
        let placement = input.trim();
        let mut game = Self::empty();
        let mut y: u8 = 0;
        for row in placement.split('/') {
            if y == BOARD_WIDTH {
                bail!("incorrect placement: expected 8 ranks, got {placement}");
            }
            let mut x: u8 = 0;
            for symbol in row.chars() {
                if x >= BOARD_WIDTH {
                    bail!("incorrect placement: rank {row} is longer than {BOARD_WIDTH}");
                }
                match symbol {
                    '0' => bail!("increment can not be 0"),
                    '1'..='8' => {
                        x += symbol as u8 - b'0';
                        continue;
                    },
                    _ => (),
                }
                let (team, kind) = PieceKind::from_symbol(symbol)?;
                let square = Square::new(x, y);
                let has_moved = kind == PieceKind::Pawn && y != team.pawn_row();
                let _ = game.insert(team, kind, square, has_moved);
                x += 1;
            }
            if x != BOARD_WIDTH {
                bail!(
                    "incorrect placement: rank size should be exactly {BOARD_WIDTH}, got {row} of length {x}"
                );
            }
            y += 1;
        }
        if y != BOARD_WIDTH {
            bail!("incorrect placement: there should be 8 ranks, got {placement}");
        }
        Ok(game)
    }

    /// Puts a new piece on an empty square.
    ///
    /// # Panics
    ///
    /// If the square is already occupied.
    pub fn place(&mut self, team: Team, kind: PieceKind, square: Square) -> PieceId {
        self.insert(team, kind, square, false)
    }

    fn insert(&mut self, team: Team, kind: PieceKind, square: Square, has_moved: bool) -> PieceId {
        let id = self.registry.insert(team, kind, square, has_moved);
        self.board.put(square, id);
        id
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// # Panics
    ///
    /// If the piece has been captured.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        self.registry.get(id)
    }

    /// The piece standing on `square`, if any.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.board.occupant(square).map(|id| self.registry.get(id))
    }

    /// Looks a live piece up by team, kind and ordinal.
    #[must_use]
    pub fn find(&self, team: Team, kind: PieceKind, ordinal: u8) -> Option<PieceId> {
        self.registry.find(team, kind, ordinal)
    }

    /// Iterates over live pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.registry.iter()
    }

    /// Moves a piece to `destination`, removing whatever enemy piece stood
    /// there. The origin cell is emptied, the destination cell points at the
    /// moved piece and the piece records its new position. A pawn loses its
    /// two-square advance for good. Returns the captured piece.
    ///
    /// No chess legality is checked here: callers only move to squares
    /// produced by [`crate::interface::highlight::targets`].
    ///
    /// # Panics
    ///
    /// Capturing a friendly piece or a king is a programming error.
    pub fn make_move(&mut self, id: PieceId, destination: Square) -> Option<Piece> {
        let piece = self.registry.get(id);
        let (team, origin) = (piece.team(), piece.position());
        assert_ne!(origin, destination, "{piece} can't move onto itself");
        let captured = self.board.occupant(destination).map(|victim| {
            let _ = self.board.take(destination);
            self.registry.remove(victim)
        });
        if let Some(captured) = &captured {
            assert_ne!(captured.team(), team, "{captured} can't be captured by its own team");
            assert_ne!(captured.kind(), PieceKind::King, "kings can't be captured");
            log::debug!("{captured} captured");
        }
        let moved = self.board.take(origin);
        debug_assert_eq!(moved, id);
        self.board.put(destination, id);
        self.registry.get_mut(id).relocate(destination);
        log::debug!("{} moved from {origin}", self.registry.get(id));
        captured
    }

    /// Counts live pieces of the given team.
    #[must_use]
    pub fn count(&self, team: Team) -> usize {
        self.pieces().filter(|(_, piece)| piece.team() == team).count()
    }
}

impl TryFrom<&str> for Game {
    type Error = anyhow::Error;

    fn try_from(input: &str) -> anyhow::Result<Self> {
        match input.trim() {
            "startpos" => Ok(Self::starting()),
            placement => Self::from_placement(placement),
        }
    }
}

impl fmt::Display for Game {
    /// Prints the piece placement in FEN format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_WIDTH {
            let mut empty_squares = 0;
            for x in 0..BOARD_WIDTH {
                if let Some(piece) = self.piece_at(Square::new(x, y)) {
                    if empty_squares != 0 {
                        write!(f, "{empty_squares}")?;
                        empty_squares = 0;
                    }
                    write!(f, "{}", piece.kind().symbol(piece.team()))?;
                } else {
                    empty_squares += 1;
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if y + 1 != BOARD_WIDTH {
                const RANK_SEPARATOR: char = '/';
                write!(f, "{RANK_SEPARATOR}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(square: &str) -> Square {
        Square::try_from(square).unwrap()
    }

    #[test]
    fn starting_position() {
        let game = Game::starting();
        assert_eq!(game.to_string(), STARTING_PLACEMENT);
        assert_eq!(game.count(Team::White), 16);
        assert_eq!(game.count(Team::Black), 16);
        for y in 0..BOARD_WIDTH {
            for x in 0..BOARD_WIDTH {
                assert_eq!(
                    game.board().occupant(Square::new(x, y)).is_some(),
                    y <= 1 || y >= 6
                );
            }
        }
    }

    #[test]
    fn starting_ordinals() {
        let game = Game::starting();
        let rook = game.find(Team::White, PieceKind::Rook, 1).unwrap();
        assert_eq!(game.piece(rook).position(), at("h1"));
        let knight = game.find(Team::Black, PieceKind::Knight, 0).unwrap();
        assert_eq!(game.piece(knight).position(), at("b8"));
        let pawn = game.find(Team::White, PieceKind::Pawn, 4).unwrap();
        assert_eq!(game.piece(pawn).position(), at("e2"));
        assert!(!game.piece(pawn).has_moved());
        assert_eq!(game.find(Team::White, PieceKind::Queen, 1), None);
        let king = game.find(Team::Black, PieceKind::King, 0).unwrap();
        assert_eq!(game.piece(king).position(), at("e8"));
    }

    #[test]
    fn positions_match_board() {
        let game = Game::starting();
        for (id, piece) in game.pieces() {
            assert_eq!(game.board().occupant(piece.position()), Some(id));
        }
    }

    #[test]
    fn placement_roundtrip() {
        for placement in [
            STARTING_PLACEMENT,
            "8/8/8/8/8/8/8/8",
            "r3k3/5p2/2p5/p7/P3r3/2N2n2/1PP2P2/2K2B2",
            "4k3/8/8/3Pp3/8/8/8/R3K2R",
        ] {
            assert_eq!(Game::from_placement(placement).unwrap().to_string(), placement);
        }
    }

    #[test]
    fn startpos_or_placement() {
        assert_eq!(
            Game::try_from("startpos").unwrap().to_string(),
            STARTING_PLACEMENT
        );
        assert_eq!(
            Game::try_from(" 4k3/8/8/8/8/8/8/4K3\n").unwrap().to_string(),
            "4k3/8/8/8/8/8/8/4K3"
        );
        assert!(Game::try_from("start").is_err());
    }

    #[test]
    fn placed_pawns_off_starting_row_have_moved() {
        let game = Game::from_placement("4k3/8/8/3Pp3/8/8/4P3/4K3").unwrap();
        assert!(game.piece_at(at("d5")).unwrap().has_moved());
        assert!(game.piece_at(at("e5")).unwrap().has_moved());
        assert!(!game.piece_at(at("e2")).unwrap().has_moved());
    }

    #[test]
    fn incorrect_placements() {
        assert!(Game::from_placement("8/8/8/8/8/8/8").is_err());
        assert!(Game::from_placement("8/8/8/8/8/8/8/8/8").is_err());
        assert!(Game::from_placement("9/8/8/8/8/8/8/8").is_err());
        assert!(Game::from_placement("7/8/8/8/8/8/8/8").is_err());
        assert!(Game::from_placement("0p7/8/8/8/8/8/8/8").is_err());
        assert!(Game::from_placement("x7/8/8/8/8/8/8/8").is_err());
        assert!(Game::from_placement("ppppppppp/8/8/8/8/8/8/8").is_err());
    }

    #[test]
    fn quiet_move() {
        let mut game = Game::starting();
        let pawn = game.board().occupant(at("e2")).unwrap();
        assert_eq!(game.make_move(pawn, at("e4")), None);
        assert_eq!(game.board().occupant(at("e2")), None);
        assert_eq!(game.board().occupant(at("e4")), Some(pawn));
        assert_eq!(game.piece(pawn).position(), at("e4"));
        assert!(game.piece(pawn).has_moved());
        assert_eq!(
            game.to_string(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"
        );
    }

    #[test]
    fn capture() {
        let mut game = Game::from_placement("4k3/8/8/3p4/8/8/8/3QK3").unwrap();
        let queen = game.board().occupant(at("d1")).unwrap();
        let victim = game.board().occupant(at("d5")).unwrap();
        let captured = game.make_move(queen, at("d5")).unwrap();
        assert_eq!(captured.kind(), PieceKind::Pawn);
        assert_eq!(captured.team(), Team::Black);
        assert_eq!(game.count(Team::Black), 1);
        assert!(game.pieces().all(|(id, _)| id != victim));
        assert!(game
            .pieces()
            .all(|(id, piece)| piece.position() != at("d5") || id == queen));
        assert_eq!(game.find(Team::Black, PieceKind::Pawn, 0), None);
    }

    #[test]
    #[should_panic(expected = "can't be captured by its own team")]
    fn friendly_capture() {
        let mut game = Game::starting();
        let rook = game.board().occupant(at("a1")).unwrap();
        let _ = game.make_move(rook, at("a2"));
    }

    #[test]
    #[should_panic(expected = "kings can't be captured")]
    fn king_capture() {
        let mut game = Game::from_placement("4k3/8/8/8/8/8/8/4RK2").unwrap();
        let rook = game.board().occupant(at("e1")).unwrap();
        let _ = game.make_move(rook, at("e8"));
    }
}
