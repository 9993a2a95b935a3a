//! Turns raw piece geometry into displayable destinations by walking every ray
//! against the board and stopping at the first obstruction.
//!
//! - An empty square is a destination and the walk continues.
//! - A friendly piece stops the ray; its square is not a destination.
//! - An enemy piece stops the ray; its square can be captured on unless it
//!   holds a king (kings are never captured) or the moving piece is a pawn
//!   advancing straight ahead.
//!
//! Pawn captures are looked up separately on the two forward diagonals.

use crate::chess::board::Highlight;
use crate::chess::core::{PieceKind, Square, Team};
use crate::chess::game::Game;
use crate::chess::movegen;
use crate::chess::piece::Piece;
use crate::chess::registry::PieceId;

/// A square the piece can go to and what happens when it does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    #[allow(missing_docs)]
    pub square: Square,
    /// Either [`Highlight::Movable`] or [`Highlight::Attackable`].
    pub highlight: Highlight,
}

/// Computes every destination of the piece in ray order, pawn captures last.
#[must_use]
pub fn targets(game: &Game, id: PieceId) -> Vec<Target> {
    let piece = game.piece(id);
    let mut result = Vec::new();
    for ray in piece.rays() {
        for square in ray {
            match game.piece_at(square) {
                None => result.push(Target {
                    square,
                    highlight: Highlight::Movable,
                }),
                Some(blocker) => {
                    if piece.kind() != PieceKind::Pawn && capturable(blocker, piece.team()) {
                        result.push(Target {
                            square,
                            highlight: Highlight::Attackable,
                        });
                    }
                    break;
                },
            }
        }
    }
    if piece.kind() == PieceKind::Pawn {
        for square in movegen::pawn_attacks(piece.team(), piece.position()) {
            if game
                .piece_at(square)
                .is_some_and(|victim| capturable(victim, piece.team()))
            {
                result.push(Target {
                    square,
                    highlight: Highlight::Attackable,
                });
            }
        }
    }
    log::trace!("{piece} has {} targets", result.len());
    result
}

fn capturable(victim: &Piece, attacker: Team) -> bool {
    victim.team() != attacker && victim.kind() != PieceKind::King
}
