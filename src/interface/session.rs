//! The interaction state machine. A [`Session`] owns one game together with
//! its interaction state and turns pointer events into board mutations and
//! drawing commands.
//!
//! ```text
//!            hover (any square): preview, state unchanged
//!          ┌────┐
//!          │    ▼
//!        ┌──────┐  click on piece   ┌───────────────┐
//!        │ Idle │ ────────────────▶ │ PieceSelected │
//!        └──────┘ ◀──────────────── └───────────────┘
//!                  click anywhere: move if the square is
//!                  highlighted, then clear highlights
//! ```
//!
//! Events are processed one at a time and each handler runs to completion, so
//! no synchronization is needed. Independent sessions share nothing.

use crate::chess::board::Highlight;
use crate::chess::core::Square;
use crate::chess::game::Game;
use crate::chess::piece::Piece;
use crate::chess::registry::PieceId;
use crate::interface::highlight::{self, Target};
use crate::interface::render::{Intensity, Renderer, Visual};

/// Pointer actions reported by the UI surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// The pointer entered a square.
    Hover(Square),
    /// A square was clicked.
    Click(Square),
}

/// Where the interaction currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    /// Nothing is selected: hovering previews, clicking a piece selects it.
    #[default]
    Idle,
    /// A piece is selected and its destinations are highlighted.
    PieceSelected(PieceId),
}

/// A single game session driving a [`Renderer`].
#[derive(Debug)]
pub struct Session<R: Renderer> {
    game: Game,
    state: InteractionState,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    /// Starts a session and paints the bare checkerboard.
    pub fn new(game: Game, renderer: R) -> Self {
        let mut session = Self {
            game,
            state: InteractionState::Idle,
            renderer,
        };
        session.clear_highlights();
        session
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn state(&self) -> InteractionState {
        self.state
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The selected piece, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Piece> {
        match self.state {
            InteractionState::Idle => None,
            InteractionState::PieceSelected(id) => Some(self.game.piece(id)),
        }
    }

    /// Dispatches an event to its handler.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Hover(square) => self.on_hover(square),
            Event::Click(square) => self.on_click(square),
        }
    }

    /// While idle, previews the destinations of the hovered piece or clears
    /// the board if the square is empty. Ignored while a piece is selected.
    pub fn on_hover(&mut self, square: Square) {
        if self.state != InteractionState::Idle {
            return;
        }
        match self.game.board().occupant(square) {
            Some(id) => {
                let _ = self.display_targets(id, Intensity::Soft);
            },
            None => self.clear_highlights(),
        }
    }

    /// While idle, selects the clicked piece (clicking an empty square does
    /// nothing). While a piece is selected, moves it if the clicked square is
    /// highlighted and in any case clears highlights and returns to idle.
    pub fn on_click(&mut self, square: Square) {
        match self.state {
            InteractionState::Idle => {
                if let Some(id) = self.game.board().occupant(square) {
                    let targets = self.display_targets(id, Intensity::Hard);
                    self.state = InteractionState::PieceSelected(id);
                    log::debug!(
                        "selected {} with {} destinations",
                        self.game.piece(id),
                        targets.len()
                    );
                }
            },
            InteractionState::PieceSelected(id) => {
                match self.game.board().highlight(square) {
                    Highlight::None => {
                        log::debug!("{square} is not a destination, deselecting");
                    },
                    Highlight::Movable | Highlight::Attackable => {
                        let _ = self.game.make_move(id, square);
                    },
                }
                self.clear_highlights();
                self.state = InteractionState::Idle;
            },
        }
    }

    /// Restores the checkerboard and resets every highlight state.
    /// Idempotent.
    pub fn clear_highlights(&mut self) {
        self.game.board_mut().clear_highlights();
        for square in Square::iter() {
            self.renderer.set_square_visual(square, Visual::base(square));
            self.renderer.set_square_highlight(square, Highlight::None);
        }
    }

    /// Highlights the destinations of a piece. Hard highlighting also records
    /// the highlight state which decides where the next click goes; soft
    /// highlighting is purely cosmetic.
    fn display_targets(&mut self, id: PieceId, intensity: Intensity) -> Vec<Target> {
        let targets = highlight::targets(&self.game, id);
        self.clear_highlights();
        for target in &targets {
            if let Some(visual) = Visual::highlighted(target.highlight, intensity) {
                self.renderer.set_square_visual(target.square, visual);
            }
            if intensity == Intensity::Hard {
                self.game
                    .board_mut()
                    .set_highlight(target.square, target.highlight);
                self.renderer
                    .set_square_highlight(target.square, target.highlight);
            }
        }
        targets
    }
}
