//! Outbound boundary towards whatever draws the board. The session never
//! draws anything itself: it tells a [`Renderer`] which visual class and which
//! highlight state each square should show.

use std::fmt::Write;

use crate::chess::board::Highlight;
use crate::chess::core::{PieceKind, Square, Team, BOARD_WIDTH};
use crate::chess::game::Game;

/// How a square is painted. Selecting a piece produces full-saturation
/// classes, hovering over one produces the muted preview classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visual {
    /// Base checkerboard color of a light square.
    Light,
    /// Base checkerboard color of a dark square.
    Dark,
    /// Destination of the selected piece (green).
    Movable,
    /// Capture available to the selected piece (red).
    Attackable,
    /// Destination of the hovered piece (grey).
    PreviewMovable,
    /// Capture available to the hovered piece (dark red).
    PreviewAttackable,
}

impl Visual {
    /// Checkerboard class of the square.
    #[must_use]
    pub const fn base(square: Square) -> Self {
        if square.is_dark() {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Class of a highlighted square for the given intensity.
    #[must_use]
    pub const fn highlighted(highlight: Highlight, intensity: Intensity) -> Option<Self> {
        match (highlight, intensity) {
            (Highlight::None, _) => None,
            (Highlight::Movable, Intensity::Hard) => Some(Self::Movable),
            (Highlight::Attackable, Intensity::Hard) => Some(Self::Attackable),
            (Highlight::Movable, Intensity::Soft) => Some(Self::PreviewMovable),
            (Highlight::Attackable, Intensity::Soft) => Some(Self::PreviewAttackable),
        }
    }

    /// Single-character marker used by the text front-end.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Light => ' ',
            Self::Dark => '#',
            Self::Movable => '*',
            Self::Attackable => 'x',
            Self::PreviewMovable => '+',
            Self::PreviewAttackable => '?',
        }
    }
}

/// Highlight intensity: [`Intensity::Hard`] for a selected piece,
/// [`Intensity::Soft`] for a piece that is merely hovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intensity {
    #[allow(missing_docs)]
    Hard,
    #[allow(missing_docs)]
    Soft,
}

/// Consumer of the session's drawing commands.
pub trait Renderer {
    /// Paints `square` with the given class.
    fn set_square_visual(&mut self, square: Square, visual: Visual);
    /// Mirrors the highlight state of `square`.
    fn set_square_highlight(&mut self, square: Square, highlight: Highlight);
}

/// Sprite of a piece; the text front-end uses algebraic symbols.
#[must_use]
pub const fn sprite(team: Team, kind: PieceKind) -> char {
    kind.symbol(team)
}

/// In-memory renderer remembering the last command received for every
/// square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    visuals: [[Visual; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
    highlights: [[Highlight; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
}

impl Canvas {
    /// Creates a canvas showing the bare checkerboard.
    #[must_use]
    pub fn new() -> Self {
        let mut canvas = Self {
            visuals: [[Visual::Light; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
            highlights: [[Highlight::None; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
        };
        for square in Square::iter() {
            canvas.set_square_visual(square, Visual::base(square));
        }
        canvas
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn visual(&self, square: Square) -> Visual {
        self.visuals[usize::from(square.y())][usize::from(square.x())]
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn highlight(&self, square: Square) -> Highlight {
        self.highlights[usize::from(square.y())][usize::from(square.x())]
    }

    /// Squares currently painted with `visual`, row by row.
    #[must_use]
    pub fn squares_with(&self, visual: Visual) -> Vec<Square> {
        Square::iter()
            .filter(|&square| self.visual(square) == visual)
            .collect()
    }

    /// Draws the board: every square is the occupant sprite ('.' if empty)
    /// followed by the visual marker.
    #[must_use]
    pub fn render(&self, game: &Game) -> String {
        let mut result = String::new();
        for y in 0..BOARD_WIDTH {
            let mut line = String::new();
            for x in 0..BOARD_WIDTH {
                let square = Square::new(x, y);
                if x != 0 {
                    line.push(' ');
                }
                line.push(
                    game.piece_at(square)
                        .map_or('.', |piece| sprite(piece.team(), piece.kind())),
                );
                line.push(self.visual(square).marker());
            }
            let _ = writeln!(result, "{}", line.trim_end());
        }
        result
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for Canvas {
    fn set_square_visual(&mut self, square: Square, visual: Visual) {
        self.visuals[usize::from(square.y())][usize::from(square.x())] = visual;
    }

    fn set_square_highlight(&mut self, square: Square, highlight: Highlight) {
        self.highlights[usize::from(square.y())][usize::from(square.x())] = highlight;
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fresh_canvas_is_checkerboard() {
        let canvas = Canvas::new();
        assert_eq!(canvas.visual(Square::new(0, 0)), Visual::Dark);
        assert_eq!(canvas.visual(Square::new(1, 0)), Visual::Light);
        assert_eq!(canvas.visual(Square::new(0, 1)), Visual::Light);
        assert_eq!(canvas.visual(Square::new(7, 7)), Visual::Dark);
        assert_eq!(canvas.squares_with(Visual::Dark).len(), 32);
    }

    #[test]
    fn render_starting_position() {
        assert_eq!(
            Canvas::new().render(&Game::starting()),
            "r# n  b# q  k# b  n# r\n\
             p  p# p  p# p  p# p  p#\n\
             .# .  .# .  .# .  .# .\n\
             .  .# .  .# .  .# .  .#\n\
             .# .  .# .  .# .  .# .\n\
             .  .# .  .# .  .# .  .#\n\
             P# P  P# P  P# P  P# P\n\
             R  N# B  Q# K  B# N  R#\n"
        );
    }

    #[test]
    fn highlighted_classes() {
        assert_eq!(Visual::highlighted(Highlight::None, Intensity::Hard), None);
        assert_eq!(
            Visual::highlighted(Highlight::Attackable, Intensity::Soft),
            Some(Visual::PreviewAttackable)
        );
        assert_eq!(
            Visual::highlighted(Highlight::Movable, Intensity::Hard),
            Some(Visual::Movable)
        );
    }

    #[test]
    fn sprites() {
        assert_eq!(sprite(Team::White, PieceKind::Queen), 'Q');
        assert_eq!(sprite(Team::Black, PieceKind::Knight), 'n');
    }
}
