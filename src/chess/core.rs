//! Chess primitives commonly used within [`crate::chess`]: board coordinates,
//! compass directions, teams and piece kinds.

use std::fmt;

use anyhow::{bail, Context};
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// A square of the board addressed by its column `x` and row `y`, both within
/// `0..BOARD_WIDTH`. Row 0 is the top of the board (Black's back rank) and row
/// 7 is the bottom (White's back rank):
///
/// ```
/// use kibitz::chess::core::Square;
///
/// assert_eq!(Square::new(4, 6).to_string(), "e2");
/// assert_eq!(Square::new(0, 7).to_string(), "a1");
/// assert_eq!(Square::try_from("h8").unwrap(), Square::new(7, 0));
/// assert_eq!(Square::try_from("4,6").unwrap(), Square::new(4, 6));
/// ```
///
/// Coordinates are fixed once the square is created.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    /// Connects column and row to form a full square.
    ///
    /// # Panics
    ///
    /// Coordinates outside of the board are a programming error.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(
            x < BOARD_WIDTH && y < BOARD_WIDTH,
            "square coordinates should be within 0..BOARD_WIDTH"
        );
        Self { x, y }
    }

    /// Column of the square, 0 is the leftmost one ('a' file).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row of the square, 0 is the topmost one (rank 8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Squares are dark when the sum of their coordinates is even. Both the
    /// initial board and every highlight reset use this parity.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.x + self.y) % 2 == 0
    }

    /// Returns the square `step` squares away in the given direction or
    /// `None` if it would leave the board.
    #[must_use]
    pub fn shift(self, direction: Direction, step: u8) -> Option<Self> {
        if !on_board(self, step, direction) {
            return None;
        }
        let (dx, dy) = direction.unit();
        let step = i8::try_from(step).ok()?;
        self.offset(dx * step, dy * step)
    }

    /// Returns the square displaced by an arbitrary `(dx, dy)` vector, or
    /// `None` if it is off the board. Used for knight jumps which do not
    /// follow any of the compass directions.
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = u8::try_from(i16::from(self.x) + i16::from(dx)).ok()?;
        let y = u8::try_from(i16::from(self.y) + i16::from(dy)).ok()?;
        if x >= BOARD_WIDTH || y >= BOARD_WIDTH {
            return None;
        }
        Some(Self { x, y })
    }

    /// Iterates over all squares row by row, starting from the top-left one.
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..BOARD_WIDTH)
            .cartesian_product(0..BOARD_WIDTH)
            .map(|(y, x)| Self { x, y })
    }

    fn from_coordinates(input: &str, x: &str, y: &str) -> anyhow::Result<Self> {
        let x: u8 = x
            .trim()
            .parse()
            .with_context(|| format!("column of \"{input}\" is not a number"))?;
        let y: u8 = y
            .trim()
            .parse()
            .with_context(|| format!("row of \"{input}\" is not a number"))?;
        if x >= BOARD_WIDTH || y >= BOARD_WIDTH {
            bail!("square coordinates should be within 0..BOARD_WIDTH, got \"{input}\"");
        }
        Ok(Self { x, y })
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    /// Parses either algebraic notation (`e2`) or raw `x,y` coordinates
    /// (`4,6`).
    ///
    /// # Errors
    ///
    /// If the input is neither of these or points outside of the board.
    fn try_from(square: &str) -> anyhow::Result<Self> {
        if let Some((x, y)) = square.split_once(',') {
            return Self::from_coordinates(square, x, y);
        }
        let (file, rank) = match square.chars().collect_tuple() {
            Some((file, rank)) => (file, rank),
            None => bail!(
                "square should be two-char, got \"{square}\" with {} chars",
                square.chars().count()
            ),
        };
        let x = match file {
            'a'..='h' => file as u8 - b'a',
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        };
        let y = match rank {
            '1'..='8' => b'8' - rank as u8,
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        };
        Ok(Self { x, y })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.x) as char,
            BOARD_WIDTH - self.y
        )
    }
}

/// Eight compass directions numbered clockwise starting from the upper-left
/// one. "Up" is towards row 0 (Black's side of the board).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::EnumIter)]
pub enum Direction {
    /// Also known as NorthWest.
    UpLeft = 0,
    /// Also known as North.
    Up = 1,
    /// Also known as NorthEast.
    UpRight = 2,
    /// Also known as East.
    Right = 3,
    /// Also known as SouthEast.
    DownRight = 4,
    /// Also known as South.
    Down = 5,
    /// Also known as SouthWest.
    DownLeft = 6,
    /// Also known as West.
    Left = 7,
}

impl Direction {
    /// Diagonal directions in generation order.
    pub const DIAGONALS: [Self; 4] = [Self::UpLeft, Self::UpRight, Self::DownRight, Self::DownLeft];
    /// Orthogonal directions in generation order.
    pub const ORTHOGONALS: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Converts the clockwise direction number into [`Direction`].
    ///
    /// # Panics
    ///
    /// Callers must only pass indices within `0..8`.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::UpLeft,
            1 => Self::Up,
            2 => Self::UpRight,
            3 => Self::Right,
            4 => Self::DownRight,
            5 => Self::Down,
            6 => Self::DownLeft,
            7 => Self::Left,
            _ => panic!("direction index should be within 0..8, got {index}"),
        }
    }

    /// `(dx, dy)` displacement of a single step.
    #[must_use]
    pub const fn unit(self) -> (i8, i8) {
        match self {
            Self::UpLeft => (-1, -1),
            Self::Up => (0, -1),
            Self::UpRight => (1, -1),
            Self::Right => (1, 0),
            Self::DownRight => (1, 1),
            Self::Down => (0, 1),
            Self::DownLeft => (-1, 1),
            Self::Left => (-1, 0),
        }
    }
}

/// Checks whether moving `step` squares from `origin` in `direction` stays
/// within the board on both axes.
#[must_use]
pub fn on_board(origin: Square, step: u8, direction: Direction) -> bool {
    let (dx, dy) = direction.unit();
    let step = i16::from(step);
    let bounds = 0..i16::from(BOARD_WIDTH);
    bounds.contains(&(i16::from(origin.x) + i16::from(dx) * step))
        && bounds.contains(&(i16::from(origin.y) + i16::from(dy) * step))
}

/// The two sides of the board. White starts at the bottom (rows 6 and 7) and
/// advances up, Black starts at the top (rows 0 and 1) and advances down.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Team {
    White,
    Black,
}

impl Team {
    /// Direction of pawn advancement.
    #[must_use]
    pub const fn forward(self) -> Direction {
        match self {
            Self::White => Direction::Up,
            Self::Black => Direction::Down,
        }
    }

    /// Directions in which pawns of this team capture, right-hand side first.
    #[must_use]
    pub const fn capture_directions(self) -> [Direction; 2] {
        match self {
            Self::White => [Direction::UpRight, Direction::UpLeft],
            Self::Black => [Direction::DownRight, Direction::DownLeft],
        }
    }

    /// Row of the team's major pieces in the starting position.
    #[must_use]
    pub const fn back_row(self) -> u8 {
        match self {
            Self::White => BOARD_WIDTH - 1,
            Self::Black => 0,
        }
    }

    /// Row of the team's pawns in the starting position.
    #[must_use]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Self::White => BOARD_WIDTH - 2,
            Self::Black => 1,
        }
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Algebraic symbol of the piece, uppercase for White and lowercase for
    /// Black.
    #[must_use]
    pub const fn symbol(self, team: Team) -> char {
        let symbol = match self {
            Self::Pawn => 'p',
            Self::Rook => 'r',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Queen => 'q',
            Self::King => 'k',
        };
        match team {
            Team::White => symbol.to_ascii_uppercase(),
            Team::Black => symbol,
        }
    }

    /// Parses an algebraic symbol into the owning team and the piece kind.
    ///
    /// # Errors
    ///
    /// If the symbol is not one of "KQRBNPkqrbnp".
    pub fn from_symbol(symbol: char) -> anyhow::Result<(Team, Self)> {
        let team = if symbol.is_ascii_uppercase() {
            Team::White
        } else {
            Team::Black
        };
        let kind = match symbol.to_ascii_lowercase() {
            'p' => Self::Pawn,
            'r' => Self::Rook,
            'n' => Self::Knight,
            'b' => Self::Bishop,
            'q' => Self::Queen,
            'k' => Self::King,
            _ => bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'"),
        };
        Ok((team, kind))
    }
}
