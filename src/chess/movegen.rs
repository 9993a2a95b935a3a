//! Raw movement geometry: for a piece of a given kind, team and position,
//! produces the squares its movement pattern reaches on an empty board.
//!
//! The result is a list of [`Ray`]s. Each ray is ordered outwards from the
//! piece, so whoever walks it against an occupied board can stop at the first
//! obstruction. Sliding pieces produce one ray per direction, the king produces
//! the same rays capped at one step and every knight jump is a ray of its own.
//! Rays are never dropped: a ray leaving the board immediately is simply
//! empty, so the number of rays only depends on the piece kind.
//!
//! Pawn captures are not part of the geometry because they depend on enemy
//! occupancy; [`pawn_attacks`] lists the candidate squares instead.

use arrayvec::ArrayVec;

use crate::chess::core::{Direction, PieceKind, Square, Team, BOARD_WIDTH};

/// Longest possible ray: a slider crossing the whole board.
pub const MAX_RAY_LENGTH: usize = BOARD_WIDTH as usize - 1;
/// Queen, king and knight produce the most rays.
pub const MAX_RAYS: usize = 8;

/// Candidate squares in one direction, ordered by distance from the piece.
pub type Ray = ArrayVec<Square, MAX_RAY_LENGTH>;
/// All rays of a piece.
pub type Rays = ArrayVec<Ray, MAX_RAYS>;

/// Knight jumps in generation order.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
];

/// Generates the rays of a piece. `has_moved` is only consulted for pawns: a
/// pawn that has not moved yet may advance two squares.
#[must_use]
pub fn generate(kind: PieceKind, team: Team, origin: Square, has_moved: bool) -> Rays {
    let mut rays = Rays::new();
    match kind {
        PieceKind::Pawn => {
            let steps = if has_moved { 1 } else { 2 };
            rays.push(ray(origin, team.forward(), steps));
        },
        PieceKind::Rook => slide(origin, &Direction::ORTHOGONALS, MAX_RAY_LENGTH, &mut rays),
        PieceKind::Bishop => slide(origin, &Direction::DIAGONALS, MAX_RAY_LENGTH, &mut rays),
        PieceKind::Knight => {
            for (dx, dy) in KNIGHT_OFFSETS {
                rays.push(origin.offset(dx, dy).into_iter().collect());
            }
        },
        PieceKind::Queen => {
            slide(origin, &Direction::DIAGONALS, MAX_RAY_LENGTH, &mut rays);
            slide(origin, &Direction::ORTHOGONALS, MAX_RAY_LENGTH, &mut rays);
        },
        PieceKind::King => {
            slide(origin, &Direction::DIAGONALS, 1, &mut rays);
            slide(origin, &Direction::ORTHOGONALS, 1, &mut rays);
        },
    }
    rays
}

/// Squares a pawn could capture on if an enemy piece stood there.
#[must_use]
pub fn pawn_attacks(team: Team, origin: Square) -> ArrayVec<Square, 2> {
    team.capture_directions()
        .into_iter()
        .filter_map(|direction| origin.shift(direction, 1))
        .collect()
}

fn slide(origin: Square, directions: &[Direction], max_steps: usize, rays: &mut Rays) {
    for &direction in directions {
        rays.push(ray(origin, direction, max_steps));
    }
}

fn ray(origin: Square, direction: Direction, max_steps: usize) -> Ray {
    (1..=BOARD_WIDTH)
        .take(max_steps)
        .map_while(|step| origin.shift(direction, step))
        .collect()
}
