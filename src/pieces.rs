use itertools::iproduct;

use crate::coord::{Coord, AXES};
use crate::player::Player;

/// The closed set of piece variants.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    Cat,
    Alien,
}

impl PieceKind {
    pub const fn name(self) -> &'static str {
        use PieceKind::*;
        match self {
            Pawn => "Pawn",
            Rook => "Rook",
            Knight => "Knight",
            Bishop => "Bishop",
            Queen => "Queen",
            King => "King",
            Cat => "Cat",
            Alien => "Alien",
        }
    }

    /// One-letter symbol used by the textual projection.
    pub const fn symbol(self) -> char {
        use PieceKind::*;
        match self {
            Pawn => 'P',
            Rook => 'R',
            Knight => 'N',
            Bishop => 'B',
            Queen => 'Q',
            King => 'K',
            Cat => 'C',
            Alien => 'A',
        }
    }
}

/// How a piece moves, as a closed tagged variant.
///
/// The tag is mutable at runtime: a Cat that scratches an enemy rewrites the
/// victim's movement to `Pawn` oriented to the victim's own player.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Movement {
    /// Slides along the 8 axis unit vectors.
    Rook,
    /// Slides along the 16 all-axes diagonals.
    Bishop,
    /// Slides along every nonzero vector in `{-1,0,1}^4`.
    Queen,
    /// One bounded step along any queen direction (King and Alien).
    Royal,
    /// Leaps by +-2 on one axis combined with +-1 on a distinct axis.
    Knight,
    /// Forward stepper with diagonal captures, oriented by its player.
    Pawn { axis: usize, dir: i32 },
    /// Coordinate-permutation hop plus one-or-two-axis linear slip.
    Cat,
}

impl Movement {
    /// The natural movement for a piece kind owned by `player`.
    pub fn for_kind(kind: PieceKind, player: &Player) -> Self {
        use PieceKind::*;
        match kind {
            Rook => Movement::Rook,
            Bishop => Movement::Bishop,
            Queen => Movement::Queen,
            King | Alien => Movement::Royal,
            Knight => Movement::Knight,
            Pawn => Movement::Pawn {
                axis: player.forward_axis,
                dir: player.forward_direction,
            },
            Cat => Movement::Cat,
        }
    }
}

/// The 8 unit vectors along the axes.
pub fn rook_directions() -> Vec<Coord> {
    let mut dirs = Vec::with_capacity(2 * AXES);
    for axis in 0..AXES {
        for sign in [-1, 1] {
            dirs.push(Coord([0; AXES]).with_axis(axis, sign));
        }
    }
    dirs
}

/// The 16 vectors with every component +-1: the pure 4D diagonals.
pub fn bishop_directions() -> Vec<Coord> {
    iproduct!([-1, 1], [-1, 1], [-1, 1], [-1, 1])
        .map(|(x, y, z, w)| Coord::new(x, y, z, w))
        .collect()
}

/// Every nonzero vector in `{-1,0,1}^4` (80 directions): the rook units plus
/// all mixed unit-interval directions.
pub fn queen_directions() -> Vec<Coord> {
    iproduct!(-1..=1, -1..=1, -1..=1, -1..=1)
        .map(|(x, y, z, w)| Coord::new(x, y, z, w))
        .filter(|&c| c != Coord::new(0, 0, 0, 0))
        .collect()
}

/// The 48 generalized L-leaps: +-2 along one axis, +-1 along a distinct one.
pub fn knight_offsets() -> Vec<Coord> {
    let mut offsets = Vec::with_capacity(48);
    for long_axis in 0..AXES {
        for short_axis in 0..AXES {
            if short_axis == long_axis {
                continue;
            }
            for long_step in [-2, 2] {
                for short_step in [-1, 1] {
                    offsets.push(
                        Coord([0; AXES])
                            .with_axis(long_axis, long_step)
                            .with_axis(short_axis, short_step),
                    );
                }
            }
        }
    }
    offsets
}

/// A piece on (or off) the board.
///
/// Created once with a fixed kind and owner; afterwards only `pos`,
/// `has_moved`, `active` and (via a Cat scratch) `movement` change. A captured
/// piece keeps its arena slot so player rosters stay valid to traverse.
#[derive(Clone, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    /// Index into the player table; non-owning back-reference.
    pub owner: usize,
    pub movement: Movement,
    pub pos: Option<Coord>,
    pub has_moved: bool,
    pub active: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, player: &Player) -> Self {
        Self {
            kind,
            owner: player.index,
            movement: Movement::for_kind(kind, player),
            pos: None,
            has_moved: false,
            active: true,
        }
    }
}
