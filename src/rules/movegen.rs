//! Per-piece destination generation.
//!
//! Every function here answers the same question: given the current board and
//! a piece standing at `from`, which coordinates can it reach this turn?
//! Whose turn it is, and check-like constraints, are not its concern.

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::board::{Board, PieceId};
use crate::coord::{Coord, AXES};
use crate::pieces::{
    bishop_directions, knight_offsets, queen_directions, rook_directions, Movement,
};

/// The set of legal destinations for the piece `id`, sorted by coordinate.
///
/// Empty when the piece is off the board.
pub fn legal_moves(board: &Board, id: PieceId) -> BTreeSet<Coord> {
    let piece = board.piece(id);
    let Some(from) = piece.pos else {
        return BTreeSet::new();
    };
    let owner = piece.owner;
    match piece.movement {
        Movement::Rook => slide(board, owner, from, &rook_directions(), None),
        Movement::Bishop => slide(board, owner, from, &bishop_directions(), None),
        Movement::Queen => slide(board, owner, from, &queen_directions(), None),
        Movement::Royal => slide(board, owner, from, &queen_directions(), Some(1)),
        Movement::Knight => leap(board, owner, from, knight_offsets().into_iter()),
        Movement::Pawn { axis, dir } => pawn_moves(board, owner, from, piece.has_moved, axis, dir),
        Movement::Cat => cat_moves(board, owner, from),
    }
}

/// Walk each direction until leaving the board or hitting a piece. An enemy
/// blocker is itself a destination; any blocker ends the ray.
fn slide(
    board: &Board,
    owner: usize,
    from: Coord,
    directions: &[Coord],
    max_distance: Option<u32>,
) -> BTreeSet<Coord> {
    let mut moves = BTreeSet::new();
    for &dir in directions {
        let mut current = from;
        let mut distance = 0;
        loop {
            distance += 1;
            if max_distance.is_some_and(|max| distance > max) {
                break;
            }
            current += dir;
            if !board.is_within_bounds(current) {
                break;
            }
            match board.occupant(current) {
                None => {
                    moves.insert(current);
                }
                Some(occupant) => {
                    if occupant.owner != owner {
                        moves.insert(current);
                    }
                    break;
                }
            }
        }
    }
    moves
}

/// Single displacements ignoring intervening squares.
fn leap(
    board: &Board,
    owner: usize,
    from: Coord,
    offsets: impl Iterator<Item = Coord>,
) -> BTreeSet<Coord> {
    offsets
        .map(|offset| from + offset)
        .filter(|&target| {
            board.is_within_bounds(target)
                && board.occupant(target).is_none_or(|occ| occ.owner != owner)
        })
        .collect()
}

fn pawn_moves(
    board: &Board,
    owner: usize,
    from: Coord,
    has_moved: bool,
    axis: usize,
    dir: i32,
) -> BTreeSet<Coord> {
    let mut moves = BTreeSet::new();

    let forward = from.offset_axis(axis, dir);
    if board.is_within_bounds(forward) && board.occupant(forward).is_none() {
        moves.insert(forward);
        if !has_moved {
            let double = forward.offset_axis(axis, dir);
            if board.is_within_bounds(double) && board.occupant(double).is_none() {
                moves.insert(double);
            }
        }
    }

    // Captures: one step forward combined with +-1 on any one other axis.
    for capture_axis in 0..AXES {
        if capture_axis == axis {
            continue;
        }
        for capture_dir in [-1, 1] {
            let target = forward.offset_axis(capture_axis, capture_dir);
            if !board.is_within_bounds(target) {
                continue;
            }
            if board.occupant(target).is_some_and(|occ| occ.owner != owner) {
                moves.insert(target);
            }
        }
    }

    moves
}

/// Cat movement: the union of the dimension hop (any non-identity permutation
/// of its own coordinate values) and the linear slip (a leap changing one or
/// two axes by arbitrary nonzero offsets).
///
/// The slip deliberately ignores path occupancy: it is a leap, not a slide.
fn cat_moves(board: &Board, owner: usize, from: Coord) -> BTreeSet<Coord> {
    let mut moves = BTreeSet::new();

    for values in from.0.iter().copied().permutations(AXES) {
        let target = Coord([values[0], values[1], values[2], values[3]]);
        if target == from || !board.is_within_bounds(target) {
            continue;
        }
        if board.occupant(target).is_none_or(|occ| occ.owner != owner) {
            moves.insert(target);
        }
    }

    let dims = board.dims();
    for axis_a in 0..AXES {
        for axis_b in axis_a + 1..AXES {
            for delta_a in 1 - dims.size(axis_a)..dims.size(axis_a) {
                for delta_b in 1 - dims.size(axis_b)..dims.size(axis_b) {
                    if delta_a == 0 && delta_b == 0 {
                        continue;
                    }
                    let target = from.offset_axis(axis_a, delta_a).offset_axis(axis_b, delta_b);
                    if !board.is_within_bounds(target) {
                        continue;
                    }
                    if board.occupant(target).is_none_or(|occ| occ.owner != owner) {
                        moves.insert(target);
                    }
                }
            }
        }
    }

    moves
}
