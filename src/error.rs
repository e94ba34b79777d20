use thiserror::Error;

use crate::coord::{Coord, AXES};

/// Errors raised by the board store and the axis-transformation engine.
///
/// All of these are fail-fast validation failures: the board is never left
/// partially mutated when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the current board extent.
    #[error("coordinate {0} is outside of the board")]
    OutOfBounds(Coord),

    /// Placement target already holds a piece.
    #[error("coordinate {0} is already occupied")]
    Occupied(Coord),

    /// An operation required a piece where there was none.
    #[error("no piece at {0}")]
    NoPiece(Coord),

    /// `swap` was invoked with pieces that do not match the occupants.
    #[error("swap precondition failed: expected pieces at {start} and {end}")]
    SwapMismatch { start: Coord, end: Coord },

    /// Transpose order is not a permutation of the axis indices.
    #[error("axis order {0:?} is not a permutation of 0..4")]
    NotAPermutation([usize; AXES]),

    /// An axis index outside `0..4`.
    #[error("axis index {0} is out of range 0..4")]
    AxisOutOfRange(usize),

    /// Reshape was asked for a non-positive axis size.
    #[error("axis size must be positive, got {0}")]
    NonPositiveSize(i32),

    /// Reshape size does not evenly divide the current axis size.
    #[error("size {new_size} does not divide axis {axis} of size {old_size}")]
    IndivisibleReshape {
        axis: usize,
        old_size: i32,
        new_size: i32,
    },
}

/// Result alias for board store and transformation operations.
pub type BoardResult<T> = Result<T, BoardError>;
