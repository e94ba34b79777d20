//! Textual board projection for display. Pure formatting, no invariants.

use crate::board::Board;
use crate::coord::{Coord, AXES};

/// Project the board as 2D grids with the default axis order `(0, 1, 2, 3)`.
pub fn project(board: &Board) -> Vec<String> {
    project_with_order(board, [0, 1, 2, 3])
}

/// Project the board as one 2D grid per fixed pair of depth-axis values.
///
/// The first two axes of `order` span the plane (columns, rows); the last two
/// are the depth axes iterated over. Pieces print as their symbol, uppercase
/// for even player indices and lowercase for odd, empty squares as `.`.
pub fn project_with_order(board: &Board, order: [usize; AXES]) -> Vec<String> {
    let dims = board.dims();
    let [col_axis, row_axis, depth_a, depth_b] = order;

    let mut lines = Vec::new();
    for a in 0..dims.size(depth_a) {
        for b in 0..dims.size(depth_b) {
            lines.push(format!("Depth {depth_a}={a},{depth_b}={b}"));
            for row in 0..dims.size(row_axis) {
                let mut cells = String::with_capacity(dims.size(col_axis) as usize);
                for col in 0..dims.size(col_axis) {
                    let pos = Coord([0; AXES])
                        .with_axis(col_axis, col)
                        .with_axis(row_axis, row)
                        .with_axis(depth_a, a)
                        .with_axis(depth_b, b);
                    cells.push(match board.occupant(pos) {
                        None => '.',
                        Some(piece) => {
                            let symbol = piece.kind.symbol();
                            if piece.owner % 2 == 1 {
                                symbol.to_ascii_lowercase()
                            } else {
                                symbol
                            }
                        }
                    });
                }
                lines.push(cells);
            }
            lines.push(String::new());
        }
    }
    lines
}
