//! Alien operations: whole-board coordinate rewrites with collision fallout.
//!
//! Each operation derives a coordinate mapping (and, for axis permutations,
//! the permuted extent), validates its arguments up front, and then relocates
//! every piece except the triggering Alien in a single pass. The new mapping
//! is built aside and swapped in wholesale, so a failure never leaves the
//! board half-transformed.

use std::collections::{HashMap, HashSet};

use crate::board::{Board, PieceId};
use crate::coord::{Coord, Dims, AXES};
use crate::error::{BoardError, BoardResult};

/// Outcome of one transformation: the final coordinate mapping plus every
/// piece eliminated along the way, in traversal order.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformOutcome {
    pub survivors: HashMap<Coord, PieceId>,
    pub casualties: Vec<PieceId>,
}

impl Board {
    /// Apply `mapping` to every piece except `anchor`.
    ///
    /// The anchor keeps its coordinate and can never be eliminated. Any other
    /// piece is eliminated when its image is out of bounds, lands on the
    /// anchor's coordinate, or lands on a coordinate contested by another
    /// non-anchor piece. All pieces mapping to a contested coordinate die,
    /// not just the first pair.
    pub fn apply_transformation(
        &mut self,
        mapping: impl Fn(Coord) -> Coord,
        anchor: PieceId,
    ) -> TransformOutcome {
        let anchor_pos = self.piece(anchor).pos;
        let dims = self.dims();

        let mut entries: Vec<(Coord, PieceId)> = self.pieces().collect();
        entries.sort_unstable();

        let mut survivors: HashMap<Coord, PieceId> = HashMap::new();
        let mut casualties: Vec<PieceId> = Vec::new();
        // Coordinates already contested by a collision; late arrivals die too.
        let mut contested: HashSet<Coord> = HashSet::new();
        let mut images: Vec<(PieceId, Coord)> = Vec::new();

        for (pos, id) in entries {
            if id == anchor {
                survivors.insert(pos, id);
                continue;
            }
            let image = mapping(pos);
            if !dims.contains(image) || Some(image) == anchor_pos || contested.contains(&image) {
                casualties.push(id);
                continue;
            }
            if let Some(prior) = survivors.remove(&image) {
                contested.insert(image);
                casualties.push(prior);
                casualties.push(id);
                continue;
            }
            survivors.insert(image, id);
            images.push((id, image));
        }

        for &id in &casualties {
            let piece = self.piece_mut(id);
            piece.pos = None;
            piece.active = false;
        }
        for &(id, image) in &images {
            self.piece_mut(id).pos = Some(image);
        }
        self.commit(dims, survivors.clone());

        TransformOutcome {
            survivors,
            casualties,
        }
    }

    /// Reorder the axes: new coordinate `i` reads the old component
    /// `order[i]`, and the extents are permuted the same way.
    pub fn transpose(
        &mut self,
        order: [usize; AXES],
        anchor: PieceId,
    ) -> BoardResult<TransformOutcome> {
        let mut sorted = order;
        sorted.sort_unstable();
        if sorted != [0, 1, 2, 3] {
            return Err(BoardError::NotAPermutation(order));
        }
        let new_dims = self.dims().permuted(order);
        let outcome = self.apply_transformation_with_dims(
            move |c| c.permuted(order),
            new_dims,
            anchor,
        );
        Ok(outcome)
    }

    /// Transpose exchanging only axes `a` and `b`.
    pub fn swap_axes(
        &mut self,
        a: usize,
        b: usize,
        anchor: PieceId,
    ) -> BoardResult<TransformOutcome> {
        check_axis(a)?;
        check_axis(b)?;
        let mut order = [0, 1, 2, 3];
        order.swap(a, b);
        self.transpose(order, anchor)
    }

    /// Remove axis `source` from the axis order and reinsert it at
    /// `destination`, then transpose accordingly.
    pub fn move_axis(
        &mut self,
        source: usize,
        destination: usize,
        anchor: PieceId,
    ) -> BoardResult<TransformOutcome> {
        check_axis(source)?;
        check_axis(destination)?;
        let mut axes: Vec<usize> = (0..AXES).collect();
        let axis = axes.remove(source);
        axes.insert(destination, axis);
        let order = [axes[0], axes[1], axes[2], axes[3]];
        self.transpose(order, anchor)
    }

    /// Reinterpret one axis as a `new_size x block` decomposition and
    /// linearize it with the factors swapped: component `v` becomes
    /// `(v % new_size) * block + (v / new_size)`.
    ///
    /// The mapping is a bijection on `0..old_size`, so the axis extent is
    /// unchanged; reapplying with `block` as the size undoes it.
    pub fn reshape_axis(
        &mut self,
        axis: usize,
        new_size: i32,
        anchor: PieceId,
    ) -> BoardResult<TransformOutcome> {
        check_axis(axis)?;
        if new_size <= 0 {
            return Err(BoardError::NonPositiveSize(new_size));
        }
        let old_size = self.dims().size(axis);
        if old_size % new_size != 0 {
            return Err(BoardError::IndivisibleReshape {
                axis,
                old_size,
                new_size,
            });
        }
        let block = old_size / new_size;
        let outcome = self.apply_transformation(
            move |c| {
                let v = c.axis(axis);
                c.with_axis(axis, (v % new_size) * block + (v / new_size))
            },
            anchor,
        );
        Ok(outcome)
    }

    /// Like [`Board::apply_transformation`] but installing `new_dims` as the
    /// extent the images are validated against.
    fn apply_transformation_with_dims(
        &mut self,
        mapping: impl Fn(Coord) -> Coord,
        new_dims: Dims,
        anchor: PieceId,
    ) -> TransformOutcome {
        self.commit(new_dims, self.mapping().clone());
        self.apply_transformation(mapping, anchor)
    }
}

#[inline]
fn check_axis(axis: usize) -> BoardResult<()> {
    if axis < AXES {
        Ok(())
    } else {
        Err(BoardError::AxisOutOfRange(axis))
    }
}
