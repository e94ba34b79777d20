use std::collections::HashMap;

use crate::coord::{Coord, Dims};
use crate::error::{BoardError, BoardResult};
use crate::pieces::Piece;

/// Stable handle to a piece slot in the board's arena.
///
/// Handles stay valid for the lifetime of the board, including after the
/// piece has been captured or eliminated.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub usize);

/// The exclusive coordinate-to-piece mapping plus the board extent.
///
/// Invariant: `by_coord[c] == id` exactly when `arena[id].pos == Some(c)`.
/// Every mutation updates the mapping and the piece's fields jointly, and
/// validates before committing anything, so a failed operation leaves the
/// board untouched.
#[derive(Clone, Debug)]
pub struct Board {
    dims: Dims,
    arena: Vec<Piece>,
    by_coord: HashMap<Coord, PieceId>,
}

impl Board {
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            arena: Vec::new(),
            by_coord: HashMap::new(),
        }
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn is_within_bounds(&self, c: Coord) -> bool {
        self.dims.contains(c)
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.arena[id.0]
    }

    #[inline]
    pub fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.arena[id.0]
    }

    #[inline]
    pub fn piece_at(&self, c: Coord) -> Option<PieceId> {
        self.by_coord.get(&c).copied()
    }

    /// The piece occupying `c`, if any.
    #[inline]
    pub fn occupant(&self, c: Coord) -> Option<&Piece> {
        self.piece_at(c).map(|id| self.piece(id))
    }

    /// Every occupied coordinate with its piece handle, in no particular order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, PieceId)> + '_ {
        self.by_coord.iter().map(|(&c, &id)| (c, id))
    }

    /// Handles of all on-board pieces matching `predicate`.
    pub fn locate(&self, predicate: impl Fn(&Piece) -> bool) -> Vec<PieceId> {
        let mut out: Vec<PieceId> = self
            .by_coord
            .values()
            .copied()
            .filter(|&id| predicate(self.piece(id)))
            .collect();
        out.sort_unstable();
        out
    }

    /// Insert a new piece at `at`, returning its handle.
    pub fn spawn(&mut self, piece: Piece, at: Coord) -> BoardResult<PieceId> {
        if !self.dims.contains(at) {
            return Err(BoardError::OutOfBounds(at));
        }
        if self.by_coord.contains_key(&at) {
            return Err(BoardError::Occupied(at));
        }
        let id = PieceId(self.arena.len());
        self.arena.push(piece);
        self.arena[id.0].pos = Some(at);
        self.by_coord.insert(at, id);
        Ok(id)
    }

    /// Detach and deactivate the piece at `at`, if any.
    pub fn remove(&mut self, at: Coord) -> Option<PieceId> {
        let id = self.by_coord.remove(&at)?;
        let piece = &mut self.arena[id.0];
        piece.pos = None;
        piece.active = false;
        Some(id)
    }

    /// Relocate the piece at `start` to `end`, capturing whatever stood there.
    ///
    /// Legality of the destination is the caller's business (via the movement
    /// engine); this only enforces occupancy and bounds.
    pub fn move_piece(&mut self, start: Coord, end: Coord) -> BoardResult<Option<PieceId>> {
        let id = self.piece_at(start).ok_or(BoardError::NoPiece(start))?;
        if !self.dims.contains(end) {
            return Err(BoardError::OutOfBounds(end));
        }
        let captured = if end != start { self.remove(end) } else { None };
        self.by_coord.remove(&start);
        self.by_coord.insert(end, id);
        let piece = &mut self.arena[id.0];
        piece.pos = Some(end);
        piece.has_moved = true;
        Ok(captured)
    }

    /// Exchange the squares of two pieces in place, capturing nothing.
    ///
    /// Fails unless `a` occupies `start` and `b` occupies `end`. Both pieces
    /// are marked moved. This exists for the Cat's scratch, which displaces
    /// the victim to the Cat's old square.
    pub fn swap(&mut self, start: Coord, end: Coord, a: PieceId, b: PieceId) -> BoardResult<()> {
        if self.piece_at(start) != Some(a) || self.piece_at(end) != Some(b) {
            return Err(BoardError::SwapMismatch { start, end });
        }
        self.by_coord.insert(start, b);
        self.by_coord.insert(end, a);
        let pa = &mut self.arena[a.0];
        pa.pos = Some(end);
        pa.has_moved = true;
        let pb = &mut self.arena[b.0];
        pb.pos = Some(start);
        pb.has_moved = true;
        Ok(())
    }

    /// Used by the transformation engine to commit a rebuilt mapping and (for
    /// axis permutations) the permuted extent in one step.
    pub(crate) fn commit(&mut self, dims: Dims, by_coord: HashMap<Coord, PieceId>) {
        self.dims = dims;
        self.by_coord = by_coord;
    }

    pub(crate) fn mapping(&self) -> &HashMap<Coord, PieceId> {
        &self.by_coord
    }
}
