use std::fmt;
use std::ops::{Add, AddAssign, Index, Sub};

/// Number of spatial axes of the board.
pub const AXES: usize = 4;

/// A point on the four-dimensional lattice.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coord(pub [i32; AXES]);

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self([x, y, z, w])
    }

    #[inline]
    pub const fn axis(self, axis: usize) -> i32 {
        self.0[axis]
    }

    /// Copy of `self` with one component replaced.
    #[inline]
    pub fn with_axis(mut self, axis: usize, value: i32) -> Self {
        self.0[axis] = value;
        self
    }

    /// Copy of `self` with one component shifted by `delta`.
    #[inline]
    pub fn offset_axis(mut self, axis: usize, delta: i32) -> Self {
        self.0[axis] += delta;
        self
    }

    /// Components read in the given axis order: `out[i] = self[order[i]]`.
    #[inline]
    pub fn permuted(self, order: [usize; AXES]) -> Self {
        Self([
            self.0[order[0]],
            self.0[order[1]],
            self.0[order[2]],
            self.0[order[3]],
        ])
    }
}

impl Index<usize> for Coord {
    type Output = i32;

    #[inline]
    fn index(&self, axis: usize) -> &i32 {
        &self.0[axis]
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
        ])
    }
}

impl AddAssign for Coord {
    #[inline]
    fn add_assign(&mut self, rhs: Coord) {
        for axis in 0..AXES {
            self.0[axis] += rhs.0[axis];
        }
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
            self.0[3] - rhs.0[3],
        ])
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

/// Per-axis board sizes: the exclusive upper bound of each axis.
///
/// The lower bound is always 0 and every entry is positive.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Dims(pub [i32; AXES]);

impl Dims {
    pub fn new(sizes: [i32; AXES]) -> Self {
        assert!(
            sizes.iter().all(|&s| s > 0),
            "board dimensions must be positive: {sizes:?}"
        );
        Self(sizes)
    }

    #[inline]
    pub const fn size(self, axis: usize) -> i32 {
        self.0[axis]
    }

    /// Sole authority on board extent: `0 <= c[i] < size(i)` for every axis.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        (0..AXES).all(|axis| 0 <= c.0[axis] && c.0[axis] < self.0[axis])
    }

    /// Sizes read in the given axis order, as for [`Coord::permuted`].
    #[inline]
    pub fn permuted(self, order: [usize; AXES]) -> Self {
        Self([
            self.0[order[0]],
            self.0[order[1]],
            self.0[order[2]],
            self.0[order[3]],
        ])
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}x{}", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}
