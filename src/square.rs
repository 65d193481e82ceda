//! Grid squares and the symmetries of the square lattice.

/// A single unit square on the grid, identified by its lower-left corner.
///
/// Ordering is lexicographic on `(x, y)`, which is the order used when
/// sorting the squares of a [`Signature`](crate::Signature).
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord, Default)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    /// The largest absolute coordinate a [`Shape`](crate::Shape) may use.
    ///
    /// Keeping squares this close to the origin leaves room for negating a
    /// coordinate, stepping to a neighbour, and subtracting one coordinate
    /// from another without leaving the `i32` range.
    pub const MAX_COORDINATE: i32 = i32::MAX / 4;

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns whether both coordinates are within
    /// [`MAX_COORDINATE`](Self::MAX_COORDINATE) of 0.
    pub const fn in_range(self) -> bool {
        let limit = Self::MAX_COORDINATE;
        -limit <= self.x && self.x <= limit && -limit <= self.y && self.y <= limit
    }

    /// The square offset by `(dx, dy)`.
    ///
    /// Wraps around at the edges of the `i32` range. Squares that are
    /// [in range](Self::in_range) never get there through a unit step.
    pub const fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// The square offset by `(dx, dy)`, or `None` if that overflows.
    pub fn checked_offset(self, (dx, dy): (i32, i32)) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// The four edge-adjacent neighbours of this square, in
    /// [`DIRECTIONS`] order.
    pub fn neighbours(self) -> impl Iterator<Item = Square> + Clone {
        DIRECTIONS.into_iter().map(move |d| self.offset(d))
    }
}

impl From<(i32, i32)> for Square {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Square> for (i32, i32) {
    fn from(value: Square) -> Self {
        (value.x, value.y)
    }
}

impl core::fmt::Display for Square {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

/// Unit vectors to the right, up, left and down.
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// One of the 8 elements of the symmetry group of the square.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Symmetry {
    Identity,
    /// Rotate by pi/2
    Rotate90,
    /// Rotate by pi
    Rotate180,
    /// Rotate by 3pi/2
    Rotate270,
    /// Mirror in the y axis, negating x
    FlipX,
    /// Mirror in the x axis, negating y
    FlipY,
    /// Mirror in the line x = y
    Transpose,
    /// Mirror in the line x = -y
    AntiTranspose,
}

impl Symmetry {
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rotate90,
        Symmetry::Rotate180,
        Symmetry::Rotate270,
        Symmetry::FlipX,
        Symmetry::FlipY,
        Symmetry::Transpose,
        Symmetry::AntiTranspose,
    ];

    /// Map `square` through this symmetry.
    ///
    /// Negation wraps, so `i32::MIN` maps onto itself instead of
    /// overflowing. Within [`Square::MAX_COORDINATE`] this is exact.
    #[inline]
    pub const fn apply(self, square: Square) -> Square {
        let Square { x, y } = square;
        let (nx, ny) = (x.wrapping_neg(), y.wrapping_neg());

        match self {
            Symmetry::Identity => Square::new(x, y),
            Symmetry::Rotate90 => Square::new(ny, x),
            Symmetry::Rotate180 => Square::new(nx, ny),
            Symmetry::Rotate270 => Square::new(y, nx),
            Symmetry::FlipX => Square::new(nx, y),
            Symmetry::FlipY => Square::new(x, ny),
            Symmetry::Transpose => Square::new(y, x),
            Symmetry::AntiTranspose => Square::new(ny, nx),
        }
    }
}

#[test]
pub fn all_symmetries_are_distinct() {
    // (1, 2) has no symmetry of its own, so every transform moves it somewhere else.
    let square = Square::new(1, 2);

    let images: std::collections::HashSet<_> =
        Symmetry::ALL.iter().map(|s| s.apply(square)).collect();

    assert_eq!(images.len(), 8);
}

#[test]
pub fn rotating_four_times_is_identity() {
    let square = Square::new(5, 2);

    let rotated = (0..4).fold(square, |s, _| Symmetry::Rotate90.apply(s));

    assert_eq!(rotated, square);
    assert_eq!(
        Symmetry::Rotate90.apply(Symmetry::Rotate90.apply(square)),
        Symmetry::Rotate180.apply(square)
    );
}

#[test]
pub fn range_boundaries() {
    let max = Square::MAX_COORDINATE;

    assert!(Square::new(max, -max).in_range());
    assert!(!Square::new(max + 1, 0).in_range());
    assert!(!Square::new(0, -max - 1).in_range());
    assert!(!Square::new(i32::MIN, 0).in_range());

    // Stepping off an in-range square and negating stay exact.
    let corner = Square::new(max, -max);
    assert_eq!(corner.offset((1, -1)), Square::new(max + 1, -max - 1));
    assert_eq!(Symmetry::Rotate180.apply(corner), Square::new(-max, max));
}

#[test]
pub fn extreme_coordinates_do_not_overflow() {
    let extreme = Square::new(i32::MIN, i32::MAX);

    for symmetry in Symmetry::ALL {
        symmetry.apply(extreme);
    }

    assert_eq!(extreme.checked_offset((0, 1)), None);
    assert_eq!(extreme.checked_offset((1, 0)), Some(Square::new(i32::MIN + 1, i32::MAX)));
    assert_eq!(Square::new(i32::MAX, 0).offset((1, 0)), Square::new(i32::MIN, 0));
}
