//! Concrete placements of polyominoes on the grid.

use std::str::FromStr;

use hashbrown::HashSet;

use crate::{
    signature::{normalize, parse_squares},
    Signature, Square, Symmetry,
};

mod expander;

pub use expander::Expansions;

/// Reasons a list of squares can not be turned into a [`Shape`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// No squares were provided.
    Empty,
    /// The same square appeared more than once.
    DuplicateSquare(Square),
    /// The square lies further than [`Square::MAX_COORDINATE`] from the
    /// origin, or from another square of the same shape.
    OutOfRange(Square),
    /// The textual form of the shape could not be read.
    Parse(String),
}

impl core::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "a shape needs at least one square"),
            ShapeError::DuplicateSquare(s) => write!(f, "square {s} appears more than once"),
            ShapeError::OutOfRange(s) => write!(
                f,
                "square {s} is more than {} away from the origin or from another square",
                Square::MAX_COORDINATE
            ),
            ShapeError::Parse(msg) => write!(f, "could not parse shape: {msg}"),
        }
    }
}

impl std::error::Error for ShapeError {}

/// A set of distinct squares at concrete grid positions.
///
/// The squares keep the order in which they were added, which makes
/// [`Shape::expand`] deterministic, while containment checks go through a
/// hash set.
///
/// Every square is [in range](Square::in_range), and the shape is at most
/// [`Square::MAX_COORDINATE`] wide and high, so its [`Signature`] is a
/// valid shape as well.
#[derive(Clone, Debug)]
pub struct Shape {
    squares: Vec<Square>,
    occupied: HashSet<Square>,
}

impl Shape {
    /// Create a new [`Shape`] from `squares`.
    ///
    /// Fails if `squares` is empty, contains the same square twice, or
    /// does not fit within [`Square::MAX_COORDINATE`].
    pub fn new<I>(squares: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = Square>,
    {
        let squares: Vec<Square> = squares.into_iter().collect();

        if squares.is_empty() {
            return Err(ShapeError::Empty);
        }

        let mut occupied = HashSet::with_capacity(squares.len());
        for square in squares.iter() {
            if !square.in_range() {
                return Err(ShapeError::OutOfRange(*square));
            }
            if !occupied.insert(*square) {
                return Err(ShapeError::DuplicateSquare(*square));
            }
        }

        check_extent(&squares)?;

        Ok(Self { squares, occupied })
    }

    /// Turn the signature of a valid [`Shape`] back into a shape.
    ///
    /// Such a signature holds distinct squares with coordinates between 0
    /// and [`Square::MAX_COORDINATE`], so there is nothing left to check.
    pub(crate) fn from_valid_signature(signature: &Signature) -> Self {
        let squares = signature.squares().to_vec();
        let occupied = squares.iter().copied().collect();

        Self { squares, occupied }
    }

    /// The shape made of the single square at the origin.
    pub fn monomino() -> Self {
        let square = Square::default();

        Self {
            squares: vec![square],
            occupied: [square].into_iter().collect(),
        }
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Always false: a [`Shape`] can not be constructed without squares.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn contains(&self, square: Square) -> bool {
        self.occupied.contains(&square)
    }

    /// The translation-normalized [`Signature`] of this shape.
    ///
    /// No rotation or reflection is applied.
    pub fn signature(&self) -> Signature {
        normalize(&self.squares)
    }

    /// Create a new [`Shape`], representing `self` with `symmetry` applied
    /// to every square.
    ///
    /// Distinctness, range and extent are all preserved, so there is no
    /// need to re-validate.
    pub fn transform(&self, symmetry: Symmetry) -> Shape {
        let squares: Vec<Square> = self.squares.iter().map(|s| symmetry.apply(*s)).collect();
        let occupied = squares.iter().copied().collect();

        Shape { squares, occupied }
    }

    /// Create a new [`Shape`], representing `self` moved by `(dx, dy)`.
    ///
    /// Fails if a square would end up out of range.
    pub fn translate(&self, dx: i32, dy: i32) -> Result<Shape, ShapeError> {
        let squares = self
            .squares
            .iter()
            .map(|s| match s.checked_offset((dx, dy)) {
                Some(moved) if moved.in_range() => Ok(moved),
                _ => Err(ShapeError::OutOfRange(s.offset((dx, dy)))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let occupied = squares.iter().copied().collect();

        Ok(Shape { squares, occupied })
    }

    /// Create a new [`Shape`] with `square` added.
    ///
    /// Returns `None` if `square` is already part of the shape, or if the
    /// result would not be a valid shape.
    pub fn with_square(&self, square: Square) -> Option<Shape> {
        if self.contains(square) || !square.in_range() {
            return None;
        }

        let mut next = self.clone();
        next.squares.push(square);
        next.occupied.insert(square);

        check_extent(&next.squares).ok()?;
        Some(next)
    }

    /// Check whether all squares of this shape are joined by shared edges.
    pub fn is_connected(&self) -> bool {
        let first = match self.squares.first() {
            Some(first) => *first,
            None => return false,
        };

        let mut seen = HashSet::with_capacity(self.len());
        let mut to_explore = vec![first];
        seen.insert(first);

        while let Some(square) = to_explore.pop() {
            for next in square.neighbours() {
                if self.contains(next) && seen.insert(next) {
                    to_explore.push(next);
                }
            }
        }

        seen.len() == self.len()
    }
}

/// Shapes are equal when they cover the same cells, regardless of the
/// order the squares were added in.
impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.occupied == other.occupied
    }
}

impl Eq for Shape {}

impl TryFrom<Vec<Square>> for Shape {
    type Error = ShapeError;

    fn try_from(value: Vec<Square>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&[(i32, i32)]> for Shape {
    type Error = ShapeError;

    fn try_from(value: &[(i32, i32)]) -> Result<Self, Self::Error> {
        Self::new(value.iter().copied().map(Square::from))
    }
}

impl TryFrom<&Signature> for Shape {
    type Error = ShapeError;

    fn try_from(value: &Signature) -> Result<Self, Self::Error> {
        Self::new(value.squares().iter().copied())
    }
}

/// Check that no square is more than [`Square::MAX_COORDINATE`] away from
/// the smallest x and y coordinates of `squares`.
///
/// All squares must already be in range.
fn check_extent(squares: &[Square]) -> Result<(), ShapeError> {
    let min_x = squares.iter().map(|s| s.x).min().unwrap_or(0);
    let min_y = squares.iter().map(|s| s.y).min().unwrap_or(0);

    let limit = Square::MAX_COORDINATE;
    match squares
        .iter()
        .find(|s| s.x - min_x > limit || s.y - min_y > limit)
    {
        Some(square) => Err(ShapeError::OutOfRange(*square)),
        None => Ok(()),
    }
}

impl FromStr for Shape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_squares(s)?)
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("[")?;
        for (idx, square) in self.squares.iter().enumerate() {
            if idx != 0 {
                f.write_str(",")?;
            }
            write!(f, "{square}")?;
        }
        f.write_str("]")
    }
}
