//! Translation-normalized, sorted forms of square lists.

use std::str::FromStr;

use crate::{shape::ShapeError, Square};

/// A list of squares that has been moved so that its smallest x and
/// smallest y coordinates are both 0, and then sorted.
///
/// Two lists of squares produce the same [`Signature`] if and only if
/// they describe the same set of cells up to translation. Rotations and
/// reflections are *not* factored out here: that is what
/// [`Polyomino`](crate::Polyomino) does by storing the signature of
/// every orientation.
///
/// The textual form is `[[x,y],[x,y],...]`, and can be parsed back with
/// [`str::parse`].
#[derive(PartialEq, Eq, Hash, Clone, Debug, PartialOrd, Ord)]
pub struct Signature {
    squares: Box<[Square]>,
}

/// Compute the [`Signature`] of `squares`.
///
/// An empty slice produces the empty signature. Squares are expected to
/// be [in range](Square::in_range), as those of every
/// [`Shape`](crate::Shape) are; lists spanning more than the `i32` range
/// wrap instead of overflowing.
pub fn normalize(squares: &[Square]) -> Signature {
    Signature::from_squares(squares.iter().copied())
}

impl Signature {
    /// Translate, sort and collect `squares` into a [`Signature`].
    pub fn from_squares<I>(squares: I) -> Self
    where
        I: IntoIterator<Item = Square>,
        I::IntoIter: Clone,
    {
        let squares = squares.into_iter();

        let dx = squares.clone().map(|s| s.x).min().unwrap_or(0);
        let dy = squares.clone().map(|s| s.y).min().unwrap_or(0);

        let mut normalized: Vec<_> = squares
            .map(|s| Square::new(s.x.wrapping_sub(dx), s.y.wrapping_sub(dy)))
            .collect();
        normalized.sort_unstable();

        Self {
            squares: normalized.into_boxed_slice(),
        }
    }

    /// The squares of this signature, in ascending order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// The width and height of the bounding box of this signature.
    pub fn dims(&self) -> (i32, i32) {
        if self.squares.is_empty() {
            return (0, 0);
        }

        let width = self.squares.iter().map(|s| s.x).max().unwrap_or(0);
        let height = self.squares.iter().map(|s| s.y).max().unwrap_or(0);
        let (width, height) = (width.saturating_add(1), height.saturating_add(1));
        (width, height)
    }
}

impl core::fmt::Display for Signature {
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

impl FromStr for Signature {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = parse_squares(s)?;
        Ok(normalize(&squares))
    }
}

/// Parse a list of squares written as `[[x,y],[x,y],...]`. Whitespace is
/// ignored, and the squares are returned in the order they are written.
///
/// Squares that are not [in range](Square::in_range) are rejected.
pub fn parse_squares(text: &str) -> Result<Vec<Square>, ShapeError> {
    let malformed = |why: &str| ShapeError::Parse(format!("{why} in `{}`", text.trim()));

    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let inner = compact
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or_else(|| malformed("expected an outer `[...]`"))?;

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    let inner = inner
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or_else(|| malformed("expected squares written as `[x,y]`"))?;

    inner
        .split("],[")
        .map(|pair| -> Result<Square, ShapeError> {
            let (x, y) = pair
                .split_once(',')
                .ok_or_else(|| malformed(&format!("expected `x,y` but found `{pair}`")))?;

            let coordinate = |v: &str| {
                v.parse::<i32>()
                    .map_err(|e| malformed(&format!("invalid coordinate `{v}` ({e})")))
            };

            let square = Square::new(coordinate(x)?, coordinate(y)?);
            if !square.in_range() {
                return Err(ShapeError::OutOfRange(square));
            }

            Ok(square)
        })
        .collect()
}
