//! Enumeration of free polyominoes.
//!
//! A polyomino is a connected shape made of unit squares on a grid. Two
//! shapes are the same *free* polyomino when one can be translated,
//! rotated and/or reflected onto the other.
//!
//! Find out how many 8-ominoes there are:
//!
//! ```
//! assert_eq!(polyominoes::polyominoes(8).unwrap().len(), 369);
//! ```
//!
//! Get a single representation of each of them:
//!
//! ```
//! let shapes: Vec<_> = polyominoes::polyominoes(8)
//!     .unwrap()
//!     .iter()
//!     .map(|p| p.representation())
//!     .collect();
//! # assert_eq!(shapes.len(), 369);
//! ```

#[cfg(test)]
mod test;

pub mod enumerate;
pub mod polyomino;
pub mod shape;
pub mod signature;
pub mod square;

pub use enumerate::{polyominoes, EnumerateError, Enumeration, Level};
pub use polyomino::Polyomino;
pub use shape::{Shape, ShapeError};
pub use signature::{normalize, Signature};
pub use square::{Square, Symmetry};
