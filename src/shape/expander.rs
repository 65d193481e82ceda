//! This module implements an iterator that provides all N + 1 expansions
//! for a shape of N squares.

use std::iter::FusedIterator;

use super::Shape;
use crate::square::DIRECTIONS;

/// Iterator over every [`Shape`] that can be made by adding one square
/// next to an existing square of the base shape.
///
/// Squares are visited in the order of [`Shape::squares`], and the
/// neighbours of each square in [`DIRECTIONS`] order. The same resulting
/// shape can be produced more than once (through two different base
/// squares), so callers that need unique results have to deduplicate.
#[derive(Clone)]
pub struct Expansions<'a> {
    base: &'a Shape,
    square: usize,
    direction: usize,
}

impl<'a> Expansions<'a> {
    /// Move to the next (square, direction) pair.
    fn advance(&mut self) {
        self.direction += 1;
        if self.direction == DIRECTIONS.len() {
            self.direction = 0;
            self.square += 1;
        }
    }
}

impl<'a> Iterator for Expansions<'a> {
    type Item = Shape;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(square) = self.base.squares.get(self.square) {
            let neighbour = square.offset(DIRECTIONS[self.direction]);
            self.advance();

            // If the square is already set, skip this face
            if let Some(next) = self.base.with_square(neighbour) {
                return Some(next);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let visited = self.square * DIRECTIONS.len() + self.direction;
        let left = (self.base.len() * DIRECTIONS.len()).saturating_sub(visited);
        (0, Some(left))
    }
}

impl<'a> FusedIterator for Expansions<'a> {}

impl Shape {
    /// Obtain an iterator yielding every shape made by adding one
    /// edge-adjacent square to `self`.
    pub fn expand(&self) -> Expansions<'_> {
        Expansions {
            base: self,
            square: 0,
            direction: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;

    use crate::{Shape, Square};

    #[test]
    pub fn monomino_has_four_expansions() {
        let expansions: Vec<_> = Shape::monomino().expand().collect();

        assert_eq!(expansions.len(), 4);
        for (expansion, (dx, dy)) in expansions.iter().zip(crate::square::DIRECTIONS) {
            assert_eq!(expansion.squares(), &[Square::new(0, 0), Square::new(dx, dy)]);
        }
    }

    #[test]
    pub fn never_adds_an_occupied_square() {
        let l = Shape::try_from([(0, 0), (1, 0), (2, 0), (2, 1)].as_slice()).unwrap();

        for expansion in l.expand() {
            assert_eq!(expansion.len(), l.len() + 1);
            assert!(l.squares().iter().all(|s| expansion.contains(*s)));
            assert!(expansion.is_connected());
        }

        // 9 free neighbouring cells, and (1, 1) touches two squares of the L.
        assert_eq!(l.expand().count(), 10);
        let unique: HashSet<_> = l.expand().map(|e| e.signature()).collect();
        assert_eq!(unique.len(), 9);
    }

    #[test]
    pub fn bounded_by_four_per_square() {
        let square = Shape::try_from([(0, 0), (1, 0), (0, 1), (1, 1)].as_slice()).unwrap();

        let expansions = square.expand();
        assert!(expansions.size_hint().1.unwrap() <= 16);
        assert_eq!(expansions.count(), 8);
    }

    #[test]
    pub fn stays_in_range_at_the_edge() {
        let max = Square::MAX_COORDINATE;
        let corner = Shape::new([Square::new(max, -max)]).unwrap();

        let expansions: Vec<_> = corner.expand().collect();

        assert_eq!(expansions.len(), 2);
        for expansion in expansions {
            assert!(expansion.squares().iter().all(|s| s.in_range()));
        }

        // Parsing rejects squares that could step out of `i32`.
        assert!("[[2147483647,0]]".parse::<Shape>().is_err());
    }

    #[test]
    pub fn restartable() {
        let domino = Shape::try_from([(0, 0), (1, 0)].as_slice()).unwrap();

        let iter = domino.expand();
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
    }
}
