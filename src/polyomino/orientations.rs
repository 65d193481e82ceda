//! This module implements an iterator that yields all of the rotations
//! and reflections of a shape.

use std::iter::FusedIterator;

use crate::{Shape, Symmetry};

/// Iterator over the 8 images of a [`Shape`] under the symmetries of the
/// square, in [`Symmetry::ALL`] order.
///
/// Symmetric shapes produce some images more than once.
pub struct Orientations<'a> {
    base: &'a Shape,
    count: usize,
}

impl<'a> Iterator for Orientations<'a> {
    type Item = Shape;

    fn next(&mut self) -> Option<Self::Item> {
        let symmetry = *Symmetry::ALL.get(self.count)?;
        self.count += 1;
        Some(self.base.transform(symmetry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = Symmetry::ALL.len() - self.count;
        (left, Some(left))
    }
}

impl<'a> ExactSizeIterator for Orientations<'a> {}

impl<'a> FusedIterator for Orientations<'a> {}

impl Shape {
    /// Obtain an iterator yielding all rotations and reflections of `self`.
    pub fn all_orientations(&self) -> Orientations<'_> {
        Orientations {
            base: self,
            count: 0,
        }
    }
}

#[test]
pub fn correct_amount_of_orientations() {
    let shape = Shape::try_from([(0, 0), (1, 0), (1, 1)].as_slice()).unwrap();

    let mut orientations = shape.all_orientations();
    assert_eq!(orientations.len(), 8);
    orientations.next();
    assert_eq!(orientations.len(), 7);
    assert_eq!(orientations.count(), 7);
}

#[test]
pub fn first_orientation_is_identity() {
    let shape = Shape::try_from([(0, 0), (1, 0), (2, 0), (2, 1)].as_slice()).unwrap();

    assert_eq!(shape.all_orientations().next(), Some(shape.clone()));
}
