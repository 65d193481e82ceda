//! Size-by-size enumeration of free polyominoes.

use std::sync::Arc;

use indicatif::ProgressBar;

use crate::{Polyomino, Shape, Signature};

/// Reasons an enumeration can not be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumerateError {
    /// There are no polyominoes with 0 squares.
    ZeroSize,
}

impl core::fmt::Display for EnumerateError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EnumerateError::ZeroSize => write!(f, "N must be at least 1"),
        }
    }
}

impl std::error::Error for EnumerateError {}

/// All free polyominoes of size [`n`](Level::n), in the order they were
/// first found.
#[derive(Clone, Debug)]
pub struct Level {
    pub n: usize,
    pub polyominoes: Arc<Vec<Polyomino>>,
}

impl Level {
    fn seed() -> Self {
        Self {
            n: 1,
            polyominoes: Arc::new(vec![Polyomino::monomino()]),
        }
    }

    pub fn len(&self) -> usize {
        self.polyominoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polyominoes.is_empty()
    }

    /// Take the polyominoes out of this level, cloning them only if the
    /// list is still shared.
    pub fn into_vec(self) -> Vec<Polyomino> {
        Arc::try_unwrap(self.polyominoes).unwrap_or_else(|shared| (*shared).clone())
    }
}

/// Check whether any of `polyominoes` has `signature` as one of its
/// orientations.
fn already_represented(polyominoes: &[Polyomino], signature: &Signature) -> bool {
    polyominoes.iter().any(|p| p.contains_signature(signature))
}

/// Obtain a list of [`Polyomino`]s representing all unique expansions of
/// the items in `from_set`, in the order they are first produced.
///
/// `from_set` should contain every free polyomino of some size N exactly
/// once, in which case the result contains every free polyomino of size
/// N + 1 exactly once.
///
/// Progress is reported through `bar`, one tick per item of `from_set`.
/// Pass [`ProgressBar::hidden`] to stay silent.
pub fn unique_expansions<'a, I>(from_set: I, bar: &ProgressBar) -> Vec<Polyomino>
where
    I: Iterator<Item = &'a Polyomino> + ExactSizeIterator,
{
    bar.set_length(from_set.len() as u64);
    bar.set_position(0);

    let mut this_level: Vec<Polyomino> = Vec::new();

    for (iter, value) in from_set.enumerate() {
        let base: Shape = value.representation();

        for expansion in base.expand() {
            let signature = expansion.signature();

            if !already_represented(&this_level, &signature) {
                this_level.push(Polyomino::new(&expansion));
            }
        }

        bar.inc(1);

        // Try to avoid doing this too often
        if iter % (this_level.len() / 100).max(100) == 0 {
            bar.set_message(format!(
                "Unique polyominoes for N = {} so far: {}",
                value.size() + 1,
                this_level.len()
            ));
        }
    }

    this_level
}

/// An iterator over the [`Level`]s of all sizes from 1 up to and
/// including the target size.
///
/// Each level is built from the previous one, so only the most recent
/// level is kept alive by the iterator itself.
#[derive(Clone, Debug)]
pub struct Enumeration {
    target: usize,
    current: Option<Level>,
}

impl Enumeration {
    /// Prepare the enumeration of all free polyominoes up to size `n`.
    pub fn new(n: usize) -> Result<Self, EnumerateError> {
        if n == 0 {
            return Err(EnumerateError::ZeroSize);
        }

        Ok(Self {
            target: n,
            current: None,
        })
    }

    /// The size of the level that the next call to
    /// [`next_level`](Self::next_level) produces, if any.
    pub fn next_n(&self) -> Option<usize> {
        let next = self.current.as_ref().map(|l| l.n + 1).unwrap_or(1);
        (next <= self.target).then_some(next)
    }

    /// Compute the next level, reporting progress through `bar`.
    pub fn next_level(&mut self, bar: &ProgressBar) -> Option<Level> {
        let next_n = self.next_n()?;

        let level = match &self.current {
            None => Level::seed(),
            Some(previous) => Level {
                n: next_n,
                polyominoes: Arc::new(unique_expansions(previous.polyominoes.iter(), bar)),
            },
        };

        self.current = Some(level.clone());
        Some(level)
    }
}

impl Iterator for Enumeration {
    type Item = Level;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_level(&ProgressBar::hidden())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self
            .next_n()
            .map(|next| self.target + 1 - next)
            .unwrap_or(0);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Enumeration {}

/// Find all free polyominoes made of `n` squares, in the order in which
/// they are first discovered.
///
/// ```
/// let tetrominoes = polyominoes::polyominoes(4).unwrap();
/// assert_eq!(tetrominoes.len(), 5);
/// ```
pub fn polyominoes(n: usize) -> Result<Vec<Polyomino>, EnumerateError> {
    Enumeration::new(n)?
        .last()
        .map(Level::into_vec)
        .ok_or(EnumerateError::ZeroSize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert_eq!(Enumeration::new(0).unwrap_err(), EnumerateError::ZeroSize);
        assert_eq!(polyominoes(0).unwrap_err(), EnumerateError::ZeroSize);
    }

    #[test]
    fn yields_every_level() {
        let levels: Vec<_> = Enumeration::new(5).unwrap().collect();

        let sizes: Vec<_> = levels.iter().map(|l| l.n).collect();
        let counts: Vec<_> = levels.iter().map(Level::len).collect();

        assert_eq!(sizes, [1, 2, 3, 4, 5]);
        assert_eq!(counts, [1, 1, 2, 5, 12]);
    }

    #[test]
    fn size_hint_counts_down() {
        let mut e = Enumeration::new(3).unwrap();

        assert_eq!(e.len(), 3);
        assert_eq!(e.next_n(), Some(1));
        e.next();
        assert_eq!(e.len(), 2);
        e.next();
        e.next();
        assert_eq!(e.len(), 0);
        assert_eq!(e.next_n(), None);
        assert!(e.next().is_none());
    }

    #[test]
    fn expansions_of_tetrominoes() {
        let tetrominoes = polyominoes(4).unwrap();

        let bar = ProgressBar::hidden();
        let pentominoes = unique_expansions(tetrominoes.iter(), &bar);

        assert_eq!(pentominoes.len(), 12);
        assert_eq!(bar.position(), 5);
        assert_eq!(bar.length(), Some(5));
    }

    #[test]
    fn already_represented_checks_all_orientations() {
        let domino = Shape::monomino().expand().next().unwrap();
        let found = vec![Polyomino::monomino(), Polyomino::new(&domino)];

        let vertical: Shape = "[[3,3],[3,4]]".parse().unwrap();
        let bent: Shape = "[[0,0],[1,0],[1,1]]".parse().unwrap();

        assert!(already_represented(&found, &vertical.signature()));
        assert!(!already_represented(&found, &bent.signature()));
    }
}
