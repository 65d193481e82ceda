//! Free polyominoes, identified by the signatures of all of their
//! orientations.

use hashbrown::HashSet;

use crate::{Shape, Signature};

mod orientations;

pub use orientations::Orientations;

/// A free polyomino.
///
/// Stores the [`Signature`] of every rotation and reflection of the shape
/// it was created from. There are at most 8 of them: a shape without any
/// symmetry of its own has exactly 8, the domino has 4 and the monomino
/// and the 2x2 square have 1.
///
/// Two polyominoes are equal if they are the same free polyomino, i.e.
/// one can be rotated and/or reflected into the other.
#[derive(Clone, Debug)]
pub struct Polyomino {
    signatures: HashSet<Signature>,
    canonical: Signature,
}

impl Polyomino {
    /// Create the [`Polyomino`] that `shape` is a placement of.
    pub fn new(shape: &Shape) -> Self {
        let signatures: HashSet<Signature> =
            shape.all_orientations().map(|v| v.signature()).collect();

        // Never empty, the identity orientation is always included.
        let canonical = signatures
            .iter()
            .min()
            .cloned()
            .unwrap_or_else(|| shape.signature());

        Self {
            signatures,
            canonical,
        }
    }

    /// The polyomino made of a single square.
    pub fn monomino() -> Self {
        Self::new(&Shape::monomino())
    }

    /// Returns whether `shape` is a placement of this polyomino, in any
    /// position and orientation.
    pub fn is_represented_by(&self, shape: &Shape) -> bool {
        self.contains_signature(&shape.signature())
    }

    /// Returns whether `signature` is one of the orientations of this
    /// polyomino.
    pub fn contains_signature(&self, signature: &Signature) -> bool {
        self.signatures.contains(signature)
    }

    /// Get one concrete placement of this polyomino.
    ///
    /// This is always the [canonical](Self::canonical) orientation.
    pub fn representation(&self) -> Shape {
        Shape::from_valid_signature(&self.canonical)
    }

    /// The least signature among all orientations.
    pub fn canonical(&self) -> &Signature {
        &self.canonical
    }

    /// Iterate over the signatures of all distinct orientations, in no
    /// particular order.
    pub fn signatures(&self) -> impl Iterator<Item = &Signature> + '_ {
        self.signatures.iter()
    }

    /// The amount of squares in this polyomino.
    pub fn size(&self) -> usize {
        self.canonical.len()
    }

    /// The amount of distinct orientations of this polyomino.
    pub fn symmetry_count(&self) -> usize {
        self.signatures.len()
    }
}

impl From<&Shape> for Polyomino {
    fn from(value: &Shape) -> Self {
        Self::new(value)
    }
}

impl PartialEq for Polyomino {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Polyomino {}

impl std::hash::Hash for Polyomino {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // The full signature set is determined by any one of its members,
        // so hashing the canonical one is enough.
        self.canonical.hash(state);
    }
}

impl core::fmt::Display for Polyomino {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.canonical)
    }
}
