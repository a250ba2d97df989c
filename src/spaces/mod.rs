//! Observation and action spaces
mod index;
mod singleton;

pub use index::IndexSpace;
pub use singleton::SingletonSpace;

use crate::logging::Loggable;
use rand::Rng;

/// A set of possible values.
pub trait Space {
    type Element;

    /// Check whether a particular value is contained in this space.
    fn contains(&self, value: &Self::Element) -> bool;

    /// Convert an element into a loggable value.
    fn as_loggable(&self, element: &Self::Element) -> Loggable;
}

/// A space containing finitely many elements, indexable by `0 .. size - 1`.
pub trait FiniteSpace: Space {
    /// The number of elements in this space.
    fn size(&self) -> usize;

    /// The index of an element of this space.
    fn to_index(&self, element: &Self::Element) -> usize;

    /// The element with a given index; `None` if the index is out of range.
    fn from_index(&self, index: usize) -> Option<Self::Element>;
}

/// A space from which elements can be uniformly sampled.
pub trait SampleSpace: Space {
    /// Sample an element uniformly at random.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element;
}
