use super::{FiniteSpace, SampleSpace, Space};
use crate::logging::Loggable;
use rand::Rng;
use std::fmt;

/// An index space; integers `0 .. size - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpace {
    pub size: usize,
}

impl IndexSpace {
    pub const fn new(size: usize) -> Self {
        Self { size }
    }
}

impl fmt::Display for IndexSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IndexSpace({})", self.size)
    }
}

impl Space for IndexSpace {
    type Element = usize;

    fn contains(&self, value: &Self::Element) -> bool {
        value < &self.size
    }

    fn as_loggable(&self, element: &Self::Element) -> Loggable {
        Loggable::IndexSample {
            value: *element,
            size: self.size,
        }
    }
}

impl FiniteSpace for IndexSpace {
    fn size(&self) -> usize {
        self.size
    }

    fn to_index(&self, element: &Self::Element) -> usize {
        *element
    }

    fn from_index(&self, index: usize) -> Option<Self::Element> {
        if index < self.size {
            Some(index)
        } else {
            None
        }
    }
}

impl SampleSpace for IndexSpace {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element {
        rng.gen_range(0..self.size)
    }
}
