use super::{FiniteSpace, SampleSpace, Space};
use crate::logging::Loggable;
use rand::Rng;
use std::fmt;

/// A space containing a single element, `()`.
///
/// Observations from this space carry no information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingletonSpace;

impl SingletonSpace {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SingletonSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SingletonSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SingletonSpace")
    }
}

impl Space for SingletonSpace {
    type Element = ();

    fn contains(&self, _value: &Self::Element) -> bool {
        true
    }

    fn as_loggable(&self, _element: &Self::Element) -> Loggable {
        Loggable::Nothing
    }
}

impl FiniteSpace for SingletonSpace {
    fn size(&self) -> usize {
        1
    }

    fn to_index(&self, _element: &Self::Element) -> usize {
        0
    }

    fn from_index(&self, index: usize) -> Option<Self::Element> {
        if index == 0 {
            Some(())
        } else {
            None
        }
    }
}

impl SampleSpace for SingletonSpace {
    fn sample<R: Rng + ?Sized>(&self, _rng: &mut R) -> Self::Element {}
}
