//! Error types shared by the collection modules.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The error produced when a node handle is passed back to a list which no longer contains the
/// node it was issued for.
#[derive(Debug)]
pub struct DetachedNode {
    /// The arena slot the handle addressed.
    pub index: usize,
}

impl Display for DetachedNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Node handle for slot {} is not attached to this list!", self.index)
    }
}

impl Error for DetachedNode {}

/// The error produced when a length computation exceeds [`usize::MAX`].
#[derive(Debug)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// Either of the two failures a checked splice can report.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum DetachedOrCapOverflow {
    /// See [`DetachedNode`].
    DetachedNode(DetachedNode),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}
