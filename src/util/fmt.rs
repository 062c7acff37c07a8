//! Helpers for implementing [`Debug`] and [`Display`](std::fmt::Display).

use std::fmt::{self, Debug, Formatter};

/// Wraps a pre-rendered string so that it can be passed to [`Formatter`] helpers which expect a
/// [`Debug`] value, without gaining an extra layer of quoting.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
