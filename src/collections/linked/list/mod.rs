mod arena;
mod iter;
mod singly_linked_list;
mod state;

pub use arena::NodeId;
pub(crate) use arena::{Arena, Link, Node};
pub use iter::*;
pub use singly_linked_list::*;
pub(crate) use state::*;
