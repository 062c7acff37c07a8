use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use log::debug;

use super::{Arena, Iter, IterMut, Link, ListContents, ListState, Node, NodeId, ONE};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, DetachedNode, DetachedOrCapOverflow};
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

use ListState::*;

/// A list with links in one direction only: the list knows its first node and every node knows
/// its successor. Inserting operations return a [`NodeId`] which can later be fed to
/// [`try_insert_after`](SinglyLinkedList::try_insert_after) to splice without a search.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the list.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front/pop_front` | `O(1)` |
/// | `push_back` | `O(n)` |
/// | `insert_after` | `O(1)` |
/// | `remove_value` | `O(n)` |
/// | `contains/find` | `O(n)` |
///
/// `push_back` really is linear: the list deliberately maintains no tail reference, so appending
/// walks the chain to its last node first. For workloads that append in bulk, [`Extend`] performs
/// that walk once and splices after the remembered tail from then on.
///
/// # Invariants
/// The chain is acyclic: following successor links from the first node terminates after visiting
/// each node at most once. Every mutating method preserves this, which is also what makes the
/// yielded-once reasoning of [`IterMut`] sound.
pub struct SinglyLinkedList<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) state: ListState,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new list with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            arena: Arena::new(),
            state: Empty,
        }
    }

    /// Returns the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        let head = self.state.head()?;
        // SAFETY: The head of a non-empty list always addresses an occupied slot.
        Some(&unsafe { self.arena.get(head).unreachable() }.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.state.head()?;
        // SAFETY: The head of a non-empty list always addresses an occupied slot.
        Some(&mut unsafe { self.arena.get_mut(head).unreachable() }.value)
    }

    /// Returns a reference to the element the provided handle addresses, or [`None`] if the
    /// handle is detached.
    pub fn get(&self, node: NodeId) -> Option<&T> {
        Some(&self.arena.get(node)?.value)
    }

    /// Returns a mutable reference to the element the provided handle addresses, or [`None`] if
    /// the handle is detached.
    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut T> {
        Some(&mut self.arena.get_mut(node)?.value)
    }

    /// Returns the handle of the node following `node`, if both exist.
    pub fn successor(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node)?.next
    }

    /// Links the provided element before the current first node, making it the new first node.
    pub fn push_front(&mut self, value: T) -> NodeId {
        match &mut self.state {
            Empty => {
                let head = self.arena.insert(Node { value, next: None });
                self.state = Full(ListContents { len: ONE, head });
                head
            },
            Full(contents) => {
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();
                let head = self.arena.insert(Node {
                    value,
                    next: Some(contents.head),
                });
                contents.head = head;
                head
            },
        }
    }

    /// Links the provided element after the current last node, walking the chain to find it.
    pub fn push_back(&mut self, value: T) -> NodeId {
        match &mut self.state {
            Empty => {
                let head = self.arena.insert(Node { value, next: None });
                self.state = Full(ListContents { len: ONE, head });
                head
            },
            Full(contents) => {
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();
                let head = contents.head;
                let tail = self.tail_from(head);
                let id = self.arena.insert(Node { value, next: None });
                // SAFETY: `tail` was just found by walking the chain.
                unsafe { self.arena.get_mut(tail).unreachable() }.next = Some(id);
                id
            },
        }
    }

    /// Splices a new element holding `value` immediately after the node addressed by `after`,
    /// preserving the remainder of the chain.
    ///
    /// When `after` is detached the list is left untouched and the failure is reported through
    /// the [`Err`] variant. A handle whose slot has been recycled by later insertions addresses
    /// the newer node instead; the list cannot tell the two apart (see [`NodeId`]).
    pub fn try_insert_after(
        &mut self,
        after: NodeId,
        value: T,
    ) -> Result<NodeId, DetachedOrCapOverflow> {
        let successor = match self.arena.get(after) {
            Some(node) => node.next,
            None => {
                debug!("insert target {after:?} is not attached to this list; nothing inserted");
                return Err(DetachedNode { index: after.index() }.into());
            },
        };

        // SAFETY: An occupied slot implies a non-empty list.
        let contents = unsafe { self.state.contents_mut().unreachable() };
        contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow)?;

        let id = self.arena.insert(Node { value, next: successor });
        // SAFETY: `after` was just read from an occupied slot.
        unsafe { self.arena.get_mut(after).unreachable() }.next = Some(id);
        Ok(id)
    }

    /// Splices a new element holding `value` immediately after the node addressed by `after`,
    /// panicking on a failure.
    ///
    /// # Panics
    /// Panics if `after` is detached. See
    /// [`try_insert_after`](SinglyLinkedList::try_insert_after) for the reporting version.
    pub fn insert_after(&mut self, after: NodeId, value: T) -> NodeId {
        self.try_insert_after(after, value).throw()
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let ListContents { len, head } = *self.state.contents()?;
        // SAFETY: The head of a non-empty list always addresses an occupied slot.
        let node = unsafe { self.arena.remove(head).unreachable() };

        self.state = match len.checked_sub(1) {
            Some(new_len) => Full(ListContents {
                len: new_len,
                // SAFETY: Previous length was greater than 1, so the first node is followed by
                // at least one more.
                head: unsafe { node.next.unreachable() },
            }),
            None => Empty,
        };

        Some(node.value)
    }

    /// Drops every element. Handles issued before the call are all detached afterwards.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.state = Empty;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// The last node reachable from `start`.
    fn tail_from(&self, start: NodeId) -> NodeId {
        let mut curr = start;
        // SAFETY: Every id reachable from a node of the chain addresses an occupied slot.
        while let Some(next) = unsafe { self.arena.get(curr).unreachable() }.next {
            curr = next;
        }
        curr
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns true if some element of the list equals `key`.
    pub fn contains(&self, key: &T) -> bool {
        for value in self.iter() {
            if value == key { return true; }
        }
        false
    }

    /// Returns the handle of the first node whose element equals `key`.
    pub fn find(&self, key: &T) -> Option<NodeId> {
        let mut curr = self.state.head();
        while let Some(id) = curr {
            // SAFETY: Every id reachable from the head addresses an occupied slot.
            let node = unsafe { self.arena.get(id).unreachable() };
            if node.value == *key { return Some(id); }
            curr = node.next;
        }
        None
    }

    /// Unlinks the first node whose element equals `key` and returns the element. The relative
    /// order of all other elements is preserved.
    ///
    /// Absence of the key is a normal outcome, reported as [`None`] rather than an error. Only
    /// the first matching node is removed.
    pub fn remove_value(&mut self, key: &T) -> Option<T> {
        let ListContents { len, head } = match &self.state {
            Empty => {
                debug!("removal from an empty list; nothing removed");
                return None;
            },
            Full(contents) => *contents,
        };

        let mut prev: Link = None;
        let mut curr = head;
        let (prev, target, successor) = loop {
            // SAFETY: Every id reachable from the head addresses an occupied slot.
            let node = unsafe { self.arena.get(curr).unreachable() };
            if node.value == *key {
                break (prev, curr, node.next);
            }
            match node.next {
                Some(next) => {
                    prev = Some(curr);
                    curr = next;
                },
                None => {
                    debug!("no node holds the requested value; nothing removed");
                    return None;
                },
            }
        };

        if let Some(prev) = prev {
            // SAFETY: `prev` lies on the chain.
            unsafe { self.arena.get_mut(prev).unreachable() }.next = successor;
        }

        self.state = match len.checked_sub(1) {
            Some(new_len) => Full(ListContents {
                len: new_len,
                head: match prev {
                    Some(_) => head,
                    // SAFETY: Removing the head of a list of two or more promotes its successor,
                    // which must therefore exist.
                    None => unsafe { successor.unreachable() },
                },
            }),
            None => Empty,
        };

        // SAFETY: `target` was found on the chain, so its slot is occupied.
        let node = unsafe { self.arena.remove(target).unreachable() };
        Some(node.value)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    /// Appends every item of `iter`, walking to the current tail once rather than per item.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut last = self.state.head().map(|head| self.tail_from(head));
        for value in iter {
            last = Some(match last {
                // The remembered tail came from this list, so the splice cannot report it
                // detached.
                Some(tail) => self.try_insert_after(tail, value).throw(),
                None => self.push_front(value),
            });
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    /// Cloning compacts: the clone's nodes occupy a fresh arena with no vacant slots, so handles
    /// from the original don't carry over.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
        // Terminate variable length hashing sequence.
        0xFF_u8.hash(state);
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &DebugRaw(format!("{self}")))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
