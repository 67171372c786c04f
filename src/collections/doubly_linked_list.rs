//! `DoublyLinkedList` — a doubly linked list over an index-addressed arena.
//!
//! Nodes live in a slot arena and point at each other by stable index, with
//! vacated slots chained into an intrusive free list for reuse. Expressing
//! the `prev` link as an index rather than an owning reference dissolves the
//! ownership cycle a pointer-based doubly linked structure would otherwise
//! create: removal is a plain slot release, and no reference counting is
//! involved anywhere.
//!
//! Indexed access walks from whichever end is closer to the target, bounding
//! the cost of `get`/`set`/`insert`/`remove` at `min(index, len - index)`
//! link hops.

use crate::error::{Empty, IndexBound, IndexOutOfRange};
use core::fmt;
use core::iter::FusedIterator;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A single list node: one owned value plus its neighbour links.
#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// One arena slot: either a live node or a link in the free list.
#[derive(Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Free { next_free: Option<usize> },
}

/// A doubly linked list with O(1) operations at both ends and
/// midpoint-relative indexed access.
///
/// The length is maintained incrementally and never recomputed by traversal.
/// After every mutating call the linkage is fully symmetric: each interior
/// node's neighbours point back at it, and the anchors' outer links are
/// absent.
///
/// # Examples
///
/// ```
/// use tandem::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// list.push_back("b");
/// list.push_back("c");
/// list.push_front("a");
///
/// assert_eq!(list.get(1), Ok(&"b"));
/// assert_eq!(list.index_of(&"c"), Some(2));
/// assert_eq!(list.pop_back(), Ok("c"));
/// ```
pub struct DoublyLinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, index: usize) -> &Node<T> {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => panic!("corrupted list: live link points at free slot {index}"),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => panic!("corrupted list: live link points at free slot {index}"),
        }
    }

    /// Stores a node, reusing a freed slot when one is available.
    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free_head {
            Some(index) => {
                let next_free = match self.slots[index] {
                    Slot::Free { next_free } => next_free,
                    Slot::Occupied(_) => {
                        panic!("corrupted list: free head points at occupied slot {index}")
                    }
                };
                self.slots[index] = Slot::Occupied(node);
                self.free_head = next_free;
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Returns a slot to the free list and extracts its value.
    ///
    /// The slot's own links are overwritten in the same move, so a released
    /// node never retains dangling links into the live chain.
    fn release(&mut self, index: usize) -> T {
        let freed = Slot::Free {
            next_free: self.free_head,
        };
        match core::mem::replace(&mut self.slots[index], freed) {
            Slot::Occupied(node) => {
                self.free_head = Some(index);
                node.value
            }
            Slot::Free { .. } => panic!("corrupted list: released slot {index} was already free"),
        }
    }

    /// Detaches the node at slot `index` from the chain and returns its
    /// value. Relinks both neighbours (or the anchors at the ends) before
    /// releasing the slot.
    fn unlink(&mut self, index: usize) -> T {
        let (prev, next) = {
            let node = self.node(index);
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        self.release(index)
    }

    /// Slot index of the node at logical position `index`.
    ///
    /// Walks from the head when the position is in the first half, from the
    /// tail otherwise. Caller guarantees `index < len`.
    fn slot_at(&self, index: usize) -> usize {
        if index < self.len / 2 {
            let mut current = match self.head {
                Some(head) => head,
                None => panic!("corrupted list: non-zero length with no head"),
            };
            for _ in 0..index {
                current = match self.node(current).next {
                    Some(next) => next,
                    None => panic!("corrupted list: chain ends before position {index}"),
                };
            }
            current
        } else {
            let mut current = match self.tail {
                Some(tail) => tail,
                None => panic!("corrupted list: non-zero length with no tail"),
            };
            for _ in index..self.len - 1 {
                current = match self.node(current).prev {
                    Some(prev) => prev,
                    None => panic!("corrupted list: chain ends before position {index}"),
                };
            }
            current
        }
    }

    fn check_access(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index >= self.len {
            return Err(IndexOutOfRange {
                index,
                len: self.len,
                bound: IndexBound::Access,
            });
        }
        Ok(())
    }

    /// Prepends an element to the front of the list.
    pub fn push_front(&mut self, value: T) {
        let index = self.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.node_mut(head).prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.len += 1;
    }

    /// Appends an element to the back of the list.
    pub fn push_back(&mut self, value: T) {
        let index = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list holds no elements.
    pub fn pop_front(&mut self) -> Result<T, Empty> {
        match self.head {
            Some(head) => Ok(self.unlink(head)),
            None => Err(Empty),
        }
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list holds no elements.
    pub fn pop_back(&mut self) -> Result<T, Empty> {
        match self.tail {
            Some(tail) => Ok(self.unlink(tail)),
            None => Err(Empty),
        }
    }

    /// Returns a reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list holds no elements.
    pub fn front(&self) -> Result<&T, Empty> {
        match self.head {
            Some(head) => Ok(&self.node(head).value),
            None => Err(Empty),
        }
    }

    /// Returns a reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list holds no elements.
    pub fn back(&self) -> Result<&T, Empty> {
        match self.tail {
            Some(tail) => Ok(&self.node(tail).value),
            None => Err(Empty),
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.check_access(index)?;
        Ok(&self.node(self.slot_at(index)).value)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] unless `index < len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        self.check_access(index)?;
        let slot = self.slot_at(index);
        Ok(&mut self.node_mut(slot).value)
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] unless `index < len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfRange> {
        let current = self.get_mut(index)?;
        Ok(core::mem::replace(current, value))
    }

    /// Inserts an element at position `index`, shifting everything from that
    /// position towards the back by one.
    ///
    /// `index == len` is valid and equivalent to [`push_back`].
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] unless `index <= len`.
    ///
    /// [`push_back`]: DoublyLinkedList::push_back
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange> {
        if index > self.len {
            return Err(IndexOutOfRange {
                index,
                len: self.len,
                bound: IndexBound::Insert,
            });
        }
        if index == 0 {
            self.push_front(value);
        } else if index == self.len {
            self.push_back(value);
        } else {
            let at = self.slot_at(index);
            let before = match self.node(at).prev {
                Some(prev) => prev,
                None => panic!("corrupted list: interior node has no predecessor"),
            };
            let fresh = self.alloc(Node {
                value,
                prev: Some(before),
                next: Some(at),
            });
            self.node_mut(before).next = Some(fresh);
            self.node_mut(at).prev = Some(fresh);
            self.len += 1;
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] unless `index < len`.
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        self.check_access(index)?;
        Ok(self.unlink(self.slot_at(index)))
    }

    /// Clears the list.
    ///
    /// The whole arena is dropped, so no released node keeps links into the
    /// former chain; both anchors, the free list, and the length reset.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }

    /// Iterates head to tail over the current elements.
    ///
    /// Supports reverse traversal through [`DoubleEndedIterator`]. The
    /// iterator borrows the list, so mutating it mid-iteration is rejected
    /// at compile time.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Removes the first element equal to `value`, scanning from the head.
    ///
    /// Returns whether a match was found and removed. "Not found" is an
    /// ordinary outcome here, not an error, unlike the indexed operations.
    pub fn remove_value(&mut self, value: &T) -> bool {
        let mut current = self.head;
        while let Some(index) = current {
            if self.node(index).value == *value {
                self.unlink(index);
                return true;
            }
            current = self.node(index).next;
        }
        false
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Position of the first element equal to `value`, scanning from the
    /// head.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|element| element == value)
    }

    /// Position of the last element equal to `value`, scanning from the
    /// tail.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        let mut current = self.tail;
        let mut index = self.len;
        while let Some(slot) = current {
            index -= 1;
            if self.node(slot).value == *value {
                return Some(index);
            }
            current = self.node(slot).prev;
        }
        None
    }
}

impl<T: fmt::Display> DoublyLinkedList<T> {
    /// Renders the elements tail to head, mirroring the `Display` output.
    pub fn to_reverse_string(&self) -> String {
        let mut out = String::from("[");
        let mut elements = self.iter().rev();
        if let Some(first) = elements.next() {
            out.push_str(&first.to_string());
            for value in elements {
                out.push_str(", ");
                out.push_str(&value.to_string());
            }
        }
        out.push(']');
        out
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    /// Renders the elements head to tail, comma-separated and bracketed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut elements = self.iter();
        if let Some(first) = elements.next() {
            write!(f, "{first}")?;
            for value in elements {
                write!(f, ", {value}")?;
            }
        }
        f.write_str("]")
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    /// Builds the arena in one pass: element `i` links to `i - 1` and
    /// `i + 1` directly, no per-element relinking.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let slots: Vec<Slot<T>> = iter
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                Slot::Occupied(Node {
                    value,
                    prev: i.checked_sub(1),
                    next: Some(i + 1),
                })
            })
            .collect();
        let len = slots.len();
        if len == 0 {
            return Self::new();
        }
        let mut list = Self {
            slots,
            head: Some(0),
            tail: Some(len - 1),
            free_head: None,
            len,
        };
        list.node_mut(len - 1).next = None;
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

/// Borrowing iterator over a [`DoublyLinkedList`].
///
/// Walks `next` links from the head; the reverse direction walks `prev`
/// links from the tail. Both ends share the `remaining` budget, so a
/// fully-consumed iterator stays exhausted no matter which end advanced.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.front?;
        let node = self.list.node(index);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.back?;
        let node = self.list.node(index);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that drains a [`DoublyLinkedList`] head to tail.
pub struct IntoIter<T>(DoublyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<T: Serialize> Serialize for DoublyLinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DoublyLinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|values| values.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{IndexBound, IndexOutOfRange};

    impl<T> DoublyLinkedList<T> {
        /// Whole-structure audit: walks the chain both ways, checks linkage
        /// symmetry, anchor links, the incremental length, and that free and
        /// occupied slots partition the arena.
        fn assert_linked(&self) {
            if self.len == 0 {
                assert_eq!(self.head, None);
                assert_eq!(self.tail, None);
                return;
            }
            let head = self.head.expect("non-empty list has a head");
            let tail = self.tail.expect("non-empty list has a tail");
            assert_eq!(self.node(head).prev, None, "head.prev must be absent");
            assert_eq!(self.node(tail).next, None, "tail.next must be absent");

            let mut seen = 0;
            let mut current = Some(head);
            let mut last_visited = None;
            while let Some(index) = current {
                let node = self.node(index);
                assert_eq!(node.prev, last_visited, "symmetric linkage violated");
                last_visited = Some(index);
                current = node.next;
                seen += 1;
                assert!(seen <= self.len, "chain longer than recorded length");
            }
            assert_eq!(seen, self.len, "chain shorter than recorded length");
            assert_eq!(last_visited, Some(tail), "forward walk must end at tail");

            let mut free = 0;
            let mut cursor = self.free_head;
            while let Some(index) = cursor {
                cursor = match self.slots[index] {
                    Slot::Free { next_free } => next_free,
                    Slot::Occupied(_) => panic!("free list reaches occupied slot"),
                };
                free += 1;
                assert!(free <= self.slots.len());
            }
            assert_eq!(free + self.len, self.slots.len(), "arena partition broken");
        }
    }

    #[test]
    fn push_pop_basic() {
        let mut list = DoublyLinkedList::new();
        assert!(list.is_empty());
        list.push_back(1);
        list.push_back(2);
        list.push_front(0);
        list.assert_linked();

        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Ok(&0));
        assert_eq!(list.back(), Ok(&2));

        assert_eq!(list.pop_front(), Ok(0));
        list.assert_linked();
        assert_eq!(list.pop_back(), Ok(2));
        list.assert_linked();
        assert_eq!(list.pop_back(), Ok(1));
        assert_eq!(list.pop_back(), Err(Empty));
        assert!(list.is_empty());
        list.assert_linked();
    }

    #[test]
    fn empty_accessors_fail() {
        let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
        assert_eq!(list.front(), Err(Empty));
        assert_eq!(list.back(), Err(Empty));
    }

    #[test]
    fn get_walks_from_nearest_end() {
        let list: DoublyLinkedList<usize> = (0..101).collect();
        for i in [0, 1, 49, 50, 51, 99, 100] {
            assert_eq!(list.get(i), Ok(&i));
        }
        assert_eq!(
            list.get(101),
            Err(IndexOutOfRange {
                index: 101,
                len: 101,
                bound: IndexBound::Access,
            })
        );
    }

    #[test]
    fn set_returns_previous_value() {
        let mut list: DoublyLinkedList<i32> = (0..3).collect();
        assert_eq!(list.set(1, 10), Ok(1));
        assert_eq!(list.get(1), Ok(&10));
        assert!(list.set(3, 0).is_err());
        list.assert_linked();
    }

    #[test]
    fn insert_at_boundaries_and_interior() {
        let mut list = DoublyLinkedList::new();
        list.insert(0, 2).unwrap(); // empty list, both anchors set
        list.insert(0, 0).unwrap(); // front
        list.insert(2, 4).unwrap(); // index == len, back
        list.insert(1, 1).unwrap(); // interior splice
        list.insert(3, 3).unwrap(); // interior splice near tail
        list.assert_linked();
        let contents: Vec<i32> = list.iter().copied().collect();
        assert_eq!(contents, vec![0, 1, 2, 3, 4]);

        assert_eq!(
            list.insert(6, 9),
            Err(IndexOutOfRange {
                index: 6,
                len: 5,
                bound: IndexBound::Insert,
            })
        );
    }

    #[test]
    fn remove_by_index() {
        let mut list: DoublyLinkedList<i32> = (0..5).collect();
        assert_eq!(list.remove(2), Ok(2)); // interior
        list.assert_linked();
        assert_eq!(list.remove(0), Ok(0)); // head
        list.assert_linked();
        assert_eq!(list.remove(2), Ok(4)); // tail
        list.assert_linked();
        let contents: Vec<i32> = list.iter().copied().collect();
        assert_eq!(contents, vec![1, 3]);
        assert!(list.remove(2).is_err());
    }

    #[test]
    fn remove_value_is_boolean_not_an_error() {
        let mut list: DoublyLinkedList<i32> = [1, 2, 3, 2].into_iter().collect();
        assert!(list.remove_value(&2)); // first match only
        list.assert_linked();
        let contents: Vec<i32> = list.iter().copied().collect();
        assert_eq!(contents, vec![1, 3, 2]);
        assert!(!list.remove_value(&9)); // not found: false, not Err
        assert!(list.remove_value(&1)); // head removal relinks the anchor
        assert!(list.remove_value(&2)); // tail removal relinks the anchor
        list.assert_linked();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn scans_and_contains() {
        let list: DoublyLinkedList<i32> = [5, 7, 5, 9].into_iter().collect();
        assert_eq!(list.index_of(&5), Some(0));
        assert_eq!(list.last_index_of(&5), Some(2));
        assert_eq!(list.index_of(&9), Some(3));
        assert_eq!(list.index_of(&8), None);
        assert_eq!(list.last_index_of(&8), None);
        assert!(list.contains(&7));
        assert!(!list.contains(&8));
    }

    #[test]
    fn index_and_iteration_agree() {
        let list: DoublyLinkedList<i32> = [4, 8, 15, 16, 23, 42].into_iter().collect();
        for (i, value) in list.iter().enumerate() {
            assert_eq!(list.get(i), Ok(value));
            assert!(list.index_of(value).unwrap() <= i);
        }
    }

    #[test]
    fn clear_resets_everything() {
        let mut list: DoublyLinkedList<i32> = (0..10).collect();
        list.remove(3).unwrap(); // leave a free slot behind
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.assert_linked();
        list.push_back(1);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.back(), Ok(&1));
        list.assert_linked();
    }

    #[test]
    fn sole_element_removal_resets_to_fresh_state() {
        let mut list = DoublyLinkedList::new();
        list.push_back(42);
        assert_eq!(list.remove(0), Ok(42));
        assert!(list.is_empty());
        list.assert_linked();
        list.push_front(7);
        assert_eq!(list.front(), Ok(&7));
        assert_eq!(list.back(), Ok(&7));
        list.assert_linked();
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut list: DoublyLinkedList<i32> = (0..4).collect();
        list.pop_front().unwrap();
        list.pop_back().unwrap();
        let arena_size = list.slots.len();
        list.push_back(10);
        list.push_front(20);
        assert_eq!(list.slots.len(), arena_size, "free slots should be reused");
        list.assert_linked();
    }

    #[test]
    fn reverse_iteration_mirrors_forward() {
        let list: DoublyLinkedList<i32> = (0..6).collect();
        let forward: Vec<i32> = list.iter().copied().collect();
        let mut backward: Vec<i32> = list.iter().rev().copied().collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn iterator_meets_in_the_middle() {
        let list: DoublyLinkedList<i32> = (0..4).collect();
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn display_and_reverse_mirror() {
        let list: DoublyLinkedList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.to_string(), "[1, 2, 3]");
        assert_eq!(list.to_reverse_string(), "[3, 2, 1]");

        let empty: DoublyLinkedList<i32> = DoublyLinkedList::new();
        assert_eq!(empty.to_string(), "[]");
        assert_eq!(empty.to_reverse_string(), "[]");
    }

    #[test]
    fn into_iter_drains_both_ends() {
        let list: DoublyLinkedList<i32> = (0..5).collect();
        let mut drain = list.into_iter();
        assert_eq!(drain.next(), Some(0));
        assert_eq!(drain.next_back(), Some(4));
        let rest: Vec<i32> = drain.collect();
        assert_eq!(rest, vec![1, 2, 3]);
    }

    #[test]
    fn from_iterator_links_in_one_pass() {
        let list: DoublyLinkedList<i32> = (0..100).collect();
        assert_eq!(list.len(), 100);
        list.assert_linked();
    }
}
