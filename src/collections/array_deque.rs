//! `ArrayDeque` — a growable double-ended queue over a circular buffer.
//!
//! The backing storage is a fixed-length run of slots treated as a ring: the
//! logical sequence may wrap from the last physical slot back to the first,
//! so pushing or popping at either end never shifts elements. When the ring
//! fills up it is relinearized into a buffer of capacity `2n + 1`, which
//! amortizes growth to O(1) per push and guarantees progress even from
//! capacity 0.
//!
//! Logical emptiness is a tagged state, not a reserved index value: the
//! `first`/`last` window only exists while at least one element does, so
//! there is no sentinel arithmetic to get wrong at the empty boundary.

use crate::error::Empty;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

const DEFAULT_CAPACITY: usize = 10;

/// Position of the live elements within the ring.
///
/// Either the deque is empty, or both ends are valid slot positions. `first`
/// may sit above `last`, in which case the window wraps through the end of
/// the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Window {
    Empty,
    Live { first: usize, last: usize },
}

/// A growable double-ended queue backed by a circular buffer.
///
/// Push and pop at both ends run in O(1) amortized time. Capacity only ever
/// grows; vacated slots are cleared so removed elements are dropped
/// immediately rather than lingering in the ring.
///
/// # Examples
///
/// ```
/// use tandem::ArrayDeque;
///
/// let mut deque = ArrayDeque::new();
/// deque.push_back(2);
/// deque.push_back(3);
/// deque.push_front(1);
///
/// assert_eq!(deque.len(), 3);
/// assert_eq!(deque.pop_front(), Ok(1));
/// assert_eq!(deque.pop_back(), Ok(3));
/// ```
pub struct ArrayDeque<T> {
    slots: Box<[Option<T>]>,
    window: Window,
}

impl<T> ArrayDeque<T> {
    /// Creates an empty deque with the default initial capacity of 10.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty deque with room for `capacity` elements before the
    /// first reallocation.
    ///
    /// A capacity of 0 is valid; the first push grows the ring.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: core::iter::repeat_with(|| None).take(capacity).collect(),
            window: Window::Empty,
        }
    }

    /// Returns the number of elements currently held.
    ///
    /// Computed from the window, never cached: 0 when empty, the direct span
    /// when `first <= last`, otherwise the wraparound span through the end
    /// of the buffer.
    pub fn len(&self) -> usize {
        match self.window {
            Window::Empty => 0,
            Window::Live { first, last } => {
                if first <= last {
                    last - first + 1
                } else {
                    (last + 1) + (self.slots.len() - first)
                }
            }
        }
    }

    /// Returns `true` if the deque holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.window, Window::Empty)
    }

    /// Returns the current capacity of the backing ring.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len() == self.slots.len()
    }

    /// Next slot position clockwise, wrapping past the end of the buffer.
    #[inline]
    fn wrap_add(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }

    /// Previous slot position, wrapping from 0 to the last physical slot.
    /// Explicit branch instead of signed modulo arithmetic.
    #[inline]
    fn wrap_sub(&self, index: usize) -> usize {
        if index == 0 {
            self.slots.len() - 1
        } else {
            index - 1
        }
    }

    /// Prepends an element to the front of the deque.
    ///
    /// Grows the ring first if it is full, so this never fails.
    pub fn push_front(&mut self, value: T) {
        if self.is_full() {
            self.ensure_capacity(2 * self.slots.len() + 1);
        }
        match self.window {
            Window::Empty => {
                self.slots[0] = Some(value);
                self.window = Window::Live { first: 0, last: 0 };
            }
            Window::Live { first, last } => {
                let first = self.wrap_sub(first);
                self.slots[first] = Some(value);
                self.window = Window::Live { first, last };
            }
        }
    }

    /// Appends an element to the back of the deque.
    ///
    /// Grows the ring first if it is full, so this never fails.
    pub fn push_back(&mut self, value: T) {
        if self.is_full() {
            self.ensure_capacity(2 * self.slots.len() + 1);
        }
        match self.window {
            Window::Empty => {
                self.slots[0] = Some(value);
                self.window = Window::Live { first: 0, last: 0 };
            }
            Window::Live { first, last } => {
                let last = self.wrap_add(last);
                self.slots[last] = Some(value);
                self.window = Window::Live { first, last };
            }
        }
    }

    /// Grows the ring to hold at least `capacity` elements.
    ///
    /// Does nothing if the current capacity already suffices. On growth the
    /// live window is copied in logical order to the front of the new
    /// buffer, so afterwards `first` is 0 and `last` is `len - 1`.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if capacity <= self.slots.len() {
            return;
        }
        let len = self.len();
        let mut grown: Vec<Option<T>> = Vec::with_capacity(capacity);
        if let Window::Live { first, .. } = self.window {
            let old_capacity = self.slots.len();
            for offset in 0..len {
                grown.push(self.slots[(first + offset) % old_capacity].take());
            }
        }
        grown.resize_with(capacity, || None);
        self.slots = grown.into_boxed_slice();
        self.window = if len == 0 {
            Window::Empty
        } else {
            Window::Live {
                first: 0,
                last: len - 1,
            }
        };
    }

    /// Returns a reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the deque holds no elements.
    pub fn front(&self) -> Result<&T, Empty> {
        match self.window {
            Window::Empty => Err(Empty),
            Window::Live { first, .. } => Ok(self.occupied(first)),
        }
    }

    /// Returns a reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the deque holds no elements.
    pub fn back(&self) -> Result<&T, Empty> {
        match self.window {
            Window::Empty => Err(Empty),
            Window::Live { last, .. } => Ok(self.occupied(last)),
        }
    }

    /// Removes and returns the front element, clearing its slot.
    ///
    /// Removing the sole element resets the deque to the tagged empty state.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the deque holds no elements.
    pub fn pop_front(&mut self) -> Result<T, Empty> {
        match self.window {
            Window::Empty => Err(Empty),
            Window::Live { first, last } => {
                let value = self.take_occupied(first);
                self.window = if first == last {
                    Window::Empty
                } else {
                    Window::Live {
                        first: self.wrap_add(first),
                        last,
                    }
                };
                Ok(value)
            }
        }
    }

    /// Removes and returns the back element, clearing its slot.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the deque holds no elements.
    pub fn pop_back(&mut self) -> Result<T, Empty> {
        match self.window {
            Window::Empty => Err(Empty),
            Window::Live { first, last } => {
                let value = self.take_occupied(last);
                self.window = if first == last {
                    Window::Empty
                } else {
                    Window::Live {
                        first,
                        last: self.wrap_sub(last),
                    }
                };
                Ok(value)
            }
        }
    }

    /// Reference to the element at logical position `index`, front-relative.
    fn get(&self, index: usize) -> Option<&T> {
        match self.window {
            Window::Empty => None,
            Window::Live { first, .. } => {
                if index >= self.len() {
                    return None;
                }
                self.slots[(first + index) % self.slots.len()].as_ref()
            }
        }
    }

    fn occupied(&self, slot: usize) -> &T {
        match &self.slots[slot] {
            Some(value) => value,
            None => panic!("corrupted ring: window slot {slot} is vacant"),
        }
    }

    fn take_occupied(&mut self, slot: usize) -> T {
        match self.slots[slot].take() {
            Some(value) => value,
            None => panic!("corrupted ring: window slot {slot} is vacant"),
        }
    }

    /// Iterates front to back over the current elements.
    ///
    /// The iterator borrows the deque, so mutating it mid-iteration is
    /// rejected at compile time rather than detected at runtime.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            range: 0..self.len(),
        }
    }
}

impl<T> Default for ArrayDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayDeque<T> {
    /// Renders the elements front to back, comma-separated and bracketed.
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

impl<T> FromIterator<T> for ArrayDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut deque = Self::with_capacity(lower);
        for value in iter {
            deque.push_back(value);
        }
        deque
    }
}

impl<T> Extend<T> for ArrayDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

/// Borrowing iterator over an [`ArrayDeque`], front to back.
pub struct Iter<'a, T> {
    deque: &'a ArrayDeque<T>,
    range: Range<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.range.next()?;
        self.deque.get(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.range.next_back()?;
        self.deque.get(index)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ArrayDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that drains an [`ArrayDeque`] front to back.
pub struct IntoIter<T>(ArrayDeque<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for ArrayDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<T: Serialize> Serialize for ArrayDeque<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ArrayDeque<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|values| values.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_basic() {
        let mut deque = ArrayDeque::new();
        assert!(deque.is_empty());
        assert_eq!(deque.len(), 0);
        assert_eq!(deque.capacity(), 10);

        deque.push_back(1);
        deque.push_back(2);
        deque.push_front(0);

        assert_eq!(deque.len(), 3);
        assert!(!deque.is_empty());
        assert_eq!(deque.front(), Ok(&0));
        assert_eq!(deque.back(), Ok(&2));

        assert_eq!(deque.pop_front(), Ok(0));
        assert_eq!(deque.pop_back(), Ok(2));
        assert_eq!(deque.pop_front(), Ok(1));
        assert!(deque.is_empty());
        assert_eq!(deque.pop_front(), Err(Empty));
    }

    #[test]
    fn empty_accessors_fail() {
        let deque: ArrayDeque<i32> = ArrayDeque::with_capacity(4);
        assert_eq!(deque.front(), Err(Empty));
        assert_eq!(deque.back(), Err(Empty));
    }

    #[test]
    fn wraparound_keeps_logical_order() {
        let mut deque = ArrayDeque::with_capacity(3);
        deque.push_back(1);
        deque.push_back(2);
        deque.push_back(3);
        assert_eq!(deque.pop_front(), Ok(1));
        deque.push_back(4); // wraps into the vacated slot
        assert_eq!(deque.capacity(), 3);
        let contents: Vec<i32> = deque.iter().copied().collect();
        assert_eq!(contents, vec![2, 3, 4]);
    }

    #[test]
    fn push_front_wraps_backwards() {
        let mut deque = ArrayDeque::with_capacity(3);
        deque.push_back(2);
        deque.push_front(1); // first wraps from 0 to capacity - 1
        deque.push_front(0);
        assert_eq!(deque.capacity(), 3);
        let contents: Vec<i32> = deque.iter().copied().collect();
        assert_eq!(contents, vec![0, 1, 2]);
    }

    #[test]
    fn growth_preserves_order() {
        let mut deque = ArrayDeque::with_capacity(2);
        for i in 0..50 {
            deque.push_back(i);
        }
        assert_eq!(deque.len(), 50);
        let contents: Vec<i32> = deque.iter().copied().collect();
        assert_eq!(contents, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn growth_from_zero_capacity() {
        let mut deque = ArrayDeque::with_capacity(0);
        deque.push_front(1); // 2 * 0 + 1 guarantees progress
        assert_eq!(deque.capacity(), 1);
        deque.push_back(2);
        assert_eq!(deque.len(), 2);
        assert_eq!(deque.pop_front(), Ok(1));
        assert_eq!(deque.pop_front(), Ok(2));
    }

    #[test]
    fn growth_relinearizes_wrapped_window() {
        let mut deque = ArrayDeque::with_capacity(3);
        deque.push_back(1);
        deque.push_back(2);
        deque.push_back(3);
        deque.pop_front().unwrap();
        deque.push_back(4); // window now wraps
        deque.push_back(5); // forces growth from a wrapped state
        assert_eq!(deque.capacity(), 7);
        let contents: Vec<i32> = deque.iter().copied().collect();
        assert_eq!(contents, vec![2, 3, 4, 5]);
    }

    #[test]
    fn ensure_capacity_is_noop_below_current() {
        let mut deque = ArrayDeque::with_capacity(8);
        deque.push_back(1);
        deque.ensure_capacity(4);
        assert_eq!(deque.capacity(), 8);
        deque.ensure_capacity(20);
        assert_eq!(deque.capacity(), 20);
        assert_eq!(deque.front(), Ok(&1));
    }

    #[test]
    fn sole_element_removal_resets_to_fresh_state() {
        let mut deque = ArrayDeque::with_capacity(3);
        deque.push_back(42);
        assert_eq!(deque.pop_back(), Ok(42));
        assert!(deque.is_empty());
        // Behaves like a fresh deque: next insertion lands at slot 0.
        deque.push_back(7);
        assert_eq!(deque.window, Window::Live { first: 0, last: 0 });
    }

    #[test]
    fn len_matches_is_empty_throughout() {
        let mut deque = ArrayDeque::with_capacity(2);
        assert_eq!(deque.is_empty(), deque.len() == 0);
        for i in 0..10 {
            deque.push_front(i);
            assert_eq!(deque.is_empty(), deque.len() == 0);
        }
        while deque.pop_back().is_ok() {
            assert_eq!(deque.is_empty(), deque.len() == 0);
        }
    }

    #[test]
    fn iterator_is_double_ended_and_exact() {
        let deque: ArrayDeque<i32> = (0..5).collect();
        let mut iter = deque.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 3);
        let rest: Vec<i32> = iter.copied().collect();
        assert_eq!(rest, vec![1, 2, 3]);
    }

    #[test]
    fn into_iter_drains_front_to_back() {
        let deque: ArrayDeque<i32> = (0..4).collect();
        let drained: Vec<i32> = deque.into_iter().collect();
        assert_eq!(drained, vec![0, 1, 2, 3]);
    }

    #[test]
    fn display_renders_bracketed() {
        let mut deque = ArrayDeque::with_capacity(4);
        assert_eq!(deque.to_string(), "[]");
        deque.push_back(1);
        deque.push_back(2);
        deque.push_back(3);
        assert_eq!(deque.to_string(), "[1, 2, 3]");
    }

    #[test]
    fn removed_slots_are_cleared() {
        let mut deque = ArrayDeque::with_capacity(2);
        deque.push_back(String::from("a"));
        deque.push_back(String::from("b"));
        deque.pop_front().unwrap();
        // The vacated slot no longer owns the removed element.
        assert!(deque.slots.iter().filter(|slot| slot.is_some()).count() == 1);
    }
}
