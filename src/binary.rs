//! Comparator-driven binary heap
//!
//! An array-backed binary heap whose ordering comes from a comparator value
//! rather than from `Ord` on the element type. Min- and max-heaps are the
//! same generic [`BinaryHeap`]: a max-heap is simply a heap whose comparator
//! is wrapped in [`Reversed`], so both variants share one implementation of
//! the sift procedures.
//!
//! The storage is a `Vec<T>` read as a complete binary tree: the children of
//! index `i` live at `2i + 1` and `2i + 2`, and its parent at `(i - 1) / 2`.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `push`            | O(log n)   |
//! | `pop`             | O(log n)   |
//! | `peek`            | O(1)       |
//! | `from_iter`       | O(n log n) |
//! | `from_vec`        | O(n)       |
//! | `into_sorted_vec` | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use rust_comparator_heaps::{MaxBinaryHeap, MinBinaryHeap};
//!
//! let mut min = MinBinaryHeap::new();
//! let mut max = MaxBinaryHeap::new();
//! for value in [5, 3, 8, 1, 4] {
//!     min.push(value);
//!     max.push(value);
//! }
//!
//! assert_eq!(min.pop(), Some(1));
//! assert_eq!(max.pop(), Some(8));
//! assert_eq!(min.peek(), Some(&3));
//! assert_eq!(max.peek(), Some(&5));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::slice;
use std::vec;

use crate::comparator::{reverse, Compare, Natural, Order, Oriented, Reversed};
use crate::error::HeapError;

/// A binary heap ordered by the comparator `C`
///
/// The root is always an element that no other element compares `Less`
/// than under `C`. With [`Natural`] that is the minimum; with
/// `Reversed<Natural>` it is the maximum.
#[derive(Clone)]
pub struct BinaryHeap<T, C> {
    /// Complete binary tree in level order
    items: Vec<T>,
    cmp: C,
}

/// A heap that pops its smallest element first, by `Ord`
pub type MinBinaryHeap<T> = BinaryHeap<T, Natural>;

/// A heap that pops its largest element first, by `Ord`
pub type MaxBinaryHeap<T> = BinaryHeap<T, Reversed<Natural>>;

impl<T, C: Compare<T> + Default> BinaryHeap<T, C> {
    /// Creates an empty heap using the comparator's default value
    ///
    /// ```rust
    /// use rust_comparator_heaps::MaxBinaryHeap;
    ///
    /// let mut heap = MaxBinaryHeap::new();
    /// heap.push(1);
    /// heap.push(7);
    /// assert_eq!(heap.peek(), Some(&7));
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }

    /// Creates an empty heap with room for at least `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, C::default())
    }

    /// Builds a heap from a vector in O(n)
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self::from_vec_with_comparator(vec, C::default())
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    ///
    /// Any closure `Fn(&T, &T) -> Ordering` is a comparator:
    ///
    /// ```rust
    /// use rust_comparator_heaps::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// heap.push("three");
    /// heap.push("to");
    /// heap.push("one");
    /// assert_eq!(heap.pop(), Some("to"));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    /// Creates an empty heap ordered by `cmp` with room for at least `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        BinaryHeap {
            items: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap by pushing every element of `iter` in turn
    ///
    /// # Time Complexity
    /// O(n log n). Use [`from_vec_with_comparator`](Self::from_vec_with_comparator)
    /// for a linear-time build when the elements are already in a vector.
    pub fn from_iter_with_comparator<I>(iter: I, cmp: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut heap = Self::with_comparator(cmp);
        heap.extend(iter);
        heap
    }

    /// Takes ownership of `vec` and heapifies it in place
    ///
    /// # Time Complexity
    /// O(n)
    pub fn from_vec_with_comparator(vec: Vec<T>, cmp: C) -> Self {
        let mut heap = BinaryHeap { items: vec, cmp };
        heap.rebuild();
        heap
    }

    /// Returns the comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Drops spare capacity
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }

    /// Returns the root element without removing it, or `None` if empty
    ///
    /// # Time Complexity
    /// O(1)
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Inserts an element and returns the new number of elements
    ///
    /// # Time Complexity
    /// O(log n), plus the vector's amortized growth.
    pub fn push(&mut self, item: T) -> usize {
        self.items.push(item);
        let last = self.items.len() - 1;
        bubble_up(&self.cmp, &mut self.items, last);
        self.items.len()
    }

    /// Removes and returns the root element, or `None` if empty
    ///
    /// Popping an empty heap leaves it untouched.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        let mut item = self.items.pop()?;
        if !self.items.is_empty() {
            mem::swap(&mut item, &mut self.items[0]);
            sink_down(&self.cmp, &mut self.items, 0);
        }
        Some(item)
    }

    /// Removes every element. Capacity is kept.
    pub fn clear(&mut self) {
        let dropped = self.items.len();
        self.items.clear();
        if dropped > 0 {
            tracing::trace!(dropped, "cleared heap");
        }
    }

    /// Returns the backing storage in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the elements in heap order, which is not sorted order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes every element, yielding them in heap order
    pub fn drain(&mut self) -> vec::Drain<'_, T> {
        tracing::trace!(drained = self.items.len(), "draining heap");
        self.items.drain(..)
    }

    /// Consumes the heap and returns its storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Consumes the heap and returns its elements in the order `pop` would
    /// yield them (ascending for a min-heap, descending for a max-heap)
    ///
    /// ```rust
    /// use rust_comparator_heaps::MaxBinaryHeap;
    ///
    /// let heap: MaxBinaryHeap<i32> = vec![2, 9, 4].into_iter().collect();
    /// assert_eq!(heap.into_sorted_vec(), vec![9, 4, 2]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.items.len();
        while end > 1 {
            end -= 1;
            self.items.swap(0, end);
            sink_down(&self.cmp, &mut self.items[..end], 0);
        }
        // In-place heapsort leaves the root-most element at the back
        self.items.reverse();
        self.items
    }

    /// Consumes the heap into an iterator that pops elements in order
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, C> {
        IntoIterSorted { heap: self }
    }

    /// Moves every element of `other` into `self`, leaving `other` empty
    ///
    /// Depending on the relative sizes this either pushes the elements one at
    /// a time or concatenates the storage and heapifies it.
    pub fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        if better_to_rebuild(self.items.len(), other.items.len()) {
            self.items.append(&mut other.items);
            self.rebuild();
        } else {
            self.reserve(other.items.len());
            for item in other.items.drain(..) {
                self.push(item);
            }
        }
    }

    /// Restores the heap property over the whole storage in O(n)
    fn rebuild(&mut self) {
        let len = self.items.len();
        if len < 2 {
            return;
        }
        for idx in (0..len / 2).rev() {
            sink_down(&self.cmp, &mut self.items, idx);
        }
        tracing::trace!(len, "heapified storage");
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, Reversed<C>> {
    /// Creates an empty max-heap: the root is the largest element under `cmp`
    ///
    /// ```rust
    /// use rust_comparator_heaps::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::max_with_comparator(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
    /// heap.push((1, 'a'));
    /// heap.push((3, 'c'));
    /// heap.push((2, 'b'));
    /// assert_eq!(heap.pop(), Some((3, 'c')));
    /// ```
    pub fn max_with_comparator(cmp: C) -> Self {
        Self::with_comparator(reverse(cmp))
    }

    /// Builds a max-heap by pushing every element of `iter` in turn
    pub fn max_from_iter_with_comparator<I>(iter: I, cmp: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_iter_with_comparator(iter, reverse(cmp))
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, Oriented<C>> {
    /// Creates an empty heap whose polarity is chosen at runtime
    pub fn with_order(order: Order, cmp: C) -> Self {
        Self::with_comparator(Oriented::new(cmp, order))
    }

    /// Creates an empty heap from an order name (`"min"` or `"max"`)
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `name` is neither.
    ///
    /// ```rust
    /// use rust_comparator_heaps::comparator::Natural;
    /// use rust_comparator_heaps::{BinaryHeap, HeapError};
    ///
    /// let mut heap = BinaryHeap::with_order_name("max", Natural)?;
    /// heap.push(1);
    /// heap.push(2);
    /// assert_eq!(heap.peek(), Some(&2));
    ///
    /// assert!(BinaryHeap::<i32, _>::with_order_name("up", Natural).is_err());
    /// # Ok::<(), HeapError>(())
    /// ```
    pub fn with_order_name(name: &str, cmp: C) -> Result<Self, HeapError> {
        let order = name.parse()?;
        Ok(Self::with_order(order, cmp))
    }

    /// Returns the polarity this heap was created with
    pub fn order(&self) -> Order {
        self.cmp.order()
    }
}

/// Rebuilding costs about `2 * (len1 + len2)` comparisons, pushing about
/// `len2 * log2(len1)`.
fn better_to_rebuild(len1: usize, len2: usize) -> bool {
    if len1 == 0 {
        return true;
    }
    2 * (len1 + len2) < len2 * len1.ilog2() as usize
}

/// Moves the element at `idx` towards the root until its parent no longer
/// compares `Greater` than it
fn bubble_up<T, C: Compare<T>>(cmp: &C, items: &mut [T], mut idx: usize) {
    while idx > 0 {
        let parent = (idx - 1) / 2;
        if cmp.compare(&items[parent], &items[idx]) != Ordering::Greater {
            break;
        }
        items.swap(parent, idx);
        idx = parent;
    }
}

/// Moves the element at `idx` towards the leaves until no child compares
/// `Less` than it
fn sink_down<T, C: Compare<T>>(cmp: &C, items: &mut [T], mut idx: usize) {
    let len = items.len();
    loop {
        let left = 2 * idx + 1;
        if left >= len {
            break;
        }
        let right = left + 1;
        let candidate = if right < len && cmp.compare(&items[right], &items[left]) == Ordering::Less {
            right
        } else {
            left
        };
        if cmp.compare(&items[idx], &items[candidate]) != Ordering::Greater {
            break;
        }
        items.swap(idx, candidate);
        idx = candidate;
    }
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints the size and the current root only
impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("size", &self.items.len())
            .field("top", &self.items.first())
            .finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a, C: Compare<T>> Extend<&'a T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with_comparator(iter, C::default())
    }
}

impl<T, C: Compare<T> + Default> From<Vec<T>> for BinaryHeap<T, C> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T, C> From<BinaryHeap<T, C>> for Vec<T> {
    fn from(heap: BinaryHeap<T, C>) -> Self {
        heap.items
    }
}

impl<T, C> IntoIterator for BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Yields the elements in heap order. See
    /// [`into_iter_sorted`](BinaryHeap::into_iter_sorted) for pop order.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Consuming iterator returned by [`BinaryHeap::into_iter_sorted`]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, C> {
    heap: BinaryHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIterSorted<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIterSorted<T, C> {}

impl<T, C: Compare<T>> FusedIterator for IntoIterSorted<T, C> {}
