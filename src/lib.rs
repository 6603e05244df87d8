//! Comparator-Driven Binary Heaps for Rust
//!
//! This crate provides an array-backed binary heap (priority queue) whose
//! ordering is supplied by a comparator value instead of being fixed by the
//! element type's `Ord` implementation.
//!
//! # Features
//!
//! - **One generic heap, two polarities**: [`MinBinaryHeap`] and [`MaxBinaryHeap`]
//!   are the same [`BinaryHeap`] type; the max variant wraps its comparator in
//!   [`Reversed`](comparator::Reversed)
//! - **Pluggable comparators**: closures, [`Natural`](comparator::Natural) order,
//!   sign reversal, or polarity picked at runtime with [`Order`](comparator::Order)
//! - **Empty is not an error**: `peek` and `pop` return `Option`
//! - **Bulk construction**: repeated insertion through `FromIterator`, or linear-time
//!   heapify through `from_vec`
//!
//! No handle-based `decrease_key` is offered.
//!
//! # Example
//!
//! ```rust
//! use rust_comparator_heaps::{BinaryHeap, MaxBinaryHeap, MinBinaryHeap};
//!
//! let mut min: MinBinaryHeap<i32> = [3, 1, 2].into_iter().collect();
//! assert_eq!(min.push(0), 4);
//! assert_eq!(min.pop(), Some(0));
//! assert_eq!(min.into_sorted_vec(), vec![1, 2, 3]);
//!
//! let mut max = MaxBinaryHeap::new();
//! max.extend([5, 3, 8]);
//! assert_eq!(max.pop(), Some(8));
//!
//! // Order by string length, longest first
//! let mut words = BinaryHeap::max_with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! words.extend(["a", "abc", "ab"]);
//! assert_eq!(words.peek(), Some(&"abc"));
//! ```

pub mod binary;
pub mod comparator;
pub mod error;

pub use binary::{BinaryHeap, IntoIterSorted, MaxBinaryHeap, MinBinaryHeap};
pub use error::HeapError;
