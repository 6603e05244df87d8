//! Comparators that decide heap polarity
//!
//! Every heap in this crate is ordered by a value implementing
//! [`Compare`] (re-exported from the `compare` crate). Closures of the shape
//! `Fn(&T, &T) -> Ordering` implement it already; this module adds the
//! pieces a heap needs on top:
//!
//! - [`Natural`]: the default total order of any `Ord` type
//! - [`Reversed`]: flips the sign of another comparator (how max-heaps are built)
//! - [`Order`] and [`Oriented`]: polarity chosen at runtime, e.g. from configuration text
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use rust_comparator_heaps::comparator::{default_comparator, reverse, Compare};
//!
//! let natural = default_comparator();
//! assert_eq!(natural.compare(&1, &2), Ordering::Less);
//!
//! let reversed = reverse(natural);
//! assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
//! assert_eq!(reversed.compare(&2, &2), Ordering::Equal);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub use compare::Compare;

use crate::error::HeapError;

/// The natural (`Ord`) order: smaller values compare as `Less`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, l: &T, r: &T) -> Ordering {
        l.cmp(r)
    }
}

/// Sign-reversing adapter: `Less` and `Greater` swap, `Equal` stays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(C);

impl<C> Reversed<C> {
    /// Wraps `cmp` so that it orders in the opposite direction
    pub fn new(cmp: C) -> Self {
        Reversed(cmp)
    }

    /// Returns a reference to the wrapped comparator
    pub fn get_ref(&self) -> &C {
        &self.0
    }

    /// Unwraps the original comparator
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn compare(&self, l: &T, r: &T) -> Ordering {
        self.0.compare(l, r).reverse()
    }
}

/// Returns the default comparator, a stateless [`Natural`] order.
pub fn default_comparator() -> Natural {
    Natural
}

/// Reverses the sign of any comparator.
///
/// For all `a`, `b`: `reverse(c).compare(a, b) == c.compare(a, b).reverse()`.
pub fn reverse<C>(cmp: C) -> Reversed<C> {
    Reversed::new(cmp)
}

/// Which extremum sits at the root of a heap
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// The root is the smallest element under the comparator
    #[default]
    Min,
    /// The root is the largest element under the comparator
    Max,
}

impl Order {
    /// The opposite polarity
    pub fn flip(self) -> Self {
        match self {
            Order::Min => Order::Max,
            Order::Max => Order::Min,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Order::Min => "min",
            Order::Max => "max",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = HeapError;

    /// Parses `"min"` or `"max"`, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("min") {
            Ok(Order::Min)
        } else if trimmed.eq_ignore_ascii_case("max") {
            Ok(Order::Max)
        } else {
            tracing::debug!(input = s, "rejected heap order name");
            Err(HeapError::InvalidArgument(s.to_string()))
        }
    }
}

/// A comparator whose polarity is picked at runtime.
///
/// `Oriented::new(cmp, Order::Min)` behaves exactly like `cmp`;
/// `Order::Max` behaves like [`reverse`]`(cmp)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Oriented<C> {
    cmp: C,
    order: Order,
}

impl<C> Oriented<C> {
    /// Wraps `cmp`, reversing it when `order` is `Max`
    pub fn new(cmp: C, order: Order) -> Self {
        Oriented { cmp, order }
    }

    /// Returns the polarity applied to the wrapped comparator
    pub fn order(&self) -> Order {
        self.order
    }

    /// Returns a reference to the wrapped comparator
    pub fn get_ref(&self) -> &C {
        &self.cmp
    }
}

impl<T: ?Sized, C: Compare<T>> Compare<T> for Oriented<C> {
    #[inline]
    fn compare(&self, l: &T, r: &T) -> Ordering {
        match self.order {
            Order::Min => self.cmp.compare(l, r),
            Order::Max => self.cmp.compare(l, r).reverse(),
        }
    }
}
