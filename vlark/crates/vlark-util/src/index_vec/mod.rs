//! IndexVec - A vector indexed by a specific type.
//!
//! [`IndexVec`] is the arena the front end stores source lines in: elements
//! are only ever appended, so an index handed out once stays valid for the
//! life of the container and tokens can refer to their line by index instead
//! of by reference.
//!
//! # Example
//!
//! ```
//! use vlark_util::define_idx;
//! use vlark_util::index_vec::IndexVec;
//!
//! define_idx!(LineId);
//!
//! let mut lines: IndexVec<LineId, &str> = IndexVec::new();
//! let first = lines.push("entity e is");
//! let second = lines.push("end entity;");
//! assert_eq!(lines[first], "entity e is");
//! assert_eq!(second, LineId(1));
//! ```

use crate::error::{IndexVecError, IndexVecResult};
use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

/// Trait for types that can be used as indices
pub trait Idx: Copy + Eq + PartialEq {
    /// Convert from usize to index type
    ///
    /// # Panics
    ///
    /// Implementations may panic if the value does not fit the index type.
    fn from_usize(idx: usize) -> Self;

    /// Convert index to usize for slice indexing
    fn index(self) -> usize;
}

impl Idx for usize {
    #[inline]
    fn from_usize(idx: usize) -> Self {
        idx
    }

    #[inline]
    fn index(self) -> usize {
        self
    }
}

/// An append-only vector indexed by a specific type
///
/// There is deliberately no `IndexMut`, `remove` or `insert`: once pushed,
/// an element keeps both its index and its contents.
#[derive(Clone, PartialEq, Eq)]
pub struct IndexVec<I, T> {
    raw: Vec<T>,
    _marker: PhantomData<fn(&I)>,
}

impl<I, T> IndexVec<I, T> {
    /// Create an empty IndexVec
    #[inline]
    pub fn new() -> Self {
        Self {
            raw: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Create an IndexVec with the specified capacity
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: Vec::with_capacity(capacity),
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the vector contains no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// View the elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.raw
    }

    /// Iterate over the elements in index order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.raw.iter()
    }
}

impl<I: Idx, T> IndexVec<I, T> {
    /// Append an element and return its index
    #[inline]
    pub fn push(&mut self, value: T) -> I {
        let idx = I::from_usize(self.raw.len());
        self.raw.push(value);
        idx
    }

    /// Get an element, or `None` if the index is out of range
    #[inline]
    pub fn get(&self, index: I) -> Option<&T> {
        self.raw.get(index.index())
    }

    /// Get an element, reporting an out-of-range index as an error
    ///
    /// ```
    /// use vlark_util::index_vec::IndexVec;
    ///
    /// let mut v: IndexVec<usize, u8> = IndexVec::new();
    /// v.push(1);
    /// assert!(v.try_get(0).is_ok());
    /// assert!(v.try_get(1).is_err());
    /// ```
    pub fn try_get(&self, index: I) -> IndexVecResult<&T> {
        self.get(index).ok_or(IndexVecError::OutOfBounds {
            index: index.index(),
            length: self.raw.len(),
        })
    }

    /// Index of the most recently pushed element
    #[inline]
    pub fn last_idx(&self) -> Option<I> {
        self.raw.len().checked_sub(1).map(I::from_usize)
    }

    /// Iterate over `(index, element)` pairs
    pub fn iter_enumerated(&self) -> impl DoubleEndedIterator<Item = (I, &T)> + '_ {
        self.raw
            .iter()
            .enumerate()
            .map(|(i, value)| (I::from_usize(i), value))
    }

    /// Iterate over all valid indices
    pub fn indices(&self) -> impl DoubleEndedIterator<Item = I> {
        (0..self.raw.len()).map(I::from_usize)
    }
}

impl<I: Idx, T> Index<I> for IndexVec<I, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: I) -> &T {
        &self.raw[index.index()]
    }
}

impl<I, T> Default for IndexVec<I, T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<I, T: fmt::Debug> fmt::Debug for IndexVec<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.raw.iter()).finish()
    }
}

impl<I, T> FromIterator<T> for IndexVec<I, T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self {
            raw: iter.into_iter().collect(),
            _marker: PhantomData,
        }
    }
}

impl<'a, I, T> IntoIterator for &'a IndexVec<I, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.raw.iter()
    }
}

/// Define a newtype index over `u32`
///
/// ```
/// use vlark_util::define_idx;
/// use vlark_util::index_vec::Idx;
///
/// define_idx!(TokenIdx);
/// assert_eq!(TokenIdx::from_usize(3).index(), 3);
/// ```
#[macro_export]
macro_rules! define_idx {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $crate::index_vec::Idx for $name {
            fn from_usize(idx: usize) -> Self {
                assert!(idx <= u32::MAX as usize, "Index {} exceeds u32::MAX", idx);
                $name(idx as u32)
            }

            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}
