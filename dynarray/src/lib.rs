#![no_std]

//! `DynamicArray`: a growable array of copyable handles.
//!
//! `DynamicArray<T>` stores handles (references, raw pointers, ids, indices)
//! in a contiguous buffer it owns. It never owns the data those handles point
//! to: `T: Copy` means the array cannot run a destructor on an element, so the
//! caller stays responsible for the pointees.
//!
//! Every fallible operation returns a [`DynamicArrayError`] instead of
//! aborting, and no failure path changes the size or capacity.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Performance Characteristics
//!
//! - `push_back()`: amortized O(1), O(n) on a growth step
//! - `pop_back()`, `get()`, `size()`, `length()`: O(1)
//! - `insert_at()`, `remove_at()`: O(n - index)
//! - `resize()`, `shrink_to_fit()`: O(n) copy on reallocation
//! - `find()`: O(n) linear scan
//!
//! ## Growth Policy
//!
//! When every slot is in use, appending or inserting grows the capacity to
//! `2 * capacity + 1`. Starting from zero the capacities are 1, 3, 7, 15, ...
//!
//! ```
//! # use dynarray::DynamicArray;
//! let mut array = DynamicArray::create(0).unwrap();
//! array.push_back(1).unwrap();
//! assert_eq!(array.length(), 1);
//! array.push_back(2).unwrap();
//! assert_eq!(array.length(), 3);
//! ```
//!
//! Capacity only shrinks on request. `resize()` never goes at or below the
//! current size, `shrink_to_fit()` trims to exactly the size:
//!
//! ```
//! # use dynarray::DynamicArray;
//! let mut array = DynamicArray::create(10).unwrap();
//! array.push_back('a').unwrap();
//!
//! array.resize(1).unwrap(); // no-op: size is 1
//! assert_eq!(array.length(), 10);
//!
//! array.shrink_to_fit().unwrap();
//! assert_eq!(array.length(), 1);
//! ```
//!
//! # Handles
//!
//! The array holds references to caller-owned values:
//!
//! ```
//! # use dynarray::DynamicArray;
//! let (a, b, c) = (10, 20, 30);
//! let mut array = DynamicArray::create(5).unwrap();
//!
//! array.push_back(&a).unwrap();
//! array.push_back(&b).unwrap();
//! array.push_back(&c).unwrap();
//!
//! assert_eq!(array.size(), 3);
//! assert_eq!(*array[0], 10);
//!
//! // Search with a caller-supplied equality
//! assert_eq!(array.find(&20, |x, y| **x == **y), Some(1));
//!
//! array.destroy(); // a, b and c are untouched
//! assert_eq!(a + b + c, 60);
//! ```
//!
//! # Errors
//!
//! ```
//! # use dynarray::{DynamicArray, DynamicArrayError};
//! let mut array: DynamicArray<u32> = DynamicArray::create(2).unwrap();
//!
//! assert_eq!(array.pop_back(), Err(DynamicArrayError::EmptyContainer));
//! assert_eq!(
//!     array.remove_at(0),
//!     Err(DynamicArrayError::IndexOutOfRange { index: 0, size: 0 })
//! );
//! assert_eq!(array.size(), 0);
//! ```
//!
//! # Logging
//!
//! Growth, resizes and shrinks are reported through the `log` facade at debug
//! level, empty pops at warn level and allocation failures at error level.

extern crate alloc;

mod core;
mod error;

pub use crate::core::DynamicArray;
pub use error::DynamicArrayError;
