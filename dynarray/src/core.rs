use alloc::vec::Vec;
use core::ops::Index;

use crate::error::DynamicArrayError;

/// A growable, index-addressable array of copyable handles
///
/// `capacity` is the logical slot count reported by [`DynamicArray::length`].
/// The backing allocation always holds at least that many slots, so appends
/// below capacity never reallocate.
#[derive(Debug)]
pub struct DynamicArray<T> {
    items: Vec<T>,
    capacity: usize,
}

fn reserve_exact<T>(items: &mut Vec<T>, capacity: usize) -> Result<(), DynamicArrayError> {
    items
        .try_reserve_exact(capacity.saturating_sub(items.len()))
        .map_err(|_| {
            log::error!("failed to reserve {capacity} slots");
            DynamicArrayError::OutOfMemory {
                requested: capacity,
            }
        })
}

impl<T: Copy> DynamicArray<T> {
    /// Creates an empty array with room for exactly `initial_capacity` handles.
    ///
    /// A capacity of zero is allowed and performs no allocation.
    ///
    /// # Errors
    ///
    /// Returns `DynamicArrayError::OutOfMemory` if the buffer cannot be allocated.
    pub fn create(initial_capacity: usize) -> Result<Self, DynamicArrayError> {
        let mut items = Vec::new();
        reserve_exact(&mut items, initial_capacity)?;
        Ok(Self {
            items,
            capacity: initial_capacity,
        })
    }

    /// Creates an empty array with zero capacity.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
        }
    }

    /// Releases the backing buffer.
    ///
    /// The data the handles refer to is not touched.
    pub fn destroy(self) {
        log::trace!("releasing buffer of {} slots", self.capacity);
    }

    /// Capacity the array grows to when `capacity` slots are all in use.
    ///
    /// # Errors
    ///
    /// Returns `DynamicArrayError::CapacityOverflow` if the result does not fit in `usize`.
    pub fn next_capacity(capacity: usize) -> Result<usize, DynamicArrayError> {
        capacity
            .checked_mul(2)
            .and_then(|doubled| doubled.checked_add(1))
            .ok_or(DynamicArrayError::CapacityOverflow { capacity })
    }

    /// Number of slots currently reserved.
    #[must_use]
    pub fn length(&self) -> usize {
        self.capacity
    }

    /// Number of live handles.
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // Callers must keep `new_capacity >= self.items.len()`.
    fn set_capacity(&mut self, new_capacity: usize) -> Result<(), DynamicArrayError> {
        if new_capacity > self.capacity {
            reserve_exact(&mut self.items, new_capacity)?;
        } else if new_capacity < self.capacity {
            let mut items = Vec::new();
            reserve_exact(&mut items, new_capacity)?;
            items.extend_from_slice(&self.items);
            self.items = items;
        }
        self.capacity = new_capacity;
        Ok(())
    }

    fn grow_if_full(&mut self) -> Result<(), DynamicArrayError> {
        if self.items.len() < self.capacity {
            return Ok(());
        }
        let new_capacity = Self::next_capacity(self.capacity)?;
        log::debug!("growing from {} to {} slots", self.capacity, new_capacity);
        self.set_capacity(new_capacity)
    }

    fn check_index(&self, index: usize, limit: usize) -> Result<(), DynamicArrayError> {
        if index >= limit {
            Err(DynamicArrayError::IndexOutOfRange {
                index,
                size: self.items.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Appends a handle at the end, growing to `2 * capacity + 1` slots when full.
    ///
    /// # Errors
    ///
    /// Returns `DynamicArrayError::OutOfMemory` or `DynamicArrayError::CapacityOverflow`
    /// if growth fails. The array is unchanged in that case.
    pub fn push_back(&mut self, element: T) -> Result<(), DynamicArrayError> {
        self.grow_if_full()?;
        self.items.push(element);
        Ok(())
    }

    /// Removes and returns the last handle.
    ///
    /// # Errors
    ///
    /// Returns `DynamicArrayError::EmptyContainer` if the array is empty. The
    /// condition is also logged as a warning.
    pub fn pop_back(&mut self) -> Result<T, DynamicArrayError> {
        self.items.pop().ok_or_else(|| {
            log::warn!("pop_back called on an empty container");
            DynamicArrayError::EmptyContainer
        })
    }

    /// Inserts a handle at `index`, shifting later handles one slot to the right.
    ///
    /// `index == size()` appends.
    ///
    /// # Errors
    ///
    /// Returns `DynamicArrayError::IndexOutOfRange` if `index > size()`, or a
    /// growth error as for [`DynamicArray::push_back`]. The array is unchanged on error.
    pub fn insert_at(&mut self, element: T, index: usize) -> Result<(), DynamicArrayError> {
        if index != self.items.len() {
            self.check_index(index, self.items.len())?;
        }
        self.grow_if_full()?;
        self.items.insert(index, element);
        Ok(())
    }

    /// Removes the handle at `index`, shifting later handles one slot to the left.
    ///
    /// # Errors
    ///
    /// Returns `DynamicArrayError::IndexOutOfRange` if `index >= size()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, DynamicArrayError> {
        self.check_index(index, self.items.len())?;
        Ok(self.items.remove(index))
    }

    /// Sets the capacity to exactly `new_capacity`.
    ///
    /// Does nothing if `new_capacity <= size()`: live handles are never dropped
    /// and this is not a substitute for [`DynamicArray::shrink_to_fit`].
    ///
    /// # Errors
    ///
    /// Returns `DynamicArrayError::OutOfMemory` if reallocation fails. The array
    /// is unchanged in that case.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), DynamicArrayError> {
        if new_capacity <= self.items.len() {
            return Ok(());
        }
        log::debug!("resizing from {} to {} slots", self.capacity, new_capacity);
        self.set_capacity(new_capacity)
    }

    /// Reduces the capacity to exactly `size()`.
    ///
    /// # Errors
    ///
    /// Returns `DynamicArrayError::OutOfMemory` if reallocation fails. The array
    /// is unchanged in that case.
    pub fn shrink_to_fit(&mut self) -> Result<(), DynamicArrayError> {
        if self.items.len() == self.capacity {
            return Ok(());
        }
        log::debug!(
            "shrinking from {} to {} slots",
            self.capacity,
            self.items.len()
        );
        self.set_capacity(self.items.len())
    }

    /// Returns the lowest index whose handle `equals` the target.
    pub fn find<F>(&self, target: T, mut equals: F) -> Option<usize>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.items.iter().position(|item| equals(item, &target))
    }

    /// Gets the handle at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.items.get(index).copied()
    }

    /// Tries to get the handle at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `DynamicArrayError::IndexOutOfRange` if `index >= size()`.
    pub fn try_get(&self, index: usize) -> Result<T, DynamicArrayError> {
        self.check_index(index, self.items.len())?;
        Ok(self.items[index])
    }

    /// Live handles in index order.
    ///
    /// The borrow ends before any mutating call, so only indices stay
    /// meaningful across mutations.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Forgets all handles. Capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Copy> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}
