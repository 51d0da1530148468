use thiserror::Error;

/// Error types for `DynamicArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynamicArrayError {
    /// The allocator could not provide the requested number of slots
    #[error("Out of memory: failed to reserve {requested} slots")]
    OutOfMemory {
        /// Capacity that was being reserved
        requested: usize,
    },
    /// Applying the growth policy would overflow `usize`
    #[error("Capacity overflow: cannot grow beyond capacity {capacity}")]
    CapacityOverflow {
        /// Capacity at the time growth was attempted
        capacity: usize,
    },
    /// Index is outside the range accepted by the operation
    #[error("Index out of range: index {index} is invalid for size {size}")]
    IndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Number of live elements at the time of the call
        size: usize,
    },
    /// `pop_back` was called on an empty array
    #[error("Operation on empty container")]
    EmptyContainer,
}
