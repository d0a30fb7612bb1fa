use thiserror::Error;

/// Error types for `DynamicArrayList` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ListError {
    /// Index is outside the valid range for the requested operation
    #[error("Index out of range: index {index} is not below the bound {bound}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Exclusive upper bound accepted by the operation
        bound: usize,
    },
    /// A required reference argument was absent
    #[error("Null reference: argument `{parameter}` is absent")]
    NullReference {
        /// Name of the missing argument
        parameter: &'static str,
    },
    /// Destination buffer cannot hold all live elements
    #[error("Invalid argument: destination needs {required} slots, but only {available} available")]
    InvalidArgument {
        /// Number of slots the copy needs
        required: usize,
        /// Number of slots left after the destination offset
        available: usize,
    },
    /// Mutation attempted on a read-only list
    #[error("Unsupported operation: `{operation}` on a read-only list")]
    Unsupported {
        /// Name of the rejected operation
        operation: &'static str,
    },
    /// Cursor used after a structural change or outside its valid lifecycle
    #[error("Invalid operation: {reason}")]
    InvalidOperation {
        /// Description of the misuse
        reason: &'static str,
    },
}
