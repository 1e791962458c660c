//! Custom error types for the arsc-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every structural validation failure is fatal to the whole table decode;
/// there are no partial results. Callers should treat a failed decode as
/// "no resource resolution available" and fall back to raw numeric
/// references.
#[derive(Debug, Error)]
pub enum ArscError {
    /// A chunk header declares a size that does not fit the remaining buffer,
    /// or is too small to cover the header itself.
    #[error("Malformed chunk at offset {offset}: {reason}")]
    MalformedChunk { offset: usize, reason: &'static str },

    /// The top-level header's declared size does not equal the buffer length.
    #[error("Size mismatch: resource table declares {declared} bytes, but the buffer holds {actual}")]
    SizeMismatch { declared: u64, actual: u64 },

    /// The buffer does not start with a resource-table chunk.
    #[error("Unsupported format: expected a resource table, got chunk type {0:#06x}")]
    UnsupportedFormat(u16),

    /// An unexpected chunk type was found at the top level of the table.
    /// The top-level walk is strict; only the package-level walk is lenient.
    #[error("Unsupported top-level chunk type: {0:#06x}")]
    UnsupportedChunkType(u16),

    /// An offset/size invariant between header fields was violated.
    #[error("Structural mismatch: {0}")]
    StructuralMismatch(String),

    /// More than one string pool was found at the top level of the table.
    #[error("More than one top-level string pool found")]
    MultipleStringPools,

    /// The number of package chunks observed does not match the declared count.
    #[error("Package count mismatch: header declares {declared}, but found {found}")]
    PackageCountMismatch { declared: u32, found: u32 },

    /// The chunk walk inside a package overran the package's own bounds.
    #[error("Truncated package: chunk at offset {offset} overruns the package bounds")]
    TruncatedPackage { offset: usize },

    /// A read or seek went past the end of the buffer, or an index went past
    /// the end of a string pool.
    #[error("Out of range: offset {offset} exceeds bounds of {len}")]
    OutOfRange { offset: usize, len: usize },

    /// A string pool is internally inconsistent.
    #[error("Malformed string pool: {0}")]
    MalformedStringPool(String),
}

/// A convenience `Result` type alias using the crate's `ArscError` type.
pub type Result<T> = std::result::Result<T, ArscError>;
