//! # arsc-reader
//!
//! A decoder for compiled Android resource tables (`resources.arsc`).
//!
//! Given the raw bytes of a resource table, [`parse_table`] returns a
//! [`ResourceMap`] from canonical resource-id strings (`@7F020001`) to the
//! ordered lists of text values resolved for them. Manifest decoding and
//! archive extraction are the caller's job; this crate consumes a byte
//! buffer and nothing else.
//!
//! ```no_run
//! let data = std::fs::read("resources.arsc")?;
//! let resources = arsc_reader::parse_table(&data)?;
//! if let Some(values) = resources.get("@7F020001") {
//!     println!("app label: {}", values[0]);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod arsc;

// Re-export the main types for convenience
pub use arsc::{
    table::parse as parse_table, ArscError, ResourceId, ResourceMap, ResourceValue, Result,
};
