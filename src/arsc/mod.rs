//! Core resource-table decoder module.

pub mod cursor;
pub mod format;
pub mod table;
pub mod types;

pub use types::error::{ArscError, Result};
pub use types::models::{ResourceId, ResourceMap, ResourceValue, StringPool};
