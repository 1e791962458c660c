//! Chunk format parsing layer.
//!
//! One module per chunk kind, all consuming byte slices bounded by the
//! chunk's own declared size:
//!
//! - [`string_pool`]: string-pool chunks (UTF-8 and UTF-16LE)
//! - [`package`]: package chunks and their nested chunk walk
//! - [`type_spec`]: per-type configuration-flag chunks
//! - [`entries`]: type chunks holding the actual resource entries
//!
//! # Architecture
//!
//! ```text
//! Table layout:
//! ┌──────────────────────┐
//! │ table header         │ ← table::parse()
//! ├──────────────────────┤
//! │ global string pool   │ ← string_pool::parse()
//! ├──────────────────────┤
//! │ package              │ ← package::parse()
//! │ ├ type string pool   │   ← string_pool::parse()
//! │ ├ key string pool    │   ← string_pool::parse()
//! │ ├ type spec          │   ← type_spec::parse()
//! │ └ type (entries)     │   ← entries::parse()
//! └──────────────────────┘
//! ```

pub mod entries;
pub mod package;
pub mod string_pool;
pub mod type_spec;
