//! Core data structures for the resource-table format.
//!
//! This module defines the fundamental types used throughout the library:
//! - Chunk headers and type tags
//! - Decoded string pools
//! - Resource identifiers and values
//! - The resolved resource mapping

use std::collections::HashMap;
use std::fmt;

use super::error::{ArscError, Result};

/// Chunk type tag of a string pool.
pub const RES_STRING_POOL_TYPE: u16 = 0x0001;
/// Chunk type tag of the top-level resource table.
pub const RES_TABLE_TYPE: u16 = 0x0002;
/// Chunk type tag of a package.
pub const RES_TABLE_PACKAGE_TYPE: u16 = 0x0200;
/// Chunk type tag of a type (entry table) chunk.
pub const RES_TABLE_TYPE_TYPE: u16 = 0x0201;
/// Chunk type tag of a type-spec chunk.
pub const RES_TABLE_TYPE_SPEC_TYPE: u16 = 0x0202;

/// The value data holds a reference to another resource-table entry.
pub const TYPE_REFERENCE: u8 = 0x01;
/// The value data holds an index into the table's global value string pool.
pub const TYPE_STRING: u8 = 0x03;

/// Entry flag bit marking a complex (map/array/plural/style) entry.
pub const FLAG_COMPLEX: u16 = 0x0001;

/// String pool flag bit selecting UTF-8 encoding (UTF-16LE otherwise).
pub const UTF8_FLAG: u32 = 0x100;

/// The self-describing header every chunk starts with.
///
/// `size` covers the header and the payload together. A header is only
/// handed out by the cursor after validating that `size` fits the buffer.
#[derive(Debug, Clone, Copy)]
pub struct ChunkHeader {
    pub type_tag: u16,
    pub header_size: u16,
    pub size: u32,
}

/// Text encoding of a string pool, selected by the pool's flag word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolEncoding {
    Utf8,
    Utf16Le,
}

/// An ordered, 0-based indexed sequence of decoded strings from one
/// string-pool chunk.
///
/// Indexed access is fallible: indices arrive from untrusted entry data and
/// must be validated against the pool length.
#[derive(Debug, Default)]
pub struct StringPool {
    strings: Vec<String>,
}

impl StringPool {
    pub fn new(strings: Vec<String>) -> Self {
        Self { strings }
    }

    /// Looks up the string at `index`, failing if the index is past the end
    /// of the pool.
    pub fn get(&self, index: u32) -> Result<&str> {
        self.strings
            .get(index as usize)
            .map(String::as_str)
            .ok_or(ArscError::OutOfRange {
                offset: index as usize,
                len: self.strings.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// A 32-bit resource identifier: `(package_id << 24) | (type_id << 16) | entry`.
///
/// The canonical textual form is an `@`-prefixed, upper-cased, 8-hex-digit
/// string (e.g. `@7F020001`), used as the key of the resolved mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(pub u32);

impl ResourceId {
    /// Composes an id from its package/type/entry components.
    pub fn compose(package_id: u32, type_id: u8, entry_index: u32) -> Self {
        Self((package_id << 24) | ((type_id as u32) << 16) | entry_index)
    }

    /// Parses a canonical `@hex` reference (case-insensitive) back into an id.
    ///
    /// Returns `None` for anything that is not an `@`-prefixed hex number,
    /// so callers can tell literal text apart from a resource reference.
    pub fn parse(reference: &str) -> Option<Self> {
        let digits = reference.strip_prefix('@')?;
        u32::from_str_radix(digits, 16).ok().map(Self)
    }

    pub fn package_id(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn type_id(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn entry_index(&self) -> u16 {
        self.0 as u16
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "@{:08X}", self.0)
    }
}

/// The decoded value of a simple entry, before resolution against the
/// string pool and the mapping.
///
/// Complex entries (maps, arrays, plurals, styles) are represented as a
/// distinct variant carrying no resolved value; extracting their contents
/// is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceValue {
    /// Index into the table's global value string pool.
    StringRef(u32),
    /// Reference to another resource-table entry.
    Reference(ResourceId),
    /// Any other value type, kept as its raw 32-bit data word.
    Raw(i32),
    /// A complex entry, structurally skipped.
    Complex,
}

/// The resolved output mapping: canonical resource-ID string to the ordered
/// list of text values observed for it.
///
/// Values keep arrival order and duplicates are permitted — one value per
/// configuration variant or per resolved alias. Lookups upper-case the query
/// first, so any case variation of a reference finds its entry.
#[derive(Debug, Default)]
pub struct ResourceMap {
    entries: HashMap<String, Vec<String>>,
}

impl ResourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value under the id's canonical key.
    pub(crate) fn insert(&mut self, id: ResourceId, value: String) {
        self.entries.entry(id.to_string()).or_default().push(value);
    }

    /// Looks up a textual `@hex` reference, upper-casing it first.
    pub fn get(&self, reference: &str) -> Option<&[String]> {
        self.entries
            .get(&reference.to_uppercase())
            .map(Vec::as_slice)
    }

    /// Looks up a numeric resource id.
    pub fn resolve(&self, id: ResourceId) -> Option<&[String]> {
        self.entries.get(&id.to_string()).map(Vec::as_slice)
    }

    /// Number of distinct resource ids in the mapping.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Consumes the mapping, handing ownership of the raw map to the caller.
    pub fn into_inner(self) -> HashMap<String, Vec<String>> {
        self.entries
    }
}
