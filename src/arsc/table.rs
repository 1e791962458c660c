//! Top-level resource-table decoding.
//!
//! Validates the table header, walks the top-level chunks, and aggregates
//! the final resource-id mapping. The top-level walk is strict: an unknown
//! chunk type or a second string pool is fatal, unlike the lenient walk
//! inside a package. That asymmetry is deliberate and preserved; unifying it
//! would change observable behavior on malformed inputs.

use log::{debug, info};

use super::cursor::ChunkCursor;
use super::format::{package, string_pool};
use super::types::error::{ArscError, Result};
use super::types::models::{
    ResourceMap, StringPool, RES_STRING_POOL_TYPE, RES_TABLE_PACKAGE_TYPE, RES_TABLE_TYPE,
};

/// Decodes a complete resource table from an in-memory buffer.
///
/// The buffer must hold exactly one table: the declared size must equal the
/// buffer length. The decode is a pure function of the input; the returned
/// mapping is owned by the caller and independent decodes never share state.
pub fn parse(data: &[u8]) -> Result<ResourceMap> {
    let mut cursor = ChunkCursor::new(data);

    let type_tag = cursor.read_u16()?;
    let _header_size = cursor.read_u16()?;
    let size = cursor.read_u32()?;
    let package_count = cursor.read_u32()?;

    if type_tag != RES_TABLE_TYPE {
        return Err(ArscError::UnsupportedFormat(type_tag));
    }
    if size as u64 != data.len() as u64 {
        return Err(ArscError::SizeMismatch {
            declared: size as u64,
            actual: data.len() as u64,
        });
    }

    info!(
        "Resource table: {} bytes, {} package(s) declared",
        size, package_count
    );

    let mut map = ResourceMap::new();
    let mut value_strings: Option<StringPool> = None;
    let empty_pool = StringPool::default();
    let mut found_packages: u32 = 0;

    let mut pos = cursor.position();
    while pos < data.len() {
        cursor.seek(pos)?;
        let header = cursor.read_chunk_header()?;
        let chunk = &data[pos..pos + header.size as usize];

        match header.type_tag {
            RES_STRING_POOL_TYPE => {
                if value_strings.is_some() {
                    return Err(ArscError::MultipleStringPools);
                }
                debug!("Global value string pool at {:#x}", pos);
                value_strings = Some(string_pool::parse(chunk)?);
            }
            RES_TABLE_PACKAGE_TYPE => {
                debug!("Package chunk {} at {:#x}", found_packages, pos);
                package::parse(
                    chunk,
                    value_strings.as_ref().unwrap_or(&empty_pool),
                    &mut map,
                )?;
                found_packages += 1;
            }
            other => return Err(ArscError::UnsupportedChunkType(other)),
        }

        pos += header.size as usize;
    }

    if value_strings.is_none() {
        return Err(ArscError::StructuralMismatch(
            "no global string pool in the resource table".to_string(),
        ));
    }
    if found_packages != package_count {
        return Err(ArscError::PackageCountMismatch {
            declared: package_count,
            found: found_packages,
        });
    }

    info!("Resource table decoded: {} resource ids", map.len());
    Ok(map)
}
