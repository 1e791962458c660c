//! Package chunk parsing.
//!
//! A package owns two private string pools (type names and key names) and a
//! run of nested type-spec/type chunks. The nested pools are sliced by their
//! own re-read chunk headers' declared sizes — never "to the end of the
//! buffer", since further chunks follow in the same buffer.
//!
//! Unlike the strict top-level walk, the chunk walk inside a package skips
//! unknown chunk types by their declared size.

use log::{debug, info};

use crate::arsc::cursor::ChunkCursor;
use crate::arsc::format::{entries, string_pool, type_spec};
use crate::arsc::types::error::{ArscError, Result};
use crate::arsc::types::models::{
    ResourceMap, StringPool, RES_TABLE_TYPE_SPEC_TYPE, RES_TABLE_TYPE_TYPE,
};

/// Number of UTF-16 code units reserved for the package name.
const PACKAGE_NAME_UNITS: usize = 256;

/// Decodes one package chunk, appending all of its resolved entries into `map`.
///
/// `data` must be the package chunk exactly, bounded by its declared size.
pub fn parse(data: &[u8], value_strings: &StringPool, map: &mut ResourceMap) -> Result<()> {
    let mut cursor = ChunkCursor::new(data);
    let header = cursor.read_chunk_header()?;

    let package_id = cursor.read_u32()?;
    let name = read_package_name(&mut cursor)?;

    let type_strings_offset = cursor.read_u32()?;
    let _last_public_type = cursor.read_u32()?;
    let key_strings_offset = cursor.read_u32()?;
    let _last_public_key = cursor.read_u32()?;

    info!("Package {:#04x} ({:?})", package_id, name);

    if type_strings_offset != header.header_size as u32 {
        return Err(ArscError::StructuralMismatch(format!(
            "type strings at {:#x} do not immediately follow the {}-byte package header",
            type_strings_offset, header.header_size
        )));
    }

    let (type_strings, _) = read_nested_pool(data, type_strings_offset as usize)?;
    let (key_strings, key_pool_size) = read_nested_pool(data, key_strings_offset as usize)?;
    debug!(
        "Package pools: {} type names, {} key names",
        type_strings.len(),
        key_strings.len()
    );

    // Walk the remaining chunks; the cursor must land on the package end
    // exactly.
    let mut pos = key_strings_offset as usize + key_pool_size;
    while pos < data.len() {
        if data.len() - pos < 8 {
            return Err(ArscError::TruncatedPackage { offset: pos });
        }
        cursor.seek(pos)?;
        let type_tag = cursor.read_u16()?;
        let _header_size = cursor.read_u16()?;
        let size = cursor.read_u32()? as usize;

        if size < 8 {
            return Err(ArscError::MalformedChunk {
                offset: pos,
                reason: "chunk size smaller than the chunk header",
            });
        }
        if size > data.len() - pos {
            return Err(ArscError::TruncatedPackage { offset: pos });
        }
        let chunk = &data[pos..pos + size];

        match type_tag {
            RES_TABLE_TYPE_SPEC_TYPE => type_spec::parse(chunk)?,
            RES_TABLE_TYPE_TYPE => entries::parse(
                chunk,
                package_id,
                &type_strings,
                &key_strings,
                value_strings,
                map,
            )?,
            other => {
                debug!("Skipping unknown package chunk {:#06x} at {:#x}", other, pos);
            }
        }

        pos += size;
    }

    Ok(())
}

/// Reads the fixed 256-unit UTF-16LE package name, truncated at the first NUL.
fn read_package_name(cursor: &mut ChunkCursor) -> Result<String> {
    let bytes = cursor.read_bytes(PACKAGE_NAME_UNITS * 2)?;
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|unit| *unit != 0)
        .collect();
    Ok(String::from_utf16_lossy(&units))
}

/// Re-reads the chunk header at `offset` and decodes the pool found there,
/// bounded by that header's own declared size.
fn read_nested_pool(data: &[u8], offset: usize) -> Result<(StringPool, usize)> {
    let mut cursor = ChunkCursor::new(data);
    cursor.seek(offset)?;
    let header = cursor.read_chunk_header()?;

    let pool_data = &data[offset..offset + header.size as usize];
    let pool = string_pool::parse(pool_data)?;
    Ok((pool, header.size as usize))
}
