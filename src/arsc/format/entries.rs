//! Type chunk (entry table) parsing — the core of the decoder.
//!
//! A type chunk holds a sparse array of entry offsets followed by the
//! entries themselves. Each present entry is either simple (one value) or
//! complex (a map/array/plural/style, structurally skipped). Simple string
//! values resolve against the table's global value pool immediately; simple
//! references resolve in a single pass against the mapping built so far,
//! scoped to this chunk — an alias whose target is only defined in a chunk
//! processed later contributes nothing. That arrival-order dependence is a
//! known limitation kept for compatibility.
//!
//! All configuration variants of a resource id merge into one bucket in
//! arrival order; the device-configuration block is skipped entirely.

use log::{debug, trace};

use crate::arsc::cursor::ChunkCursor;
use crate::arsc::types::error::{ArscError, Result};
use crate::arsc::types::models::{
    ResourceId, ResourceMap, ResourceValue, StringPool, FLAG_COMPLEX, TYPE_REFERENCE, TYPE_STRING,
};

/// Size of one complex sub-entry: name reference + value header + value data.
const MAP_ENTRY_SIZE: usize = 12;

/// Decodes one type chunk and appends its resolved values into `map`.
pub fn parse(
    data: &[u8],
    package_id: u32,
    type_strings: &StringPool,
    key_strings: &StringPool,
    value_strings: &StringPool,
    map: &mut ResourceMap,
) -> Result<()> {
    let mut cursor = ChunkCursor::new(data);
    let header = cursor.read_chunk_header()?;

    let type_id = cursor.read_u8()?;
    let _res0 = cursor.read_u8()?;
    let _res1 = cursor.read_u16()?;
    let entry_count = cursor.read_u32()?;
    let entries_start = cursor.read_u32()?;
    let _config_size = cursor.read_u32()?;

    // The type name is 1-based in the type string pool.
    let type_name = (type_id as u32)
        .checked_sub(1)
        .and_then(|slot| type_strings.get(slot).ok());
    debug!(
        "Type {:#04x} ({}): {} entries",
        type_id,
        type_name.unwrap_or("?"),
        entry_count
    );

    // The device-configuration block (locale/density qualifiers) fills the
    // rest of the header and is not interpreted.
    cursor.seek(header.header_size as usize)?;

    if header.header_size as u64 + entry_count as u64 * 4 != entries_start as u64 {
        return Err(ArscError::StructuralMismatch(format!(
            "entries start {:#x} does not follow {} entry offsets after the {}-byte header",
            entries_start, entry_count, header.header_size
        )));
    }

    let mut entry_offsets = Vec::with_capacity(entry_count as usize);
    for _ in 0..entry_count {
        entry_offsets.push(cursor.read_i32()?);
    }

    // Aliases found in this chunk, resolved after the entry loop.
    let mut pending_refs: Vec<(ResourceId, ResourceId)> = Vec::new();

    for (index, offset) in entry_offsets.iter().enumerate() {
        // -1 marks an absent slot: no mapping key, no entry bytes consumed.
        if *offset == -1 {
            continue;
        }

        let resource_id = ResourceId::compose(package_id, type_id, index as u32);
        let value = read_entry(&mut cursor, key_strings, resource_id)?;

        match value {
            ResourceValue::StringRef(string_index) => {
                let text = value_strings.get(string_index)?;
                map.insert(resource_id, text.to_string());
            }
            ResourceValue::Reference(target) => {
                pending_refs.push((resource_id, target));
            }
            ResourceValue::Raw(data_word) => {
                map.insert(resource_id, data_word.to_string());
            }
            ResourceValue::Complex => {}
        }
    }

    resolve_references(&pending_refs, map);

    Ok(())
}

/// Reads one entry header and its value, advancing the cursor past it.
fn read_entry(
    cursor: &mut ChunkCursor,
    key_strings: &StringPool,
    resource_id: ResourceId,
) -> Result<ResourceValue> {
    let _entry_size = cursor.read_u16()?;
    let entry_flags = cursor.read_u16()?;
    let entry_key_index = cursor.read_u32()?;
    let key_name = key_strings.get(entry_key_index)?;

    if entry_flags & FLAG_COMPLEX != 0 {
        let _parent = cursor.read_u32()?;
        let sub_entry_count = cursor.read_u32()?;
        trace!(
            "Entry {}, key {:?}: complex with {} sub-entries, skipped",
            resource_id,
            key_name,
            sub_entry_count
        );
        // Sub-entries are consumed only to keep the cursor correct.
        cursor.skip(sub_entry_count as usize * MAP_ENTRY_SIZE)?;
        return Ok(ResourceValue::Complex);
    }

    let _value_size = cursor.read_u16()?;
    let _value_res0 = cursor.read_u8()?;
    let value_data_type = cursor.read_u8()?;
    let value_data = cursor.read_i32()?;

    trace!(
        "Entry {}, key {:?}: value type {:#04x}",
        resource_id,
        key_name,
        value_data_type
    );

    Ok(match value_data_type {
        TYPE_STRING => ResourceValue::StringRef(value_data as u32),
        TYPE_REFERENCE => ResourceValue::Reference(ResourceId(value_data as u32)),
        _ => ResourceValue::Raw(value_data),
    })
}

/// Single-hop reference resolution, scoped to one type chunk.
///
/// Every value the target has accumulated so far is appended again under the
/// alias's own key. A target that has not been resolved yet (for example one
/// defined in a type processed later) contributes nothing; this is not a
/// fixpoint resolver, and the asymmetry is part of the contract.
fn resolve_references(pending_refs: &[(ResourceId, ResourceId)], map: &mut ResourceMap) {
    for (alias, target) in pending_refs {
        let resolved = map.resolve(*target).map(|values| values.to_vec());
        match resolved {
            Some(values) => {
                for value in values {
                    map.insert(*alias, value);
                }
            }
            None => {
                debug!("Reference {} -> {} left unresolved", alias, target);
            }
        }
    }
}
