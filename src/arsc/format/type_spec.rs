//! Type-spec chunk parsing.
//!
//! A type spec carries one configuration-flag word per entry of its type.
//! The flags describe which configuration qualifiers affect each entry;
//! nothing downstream consumes them, so this parser only validates the
//! structure and keeps the parent chunk walk's cursor arithmetic honest.

use log::trace;

use crate::arsc::cursor::ChunkCursor;
use crate::arsc::types::error::Result;

/// Decodes a type-spec chunk, discarding its configuration-flag words.
pub fn parse(data: &[u8]) -> Result<()> {
    let mut cursor = ChunkCursor::new(data);
    let _header = cursor.read_chunk_header()?;

    let type_id = cursor.read_u8()?;
    let _res0 = cursor.read_u8()?;
    let _res1 = cursor.read_u16()?;
    let entry_count = cursor.read_u32()?;

    trace!("Type spec {:#04x}: {} entries", type_id, entry_count);

    for _ in 0..entry_count {
        let _config_flags = cursor.read_u32()?;
    }

    Ok(())
}
