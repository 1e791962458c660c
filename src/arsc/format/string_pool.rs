//! String-pool chunk decoding.
//!
//! A string pool carries its strings in one of two variable-length
//! encodings, selected by a header flag:
//!
//! - UTF-8: two 7-bit-continuation length fields (decoded UTF-16 length,
//!   then the UTF-8 byte count), followed by that many UTF-8 bytes.
//! - UTF-16LE: one 16-bit length that spills into a second word when its
//!   high bit is set, followed by `count * 2` bytes.
//!
//! Style data is carried by some pools but never interpreted here.

use encoding_rs::{UTF_16LE, UTF_8};
use log::{debug, trace};

use crate::arsc::cursor::ChunkCursor;
use crate::arsc::types::error::{ArscError, Result};
use crate::arsc::types::models::{PoolEncoding, StringPool, UTF8_FLAG};

/// Decodes one string-pool chunk into an ordered string array.
///
/// `data` must be the pool chunk exactly — header plus payload, bounded by
/// the chunk's own declared size. Fails with `MalformedStringPool` if any
/// computed string offset falls outside the chunk.
pub fn parse(data: &[u8]) -> Result<StringPool> {
    let mut cursor = ChunkCursor::new(data);
    let _header = cursor.read_chunk_header()?;

    let string_count = cursor.read_u32()?;
    let _style_count = cursor.read_u32()?;
    let flags = cursor.read_u32()?;
    let strings_start = cursor.read_u32()?;
    let _styles_start = cursor.read_u32()?;

    let encoding = if flags & UTF8_FLAG != 0 {
        PoolEncoding::Utf8
    } else {
        PoolEncoding::Utf16Le
    };
    debug!(
        "String pool: {} strings, encoding {:?}, data at {:#x}",
        string_count, encoding, strings_start
    );

    let mut offsets = Vec::with_capacity(string_count as usize);
    for _ in 0..string_count {
        offsets.push(cursor.read_u32()?);
    }

    let mut strings = Vec::with_capacity(string_count as usize);
    for (i, offset) in offsets.iter().enumerate() {
        let pos = strings_start as usize + *offset as usize;
        if pos > data.len() {
            return Err(ArscError::MalformedStringPool(format!(
                "string {} starts at {:#x}, past the pool end {:#x}",
                i,
                pos,
                data.len()
            )));
        }
        cursor.seek(pos)?;

        let string = match encoding {
            PoolEncoding::Utf8 => read_utf8_string(&mut cursor)?,
            PoolEncoding::Utf16Le => read_utf16_string(&mut cursor)?,
        };
        trace!("String {}: {:?}", i, string);
        strings.push(string);
    }

    Ok(StringPool::new(strings))
}

/// Reads a 7-bit-continuation length: one byte, extended with a second byte
/// into a 15-bit value when the high bit is set.
fn read_utf8_length(cursor: &mut ChunkCursor) -> Result<usize> {
    let first = cursor.read_u8()? as usize;
    if first & 0x80 != 0 {
        let second = cursor.read_u8()? as usize;
        Ok(((first & 0x7F) << 8) | second)
    } else {
        Ok(first)
    }
}

fn read_utf8_string(cursor: &mut ChunkCursor) -> Result<String> {
    // The first length field is the decoded length in UTF-16 units; the
    // format requires consuming it even though only the byte count is used.
    let _utf16_len = read_utf8_length(cursor)?;
    let byte_len = read_utf8_length(cursor)?;

    if byte_len == 0 {
        return Ok(String::new());
    }
    let bytes = cursor.read_bytes(byte_len)?;
    let (text, _, _) = UTF_8.decode(bytes);
    Ok(text.into_owned())
}

fn read_utf16_string(cursor: &mut ChunkCursor) -> Result<String> {
    let first = cursor.read_u16()? as usize;
    let char_count = if first & 0x8000 != 0 {
        let second = cursor.read_u16()? as usize;
        ((first & 0x7FFF) << 16) | second
    } else {
        first
    };

    if char_count == 0 {
        return Ok(String::new());
    }
    let bytes = cursor.read_bytes(char_count * 2)?;
    let (text, _, _) = UTF_16LE.decode(bytes);
    Ok(text.into_owned())
}
