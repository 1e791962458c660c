//! Bounds-checked little-endian cursor over a byte buffer.
//!
//! Every chunk decoder reads its fields through this cursor. All reads,
//! seeks, and skips are validated against the buffer bounds on every call;
//! the input is untrusted and nothing about it may be assumed.

use byteorder::{ByteOrder, LittleEndian};

use super::types::error::{ArscError, Result};
use super::types::models::ChunkHeader;

/// A read-only cursor over a borrowed byte slice.
///
/// No side effects beyond the cursor position.
#[derive(Debug)]
pub struct ChunkCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ChunkCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Moves the cursor to an absolute offset.
    pub fn seek(&mut self, offset: usize) -> Result<()> {
        if offset > self.data.len() {
            return Err(ArscError::OutOfRange {
                offset,
                len: self.data.len(),
            });
        }
        self.pos = offset;
        Ok(())
    }

    /// Advances the cursor by `count` bytes without reading them.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        let offset = self.pos.checked_add(count).ok_or(ArscError::OutOfRange {
            offset: usize::MAX,
            len: self.data.len(),
        })?;
        self.seek(offset)
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        if count > self.remaining() {
            return Err(ArscError::OutOfRange {
                offset: self.pos + count,
                len: self.data.len(),
            });
        }
        let span = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(span)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.take(4)?))
    }

    /// Reads a raw byte span of exactly `count` bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.take(count)
    }

    /// Reads a chunk header at the current position and validates its
    /// declared size against the remaining buffer.
    ///
    /// A chunk smaller than its own 8 header bytes can never make progress
    /// in a chunk walk, so it is rejected alongside the oversized case.
    pub fn read_chunk_header(&mut self) -> Result<ChunkHeader> {
        let start = self.pos;
        let type_tag = self.read_u16()?;
        let header_size = self.read_u16()?;
        let size = self.read_u32()?;

        if (size as usize) < 8 {
            return Err(ArscError::MalformedChunk {
                offset: start,
                reason: "chunk size smaller than the chunk header",
            });
        }
        if size as usize > self.data.len() - start {
            return Err(ArscError::MalformedChunk {
                offset: start,
                reason: "chunk size exceeds the remaining buffer",
            });
        }

        Ok(ChunkHeader {
            type_tag,
            header_size,
            size,
        })
    }
}
