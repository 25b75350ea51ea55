use alloc::vec::Vec;

use crate::{crc::checksum, error::PngError};

/// A tagged block of a PNG file: `length ++ tag ++ payload ++ crc`.
#[derive(Clone, Copy, Debug)]
pub struct Chunk<'a> {
    tag: [u8; 4],
    payload: &'a [u8],
}

impl<'a> Chunk<'a> {
    /// # Errors
    ///
    /// Will return `Err` if the payload is longer than [`u32::MAX`] bytes.
    pub const fn new(tag: [u8; 4], payload: &'a [u8]) -> Result<Self, PngError> {
        if payload.len() > u32::MAX as usize {return Err(PngError::ChunkTooLarge(payload.len()));}
        Ok(Self {tag, payload})
    }
    /// The 4 byte ASCII chunk type, e.g. `IHDR`.
    #[must_use]
    pub const fn tag(&self) -> [u8; 4] {
        self.tag
    }
    /// The chunk data without length, tag or CRC.
    #[must_use]
    pub const fn payload(&self) -> &'a [u8] {
        self.payload
    }
    /// The payload length as stored in the first 4 bytes.
    #[allow(clippy::cast_possible_truncation)] // checked in new
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.payload.len() as u32
    }
    /// CRC-32 over tag and payload as stored in the last 4 bytes.
    #[must_use]
    pub const fn checksum(&self) -> u32 {
        checksum(self.tag, self.payload)
    }
    /// Appends the framed chunk to `output`.
    pub fn write_to(&self, output: &mut Vec<u8>) {
        log::trace!("{} chunk: {} bytes, crc {:#010x}", tag_name(&self.tag), self.length(), self.checksum());
        output.reserve(self.payload.len() + 12);
        output.extend_from_slice(&self.length().to_be_bytes());
        output.extend_from_slice(&self.tag);
        output.extend_from_slice(self.payload);
        output.extend_from_slice(&self.checksum().to_be_bytes());
    }
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut output = Vec::new();
        self.write_to(&mut output);
        output
    }
}

/// Frames `payload` as a PNG chunk with the given tag.
///
/// # Errors
///
/// Will return `Err` if the payload is longer than [`u32::MAX`] bytes.
pub fn build_chunk(tag: [u8; 4], payload: &[u8]) -> Result<Vec<u8>, PngError> {
    Chunk::new(tag, payload).map(|chunk| chunk.to_bytes())
}

fn tag_name(tag: &[u8; 4]) -> &str {
    core::str::from_utf8(tag).unwrap_or("????")
}
