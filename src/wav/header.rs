//! Canonical 44-byte RIFF/WAVE header.

use std::io::{self, Write};

use super::format::WavFormat;

/// Size of the header written in front of the sample data
pub const HEADER_LEN: u32 = 44;

/// Header fields for a PCM stream whose length is known up front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub format: WavFormat,
    pub sample_count: u32,
}

impl WavHeader {
    /// Returns `None` when the sizes do not fit the 32-bit fields
    pub fn new(format: WavFormat, sample_count: u32) -> Option<Self> {
        let header = Self {
            format,
            sample_count,
        };
        header.checked_chunk_size()?;
        Some(header)
    }

    fn checked_data_size(&self) -> Option<u32> {
        self.sample_count
            .checked_mul(self.format.block_align() as u32)
    }

    fn checked_chunk_size(&self) -> Option<u32> {
        self.checked_data_size()?.checked_add(HEADER_LEN - 8)
    }

    /// Subchunk2Size: bytes of sample data
    pub fn data_size(&self) -> u32 {
        self.checked_data_size().unwrap_or(u32::MAX)
    }

    /// ChunkSize: everything after the RIFF id and this field
    pub fn chunk_size(&self) -> u32 {
        self.checked_chunk_size().unwrap_or(u32::MAX)
    }

    /// Total file length in bytes
    pub fn file_len(&self) -> u64 {
        HEADER_LEN as u64 + self.data_size() as u64
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let format = &self.format;

        // RIFF chunk
        writer.write_all(b"RIFF")?;
        writer.write_all(&self.chunk_size().to_le_bytes())?;
        writer.write_all(b"WAVE")?;

        // fmt sub-chunk
        writer.write_all(b"fmt ")?;
        writer.write_all(&16u32.to_le_bytes())?; // Subchunk1Size for PCM
        writer.write_all(&1u16.to_le_bytes())?; // AudioFormat: PCM
        writer.write_all(&format.channels.to_le_bytes())?;
        writer.write_all(&format.sample_rate.to_le_bytes())?;
        writer.write_all(&format.byte_rate().to_le_bytes())?;
        writer.write_all(&format.block_align().to_le_bytes())?;
        writer.write_all(&format.bits_per_sample.to_le_bytes())?;

        // data sub-chunk
        writer.write_all(b"data")?;
        writer.write_all(&self.data_size().to_le_bytes())?;

        Ok(())
    }
}
