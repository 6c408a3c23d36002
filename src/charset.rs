//! Charset ROM parsing and glyph decoding

use std::io::Read;

use crate::error::CharsetError;

/// A single 8x8 glyph decoded from a charset ROM.
///
/// The ROM stores one byte per row, most significant bit leftmost, with a
/// set bit marking a lit (ink) pixel. Decoding inverts each row so that a
/// pixel value of 1 means paper (white) and 0 means ink (black), which is
/// the polarity the rendered page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; 8],
}

impl Glyph {
    /// Width of a glyph in pixels
    pub const WIDTH: u32 = 8;

    /// Height of a glyph in pixels
    pub const HEIGHT: u32 = 8;

    /// Size of a glyph in the ROM, in bytes
    pub const SIZE: usize = 8;

    /// Decode a glyph from its eight ROM row bytes
    #[must_use]
    pub const fn from_rom_rows(rom: [u8; 8]) -> Self {
        let mut rows = [0u8; 8];
        let mut i = 0;
        while i < 8 {
            rows[i] = !rom[i];
            i += 1;
        }
        Self { rows }
    }

    /// Re-encode the glyph into ROM-polarity row bytes
    #[must_use]
    pub const fn to_rom_rows(&self) -> [u8; 8] {
        let mut rom = [0u8; 8];
        let mut i = 0;
        while i < 8 {
            rom[i] = !self.rows[i];
            i += 1;
        }
        rom
    }

    /// Decoded row bytes, one per scanline, set bits marking paper pixels
    #[must_use]
    pub const fn rows(&self) -> &[u8; 8] {
        &self.rows
    }

    /// Pixel value at (`x`, `y`): 1 for paper (white), 0 for ink (black)
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is outside `0..8`.
    #[must_use]
    pub const fn pixel(&self, x: u32, y: u32) -> u8 {
        (self.rows[y as usize] >> (7 - x)) & 1
    }
}

/// A decoded charset ROM: 512 glyphs of 8 bytes each.
///
/// C64 character generator ROMs hold two 256-glyph banks back to back
/// (unshifted and shifted), so a full charset is always 4096 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    glyphs: Vec<Glyph>,
}

impl Charset {
    /// Number of glyphs in a charset ROM
    pub const GLYPH_COUNT: usize = 512;

    /// Size of a charset ROM in bytes
    pub const SIZE: usize = Self::GLYPH_COUNT * Glyph::SIZE;

    /// Decode a charset from an in-memory ROM image
    ///
    /// # Arguments
    ///
    /// * `buffer` - Raw ROM bytes, at least [`Charset::SIZE`] of them
    ///
    /// # Errors
    ///
    /// Returns [`CharsetError::InsufficientInput`] if the buffer holds fewer
    /// than [`Charset::SIZE`] bytes. Bytes past that size are ignored.
    pub fn parse(buffer: &[u8]) -> Result<Self, CharsetError> {
        if buffer.len() < Self::SIZE {
            return Err(CharsetError::InsufficientInput {
                needed: Self::SIZE,
                available: buffer.len(),
            });
        }

        if buffer.len() > Self::SIZE {
            tracing::debug!(
                "ignoring {} trailing bytes after the charset",
                buffer.len() - Self::SIZE
            );
        }

        let glyphs = buffer[..Self::SIZE]
            .chunks_exact(Glyph::SIZE)
            .map(|chunk| {
                let mut rom = [0u8; Glyph::SIZE];
                rom.copy_from_slice(chunk);
                Glyph::from_rom_rows(rom)
            })
            .collect();

        Ok(Self { glyphs })
    }

    /// Read a ROM image to the end of the stream and decode it
    ///
    /// # Errors
    ///
    /// Returns [`CharsetError::Io`] if reading fails, or any error
    /// [`Charset::parse`] reports for the bytes read.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, CharsetError> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Self::parse(&buffer)
    }

    /// Get a glyph by ROM index
    #[must_use]
    pub fn glyph(&self, index: usize) -> Option<&Glyph> {
        self.glyphs.get(index)
    }

    /// All glyphs in ROM order
    #[must_use]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }
}
