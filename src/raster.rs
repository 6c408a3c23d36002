//! Glyph rasterization and PNG encoding

use std::io::Cursor;

use image::{imageops, GrayImage, ImageFormat, Luma};

use crate::charset::Glyph;
use crate::error::RenderError;

/// Default integer upscale factor for glyph images
pub const DEFAULT_GLYPH_SCALE: u32 = 2;

const INK: Luma<u8> = Luma([0x00]);
const PAPER: Luma<u8> = Luma([0xFF]);

/// Rasterize a glyph into an upscaled grayscale image
///
/// Ink pixels come out black and paper pixels white. The 8x8 raster is
/// enlarged by `scale` with nearest-neighbour sampling so pixel edges
/// stay crisp.
#[must_use]
pub fn rasterize(glyph: &Glyph, scale: u32) -> GrayImage {
    let mut img = GrayImage::new(Glyph::WIDTH, Glyph::HEIGHT);
    for y in 0..Glyph::HEIGHT {
        for x in 0..Glyph::WIDTH {
            let shade = if glyph.pixel(x, y) == 0 { INK } else { PAPER };
            img.put_pixel(x, y, shade);
        }
    }

    if scale <= 1 {
        return img;
    }
    imageops::resize(
        &img,
        Glyph::WIDTH * scale,
        Glyph::HEIGHT * scale,
        imageops::FilterType::Nearest,
    )
}

/// Encode a glyph as a PNG image
///
/// # Arguments
///
/// * `glyph` - The glyph to encode
/// * `index` - ROM index of the glyph, reported on encode failure
/// * `scale` - Integer upscale factor (1 keeps the native 8x8 size)
///
/// # Errors
///
/// Returns [`RenderError::PngEncode`] if the PNG encoder fails.
pub fn encode_png(glyph: &Glyph, index: usize, scale: u32) -> Result<Vec<u8>, RenderError> {
    let img = rasterize(glyph, scale);
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)
        .map_err(|source| RenderError::PngEncode { index, source })?;
    Ok(buffer.into_inner())
}
