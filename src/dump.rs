//! Per-glyph PNG dump for charset inspection

use std::fs;
use std::path::Path;

use crate::charset::Charset;
use crate::error::RenderError;
use crate::raster;

/// Write every glyph of `charset` into `dir` as `<index>.png`
///
/// The directory is created if it does not exist. Returns the number of
/// files written.
///
/// # Errors
///
/// Returns [`RenderError::OutputPathUnavailable`] if the directory
/// cannot be created or a file cannot be written, or
/// [`RenderError::PngEncode`] if a glyph fails to encode.
pub fn dump_glyphs(charset: &Charset, dir: &Path, scale: u32) -> Result<usize, RenderError> {
    fs::create_dir_all(dir).map_err(|source| RenderError::OutputPathUnavailable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = 0;
    for (index, glyph) in charset.glyphs().iter().enumerate() {
        let png = raster::encode_png(glyph, index, scale)?;
        let path = dir.join(format!("{index}.png"));
        fs::write(&path, png)
            .map_err(|source| RenderError::OutputPathUnavailable { path, source })?;
        written += 1;
    }

    tracing::debug!("wrote {} glyph PNGs to {}", written, dir.display());
    Ok(written)
}
