//! HTML reference page emission

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::charset::Charset;
use crate::error::RenderError;
use crate::labels;
use crate::raster::{self, DEFAULT_GLYPH_SCALE};

/// Glyph cells per table row
pub const GLYPHS_PER_ROW: usize = 16;

/// Glyphs in one ROM bank, rendered as one table
pub const GLYPHS_PER_TABLE: usize = 256;

const PAGE_HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>petscii/petcat table</title>
<style type="text/css">
table, tr, td {
  border: 2px solid #d4d4d4;
  border-collapse: collapse;
}
td {
  width: 60px;
  padding: 4px 1px;
}
table {
  margin-top: 2em;
}
td {
  text-align: center;
}
img {
  border: 2px solid #2bb;
}
p {
  margin: 0; padding: 0;
  font-size: 12px;
  font-family: monospace;
}
</style>
</head>
<body>
<h1>petscii/petcat table</h1>

"#;

const PAGE_FOOTER: &str = r#"
</body>
</html>
"#;

/// Streaming HTML page writer.
///
/// Renders a decoded charset as the petscii/petcat reference page: one
/// table per 256-glyph bank, one row per 16 screen codes, each labeled
/// cell holding an inline base64 PNG of the glyph and its petcat name.
pub struct PageWriter<W: Write> {
    inner: W,
    glyph_scale: u32,
}

impl<W: Write> PageWriter<W> {
    /// Create a page writer over an output sink
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            glyph_scale: DEFAULT_GLYPH_SCALE,
        }
    }

    /// Set the integer upscale factor for the inline glyph images
    #[must_use]
    pub const fn with_glyph_scale(mut self, glyph_scale: u32) -> Self {
        self.glyph_scale = glyph_scale;
        self
    }

    /// Render the full page for `charset` and return the output sink
    ///
    /// # Errors
    ///
    /// Returns an error if a glyph fails to encode as PNG or if writing
    /// to the underlying output fails.
    pub fn write_page(mut self, charset: &Charset) -> Result<W, RenderError> {
        self.inner.write_all(PAGE_HEADER.as_bytes())?;

        for bank_start in (0..Charset::GLYPH_COUNT).step_by(GLYPHS_PER_TABLE) {
            self.write_table(charset, bank_start)?;
        }

        self.inner.write_all(PAGE_FOOTER.as_bytes())?;
        self.inner.flush()?;
        Ok(self.inner)
    }

    /// Write the table for the bank whose first glyph is `bank_start`
    fn write_table(&mut self, charset: &Charset, bank_start: usize) -> Result<(), RenderError> {
        writeln!(self.inner, "<table>")?;

        for row_start in (0..labels::LABEL_COUNT).step_by(GLYPHS_PER_ROW) {
            let codes = row_start..row_start + GLYPHS_PER_ROW;
            // Rows where no screen code has a petcat name are left out
            if codes.clone().all(|code| labels::label(code).is_none()) {
                continue;
            }

            writeln!(self.inner, "<tr>")?;
            for code in codes {
                writeln!(self.inner, "<td>")?;
                if let Some(label) = labels::label(code) {
                    self.write_cell(charset, bank_start + code, label)?;
                }
                writeln!(self.inner, "</td>")?;
            }
            writeln!(self.inner, "</tr>")?;
        }

        writeln!(self.inner, "</table>")?;
        Ok(())
    }

    /// Write the inline image and caption for one labeled cell
    fn write_cell(
        &mut self,
        charset: &Charset,
        index: usize,
        label: &str,
    ) -> Result<(), RenderError> {
        // Labeled screen codes stop at 0xE0, well inside the 256-glyph bank
        let glyph = &charset.glyphs()[index];
        let png = raster::encode_png(glyph, index, self.glyph_scale)?;

        writeln!(
            self.inner,
            "<img src=\"data:image/png;base64,{}\"/>",
            STANDARD.encode(&png)
        )?;
        writeln!(self.inner, "<p>{}</p>", html_escape::encode_text(label))?;
        Ok(())
    }
}
