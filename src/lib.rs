//! PETSCII charset ROM to HTML reference page converter
//!
//! This crate decodes C64-family character generator ROMs (512 glyphs of
//! 8 bytes each, two 256-glyph banks) and renders them as a standalone
//! petscii/petcat reference page with every labeled glyph inlined as a
//! base64 PNG next to its petcat mnemonic.

pub mod charset;
pub mod dump;
pub mod error;
pub mod labels;
pub mod page;
pub mod raster;

// Re-export main types for convenience
pub use charset::{Charset, Glyph};
pub use dump::dump_glyphs;
pub use error::{CharsetError, RenderError};
pub use page::PageWriter;
