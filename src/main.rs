//! Command-line front end that renders a charset ROM as an HTML page

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use petscii2html::raster::DEFAULT_GLYPH_SCALE;
use petscii2html::{dump_glyphs, Charset, PageWriter};

/// Render a PETSCII charset ROM as an HTML petcat reference table
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Path to the 4096-byte charset ROM
    charset: PathBuf,

    /// Write the page to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also dump every glyph into this directory as <index>.png
    #[arg(long)]
    dump_dir: Option<PathBuf>,

    /// Integer upscale factor for glyph images
    #[arg(
        long,
        default_value_t = DEFAULT_GLYPH_SCALE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    glyph_scale: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let file = File::open(&args.charset)
        .with_context(|| format!("failed to open {}", args.charset.display()))?;
    let charset = Charset::read_from(BufReader::new(file))
        .with_context(|| format!("failed to decode {}", args.charset.display()))?;

    if let Some(dir) = &args.dump_dir {
        let written = dump_glyphs(&charset, dir, args.glyph_scale)
            .with_context(|| format!("failed to dump glyphs to {}", dir.display()))?;
        tracing::info!("dumped {} glyph PNGs to {}", written, dir.display());
    }

    match &args.output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            PageWriter::new(BufWriter::new(out))
                .with_glyph_scale(args.glyph_scale)
                .write_page(&charset)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("wrote page to {}", path.display());
        }
        None => {
            PageWriter::new(io::stdout().lock())
                .with_glyph_scale(args.glyph_scale)
                .write_page(&charset)
                .context("failed to write page to standard output")?;
        }
    }

    Ok(())
}
