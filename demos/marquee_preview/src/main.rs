// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a message the way a display would receive it.
//!
//! ```text
//! cargo run -p marquee_preview -- --font /path/to/font.ttf --size 16 "Hello"
//! cargo run -p marquee_preview -- --preset 8 --json
//! ```

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dotmatrix::{GlyphProvider, GlyphService, PackedBitmap, Rasterizer};
use dotmatrix_feed::{Feed, FramePayload, SettingsForm};

#[derive(Parser, Debug)]
#[command(about = "Preview dot-matrix glyph cells")]
struct Args {
    /// Message to render; defaults to the display's current message.
    text: Option<String>,

    /// TrueType or OpenType font; the built-in 5x7 font is used without one.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Cell size in pixels.
    #[arg(long, default_value_t = 16)]
    size: u32,

    /// Show preset slot 0-9 instead of `text`.
    #[arg(long)]
    preset: Option<u8>,

    /// Print the device JSON payload instead of ASCII art.
    #[arg(long)]
    json: bool,

    /// Log glyph fallbacks and overflow corrections to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.verbose {
        log::set_logger(&StderrLogger).context("failed to install the stderr logger")?;
        log::set_max_level(log::LevelFilter::Debug);
    }

    let payload = build_frame(&args)?;
    if args.json {
        let json = payload
            .to_json()
            .context("failed to encode the frame as JSON")?;
        println!("{json}");
    } else {
        print_cells(&payload);
    }
    Ok(())
}

/// Renders the requested text or preset the way a display would fetch it.
fn build_frame(args: &Args) -> Result<FramePayload> {
    let provider = match &args.font {
        Some(path) => GlyphProvider::open(path),
        None => GlyphProvider::builtin(),
    };
    let feed = Feed::new(GlyphService::new(Rasterizer::new(provider)));

    let size = args.size.to_string();
    let mut form = vec![("size", size.as_str())];
    if let Some(text) = &args.text {
        form.push(("text", text.as_str()));
    }
    feed.submit(&SettingsForm::from_pairs(form))
        .with_context(|| format!("cannot display text at size {}", args.size))?;
    feed.frame(args.preset).context("failed to build the display frame")
}

/// Prints each distinct character once, in order of first appearance.
fn print_cells(payload: &FramePayload) {
    let size = payload.meta.size;
    let mut seen = BTreeSet::new();
    for ch in payload.meta.text.chars().filter(|ch| seen.insert(*ch)) {
        let grid = payload
            .bitmaps
            .get(&ch.to_string())
            .and_then(|bytes| PackedBitmap::from_bytes(size, bytes))
            .and_then(|bitmap| bitmap.unpack(size));
        match grid {
            Some(grid) => println!("{ch:?} U+{:04X}\n{}", ch as u32, grid.to_ascii()),
            None => println!("{ch:?} U+{:04X}: no bitmap\n", ch as u32),
        }
    }
}

/// Writes `log` records to stderr.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        eprintln!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}
