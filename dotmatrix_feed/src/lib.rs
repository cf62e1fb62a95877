// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display state for Dotmatrix marquees.
//!
//! A [`Feed`] holds what one LED display should show: the current message, its
//! cell size, scroll timing and ten numbered [`Presets`]. It applies settings
//! submitted from a control page ([`SettingsForm`]) and builds the
//! [`FramePayload`] a display fetches, with every glyph packed by
//! [`dotmatrix`].
//!
//! This crate does no networking; wire [`Feed::submit`] and [`Feed::frame`] to
//! whatever server the display talks to.
//!
//! ## Example
//!
//! ```
//! use dotmatrix::{GlyphProvider, GlyphService, Rasterizer};
//! use dotmatrix_feed::{Feed, SettingsForm};
//!
//! let feed = Feed::new(GlyphService::new(Rasterizer::new(GlyphProvider::builtin())));
//! feed.submit(&SettingsForm::from_pairs([("text", "OK"), ("size", "8")])).unwrap();
//!
//! let payload = feed.frame(None).unwrap();
//! assert_eq!(payload.bitmaps["O"].len(), 8);
//! println!("{}", payload.to_json().unwrap());
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod feed;
mod payload;
mod presets;
mod settings;

pub use error::{FeedError, FeedErrorKind};
pub use feed::Feed;
pub use payload::{FrameMeta, FramePayload};
pub use presets::Presets;
pub use settings::{DisplaySettings, SettingsForm};
