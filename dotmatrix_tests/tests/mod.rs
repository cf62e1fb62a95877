// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `dotmatrix` and `dotmatrix_feed`.
//!
//! - The `util` module contains glyph sources and helpers shared by the topic modules.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so the helpers only need to be defined once.
//! - Put the "topic" of a test at the start of its name, e.g. `cache_shared_between_threads`.
//! - Tests that need a real font call [`util::test_font`] and return early when no font is
//!   available. Set `DOTMATRIX_TEST_FONT` to a TrueType or OpenType file to run them.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod cache;
mod fallback;
mod font;
mod util;
