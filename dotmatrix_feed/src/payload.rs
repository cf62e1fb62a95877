// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;

use dotmatrix::GlyphSet;
use serde::{Deserialize, Serialize};

use crate::DisplaySettings;

/// Everything a display needs to render one message.
///
/// Serializes to the JSON shape the firmware parses:
///
/// ```json
/// {"meta":{"text":"Hi","size":16,"scroll_delay_ms":50,"scroll_step":2},
///  "bitmaps":{"H":[0,0,...],"i":[0,0,...]}}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FramePayload {
    /// The settings the bitmaps were rendered with.
    pub meta: FrameMeta,
    /// Packed cell bytes per distinct character.
    pub bitmaps: BTreeMap<String, Vec<u8>>,
}

/// Display settings as sent to the device.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameMeta {
    /// The message being scrolled.
    pub text: String,
    /// Cell size in pixels; each bitmap is `size * ceil(size / 8)` bytes.
    pub size: u32,
    /// Delay between scroll steps, in milliseconds.
    pub scroll_delay_ms: u32,
    /// Pixels advanced per scroll step.
    pub scroll_step: u32,
}

impl FramePayload {
    pub(crate) fn new(settings: DisplaySettings, glyphs: &GlyphSet) -> Self {
        let bitmaps = glyphs
            .iter()
            .map(|(ch, bitmap)| (ch.to_string(), bitmap.as_bytes().to_vec()))
            .collect();
        Self {
            meta: FrameMeta {
                text: settings.text,
                size: settings.size,
                scroll_delay_ms: settings.scroll_delay_ms,
                scroll_step: settings.scroll_step,
            },
            bitmaps,
        }
    }

    /// Encodes the payload as compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<FrameMeta> for DisplaySettings {
    fn from(meta: FrameMeta) -> Self {
        Self {
            text: meta.text,
            size: meta.size,
            scroll_delay_ms: meta.scroll_delay_ms,
            scroll_step: meta.scroll_step,
        }
    }
}
