// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::{Mutex, MutexGuard, PoisonError};

use dotmatrix::GlyphService;

use crate::{DisplaySettings, FeedError, FramePayload, Presets, SettingsForm};

#[derive(Debug, Default)]
struct State {
    settings: DisplaySettings,
    presets: Presets,
}

/// The live state of one display and the glyphs it is fed.
///
/// All methods take `&self`; a `Feed` can be shared between request handlers.
/// The state lock is only held to read or update settings, never while glyphs
/// are rendered.
#[derive(Debug)]
pub struct Feed {
    state: Mutex<State>,
    glyphs: GlyphService,
}

impl Feed {
    /// Creates a feed with default settings and presets.
    pub fn new(glyphs: GlyphService) -> Self {
        Self::with_state(glyphs, DisplaySettings::default(), Presets::default())
    }

    /// Creates a feed starting from the given settings and presets.
    pub fn with_state(glyphs: GlyphService, settings: DisplaySettings, presets: Presets) -> Self {
        Self {
            state: Mutex::new(State { settings, presets }),
            glyphs,
        }
    }

    /// The glyph service frames are rendered with.
    pub fn glyphs(&self) -> &GlyphService {
        &self.glyphs
    }

    /// A snapshot of the current settings.
    pub fn settings(&self) -> DisplaySettings {
        self.lock().settings.clone()
    }

    /// A snapshot of the presets.
    pub fn presets(&self) -> Presets {
        self.lock().presets.clone()
    }

    /// Applies a settings submission and returns the resulting settings.
    ///
    /// The size is checked first: if it is given and invalid the submission is
    /// rejected as a whole and nothing changes. Otherwise the message, scroll
    /// values and presets are updated as described on [`SettingsForm`].
    pub fn submit(&self, form: &SettingsForm) -> Result<DisplaySettings, FeedError> {
        let size = form.parsed_size()?;
        let mut state = self.lock();
        form.apply(&mut state.settings);
        if let Some(size) = size {
            state.settings.size = size;
        }
        for (&id, text) in &form.presets {
            state.presets.set(id, text);
        }
        log::debug!("settings updated: {:?}", state.settings);
        Ok(state.settings.clone())
    }

    /// Builds the payload for the current message.
    ///
    /// When `preset` names a known slot, its message becomes the current one
    /// first. Unknown slots are ignored.
    pub fn frame(&self, preset: Option<u8>) -> Result<FramePayload, FeedError> {
        let settings = {
            let mut state = self.lock();
            if let Some(id) = preset {
                match state.presets.get(id).map(str::to_owned) {
                    Some(text) => {
                        log::info!("remote switched to preset {id}: {text}");
                        state.settings.text = text;
                    }
                    None => log::debug!("ignoring unknown preset {id}"),
                }
            }
            state.settings.clone()
        };
        let glyphs = self
            .glyphs
            .bitmaps(&settings.text, i64::from(settings.size))
            .map_err(FeedError::glyphs)?;
        Ok(FramePayload::new(settings, &glyphs))
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
