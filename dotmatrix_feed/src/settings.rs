// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use dotmatrix::CellSize;

use crate::FeedError;

/// What the display shows and how it scrolls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplaySettings {
    /// The message being scrolled.
    pub text: String,
    /// Cell size in pixels.
    pub size: u32,
    /// Delay between scroll steps, in milliseconds.
    pub scroll_delay_ms: u32,
    /// Pixels advanced per scroll step.
    pub scroll_step: u32,
}

impl DisplaySettings {
    /// Accepted scroll delays.
    pub const SCROLL_DELAY_MS: RangeInclusive<u32> = 10..=200;
    /// Accepted scroll steps.
    pub const SCROLL_STEP: RangeInclusive<u32> = 1..=8;

    /// Sets the scroll delay, clamped to [`Self::SCROLL_DELAY_MS`].
    pub fn set_scroll_delay_ms(&mut self, delay: i64) {
        self.scroll_delay_ms = clamp(delay, &Self::SCROLL_DELAY_MS);
    }

    /// Sets the scroll step, clamped to [`Self::SCROLL_STEP`].
    pub fn set_scroll_step(&mut self, step: i64) {
        self.scroll_step = clamp(step, &Self::SCROLL_STEP);
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            text: "Waiting...".to_owned(),
            size: 16,
            scroll_delay_ms: 50,
            scroll_step: 2,
        }
    }
}

fn clamp(value: i64, range: &RangeInclusive<u32>) -> u32 {
    let clamped = value.clamp(i64::from(*range.start()), i64::from(*range.end()));
    u32::try_from(clamped).unwrap_or(*range.start())
}

/// A settings submission from the control page.
///
/// Every field is optional text, exactly as a browser posts it. Use
/// [`Feed::submit`](crate::Feed::submit) to apply it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsForm {
    /// Replacement message; blank leaves the message unchanged.
    pub text: Option<String>,
    /// Replacement cell size.
    ///
    /// A missing or blank size keeps the current size; it is not reset to
    /// the default of 16.
    pub size: Option<String>,
    /// Replacement scroll delay; ignored unless it parses.
    pub scroll_delay_ms: Option<String>,
    /// Replacement scroll step; ignored unless it parses.
    pub scroll_step: Option<String>,
    /// Replacement preset messages by slot; blank values are ignored.
    pub presets: BTreeMap<u8, String>,
}

impl SettingsForm {
    /// Collects a form from decoded `name=value` pairs.
    ///
    /// Preset slots are posted as `preset_0` through `preset_9`. Unknown names
    /// are skipped and a repeated name keeps its last value.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut form = Self::default();
        for (name, value) in pairs {
            let value = value.to_owned();
            match name {
                "text" => form.text = Some(value),
                "size" => form.size = Some(value),
                "scroll_delay_ms" => form.scroll_delay_ms = Some(value),
                "scroll_step" => form.scroll_step = Some(value),
                _ => match name.strip_prefix("preset_").and_then(|id| id.parse().ok()) {
                    Some(id) => {
                        form.presets.insert(id, value);
                    }
                    None => log::debug!("ignoring form field {name:?}"),
                },
            }
        }
        form
    }

    /// The submitted size, if one was given.
    ///
    /// A blank field counts as not given.
    pub(crate) fn parsed_size(&self) -> Result<Option<u32>, FeedError> {
        let Some(raw) = self.size.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        let size = raw
            .parse::<i64>()
            .ok()
            .and_then(|size| CellSize::try_from(size).ok())
            .ok_or_else(|| FeedError::invalid_size(raw))?;
        Ok(Some(size.get()))
    }

    /// Applies everything but the size and the presets to `settings`.
    pub(crate) fn apply(&self, settings: &mut DisplaySettings) {
        if let Some(text) = non_blank(self.text.as_deref()) {
            settings.text = text.to_owned();
        }
        if let Some(delay) = parse_number(self.scroll_delay_ms.as_deref()) {
            settings.set_scroll_delay_ms(delay);
        }
        if let Some(step) = parse_number(self.scroll_step.as_deref()) {
            settings.set_scroll_step(step);
        }
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_number(value: Option<&str>) -> Option<i64> {
    value?.trim().parse().ok()
}
