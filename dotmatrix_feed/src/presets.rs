// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::settings::non_blank;

const DEFAULTS: [&str; Presets::COUNT] = [
    "歡迎使用智慧看板",
    "包裹已送達",
    "垃圾車來了",
    "會議中請勿打擾",
    "用餐時間",
    "外出中",
    "請稍候",
    "謝謝光臨",
    "Happy New Year",
    "abc ㄅ ㄆ ㄇ ㄈ",
];

/// Numbered canned messages, selected from a remote by slot number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presets {
    slots: [String; Self::COUNT],
}

impl Presets {
    /// Number of slots, numbered from zero.
    pub const COUNT: usize = 10;

    /// The message in slot `id`.
    pub fn get(&self, id: u8) -> Option<&str> {
        self.slots.get(usize::from(id)).map(String::as_str)
    }

    /// Replaces the message in slot `id`.
    ///
    /// Surrounding whitespace is trimmed. Blank messages and unknown slots are
    /// ignored; returns whether the slot changed.
    pub fn set(&mut self, id: u8, text: &str) -> bool {
        let Some(text) = non_blank(Some(text)) else {
            return false;
        };
        match self.slots.get_mut(usize::from(id)) {
            Some(slot) => {
                text.clone_into(slot);
                true
            }
            None => {
                log::debug!("ignoring unknown preset slot {id}");
                false
            }
        }
    }

    /// Iterates over `(slot, message)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        (0_u8..).zip(self.slots.iter().map(String::as_str))
    }
}

impl Default for Presets {
    fn default() -> Self {
        Self {
            slots: DEFAULTS.map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_slots() {
        let presets = Presets::default();
        assert_eq!(presets.iter().count(), 10);
        assert_eq!(presets.get(0), Some("歡迎使用智慧看板"));
        assert_eq!(presets.get(8), Some("Happy New Year"));
        assert_eq!(presets.get(10), None);
    }

    #[test]
    fn set_trims_and_ignores_blanks() {
        let mut presets = Presets::default();
        assert!(presets.set(4, "  back at 2  "));
        assert_eq!(presets.get(4), Some("back at 2"));
        assert!(!presets.set(4, "   "));
        assert_eq!(presets.get(4), Some("back at 2"));
        assert!(!presets.set(12, "nowhere"));
    }
}
