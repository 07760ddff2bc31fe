// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are monochrome Unicode glyphs rendered through the normal text
//! pipeline, sized via the design-token scale. Names describe the glyph's
//! appearance, not the action context (e.g. `cross`, not `dismiss`).

use crate::ui::design_tokens::sizing;
use iced::widget::{text, Text};

/// Applies a token size to a glyph.
pub fn sized(glyph: Text<'static>, size: f32) -> Text<'static> {
    glyph.size(size)
}

pub fn cross() -> Text<'static> {
    text("✕").size(sizing::ICON_SM)
}

pub fn checkmark() -> Text<'static> {
    text("✓").size(sizing::ICON_SM)
}

pub fn warning() -> Text<'static> {
    text("⚠").size(sizing::ICON_SM)
}

pub fn info() -> Text<'static> {
    text("ℹ").size(sizing::ICON_SM)
}

pub fn grid() -> Text<'static> {
    text("▦").size(sizing::ICON_SM)
}

pub fn rows() -> Text<'static> {
    text("☰").size(sizing::ICON_SM)
}

pub fn diamond() -> Text<'static> {
    text("◈").size(sizing::ICON_SM)
}

pub fn frame() -> Text<'static> {
    text("▣").size(sizing::ICON_SM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_construct_without_panicking() {
        let _ = cross();
        let _ = checkmark();
        let _ = warning();
        let _ = info();
        let _ = grid();
        let _ = rows();
        let _ = diamond();
        let _ = sized(frame(), sizing::ICON_LG);
    }
}
