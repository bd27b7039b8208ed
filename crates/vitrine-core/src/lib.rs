//! Core types shared across the vitrine crates.

use ratatui::style::Color;
use serde::Deserialize;

/// Latest pointer position, normalized to `[-1, 1]` on both axes.
///
/// `{0, 0}` is the viewport center and also the value before any pointer
/// event has arrived (including hosts with no pointer support at all).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    /// Normalize a terminal cell position against the viewport dimensions.
    ///
    /// The leftmost column maps to `-1.0`, the rightmost to `1.0`, same for
    /// rows. Out-of-viewport positions are clamped to the bounds.
    pub fn from_cell(column: u16, row: u16, width: u16, height: u16) -> Self {
        Self {
            x: normalize(column, width),
            y: normalize(row, height),
        }
    }
}

/// Map a 0-indexed cell coordinate in `0..extent` to `[-1, 1]`.
fn normalize(position: u16, extent: u16) -> f32 {
    let span = extent.saturating_sub(1).max(1) as f32;
    (position as f32 / span * 2.0 - 1.0).clamp(-1.0, 1.0)
}

/// Accent color for the page chrome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Cyan,
    Magenta,
    Amber,
    Green,
}

impl Accent {
    /// The terminal color for this accent.
    pub fn color(self) -> Color {
        match self {
            Accent::Cyan => Color::Rgb(64, 200, 224),
            Accent::Magenta => Color::Rgb(220, 80, 200),
            Accent::Amber => Color::Rgb(240, 180, 60),
            Accent::Green => Color::Rgb(90, 210, 120),
        }
    }

    /// Cycle to the next accent.
    pub fn next(self) -> Self {
        match self {
            Accent::Cyan => Accent::Magenta,
            Accent::Magenta => Accent::Amber,
            Accent::Amber => Accent::Green,
            Accent::Green => Accent::Cyan,
        }
    }
}
