//! Built-in themes.
//!
//! A [`Theme`] is the single source of every spacing constant the dialog
//! layout uses. Changing the theme is what makes the dialog's minimum size
//! change even when none of its children did.

use serde::{Deserialize, Serialize};

/// An RGBA color with components in the 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
}

/// Theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    HighContrast,
}

/// Style of the panel drawn behind the dialog's children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    /// Fill color.
    pub background: Color,
    /// Border color.
    pub border: Color,
    /// Border width on every side.
    pub border_width: f32,
}

/// Font measurements used to size text without a text shaper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Advance of a single character.
    pub char_width: f32,
    /// Height of a single line.
    pub line_height: f32,
}

impl FontMetrics {
    /// The size of `text` laid out without wrapping.
    ///
    /// Empty text still occupies one line of height.
    pub fn measure(&self, text: &str) -> (f32, f32) {
        let mut lines = 0usize;
        let mut widest = 0usize;
        for line in text.split('\n') {
            lines += 1;
            widest = widest.max(line.chars().count());
        }
        (widest as f32 * self.char_width, lines as f32 * self.line_height)
    }
}

/// A complete theme: colors plus every spacing constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme mode.
    pub mode: ThemeMode,
    /// Gap between the dialog edge and its children, and between the content
    /// area and the button row.
    pub margin: f32,
    /// Spacing between the children of the button row.
    pub separation: f32,
    /// Horizontal padding inside a button.
    pub button_padding_h: f32,
    /// Vertical padding inside a button.
    pub button_padding_v: f32,
    /// Text measurements.
    pub font: FontMetrics,
    /// Background panel style.
    pub panel: PanelStyle,
    /// Text color.
    pub text: Color,
}

impl Theme {
    /// Create a light theme.
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            panel: PanelStyle {
                background: Color::from_rgb8(245, 245, 245),
                border: Color::from_rgb8(160, 160, 160),
                border_width: 1.0,
            },
            text: Color::from_rgb8(40, 40, 40),
            ..Self::base()
        }
    }

    /// Create a dark theme.
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            panel: PanelStyle {
                background: Color::from_rgb8(33, 37, 43),
                border: Color::from_rgb8(70, 74, 82),
                border_width: 1.0,
            },
            text: Color::from_rgb8(220, 223, 228),
            ..Self::base()
        }
    }

    /// Create a high-contrast theme.
    pub fn high_contrast() -> Self {
        Self {
            mode: ThemeMode::HighContrast,
            margin: 10.0,
            panel: PanelStyle {
                background: Color::BLACK,
                border: Color::WHITE,
                border_width: 2.0,
            },
            text: Color::WHITE,
            ..Self::base()
        }
    }

    /// Create the built-in theme for a mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::HighContrast => Self::high_contrast(),
        }
    }

    /// Return a copy with a different dialog margin.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    fn base() -> Self {
        Self {
            mode: ThemeMode::Light,
            margin: 8.0,
            separation: 4.0,
            button_padding_h: 8.0,
            button_padding_v: 4.0,
            font: FontMetrics {
                char_width: 7.0,
                line_height: 16.0,
            },
            panel: PanelStyle {
                background: Color::WHITE,
                border: Color::BLACK,
                border_width: 1.0,
            },
            text: Color::BLACK,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
