//! Light and dark palettes.

use ratatui::style::Color;

/// Which palette the panel paints with. Starts light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle affordance. Names the mode you would switch
    /// to, not the one you are in.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "\u{1f319} Dark Mode",
            Theme::Dark => "\u{2600}\u{fe0f} Light Mode",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}

/// Named colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    /// Input boxes and button faces.
    pub surface: Color,
    pub fg: Color,
    /// Secondary text: labels, placeholders, hints.
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(0xee, 0xf3, 0xf8),
    surface: Color::Rgb(0xff, 0xff, 0xff),
    fg: Color::Rgb(0x1b, 0x1f, 0x24),
    muted: Color::Rgb(0x6b, 0x72, 0x7b),
    accent: Color::Rgb(0x1d, 0x63, 0xc9),
    error: Color::Rgb(0xc0, 0x2d, 0x2d),
    selection_bg: Color::Rgb(0x1d, 0x63, 0xc9),
    selection_fg: Color::Rgb(0xff, 0xff, 0xff),
};

pub const DARK: Palette = Palette {
    bg: Color::Rgb(0x12, 0x14, 0x18),
    surface: Color::Rgb(0x1f, 0x23, 0x2a),
    fg: Color::Rgb(0xe6, 0xe9, 0xee),
    muted: Color::Rgb(0x8a, 0x92, 0x9e),
    accent: Color::Rgb(0x4f, 0xa3, 0xff),
    error: Color::Rgb(0xf0, 0x6a, 0x6a),
    selection_bg: Color::Rgb(0x4f, 0xa3, 0xff),
    selection_fg: Color::Rgb(0x12, 0x14, 0x18),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_toggle_label_names_the_target_mode() {
        assert!(Theme::Light.toggle_label().contains("Dark Mode"));
        assert!(Theme::Dark.toggle_label().contains("Light Mode"));
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette().bg, Theme::Dark.palette().bg);
        assert_ne!(Theme::Light.palette().fg, Theme::Dark.palette().fg);
    }
}
