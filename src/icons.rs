//! Condition icons: ASCII art layers plus an emoji fallback.
//!
//! Each icon is a stack of text layers composited back to front, so a
//! rain cloud and its drops can carry different colors. Layer art lives
//! in `icons/` and is compiled in with `include_str!`.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

/// Rows every icon layer is drawn on. The view falls back to
/// [`WeatherIcon::emoji`] when the target area is shorter.
pub const ICON_ROWS: u16 = 7;

mod icon_data {
    pub mod clear {
        pub const SUN: &str = include_str!("../icons/clear/sun.txt");
    }

    pub mod cloud {
        pub const BACK: &str = include_str!("../icons/cloud/back.txt");
        pub const FRONT: &str = include_str!("../icons/cloud/front.txt");
    }

    pub mod drizzle {
        pub const CLOUD: &str = include_str!("../icons/drizzle/cloud.txt");
        pub const DROPS: &str = include_str!("../icons/drizzle/drops.txt");
    }

    pub mod rain {
        pub const CLOUD: &str = include_str!("../icons/rain/cloud.txt");
        pub const DROPS: &str = include_str!("../icons/rain/drops.txt");
    }

    pub mod snow {
        pub const CLOUD: &str = include_str!("../icons/snow/cloud.txt");
        pub const FLAKES: &str = include_str!("../icons/snow/flakes.txt");
    }
}

const SUN_YELLOW: Color = Color::Rgb(0xe8, 0xb4, 0x2e);
const CLOUD_DARK: Color = Color::Rgb(0x78, 0x7d, 0x8c);
const CLOUD_LIGHT: Color = Color::Rgb(0xa8, 0xad, 0xbc);
const DRIZZLE_BLUE: Color = Color::Rgb(0x84, 0xb0, 0xd8);
const RAIN_BLUE: Color = Color::Rgb(0x56, 0x94, 0xd4);
const SNOW_BLUE: Color = Color::Rgb(0x9a, 0xba, 0xde);

/// One art layer: its text and the color it is painted in.
struct IconLayer {
    content: &'static str,
    color: Color,
}

static CLEAR_LAYERS: [IconLayer; 1] = [IconLayer {
    content: icon_data::clear::SUN,
    color: SUN_YELLOW,
}];

static CLOUD_LAYERS: [IconLayer; 2] = [
    IconLayer {
        content: icon_data::cloud::BACK,
        color: CLOUD_DARK,
    },
    IconLayer {
        content: icon_data::cloud::FRONT,
        color: CLOUD_LIGHT,
    },
];

static DRIZZLE_LAYERS: [IconLayer; 2] = [
    IconLayer {
        content: icon_data::drizzle::DROPS,
        color: DRIZZLE_BLUE,
    },
    IconLayer {
        content: icon_data::drizzle::CLOUD,
        color: CLOUD_LIGHT,
    },
];

static RAIN_LAYERS: [IconLayer; 2] = [
    IconLayer {
        content: icon_data::rain::DROPS,
        color: RAIN_BLUE,
    },
    IconLayer {
        content: icon_data::rain::CLOUD,
        color: CLOUD_DARK,
    },
];

static SNOW_LAYERS: [IconLayer; 2] = [
    IconLayer {
        content: icon_data::snow::FLAKES,
        color: SNOW_BLUE,
    },
    IconLayer {
        content: icon_data::snow::CLOUD,
        color: CLOUD_LIGHT,
    },
];

/// The visual buckets the provider's icon codes collapse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Clear,
    Cloud,
    Drizzle,
    Rain,
    Snow,
}

impl WeatherIcon {
    /// Resolve a provider icon code such as `10d`.
    ///
    /// The table covers the fourteen codes OpenWeatherMap documents for
    /// current conditions; anything unknown falls back to `Clear`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "01d" | "01n" => WeatherIcon::Clear,
            "02d" | "02n" | "03d" | "03n" => WeatherIcon::Cloud,
            "04d" | "04n" => WeatherIcon::Drizzle,
            "09d" | "09n" | "10d" | "10n" => WeatherIcon::Rain,
            "13d" | "13n" => WeatherIcon::Snow,
            _ => WeatherIcon::Clear,
        }
    }

    /// Single-cell stand-in for areas shorter than [`ICON_ROWS`].
    pub fn emoji(self) -> &'static str {
        match self {
            WeatherIcon::Clear => "\u{2600}\u{fe0f}",
            WeatherIcon::Cloud => "\u{2601}\u{fe0f}",
            WeatherIcon::Drizzle => "\u{1f326}\u{fe0f}",
            WeatherIcon::Rain => "\u{1f327}\u{fe0f}",
            WeatherIcon::Snow => "\u{2744}\u{fe0f}",
        }
    }

    fn layers(self) -> &'static [IconLayer] {
        match self {
            WeatherIcon::Clear => &CLEAR_LAYERS,
            WeatherIcon::Cloud => &CLOUD_LAYERS,
            WeatherIcon::Drizzle => &DRIZZLE_LAYERS,
            WeatherIcon::Rain => &RAIN_LAYERS,
            WeatherIcon::Snow => &SNOW_LAYERS,
        }
    }
}

/// Render the full-size art for an icon.
pub fn icon_art(icon: WeatherIcon) -> Text<'static> {
    composite_layers(icon.layers())
}

/// Stack layers back to front. Spaces are transparent, so later layers
/// only cover the cells they actually draw on.
fn composite_layers(layers: &[IconLayer]) -> Text<'static> {
    let grids: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|layer| {
            layer
                .content
                .lines()
                .map(|line| line.chars().collect())
                .collect()
        })
        .collect();

    let rows = grids.iter().map(Vec::len).max().unwrap_or(0);
    let cols = grids
        .iter()
        .flat_map(|grid| grid.iter())
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows);
    for y in 0..rows {
        let mut spans = Vec::with_capacity(cols);
        for x in 0..cols {
            let mut cell = (' ', Color::Reset);
            for (grid, layer) in grids.iter().zip(layers.iter()).rev() {
                let ch = grid.get(y).and_then(|row| row.get(x)).copied();
                if let Some(ch) = ch {
                    if ch != ' ' {
                        cell = (ch, layer.color);
                        break;
                    }
                }
            }
            spans.push(Span::styled(
                cell.0.to_string(),
                Style::default().fg(cell.1),
            ));
        }
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}
