//! The results area: loader, error, current conditions, or nothing.

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::Component;
use crate::icons::{icon_art, ICON_ROWS};
use crate::state::{AppState, WeatherSnapshot};
use crate::theme::Palette;

pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";
pub const HUMIDITY_LABEL: &str = "Humidity";
pub const WIND_LABEL: &str = "Wind Speed";

const HUMIDITY_GLYPH: &str = "\u{1f4a7}";
const WIND_GLYPH: &str = "\u{1f32c}\u{fe0f}";

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// What the area shows. Loading wins over an error, an error over a
/// snapshot, and a fresh panel shows nothing at all.
#[derive(Debug, PartialEq)]
pub enum ViewMode<'a> {
    Loading,
    Error(&'a str),
    Ready(&'a WeatherSnapshot),
    Idle,
}

impl<'a> ViewMode<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        if state.is_loading {
            ViewMode::Loading
        } else if let Some(message) = state.error.as_deref() {
            ViewMode::Error(message)
        } else if let Some(snapshot) = state.snapshot.as_ref() {
            ViewMode::Ready(snapshot)
        } else {
            ViewMode::Idle
        }
    }
}

pub struct WeatherViewProps<'a> {
    pub state: &'a AppState,
    pub palette: Palette,
}

#[derive(Default)]
pub struct WeatherView;

impl WeatherView {
    fn render_loading(frame: &mut Frame, area: Rect, palette: Palette, tick: usize) {
        let [line] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        let spinner = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
        frame.render_widget(
            Paragraph::new(format!("{spinner} {LOADING_TEXT}"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(palette.accent)),
            line,
        );
    }

    fn render_error(frame: &mut Frame, area: Rect, palette: Palette, message: &str) {
        let [icon, _, text] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .flex(Flex::Center)
        .areas(area);
        frame.render_widget(
            Paragraph::new(ERROR_ICON).alignment(Alignment::Center),
            icon,
        );
        frame.render_widget(
            Paragraph::new(message.to_string())
                .alignment(Alignment::Center)
                .style(Style::default().fg(palette.error))
                .wrap(Wrap { trim: true }),
            text,
        );
    }

    fn render_ready(frame: &mut Frame, area: Rect, palette: Palette, snapshot: &WeatherSnapshot) {
        // Full art needs its rows plus the text block; anything shorter
        // gets the emoji stand-in.
        let use_art = area.height >= ICON_ROWS + 6;
        let icon_rows = if use_art { ICON_ROWS } else { 1 };

        let [icon_area, _, temp_area, location_area, _, stats_area] = Layout::vertical([
            Constraint::Length(icon_rows),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .flex(Flex::Center)
        .areas(area);

        if use_art {
            frame.render_widget(
                Paragraph::new(icon_art(snapshot.icon)).alignment(Alignment::Center),
                icon_area,
            );
        } else {
            frame.render_widget(
                Paragraph::new(snapshot.icon.emoji()).alignment(Alignment::Center),
                icon_area,
            );
        }

        frame.render_widget(
            Paragraph::new(format!("{}°C", snapshot.temperature_c))
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(palette.fg)
                        .add_modifier(Modifier::BOLD),
                ),
            temp_area,
        );
        frame.render_widget(
            Paragraph::new(snapshot.location.clone())
                .alignment(Alignment::Center)
                .style(Style::default().fg(palette.muted)),
            location_area,
        );

        let [humidity_area, wind_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(stats_area);
        Self::render_stat(
            frame,
            humidity_area,
            palette,
            format!("{} {} %", HUMIDITY_GLYPH, snapshot.humidity_pct),
            HUMIDITY_LABEL,
        );
        Self::render_stat(
            frame,
            wind_area,
            palette,
            format!("{} {} km/h", WIND_GLYPH, snapshot.wind_speed_kph),
            WIND_LABEL,
        );
    }

    fn render_stat(frame: &mut Frame, area: Rect, palette: Palette, value: String, label: &str) {
        let lines = vec![
            Line::from(Span::styled(value, Style::default().fg(palette.fg))),
            Line::from(Span::styled(
                label.to_string(),
                Style::default().fg(palette.muted),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
    }
}

impl Component for WeatherView {
    type Props<'a> = WeatherViewProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.height == 0 {
            return;
        }
        match ViewMode::from_state(props.state) {
            ViewMode::Loading => {
                Self::render_loading(frame, area, props.palette, props.state.spinner_frame)
            }
            ViewMode::Error(message) => Self::render_error(frame, area, props.palette, message),
            ViewMode::Ready(snapshot) => Self::render_ready(frame, area, props.palette, snapshot),
            ViewMode::Idle => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::WeatherIcon;
    use pretty_assertions::assert_eq;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_c: 15,
            humidity_pct: 60.0,
            wind_speed_kph: 3.0,
            location: "London".into(),
            icon: WeatherIcon::Rain,
        }
    }

    #[test]
    fn test_fresh_panel_is_idle() {
        let state = AppState::default();
        assert_eq!(ViewMode::from_state(&state), ViewMode::Idle);
    }

    #[test]
    fn test_loading_wins_over_everything() {
        let mut state = AppState::default();
        state.snapshot = Some(snapshot());
        state.error = Some("city not found".into());
        state.is_loading = true;
        assert_eq!(ViewMode::from_state(&state), ViewMode::Loading);
    }

    #[test]
    fn test_error_wins_over_a_stale_snapshot() {
        let mut state = AppState::default();
        state.snapshot = Some(snapshot());
        state.error = Some("city not found".into());
        assert_eq!(
            ViewMode::from_state(&state),
            ViewMode::Error("city not found")
        );
    }

    #[test]
    fn test_snapshot_renders_ready() {
        let mut state = AppState::default();
        state.snapshot = Some(snapshot());
        let expected = snapshot();
        assert_eq!(ViewMode::from_state(&state), ViewMode::Ready(&expected));
    }
}
