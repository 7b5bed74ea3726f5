//! Recent searches, rendered as a row of clickable chips.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use super::Component;
use crate::action::Action;
use crate::state::RecentSearches;
use crate::theme::Palette;

pub const RECENT_LABEL: &str = "Recent: ";

pub struct RecentRowProps<'a> {
    pub recent: &'a RecentSearches,
    pub selected: Option<usize>,
    pub palette: Palette,
}

/// Chip click targets are rebuilt on every render, so a click always
/// resolves against what is actually on screen.
#[derive(Default)]
pub struct RecentRow {
    chip_areas: Vec<(Rect, usize)>,
}

impl RecentRow {
    pub fn hit_test(&self, position: Position) -> Option<Action> {
        self.chip_areas
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|&(_, index)| Action::SearchRecent(index))
    }
}

impl Component for RecentRow {
    type Props<'a> = RecentRowProps<'a>;

    fn handle_key(&mut self, key: &KeyEvent, props: Self::Props<'_>) -> Vec<Action> {
        match key.code {
            KeyCode::Down => vec![Action::RecentNext],
            KeyCode::Up => vec![Action::RecentPrev],
            KeyCode::Esc => vec![Action::RecentDismiss],
            KeyCode::Enter => props
                .selected
                .filter(|&index| index < props.recent.len())
                .map(Action::SearchRecent)
                .into_iter()
                .collect(),
            // Anything else belongs to the input; the panel re-routes it.
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.chip_areas.clear();
        if area.height == 0 || props.recent.is_empty() {
            return;
        }

        let palette = props.palette;
        let label = Span::styled(RECENT_LABEL, Style::default().fg(palette.muted));
        let mut x = area.x + label.width() as u16;
        frame.render_widget(Line::from(label), area);

        for (index, city) in props.recent.iter().enumerate() {
            let face = Span::styled(
                format!(" {city} "),
                if props.selected == Some(index) {
                    Style::default()
                        .fg(palette.selection_fg)
                        .bg(palette.selection_bg)
                } else {
                    Style::default().fg(palette.fg).bg(palette.surface)
                },
            );
            let width = face.width() as u16;
            if x + width > area.right() {
                break;
            }
            let chip = Rect {
                x,
                y: area.y,
                width,
                height: 1,
            };
            frame.render_widget(Line::from(face), chip);
            self.chip_areas.push((chip, index));
            x += width + 1;
        }
    }
}
