//! The whole panel: layout, key routing and click routing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::search_bar::INPUT_ROWS;
use super::{
    Component, HelpBar, HelpBarProps, RecentRow, RecentRowProps, SearchBar, SearchBarProps,
    TopBar, TopBarProps, WeatherView, WeatherViewProps,
};
use crate::action::Action;
use crate::state::AppState;
use crate::theme::Palette;

pub struct PanelProps<'a> {
    pub state: &'a AppState,
}

#[derive(Default)]
pub struct Panel {
    top_bar: TopBar,
    search: SearchBar,
    recent: RecentRow,
    view: WeatherView,
    help: HelpBar,
}

fn search_props(state: &AppState, palette: Palette, is_focused: bool) -> SearchBarProps<'_> {
    SearchBarProps {
        input: &state.input,
        notice: state.notice.as_deref(),
        palette,
        is_focused,
    }
}

impl Panel {
    /// Resolve a left click against whatever was on screen last frame.
    pub fn handle_mouse(&self, mouse: &MouseEvent) -> Vec<Action> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Vec::new();
        }
        let position = Position::new(mouse.column, mouse.row);
        self.top_bar
            .hit_test(position)
            .or_else(|| self.search.hit_test(position))
            .or_else(|| self.recent.hit_test(position))
            .into_iter()
            .collect()
    }
}

impl Component for Panel {
    type Props<'a> = PanelProps<'a>;

    fn handle_key(&mut self, key: &KeyEvent, props: Self::Props<'_>) -> Vec<Action> {
        let state = props.state;
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => vec![Action::Quit],
                KeyCode::Char('t') => vec![Action::ThemeToggle],
                _ => Vec::new(),
            };
        }

        let palette = state.theme.palette();
        if state.recent_selected.is_some() {
            let row_props = RecentRowProps {
                recent: &state.recent,
                selected: state.recent_selected,
                palette,
            };
            let mut actions = self.recent.handle_key(key, row_props);
            if actions.is_empty() {
                // Keys the row does not own drop the cursor and land in
                // the input, so typing mid-browse just works.
                actions.push(Action::RecentDismiss);
                actions.extend(
                    self.search
                        .handle_key(key, search_props(state, palette, false)),
                );
            }
            actions
        } else {
            self.search
                .handle_key(key, search_props(state, palette, true))
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let palette = state.theme.palette();
        frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

        let notice_rows = u16::from(state.notice.is_some());
        let recent_rows = u16::from(!state.recent.is_empty());
        let [top_area, search_area, recent_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(INPUT_ROWS + notice_rows),
            Constraint::Length(recent_rows),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .margin(1)
        .areas(area);

        self.top_bar.render(
            frame,
            top_area,
            TopBarProps {
                theme: state.theme,
                palette,
            },
        );
        self.search.render(
            frame,
            search_area,
            search_props(state, palette, state.recent_selected.is_none()),
        );
        self.recent.render(
            frame,
            recent_area,
            RecentRowProps {
                recent: &state.recent,
                selected: state.recent_selected,
                palette,
            },
        );
        self.view
            .render(frame, body_area, WeatherViewProps { state, palette });
        self.help.render(frame, help_area, HelpBarProps { palette });
    }
}
