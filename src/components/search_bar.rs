//! City input box with the search button and the blank-query notice.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use ratatui::Frame;

use super::Component;
use crate::action::Action;
use crate::input::{InputEdit, SearchInput};
use crate::theme::Palette;

pub const PLACEHOLDER: &str = "Enter city name";
const SEARCH_BUTTON: &str = " \u{1f50d} ";

/// Rows the bordered input box occupies; the notice adds one below.
pub const INPUT_ROWS: u16 = 3;

pub struct SearchBarProps<'a> {
    pub input: &'a SearchInput,
    pub notice: Option<&'a str>,
    pub palette: Palette,
    /// False while the recent row holds the keyboard cursor.
    pub is_focused: bool,
}

#[derive(Default)]
pub struct SearchBar {
    button_area: Option<Rect>,
}

impl SearchBar {
    pub fn hit_test(&self, position: Position) -> Option<Action> {
        let area = self.button_area?;
        area.contains(position).then_some(Action::Submit)
    }

    fn text_line<'a>(&self, props: &SearchBarProps<'a>, width: u16) -> Line<'a> {
        let palette = props.palette;
        if props.input.is_empty() {
            let mut spans = Vec::new();
            if props.is_focused {
                spans.push(Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)));
            }
            spans.push(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(palette.muted)
                    .add_modifier(Modifier::ITALIC),
            ));
            return Line::from(spans);
        }

        if !props.is_focused {
            return Line::from(Span::styled(
                props.input.value().to_string(),
                Style::default().fg(palette.fg),
            ));
        }

        let chars: Vec<char> = props.input.value().chars().collect();
        let cursor = props.input.cursor();

        // Keep the cursor on screen by dropping characters off the left.
        let visible = width.max(1) as usize;
        let skip = (cursor + 1).saturating_sub(visible);

        let before: String = chars[skip..cursor].iter().collect();
        let at: String = chars
            .get(cursor)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = chars[(cursor + 1).min(chars.len())..].iter().collect();

        Line::from(vec![
            Span::styled(before, Style::default().fg(palette.fg)),
            Span::styled(
                at,
                Style::default().fg(palette.fg).add_modifier(Modifier::REVERSED),
            ),
            Span::styled(after, Style::default().fg(palette.fg)),
        ])
    }
}

impl Component for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_key(&mut self, key: &KeyEvent, props: Self::Props<'_>) -> Vec<Action> {
        match key.code {
            KeyCode::Enter => vec![Action::Submit],
            KeyCode::Down => vec![Action::RecentNext],
            KeyCode::Char(c) => vec![Action::Input(InputEdit::Char(c))],
            KeyCode::Backspace => vec![Action::Input(InputEdit::Backspace)],
            KeyCode::Delete => vec![Action::Input(InputEdit::Delete)],
            KeyCode::Left => vec![Action::Input(InputEdit::Left)],
            KeyCode::Right => vec![Action::Input(InputEdit::Right)],
            KeyCode::Home => vec![Action::Input(InputEdit::Home)],
            KeyCode::End => vec![Action::Input(InputEdit::End)],
            KeyCode::Esc => {
                if props.input.is_empty() {
                    vec![Action::Quit]
                } else {
                    vec![Action::Input(InputEdit::Clear)]
                }
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.button_area = None;
        if area.height < INPUT_ROWS {
            return;
        }

        let palette = props.palette;
        let box_area = Rect {
            height: INPUT_ROWS,
            ..area
        };
        let border = if props.is_focused {
            palette.accent
        } else {
            palette.muted
        };
        let block = Block::bordered()
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(palette.surface));
        let inner = block.inner(box_area);
        frame.render_widget(block, box_area);

        let button_width = 4.min(inner.width);
        let button = Rect {
            x: inner.right().saturating_sub(button_width),
            y: inner.y,
            width: button_width,
            height: 1,
        };
        let text_area = Rect {
            width: inner.width.saturating_sub(button_width + 1),
            ..inner
        };

        frame.render_widget(self.text_line(&props, text_area.width), text_area);
        frame.render_widget(
            Line::from(Span::styled(
                SEARCH_BUTTON,
                Style::default().fg(palette.accent),
            )),
            button,
        );
        self.button_area = Some(button);

        if let Some(notice) = props.notice {
            let notice_area = Rect {
                y: box_area.bottom(),
                height: area.height.saturating_sub(INPUT_ROWS).min(1),
                ..area
            };
            frame.render_widget(
                Line::from(Span::styled(
                    notice.to_string(),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::ITALIC),
                )),
                notice_area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn props(input: &SearchInput) -> SearchBarProps<'_> {
        SearchBarProps {
            input,
            notice: None,
            palette: Theme::Light.palette(),
            is_focused: true,
        }
    }

    #[test]
    fn test_enter_submits() {
        let input = SearchInput::default();
        let mut bar = SearchBar::default();
        assert_eq!(
            bar.handle_key(&key(KeyCode::Enter), props(&input)),
            vec![Action::Submit]
        );
    }

    #[test]
    fn test_typing_becomes_input_edits() {
        let input = SearchInput::default();
        let mut bar = SearchBar::default();
        assert_eq!(
            bar.handle_key(&key(KeyCode::Char('L')), props(&input)),
            vec![Action::Input(InputEdit::Char('L'))]
        );
        assert_eq!(
            bar.handle_key(&key(KeyCode::Backspace), props(&input)),
            vec![Action::Input(InputEdit::Backspace)]
        );
    }

    #[test]
    fn test_down_moves_into_the_recent_row() {
        let input = SearchInput::default();
        let mut bar = SearchBar::default();
        assert_eq!(
            bar.handle_key(&key(KeyCode::Down), props(&input)),
            vec![Action::RecentNext]
        );
    }

    #[test]
    fn test_esc_clears_text_before_quitting() {
        let mut bar = SearchBar::default();

        let mut input = SearchInput::default();
        input.apply(InputEdit::Char('x'));
        assert_eq!(
            bar.handle_key(&key(KeyCode::Esc), props(&input)),
            vec![Action::Input(InputEdit::Clear)]
        );

        let empty = SearchInput::default();
        assert_eq!(
            bar.handle_key(&key(KeyCode::Esc), props(&empty)),
            vec![Action::Quit]
        );
    }

    #[test]
    fn test_click_on_the_button_submits() {
        let bar = SearchBar {
            button_area: Some(Rect::new(70, 2, 4, 1)),
        };
        assert_eq!(bar.hit_test(Position::new(71, 2)), Some(Action::Submit));
        assert_eq!(bar.hit_test(Position::new(5, 2)), None);
    }
}
