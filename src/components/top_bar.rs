//! Title row with the theme toggle on the right.

use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use super::Component;
use crate::action::Action;
use crate::theme::{Palette, Theme};

pub const TITLE: &str = "\u{1f324}\u{fe0f} Weather Dashboard";

pub struct TopBarProps {
    pub theme: Theme,
    pub palette: Palette,
}

/// Stateless apart from the toggle's click target, refreshed on every
/// render.
#[derive(Default)]
pub struct TopBar {
    toggle_area: Option<Rect>,
}

impl TopBar {
    pub fn hit_test(&self, position: Position) -> Option<Action> {
        let area = self.toggle_area?;
        area.contains(position).then_some(Action::ThemeToggle)
    }
}

impl Component for TopBar {
    type Props<'a> = TopBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.toggle_area = None;
        if area.height == 0 {
            return;
        }

        let title = Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(props.palette.fg)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, area);

        let face = Line::from(Span::styled(
            format!(" {} ", props.theme.toggle_label()),
            Style::default()
                .fg(props.palette.fg)
                .bg(props.palette.surface),
        ));
        let width = (face.width() as u16).min(area.width);
        let button = Rect {
            x: area.right().saturating_sub(width),
            y: area.y,
            width,
            height: 1,
        };
        frame.render_widget(face, button);
        self.toggle_area = Some(button);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_click_maps_to_theme_action() {
        let bar = TopBar {
            toggle_area: Some(Rect::new(60, 0, 15, 1)),
        };
        assert_eq!(
            bar.hit_test(Position::new(62, 0)),
            Some(Action::ThemeToggle)
        );
        assert_eq!(bar.hit_test(Position::new(2, 0)), None);
    }

    #[test]
    fn test_no_target_before_first_render() {
        let bar = TopBar::default();
        assert_eq!(bar.hit_test(Position::new(0, 0)), None);
    }
}
