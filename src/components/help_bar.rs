//! One-line key hint bar.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use super::Component;
use crate::theme::Palette;

const HINTS: [(&str, &str); 4] = [
    ("enter", "search"),
    ("\u{2191}/\u{2193}", "recent"),
    ("ctrl+t", "theme"),
    ("esc", "quit"),
];

pub struct HelpBarProps {
    pub palette: Palette,
}

#[derive(Default)]
pub struct HelpBar;

impl Component for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let key_style = Style::default().fg(props.palette.accent);
        let label_style = Style::default().fg(props.palette.muted);

        let mut spans = Vec::with_capacity(HINTS.len() * 4);
        for (index, (key, label)) in HINTS.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  ", label_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(" ", label_style));
            spans.push(Span::styled(*label, label_style));
        }

        frame.render_widget(Line::from(spans).centered(), area);
    }
}
