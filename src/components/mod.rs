//! Render and input units.
//!
//! Components borrow what they need per call through an associated
//! `Props` type, so the state stays in one place and widgets stay
//! stateless apart from render bookkeeping such as click targets.

pub mod help_bar;
pub mod panel;
pub mod recent_row;
pub mod search_bar;
pub mod top_bar;
pub mod weather_view;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::action::Action;

pub trait Component {
    type Props<'a>;

    /// Translate a key press into zero or more actions. Components
    /// never mutate state directly.
    fn handle_key(&mut self, _key: &KeyEvent, _props: Self::Props<'_>) -> Vec<Action> {
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}

pub use help_bar::{HelpBar, HelpBarProps};
pub use panel::{Panel, PanelProps};
pub use recent_row::{RecentRow, RecentRowProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use top_bar::{TopBar, TopBarProps};
pub use weather_view::{WeatherView, WeatherViewProps};
