//! Application state: one struct the reducer mutates and every widget
//! reads.

use crate::icons::WeatherIcon;
use crate::input::SearchInput;
use crate::theme::Theme;

/// Spinner cadence while a request is in flight.
pub const SPINNER_TICK_MS: u64 = 100;

/// How many recent searches the panel remembers.
pub const RECENT_CAP: usize = 5;

/// Current conditions, already shaped for display.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Degrees Celsius, floored to an integer when the provider value
    /// arrives.
    pub temperature_c: i32,
    pub humidity_pct: f64,
    pub wind_speed_kph: f64,
    /// Canonical city name as the provider resolved it, not as typed.
    pub location: String,
    pub icon: WeatherIcon,
}

/// Most-recent-first search history, capped at [`RECENT_CAP`].
///
/// Re-searching a remembered city moves it to the front instead of
/// duplicating it; the comparison ignores case but the stored name
/// keeps the casing of the latest result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecentSearches(Vec<String>);

impl RecentSearches {
    pub fn push(&mut self, city: impl Into<String>) {
        let city = city.into();
        let lowered = city.to_lowercase();
        self.0.retain(|seen| seen.to_lowercase() != lowered);
        self.0.insert(0, city);
        self.0.truncate(RECENT_CAP);
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything the panel needs to render one frame.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Last successful fetch. Replaced wholesale by the next one and
    /// dropped on error.
    pub snapshot: Option<WeatherSnapshot>,
    /// True from submit until the first completion arrives.
    pub is_loading: bool,
    /// Inline message from the last failed fetch. Never set while
    /// `snapshot` is.
    pub error: Option<String>,
    /// Transient prompt shown when a blank query is submitted. Cleared
    /// by the next edit or submit.
    pub notice: Option<String>,
    pub recent: RecentSearches,
    pub theme: Theme,
    /// The city text field.
    pub input: SearchInput,
    /// Keyboard cursor inside the recent row, if the user moved into it.
    pub recent_selected: Option<usize>,
    /// Advances on every tick while loading; drives the spinner.
    pub spinner_frame: usize,
}
