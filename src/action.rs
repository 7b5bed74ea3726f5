//! Everything that can happen to the panel, user intents and async
//! results alike.

use crate::input::InputEdit;
use crate::state::WeatherSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ----- search -----
    /// Edit the city field.
    Input(InputEdit),
    /// Submit whatever the city field holds, untrimmed.
    Submit,
    /// Re-run the remembered search at the given index.
    SearchRecent(usize),

    // ----- recent row -----
    /// Move the keyboard cursor one entry further into the recent row,
    /// entering it at the front if it was not active.
    RecentNext,
    /// Move the cursor back; leaving the first entry returns focus to
    /// the input.
    RecentPrev,
    /// Drop the recent-row cursor.
    RecentDismiss,

    // ----- ui -----
    /// Flip between the light and dark palette.
    ThemeToggle,
    /// Spinner heartbeat; a no-op unless a request is in flight.
    Tick,

    // ----- fetch results -----
    /// A fetch resolved with current conditions.
    WeatherDidLoad(WeatherSnapshot),
    /// A fetch failed. Carries the display-ready message, already
    /// reduced to the provider's wording or a generic fallback.
    WeatherDidError(String),

    // ----- global -----
    Quit,
}
