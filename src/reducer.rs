//! The reducer: a pure function from (state, action) to a
//! [`DispatchResult`].
//!
//! All state transitions live here. The event loop applies the result:
//! a changed state schedules a redraw, and every returned effect is
//! spawned exactly once. The reducer itself never touches the network
//! or the terminal, which is what keeps the tests plain function calls.

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// Prompt shown when a blank query is submitted.
pub const EMPTY_INPUT_NOTICE: &str = "Please enter a city name";

/// Outcome of one dispatch.
#[derive(Debug, Default, PartialEq)]
pub struct DispatchResult {
    /// Whether the state changed and a render is due.
    pub changed: bool,
    /// Side effects the runtime must start.
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: Vec::new(),
        }
    }

    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }
}

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        Action::Input(edit) => {
            state.notice = None;
            state.recent_selected = None;
            state.input.apply(edit);
            DispatchResult::changed()
        }

        Action::Submit => {
            let city = state.input.value().to_string();
            submit(state, city)
        }

        Action::SearchRecent(index) => {
            let Some(city) = state.recent.get(index).map(str::to_string) else {
                return DispatchResult::unchanged();
            };
            submit(state, city)
        }

        Action::RecentNext => match state.recent_selected {
            None if !state.recent.is_empty() => {
                state.recent_selected = Some(0);
                DispatchResult::changed()
            }
            Some(index) if index + 1 < state.recent.len() => {
                state.recent_selected = Some(index + 1);
                DispatchResult::changed()
            }
            _ => DispatchResult::unchanged(),
        },

        Action::RecentPrev => match state.recent_selected {
            Some(0) => {
                state.recent_selected = None;
                DispatchResult::changed()
            }
            Some(index) => {
                state.recent_selected = Some(index - 1);
                DispatchResult::changed()
            }
            None => DispatchResult::unchanged(),
        },

        Action::RecentDismiss => {
            if state.recent_selected.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::ThemeToggle => {
            state.theme = state.theme.toggle();
            DispatchResult::changed()
        }

        Action::Tick => {
            if state.is_loading {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::WeatherDidLoad(snapshot) => {
            state.is_loading = false;
            state.error = None;
            state.recent.push(snapshot.location.clone());
            state.snapshot = Some(snapshot);
            DispatchResult::changed()
        }

        Action::WeatherDidError(message) => {
            state.is_loading = false;
            state.snapshot = None;
            state.error = Some(message);
            DispatchResult::changed()
        }

        // The event loop exits before this reaches the reducer; kept
        // total so dispatch never panics.
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Shared submit path for the input field and the recent row.
///
/// The query goes out exactly as typed; only the blank check trims.
fn submit(state: &mut AppState, city: String) -> DispatchResult {
    state.notice = None;
    state.recent_selected = None;
    if city.trim().is_empty() {
        state.notice = Some(EMPTY_INPUT_NOTICE.to_string());
        return DispatchResult::changed();
    }
    state.is_loading = true;
    state.error = None;
    state.spinner_frame = 0;
    DispatchResult::changed_with(Effect::FetchWeather { city })
}
