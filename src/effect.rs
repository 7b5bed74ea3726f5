//! Side effects the reducer asks the runtime to perform.

/// Work that must happen outside the reducer.
///
/// The event loop owns the tokio runtime and turns each effect into a
/// spawned task; the task reports back by sending a completion action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch current conditions for the given query, exactly as typed.
    FetchWeather { city: String },
}
