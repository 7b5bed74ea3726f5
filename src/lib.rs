//! Terminal weather lookup panel.
//!
//! Type a city, get its current conditions: temperature, humidity, wind
//! and a condition icon, with a five-deep recent-search history and a
//! light/dark theme. The library holds the state machine, the provider
//! client and the widgets; the binary owns the terminal and the event
//! loop.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod icons;
pub mod input;
pub mod reducer;
pub mod state;
pub mod theme;
