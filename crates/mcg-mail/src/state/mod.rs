//! Application state
//!
//! Owns the top-level UI state and exposes the intents views call.

mod app_state;

pub use app_state::AppState;
