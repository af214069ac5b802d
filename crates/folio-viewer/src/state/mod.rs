//! UI state for the portfolio viewer.

mod ui_state;

pub use ui_state::*;
