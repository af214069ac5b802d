//! UI components for the portfolio viewer.

mod about;
mod app;
mod detail;
mod gallery;
mod hero;

pub use about::*;
pub use app::*;
pub use detail::*;
pub use gallery::*;
pub use hero::*;
