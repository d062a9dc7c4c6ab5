//! Carousel TUI: terminal front end for the carousel screen.
//!
//! Provides:
//! - A title label, a row of 7 page dots with arrows, and a horizontal list
//! - Keyboard and mouse navigation (taps on rows, dots and arrows)
//! - A background fetch bound to the screen's mount
//! - File logging and TOML configuration

pub mod app;
pub mod cli;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;
pub mod worker;

pub use app::AppState;
pub use theme::Theme;
