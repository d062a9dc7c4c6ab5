//! Carousel Core: toolkit-independent model for the carousel screen.
//!
//! This crate holds all state and arithmetic behind the screen:
//! - Items and the JSON payload they are decoded from
//! - Single-item press selection
//! - Scroll tracking and progress derivation
//! - The 7-dot page indicator and its navigation commands
//! - The scrollable list surface that executes those commands
//! - HTTP item loading and TOML configuration

pub mod config;
pub mod dots;
pub mod item;
pub mod loader;
pub mod screen;
pub mod scroll;
pub mod selection;
pub mod surface;

pub use config::{CarouselConfig, ConfigError};
pub use dots::{ArrowDirection, DotIndicator, DOT_COUNT};
pub use item::{render_row, Fill, Item, ItemId, RowView};
pub use loader::{HttpItemSource, ItemSource, LoadError, StaticItemSource};
pub use screen::{CarouselScreen, FetchTicket};
pub use scroll::{ScrollCommand, ScrollEvent, ScrollOrigin, ScrollTracker};
pub use selection::Selection;
pub use surface::{ListSurface, ScrollDirection, VisibleItem};
