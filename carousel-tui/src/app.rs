//! Application state: single-owner, main-thread only.
//!
//! The screen model lives here together with the layout of the last frame.
//! The fetch thread communicates via a channel.

use std::sync::mpsc::Receiver;

use ratatui::layout::Rect;
use tracing::info;

use carousel_core::{CarouselConfig, CarouselScreen, FetchTicket};

use crate::theme::Theme;
use crate::ui::layout::ScreenLayout;
use crate::worker::FetchOutcome;

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

pub struct AppState {
    pub screen: CarouselScreen,
    pub config: CarouselConfig,
    pub theme: Theme,
    pub running: bool,
    pub overlay: Overlay,
    /// Geometry of the last frame, for mouse hit-testing.
    pub layout: Option<ScreenLayout>,
    pub fetch_rx: Receiver<FetchOutcome>,
}

impl AppState {
    pub fn new(config: CarouselConfig, fetch_rx: Receiver<FetchOutcome>) -> Self {
        Self {
            screen: CarouselScreen::new(),
            config,
            theme: Theme::default(),
            running: true,
            overlay: Overlay::None,
            layout: None,
            fetch_rx,
        }
    }

    /// Mount the screen; the caller starts the one fetch for the ticket.
    pub fn mount(&mut self) -> FetchTicket {
        info!(event = "tui.app.mounted", endpoint = %self.config.endpoint);
        self.screen.mount()
    }

    /// Stop the loop and unmount. Fetches still in flight are ignored.
    pub fn quit(&mut self) {
        self.running = false;
        self.screen.unmount();
        info!(event = "tui.app.unmounted");
    }

    /// Recompute the layout for `area` and lay out the list surface.
    pub fn resize(&mut self, area: Rect) {
        let layout = ScreenLayout::compute(area);
        if layout.list.width > 0 && layout.list.height > 0 {
            self.screen.layout_surface(
                f64::from(layout.list.width),
                f64::from(self.config.layout.stride()),
                self.config.layout.paging,
            );
        } else {
            self.screen.detach_surface();
        }
        self.layout = Some(layout);
    }

    /// Apply any fetch outcomes that arrived (non-blocking).
    pub fn drain_fetches(&mut self) {
        while let Ok(outcome) = self.fetch_rx.try_recv() {
            self.screen.apply_fetch(outcome.ticket, outcome.result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::{Item, LoadError};
    use std::sync::mpsc;

    fn app() -> (AppState, mpsc::Sender<FetchOutcome>) {
        let (tx, rx) = mpsc::channel();
        (AppState::new(CarouselConfig::default(), rx), tx)
    }

    #[test]
    fn drained_outcome_populates_items() {
        let (mut app, tx) = app();
        let ticket = app.mount();
        tx.send(FetchOutcome {
            ticket,
            result: Ok(vec![Item::new(1, "A"), Item::new(2, "B")]),
        })
        .unwrap();
        app.drain_fetches();
        assert_eq!(app.screen.items().len(), 2);
    }

    #[test]
    fn failed_outcome_keeps_empty_list() {
        let (mut app, tx) = app();
        let ticket = app.mount();
        tx.send(FetchOutcome {
            ticket,
            result: Err(LoadError::Client("tls".into())),
        })
        .unwrap();
        app.drain_fetches();
        assert!(app.screen.items().is_empty());
        assert!(app.running);
    }

    #[test]
    fn outcome_after_quit_is_ignored() {
        let (mut app, tx) = app();
        let ticket = app.mount();
        app.quit();
        tx.send(FetchOutcome {
            ticket,
            result: Ok(vec![Item::new(1, "A")]),
        })
        .unwrap();
        app.drain_fetches();
        assert!(app.screen.items().is_empty());
        assert!(!app.running);
    }

    #[test]
    fn resize_lays_out_surface() {
        let (mut app, _tx) = app();
        app.resize(Rect::new(0, 0, 80, 24));
        let surface = app.screen.surface().unwrap();
        assert_eq!(surface.viewport(), 78.0);
        assert_eq!(surface.stride(), 24.0);
    }

    #[test]
    fn tiny_terminal_detaches_surface() {
        let (mut app, _tx) = app();
        app.resize(Rect::new(0, 0, 80, 24));
        app.resize(Rect::new(0, 0, 2, 24));
        assert!(app.screen.surface().is_none());
    }
}
