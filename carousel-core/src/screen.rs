//! The carousel screen: single owner of all screen state.
//!
//! Holds the item list, the press selection, the scroll tracker, the dot
//! indicator, and (once laid out) the list surface. Every input the host
//! delivers goes through one of the methods here, on one thread.
//!
//! The fetch is bound to the mount: `mount()` hands out a [`FetchTicket`] and
//! `apply_fetch` drops results carrying a stale ticket or arriving after
//! `unmount()`.

use tracing::{debug, error, info};

use crate::dots::{ArrowDirection, DotIndicator};
use crate::item::{render_row, Item, ItemId, RowView};
use crate::loader::LoadError;
use crate::scroll::{ScrollCommand, ScrollEvent, ScrollTracker};
use crate::selection::Selection;
use crate::surface::{ListSurface, ScrollDirection};

/// Proof that a fetch was started by a particular mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct CarouselScreen {
    items: Vec<Item>,
    selection: Selection,
    tracker: ScrollTracker,
    dots: DotIndicator,
    surface: Option<ListSurface>,
    generation: u64,
    mounted: bool,
}

impl CarouselScreen {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Activate the screen. The caller performs exactly one fetch with the
    /// returned ticket.
    pub fn mount(&mut self) -> FetchTicket {
        self.generation += 1;
        self.mounted = true;
        debug!(event = "core.screen.mounted", generation = self.generation);
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Deactivate the screen. Outstanding fetches become stale.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
        debug!(event = "core.screen.unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Apply a fetch outcome. Returns false when the ticket is stale.
    ///
    /// Success replaces the item list; failure is logged and leaves the list
    /// as it was.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Item>, LoadError>,
    ) -> bool {
        if !self.mounted || ticket.generation != self.generation {
            debug!(
                event = "core.screen.fetch_ignored",
                ticket = ticket.generation,
                current = self.generation,
                mounted = self.mounted
            );
            return false;
        }
        match result {
            Ok(items) => {
                info!(event = "core.screen.items_loaded", count = items.len());
                self.set_items(items);
            }
            Err(e) => {
                error!(event = "core.screen.fetch_failed", error = %e);
            }
        }
        true
    }

    fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        let count = self.items.len();
        let moved = self.surface.as_mut().map(|surface| {
            let before = surface.offset();
            let width = surface.set_item_count(count);
            (width, before != surface.offset(), surface.offset())
        });
        if let Some((width, offset_changed, offset)) = moved {
            self.tracker.on_content_size_change(width);
            if offset_changed {
                self.tracker.on_scroll(offset);
            }
        }
    }

    // ── Layout ───────────────────────────────────────────────────────

    /// Lay out the list surface. The first call mounts the surface; later
    /// calls with the same geometry only resize the viewport.
    pub fn layout_surface(&mut self, viewport: f64, stride: f64, paging: bool) {
        let reuse = matches!(
            &self.surface,
            Some(surface) if surface.stride() == stride.max(1.0) && surface.paging() == paging
        );
        if reuse {
            let event = self.surface.as_mut().and_then(|s| s.set_viewport(viewport));
            if let Some(event) = event {
                self.on_scroll(event);
            }
            return;
        }

        let mut surface = ListSurface::new(viewport, stride, paging);
        let width = surface.set_item_count(self.items.len());
        if let Some(previous) = &self.surface {
            surface.apply(ScrollCommand::ToOffset(previous.offset()));
        }
        let offset = surface.offset();
        self.surface = Some(surface);
        self.tracker.on_content_size_change(width);
        self.tracker.on_scroll(offset);
    }

    /// Drop the surface, e.g. when the terminal is too small to draw it.
    pub fn detach_surface(&mut self) {
        self.surface = None;
    }

    pub fn surface(&self) -> Option<&ListSurface> {
        self.surface.as_ref()
    }

    // ── Press ────────────────────────────────────────────────────────

    pub fn press_item(&mut self, id: &ItemId) {
        self.selection.toggle(id);
        debug!(
            event = "core.screen.item_pressed",
            id = %id,
            selected = self.selection.is_pressed(id)
        );
    }

    /// Press the item under the left edge of the viewport.
    pub fn press_item_at_start(&mut self) -> Option<ItemId> {
        let index = self.surface.as_ref()?.item_at_start()?;
        self.press_index(index)
    }

    /// Press the item under viewport column `column`.
    pub fn press_item_at_column(&mut self, column: f64) -> Option<ItemId> {
        let index = self.surface.as_ref()?.item_at_column(column)?;
        self.press_index(index)
    }

    fn press_index(&mut self, index: usize) -> Option<ItemId> {
        let id = self.items.get(index)?.id.clone();
        self.press_item(&id);
        Some(id)
    }

    // ── Scroll ───────────────────────────────────────────────────────

    /// User scroll. No-op until the surface is laid out.
    pub fn scroll(&mut self, direction: ScrollDirection) {
        let event = self.surface.as_mut().and_then(|s| s.scroll_by(direction));
        if let Some(event) = event {
            self.on_scroll(event);
        }
    }

    /// Sampled scroll position from the surface.
    pub fn on_scroll(&mut self, event: ScrollEvent) {
        self.tracker.on_scroll(event.offset);
        self.dots.on_scroll(event.origin);
    }

    pub fn on_content_size_change(&mut self, content_width: f64) {
        self.tracker.on_content_size_change(content_width);
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Tap dot `dot`. Returns the command issued, or `None` when the surface
    /// is not laid out yet or the dot does not exist.
    pub fn press_dot(&mut self, dot: usize) -> Option<ScrollCommand> {
        self.surface.as_ref()?;
        let command = self.dots.tap_dot(dot, self.tracker.content_width())?;
        debug!(event = "core.screen.dot_pressed", dot, command = ?command);
        self.execute(command);
        Some(command)
    }

    /// Tap an arrow. Returns the command issued, or `None` for a no-op.
    pub fn press_arrow(&mut self, direction: ArrowDirection) -> Option<ScrollCommand> {
        self.surface.as_ref()?;
        let command = self.dots.tap_arrow(direction, self.items.len())?;
        debug!(event = "core.screen.arrow_pressed", direction = ?direction, command = ?command);
        self.execute(command);
        Some(command)
    }

    fn execute(&mut self, command: ScrollCommand) {
        let event = self.surface.as_mut().and_then(|s| s.apply(command));
        if let Some(event) = event {
            self.on_scroll(event);
        }
    }

    // ── Views ────────────────────────────────────────────────────────

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn rows(&self) -> Vec<RowView<'_>> {
        self.items
            .iter()
            .map(|item| render_row(item, self.selection.is_pressed(&item.id)))
            .collect()
    }

    pub fn selected(&self) -> Option<&ItemId> {
        self.selection.pressed()
    }

    pub fn progress(&self) -> f64 {
        self.tracker.progress()
    }

    /// Highlighted dot, in `0..DOT_COUNT`.
    pub fn active_dot(&self) -> usize {
        self.dots.active(self.tracker.progress())
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    pub fn dots(&self) -> &DotIndicator {
        &self.dots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Fill;
    use crate::scroll::ScrollOrigin;

    fn two_items() -> Vec<Item> {
        vec![Item::new(1, "A"), Item::new(2, "B")]
    }

    fn loaded(items: Vec<Item>) -> CarouselScreen {
        let mut screen = CarouselScreen::new();
        let ticket = screen.mount();
        assert!(screen.apply_fetch(ticket, Ok(items)));
        screen
    }

    #[test]
    fn fetch_success_renders_rows_in_order() {
        let screen = loaded(two_items());
        let labels: Vec<&str> = screen.rows().iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn fetch_failure_leaves_list_empty() {
        let mut screen = CarouselScreen::new();
        let ticket = screen.mount();
        let applied = screen.apply_fetch(
            ticket,
            Err(LoadError::Status {
                url: "http://localhost:8080".into(),
                status: 500,
            }),
        );
        assert!(applied);
        assert!(screen.rows().is_empty());
    }

    #[test]
    fn late_fetch_after_unmount_is_ignored() {
        let mut screen = CarouselScreen::new();
        let ticket = screen.mount();
        screen.unmount();
        assert!(!screen.apply_fetch(ticket, Ok(two_items())));
        assert!(screen.items().is_empty());
    }

    #[test]
    fn fetch_from_previous_mount_is_ignored() {
        let mut screen = CarouselScreen::new();
        let old = screen.mount();
        screen.unmount();
        let current = screen.mount();
        assert!(!screen.apply_fetch(old, Ok(two_items())));
        assert!(screen.apply_fetch(current, Ok(vec![Item::new(3, "C")])));
        assert_eq!(screen.items().len(), 1);
    }

    #[test]
    fn press_marks_single_row() {
        let mut screen = loaded(two_items());
        screen.press_item(&ItemId::from(1));
        screen.press_item(&ItemId::from(2));
        let fills: Vec<Fill> = screen.rows().iter().map(|r| r.fill).collect();
        assert_eq!(fills, vec![Fill::Normal, Fill::Pressed]);
        screen.press_item(&ItemId::from(2));
        assert_eq!(screen.selected(), None);
    }

    #[test]
    fn navigation_is_noop_before_layout() {
        let mut screen = loaded(two_items());
        assert_eq!(screen.press_dot(3), None);
        assert_eq!(screen.press_arrow(ArrowDirection::Next), None);
        assert_eq!(screen.dots().cursor(), 0);
        assert_eq!(screen.dots().pinned(), None);
    }

    #[test]
    fn dot_tap_scrolls_and_pins() {
        let mut screen = loaded((0..14).map(|i| Item::new(i, format!("item {i}"))).collect());
        screen.layout_surface(40.0, 10.0, true);
        assert_eq!(screen.tracker().content_width(), 140.0);

        let command = screen.press_dot(3);
        assert_eq!(command, Some(ScrollCommand::ToOffset(60.0)));
        assert_eq!(screen.tracker().offset_x(), 60.0);
        assert_eq!(screen.active_dot(), 3);
    }

    #[test]
    fn user_scroll_after_tap_follows_progress() {
        let mut screen = loaded((0..14).map(|i| Item::new(i, "x")).collect());
        screen.layout_surface(20.0, 10.0, false);
        screen.press_dot(5);
        assert_eq!(screen.tracker().offset_x(), 100.0);
        assert_eq!(screen.active_dot(), 5);
        screen.scroll(ScrollDirection::Backward);
        // 90 / 140 * 7 = 4.5
        assert_eq!(screen.tracker().offset_x(), 90.0);
        assert_eq!(screen.active_dot(), 4);
    }

    #[test]
    fn forward_arrow_on_last_item_is_noop() {
        let mut screen = loaded(two_items());
        screen.layout_surface(100.0, 10.0, true);
        assert_eq!(screen.press_arrow(ArrowDirection::Next), Some(ScrollCommand::ToIndex(1)));
        assert_eq!(screen.press_arrow(ArrowDirection::Next), None);
        assert_eq!(screen.dots().cursor(), 1);
    }

    #[test]
    fn items_arriving_after_layout_report_content_width() {
        let mut screen = CarouselScreen::new();
        let ticket = screen.mount();
        screen.layout_surface(30.0, 10.0, true);
        assert_eq!(screen.tracker().content_width(), 0.0);
        screen.apply_fetch(ticket, Ok(two_items()));
        assert_eq!(screen.tracker().content_width(), 20.0);
    }

    #[test]
    fn press_at_column_hits_visible_row() {
        let mut screen = loaded(two_items());
        screen.layout_surface(30.0, 10.0, true);
        assert_eq!(screen.press_item_at_column(12.0), Some(ItemId::from(2)));
        assert_eq!(screen.press_item_at_column(25.0), None);
        assert_eq!(screen.press_item_at_start(), Some(ItemId::from(1)));
        assert_eq!(screen.selected(), Some(&ItemId::from(1)));
    }

    #[test]
    fn resize_keeps_offset_in_range() {
        let mut screen = loaded((0..10).map(|i| Item::new(i, "x")).collect());
        screen.layout_surface(20.0, 10.0, false);
        screen.press_arrow(ArrowDirection::Next);
        for _ in 0..7 {
            screen.press_arrow(ArrowDirection::Next);
        }
        assert_eq!(screen.tracker().offset_x(), 80.0);
        screen.layout_surface(50.0, 10.0, false);
        assert_eq!(screen.tracker().offset_x(), 50.0);
        // Resizing is programmatic and keeps the pin.
        assert!(screen.dots().pinned().is_some());
    }

    #[test]
    fn progress_uses_reported_content_width() {
        let mut screen = loaded(two_items());
        screen.on_content_size_change(70.0);
        screen.on_scroll(ScrollEvent {
            offset: 35.0,
            origin: ScrollOrigin::User,
        });
        assert!((screen.progress() - 0.5).abs() < 1e-12);
        assert_eq!(screen.active_dot(), 3);
    }

    #[test]
    fn on_scroll_user_event_clears_pin() {
        let mut screen = loaded(two_items());
        screen.layout_surface(10.0, 10.0, true);
        screen.press_dot(1);
        screen.on_scroll(ScrollEvent {
            offset: 0.0,
            origin: ScrollOrigin::User,
        });
        assert_eq!(screen.dots().pinned(), None);
    }
}
