//! The scrollable horizontal list surface.
//!
//! Items are laid out at a fixed stride (item width plus gap). The surface
//! owns the real offset and clamps every move to `[0, content - viewport]`;
//! each move yields a [`ScrollEvent`] for the tracker.

use crate::scroll::{ScrollCommand, ScrollEvent, ScrollOrigin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Backward,
    Forward,
}

/// Portion of one item that falls inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleItem {
    pub index: usize,
    /// Column of the item's left edge relative to the viewport. Negative when
    /// the item is cut off on the left.
    pub start: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListSurface {
    offset: f64,
    viewport: f64,
    stride: f64,
    item_count: usize,
    paging: bool,
}

impl ListSurface {
    pub fn new(viewport: f64, stride: f64, paging: bool) -> Self {
        Self {
            offset: 0.0,
            viewport: viewport.max(0.0),
            stride: stride.max(1.0),
            item_count: 0,
            paging,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn viewport(&self) -> f64 {
        self.viewport
    }

    pub fn stride(&self) -> f64 {
        self.stride
    }

    pub fn paging(&self) -> bool {
        self.paging
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn content_width(&self) -> f64 {
        self.item_count as f64 * self.stride
    }

    pub fn max_offset(&self) -> f64 {
        (self.content_width() - self.viewport).max(0.0)
    }

    /// Replace the item count. Returns the new content width.
    pub fn set_item_count(&mut self, count: usize) -> f64 {
        self.item_count = count;
        self.offset = self.clamp(self.offset);
        self.content_width()
    }

    /// Change the viewport width, keeping the offset in range.
    pub fn set_viewport(&mut self, viewport: f64) -> Option<ScrollEvent> {
        self.viewport = viewport.max(0.0);
        let clamped = self.clamp(self.offset);
        self.move_to(clamped, ScrollOrigin::Programmatic)
    }

    pub fn apply(&mut self, command: ScrollCommand) -> Option<ScrollEvent> {
        let target = match command {
            ScrollCommand::ToOffset(offset) => offset,
            ScrollCommand::ToIndex(index) => index as f64 * self.stride,
        };
        self.move_to(self.clamp(target), ScrollOrigin::Programmatic)
    }

    /// User scroll: one page with paging enabled, otherwise one item.
    pub fn scroll_by(&mut self, direction: ScrollDirection) -> Option<ScrollEvent> {
        let target = if self.paging && self.viewport >= 1.0 {
            let page = (self.offset / self.viewport).round();
            match direction {
                ScrollDirection::Forward => (page + 1.0) * self.viewport,
                ScrollDirection::Backward => (page - 1.0) * self.viewport,
            }
        } else {
            match direction {
                ScrollDirection::Forward => self.offset + self.stride,
                ScrollDirection::Backward => self.offset - self.stride,
            }
        };
        self.move_to(self.clamp(target), ScrollOrigin::User)
    }

    /// Index of the item under the left edge of the viewport.
    pub fn item_at_start(&self) -> Option<usize> {
        if self.item_count == 0 {
            return None;
        }
        let index = (self.offset / self.stride).floor() as usize;
        Some(index.min(self.item_count - 1))
    }

    /// Index of the item under viewport column `column`, if any.
    pub fn item_at_column(&self, column: f64) -> Option<usize> {
        if column < 0.0 || column >= self.viewport {
            return None;
        }
        let index = ((self.offset + column) / self.stride).floor() as usize;
        (index < self.item_count).then_some(index)
    }

    /// Items intersecting the viewport, left to right.
    pub fn visible_items(&self) -> Vec<VisibleItem> {
        if self.item_count == 0 || self.viewport <= 0.0 {
            return Vec::new();
        }
        let first = (self.offset / self.stride).floor() as usize;
        let last = ((self.offset + self.viewport) / self.stride).ceil() as usize;
        (first..last.min(self.item_count))
            .map(|index| VisibleItem {
                index,
                start: index as f64 * self.stride - self.offset,
            })
            .collect()
    }

    fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }

    fn move_to(&mut self, offset: f64, origin: ScrollOrigin) -> Option<ScrollEvent> {
        if offset == self.offset {
            return None;
        }
        self.offset = offset;
        Some(ScrollEvent { offset, origin })
    }
}
