//! Page dot indicator: 7 markers plus previous/next arrows.
//!
//! The highlighted marker normally follows scroll progress. Tapping a dot or
//! an arrow sets an explicit override which holds until the next
//! user-originated scroll; scrolls produced by executing the resulting
//! command leave it in place.

use crate::scroll::{ScrollCommand, ScrollOrigin};

/// Number of markers in the row.
pub const DOT_COUNT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Previous,
    Next,
}

impl ArrowDirection {
    fn step(self) -> isize {
        match self {
            ArrowDirection::Previous => -1,
            ArrowDirection::Next => 1,
        }
    }
}

/// Marker for a progress value: `min(floor(p * 7), 6)`.
pub fn dot_for_progress(progress: f64) -> usize {
    if progress.is_nan() || progress <= 0.0 {
        return 0;
    }
    ((progress * DOT_COUNT as f64).floor() as usize).min(DOT_COUNT - 1)
}

/// Marker for an item index, bucketing `item_count` items over the 7 dots.
pub fn dot_for_item(index: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (index * DOT_COUNT / item_count).min(DOT_COUNT - 1)
}

/// Target offset for a dot tap: `ceil(content_width / 7) * dot`.
///
/// Assumes uniform item widths, so the resulting progress need not map back
/// to the same dot.
pub fn dot_offset(content_width: f64, dot: usize) -> f64 {
    (content_width / DOT_COUNT as f64).ceil() * dot as f64
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotIndicator {
    /// Index the arrows step from. Bounded by the item list, not by the dots.
    cursor: usize,
    /// Dot pinned by the last explicit navigation.
    pinned: Option<usize>,
}

impl DotIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The highlighted marker, always in `0..DOT_COUNT`.
    pub fn active(&self, progress: f64) -> usize {
        self.pinned.unwrap_or_else(|| dot_for_progress(progress))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pinned(&self) -> Option<usize> {
        self.pinned
    }

    /// Tap marker `dot`. Out-of-range markers are ignored.
    pub fn tap_dot(&mut self, dot: usize, content_width: f64) -> Option<ScrollCommand> {
        if dot >= DOT_COUNT {
            return None;
        }
        self.cursor = dot;
        self.pinned = Some(dot);
        Some(ScrollCommand::ToOffset(dot_offset(content_width, dot)))
    }

    /// Step the cursor by one item. Stepping past either end of the item list
    /// is a no-op.
    pub fn tap_arrow(
        &mut self,
        direction: ArrowDirection,
        item_count: usize,
    ) -> Option<ScrollCommand> {
        let target = self.cursor.checked_add_signed(direction.step())?;
        if target >= item_count {
            return None;
        }
        self.cursor = target;
        self.pinned = Some(dot_for_item(target, item_count));
        Some(ScrollCommand::ToIndex(target))
    }

    pub fn on_scroll(&mut self, origin: ScrollOrigin) {
        if origin == ScrollOrigin::User {
            self.pinned = None;
        }
    }
}
