//! Scroll tracking: latest horizontal offset and content width, and the
//! progress ratio derived from them.

/// Who moved the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOrigin {
    /// Wheel, keys, or a drag by the user.
    User,
    /// The surface executing a [`ScrollCommand`].
    Programmatic,
}

/// A sampled scroll position reported by the list surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub offset: f64,
    pub origin: ScrollOrigin,
}

/// A navigation request for the list surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    /// Scroll so the left edge sits at this offset (columns).
    ToOffset(f64),
    /// Scroll so this item sits at the left edge.
    ToIndex(usize),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollTracker {
    offset_x: f64,
    content_width: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, offset_x: f64) {
        self.offset_x = offset_x;
    }

    pub fn on_content_size_change(&mut self, content_width: f64) {
        self.content_width = content_width;
    }

    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    /// `offset / content_width` in [0, 1]; 0 while the width is unknown.
    pub fn progress(&self) -> f64 {
        if self.content_width > 0.0 && self.offset_x.is_finite() {
            (self.offset_x / self.content_width).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_gives_zero_progress() {
        let mut t = ScrollTracker::new();
        t.on_scroll(120.0);
        assert_eq!(t.progress(), 0.0);
    }

    #[test]
    fn progress_is_offset_over_width() {
        let mut t = ScrollTracker::new();
        t.on_content_size_change(200.0);
        t.on_scroll(50.0);
        assert!((t.progress() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn progress_clamps_overscroll() {
        let mut t = ScrollTracker::new();
        t.on_content_size_change(100.0);
        t.on_scroll(-10.0);
        assert_eq!(t.progress(), 0.0);
        t.on_scroll(150.0);
        assert_eq!(t.progress(), 1.0);
    }
}
