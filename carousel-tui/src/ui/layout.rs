//! Screen geometry shared by drawing and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use carousel_core::DOT_COUNT;

/// Rows a carousel item occupies.
pub const ROW_HEIGHT: u16 = 3;
/// Blank columns between adjacent markers in the dot row.
pub const DOT_GAP: u16 = 2;

/// Markers plus both arrows with gaps between every pair.
const DOT_ROW_WIDTH: u16 = (DOT_COUNT as u16 + 2) + (DOT_COUNT as u16 + 1) * DOT_GAP;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotRow {
    pub prev: Rect,
    pub dots: [Rect; DOT_COUNT],
    pub next: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub dot_row: DotRow,
    /// Viewport of the horizontal list.
    pub list: Rect,
    pub status: Rect,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    PrevArrow,
    Dot(usize),
    NextArrow,
    /// Column relative to the list viewport.
    List(u16),
}

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(ROW_HEIGHT + 1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let list_chunk = chunks[2];
        let list = Rect {
            x: list_chunk.x.saturating_add(1),
            y: list_chunk.y.saturating_add(1),
            width: list_chunk.width.saturating_sub(2),
            height: list_chunk.height.saturating_sub(1),
        };

        Self {
            title: chunks[0],
            dot_row: dot_row(chunks[1]),
            list,
            status: chunks[4],
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        if self.dot_row.prev.contains(pos) {
            return Some(Hit::PrevArrow);
        }
        if self.dot_row.next.contains(pos) {
            return Some(Hit::NextArrow);
        }
        if let Some(i) = self.dot_row.dots.iter().position(|r| r.contains(pos)) {
            return Some(Hit::Dot(i));
        }
        if self.list.contains(pos) {
            return Some(Hit::List(column - self.list.x));
        }
        None
    }
}

/// Center `‹ ● ● ● ● ● ● ● ›` on the middle line of `chunk`.
fn dot_row(chunk: Rect) -> DotRow {
    let y = chunk.y + chunk.height / 2;
    let x0 = chunk.x + chunk.width.saturating_sub(DOT_ROW_WIDTH) / 2;
    let cell = |x: u16| Rect::new(x, y, 1, 1).intersection(chunk);

    let mut dots = [Rect::default(); DOT_COUNT];
    for (i, rect) in dots.iter_mut().enumerate() {
        *rect = cell(x0 + 1 + DOT_GAP + i as u16 * (1 + DOT_GAP));
    }
    DotRow {
        prev: cell(x0),
        dots,
        next: cell(x0 + DOT_ROW_WIDTH - 1),
    }
}
