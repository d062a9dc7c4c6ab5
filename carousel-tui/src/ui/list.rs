//! The horizontal list: one filled box per item, clipped to the viewport.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(surface) = app.screen.surface() else {
        return;
    };
    let rows = app.screen.rows();
    let item_width = i64::from(app.config.layout.item_width);
    let viewport = i64::from(area.width);

    for visible in surface.visible_items() {
        let Some(row) = rows.get(visible.index) else {
            continue;
        };
        let start = visible.start.round() as i64;
        let left = start.max(0);
        let right = (start + item_width).min(viewport);
        if right <= left {
            continue;
        }

        let label = centered_label(row.label, item_width as usize);
        let shown: String = label
            .chars()
            .skip((left - start) as usize)
            .take((right - left) as usize)
            .collect();

        let rect = Rect {
            x: area.x + left as u16,
            y: area.y,
            width: (right - left) as u16,
            height: area.height,
        };
        let mut lines = vec![Line::from(""); usize::from(area.height)];
        if let Some(middle) = lines.get_mut(usize::from(area.height / 2)) {
            *middle = Line::from(shown);
        }
        f.render_widget(Paragraph::new(lines).style(app.theme.row(row.fill)), rect);
    }
}

/// Pad or truncate `label` to exactly `width` characters, centered.
pub fn centered_label(label: &str, width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() >= width {
        return chars.into_iter().take(width).collect();
    }
    let left = (width - chars.len()) / 2;
    let right = width - chars.len() - left;
    format!("{}{}{}", " ".repeat(left), label, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_centered() {
        assert_eq!(centered_label("A", 5), "  A  ");
        assert_eq!(centered_label("AB", 5), " AB  ");
    }

    #[test]
    fn long_label_is_truncated() {
        assert_eq!(centered_label("Emergency fund", 6), "Emerge");
    }
}
