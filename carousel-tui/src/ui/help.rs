//! Key binding overlay.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::AppState;

const BINDINGS: &[(&str, &str)] = &[
    ("h / ←, l / →", "scroll the list"),
    ("mouse wheel", "scroll the list"),
    ("1 - 7", "jump to page dot"),
    ("[ or ,", "previous item"),
    ("] or .", "next item"),
    ("Enter / Space", "press the leftmost item"),
    ("click", "press a row, dot or arrow"),
    ("?", "toggle this help"),
    ("q / Esc", "quit"),
];

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!(" {keys:<16}"), theme.title()),
                Span::styled(*action, theme.page()),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keys ")
        .style(theme.page());

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}
