//! Bottom status bar: item count and key hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let hint = app.theme.hint();
    let line = Line::from(vec![
        Span::styled(format!(" {} items", app.screen.items().len()), hint),
        Span::styled(" | ", hint),
        Span::styled("h/l scroll  1-7 dots  [/] arrows  Enter press  ? help  q quit", hint),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
