//! Page dots with previous/next arrows.

use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::ui::layout::DotRow;

pub const PREV_ARROW: &str = "‹";
pub const NEXT_ARROW: &str = "›";
pub const DOT: &str = "●";

pub fn render(f: &mut Frame, row: &DotRow, app: &AppState) {
    let theme = &app.theme;
    let active = app.screen.active_dot();

    f.render_widget(Paragraph::new(Span::styled(PREV_ARROW, theme.arrow())), row.prev);
    for (i, rect) in row.dots.iter().enumerate() {
        f.render_widget(Paragraph::new(Span::styled(DOT, theme.dot(i == active))), *rect);
    }
    f.render_widget(Paragraph::new(Span::styled(NEXT_ARROW, theme.arrow())), row.next);
}
