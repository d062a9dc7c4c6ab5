//! Top-level UI layout: title, dot row, horizontal list, status bar.

pub mod dot_row;
pub mod help;
pub mod layout;
pub mod list;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Padding, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use layout::ScreenLayout;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let area = f.area();
    let layout = match &app.layout {
        Some(layout) => layout.clone(),
        None => ScreenLayout::compute(area),
    };

    f.render_widget(Block::default().style(app.theme.page()), area);

    let title = Paragraph::new(Span::styled(app.config.title.as_str(), app.theme.title()))
        .block(Block::default().padding(Padding::new(1, 0, 1, 0)));
    f.render_widget(title, layout.title);

    dot_row::render(f, &layout.dot_row, app);
    list::render(f, layout.list, app);
    status_bar::render(f, layout.status, app);

    if app.overlay == Overlay::Help {
        help::render(f, centered_rect(60, 60, area), app);
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
