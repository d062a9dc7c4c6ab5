//! Input dispatch: overlay first, then global keys, then carousel controls.
//!
//! Keys and clicks stand in for taps. Mouse clicks are resolved against the
//! layout of the last drawn frame.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use carousel_core::{ArrowDirection, ScrollDirection};

use crate::app::{AppState, Overlay};
use crate::ui::layout::Hit;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.overlay == Overlay::Help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
        ) {
            app.overlay = Overlay::None;
        }
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.overlay = Overlay::Help,
        KeyCode::Char('h') | KeyCode::Left => app.screen.scroll(ScrollDirection::Backward),
        KeyCode::Char('l') | KeyCode::Right => app.screen.scroll(ScrollDirection::Forward),
        KeyCode::Char('[') | KeyCode::Char(',') => {
            app.screen.press_arrow(ArrowDirection::Previous);
        }
        KeyCode::Char(']') | KeyCode::Char('.') => {
            app.screen.press_arrow(ArrowDirection::Next);
        }
        KeyCode::Char(c @ '1'..='7') => {
            let dot = c as usize - '1' as usize;
            app.screen.press_dot(dot);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.screen.press_item_at_start();
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.overlay == Overlay::Help {
                app.overlay = Overlay::None;
                return;
            }
            let hit = app
                .layout
                .as_ref()
                .and_then(|layout| layout.hit(mouse.column, mouse.row));
            match hit {
                Some(Hit::PrevArrow) => {
                    app.screen.press_arrow(ArrowDirection::Previous);
                }
                Some(Hit::NextArrow) => {
                    app.screen.press_arrow(ArrowDirection::Next);
                }
                Some(Hit::Dot(i)) => {
                    app.screen.press_dot(i);
                }
                Some(Hit::List(column)) => {
                    app.screen.press_item_at_column(f64::from(column));
                }
                None => {}
            }
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            app.screen.scroll(ScrollDirection::Forward);
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            app.screen.scroll(ScrollDirection::Backward);
        }
        _ => {}
    }
}
