//! Light "savings" palette for the carousel screen
//!
//! # Color Palette
//! - **Background**: off-white page (`#f7f7f5`)
//! - **Row**: white, light grey while pressed
//! - **Dots**: light grey, black for the active one
//! - **Text**: black title and labels, grey hints

use ratatui::style::{Color, Modifier, Style};

use carousel_core::Fill;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Page background
    pub background: Color,
    /// Row fill when not pressed
    pub row: Color,
    /// Row fill while pressed
    pub row_pressed: Color,
    /// Inactive page dot
    pub dot: Color,
    /// Highlighted page dot
    pub dot_active: Color,
    /// Title and labels
    pub text_primary: Color,
    /// Hints and arrows
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::savings_light()
    }
}

impl Theme {
    pub fn savings_light() -> Self {
        Self {
            background: Color::Rgb(247, 247, 245),
            row: Color::White,
            row_pressed: Color::Rgb(211, 211, 211),
            dot: Color::Rgb(211, 211, 211),
            dot_active: Color::Black,
            text_primary: Color::Black,
            text_secondary: Color::Rgb(110, 110, 110),
        }
    }

    pub fn fill_color(&self, fill: Fill) -> Color {
        match fill {
            Fill::Normal => self.row,
            Fill::Pressed => self.row_pressed,
        }
    }

    pub fn page(&self) -> Style {
        Style::default().bg(self.background).fg(self.text_primary)
    }

    pub fn title(&self) -> Style {
        self.page().add_modifier(Modifier::BOLD)
    }

    pub fn row(&self, fill: Fill) -> Style {
        Style::default()
            .bg(self.fill_color(fill))
            .fg(self.text_primary)
    }

    pub fn dot(&self, active: bool) -> Style {
        let fg = if active { self.dot_active } else { self.dot };
        Style::default().bg(self.background).fg(fg)
    }

    pub fn arrow(&self) -> Style {
        self.page()
    }

    pub fn hint(&self) -> Style {
        Style::default().bg(self.background).fg(self.text_secondary)
    }
}
