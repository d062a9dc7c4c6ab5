//! Press selection: at most one item is pressed at a time.

use crate::item::ItemId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pressed: Option<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press an item. Pressing the selected item again clears the selection.
    pub fn toggle(&mut self, id: &ItemId) {
        if self.pressed.as_ref() == Some(id) {
            self.pressed = None;
        } else {
            self.pressed = Some(id.clone());
        }
    }

    pub fn is_pressed(&self, id: &ItemId) -> bool {
        self.pressed.as_ref() == Some(id)
    }

    pub fn pressed(&self) -> Option<&ItemId> {
        self.pressed.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_clears() {
        let mut sel = Selection::new();
        let x = ItemId::from(1);
        sel.toggle(&x);
        assert!(sel.is_pressed(&x));
        sel.toggle(&x);
        assert_eq!(sel.pressed(), None);
    }

    #[test]
    fn pressing_another_moves_selection() {
        let mut sel = Selection::new();
        let x = ItemId::from(1);
        let y = ItemId::from(2);
        sel.toggle(&x);
        sel.toggle(&y);
        assert!(sel.is_pressed(&y));
        assert!(!sel.is_pressed(&x));
    }
}
