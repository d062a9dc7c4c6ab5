//! Carousel items and the row view they render to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a carousel item. Endpoints send either integers or strings.
///
/// Ids must be integral: a fractional number such as `1.5` does not decode,
/// and because the payload is decoded as a whole, one such id fails the fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Unsigned(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Number(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

/// A single carousel entry. Unknown fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Row fill. Pressed rows are light grey, the rest white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Normal,
    Pressed,
}

/// What a single row draws: its label and fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
    pub id: &'a ItemId,
    pub label: &'a str,
    pub fill: Fill,
}

/// Render an item given whether it is the pressed one.
pub fn render_row(item: &Item, is_pressed: bool) -> RowView<'_> {
    RowView {
        id: &item.id,
        label: &item.name,
        fill: if is_pressed { Fill::Pressed } else { Fill::Normal },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_and_string_ids() {
        let items: Vec<Item> =
            serde_json::from_str(r#"[{"id":1,"name":"A"},{"id":"b-2","name":"B","extra":true}]"#)
                .unwrap();
        assert_eq!(items[0].id, ItemId::Number(1));
        assert_eq!(items[1].id, ItemId::Text("b-2".into()));
        assert_eq!(items[1].name, "B");
    }

    #[test]
    fn large_ids_decode_and_fractional_ids_do_not() {
        let items: Vec<Item> =
            serde_json::from_str(r#"[{"id":18446744073709551615,"name":"Max"}]"#).unwrap();
        assert_eq!(items[0].id, ItemId::Unsigned(u64::MAX));
        assert_eq!(items[0].id.to_string(), "18446744073709551615");

        let parsed: Result<Vec<Item>, _> =
            serde_json::from_str(r#"[{"id":1,"name":"A"},{"id":1.5,"name":"B"}]"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_name_is_rejected() {
        let parsed: Result<Vec<Item>, _> = serde_json::from_str(r#"[{"id":1}]"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn row_fill_follows_pressed_flag() {
        let item = Item::new(7, "Seven");
        assert_eq!(render_row(&item, true).fill, Fill::Pressed);
        let row = render_row(&item, false);
        assert_eq!(row.fill, Fill::Normal);
        assert_eq!(row.label, "Seven");
    }

    #[test]
    fn id_display() {
        assert_eq!(ItemId::from(42).to_string(), "42");
        assert_eq!(ItemId::from("x").to_string(), "x");
    }
}
