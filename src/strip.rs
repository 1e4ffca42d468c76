//! Strip Utilities
//!
//! Helper functions for strip rendering.

use crate::models::Item;
use std::collections::HashMap;

/// Rows to render, keyed by `name`, in list order.
/// On a key collision the last item with that name wins and keeps its own position.
pub fn strip_entries(items: &[Item]) -> Vec<Item> {
    // Index of the last occurrence of each key
    let mut last_index: HashMap<&str, usize> = HashMap::new();
    for (i, item) in items.iter().enumerate() {
        last_index.insert(item.name.as_str(), i);
    }

    items
        .iter()
        .enumerate()
        .filter(|(i, item)| last_index.get(item.name.as_str()) == Some(i))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Rows for the current feed value; `None` until a list has arrived
pub fn visible_rows(list: Option<&[Item]>) -> Option<Vec<Item>> {
    list.map(strip_entries)
}

/// Icon currently listed for `name`, if the name is still present
pub fn icon_for(rows: &[Item], name: &str) -> Option<String> {
    rows.iter().find(|row| row.name == name).map(|row| row.img.clone())
}
