//! Item Strip Component
//!
//! Horizontal row of icon + label pairs, one per item.

use leptos::prelude::*;

use crate::models::Item;
use crate::strip::{icon_for, visible_rows};

/// Renders nothing until the first list arrives
#[component]
pub fn ItemStrip(items: ReadSignal<Option<Vec<Item>>>) -> impl IntoView {
    let rows = Memo::new(move |_| items.with(|list| visible_rows(list.as_deref())));

    view! {
        <Show when=move || rows.with(Option::is_some)>
            <div class="item-strip">
                <For
                    each=move || rows.get().unwrap_or_default()
                    key=|row| row.name.clone()
                    children=move |row| view! { <StripEntry row=row rows=rows /> }
                />
            </div>
        </Show>
    }
}

/// One keyed entry. The element is reused while its name stays in the list,
/// so the icon is looked up again on every update.
#[component]
fn StripEntry(row: Item, rows: Memo<Option<Vec<Item>>>) -> impl IntoView {
    let Item { name, img } = row;
    let key = name.clone();
    let src = move || {
        rows.with(|rows| rows.as_deref().and_then(|rows| icon_for(rows, &key)))
            .unwrap_or_else(|| img.clone())
    };

    view! {
        <span class="roll-out" style="padding:0px 4px">
            <img src=src alt="logo" width="16" style="padding:0px 5px" />
            <span>{name}</span>
        </span>
    }
}
