//! Item Ticker App
//!
//! Root component: polls the items feed and shows it as a strip.

use leptos::prelude::*;

use crate::components::ItemStrip;
use crate::config::FeedConfig;
use crate::feed::use_item_feed;

#[component]
pub fn App() -> impl IntoView {
    // Polling lives and dies with this component
    let items = use_item_feed(FeedConfig::load());

    view! {
        <ItemStrip items=items />
    }
}
