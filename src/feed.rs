//! Item Feed
//!
//! Polls the items endpoint for the lifetime of the calling component and
//! exposes the latest applied list as a signal.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::FeedConfig;
use crate::models::Item;
use crate::poller::{release, start_polling, FeedState, IntervalScheduler, TickOutcome};

/// Start polling; the timer is cleared when the owning component is cleaned up.
/// The signal stays `None` until the first successful tick.
pub fn use_item_feed(config: FeedConfig) -> ReadSignal<Option<Vec<Item>>> {
    let (items, set_items) = signal(None::<Vec<Item>>);
    let state = Rc::new(RefCell::new(FeedState::new(config.overlap)));
    let endpoint: Rc<str> = Rc::from(config.endpoint.as_str());
    let timeout_ms = config.timeout_ms;

    web_sys::console::log_1(
        &format!(
            "[FEED] Polling {} every {} ms ({:?})",
            endpoint, config.interval_ms, config.overlap
        )
        .into(),
    );

    let handle = start_polling(&IntervalScheduler, config.interval_ms, move || {
        let ticket = state.borrow_mut().begin_tick();
        let Some(ticket) = ticket else {
            let pending = state.borrow().in_flight();
            web_sys::console::debug_1(&format!("[FEED] {} request(s) still in flight, tick skipped", pending).into());
            return;
        };

        let state = state.clone();
        let endpoint = endpoint.clone();
        spawn_local(async move {
            let seq = ticket.seq();
            let result = api::fetch_items(&endpoint, timeout_ms).await;

            // Never hold the borrow across an await
            let (outcome, update) = state.borrow_mut().settle(ticket, result);
            match outcome {
                TickOutcome::Applied => {
                    let count = update.as_ref().map_or(0, Vec::len);
                    web_sys::console::debug_1(&format!("[FEED] Tick {} loaded {} items", seq, count).into());
                    if set_items.try_set(update).is_some() {
                        web_sys::console::debug_1(&format!("[FEED] Tick {} landed after unmount", seq).into());
                    }
                }
                TickOutcome::Stale => {
                    web_sys::console::debug_1(&format!("[FEED] Tick {} superseded, dropped", seq).into());
                }
                TickOutcome::Failed(e) => {
                    web_sys::console::warn_1(&format!("[FEED] Tick {} failed: {}", seq, e).into());
                }
            }
        });
    });

    let handle = StoredValue::new_local(Some(handle));
    on_cleanup(move || {
        if handle.try_update_value(release).unwrap_or(false) {
            web_sys::console::log_1(&"[FEED] Polling stopped".into());
        }
    });

    items
}
