//! UI Components
//!
//! Reusable Leptos components.

mod item_strip;

pub use item_strip::ItemStrip;
