//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! This is the owner the sidebar reports to: it holds the boxes, their
//! canonical order and the active search/tag filters.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter;
use crate::models::BoxItem;

/// Bundled demo boxes
const SEED_JSON: &str = include_str!("seed.json");

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All boxes, in no particular order
    pub boxes: Vec<BoxItem>,
    /// Canonical display order of box ids
    pub box_order: Vec<String>,
    /// Current search text
    pub search_query: String,
    /// Active tag filters
    pub tag_filters: HashSet<String>,
    /// Box last navigated to from the sidebar
    pub focused_box: Option<String>,
    /// Tag last right-clicked, waiting for a color choice
    pub color_target: Option<String>,
}

impl AppState {
    pub fn with_boxes(boxes: Vec<BoxItem>) -> Self {
        let box_order = boxes.iter().map(|b| b.id.clone()).collect();
        Self {
            boxes,
            box_order,
            ..Default::default()
        }
    }

    /// State seeded with the bundled demo boxes; empty if they fail to parse
    pub fn seeded() -> Self {
        match parse_seed(SEED_JSON) {
            Ok(boxes) => Self::with_boxes(boxes),
            Err(e) => {
                log::warn!("[Store] Could not parse seed boxes: {}", e);
                Self::default()
            }
        }
    }
}

pub fn parse_seed(json: &str) -> Result<Vec<BoxItem>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Boxes passing the current search and tag filters, in display order
pub fn store_visible_boxes(store: &AppStore) -> Vec<BoxItem> {
    filter::visible_boxes(
        &store.boxes().read(),
        &store.box_order().read(),
        &store.search_query().read(),
        &store.tag_filters().read(),
    )
}

/// Add or remove a tag filter
pub fn store_toggle_tag_filter(store: &AppStore, tag: String) {
    let tag_filters = store.tag_filters();
    let mut filters = tag_filters.write();
    if !filters.remove(&tag) {
        filters.insert(tag);
    }
}

pub fn store_clear_tag_filters(store: &AppStore) {
    store.tag_filters().write().clear();
}

/// Move a box within the canonical order (absolute indices)
pub fn store_reorder_boxes(store: &AppStore, from: usize, to: usize) {
    if !filter::move_in_order(&mut store.box_order().write(), from, to) {
        log::warn!("[Store] Ignoring reorder {} -> {}", from, to);
    }
}
