//! Box Sidebar App
//!
//! Owns the box state and hosts the sidebar next to a detail pane for the
//! box last navigated to.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Sidebar, SidebarCallbacks};
use crate::config::SidebarConfig;
use crate::models::BoxItem;
use crate::sidebar_model::round_coordinate;
use crate::store::{
    store_clear_tag_filters, store_reorder_boxes, store_toggle_tag_filter, store_visible_boxes,
    use_app_store, AppState, AppStateStoreFields,
};

/// Detail pane for the focused box
#[component]
fn FocusedBoxPane() -> impl IntoView {
    let store = use_app_store();

    let focused = move || {
        let id = store.focused_box().get()?;
        store.boxes().read().iter().find(|b| b.id == id).cloned()
    };

    view! {
        <section class="focus-pane">
            {move || match focused() {
                Some(b) => view! {
                    <div class="focus-card">
                        <div class="focus-card-header">
                            <span class="box-card-swatch" style=format!("background-color: {};", b.color)></span>
                            <h2>{b.label.clone()}</h2>
                        </div>
                        <p class="focus-card-position">
                            {format!("Centered on ({}, {})", round_coordinate(b.x), round_coordinate(b.y))}
                        </p>
                        {b.description.clone().map(|d| view! { <p class="focus-card-description">{d}</p> })}
                    </div>
                }.into_any(),
                None => view! {
                    <div class="focus-empty">"Double-click a box in the sidebar to jump to it"</div>
                }.into_any(),
            }}

            {move || store.color_target().get().map(|tag| view! {
                <div class="color-request">
                    <span>{format!("Pick a color for \"{}\"", tag)}</span>
                    <button on:click=move |_| store.color_target().set(None)>"Dismiss"</button>
                </div>
            })}
        </section>
    }
}

#[component]
pub fn App(config: SidebarConfig) -> impl IntoView {
    let store = Store::new(AppState::seeded());
    provide_context(store);
    provide_context(config);

    let boxes = Signal::derive(move || store.boxes().get());
    let visible_boxes = Memo::new(move |_| store_visible_boxes(&store));
    let box_order = Signal::derive(move || store.box_order().get());
    let search_query = Signal::derive(move || store.search_query().get());
    let tag_filters = Signal::derive(move || store.tag_filters().get());

    let callbacks = SidebarCallbacks {
        on_search_change: Callback::new(move |query: String| {
            store.search_query().set(query);
        }),
        on_toggle_tag_filter: Callback::new(move |tag: String| {
            store_toggle_tag_filter(&store, tag);
        }),
        on_tag_right_click: Callback::new(move |(ev, tag): (web_sys::MouseEvent, String)| {
            ev.prevent_default();
            log::info!("[App] Color requested for tag {:?} at ({}, {})", tag, ev.client_x(), ev.client_y());
            store.color_target().set(Some(tag));
        }),
        on_clear_all_filters: Callback::new(move |_| {
            store_clear_tag_filters(&store);
        }),
        on_navigate_to_box: Callback::new(move |b: BoxItem| {
            log::info!("[App] Navigate to {} ({})", b.id, b.label);
            store.focused_box().set(Some(b.id));
        }),
        on_reorder_boxes: Callback::new(move |(from, to): (usize, usize)| {
            store_reorder_boxes(&store, from, to);
        }),
        on_start_editing: None,
    };

    view! {
        <div class="app-layout">
            <Sidebar
                boxes=boxes
                visible_boxes=visible_boxes
                box_order=box_order
                search_query=search_query
                tag_filters=tag_filters
                callbacks=callbacks
            />

            <main class="main-content">
                <FocusedBoxPane />
            </main>
        </div>
    }
}
