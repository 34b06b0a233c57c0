//! Sidebar Component
//!
//! Searchable, tag-filterable, drag-reorderable list of boxes.
//! Holds no state of its own: it renders the snapshot it is given and turns
//! every gesture into a call on [`SidebarCallbacks`]. Only the drag gesture in
//! flight lives here, and it is dropped on release.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::BoxCard;
use crate::config::SidebarConfig;
use crate::models::BoxItem;
use crate::sidebar_model::{
    empty_state, footer_summary, is_filtering, resolve_reorder, shows_clear_all, shows_search_clear, tag_counts,
    SidebarIntent, TagCount,
};

/// Everything the sidebar can ask of its owner
#[derive(Clone, Copy)]
pub struct SidebarCallbacks {
    /// New search text, empty when cleared
    pub on_search_change: Callback<String>,
    pub on_toggle_tag_filter: Callback<String>,
    /// Raw right-click event (for positioning a color picker) and the tag
    pub on_tag_right_click: Callback<(web_sys::MouseEvent, String)>,
    pub on_clear_all_filters: Callback<()>,
    pub on_navigate_to_box: Callback<BoxItem>,
    /// Absolute `(from, to)` positions in the box order
    pub on_reorder_boxes: Callback<(usize, usize)>,
    /// Box-editing hook. Nothing in the sidebar triggers it.
    pub on_start_editing: Option<Callback<String>>,
}

impl SidebarCallbacks {
    /// Hand an intent to the matching callback
    pub fn dispatch(&self, intent: SidebarIntent) {
        match intent {
            SidebarIntent::SearchChanged(query) => self.on_search_change.run(query),
            SidebarIntent::ToggleTagFilter(tag) => self.on_toggle_tag_filter.run(tag),
            SidebarIntent::ClearAllFilters => self.on_clear_all_filters.run(()),
            SidebarIntent::NavigateToBox(item) => self.on_navigate_to_box.run(item),
            SidebarIntent::Reorder(intent) => self.on_reorder_boxes.run((intent.from, intent.to)),
        }
    }
}

/// Tag filter chip with its box count
#[component]
fn TagFilterChip(
    tag_count: TagCount,
    tag_filters: Signal<HashSet<String>>,
    callbacks: SidebarCallbacks,
) -> impl IntoView {
    let TagCount { tag, count } = tag_count;

    let active_tag = tag.clone();
    let is_active = move || tag_filters.with(|f| f.contains(&active_tag));

    let click_tag = tag.clone();
    let menu_tag = tag.clone();

    view! {
        <button
            class=move || if is_active() { "tag-chip active" } else { "tag-chip" }
            title="Click to filter, right-click to change color"
            on:click=move |_| callbacks.dispatch(SidebarIntent::ToggleTagFilter(click_tag.clone()))
            on:contextmenu=move |ev| callbacks.on_tag_right_click.run((ev, menu_tag.clone()))
        >
            <span class="tag-chip-name">{tag}</span>
            <span class="tag-chip-count">{count}</span>
        </button>
    }
}

/// Sidebar panel
#[component]
pub fn Sidebar(
    /// All boxes, for counts and the "no boxes yet" check
    #[prop(into)] boxes: Signal<Vec<BoxItem>>,
    /// Boxes left after filtering, in display order
    #[prop(into)] visible_boxes: Signal<Vec<BoxItem>>,
    /// Canonical order of all box ids
    #[prop(into)] box_order: Signal<Vec<String>>,
    #[prop(into)] search_query: Signal<String>,
    #[prop(into)] tag_filters: Signal<HashSet<String>>,
    callbacks: SidebarCallbacks,
) -> impl IntoView {
    let config = use_context::<SidebarConfig>().unwrap_or_default();
    let row_height = config.row_height;

    let dnd = create_dnd_signals_with_threshold(config.drag_threshold_px);

    // Released drags become a reorder request in absolute positions
    bind_global_mouseup(dnd, move |index, offset_y| {
        let order = box_order.get_untracked();
        let visible = visible_boxes.get_untracked();
        let visible_ids: Vec<&str> = visible.iter().map(|b| b.id.as_str()).collect();

        match resolve_reorder(&visible_ids, &order, index, f64::from(offset_y), row_height) {
            Some(intent) => {
                log::debug!("[Sidebar] Reorder: row {} moved {}px, {} -> {}", index, offset_y, intent.from, intent.to);
                callbacks.dispatch(SidebarIntent::Reorder(intent));
            }
            None => {
                log::debug!("[Sidebar] Drop without reorder: row {} moved {}px", index, offset_y);
            }
        }
    });

    let tag_list = move || boxes.with(|b| tag_counts(b));

    let empty = move || {
        search_query.with(|q| empty_state(boxes.with(Vec::len), visible_boxes.with(Vec::len), q))
    };

    let summary = move || {
        let filtering = tag_filters.with(|f| search_query.with(|q| is_filtering(q, f)));
        footer_summary(boxes.with(Vec::len), visible_boxes.with(Vec::len), filtering).to_string()
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">"Boxes"</div>

            // Search
            <div class="sidebar-search">
                <input
                    type="text"
                    placeholder="Search boxes..."
                    prop:value=move || search_query.get()
                    on:input=move |ev| callbacks.dispatch(SidebarIntent::SearchChanged(event_target_value(&ev)))
                />
                <Show when=move || search_query.with(|q| shows_search_clear(q))>
                    <button
                        class="search-clear-btn"
                        title="Clear search"
                        on:click=move |_| callbacks.dispatch(SidebarIntent::clear_search())
                    >
                        "×"
                    </button>
                </Show>
            </div>

            // Tag filters
            <Show when=move || !tag_list().is_empty()>
                <div class="sidebar-tags">
                    <div class="sidebar-tags-header">
                        <span>"Tags"</span>
                        <Show when=move || tag_filters.with(shows_clear_all)>
                            <button
                                class="clear-filters-btn"
                                on:click=move |_| callbacks.dispatch(SidebarIntent::ClearAllFilters)
                            >
                                "Clear All"
                            </button>
                        </Show>
                    </div>
                    <div class="tag-chip-list">
                        <For
                            each=tag_list
                            key=|tc| (tc.tag.clone(), tc.count)
                            children=move |tc| {
                                view! {
                                    <TagFilterChip
                                        tag_count=tc
                                        tag_filters=tag_filters
                                        callbacks=callbacks
                                    />
                                }
                            }
                        />
                    </div>
                </div>
            </Show>

            // Box list
            <div class="sidebar-list">
                {move || match empty() {
                    Some(state) => view! {
                        <div class="sidebar-empty">
                            <p class="sidebar-empty-title">{state.title()}</p>
                            <p class="sidebar-empty-hint">{state.hint()}</p>
                        </div>
                    }.into_any(),
                    None => visible_boxes
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            view! { <BoxCard item=item index=index dnd=dnd callbacks=callbacks /> }
                        })
                        .collect_view()
                        .into_any(),
                }}
            </div>

            // Footer
            <div class="sidebar-footer">
                <p class="sidebar-summary">{summary}</p>
                <p class="sidebar-help">
                    "Double-click a box to jump to it. Drag to reorder. Right-click a tag to change its color."
                </p>
            </div>
        </aside>
    }
}
