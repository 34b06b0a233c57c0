//! Box Card Component
//!
//! One row of the sidebar list.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::sidebar::SidebarCallbacks;
use crate::models::BoxItem;
use crate::sidebar_model::{navigate_intent, round_coordinate};

/// Summary card for a box: swatch, label, position, description and tags
#[component]
pub fn BoxCard(
    item: BoxItem,
    /// Position in the visible list
    index: usize,
    dnd: DndSignals,
    callbacks: SidebarCallbacks,
) -> impl IntoView {
    let on_mousedown = make_on_mousedown(dnd, index);

    let is_dragging = move || dnd.dragging_index_read.get() == Some(index);

    let card_class = move || {
        let mut c = String::from("box-card");
        if is_dragging() { c.push_str(" dragging"); }
        c
    };

    // Follow the pointer while dragged
    let card_style = move || {
        if is_dragging() {
            format!("transform: translateY({}px);", dnd.offset_y_read.get())
        } else {
            String::new()
        }
    };

    let nav_item = item.clone();
    let on_dblclick = move |_| {
        if let Some(intent) = navigate_intent(&nav_item, dnd.drag_just_ended_read.get_untracked()) {
            callbacks.dispatch(intent);
        }
    };

    let position = format!("x: {}, y: {}", round_coordinate(item.x), round_coordinate(item.y));
    let description = item.description_text().map(str::to_string);
    let swatch_style = format!("background-color: {};", item.color);

    let tags = item.tags.clone();
    let tag_chips = (!tags.is_empty()).then(|| {
        view! {
            <div class="box-card-tags">
                {tags
                    .into_iter()
                    .map(|tag| {
                        let menu_tag = tag.clone();
                        view! {
                            <span
                                class="tag-chip small"
                                on:contextmenu=move |ev| callbacks.on_tag_right_click.run((ev, menu_tag.clone()))
                            >
                                {tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div
            class=card_class
            style=card_style
            on:mousedown=on_mousedown
            on:dblclick=on_dblclick
        >
            <span class="box-card-grip" aria-hidden="true">"⠿"</span>
            <div class="box-card-body">
                <div class="box-card-header">
                    <span class="box-card-swatch" style=swatch_style></span>
                    <span class="box-card-label" title=item.label.clone()>{item.label.clone()}</span>
                </div>
                <div class="box-card-position">{position}</div>
                {description.map(|d| view! { <p class="box-card-description">{d}</p> })}
                {tag_chips}
            </div>
        </div>
    }
}
