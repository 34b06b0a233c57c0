//! Box Filtering
//!
//! Search and tag filtering used by the sidebar's owner to compute the
//! visible list, plus the reorder applied to the canonical order.

use std::collections::HashSet;

use crate::models::BoxItem;

/// Case-insensitive substring match on label, description and tags.
/// A blank query matches everything.
pub fn box_matches_query(b: &BoxItem, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    b.label.to_lowercase().contains(&query)
        || b.description.as_deref().is_some_and(|d| d.to_lowercase().contains(&query))
        || b.tags.iter().any(|t| t.to_lowercase().contains(&query))
}

/// A box passes when it carries every active filter tag
pub fn box_matches_tags(b: &BoxItem, tag_filters: &HashSet<String>) -> bool {
    tag_filters.iter().all(|tag| b.has_tag(tag))
}

/// Boxes in display order that pass both the search and the tag filters
pub fn visible_boxes(
    boxes: &[BoxItem],
    box_order: &[String],
    search_query: &str,
    tag_filters: &HashSet<String>,
) -> Vec<BoxItem> {
    box_order
        .iter()
        .filter_map(|id| boxes.iter().find(|b| &b.id == id))
        .filter(|b| box_matches_query(b, search_query) && box_matches_tags(b, tag_filters))
        .cloned()
        .collect()
}

/// Move the id at `from` to `to`. Out-of-range indices leave the order untouched.
pub fn move_in_order(box_order: &mut Vec<String>, from: usize, to: usize) -> bool {
    if from >= box_order.len() || to >= box_order.len() || from == to {
        return false;
    }
    let id = box_order.remove(from);
    box_order.insert(to, id);
    true
}
