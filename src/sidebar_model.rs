//! Sidebar View Logic
//!
//! Pure helpers behind the sidebar: everything it derives from its props
//! before rendering, and the drag-release to reorder translation.

use std::collections::HashSet;
use std::fmt;

use crate::models::BoxItem;

/// A tag and how many boxes carry it
#[derive(Debug, Clone, PartialEq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Count boxes per tag, in order of first appearance.
/// Counts are over all boxes, not only the visible ones.
pub fn tag_counts(boxes: &[BoxItem]) -> Vec<TagCount> {
    let mut counts: Vec<TagCount> = Vec::new();
    for b in boxes {
        let mut seen: HashSet<&str> = HashSet::new();
        for tag in &b.tags {
            if !seen.insert(tag.as_str()) {
                continue;
            }
            match counts.iter_mut().find(|c| c.tag == *tag) {
                Some(c) => c.count += 1,
                None => counts.push(TagCount { tag: tag.clone(), count: 1 }),
            }
        }
    }
    counts
}

/// Whether any search text or tag filter is narrowing the list
pub fn is_filtering(search_query: &str, tag_filters: &HashSet<String>) -> bool {
    !tag_filters.is_empty() || !search_query.trim().is_empty()
}

/// Footer line under the box list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterSummary {
    All { total: usize },
    Partial { visible: usize, total: usize },
}

pub fn footer_summary(total: usize, visible: usize, filtering: bool) -> FooterSummary {
    if filtering {
        FooterSummary::Partial { visible, total }
    } else {
        FooterSummary::All { total }
    }
}

impl fmt::Display for FooterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FooterSummary::All { total } => write!(f, "Showing all {} boxes", total),
            FooterSummary::Partial { visible, total } => {
                write!(f, "Showing {} of {} boxes", visible, total)
            }
        }
    }
}

/// What to show instead of the list when there is nothing to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    NoBoxes,
    NoMatch(String),
    AllFilteredOut,
}

/// Empty states are mutually exclusive; the first that applies wins.
pub fn empty_state(boxes_len: usize, visible_len: usize, search_query: &str) -> Option<EmptyState> {
    if boxes_len == 0 {
        Some(EmptyState::NoBoxes)
    } else if visible_len > 0 {
        None
    } else if !search_query.trim().is_empty() {
        Some(EmptyState::NoMatch(search_query.to_string()))
    } else {
        Some(EmptyState::AllFilteredOut)
    }
}

impl EmptyState {
    pub fn title(&self) -> String {
        match self {
            EmptyState::NoBoxes => "No boxes yet".to_string(),
            EmptyState::NoMatch(query) => format!("No boxes match \"{}\"", query),
            EmptyState::AllFilteredOut => "All boxes are filtered out".to_string(),
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            EmptyState::NoBoxes => "Create a box on the canvas to see it here",
            EmptyState::NoMatch(_) => "Try a different search",
            EmptyState::AllFilteredOut => "Clear some tag filters to see more boxes",
        }
    }
}

/// Round half towards positive infinity, like the browser's `Math.round`
pub fn round_half_up(v: f64) -> i64 {
    let r = v.round();
    // `round` goes away from zero on negative halves
    if v - r == 0.5 {
        (r + 1.0) as i64
    } else {
        r as i64
    }
}

/// Displayed box coordinate
pub fn round_coordinate(v: f64) -> i64 {
    round_half_up(v)
}

/// Number of rows a vertical offset spans
pub fn drag_delta(offset_y: f64, row_height: f64) -> i64 {
    if row_height <= 0.0 {
        return 0;
    }
    round_half_up(offset_y / row_height)
}

/// Visible index a row dropped at `offset_y` lands on, clamped to the list.
/// `None` when the list is empty or the row would stay where it is.
pub fn drag_target_index(index: usize, offset_y: f64, row_height: f64, visible_len: usize) -> Option<usize> {
    if visible_len == 0 {
        return None;
    }
    let len = visible_len as i64;
    let delta = drag_delta(offset_y, row_height).clamp(-len, len);
    let target = (index as i64).saturating_add(delta).clamp(0, len - 1) as usize;
    if target == index {
        None
    } else {
        Some(target)
    }
}

/// The × button only shows while there is text to clear
pub fn shows_search_clear(search_query: &str) -> bool {
    !search_query.is_empty()
}

/// "Clear All" only shows while a tag filter is active
pub fn shows_clear_all(tag_filters: &HashSet<String>) -> bool {
    !tag_filters.is_empty()
}

/// Requests the sidebar sends its owner in response to a gesture
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarIntent {
    SearchChanged(String),
    ToggleTagFilter(String),
    ClearAllFilters,
    NavigateToBox(BoxItem),
    Reorder(ReorderIntent),
}

impl SidebarIntent {
    pub fn clear_search() -> Self {
        SidebarIntent::SearchChanged(String::new())
    }
}

/// Double-click on a card. The release of a drag can land as a
/// double-click, so nothing is sent while the drag-end latch is set.
pub fn navigate_intent(item: &BoxItem, drag_just_ended: bool) -> Option<SidebarIntent> {
    if drag_just_ended {
        None
    } else {
        Some(SidebarIntent::NavigateToBox(item.clone()))
    }
}

/// A reorder request in absolute (`box_order`) positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderIntent {
    pub from: usize,
    pub to: usize,
}

/// Translate a released drag into absolute indices:
/// visible index -> box id -> position in `box_order`.
/// Ids missing from `box_order` yield `None`.
pub fn resolve_reorder(
    visible_ids: &[&str],
    box_order: &[String],
    index: usize,
    offset_y: f64,
    row_height: f64,
) -> Option<ReorderIntent> {
    let origin_id = visible_ids.get(index)?;
    let target = drag_target_index(index, offset_y, row_height, visible_ids.len())?;
    let target_id = visible_ids.get(target)?;

    let from = box_order.iter().position(|id| id == origin_id)?;
    let to = box_order.iter().position(|id| id == target_id)?;
    Some(ReorderIntent { from, to })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: f64 = 120.0;

    fn make_box(id: &str, tags: &[&str]) -> BoxItem {
        BoxItem {
            id: id.to_string(),
            x: 0.0,
            y: 0.0,
            label: format!("Box {}", id),
            description: None,
            color: "#60a5fa".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn order(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn filters(tags: &[&str]) -> HashSet<String> {
        tags.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tag_counts_first_appearance_order() {
        let boxes = vec![
            make_box("a", &["work", "urgent"]),
            make_box("b", &["home"]),
            make_box("c", &["work", "work"]),
        ];
        let counts = tag_counts(&boxes);
        assert_eq!(
            counts,
            vec![
                TagCount { tag: "work".to_string(), count: 2 },
                TagCount { tag: "urgent".to_string(), count: 1 },
                TagCount { tag: "home".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_footer_reads_all_without_filters() {
        let filtering = is_filtering("   ", &filters(&[]));
        assert!(!filtering);
        assert_eq!(footer_summary(7, 7, filtering).to_string(), "Showing all 7 boxes");
    }

    #[test]
    fn test_footer_reads_partial_with_search_or_tags() {
        assert!(is_filtering("al", &filters(&[])));
        assert!(is_filtering("", &filters(&["work"])));
        assert_eq!(footer_summary(7, 3, true).to_string(), "Showing 3 of 7 boxes");
        // A filter that hides nothing still reports the partial form
        assert_eq!(footer_summary(7, 7, true).to_string(), "Showing 7 of 7 boxes");
    }

    #[test]
    fn test_empty_state_precedence() {
        assert_eq!(empty_state(0, 0, "anything"), Some(EmptyState::NoBoxes));
        assert_eq!(empty_state(3, 0, "zeta"), Some(EmptyState::NoMatch("zeta".to_string())));
        assert_eq!(empty_state(3, 0, "  "), Some(EmptyState::AllFilteredOut));
        assert_eq!(empty_state(3, 1, "zeta"), None);
        assert_eq!(EmptyState::AllFilteredOut.title(), "All boxes are filtered out");
        assert_eq!(EmptyState::NoMatch("zeta".to_string()).title(), "No boxes match \"zeta\"");
    }

    #[test]
    fn test_rounding_matches_math_round() {
        assert_eq!(round_half_up(1.25), 1);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-1.5), -1);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(0.49999999999999994), 0);
        assert_eq!(round_coordinate(-12.7), -13);
    }

    #[test]
    fn test_tiny_row_height_does_not_overflow() {
        assert_eq!(drag_delta(10.0, 1e-300), i64::MAX);
        assert_eq!(drag_target_index(1, 10.0, 1e-300, 3), Some(2));
        assert_eq!(drag_target_index(1, -10.0, 1e-300, 3), Some(0));
        let visible = ["a", "b", "c"];
        let intent = resolve_reorder(&visible, &order(&["a", "b", "c"]), 0, 10.0, 1e-300);
        assert_eq!(intent, Some(ReorderIntent { from: 0, to: 2 }));
    }

    #[test]
    fn test_clear_controls_visibility() {
        assert!(!shows_search_clear(""));
        assert!(shows_search_clear(" "));
        assert!(shows_search_clear("alpha"));
        assert!(!shows_clear_all(&filters(&[])));
        assert!(shows_clear_all(&filters(&["work"])));
    }

    #[test]
    fn test_navigate_passes_the_same_box() {
        let b = make_box("a", &["work"]);
        assert_eq!(navigate_intent(&b, false), Some(SidebarIntent::NavigateToBox(b.clone())));
    }

    #[test]
    fn test_navigate_suppressed_after_drag() {
        let b = make_box("a", &[]);
        assert_eq!(navigate_intent(&b, true), None);
    }

    #[test]
    fn test_drag_delta() {
        assert_eq!(drag_delta(150.0, ROW), 1);
        assert_eq!(drag_delta(59.0, ROW), 0);
        assert_eq!(drag_delta(-250.0, ROW), -2);
        assert_eq!(drag_delta(500.0, 0.0), 0);
    }

    #[test]
    fn test_drag_down_one_row_reorders() {
        let visible = ["a", "b", "c"];
        let intent = resolve_reorder(&visible, &order(&["a", "b", "c"]), 0, 150.0, ROW);
        assert_eq!(intent, Some(ReorderIntent { from: 0, to: 1 }));
    }

    #[test]
    fn test_drag_is_clamped_to_list() {
        assert_eq!(drag_target_index(1, 10_000.0, ROW, 3), Some(2));
        assert_eq!(drag_target_index(1, -10_000.0, ROW, 3), Some(0));
        assert_eq!(drag_target_index(0, 10.0, ROW, 0), None);
    }

    #[test]
    fn test_drag_back_to_origin_is_noop() {
        let visible = ["a", "b", "c"];
        assert_eq!(resolve_reorder(&visible, &order(&["a", "b", "c"]), 1, 40.0, ROW), None);
        // Clamped onto itself at the end of the list
        assert_eq!(resolve_reorder(&visible, &order(&["a", "b", "c"]), 2, 400.0, ROW), None);
    }

    #[test]
    fn test_reorder_uses_absolute_positions() {
        // Filtered view hides "b" and "d"
        let visible = ["a", "c", "e"];
        let intent = resolve_reorder(&visible, &order(&["a", "b", "c", "d", "e"]), 2, -130.0, ROW);
        assert_eq!(intent, Some(ReorderIntent { from: 4, to: 2 }));
    }

    #[test]
    fn test_reorder_missing_id_is_silent() {
        let visible = ["a", "x"];
        assert_eq!(resolve_reorder(&visible, &order(&["a", "b"]), 0, 120.0, ROW), None);
        assert_eq!(resolve_reorder(&visible, &order(&["a", "b"]), 5, 120.0, ROW), None);
    }
}
