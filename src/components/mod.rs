//! UI Components
//!
//! Reusable Leptos components.

mod box_card;
mod sidebar;

pub use box_card::BoxCard;
pub use sidebar::{Sidebar, SidebarCallbacks};
