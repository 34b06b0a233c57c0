//! Frontend Models
//!
//! Data structures shared by the sidebar and its owner.

use serde::Deserialize;

/// A positioned, labeled, taggable box of the note graph
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoxItem {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Style token (CSS color)
    pub color: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BoxItem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Description when present and not just whitespace
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_defaults_from_json() {
        let json = r##"{"id":"a","x":10.4,"y":-3,"label":"Alpha","color":"#f87171"}"##;
        let b: BoxItem = serde_json::from_str(json).unwrap();
        assert_eq!(b.id, "a");
        assert_eq!(b.y, -3.0);
        assert!(b.description.is_none());
        assert!(b.tags.is_empty());
    }

    #[test]
    fn test_has_tag_and_description() {
        let b = BoxItem {
            id: "a".to_string(),
            x: 0.0,
            y: 0.0,
            label: "Alpha".to_string(),
            description: Some("   ".to_string()),
            color: "#fff".to_string(),
            tags: vec!["work".to_string()],
        };
        assert!(b.has_tag("work"));
        assert!(!b.has_tag("Work"));
        assert_eq!(b.description_text(), None);
    }
}
