//! Sidebar Configuration
//!
//! Read once at startup from an inline JSON block in `index.html`:
//!
//! ```html
//! <script type="application/json" id="sidebar-config">{ "row_height": 120 }</script>
//! ```
//!
//! Every field is optional; anything missing or unreadable falls back to defaults.

use serde::Deserialize;

/// DOM id of the inline config block
pub const CONFIG_ELEMENT_ID: &str = "sidebar-config";

/// Accepted card row heights, in pixels
const MIN_ROW_HEIGHT: f64 = 1.0;
const MAX_ROW_HEIGHT: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Height of one card row, used to turn a drag offset into rows
    pub row_height: f64,
    /// Pixels the pointer must travel before a press becomes a drag
    pub drag_threshold_px: i32,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            row_height: 120.0,
            drag_threshold_px: leptos_dragdrop::DEFAULT_DRAG_THRESHOLD_PX,
            log_level: "info".to_string(),
        }
    }
}

impl SidebarConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: SidebarConfig = serde_json::from_str(json)?;
        if !(MIN_ROW_HEIGHT..=MAX_ROW_HEIGHT).contains(&config.row_height) {
            config.row_height = Self::default().row_height;
        }
        if config.drag_threshold_px < 0 {
            config.drag_threshold_px = Self::default().drag_threshold_px;
        }
        Ok(config)
    }

    /// Load from the page, falling back to defaults
    pub fn from_document() -> Self {
        let text = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(text) if !text.trim().is_empty() => match Self::from_json(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("[Config] Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SidebarConfig::from_json(r#"{ "row_height": 80 }"#).unwrap();
        assert_eq!(config.row_height, 80.0);
        assert_eq!(config.drag_threshold_px, 5);
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = SidebarConfig::from_json(r#"{ "row_height": 0, "drag_threshold_px": -3, "log_level": "loud" }"#).unwrap();
        assert_eq!(config.row_height, 120.0);
        assert_eq!(config.drag_threshold_px, 5);
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_out_of_range_row_height_falls_back() {
        for json in [r#"{ "row_height": 1e-300 }"#, r#"{ "row_height": 0.5 }"#, r#"{ "row_height": 1e300 }"#] {
            assert_eq!(SidebarConfig::from_json(json).unwrap().row_height, 120.0);
        }
        assert_eq!(SidebarConfig::from_json(r#"{ "row_height": 1 }"#).unwrap().row_height, 1.0);
    }

    #[test]
    fn test_log_level() {
        let config = SidebarConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(SidebarConfig::from_json("{ row_height: }").is_err());
    }
}
