//! Host Types
//!
//! Values exchanged with the browser. Field names follow the browser's
//! extension API so the extension can pass them through unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Browser tab identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub i64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier the browser assigned to a notification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub String);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Tab as reported by the browser. `url` is absent when the
/// extension has no permission to see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    Basic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationButton {
    pub title: String,
}

/// Options for creating an interactive notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationOptions {
    #[serde(rename = "type")]
    pub kind: TemplateType,
    pub icon_url: String,
    pub title: String,
    pub message: String,
    pub buttons: Vec<NotificationButton>,
    pub priority: i32,
}

impl NotificationOptions {
    /// Warning raised when `url` is classified as phishing
    pub fn phishing_warning(url: &str, icon_url: &str) -> Self {
        Self {
            kind: TemplateType::Basic,
            icon_url: icon_url.to_string(),
            title: constants::WARNING_TITLE.to_string(),
            message: constants::warning_message(url),
            buttons: vec![
                NotificationButton { title: constants::BUTTON_GO_BACK.to_string() },
                NotificationButton { title: constants::BUTTON_CONTINUE.to_string() },
            ],
            priority: constants::WARNING_PRIORITY,
        }
    }
}

/// Action bound to a warning button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    GoBack,
    Continue,
}

impl ButtonAction {
    /// Map a button index to its action; indices are positions in
    /// [`NotificationOptions::phishing_warning`]'s button list.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::GoBack),
            1 => Some(Self::Continue),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_phishing_warning_layout() {
        let options = NotificationOptions::phishing_warning("http://example.com", "icon.png");

        assert_eq!(options.title, "Warning: Phishing Site Detected!");
        assert_eq!(options.message, "The website http://example.com is classified as phishing.");
        let labels: Vec<&str> = options.buttons.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(labels, ["Go Back", "Continue"]);
        assert_eq!(options.priority, 2);
    }

    #[test]
    fn test_options_serialize_in_browser_shape() {
        let options = NotificationOptions::phishing_warning("http://example.com", "icon.png");
        let value = serde_json::to_value(&options).unwrap();

        assert_eq!(value["type"], "basic");
        assert_eq!(value["iconUrl"], "icon.png");
        assert_eq!(value["buttons"], json!([{ "title": "Go Back" }, { "title": "Continue" }]));
    }

    #[test]
    fn test_tab_without_url() {
        let tab: Tab = serde_json::from_value(json!({ "id": 4, "active": true })).unwrap();
        assert_eq!(tab.id, TabId(4));
        assert!(tab.url.is_none());
    }

    #[test]
    fn test_button_actions() {
        assert_eq!(ButtonAction::from_index(0), Some(ButtonAction::GoBack));
        assert_eq!(ButtonAction::from_index(1), Some(ButtonAction::Continue));
        assert_eq!(ButtonAction::from_index(2), None);
        assert_eq!(ButtonAction::from_index(-1), None);
    }
}
