//! Host Module - Browser Capabilities
//!
//! The notifier only talks to the browser through [`BrowserHost`]:
//! - tab lookup by id
//! - notification creation and clearing
//! - history navigation on the active tab

pub mod types;

#[cfg(test)]
pub mod memory;

pub use types::{
    ButtonAction, NotificationButton, NotificationId, NotificationOptions, Tab, TabId,
    TemplateType,
};

use async_trait::async_trait;

use crate::error::HostResult;

/// Browser APIs consumed by the notifier
#[async_trait]
pub trait BrowserHost: Send + Sync {
    /// Look up a tab; fails when the id no longer refers to an open tab
    async fn get_tab(&self, tab_id: TabId) -> HostResult<Tab>;

    async fn create_notification(&self, options: NotificationOptions) -> HostResult<NotificationId>;

    /// Returns whether the notification existed
    async fn clear_notification(&self, id: &NotificationId) -> HostResult<bool>;

    /// Navigate the active tab back in its history
    async fn go_back(&self) -> HostResult<()>;
}
