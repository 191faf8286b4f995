//! In-memory browser used by unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{BrowserHost, NotificationId, NotificationOptions, Tab, TabId};
use crate::error::{HostError, HostResult};

#[derive(Default)]
pub struct MemoryHost {
    tabs: Mutex<HashMap<TabId, Tab>>,
    shown: Mutex<Vec<(NotificationId, NotificationOptions)>>,
    cleared: Mutex<Vec<NotificationId>>,
    back_navigations: AtomicUsize,
    next_notification: AtomicUsize,
    reject_notifications: AtomicBool,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tab(self, id: i64, url: &str) -> Self {
        self.tabs.lock().insert(
            TabId(id),
            Tab { id: TabId(id), url: Some(url.to_string()) },
        );
        self
    }

    pub fn with_hidden_tab(self, id: i64) -> Self {
        self.tabs.lock().insert(TabId(id), Tab { id: TabId(id), url: None });
        self
    }

    pub fn reject_notifications(&self) {
        self.reject_notifications.store(true, Ordering::SeqCst);
    }

    /// Notifications currently on screen
    pub fn notifications(&self) -> Vec<(NotificationId, NotificationOptions)> {
        self.shown.lock().clone()
    }

    pub fn cleared(&self) -> Vec<NotificationId> {
        self.cleared.lock().clone()
    }

    pub fn back_navigations(&self) -> usize {
        self.back_navigations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BrowserHost for MemoryHost {
    async fn get_tab(&self, tab_id: TabId) -> HostResult<Tab> {
        self.tabs.lock().get(&tab_id).cloned().ok_or_else(|| HostError::Rejected {
            method: "tabs.get".to_string(),
            message: format!("No tab with id: {}.", tab_id),
        })
    }

    async fn create_notification(&self, options: NotificationOptions) -> HostResult<NotificationId> {
        if self.reject_notifications.load(Ordering::SeqCst) {
            return Err(HostError::Rejected {
                method: "notifications.create".to_string(),
                message: "Notifications are disabled".to_string(),
            });
        }
        let n = self.next_notification.fetch_add(1, Ordering::SeqCst) + 1;
        let id = NotificationId(format!("warning-{}", n));
        self.shown.lock().push((id.clone(), options));
        Ok(id)
    }

    async fn clear_notification(&self, id: &NotificationId) -> HostResult<bool> {
        let mut shown = self.shown.lock();
        let before = shown.len();
        shown.retain(|(shown_id, _)| shown_id != id);
        let existed = shown.len() != before;
        if existed {
            self.cleared.lock().push(id.clone());
        }
        Ok(existed)
    }

    async fn go_back(&self) -> HostResult<()> {
        self.back_navigations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
