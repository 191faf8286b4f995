//! Warning Registry
//!
//! Maps each raised warning to the activation that produced it, so a
//! single click dispatcher can serve every notification.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::host::{NotificationId, TabId};

/// What a warning notification was raised for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningContext {
    pub tab_id: TabId,
    pub url: String,
    pub raised_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct WarningRegistry {
    entries: Mutex<HashMap<NotificationId, WarningContext>>,
}

impl WarningRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: NotificationId, tab_id: TabId, url: String) {
        let context = WarningContext { tab_id, url, raised_at: Utc::now() };
        self.entries.lock().insert(id, context);
    }

    pub fn get(&self, id: &NotificationId) -> Option<WarningContext> {
        self.entries.lock().get(id).cloned()
    }

    pub fn remove(&self, id: &NotificationId) -> Option<WarningContext> {
        self.entries.lock().remove(id)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
