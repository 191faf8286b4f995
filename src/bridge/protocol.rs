//! Native Messaging Protocol
//!
//! Browser -> host (`Incoming`, tagged by `type`):
//! ```text
//! {"type":"tab_activated","tab_id":7}
//! {"type":"button_clicked","notification_id":"abc","button_index":0}
//! {"type":"notification_closed","notification_id":"abc","by_user":true}
//! {"type":"reply","id":3,"ok":{...}}        {"type":"reply","id":3,"error":"No tab with id: 7."}
//! ```
//!
//! Host -> browser (`OutgoingCall`): `{"id":3,"method":"tabs.get","params":{"tab_id":7}}`

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::host::{NotificationId, NotificationOptions, TabId};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Incoming {
    TabActivated {
        tab_id: TabId,
    },
    ButtonClicked {
        notification_id: NotificationId,
        button_index: i64,
    },
    NotificationClosed {
        notification_id: NotificationId,
        #[serde(default)]
        by_user: bool,
    },
    Reply {
        id: u64,
        #[serde(default)]
        ok: Option<Value>,
        #[serde(default)]
        error: Option<String>,
    },
}

/// Browser API invoked on the host's behalf
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "method", content = "params")]
pub enum HostCall {
    #[serde(rename = "tabs.get")]
    TabsGet { tab_id: TabId },

    #[serde(rename = "notifications.create")]
    NotificationsCreate { options: NotificationOptions },

    #[serde(rename = "notifications.clear")]
    NotificationsClear { notification_id: NotificationId },

    #[serde(rename = "tabs.goBack")]
    TabsGoBack,
}

impl HostCall {
    pub fn method(&self) -> &'static str {
        match self {
            HostCall::TabsGet { .. } => "tabs.get",
            HostCall::NotificationsCreate { .. } => "notifications.create",
            HostCall::NotificationsClear { .. } => "notifications.clear",
            HostCall::TabsGoBack => "tabs.goBack",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingCall {
    pub id: u64,
    #[serde(flatten)]
    pub call: HostCall,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_events() {
        let activated: Incoming = serde_json::from_value(json!({ "type": "tab_activated", "tab_id": 7 })).unwrap();
        assert_eq!(activated, Incoming::TabActivated { tab_id: TabId(7) });

        let clicked: Incoming = serde_json::from_value(json!({
            "type": "button_clicked",
            "notification_id": "abc",
            "button_index": 1
        }))
        .unwrap();
        assert_eq!(
            clicked,
            Incoming::ButtonClicked { notification_id: NotificationId::from("abc"), button_index: 1 }
        );

        let closed: Incoming = serde_json::from_value(json!({
            "type": "notification_closed",
            "notification_id": "abc"
        }))
        .unwrap();
        assert_eq!(
            closed,
            Incoming::NotificationClosed { notification_id: NotificationId::from("abc"), by_user: false }
        );
    }

    #[test]
    fn test_decode_replies() {
        let ok: Incoming = serde_json::from_value(json!({ "type": "reply", "id": 3, "ok": "n-1" })).unwrap();
        assert_eq!(ok, Incoming::Reply { id: 3, ok: Some(json!("n-1")), error: None });

        let err: Incoming = serde_json::from_value(json!({
            "type": "reply",
            "id": 4,
            "error": "No tab with id: 7."
        }))
        .unwrap();
        assert_eq!(err, Incoming::Reply { id: 4, ok: None, error: Some("No tab with id: 7.".into()) });
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result = serde_json::from_value::<Incoming>(json!({ "type": "window_focused", "id": 1 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_calls() {
        let get = OutgoingCall { id: 1, call: HostCall::TabsGet { tab_id: TabId(7) } };
        assert_eq!(
            serde_json::to_value(&get).unwrap(),
            json!({ "id": 1, "method": "tabs.get", "params": { "tab_id": 7 } })
        );

        let clear = OutgoingCall {
            id: 2,
            call: HostCall::NotificationsClear { notification_id: NotificationId::from("n-1") },
        };
        assert_eq!(
            serde_json::to_value(&clear).unwrap(),
            json!({ "id": 2, "method": "notifications.clear", "params": { "notification_id": "n-1" } })
        );

        let back = OutgoingCall { id: 3, call: HostCall::TabsGoBack };
        assert_eq!(serde_json::to_value(&back).unwrap(), json!({ "id": 3, "method": "tabs.goBack" }));
    }
}
