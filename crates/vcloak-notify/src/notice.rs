//! Transient notices (toasts)

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: String,
    pub message: String,
    pub level: NoticeLevel,
    pub created_at: DateTime<Utc>,
}

/// Holds the notices currently on screen.
///
/// `show` never blocks: expiry runs on a spawned tokio task. Outside a
/// runtime a notice stays until dismissed.
#[derive(Clone)]
pub struct NotificationCenter {
    notices: Arc<RwLock<Vec<Notice>>>,
    display_for: Duration,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_duration(DEFAULT_NOTICE_DURATION)
    }

    pub fn with_duration(display_for: Duration) -> Self {
        Self {
            notices: Arc::new(RwLock::new(Vec::new())),
            display_for,
        }
    }

    /// Show a notice and return its id
    pub fn show(&self, message: impl Into<String>, level: NoticeLevel) -> String {
        let notice = Notice {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            level,
            created_at: Utc::now(),
        };
        let id = notice.id.clone();

        tracing::debug!(notice_id = %id, level = ?level, message = %notice.message, "Showing notice");
        self.notices.write().push(notice);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let center = self.clone();
                let expiring = id.clone();
                handle.spawn(async move {
                    tokio::time::sleep(center.display_for).await;
                    center.remove(&expiring);
                });
            }
            Err(_) => {
                tracing::warn!(notice_id = %id, "No async runtime; notice will not auto-expire");
            }
        }

        id
    }

    /// Dismiss a notice. Returns false if it was already gone.
    pub fn dismiss(&self, id: &str) -> bool {
        self.remove(id)
    }

    pub fn active(&self) -> Vec<Notice> {
        self.notices.read().clone()
    }

    pub fn clear(&self) {
        self.notices.write().clear();
    }

    fn remove(&self, id: &str) -> bool {
        let mut notices = self.notices.write();
        let before = notices.len();
        notices.retain(|n| n.id != id);
        notices.len() != before
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
