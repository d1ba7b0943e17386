//! Navigation side effects

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::page::Page;

/// Host-provided page switcher (window location, webview, terminal UI...)
pub trait Navigator: Send + Sync {
    fn navigate(&self, page: Page);
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub page: Page,
    pub requested_at: DateTime<Utc>,
}

/// Navigator that only records requests. Used by headless hosts and tests.
#[derive(Clone, Default)]
pub struct NavigationLog {
    entries: Arc<RwLock<Vec<NavigationEntry>>>,
}

impl NavigationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<NavigationEntry> {
        self.entries.read().clone()
    }

    pub fn pages(&self) -> Vec<Page> {
        self.entries.read().iter().map(|e| e.page).collect()
    }

    /// Most recently requested page
    pub fn current(&self) -> Option<Page> {
        self.entries.read().last().map(|e| e.page)
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl Navigator for NavigationLog {
    fn navigate(&self, page: Page) {
        tracing::info!(page = %page, "Navigating");
        self.entries.write().push(NavigationEntry {
            page,
            requested_at: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_log() {
        let log = NavigationLog::new();
        assert!(log.current().is_none());

        log.navigate(Page::Login);
        log.clone().navigate(Page::Landing);

        assert_eq!(log.pages(), vec![Page::Login, Page::Landing]);
        assert_eq!(log.current(), Some(Page::Landing));

        log.clear();
        assert!(log.entries().is_empty());
    }
}
