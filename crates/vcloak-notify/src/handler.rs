//! Central handler for failed API calls

use std::sync::Arc;
use std::time::Duration;

use vcloak_api::ApiError;
use vcloak_navigation::{Navigator, Page};

use crate::classifier::ClassifiedError;
use crate::notice::{NoticeLevel, NotificationCenter};

/// Delay between the "session expired" notice and the login redirect
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[derive(Clone)]
pub struct ErrorHandler {
    notifications: NotificationCenter,
    navigator: Arc<dyn Navigator>,
    redirect_delay: Duration,
}

impl ErrorHandler {
    pub fn new(notifications: NotificationCenter, navigator: Arc<dyn Navigator>) -> Self {
        Self::with_redirect_delay(notifications, navigator, DEFAULT_REDIRECT_DELAY)
    }

    pub fn with_redirect_delay(
        notifications: NotificationCenter,
        navigator: Arc<dyn Navigator>,
        redirect_delay: Duration,
    ) -> Self {
        Self {
            notifications,
            navigator,
            redirect_delay,
        }
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Classify a failure, show its notice and schedule any redirect.
    /// Returns immediately.
    pub fn handle(&self, error: &ApiError) -> ClassifiedError {
        let classified = ClassifiedError::from(error);

        tracing::error!(
            kind = ?classified.kind,
            status = ?classified.status,
            error = %error,
            "API call failed"
        );

        self.notifications
            .show(classified.message.clone(), NoticeLevel::Error);

        if let Some(page) = classified.kind.redirect() {
            self.schedule_redirect(page);
        }

        classified
    }

    fn schedule_redirect(&self, page: Page) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let navigator = Arc::clone(&self.navigator);
                let delay = self.redirect_delay;
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    navigator.navigate(page);
                });
            }
            Err(_) => self.navigator.navigate(page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ErrorKind;
    use vcloak_navigation::NavigationLog;

    fn http(status: u16, message: &str) -> ApiError {
        ApiError::Http {
            status,
            message: message.to_string(),
        }
    }

    fn handler() -> (ErrorHandler, NavigationLog) {
        let log = NavigationLog::new();
        let handler = ErrorHandler::new(NotificationCenter::new(), Arc::new(log.clone()));
        (handler, log)
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_session_redirects_after_delay() {
        let (handler, log) = handler();

        let classified = handler.handle(&http(401, "Token has expired"));
        assert_eq!(classified.kind, ErrorKind::AuthExpired);

        let notices = handler.notifications().active();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "Session expired. Please login again.");
        assert_eq!(notices[0].level, NoticeLevel::Error);

        tokio::time::sleep(Duration::from_millis(1_900)).await;
        assert!(log.current().is_none());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(log.pages(), vec![Page::Login]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_forbidden_does_not_navigate() {
        let (handler, log) = handler();

        let classified = handler.handle(&http(403, "Admin access required"));
        assert_eq!(classified.kind, ErrorKind::Forbidden);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(log.entries().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_found_and_server_error_notices() {
        let (handler, log) = handler();

        handler.handle(&http(404, "Location not found"));
        handler.handle(&http(500, "Internal server error"));

        let messages: Vec<String> = handler
            .notifications()
            .active()
            .into_iter()
            .map(|n| n.message)
            .collect();
        assert_eq!(
            messages,
            vec!["Resource not found.", "Server error. Please try again later."]
        );

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(log.entries().is_empty());
    }

    #[tokio::test]
    async fn test_unmatched_message_shown_raw() {
        let (handler, _) = handler();

        let classified = handler.handle(&http(409, "Email already registered"));
        assert_eq!(classified.kind, ErrorKind::Unclassified);
        assert_eq!(
            handler.notifications().active()[0].message,
            "Email already registered"
        );
    }

    #[test]
    fn test_redirect_without_runtime_is_immediate() {
        let (handler, log) = handler();
        handler.handle(&http(401, "expired"));
        assert_eq!(log.current(), Some(Page::Login));
    }
}
