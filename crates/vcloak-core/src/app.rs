//! Application container
//!
//! Owns one instance of each component per origin. Clones of the session,
//! client and handler share state, so pages receive them by reference
//! instead of reaching for globals.

use std::sync::Arc;

use vcloak_api::{ApiClient, ApiError, RequestPipeline};
use vcloak_navigation::Navigator;
use vcloak_notify::{ClassifiedError, ErrorHandler, NotificationCenter};
use vcloak_session::SessionStore;
use vcloak_storage::{Database, LocalStorage};

use crate::bootstrap::PageBootstrap;
use crate::config::Config;
use crate::Result;

pub struct App {
    config: Config,
    db: Database,
    session: SessionStore,
    client: ApiClient,
    errors: ErrorHandler,
    navigator: Arc<dyn Navigator>,
}

impl App {
    /// Open (or create) the on-disk storage named by `config`
    pub fn new(config: Config, navigator: Arc<dyn Navigator>) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        Ok(Self::assemble(config, db, navigator))
    }

    /// Same wiring over throwaway storage
    pub fn in_memory(config: Config, navigator: Arc<dyn Navigator>) -> Result<Self> {
        let db = Database::open_in_memory()?;
        Ok(Self::assemble(config, db, navigator))
    }

    fn assemble(config: Config, db: Database, navigator: Arc<dyn Navigator>) -> Self {
        let storage = LocalStorage::new(db.clone(), config.storage_origin());
        let session = SessionStore::new(Arc::new(storage));
        let pipeline = RequestPipeline::new(&config.origin, session.clone());
        let client = ApiClient::new(pipeline, Arc::clone(&navigator));
        let errors = ErrorHandler::with_redirect_delay(
            NotificationCenter::with_duration(config.notice_duration()),
            Arc::clone(&navigator),
            config.redirect_delay(),
        );

        tracing::info!(
            origin = %config.origin,
            authenticated = session.is_authenticated(),
            "Client initialized"
        );

        Self {
            config,
            db,
            session,
            client,
            errors,
            navigator,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn notifications(&self) -> &NotificationCenter {
        self.errors.notifications()
    }

    /// Fresh bootstrap for a new page load
    pub fn bootstrap(&self) -> PageBootstrap {
        PageBootstrap::new(self.client.clone(), Arc::clone(&self.navigator))
    }

    /// Show the notice (and redirect, if any) for a failed call
    pub fn report(&self, error: &ApiError) -> ClassifiedError {
        self.errors.handle(error)
    }

    /// Unwrap a call result, reporting the failure to the user
    pub fn check<T>(&self, result: vcloak_api::Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.report(&e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use url::Url;
    use vcloak_navigation::{NavigationLog, Page};
    use vcloak_notify::ErrorKind;

    fn config(dir: PathBuf) -> Config {
        Config::new(Url::parse("https://vcloak.test").unwrap(), dir)
    }

    #[test]
    fn test_session_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let log = NavigationLog::new();

        {
            let app = App::new(config(dir.path().join("data")), Arc::new(log.clone())).unwrap();
            app.session().set_access_token("persisted").unwrap();
        }

        let app = App::new(config(dir.path().join("data")), Arc::new(log)).unwrap();
        assert!(app.session().is_authenticated());
        assert_eq!(app.client().pipeline().base_url(), "https://vcloak.test/api");
    }

    #[tokio::test(start_paused = true)]
    async fn test_check_reports_failures() {
        let log = NavigationLog::new();
        let app = App::in_memory(config(PathBuf::from(".")), Arc::new(log.clone())).unwrap();

        assert_eq!(app.check::<u8>(Ok(7)), Some(7));

        let failed: vcloak_api::Result<u8> = Err(ApiError::Http {
            status: 401,
            message: "Token has expired".to_string(),
        });
        assert_eq!(app.check(failed), None);
        assert_eq!(app.notifications().active().len(), 1);

        tokio::time::sleep(std::time::Duration::from_secs(3)).await;
        assert_eq!(log.current(), Some(Page::Login));
    }

    #[test]
    fn test_report_without_redirect() {
        let log = NavigationLog::new();
        let app = App::in_memory(config(PathBuf::from(".")), Arc::new(log.clone())).unwrap();

        let classified = app.report(&ApiError::Http {
            status: 403,
            message: "Admin access required".to_string(),
        });
        assert_eq!(classified.kind, ErrorKind::Forbidden);
        assert!(log.entries().is_empty());
    }
}
