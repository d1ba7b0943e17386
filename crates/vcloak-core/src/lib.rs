//! vcloak Core
//!
//! Wires storage, session, API client and notices into one `App`, and runs
//! the per-page bootstrap (auth gate, identity widgets, logout control).

mod app;
mod bootstrap;
mod config;
mod error;
pub mod format;

pub use app::App;
pub use bootstrap::{
    BootstrapOutcome, IdentityDisplay, LandingNav, LogoutAction, PageBootstrap, PageSurface,
};
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use vcloak_api::{
    ApiClient, ApiError, Credentials, QueryParams, Registration, RequestOptions, RequestPipeline,
};
pub use vcloak_navigation::{NavigationLog, Navigator, Page};
pub use vcloak_notify::{
    ClassifiedError, ErrorHandler, ErrorKind, Notice, NoticeLevel, NotificationCenter,
};
pub use vcloak_session::{Role, Session, SessionError, SessionStore, User};
pub use vcloak_storage::{Database, KeyValueStore, LocalStorage, MemoryStorage, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
