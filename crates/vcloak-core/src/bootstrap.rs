//! Page bootstrap
//!
//! Every dashboard page runs the same init once its structure is ready:
//! auth gate, identity widgets, logout control. Role-specific pages also
//! call `require_role` before rendering anything of their own.
//!
//! These gates only shape the UI. The backend is the authority on access.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use vcloak_api::ApiClient;
use vcloak_navigation::{Navigator, Page};
use vcloak_session::{Role, User};

/// Values for the name / email / role widgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDisplay {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for IdentityDisplay {
    fn from(user: &User) -> Self {
        let name = if user.name.trim().is_empty() {
            "User".to_string()
        } else {
            user.name.clone()
        };

        Self {
            name,
            email: user.email.clone(),
            role: user.role.to_string(),
        }
    }
}

/// Logout control handler, bound to the page's logout button
#[derive(Clone)]
pub struct LogoutAction {
    client: ApiClient,
}

impl LogoutAction {
    pub fn trigger(&self) -> vcloak_api::Result<()> {
        self.client.logout()
    }
}

/// What the bootstrap needs from a rendered page
pub trait PageSurface {
    fn show_identity(&mut self, identity: &IdentityDisplay);
    fn bind_logout(&mut self, logout: LogoutAction);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Page may proceed. Identity is `None` when no user is cached.
    Ready(Option<IdentityDisplay>),
    /// Not authenticated; the user was sent to the login page
    Redirected,
    /// `run` already happened for this page load
    AlreadyRun,
}

/// Links for the landing page navbar when someone is signed in
#[derive(Clone)]
pub struct LandingNav {
    pub dashboard: Page,
    pub logout: LogoutAction,
}

pub struct PageBootstrap {
    client: ApiClient,
    navigator: Arc<dyn Navigator>,
    started: AtomicBool,
}

impl PageBootstrap {
    pub fn new(client: ApiClient, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            client,
            navigator,
            started: AtomicBool::new(false),
        }
    }

    /// Initialize the page. Call after the page structure exists.
    pub fn run(&self, surface: &mut dyn PageSurface) -> BootstrapOutcome {
        if self.started.swap(true, Ordering::SeqCst) {
            return BootstrapOutcome::AlreadyRun;
        }

        if !self.require_auth() {
            return BootstrapOutcome::Redirected;
        }

        let identity = self.cached_user().as_ref().map(IdentityDisplay::from);
        if let Some(identity) = &identity {
            surface.show_identity(identity);
        }

        surface.bind_logout(self.logout_action());

        tracing::debug!(has_identity = identity.is_some(), "Page initialized");
        BootstrapOutcome::Ready(identity)
    }

    /// Send unauthenticated users to the login page
    pub fn require_auth(&self) -> bool {
        if self.client.session().is_authenticated() {
            return true;
        }

        tracing::info!("Not authenticated, redirecting to login");
        self.navigator.navigate(Page::Login);
        false
    }

    /// Send users without `role` back to the landing page
    pub fn require_role(&self, role: Role) -> bool {
        match self.cached_user() {
            Some(user) if user.has_role(role) => true,
            user => {
                tracing::info!(
                    required = %role,
                    actual = ?user.map(|u| u.role),
                    "Role mismatch, redirecting to landing page"
                );
                self.navigator.navigate(Page::Landing);
                false
            }
        }
    }

    /// Dashboard and logout links for the landing navbar, if someone is signed in
    pub fn landing_nav(&self) -> Option<LandingNav> {
        if !self.client.session().is_authenticated() {
            return None;
        }

        self.cached_user().map(|user| LandingNav {
            dashboard: Page::dashboard_for(user.role),
            logout: self.logout_action(),
        })
    }

    fn logout_action(&self) -> LogoutAction {
        LogoutAction {
            client: self.client.clone(),
        }
    }

    /// A corrupted record is treated as no user
    fn cached_user(&self) -> Option<User> {
        match self.client.session().user() {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable cached user");
                None
            }
        }
    }
}
