//! Application pages

use serde::{Deserialize, Serialize};
use vcloak_session::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Application root
    Landing,
    Login,
    /// Role-specific dashboard
    Dashboard(Role),
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Landing => "/frontend/index.html",
            Page::Login => "/frontend/login.html",
            Page::Dashboard(Role::Traveler) => "/frontend/traveler/dashboard.html",
            Page::Dashboard(Role::Provider) => "/frontend/provider/dashboard.html",
            Page::Dashboard(Role::Admin) => "/frontend/admin/dashboard.html",
        }
    }

    pub fn dashboard_for(role: Role) -> Self {
        Page::Dashboard(role)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
