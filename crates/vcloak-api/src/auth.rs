//! Auth operations

use serde::Deserialize;
use serde_json::Value;
use vcloak_navigation::Page;
use vcloak_session::User;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Credentials, Registration};
use crate::Result;

impl ApiClient {
    pub async fn register(&self, registration: &Registration) -> Result<Value> {
        self.post("/auth/register", registration).await
    }

    /// Log in and persist the returned session.
    ///
    /// When the response carries an `access_token`, the access token, the
    /// refresh token (removed if absent) and the user are all stored before
    /// returning. A successful response without a token leaves the session
    /// untouched.
    pub async fn login(&self, credentials: &Credentials) -> Result<Value> {
        let data = self.post("/auth/login", credentials).await?;

        let Some(access_token) = data
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
        else {
            tracing::warn!("Login response carried no access token; session unchanged");
            return Ok(data);
        };

        // Validate the user before touching storage so a bad payload never
        // leaves a new token next to a stale user.
        let user = match data.get("user") {
            None | Some(Value::Null) => None,
            Some(raw) => Some(User::deserialize(raw).map_err(ApiError::MalformedLogin)?),
        };
        let refresh_token = data.get("refresh_token").and_then(Value::as_str);

        let session = self.session();
        session.set_access_token(access_token)?;
        session.set_refresh_token(refresh_token)?;
        match &user {
            Some(user) => session.set_user(user)?,
            None => session.remove_user()?,
        }

        tracing::info!(
            user_id = ?user.as_ref().map(|u| u.id),
            role = ?user.as_ref().map(|u| u.role),
            "Logged in"
        );

        Ok(data)
    }

    /// End the session locally and return to the landing page. The backend
    /// is not told; the token simply stops being sent.
    pub fn logout(&self) -> Result<()> {
        let result = self.session().clear();
        self.navigator().navigate(Page::Landing);
        tracing::info!("Logged out");
        result.map_err(Into::into)
    }

    pub async fn current_user(&self) -> Result<Value> {
        self.get("/auth/me").await
    }
}
