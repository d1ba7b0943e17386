//! Admin operations
//!
//! The backend rejects these for non-admin tokens; nothing is checked here.

use serde::Serialize;
use serde_json::{json, Value};

use crate::client::ApiClient;
use crate::query::QueryParams;
use crate::Result;

impl ApiClient {
    pub async fn admin_stats(&self) -> Result<Value> {
        self.get("/admin/stats").await
    }

    pub async fn providers(&self, params: &QueryParams) -> Result<Value> {
        self.get(&params.append_to("/admin/providers")).await
    }

    /// Verify a provider, and optionally every location they own
    pub async fn verify_provider(&self, provider_id: i64, verify_locations: bool) -> Result<Value> {
        self.put(
            &format!("/admin/providers/{}/verify", provider_id),
            &json!({ "verify_locations": verify_locations }),
        )
        .await
    }

    pub async fn verify_location(&self, location_id: i64) -> Result<Value> {
        self.put_empty(&format!("/admin/locations/{}/verify", location_id))
            .await
    }

    pub async fn users(&self, params: &QueryParams) -> Result<Value> {
        self.get(&params.append_to("/admin/users")).await
    }

    pub async fn update_user<T: Serialize + ?Sized>(&self, user_id: i64, user: &T) -> Result<Value> {
        self.put(&format!("/admin/users/{}", user_id), user).await
    }

    /// All bookings regardless of owner
    pub async fn all_bookings(&self, params: &QueryParams) -> Result<Value> {
        self.get(&params.append_to("/admin/bookings")).await
    }
}
