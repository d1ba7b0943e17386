//! Booking operations

use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::query::QueryParams;
use crate::Result;

impl ApiClient {
    /// Bookings visible to the current user, optionally filtered (e.g. `status`)
    pub async fn bookings(&self, params: &QueryParams) -> Result<Value> {
        self.get(&params.append_to("/bookings")).await
    }

    pub async fn booking(&self, id: i64) -> Result<Value> {
        self.get(&format!("/bookings/{}", id)).await
    }

    pub async fn create_booking<T: Serialize + ?Sized>(&self, booking: &T) -> Result<Value> {
        self.post("/bookings", booking).await
    }

    pub async fn update_booking<T: Serialize + ?Sized>(
        &self,
        id: i64,
        booking: &T,
    ) -> Result<Value> {
        self.put(&format!("/bookings/{}", id), booking).await
    }

    /// Bookings across the calling provider's locations
    pub async fn provider_bookings(&self) -> Result<Value> {
        self.get("/bookings/provider").await
    }
}
