//! Storage location operations

use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::query::QueryParams;
use crate::Result;

/// Nearby search radius used when the caller gives none
pub const DEFAULT_NEARBY_RADIUS: f64 = 5.0;

impl ApiClient {
    /// List locations. Filters (page, category, search, city...) go to the
    /// backend as given.
    pub async fn locations(&self, params: &QueryParams) -> Result<Value> {
        self.get(&params.append_to("/locations")).await
    }

    pub async fn location(&self, id: i64) -> Result<Value> {
        self.get(&format!("/locations/{}", id)).await
    }

    pub async fn create_location<T: Serialize + ?Sized>(&self, location: &T) -> Result<Value> {
        self.post("/locations", location).await
    }

    pub async fn update_location<T: Serialize + ?Sized>(
        &self,
        id: i64,
        location: &T,
    ) -> Result<Value> {
        self.put(&format!("/locations/{}", id), location).await
    }

    pub async fn delete_location(&self, id: i64) -> Result<Value> {
        self.delete(&format!("/locations/{}", id)).await
    }

    pub async fn nearby_locations(&self, lat: f64, lng: f64, radius: Option<f64>) -> Result<Value> {
        let radius = radius.unwrap_or(DEFAULT_NEARBY_RADIUS);
        self.get(&format!(
            "/locations/nearby?lat={}&lng={}&radius={}",
            lat, lng, radius
        ))
        .await
    }
}
