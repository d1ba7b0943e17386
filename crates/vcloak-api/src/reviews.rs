//! Review operations

use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::Result;

impl ApiClient {
    pub async fn create_review<T: Serialize + ?Sized>(&self, review: &T) -> Result<Value> {
        self.post("/reviews", review).await
    }

    pub async fn location_reviews(&self, location_id: i64) -> Result<Value> {
        self.get(&format!("/reviews/location/{}", location_id))
            .await
    }
}
