//! API client
//!
//! Every operation is a thin wrapper over `RequestPipeline::send`: it builds
//! the path, query and body, and returns the pipeline's result untouched.
//! Operations live next to their resource (`auth.rs`, `locations.rs`, ...).

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use vcloak_navigation::Navigator;
use vcloak_session::SessionStore;

use crate::pipeline::{RequestOptions, RequestPipeline};
use crate::Result;

#[derive(Clone)]
pub struct ApiClient {
    pipeline: RequestPipeline,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(pipeline: RequestPipeline, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            pipeline,
            navigator,
        }
    }

    pub fn pipeline(&self) -> &RequestPipeline {
        &self.pipeline
    }

    pub fn session(&self) -> &SessionStore {
        self.pipeline.session()
    }

    pub(crate) fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    pub(crate) async fn get(&self, endpoint: &str) -> Result<Value> {
        self.pipeline.send(endpoint, RequestOptions::get()).await
    }

    pub(crate) async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<Value> {
        let options = RequestOptions::method(reqwest::Method::POST).json(payload)?;
        self.pipeline.send(endpoint, options).await
    }

    pub(crate) async fn put<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<Value> {
        let options = RequestOptions::method(reqwest::Method::PUT).json(payload)?;
        self.pipeline.send(endpoint, options).await
    }

    /// PUT without a body
    pub(crate) async fn put_empty(&self, endpoint: &str) -> Result<Value> {
        self.pipeline
            .send(endpoint, RequestOptions::method(reqwest::Method::PUT))
            .await
    }

    pub(crate) async fn delete(&self, endpoint: &str) -> Result<Value> {
        self.pipeline
            .send(endpoint, RequestOptions::method(reqwest::Method::DELETE))
            .await
    }
}
