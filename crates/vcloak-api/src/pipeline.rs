//! Request pipeline
//!
//! One `send` per backend call:
//! 1. resolve `<origin>/api` + endpoint
//! 2. merge headers (caller values win over defaults)
//! 3. attach `Authorization: Bearer <token>` when the session has one
//! 4. parse the body as JSON, success or not
//!
//! An empty or non-JSON body fails even on 2xx. That matches what the web
//! client always did and is kept visible rather than papered over.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use url::Url;
use vcloak_session::SessionStore;

use crate::error::ApiError;
use crate::Result;

pub const DEFAULT_ERROR_MESSAGE: &str = "Request failed";

/// Per-call request descriptor
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Pre-serialized payload, sent as is
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn json<T: Serialize + ?Sized>(self, payload: &T) -> Result<Self> {
        let body = serde_json::to_string(payload).map_err(ApiError::Serialize)?;
        Ok(self.body(body))
    }
}

#[derive(Clone)]
pub struct RequestPipeline {
    client: Client,
    base_url: String,
    session: SessionStore,
}

impl RequestPipeline {
    pub fn new(origin: &Url, session: SessionStore) -> Self {
        Self::with_client(Client::new(), origin, session)
    }

    pub fn with_client(client: Client, origin: &Url, session: SessionStore) -> Self {
        let base_url = format!("{}/api", origin.origin().ascii_serialization());
        tracing::debug!(base_url = %base_url, "Created request pipeline");

        Self {
            client,
            base_url,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Issue a request and return the parsed JSON body.
    ///
    /// Failures are logged here and returned unchanged to the caller.
    pub async fn send(&self, endpoint: &str, options: RequestOptions) -> Result<Value> {
        let method = options.method.clone();
        match self.execute(endpoint, options).await {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    method = %method,
                    endpoint = %endpoint,
                    status = ?e.status(),
                    error = %e,
                    "API error"
                );
                Err(e)
            }
        }
    }

    async fn execute(&self, endpoint: &str, options: RequestOptions) -> Result<Value> {
        let url = self.resolve(endpoint)?;
        let headers = self.build_headers(&options.headers)?;

        let mut request = self
            .client
            .request(options.method.clone(), url)
            .headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::Transport)?;
        let parsed = serde_json::from_str::<Value>(&text);

        tracing::debug!(
            method = %options.method,
            endpoint = %endpoint,
            status = status.as_u16(),
            "API response"
        );

        if status.is_success() {
            return parsed.map_err(|source| ApiError::InvalidBody {
                status: status.as_u16(),
                source,
            });
        }

        let message = parsed
            .ok()
            .as_ref()
            .and_then(|body| body.get("error"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_ERROR_MESSAGE)
            .to_string();

        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }

    fn resolve(&self, endpoint: &str) -> Result<Url> {
        let full = format!("{}{}", self.base_url, endpoint);
        Url::parse(&full).map_err(|source| ApiError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    fn build_headers(&self, overrides: &[(String, String)]) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in overrides {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ApiError::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| ApiError::InvalidHeader(name.as_str().to_string()))?;
            headers.insert(name, value);
        }

        if self.session.is_authenticated() {
            if let Some(token) = self.session.access_token()? {
                let value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| ApiError::InvalidHeader(AUTHORIZATION.as_str().to_string()))?;
                headers.insert(AUTHORIZATION, value);
            }
        }

        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use vcloak_storage::MemoryStorage;

    fn pipeline(origin: &str) -> RequestPipeline {
        let session = SessionStore::new(Arc::new(MemoryStorage::new()));
        RequestPipeline::new(&Url::parse(origin).unwrap(), session)
    }

    #[test]
    fn test_base_url_from_origin() {
        let p = pipeline("https://vcloak.test/frontend/index.html");
        assert_eq!(p.base_url(), "https://vcloak.test/api");

        let p = pipeline("http://localhost:5000");
        assert_eq!(p.base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn test_default_headers() {
        let p = pipeline("https://vcloak.test");
        let headers = p.build_headers(&[]).unwrap();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_caller_content_type_wins() {
        let p = pipeline("https://vcloak.test");
        let headers = p
            .build_headers(&[("content-type".to_string(), "text/plain".to_string())])
            .unwrap();
        assert_eq!(headers[CONTENT_TYPE], "text/plain");
        assert_eq!(headers.get_all(CONTENT_TYPE).iter().count(), 1);
    }

    #[test]
    fn test_bearer_token_injected() {
        let p = pipeline("https://vcloak.test");
        p.session().set_access_token("tok").unwrap();

        let headers = p
            .build_headers(&[("Authorization".to_string(), "Basic abc".to_string())])
            .unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer tok");
    }

    #[test]
    fn test_invalid_header_name() {
        let p = pipeline("https://vcloak.test");
        let result = p.build_headers(&[("bad header".to_string(), "x".to_string())]);
        assert!(matches!(result, Err(ApiError::InvalidHeader(_))));
    }

    #[test]
    fn test_json_options() {
        let options = RequestOptions::method(Method::POST)
            .json(&serde_json::json!({ "verify_locations": true }))
            .unwrap();
        assert_eq!(options.method, Method::POST);
        assert_eq!(options.body.as_deref(), Some(r#"{"verify_locations":true}"#));
    }
}
