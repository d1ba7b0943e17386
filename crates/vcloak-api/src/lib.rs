//! vcloak API Client
//!
//! - `RequestPipeline`: issues one HTTP call against `<origin>/api`,
//!   attaching the session's bearer token and normalizing failures
//! - `ApiClient`: the fixed catalogue of backend operations (auth,
//!   locations, bookings, reviews, admin) on top of the pipeline
//!
//! Nothing here retries, caches or refreshes tokens.

mod admin;
mod auth;
mod bookings;
mod client;
mod error;
mod locations;
mod models;
mod pipeline;
mod query;
mod reviews;

pub use client::ApiClient;
pub use error::ApiError;
pub use locations::DEFAULT_NEARBY_RADIUS;
pub use models::{Credentials, Registration};
pub use pipeline::{RequestOptions, RequestPipeline, DEFAULT_ERROR_MESSAGE};
pub use query::QueryParams;
pub use reqwest::Method;

pub type Result<T> = std::result::Result<T, ApiError>;
