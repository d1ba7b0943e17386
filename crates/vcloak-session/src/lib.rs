//! vcloak Session Management
//!
//! The session is the client-held authentication state:
//! - an access token (its presence alone means "authenticated")
//! - a refresh token, stored but never exchanged by this client
//! - the user record returned by the last login
//!
//! Each field is its own storage entry. Writes are atomic per key only.

mod error;
mod store;
mod user;

pub use error::SessionError;
pub use store::{Session, SessionStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};
pub use user::{Role, User};

pub type Result<T> = std::result::Result<T, SessionError>;
