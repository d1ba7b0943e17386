//! vcloak Navigation
//!
//! Pages the client can send the user to, and the `Navigator` seam through
//! which session code performs those redirects:
//! - logout → landing page
//! - expired session or missing token → login page
//! - role mismatch → landing page

mod navigator;
mod page;

pub use navigator::{NavigationEntry, NavigationLog, Navigator};
pub use page::Page;
