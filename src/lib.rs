//! # Bugsnag Data Access API Client
//!
//! This crate provides a thin client for the Bugsnag Data Access API.
//! It builds authenticated HTTP requests, decodes JSON payloads into typed
//! entities, and exposes the pagination metadata that Bugsnag reports through
//! response headers (`X-Total-Count` and the `Link` header).
//!
//! The client holds no per-call mutable state: a single instance can be shared
//! freely between tasks, and every operation is a single request/response
//! exchange. Retry policy, if any, belongs to the caller.
//!
//! # Example
//! ```ignore
//! use bugsnag_api::prelude::*;
//!
//! let client = Client::builder()
//!     .authentication_token("your-personal-auth-token")
//!     .build()?;
//!
//! let opts = ListCurrentUsersOrganizationsOptions::new().with_per_page(30);
//! let (orgs, response) = client.list_current_users_organizations(Some(&opts)).await?;
//!
//! for org in &orgs {
//!     println!("{} ({})", org.name, org.slug);
//! }
//!
//! // Pagination is carried as full URLs, never as offsets
//! if let Some(next) = response.next_page_url {
//!     println!("more results at {next}");
//! }
//! ```

/// Client construction, request building and request execution
pub mod client;
/// Configuration loaded from the environment or supplied programmatically
pub mod config;
/// Crate-wide constants (default base URL, API version, header names)
pub mod constants;
/// Endpoint operations grouped by API resource
pub mod endpoints;
/// Error type shared across the crate
pub mod error;
/// Response wrapper exposing pagination metadata
pub mod pagination;

/// Data model for requests and responses
pub mod model;

/// Utility helpers (environment parsing, logging setup)
pub mod utils;

/// Commonly used types, re-exported for convenience
pub mod prelude;

/// Library version, taken from the crate metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
