//! # Bugsnag API Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types from the library.
//!
//! ## Usage
//!
//! ```rust
//! use bugsnag_api::prelude::*;
//!
//! let client = Client::builder()
//!     .authentication_token("token")
//!     .build()
//!     .unwrap();
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Bugsnag Data Access API client
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND PAGINATION
// ============================================================================

/// The API client and its builder
pub use crate::client::{Client, ClientBuilder};

/// Response wrapper carrying pagination metadata
pub use crate::pagination::ApiResponse;

// ============================================================================
// DATA MODEL
// ============================================================================

/// Entities returned by the API
pub use crate::model::responses::{Creator, Organization, Project};

/// Per-endpoint query options
pub use crate::model::requests::{
    ListCurrentUsersOrganizationsOptions, ListOrganizationsProjectsOptions,
};

// ============================================================================
// UTILITIES AND RE-EXPORTS
// ============================================================================

/// Logging setup helper
pub use crate::utils::logger::setup_logger;

/// Serde derive macros, re-exported for consumers defining their own payloads
pub use serde::{Deserialize, Serialize};

/// URL type used for base URLs and pagination cursors
pub use url::Url;
