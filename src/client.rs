//! Client for the Bugsnag Data Access API
//!
//! This module provides the [`Client`] shared by every endpoint operation:
//! - Request construction (URL resolution, JSON body, authentication headers)
//! - Request execution with a fixed timeout and typed JSON decoding
//! - Extraction of pagination metadata from response headers
//!
//! # Example
//! ```ignore
//! use bugsnag_api::client::Client;
//!
//! let client = Client::builder()
//!     .authentication_token("your-personal-auth-token")
//!     .build()?;
//!
//! let (orgs, response) = client.list_current_users_organizations(None).await?;
//! ```

use crate::config::Config;
use crate::constants::{
    API_VERSION, DEFAULT_BASE_URL, HEADER_API_VERSION, REQUEST_TIMEOUT_SECS, USER_AGENT,
};
use crate::error::AppError;
use crate::pagination::ApiResponse;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpInternalClient, Method, Request, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Client for the Bugsnag Data Access API
///
/// The client is immutable after construction and holds no per-call state, so
/// a single instance can serve concurrent callers. Each operation is one
/// request/response exchange with a fixed 30-second timeout ceiling; dropping
/// the returned future aborts the in-flight request.
pub struct Client {
    base_url: Url,
    authentication_token: Option<String>,
    http_client: HttpInternalClient,
}

/// Builder for [`Client`]
///
/// Setters are infallible; validation happens in a single pass when
/// [`ClientBuilder::build`] is called.
pub struct ClientBuilder {
    base_url: String,
    authentication_token: Option<String>,
    timeout: u64,
}

impl ClientBuilder {
    /// Overrides the base URL of the API client.
    /// The provided URL must end with a trailing slash
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the personal authentication token sent with every request
    pub fn authentication_token(mut self, token: impl Into<String>) -> Self {
        self.authentication_token = Some(token.into());
        self
    }

    /// Validates the configuration and builds the client
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the base URL cannot be parsed or its path does
    ///   not end with a trailing slash
    pub fn build(self) -> Result<Client, AppError> {
        let base_url = Url::parse(&self.base_url)?;
        if !base_url.path().ends_with('/') {
            return Err(AppError::Config(
                "base URL must have a trailing slash".to_string(),
            ));
        }

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(self.timeout))
            .build()?;

        Ok(Client {
            base_url,
            authentication_token: self.authentication_token,
            http_client,
        })
    }
}

impl Client {
    /// Returns a builder preconfigured with the public Bugsnag API URL,
    /// no authentication token and the default timeout
    pub fn builder() -> ClientBuilder {
        ClientBuilder {
            base_url: DEFAULT_BASE_URL.to_string(),
            authentication_token: None,
            timeout: REQUEST_TIMEOUT_SECS,
        }
    }

    /// Creates a client for the public Bugsnag API without authentication
    pub fn new() -> Result<Self, AppError> {
        Self::builder().build()
    }

    /// Creates a client from a [`Config`], typically loaded from the environment
    pub fn with_config(config: &Config) -> Result<Self, AppError> {
        let mut builder = Self::builder().base_url(&config.base_url);
        if let Some(token) = &config.authentication_token {
            builder = builder.authentication_token(token);
        }
        builder.timeout = config.timeout;
        builder.build()
    }

    /// The base URL all relative API paths are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Creates an API request
    ///
    /// Resolves `path` against the base URL (absolute URLs override it),
    /// appends the query parameters serialized from `query` and attaches the
    /// JSON-encoded `body` when present. The body is encoded with
    /// `serde_json`, which performs no HTML escaping, so characters such as
    /// `&` and `<` embedded in string values reach the server unmangled.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path relative to the base URL, or an absolute URL
    /// * `query` - Optional options struct serialized as query parameters;
    ///   `None` fields are omitted
    /// * `body` - Optional value serialized as the JSON request payload
    pub fn request<Q: Serialize, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Request, AppError> {
        let url = self.base_url.join(path)?;

        let mut request = self
            .http_client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(HEADER_API_VERSION, API_VERSION);

        if let Some(q) = query {
            request = request.query(q);
        }

        if let Some(token) = &self.authentication_token {
            request = request.header(AUTHORIZATION, format!("token {token}"));
        }

        if let Some(b) = body {
            let payload = serde_json::to_vec(b)?;
            request = request.header(CONTENT_TYPE, "application/json").body(payload);
        }

        Ok(request.build()?)
    }

    /// Executes a prepared request and decodes the JSON response body
    ///
    /// Any status code other than 200 is returned as
    /// [`AppError::Unexpected`] carrying the code. An empty response body is
    /// treated as success and yields `T::default()`.
    ///
    /// # Arguments
    /// * `request` - A request created with [`Client::request`]
    ///
    /// # Returns
    /// * `Ok((T, ApiResponse))` - Decoded body plus pagination metadata
    /// * `Err(AppError)` - If the exchange or decoding fails
    pub async fn execute<T: DeserializeOwned + Default>(
        &self,
        request: Request,
    ) -> Result<(T, ApiResponse), AppError> {
        debug!("{} {}", request.method(), request.url());

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let api_response = ApiResponse::from_headers(status, response.headers())?;

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok((T::default(), api_response));
        }

        let decoded = serde_json::from_slice(&body)
            .map_err(|err| AppError::Deserialization(err.to_string()))?;

        Ok((decoded, api_response))
    }
}
