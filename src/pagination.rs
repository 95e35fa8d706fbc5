//! Pagination metadata extracted from Bugsnag response headers
//!
//! List responses report the total number of matching results in the
//! `X-Total-Count` header and carry the next page of results as a complete
//! URL inside the `Link` header. The next-page URL embeds the sort and filter
//! state of the query, so callers must replay it verbatim rather than derive
//! an offset of their own.

use crate::constants::HEADER_TOTAL_COUNT;
use crate::error::AppError;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, LINK};
use url::Url;

/// A Bugsnag API response
///
/// Wraps the interesting parts of the underlying HTTP response and provides
/// pagination controls. Both fields are absent when the server does not
/// provide the corresponding header.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code of the response
    pub status: StatusCode,
    /// Total count of all results across every page, when reported
    pub total_count: Option<i64>,
    /// URL of the next page of results, when one exists.
    /// Feed it back through the endpoint options to fetch the next page
    pub next_page_url: Option<Url>,
}

impl ApiResponse {
    /// Builds the response wrapper from a status code and response headers
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - Wrapper with any pagination metadata present
    /// * `Err(AppError)` - If `X-Total-Count` is present but not numeric
    pub fn from_headers(status: StatusCode, headers: &HeaderMap) -> Result<Self, AppError> {
        let total_count = match headers.get(HEADER_TOTAL_COUNT) {
            Some(value) => {
                let raw = value
                    .to_str()
                    .map_err(|_| AppError::InvalidTotalCount(format!("{value:?}")))?;
                let count = raw
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| AppError::InvalidTotalCount(raw.to_string()))?;
                Some(count)
            }
            None => None,
        };

        Ok(Self {
            status,
            total_count,
            next_page_url: next_page_url(headers),
        })
    }
}

/// Scans the `Link` header(s) for a `rel="next"` entry and returns its URL.
///
/// Each header value is a comma-separated list of entries of the form
/// `<https://...>; rel="..."`. An entry needs at least a href and a relation;
/// the href must be wrapped in angle brackets; the relation must equal
/// exactly `rel="next"`. Malformed entries are skipped, and the first
/// well-formed match wins.
fn next_page_url(headers: &HeaderMap) -> Option<Url> {
    for value in headers.get_all(LINK) {
        let Ok(value) = value.to_str() else {
            continue;
        };

        for link in value.split(',') {
            let segments: Vec<&str> = link.trim().split(';').collect();

            // a link must contain at least a href and a relation
            if segments.len() < 2 {
                continue;
            }

            let href = segments[0];
            if !href.starts_with('<') || !href.ends_with('>') {
                continue;
            }

            if segments[1].trim() != r#"rel="next""# {
                continue;
            }

            // parse the URL first to ensure it is well formed
            if let Ok(url) = Url::parse(&href[1..href.len() - 1]) {
                return Some(url);
            }
        }
    }

    None
}
