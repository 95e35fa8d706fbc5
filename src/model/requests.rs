use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::Serialize;
use url::Url;

/// Options for listing the current user's organizations
///
/// Fields left as `None` are omitted from the query string.
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize)]
pub struct ListCurrentUsersOrganizationsOptions {
    /// Whether all organizations should be returned (`false`) or only
    /// organizations that the current user is an admin of (`true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    /// The maximum number of results to return in each page of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ListCurrentUsersOrganizationsOptions {
    /// Creates empty options (no query parameters)
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the results to organizations the current user administers
    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = Some(admin);
        self
    }

    /// Sets the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// Options for listing an organization's projects
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize)]
pub struct ListOrganizationsProjectsOptions {
    /// The maximum number of results to return in each page of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// A next-page URL taken from a previous response. When set, its path and
    /// raw query are replayed verbatim and the remaining options are ignored,
    /// since the URL already carries the sort and filter state of the query
    #[serde(skip)]
    pub next_page_url: Option<Url>,
}

impl ListOrganizationsProjectsOptions {
    /// Creates empty options (no query parameters)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Continues a paginated listing from a previously returned next-page URL
    pub fn with_next_page_url(mut self, next_page_url: Url) -> Self {
        self.next_page_url = Some(next_page_url);
        self
    }
}
