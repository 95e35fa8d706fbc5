/// Default base URL for the Bugsnag Data Access API.
/// Can be overridden for on-premise installations; must keep the trailing slash
pub const DEFAULT_BASE_URL: &str = "https://api.bugsnag.com/";
/// Version of the Bugsnag Data Access API this client speaks
pub const API_VERSION: &str = "2";
/// Header carrying the API version on every request
pub const HEADER_API_VERSION: &str = "X-Version";
/// Header carrying the total result count on list responses
pub const HEADER_TOTAL_COUNT: &str = "X-Total-Count";
/// Timeout in seconds applied to every request made by the client
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("bugsnag-api/", env!("CARGO_PKG_VERSION"));
