/// Per-endpoint options structs encoded as URL query parameters
pub mod requests;
/// Entities returned by the Bugsnag Data Access API
pub mod responses;

pub use requests::*;
pub use responses::*;
