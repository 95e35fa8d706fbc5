/// Listing the current user's organizations
pub mod organizations;
/// Listing an organization's projects
pub mod projects;
