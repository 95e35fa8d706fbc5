use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An organization the current user belongs to
///
/// Fields map 1:1 to the Bugsnag API documentation; any field the API adds
/// beyond these is ignored on read, and absent fields take their zero value.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Organization {
    /// Whether the organization plan upgrades automatically
    pub auto_upgrade: bool,
    /// Email addresses that receive billing correspondence
    pub billing_emails: Vec<String>,
    /// URL of the organization's collaborators collection
    pub collaborators_url: String,
    /// When the organization was created
    pub created_at: DateTime<Utc>,
    /// The user that created the organization
    pub creator: Creator,
    /// Unique identifier of the organization
    pub id: String,
    /// Human-readable organization name
    pub name: String,
    /// URL of the organization's projects collection
    pub projects_url: String,
    /// URL-safe organization identifier
    pub slug: String,
    /// When the organization was last updated
    pub updated_at: DateTime<Utc>,
    /// URL of the organization's plan upgrade page
    pub upgrade_url: String,
}

/// The user that created an organization
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Creator {
    /// Email address of the creator
    pub email: String,
    /// Unique identifier of the creator
    pub id: String,
    /// Display name of the creator
    pub name: String,
}

/// A project belonging to an organization
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Project {
    /// Human-readable project name
    pub name: String,
    /// Error classes grouped globally across the project
    pub global_grouping: Vec<String>,
    /// Error classes grouped by location
    pub location_grouping: Vec<String>,
    /// App versions whose events are discarded
    pub discarded_app_versions: Vec<String>,
    /// Error classes whose events are discarded
    pub discarded_errors: Vec<String>,
    /// Domains errors are accepted from; empty accepts all
    pub url_whitelist: Vec<String>,
    /// Whether events from old browsers are ignored
    pub ignore_old_browsers: bool,
    /// Per-browser version thresholds below which events are ignored
    pub ignored_browser_versions: HashMap<String, serde_json::Value>,
    /// Whether errors are automatically resolved on deploy
    pub resolve_on_deploy: bool,
    /// Unique identifier of the project
    pub id: String,
    /// Identifier of the owning organization
    pub organization_id: String,
    /// Project platform type, e.g. `react`
    #[serde(rename = "type")]
    pub project_type: String,
    /// URL-safe project identifier
    pub slug: String,
    /// Notifier API key of the project
    pub api_key: String,
    /// Whether the current user has full access to the project
    pub is_full_view: bool,
    /// Release stages events are accepted from
    pub release_stages: Vec<String>,
    /// Primary language of the project
    pub language: String,
    /// When the project was created
    pub created_at: DateTime<Utc>,
    /// When the project was last updated
    pub updated_at: DateTime<Utc>,
    /// API URL of the project itself
    pub url: String,
    /// Dashboard URL of the project
    pub html_url: String,
    /// URL of the project's errors collection
    pub errors_url: String,
    /// URL of the project's events collection
    pub events_url: String,
    /// Number of open errors
    pub open_error_count: u32,
    /// Number of errors awaiting review
    pub for_review_error_count: u32,
    /// Number of collaborators with access to the project
    pub collaborators_count: u32,
    /// Number of teams with access to the project
    pub teams_count: u32,
    /// Number of custom event fields in use
    pub custom_event_fields_used: u32,
}
