//! Remote time-tracking API.
//!
//! The workflow only talks to the service through [`TimeTrackingApi`], which
//! keeps the steps testable against an in-memory implementation. The real
//! client is [`Clockify`].
//!
//! ```rust,no_run
//! use timetrak::api::{Clockify, TimeTrackingApi};
//! use timetrak::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let clockify = Clockify::new(&Config::read()?)?;
//! for workspace in clockify.workspaces().await? {
//!     println!("{} {}", workspace.id, workspace.name);
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

pub mod clockify;

pub use clockify::{Clockify, NewProject, NewTag, NewTimeEntry, Project, Tag, TimeEntry, User, Workspace};

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("Error: {status}")]
    Status { status: StatusCode, body: Option<String> },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid API key header: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

impl ApiError {
    /// Response body of a failed call, when the server sent one.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}

/// Operations the tracking workflow needs from the remote service.
///
/// Every method is a single request/response. Implementations must not retry.
#[allow(async_fn_in_trait)]
pub trait TimeTrackingApi {
    /// The user owning the API key.
    async fn current_user(&self) -> Result<User, ApiError>;

    async fn workspaces(&self) -> Result<Vec<Workspace>, ApiError>;

    /// Non-archived projects of a workspace.
    async fn projects(&self, workspace_id: &str) -> Result<Vec<Project>, ApiError>;

    async fn create_project(&self, workspace_id: &str, project: &NewProject) -> Result<Project, ApiError>;

    async fn tags(&self, workspace_id: &str) -> Result<Vec<Tag>, ApiError>;

    async fn create_tag(&self, workspace_id: &str, tag: &NewTag) -> Result<Tag, ApiError>;

    async fn create_time_entry(&self, workspace_id: &str, entry: &NewTimeEntry) -> Result<TimeEntry, ApiError>;
}
