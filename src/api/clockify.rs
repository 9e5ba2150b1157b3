use super::{ApiError, TimeTrackingApi};
use crate::libs::{config::Config, formatter::format_timestamp};
use anyhow::Result;
use chrono::{DateTime, Utc};
use rand::Rng;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, Response,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-api-key";
const USER_URL: &str = "user";
const WORKSPACES_URL: &str = "workspaces";
const PROJECTS_URL: &str = "projects";
const TAGS_URL: &str = "tags";
const TIME_ENTRIES_URL: &str = "time-entries";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub active_workspace: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Workspace {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// Created time entry as echoed back by the server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub tag_ids: Option<Vec<String>>,
}

/// Body of `POST /workspaces/{id}/projects`.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub note: String,
    pub client_id: Option<String>,
    pub is_public: bool,
    pub memberships: Vec<serde_json::Value>,
    pub billable: bool,
    pub color: String,
    pub estimate: Option<serde_json::Value>,
    pub estimate_forecast: Option<serde_json::Value>,
    pub archived: bool,
}

impl NewProject {
    /// A public, non-billable project with a random colour.
    pub fn new(name: &str, note: &str) -> Self {
        Self {
            name: name.to_owned(),
            note: note.to_owned(),
            client_id: None,
            is_public: true,
            memberships: Vec::new(),
            billable: false,
            color: random_color(),
            estimate: None,
            estimate_forecast: None,
            archived: false,
        }
    }
}

/// `#rrggbb` with a uniformly random 24-bit value.
pub fn random_color() -> String {
    let value: u32 = rand::thread_rng().gen_range(0..=0xFF_FFFF);
    format!("#{:06x}", value)
}

/// Body of `POST /workspaces/{id}/tags`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NewTag {
    pub name: String,
}

/// Body of `POST /workspaces/{id}/time-entries`.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeEntry {
    pub start: String,
    pub end: String,
    pub billable: bool,
    pub description: String,
    pub project_id: String,
    pub task_id: Option<String>,
    pub tag_ids: Vec<String>,
}

impl NewTimeEntry {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, description: &str, project_id: &str, tag_ids: Vec<String>) -> Self {
        Self {
            start: format_timestamp(&start),
            end: format_timestamp(&end),
            billable: false,
            description: description.to_owned(),
            project_id: project_id.to_owned(),
            task_id: None,
            tag_ids,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Clockify {
    client: Client,
    api_url: String,
}

impl Clockify {
    /// Builds a client authenticated with the configured API key.
    ///
    /// Fails before any request is made when the key is missing.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?;
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key).map_err(ApiError::from)?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    fn workspace_url(&self, workspace_id: &str, resource: &str) -> String {
        self.url(&format!("{}/{}/{}", WORKSPACES_URL, workspace_id, resource))
    }

    async fn get<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let res = self.client.get(&url).send().await?;
        Self::decode(res).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, url: String, body: &B) -> Result<T, ApiError> {
        tracing::debug!(%url, "POST");
        let res = self.client.post(&url).json(body).send().await?;
        Self::decode(res).await
    }

    async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
        let status = res.status();
        tracing::debug!(%status, "response");

        if !status.is_success() {
            let body = res.text().await.ok().filter(|b| !b.trim().is_empty());
            return Err(ApiError::Status { status, body });
        }

        Ok(res.json::<T>().await?)
    }
}

impl TimeTrackingApi for Clockify {
    async fn current_user(&self) -> Result<User, ApiError> {
        self.get(self.url(USER_URL)).await
    }

    async fn workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        self.get(self.url(WORKSPACES_URL)).await
    }

    async fn projects(&self, workspace_id: &str) -> Result<Vec<Project>, ApiError> {
        let url = format!("{}?archived=false", self.workspace_url(workspace_id, PROJECTS_URL));
        self.get(url).await
    }

    async fn create_project(&self, workspace_id: &str, project: &NewProject) -> Result<Project, ApiError> {
        self.post(self.workspace_url(workspace_id, PROJECTS_URL), project).await
    }

    async fn tags(&self, workspace_id: &str) -> Result<Vec<Tag>, ApiError> {
        self.get(self.workspace_url(workspace_id, TAGS_URL)).await
    }

    async fn create_tag(&self, workspace_id: &str, tag: &NewTag) -> Result<Tag, ApiError> {
        self.post(self.workspace_url(workspace_id, TAGS_URL), tag).await
    }

    async fn create_time_entry(&self, workspace_id: &str, entry: &NewTimeEntry) -> Result<TimeEntry, ApiError> {
        self.post(self.workspace_url(workspace_id, TIME_ENTRIES_URL), entry).await
    }
}
