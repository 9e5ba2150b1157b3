#![allow(dead_code)]

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use timetrak::api::{ApiError, NewProject, NewTag, NewTimeEntry, Project, Tag, TimeEntry, TimeTrackingApi, User, Workspace};
use timetrak::libs::clock::Clock;
use timetrak::libs::prompt::Prompter;
use timetrak::libs::session::{Selection, Session};
use timetrak::libs::terminal::Screen;
use timetrak::libs::tracker::Tracker;

pub fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, h, m, s).unwrap()
}

pub fn sink_screen() -> Screen {
    Screen::new(Box::new(std::io::sink()))
}

/// Writer that keeps everything a `Screen` draws readable by the test.
#[derive(Clone, Default)]
pub struct CapturedScreen(Arc<Mutex<Vec<u8>>>);

impl CapturedScreen {
    pub fn screen(&self) -> Screen {
        Screen::new(Box::new(self.clone()))
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedScreen {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn session() -> Session {
    Session::new(Selection::new("w1", "Acme"), Selection::new("p1", "Website"), "t1".to_string())
}

/// In-memory Clockify stand-in that records every write.
#[derive(Default)]
pub struct MockApi {
    pub user: Option<User>,
    pub workspaces: Vec<Workspace>,
    pub projects: Mutex<Vec<Project>>,
    pub tags: Mutex<Vec<Tag>>,
    pub fail_workspaces: Option<StatusCode>,
    pub fail_projects: Option<StatusCode>,
    pub fail_create_project: Option<StatusCode>,
    pub fail_tags: Option<StatusCode>,
    pub fail_time_entry: Option<(StatusCode, String)>,
    pub stall_time_entry: bool,
    pub created_projects: Mutex<Vec<NewProject>>,
    pub created_tags: Mutex<Vec<NewTag>>,
    pub time_entries: Mutex<Vec<(String, NewTimeEntry)>>,
}

impl MockApi {
    pub fn new(workspaces: &[(&str, &str)], projects: &[(&str, &str)], tags: &[(&str, &str)]) -> Self {
        Self {
            workspaces: workspaces
                .iter()
                .map(|(id, name)| Workspace {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
            projects: Mutex::new(
                projects
                    .iter()
                    .map(|(id, name)| Project {
                        id: id.to_string(),
                        name: name.to_string(),
                    })
                    .collect(),
            ),
            tags: Mutex::new(
                tags.iter()
                    .map(|(id, name)| Tag {
                        id: id.to_string(),
                        name: name.to_string(),
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }

    pub fn with_active_workspace(mut self, workspace_id: &str) -> Self {
        self.user = Some(User {
            id: "u1".to_string(),
            name: "Test User".to_string(),
            email: None,
            active_workspace: Some(workspace_id.to_string()),
        });
        self
    }

    pub fn submissions(&self) -> Vec<(String, NewTimeEntry)> {
        self.time_entries.lock().unwrap().clone()
    }

    fn status(status: StatusCode) -> ApiError {
        ApiError::Status { status, body: None }
    }
}

impl TimeTrackingApi for MockApi {
    async fn current_user(&self) -> Result<User, ApiError> {
        self.user.clone().ok_or(Self::status(StatusCode::NOT_FOUND))
    }

    async fn workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        match self.fail_workspaces {
            Some(status) => Err(Self::status(status)),
            None => Ok(self.workspaces.clone()),
        }
    }

    async fn projects(&self, _workspace_id: &str) -> Result<Vec<Project>, ApiError> {
        match self.fail_projects {
            Some(status) => Err(Self::status(status)),
            None => Ok(self.projects.lock().unwrap().clone()),
        }
    }

    async fn create_project(&self, _workspace_id: &str, project: &NewProject) -> Result<Project, ApiError> {
        if let Some(status) = self.fail_create_project {
            return Err(Self::status(status));
        }
        let mut created = self.created_projects.lock().unwrap();
        created.push(project.clone());
        let project = Project {
            id: format!("new-p{}", created.len()),
            name: project.name.clone(),
        };
        self.projects.lock().unwrap().push(project.clone());
        Ok(project)
    }

    async fn tags(&self, _workspace_id: &str) -> Result<Vec<Tag>, ApiError> {
        match self.fail_tags {
            Some(status) => Err(Self::status(status)),
            None => Ok(self.tags.lock().unwrap().clone()),
        }
    }

    async fn create_tag(&self, _workspace_id: &str, tag: &NewTag) -> Result<Tag, ApiError> {
        let mut created = self.created_tags.lock().unwrap();
        created.push(tag.clone());
        let tag = Tag {
            id: format!("t{}", created.len()),
            name: tag.name.clone(),
        };
        self.tags.lock().unwrap().push(tag.clone());
        Ok(tag)
    }

    async fn create_time_entry(&self, workspace_id: &str, entry: &NewTimeEntry) -> Result<TimeEntry, ApiError> {
        if self.stall_time_entry {
            std::future::pending::<()>().await;
        }
        if let Some((status, body)) = &self.fail_time_entry {
            return Err(ApiError::Status {
                status: *status,
                body: Some(body.clone()),
            });
        }
        let mut entries = self.time_entries.lock().unwrap();
        entries.push((workspace_id.to_string(), entry.clone()));
        Ok(TimeEntry {
            id: format!("e{}", entries.len()),
            description: Some(entry.description.clone()),
            project_id: Some(entry.project_id.clone()),
            tag_ids: Some(entry.tag_ids.clone()),
        })
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self { now: Mutex::new(now) })
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[derive(Debug, Clone)]
pub enum Answer {
    /// Picks the first row with this text.
    Choose(String),
    /// Picks a row by position.
    ChooseRow(usize),
    Select(usize),
    Input(String),
}

/// Prompter answering from a fixed script, in order.
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    on_enter: Option<Box<dyn Fn() + Send + Sync>>,
    pub asked: Mutex<Vec<(String, Vec<String>, Option<usize>)>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            on_enter: None,
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Runs `f` when the user "presses Enter", e.g. to move a clock forward.
    pub fn on_enter<F: Fn() + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.on_enter = Some(Box::new(f));
        self
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    fn next(&self, prompt: &str) -> Result<Answer> {
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no scripted answer for '{}'", prompt))
    }
}

impl Prompter for ScriptedPrompter {
    fn choose(&self, prompt: &str, options: &[String], default: Option<usize>) -> Result<usize> {
        self.asked.lock().unwrap().push((prompt.to_string(), options.to_vec(), default));
        match self.next(prompt)? {
            Answer::Choose(choice) => options
                .iter()
                .position(|o| *o == choice)
                .ok_or_else(|| anyhow::anyhow!("'{}' is not offered for '{}'", choice, prompt)),
            Answer::ChooseRow(row) => Ok(row),
            other => anyhow::bail!("expected a choice for '{}', got {:?}", prompt, other),
        }
    }

    fn select(&self, prompt: &str, options: &[String]) -> Result<usize> {
        self.asked.lock().unwrap().push((prompt.to_string(), options.to_vec(), None));
        match self.next(prompt)? {
            Answer::Select(index) => Ok(index),
            other => anyhow::bail!("expected a selection for '{}', got {:?}", prompt, other),
        }
    }

    fn input(&self, prompt: &str) -> Result<String> {
        match self.next(prompt)? {
            Answer::Input(text) => Ok(text),
            other => anyhow::bail!("expected input for '{}', got {:?}", prompt, other),
        }
    }

    fn wait_for_enter(&self) -> Result<()> {
        if let Some(on_enter) = &self.on_enter {
            on_enter();
        }
        Ok(())
    }
}

/// Tracker wired to `clock` and `prompter` with a fast refresh.
pub fn tracker(clock: Arc<ManualClock>, prompter: Arc<ScriptedPrompter>) -> Tracker {
    Tracker::new(clock, prompter, Duration::from_millis(10))
}
