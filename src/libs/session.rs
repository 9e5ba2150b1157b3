//! In-memory state of one run.
//!
//! The steps hand their results forward explicitly: workspace and project
//! selection produce [`Selection`]s, the tag ensurer a tag id, and together
//! they form a [`Session`]. The tracker then produces a [`Timing`] for that
//! session. Nothing outlives the process.

use super::formatter::Elapsed;
use crate::api::{NewTimeEntry, Project, Workspace};
use chrono::{DateTime, Utc};

/// A remote entity picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub id: String,
    pub name: String,
}

impl Selection {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
        }
    }
}

impl From<&Workspace> for Selection {
    fn from(workspace: &Workspace) -> Self {
        Self::new(&workspace.id, &workspace.name)
    }
}

impl From<&Project> for Selection {
    fn from(project: &Project) -> Self {
        Self::new(&project.id, &project.name)
    }
}

/// Everything resolved before tracking starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub workspace: Selection,
    pub project: Selection,
    pub tag_id: String,
}

impl Session {
    pub fn new(workspace: Selection, project: Selection, tag_id: String) -> Self {
        Self {
            workspace,
            project,
            tag_id,
        }
    }
}

/// A finished tracking period and its note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    pub note: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Timing {
    pub fn elapsed(&self) -> Elapsed {
        Elapsed::between(&self.start, &self.end)
    }

    /// Builds the time-entry payload for `session`, tagged with its tag.
    pub fn to_time_entry(&self, session: &Session) -> NewTimeEntry {
        NewTimeEntry::new(
            self.start,
            self.end,
            &self.note,
            &session.project.id,
            vec![session.tag_id.clone()],
        )
    }
}
