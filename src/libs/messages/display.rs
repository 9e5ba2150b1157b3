//! Display implementation for timetrak application messages.
//!
//! Every user-facing string lives here, so prompts, summaries and error
//! reports share one tone and can be changed in one place. Variants carrying
//! data interpolate it with plain `format!` rules.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === APPLICATION MESSAGES ===
            Message::AppTitle => "TimeTrak".to_string(),
            Message::PressEnterToStop => "Press enter to stop tracking".to_string(),
            Message::TrackingInterrupted => "Tracking interrupted, time entry discarded".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ApiKeyMissing => "CLOCKIFY_API_KEY is not set. Export it or add it to a .env file".to_string(),
            Message::ConfigParseError(err) => format!("Failed to parse configuration: {}", err),
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path),

            // === WORKSPACE MESSAGES ===
            Message::PromptChooseWorkspace => "Choose a workspace".to_string(),
            Message::NoWorkspacesFound => "No workspaces found for this API key".to_string(),
            Message::WorkspaceNotFound(row) => format!("No workspace at row {}", row),
            Message::WorkspaceSelected(name, id) => format!("Selected workspace: {} ({})", name, id),
            Message::WorkspaceFetchFailed(err) => format!("Failed to fetch workspaces: {}", err),

            // === PROJECT MESSAGES ===
            Message::PromptChooseProject => "Choose a project".to_string(),
            Message::PromptProjectName => "Enter project name".to_string(),
            Message::CreateNewProjectOption => "Create new project".to_string(),
            Message::CreatedProjectNote => "TimeTrak created project".to_string(),
            Message::ProjectNotFound(row) => format!("No project at row {}", row),
            Message::ProjectSelected(name, id) => format!("Selected project: {} ({})", name, id),
            Message::ProjectCreated(name) => format!("Project '{}' created successfully!", name),
            Message::ProjectCreateFailed(err) => format!("Error creating project: {}", err),
            Message::ProjectFetchFailed(err) => format!("Failed to fetch projects: {}", err),

            // === TAG MESSAGES ===
            Message::TagReused(name, id) => format!("Using tag '{}' ({})", name, id),
            Message::TagCreated(name, id) => format!("Tag '{}' created ({})", name, id),
            Message::TagFetchFailed(err) => format!("Failed to fetch tags: {}", err),
            Message::TagCreateFailed(err) => format!("Failed to create tag: {}", err),

            // === SESSION MESSAGES ===
            Message::PromptWorkNote => "Enter work note".to_string(),
            Message::SummaryTimer(elapsed) => format!("Timer: {}", elapsed),
            Message::PromptSaveOrDiscard => "Save or discard time entry?".to_string(),
            Message::SaveOption => "Save".to_string(),
            Message::DiscardOption => "Discard".to_string(),
            Message::PromptKeepOrChangeNote => "Keep or change work note?".to_string(),
            Message::KeepNoteOption => "Keep work note".to_string(),
            Message::ChangeNoteOption => "Change work note".to_string(),
            Message::DiscardingTimeEntry => "Discarding time entry".to_string(),
            Message::TimeEntrySaved => "Time entry saved successfully!".to_string(),
            Message::TimeEntrySaveFailed(err) => format!("Failed to save time entry: {}", err),
            Message::SubmitInterrupted => {
                "Interrupted while saving the time entry, check Clockify before tracking it again".to_string()
            }
            Message::TimeEntryResponseBody(body) => format!("Response: {}", body),
        };

        write!(f, "{}", text)
    }
}
