//! Workspace, project and tag resolution.
//!
//! Each resolver lists the remote entities, lets the user pick one and
//! returns the **identifier** of the picked row. Rows are matched by position,
//! so entities sharing a name stay distinguishable. A failed request is
//! turned into an error for the caller; nothing is retried.

use super::{messages::Message, prompt::Prompter, session::Selection};
use crate::api::{NewProject, NewTag, TimeTrackingApi};
use crate::{msg_bail_anyhow, msg_debug, msg_error_anyhow, msg_info, msg_success};
use anyhow::Result;

/// Fetches the workspaces and asks the user to choose one.
///
/// The user's active workspace, when the API reports one, is preselected.
pub async fn select_workspace<A: TimeTrackingApi>(api: &A, prompter: &dyn Prompter) -> Result<Selection> {
    let workspaces = api
        .workspaces()
        .await
        .map_err(|e| msg_error_anyhow!(Message::WorkspaceFetchFailed(e.to_string())))?;

    if workspaces.is_empty() {
        msg_bail_anyhow!(Message::NoWorkspacesFound);
    }

    let active_workspace = match api.current_user().await {
        Ok(user) => user.active_workspace,
        Err(e) => {
            msg_debug!(format!("Could not read the current user: {}", e));
            None
        }
    };
    let default = active_workspace.and_then(|id| workspaces.iter().position(|w| w.id == id));

    let names: Vec<String> = workspaces.iter().map(|w| w.name.clone()).collect();
    let index = prompter.choose(&Message::PromptChooseWorkspace.to_string(), &names, default)?;

    let workspace = workspaces
        .get(index)
        .map(Selection::from)
        .ok_or_else(|| msg_error_anyhow!(Message::WorkspaceNotFound(index)))?;

    msg_info!(Message::WorkspaceSelected(workspace.name.clone(), workspace.id.clone()));
    Ok(workspace)
}

/// Fetches the active projects of `workspace` and asks the user to choose
/// one, or to create a new project instead.
pub async fn select_project<A: TimeTrackingApi>(api: &A, prompter: &dyn Prompter, workspace: &Selection) -> Result<Selection> {
    let projects = api
        .projects(&workspace.id)
        .await
        .map_err(|e| msg_error_anyhow!(Message::ProjectFetchFailed(e.to_string())))?;

    // The create option is always the last row.
    let mut names: Vec<String> = projects.iter().map(|p| p.name.clone()).collect();
    names.push(Message::CreateNewProjectOption.to_string());

    let index = prompter.choose(&Message::PromptChooseProject.to_string(), &names, None)?;

    let project = if index == projects.len() {
        create_project(api, prompter, workspace).await?
    } else {
        projects
            .get(index)
            .map(Selection::from)
            .ok_or_else(|| msg_error_anyhow!(Message::ProjectNotFound(index)))?
    };

    msg_info!(Message::ProjectSelected(project.name.clone(), project.id.clone()));
    Ok(project)
}

/// Asks for a project name and creates a public, non-billable project with a
/// random colour in `workspace`.
pub async fn create_project<A: TimeTrackingApi>(api: &A, prompter: &dyn Prompter, workspace: &Selection) -> Result<Selection> {
    let name = prompter.input(&Message::PromptProjectName.to_string())?;
    let project = NewProject::new(name.trim(), &Message::CreatedProjectNote.to_string());
    msg_debug!(format!("Creating project '{}' with colour {}", project.name, project.color));

    let created = api
        .create_project(&workspace.id, &project)
        .await
        .map_err(|e| msg_error_anyhow!(Message::ProjectCreateFailed(e.to_string())))?;

    msg_success!(Message::ProjectCreated(created.name.clone()));
    Ok(Selection::from(&created))
}

/// Returns the id of the tag named `tag_name` in `workspace_id`, creating the
/// tag when it does not exist yet.
///
/// Calling this repeatedly never creates more than one tag.
pub async fn ensure_tag<A: TimeTrackingApi>(api: &A, workspace_id: &str, tag_name: &str) -> Result<String> {
    let tags = api
        .tags(workspace_id)
        .await
        .map_err(|e| msg_error_anyhow!(Message::TagFetchFailed(e.to_string())))?;

    if let Some(tag) = tags.iter().find(|t| t.name == tag_name) {
        msg_debug!(Message::TagReused(tag.name.clone(), tag.id.clone()));
        return Ok(tag.id.clone());
    }

    let tag = api
        .create_tag(
            workspace_id,
            &NewTag {
                name: tag_name.to_owned(),
            },
        )
        .await
        .map_err(|e| msg_error_anyhow!(Message::TagCreateFailed(e.to_string())))?;

    msg_debug!(Message::TagCreated(tag.name.clone(), tag.id.clone()));
    Ok(tag.id)
}
