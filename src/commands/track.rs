//! The tracking workflow: workspace → project → tag → session.
//!
//! Each step receives what the previous one resolved. A failed step returns
//! its error and the remaining steps never run.

use crate::{
    api::{Clockify, TimeTrackingApi},
    libs::{
        clock::SystemClock,
        config::Config,
        prompt::{Prompter, TerminalPrompter},
        resolver,
        session::Session,
        terminal::Screen,
        tracker::{Outcome, Tracker},
    },
};
use anyhow::Result;
use std::sync::Arc;

/// Runs one interactive tracking session against Clockify.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let api = Clockify::new(&config)?;
    let prompter: Arc<dyn Prompter> = Arc::new(TerminalPrompter);
    let tracker = Tracker::new(Arc::new(SystemClock), Arc::clone(&prompter), config.refresh_interval());

    let outcome = run(&api, prompter.as_ref(), &tracker, &config.tag_name, Screen::stdout()).await?;

    // A blocking read on stdin is still pending after Ctrl-C and would keep
    // the runtime from shutting down.
    if outcome == Outcome::Interrupted {
        std::process::exit(0);
    }
    Ok(())
}

/// Executes the four steps in order with the given collaborators.
pub async fn run<A: TimeTrackingApi>(
    api: &A,
    prompter: &dyn Prompter,
    tracker: &Tracker,
    tag_name: &str,
    screen: Screen,
) -> Result<Outcome> {
    let workspace = resolver::select_workspace(api, prompter).await?;
    let project = resolver::select_project(api, prompter, &workspace).await?;
    let tag_id = resolver::ensure_tag(api, &workspace.id, tag_name).await?;

    let session = Session::new(workspace, project, tag_id);
    tracker.track(api, &session, screen).await
}
