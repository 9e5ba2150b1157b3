//! Work session tracking.
//!
//! A session moves through `Idle → Tracking → Reviewing` and ends either
//! saved or discarded:
//!
//! ```text
//!   Idle ──note + start──▶ Tracking ──Enter + end──▶ Reviewing ──Save───▶ POST time entry
//!                              │                          └──Discard──▶ nothing sent
//!                              └──Ctrl-C──▶ Interrupted (nothing sent)
//! ```
//!
//! While tracking, a display task repaints the elapsed time on every tick.
//! The main flow waits for Enter on the blocking pool, then hands the end
//! timestamp to the display task through a oneshot channel and awaits the
//! task before printing the summary, so the two never write at once.
//!
//! The interrupt source defaults to Ctrl-C. It is raced against both the
//! Enter key and the time-entry request, so an interrupt while saving ends
//! the run with an error instead of being swallowed.

use super::{
    clock::Clock,
    formatter::Elapsed,
    messages::Message,
    prompt::Prompter,
    session::{Session, Timing},
    terminal::Screen,
    view::View,
};
use crate::api::{TimeEntry, TimeTrackingApi};
use crate::{msg_debug, msg_error, msg_error_anyhow, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerState {
    Idle,
    Tracking { note: String, start: DateTime<Utc> },
    Reviewing(Timing),
}

/// What the user decided at the review step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Save(Timing),
    Discard,
}

/// How a tracked session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Saved(TimeEntry),
    Discarded,
    Interrupted,
}

/// A future that resolves when the user asks to abort.
pub type InterruptFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

type InterruptSource = Arc<dyn Fn() -> InterruptFuture + Send + Sync>;

pub struct Tracker {
    clock: Arc<dyn Clock>,
    prompter: Arc<dyn Prompter>,
    refresh_interval: Duration,
    interrupt: InterruptSource,
}

impl Tracker {
    pub fn new(clock: Arc<dyn Clock>, prompter: Arc<dyn Prompter>, refresh_interval: Duration) -> Self {
        Self {
            clock,
            prompter,
            refresh_interval,
            interrupt: Arc::new(ctrl_c),
        }
    }

    /// Replaces Ctrl-C as the interrupt source.
    ///
    /// `interrupt` is called once per wait and its future must resolve when
    /// the session should be aborted.
    pub fn with_interrupt<F, Fut>(mut self, interrupt: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.interrupt = Arc::new(move || -> InterruptFuture { Box::pin(interrupt()) });
        self
    }

    /// Runs a whole session for `session` and submits the entry if the user
    /// saves it.
    pub async fn track<A: TimeTrackingApi>(&self, api: &A, session: &Session, screen: Screen) -> Result<Outcome> {
        let state = self.start()?;
        let state = match self.wait_for_stop(session, state, screen).await? {
            Some(state) => state,
            None => {
                msg_warning!(Message::TrackingInterrupted);
                return Ok(Outcome::Interrupted);
            }
        };

        match self.review(session, state)? {
            Decision::Save(timing) => tokio::select! {
                created = submit(api, session, &timing) => Ok(Outcome::Saved(created?)),
                _ = (self.interrupt)() => Err(msg_error_anyhow!(Message::SubmitInterrupted)),
            },
            Decision::Discard => {
                msg_print!(Message::DiscardingTimeEntry);
                Ok(Outcome::Discarded)
            }
        }
    }

    /// `Idle → Tracking`: asks for the work note and records the start.
    pub fn start(&self) -> Result<TrackerState> {
        let note = self.prompter.input(&Message::PromptWorkNote.to_string())?;
        let start = self.clock.now();
        msg_debug!(format!("Tracking started at {}", start));
        Ok(TrackerState::Tracking { note, start })
    }

    /// `Tracking → Reviewing`: shows the live timer until the user presses
    /// Enter, then records the end.
    ///
    /// Returns `None` when the interrupt source fires first.
    pub async fn wait_for_stop(&self, session: &Session, state: TrackerState, screen: Screen) -> Result<Option<TrackerState>> {
        let TrackerState::Tracking { note, start } = state else {
            return Ok(Some(state));
        };

        let (stop_tx, stop_rx) = oneshot::channel();
        let display: JoinHandle<Result<()>> = tokio::spawn(display_loop(
            screen,
            Arc::clone(&self.clock),
            status_lines(session, &note),
            start,
            self.refresh_interval,
            stop_rx,
        ));

        let prompter = Arc::clone(&self.prompter);
        let enter = tokio::task::spawn_blocking(move || prompter.wait_for_enter());

        let stopped = tokio::select! {
            res = enter => {
                res??;
                true
            }
            _ = (self.interrupt)() => false,
        };

        let end = self.clock.now();
        // The display task may already be gone if its screen failed.
        let _ = stop_tx.send(end);
        if let Err(e) = display.await? {
            msg_debug!(format!("Tracking display stopped with an error: {}", e));
        }

        if !stopped {
            return Ok(None);
        }

        msg_debug!(format!("Tracking stopped at {}", end));
        Ok(Some(TrackerState::Reviewing(Timing { note, start, end })))
    }

    /// `Reviewing → Saved | Discarded`: prints the summary and asks whether
    /// to save, and if so whether to change the note first.
    pub fn review(&self, session: &Session, state: TrackerState) -> Result<Decision> {
        let TrackerState::Reviewing(mut timing) = state else {
            return Ok(Decision::Discard);
        };

        msg_print!(Message::AppTitle, true);
        View::summary(session, &timing.note, &timing.elapsed());

        let choice = self.prompter.select(
            &Message::PromptSaveOrDiscard.to_string(),
            &[Message::SaveOption.to_string(), Message::DiscardOption.to_string()],
        )?;
        if choice != 0 {
            return Ok(Decision::Discard);
        }

        let choice = self.prompter.select(
            &Message::PromptKeepOrChangeNote.to_string(),
            &[Message::KeepNoteOption.to_string(), Message::ChangeNoteOption.to_string()],
        )?;
        if choice == 1 {
            timing.note = self.prompter.input(&Message::PromptWorkNote.to_string())?;
        }

        Ok(Decision::Save(timing))
    }
}

/// Posts the time entry for `timing` to the session's workspace.
pub async fn submit<A: TimeTrackingApi>(api: &A, session: &Session, timing: &Timing) -> Result<TimeEntry> {
    let entry = timing.to_time_entry(session);

    match api.create_time_entry(&session.workspace.id, &entry).await {
        Ok(created) => {
            msg_success!(Message::TimeEntrySaved);
            Ok(created)
        }
        Err(e) => {
            if let Some(body) = e.body() {
                msg_error!(Message::TimeEntryResponseBody(body.to_owned()));
            }
            Err(msg_error_anyhow!(Message::TimeEntrySaveFailed(e.to_string())))
        }
    }
}

/// Resolves on Ctrl-C. Never resolves if the signal cannot be watched.
fn ctrl_c() -> InterruptFuture {
    Box::pin(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            msg_debug!(format!("Cannot listen for Ctrl-C: {}", e));
            std::future::pending::<()>().await;
        }
    })
}

/// Header lines of the live tracking screen.
fn status_lines(session: &Session, note: &str) -> Vec<String> {
    vec![
        Message::AppTitle.to_string(),
        format!("Workspace: {}", session.workspace.name),
        format!("Project: {}", session.project.name),
        format!("Work note: {}", note),
    ]
}

/// Repaints the live timer on every tick until the end timestamp arrives.
async fn display_loop(
    mut screen: Screen,
    clock: Arc<dyn Clock>,
    header: Vec<String>,
    start: DateTime<Utc>,
    interval: Duration,
    mut stop: oneshot::Receiver<DateTime<Utc>>,
) -> Result<()> {
    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            biased;
            _ = &mut stop => {
                screen.clear()?;
                return Ok(());
            }
            _ = ticker.tick() => {
                let elapsed = Elapsed::between(&start, &clock.now());
                let mut lines = header.clone();
                lines.push(Message::SummaryTimer(elapsed.to_string()).to_string());
                lines.push(String::new());
                lines.push(Message::PressEnterToStop.to_string());
                screen.redraw(&lines)?;
            }
        }
    }
}
