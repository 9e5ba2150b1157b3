//! # TimeTrak
//!
//! An interactive command-line utility for tracking a work session against
//! Clockify: pick a workspace and project, start the timer, stop it with
//! Enter and save the result as a tagged time entry.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timetrak::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
