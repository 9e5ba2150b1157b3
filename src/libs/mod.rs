//! Core library modules for the timetrak application.
//!
//! - **Configuration**: `config`, `data_storage`
//! - **Workflow**: `resolver`, `session`, `tracker`
//! - **User interface**: `prompt`, `terminal`, `view`, `messages`
//! - **Support**: `clock`, `formatter`, `logging`

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod prompt;
pub mod resolver;
pub mod session;
pub mod terminal;
pub mod tracker;
pub mod view;
