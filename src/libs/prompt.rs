//! Interactive input.
//!
//! The workflow asks the user three kinds of questions: pick one of many
//! names, type some text, and press Enter to stop the timer. [`Prompter`]
//! captures exactly those, and [`TerminalPrompter`] answers them with
//! `dialoguer` widgets on the real terminal.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, FuzzySelect, Input, Select};
use std::io;

pub trait Prompter: Send + Sync {
    /// Asks the user to pick one of `options` with type-to-filter completion
    /// and returns its index.
    ///
    /// Options may repeat, so callers map the index back to their own list
    /// instead of matching on the text.
    fn choose(&self, prompt: &str, options: &[String], default: Option<usize>) -> Result<usize>;

    /// Asks the user to pick one of a short, fixed list of actions and
    /// returns its index.
    fn select(&self, prompt: &str, options: &[String]) -> Result<usize>;

    /// Reads a non-empty line of text.
    fn input(&self, prompt: &str) -> Result<String>;

    /// Blocks until the user presses Enter.
    fn wait_for_enter(&self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn choose(&self, prompt: &str, options: &[String], default: Option<usize>) -> Result<usize> {
        let theme = ColorfulTheme::default();
        let mut select = FuzzySelect::with_theme(&theme).with_prompt(prompt).items(options);
        if let Some(default) = default {
            select = select.default(default);
        }
        Ok(select.interact()?)
    }

    fn select(&self, prompt: &str, options: &[String]) -> Result<usize> {
        Ok(Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact()?)
    }

    fn input(&self, prompt: &str) -> Result<String> {
        Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()?)
    }

    fn wait_for_enter(&self) -> Result<()> {
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(())
    }
}
