use super::{formatter::Elapsed, session::Session};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Table shown before the user decides to save or discard.
    pub fn summary_table(session: &Session, note: &str, elapsed: &Elapsed) -> Table {
        let mut table = Table::new();

        table.add_row(row!["WORKSPACE", session.workspace.name]);
        table.add_row(row!["PROJECT", session.project.name]);
        table.add_row(row!["WORK NOTE", note]);
        table.add_row(row!["TIME", elapsed]);
        table
    }

    pub fn summary(session: &Session, note: &str, elapsed: &Elapsed) {
        Self::summary_table(session, note, elapsed).printstd();
    }
}
