//! Command implementations, one module per category.

pub mod account;
pub mod general;

use crate::settings::{AssignError, AssignmentReport};

use super::{CliError, CommandResult};

/// Output of a `set` command: one line per rejected key, then `confirmation`.
///
/// A malformed batch is reported instead of the confirmation, since nothing
/// was applied or saved.
fn assignment_output(
    result: Result<AssignmentReport, AssignError>,
    confirmation: &str,
) -> CommandResult {
    match result {
        Ok(report) => {
            let mut lines = report.failure_messages();
            lines.push(confirmation.to_string());
            Ok(lines.join("\n"))
        }
        Err(e @ AssignError::IllegalArguments(_)) => Ok(e.to_string()),
        Err(AssignError::Persist(details)) => Err(CliError::Persist(details)),
    }
}
