//! Command execution result type.

use crate::core::parser::PathArg;
use crate::models::OutputLine;

/// Operation deferred until the user answers a yes/no question.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingAction {
    /// Truncate an existing file to empty
    OverwriteFile(PathArg),
}

/// A question the read loop must ask before the command can finish.
#[derive(Clone, Debug, PartialEq)]
pub struct Confirmation {
    pub prompt: &'static str,
    pub action: PendingAction,
}

/// What the read loop should do after printing the output.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Read the next command
    None,
    /// Read a yes/no answer and hand it back to the session
    Confirm(Confirmation),
    /// End the session with exit code 0
    Quit,
}

/// Result of executing a command.
///
/// Commands never write to the terminal themselves; they return the lines to
/// print and the follow-up the loop has to perform.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    pub effect: Effect,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            effect: Effect::None,
        }
    }

    /// Create a result holding a single line.
    pub fn line(line: OutputLine) -> Self {
        Self::output(vec![line])
    }

    /// Create an empty result (no output, no follow-up).
    pub fn empty() -> Self {
        Self::output(vec![])
    }

    /// Ask the user before running `action`.
    pub fn confirm(prompt: &'static str, action: PendingAction) -> Self {
        Self {
            output: vec![],
            effect: Effect::Confirm(Confirmation { prompt, action }),
        }
    }

    pub fn quit() -> Self {
        Self {
            output: vec![],
            effect: Effect::Quit,
        }
    }
}
