//! The read-eval-print loop.
//!
//! Strictly sequential: one line is parsed, executed and printed before the
//! next is read. A command that needs confirmation suspends the loop on a
//! nested yes/no read, then resumes through [`Session::resolve`].

use std::io::Write;

use tracing::debug;

use super::input::LineSource;
use super::output::write_lines;
use crate::core::error::ShellError;
use crate::core::{Effect, Session};

/// Answer that confirms a pending operation; anything else declines.
const CONFIRM_YES: &str = "y";

/// Run the session until `exit`/`quit` or end of input.
pub fn run<S, W>(
    session: &mut Session,
    source: &mut S,
    out: &mut W,
    color: bool,
) -> Result<(), ShellError>
where
    S: LineSource,
    W: Write,
{
    loop {
        source.set_child_names(session.child_names());
        let Some(line) = source.read_line(&session.prompt())? else {
            debug!("end of input");
            return Ok(());
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut result = session.run_line(line);
        loop {
            write_lines(out, &result.output, color)?;
            match result.effect {
                Effect::None => break,
                Effect::Quit => return Ok(()),
                Effect::Confirm(confirmation) => {
                    let answer = source.read_answer(confirmation.prompt)?;
                    let accepted = answer.as_deref().map(str::trim) == Some(CONFIRM_YES);
                    result = session.resolve(confirmation.action, accepted);
                }
            }
        }
    }
}
