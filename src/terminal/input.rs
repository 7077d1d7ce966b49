//! Line sources for the read loop.
//!
//! [`EditorSource`] is the interactive front end built on `rustyline`, with
//! tab completion backed by [`autocomplete`]. [`ScriptedSource`] replays a
//! fixed list of lines and records the prompts it was shown.

use std::collections::VecDeque;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::core::autocomplete;
use crate::core::error::ShellError;

// =============================================================================
// Line Source
// =============================================================================

/// Where the read loop gets its input from.
pub trait LineSource {
    /// Show `prompt` and wait for a line. `Ok(None)` means end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;

    /// Read the answer to a yes/no question. Answers are not commands and
    /// stay out of history.
    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        self.read_line(prompt)
    }

    /// Refresh the child names offered by completion.
    fn set_child_names(&mut self, _names: Vec<String>) {}
}

// =============================================================================
// Completion Helper
// =============================================================================

/// `rustyline` helper holding a snapshot of the current child names.
///
/// The snapshot is replaced before every prompt, so completion always sees
/// the cache as it stood after the previous command.
#[derive(Default)]
pub struct ShellHelper {
    child_names: Vec<String>,
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let completion = autocomplete(&line[..pos], &self.child_names);
        let candidates = completion
            .candidates
            .into_iter()
            .map(|c| Pair {
                display: c.clone(),
                replacement: c,
            })
            .collect();
        Ok((completion.start, candidates))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}

// =============================================================================
// Interactive Source
// =============================================================================

/// Interactive line editor with in-memory history and tab completion.
pub struct EditorSource {
    editor: Editor<ShellHelper, DefaultHistory>,
}

impl EditorSource {
    pub fn new() -> Result<Self, ShellError> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(ShellHelper::default()));
        Ok(Self { editor })
    }

    /// Read one line, adding it to history when `record` is set.
    fn read(&mut self, prompt: &str, record: bool) -> Result<Option<String>, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if record && !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            // Ctrl-C drops the current line only
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        self.read(prompt, true)
    }

    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        self.read(prompt, false)
    }

    fn set_child_names(&mut self, names: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.child_names = names;
        }
    }
}

// =============================================================================
// Scripted Source
// =============================================================================

/// Replays prepared lines; runs out like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
    prompts: Vec<String>,
    answers: Vec<String>,
    child_names: Vec<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines consumed as yes/no answers rather than commands.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Child names from the most recent refresh.
    pub fn child_names(&self) -> &[String] {
        &self.child_names
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }

    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        let answer = self.read_line(prompt)?;
        self.answers.extend(answer.clone());
        Ok(answer)
    }

    fn set_child_names(&mut self, names: Vec<String>) {
        self.child_names = names;
    }
}
