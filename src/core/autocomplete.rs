//! Tab completion for command keywords and child names.
//!
//! Candidates are the cached child names of the current directory followed
//! by the static keyword list. Once the line contains a space, only the text
//! after the first space is matched, so arguments complete as well as verbs.
//! When nothing matches, every candidate is offered.

use crate::config::COMMAND_KEYWORDS;

/// Result of a completion request.
#[derive(Clone, Debug, PartialEq)]
pub struct Completion {
    /// Byte offset in the line where the replaced text starts.
    pub start: usize,
    /// Replacement candidates, in candidate-list order.
    pub candidates: Vec<String>,
}

/// Complete `line`, drawing on the current directory's `child_names`.
pub fn autocomplete(line: &str, child_names: &[String]) -> Completion {
    let start = line.find(' ').map(|idx| idx + 1).unwrap_or(0);
    let prefix = &line[start..];

    let all: Vec<String> = child_names
        .iter()
        .cloned()
        .chain(COMMAND_KEYWORDS.iter().map(|k| k.to_string()))
        .collect();

    let hits: Vec<String> = all.iter().filter(|c| c.starts_with(prefix)).cloned().collect();

    Completion {
        start,
        candidates: if hits.is_empty() { all } else { hits },
    }
}
