//! Command line classification.
//!
//! A trimmed input line is matched against an ordered rule table; the first
//! rule that accepts the line decides the [`Command`]. Verb rules take
//! exactly one whitespace-free argument, extracted as everything after the
//! verb, trimmed.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A name argument passed to a command (e.g., `cd docs`, `cat notes.txt`).
///
/// Stored as typed; existence and type are checked at execution time
/// against the current directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for PathArg {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed shell command
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// `ls` / `ll`
    List,
    /// `touch <name>`
    CreateFile(PathArg),
    /// `mkdir <name>`
    MakeDirectory(PathArg),
    /// `cd <name>`
    ChangeDirectory(PathArg),
    /// `cd ..`
    GoBack,
    /// `rm <name>`
    Remove(PathArg),
    /// `cat <name>`
    ShowFile(PathArg),
    /// `exit` / `quit`
    Quit,
    /// Anything else, kept verbatim for logging
    Unknown(String),
}

// =============================================================================
// Rule Table
// =============================================================================

enum Matcher {
    /// Whole line equals one of the literals.
    Exact(&'static [&'static str]),
    /// Verb, whitespace, one word token; the verb is the argument offset.
    Verb(&'static str, Regex),
}

struct Rule {
    matcher: Matcher,
    build: fn(&str) -> Command,
}

impl Rule {
    fn exact(literals: &'static [&'static str], build: fn(&str) -> Command) -> Self {
        Self {
            matcher: Matcher::Exact(literals),
            build,
        }
    }

    fn verb(verb: &'static str, build: fn(&str) -> Command) -> Self {
        let pattern = format!(r"^{}\s+\S+$", regex::escape(verb));
        let regex = Regex::new(&pattern).expect("verb patterns are static and valid");
        Self {
            matcher: Matcher::Verb(verb, regex),
            build,
        }
    }

    fn apply(&self, line: &str) -> Option<Command> {
        match &self.matcher {
            Matcher::Exact(literals) => literals
                .iter()
                .any(|literal| *literal == line)
                .then(|| (self.build)("")),
            Matcher::Verb(verb, regex) => regex
                .is_match(line)
                .then(|| (self.build)(line[verb.len()..].trim())),
        }
    }
}

/// Rules in precedence order. `cd ..` sits before the generic `cd` rule
/// because `..` is itself a valid word token.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::exact(&["ls", "ll"], |_| Command::List),
        Rule::verb("touch", |arg| Command::CreateFile(PathArg::new(arg))),
        Rule::verb("mkdir", |arg| Command::MakeDirectory(PathArg::new(arg))),
        Rule::exact(&["cd .."], |_| Command::GoBack),
        Rule::verb("cd", |arg| Command::ChangeDirectory(PathArg::new(arg))),
        Rule::verb("rm", |arg| Command::Remove(PathArg::new(arg))),
        Rule::verb("cat", |arg| Command::ShowFile(PathArg::new(arg))),
        Rule::exact(&["exit", "quit"], |_| Command::Quit),
    ]
});

impl Command {
    /// Classify a raw input line. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Self {
        let line = input.trim();
        RULES
            .iter()
            .find_map(|rule| rule.apply(line))
            .unwrap_or_else(|| Self::Unknown(line.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(Command::parse("ls"), Command::List);
        assert_eq!(Command::parse("ll"), Command::List);
        assert_eq!(Command::parse("  ls  "), Command::List);
        assert!(matches!(Command::parse("ls docs"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_touch() {
        assert!(matches!(
            Command::parse("touch notes.txt"),
            Command::CreateFile(ref f) if f == "notes.txt"
        ));
        assert!(matches!(
            Command::parse("touch    spaced"),
            Command::CreateFile(ref f) if f == "spaced"
        ));
    }

    #[test]
    fn test_parse_mkdir() {
        assert!(matches!(
            Command::parse("mkdir docs"),
            Command::MakeDirectory(ref d) if d == "docs"
        ));
    }

    #[test]
    fn test_parse_cd_dot_dot_is_go_back() {
        assert_eq!(Command::parse("cd .."), Command::GoBack);
        assert_eq!(Command::parse(" cd .. "), Command::GoBack);
    }

    #[test]
    fn test_parse_cd() {
        assert!(matches!(
            Command::parse("cd docs"),
            Command::ChangeDirectory(ref d) if d == "docs"
        ));
        assert!(matches!(
            Command::parse("cd a/b"),
            Command::ChangeDirectory(ref d) if d == "a/b"
        ));
        assert!(matches!(
            Command::parse("cd ../x"),
            Command::ChangeDirectory(ref d) if d == "../x"
        ));
    }

    #[test]
    fn test_parse_rm_and_cat() {
        assert!(matches!(
            Command::parse("rm old"),
            Command::Remove(ref r) if r == "old"
        ));
        assert!(matches!(
            Command::parse("cat notes.txt"),
            Command::ShowFile(ref f) if f == "notes.txt"
        ));
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse("quit"), Command::Quit);
    }

    #[test]
    fn test_missing_argument_is_unknown() {
        assert!(matches!(Command::parse("touch"), Command::Unknown(_)));
        assert!(matches!(Command::parse("cd"), Command::Unknown(_)));
        assert!(matches!(Command::parse("cat "), Command::Unknown(_)));
    }

    #[test]
    fn test_multiple_arguments_rejected() {
        assert!(matches!(
            Command::parse("touch a b"),
            Command::Unknown(ref s) if s == "touch a b"
        ));
    }

    #[test]
    fn test_verb_must_be_separated() {
        assert!(matches!(Command::parse("cdx"), Command::Unknown(_)));
        assert!(matches!(Command::parse("rmdir x"), Command::Unknown(_)));
        assert!(matches!(Command::parse("xtouch a"), Command::Unknown(_)));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(matches!(Command::parse("LS"), Command::Unknown(_)));
    }
}
