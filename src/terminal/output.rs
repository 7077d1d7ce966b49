//! Rendering of [`OutputLine`]s to a byte stream.

use std::io::{self, Write};

use crate::models::{OutputLine, TextStyle};
use crate::utils::format::format_entry;

const RESET: &str = "\x1b[0m";

/// ANSI color sequence for a style, `None` for plain text.
fn style_code(style: TextStyle) -> Option<&'static str> {
    match style {
        TextStyle::Plain => None,
        TextStyle::Directory => Some("\x1b[34m"),
        TextStyle::Green => Some("\x1b[32m"),
        TextStyle::Yellow => Some("\x1b[33m"),
        TextStyle::Red => Some("\x1b[31m"),
        TextStyle::Cyan => Some("\x1b[36m"),
    }
}

/// Render one line of output, without the trailing newline.
pub fn render(line: &OutputLine, color: bool) -> String {
    let text = match line {
        OutputLine::Text(s)
        | OutputLine::Error(s)
        | OutputLine::Success(s)
        | OutputLine::Warning(s)
        | OutputLine::Hint(s)
        | OutputLine::ListHeader(s) => s.clone(),
        OutputLine::ListEntry {
            name,
            kind,
            created_at,
        } => format_entry(*kind, created_at.as_ref(), name),
    };

    match style_code(line.style()) {
        Some(code) if color => format!("{code}{text}{RESET}"),
        _ => text,
    }
}

/// Write every line followed by a newline, then flush.
pub fn write_lines<W: Write>(out: &mut W, lines: &[OutputLine], color: bool) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", render(line, color))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;

    #[test]
    fn test_render_plain() {
        assert_eq!(render(&OutputLine::error("bad"), false), "bad");
        assert_eq!(render(&OutputLine::text("a\nb"), false), "a\nb");
    }

    #[test]
    fn test_render_colored() {
        assert_eq!(
            render(&OutputLine::warning("careful"), true),
            "\x1b[33mcareful\x1b[0m"
        );
        // Verbatim file content is never styled
        assert_eq!(render(&OutputLine::text("raw"), true), "raw");
    }

    #[test]
    fn test_render_unknown_date() {
        let line = OutputLine::ListEntry {
            name: "docs".to_string(),
            kind: EntryKind::Directory,
            created_at: None,
        };
        assert_eq!(render(&line, false), "dir  ---------------- docs");
    }

    #[test]
    fn test_write_lines() {
        let mut buf = Vec::new();
        write_lines(
            &mut buf,
            &[OutputLine::success("ok"), OutputLine::text("")],
            false,
        )
        .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ok\n\n");
    }
}
