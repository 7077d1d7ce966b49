//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Tiny interactive shell for browsing and editing a directory subtree
#[derive(Parser, Debug)]
#[command(
    name = "tinysh",
    version,
    about = "Tiny interactive shell for browsing and editing a directory subtree",
    long_about = "tinysh starts a prompt rooted at ROOT and accepts a small fixed set of \
                  commands: ls, ll, touch <name>, mkdir <name>, cd <name>, cd .., \
                  rm <name>, cat <name>, exit, quit.\n\n\
                  Examples:\n  \
                  tinysh\n  \
                  tinysh ~/notes\n  \
                  tinysh --no-color -v /tmp/sandbox"
)]
pub struct CliArgs {
    #[arg(
        value_name = "ROOT",
        help = "Root directory of the session (defaults to the current directory)"
    )]
    pub root: Option<PathBuf>,

    #[arg(long, value_name = "NAME", help = "Hostname shown in the prompt")]
    pub hostname: Option<String>,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["tinysh"]).unwrap();
        assert!(args.root.is_none());
        assert!(!args.no_color);
        assert!(args.hostname.is_none());
    }

    #[test]
    fn test_root_and_flags() {
        let args =
            CliArgs::try_parse_from(["tinysh", "--no-color", "--hostname", "box", "/srv"]).unwrap();
        assert_eq!(args.root, Some(PathBuf::from("/srv")));
        assert_eq!(args.hostname.as_deref(), Some("box"));
        assert!(args.no_color);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(CliArgs::try_parse_from(["tinysh", "-v", "-q"]).is_err());
    }
}
