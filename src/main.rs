use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tinysh::cli::CliArgs;
use tinysh::config::{APP_NAME, DEFAULT_LOG_LEVEL, LOG_LEVEL_ENV, Settings};
use tinysh::core::Session;
use tinysh::core::error::ShellError;
use tinysh::terminal::{self, EditorSource};
use tinysh::utils::sysinfo::hostname;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging_from_args(&args);
    debug!("Arguments: {:?}", args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{APP_NAME}: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<(), ShellError> {
    let host = args.hostname.unwrap_or_else(hostname);
    let color = !args.no_color && io::stdout().is_terminal();
    let settings = Settings::new(args.root, host, color);

    let mut session = Session::open(&settings)?;
    let mut source = EditorSource::new()?;
    terminal::run(&mut session, &mut source, &mut io::stdout(), settings.color)
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        let level_str = env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        parse_level(&level_str)
    };

    let filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(format!("{APP_NAME}={level}"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::WARN
        }
    }
}
