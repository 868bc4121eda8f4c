use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use rustyline::{DefaultEditor, error::ReadlineError};
use stackcalc::interpreter::session::{Response, Session};
use tracing::{debug, level_filters::LevelFilter};

/// stackcalc is an interactive calculator for infix arithmetic with
/// variables.
///
/// Type `h` at the prompt for help, `l` to list variables and `q` to quit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates LINE as if it was typed at the prompt, then exits. May be
    /// given more than once.
    #[arg(short, long = "expr", value_name = "LINE", conflicts_with = "file")]
    expr: Vec<String>,

    /// Reads the lines to evaluate from a file instead of the prompt.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Loads and saves the prompt history at this path.
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,

    /// How much diagnostic output to write to stderr.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::OFF,
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

fn init_logging(level: LevelFilter) {
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();
}

/// Feeds each line to the session and prints the responses. Stops at `q`.
fn run_lines<'a>(session: &mut Session, lines: impl IntoIterator<Item = &'a str>) {
    for line in lines {
        let response = session.execute(line);
        if matches!(response, Response::Quit) {
            break;
        }
        println!("{response}");
    }
}

fn run_interactive(session: &mut Session, history: Option<&Path>) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    if let Some(path) = history
       && let Err(e) = editor.load_history(path)
    {
        debug!("no history loaded from {}: {e}", path.display());
    }

    println!("\nWelcome to stackcalc! Type h for help.\n");

    loop {
        let line = match editor.readline("-> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        };
        editor.add_history_entry(line.as_str())?;

        let response = session.execute(&line);
        if matches!(response, Response::Quit) {
            break;
        }
        println!("{response}");
    }

    if let Some(path) = history {
        editor.save_history(path)?;
    }

    println!("\nThanks for using stackcalc! Goodbye.\n");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level.into());

    let mut session = Session::new();

    if !args.expr.is_empty() {
        run_lines(&mut session, args.expr.iter().map(String::as_str));
        return ExitCode::SUCCESS;
    }

    if let Some(path) = &args.file {
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        run_lines(&mut session, script.lines());
        return ExitCode::SUCCESS;
    }

    if let Err(e) = run_interactive(&mut session, args.history.as_deref()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
