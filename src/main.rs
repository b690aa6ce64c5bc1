use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use apl360::{
    Reply, Session,
    interpreter::settings::{DEFAULT_COMPARISON_TOLERANCE, DEFAULT_PRINT_PRECISION, Settings},
    repl::BANNER,
};
use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record, info};

/// apl360 evaluates APL/360-style expressions, interactively or from a
/// script.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells apl360 to read a script file instead of evaluating the argument.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Significant digits shown for each number.
    #[arg(short = 'p', long, default_value_t = DEFAULT_PRINT_PRECISION as u8,
          value_parser = clap::value_parser!(u8).range(1..=17))]
    print_precision: u8,

    /// Display negative numbers with APL's high minus `¯`.
    #[arg(long)]
    high_minus: bool,

    /// Relative tolerance used by `=` and `|`.
    #[arg(long, default_value_t = DEFAULT_COMPARISON_TOLERANCE)]
    comparison_tolerance: f64,

    /// Prompt shown by the interactive session.
    #[arg(long, default_value = "      ")]
    prompt: String,

    /// Log more about evaluation on stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// An expression, or with `--file` the path of a script. Without it an
    /// interactive session is started.
    contents: Option<String>,
}

/// Writes log records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }

    let settings = Settings { print_precision:      usize::from(args.print_precision),
                              high_minus:           args.high_minus,
                              comparison_tolerance: args.comparison_tolerance, };
    let mut session = Session::new(settings);

    match args.contents {
        None => run_interactive(&mut session, &args.prompt),
        Some(path) if args.file => {
            let Ok(script) = fs::read_to_string(&path) else {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            };
            run_script(&mut session, &script)
        },
        Some(expression) => run_script(&mut session, &expression),
    }
}

/// Prints what a line produced. Returns `false` once the session should end.
fn show(session: &Session, reply: &Reply) -> bool {
    match reply {
        Reply::Value(value) => println!("{}", value.display_with(session.settings())),
        Reply::Help(text) => println!("{text}"),
        Reply::Empty => {},
        Reply::Exit => return false,
    }
    true
}

/// Evaluates a script line by line, stopping at the first error.
fn run_script(session: &mut Session, script: &str) -> ExitCode {
    for (number, line) in script.lines().enumerate() {
        match session.run_line(line) {
            Ok(reply) => {
                if !show(session, &reply) {
                    break;
                }
            },
            Err(e) => {
                eprintln!("Error on line {}: {e}", number + 1);
                return ExitCode::FAILURE;
            },
        }
    }
    ExitCode::SUCCESS
}

/// Reads lines from stdin until end of input or `exit`, printing each
/// result or error and carrying on.
fn run_interactive(session: &mut Session, prompt: &str) -> ExitCode {
    info!("starting interactive session");
    println!("{BANNER}");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{prompt}");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
            None => {
                println!();
                break;
            },
        };

        match session.run_line(&line) {
            Ok(reply) => {
                if !show(session, &reply) {
                    println!("Goodbye!");
                    break;
                }
            },
            Err(e) => println!("Error: {e}"),
        }
    }

    info!("session ended with {} variable(s) defined", session.environment().len());
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Args;

    #[test]
    fn arguments_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn file_flag_needs_a_path() {
        assert!(Args::try_parse_from(["apl360", "--file"]).is_err());

        let args = Args::try_parse_from(["apl360", "-f", "script.apl"]).unwrap();
        assert!(args.file);
        assert_eq!(args.contents.as_deref(), Some("script.apl"));
    }

    #[test]
    fn print_precision_is_bounded() {
        assert!(Args::try_parse_from(["apl360", "-p", "0", "1"]).is_err());
        assert!(Args::try_parse_from(["apl360", "-p", "18", "1"]).is_err());
        assert_eq!(Args::try_parse_from(["apl360", "1"]).unwrap().print_precision, 10);
    }
}
