use crate::{
    error::Error,
    evaluate_line,
    interpreter::{
        environment::Environment,
        evaluator::primitive::core::{PRIMITIVE_TABLE, PrimitiveDef},
        glyph::Glyph,
        settings::Settings,
        value::core::Value,
    },
};

/// Banner printed when an interactive session starts.
pub const BANNER: &str = "APL360 session. Type 'help' or '?' for the primitives, 'exit' to quit.";

/// What the session should do with one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `help` or `?`, optionally naming one glyph.
    Help(Option<&'a str>),
    /// `exit` or `quit`.
    Exit,
    /// Anything else: an expression to evaluate.
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    /// Recognizes the session commands.
    ///
    /// Command words are case-insensitive and take precedence over variables
    /// of the same name. Everything that is not a command is handed to the
    /// evaluator unchanged.
    ///
    /// # Example
    /// ```
    /// use apl360::repl::Command;
    ///
    /// assert_eq!(Command::parse("  QUIT "), Command::Exit);
    /// assert_eq!(Command::parse("?"), Command::Help(None));
    /// assert_eq!(Command::parse("help ⍳"), Command::Help(Some("⍳")));
    /// assert_eq!(Command::parse("help←3"), Command::Evaluate("help←3"));
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let (word, rest) = trimmed.split_once(char::is_whitespace)
                                  .map_or((trimmed, ""), |(word, rest)| (word, rest.trim()));

        if (word.eq_ignore_ascii_case("exit") || word.eq_ignore_ascii_case("quit")) && rest.is_empty() {
            Self::Exit
        } else if word.eq_ignore_ascii_case("help") || word == "?" {
            Self::Help((!rest.is_empty()).then_some(rest))
        } else {
            Self::Evaluate(line)
        }
    }
}

/// The outcome of one line in a [`Session`].
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The line evaluated to a value.
    Value(Value),
    /// The line was blank or a comment.
    Empty,
    /// Help text to show.
    Help(String),
    /// The user asked to leave.
    Exit,
}

/// An interactive session: the variables defined so far and the settings
/// used to evaluate and display.
///
/// # Example
/// ```
/// use apl360::{
///     interpreter::{settings::Settings, value::core::Value},
///     repl::{Reply, Session},
/// };
///
/// let mut session = Session::new(Settings::default());
///
/// assert_eq!(session.run_line("v ← ⍳4").unwrap(), Reply::Value(Value::from(vec![1.0, 2.0, 3.0, 4.0])));
/// assert_eq!(session.run_line("+/v").unwrap(), Reply::Value(Value::Scalar(10.0)));
/// assert_eq!(session.run_line("   ").unwrap(), Reply::Empty);
/// assert_eq!(session.run_line("exit").unwrap(), Reply::Exit);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    environment: Environment,
    settings:    Settings,
}

impl Session {
    /// Starts a session with no variables.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self { environment: Environment::new(),
               settings }
    }

    /// The settings the session was started with.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The variables defined so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Handles one line: a command, or an expression to evaluate.
    ///
    /// # Errors
    /// Any lexing or evaluation error of the line. The session stays usable
    /// and keeps none of the line's assignments.
    pub fn run_line(&mut self, line: &str) -> Result<Reply, Error> {
        match Command::parse(line) {
            Command::Exit => Ok(Reply::Exit),
            Command::Help(None) => Ok(Reply::Help(help_text())),
            Command::Help(Some(name)) => Ok(Reply::Help(help_for(name).unwrap_or_else(|| format!("No help for '{name}'")))),
            Command::Evaluate(source) => {
                let value = evaluate_line(source, &mut self.environment, &self.settings)?;
                Ok(value.map_or(Reply::Empty, Reply::Value))
            },
        }
    }
}

/// The full help listing: session commands, then every primitive.
///
/// # Example
/// ```
/// use apl360::{interpreter::glyph::Glyph, repl::help_text};
///
/// let text = help_text();
/// for glyph in Glyph::ALL {
///     assert!(text.contains(glyph.symbol()));
/// }
/// ```
#[must_use]
pub fn help_text() -> String {
    let mut text = String::from("Commands:\n  help [glyph] or ?   show this listing, or one glyph\n  exit or quit        end the session\n\nPrimitives:\n");
    for def in PRIMITIVE_TABLE {
        text.push_str(&describe(def));
    }
    text.push_str(&describe_reduce());
    text.push_str("\nAssign with ← (or <-), write a vector as [1 2 3], index with v[i], comment with ⍝.");
    text
}

/// Help for a single glyph, looked up by symbol or ASCII spelling.
///
/// `/` shows both division and the reduction operator, since the lexer
/// decides between them by what stands to the left.
///
/// # Returns
/// `None` if the name is not a glyph.
#[must_use]
pub fn help_for(name: &str) -> Option<String> {
    let def = Glyph::from_name(name).and_then(PrimitiveDef::of)?;
    let mut text = describe(def);
    if name == "/" {
        text.push_str(&describe_reduce());
    }
    Some(text.trim_end().to_string())
}

/// One help entry: symbol, name, spellings and the two forms.
fn describe(def: &PrimitiveDef) -> String {
    let fallbacks = def.glyph.fallbacks();
    let spellings = if fallbacks.is_empty() {
        String::new()
    } else {
        format!(" (also {})", fallbacks.join(" "))
    };
    format!("  {}  {}{spellings}\n      monadic: {}\n      dyadic:  {}\n",
            def.glyph.symbol(),
            def.name,
            def.monadic_help.unwrap_or("none"),
            def.dyadic_help.unwrap_or("none"))
}

fn describe_reduce() -> String {
    "  f/ reduce\n      monadic: fold f from the right over a vector, e.g. +/⍳5 is 15\n      dyadic:  none\n".to_string()
}
