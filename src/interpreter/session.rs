use tracing::debug;

use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluation, Evaluator},
    lexer::tokenize,
    store::{Identifier, IdentifierStore},
};

/// The message shown for every line that fails to evaluate.
pub const INVALID_EXPRESSION: &str = "Not a valid expression. Try again.";

/// The text printed by the `h` command.
pub const HELP: &str = "\nHelp:
  h - this message
  q - quit
  l - list variables
Expressions can contain:
  integers or decimal numbers
  variables made of letters, assigned with name = expression
  arithmetic operators +, -, *, /, %, ^
  parentheses '(' and ')'
";

/// A single input line, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `h`
    Help,
    /// `q`
    Quit,
    /// `l`
    List,
    /// Anything else.
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    /// Classifies a line. Surrounding whitespace is ignored.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::session::Command;
    ///
    /// assert_eq!(Command::parse(" q "), Command::Quit);
    /// assert_eq!(Command::parse("x = 1"), Command::Evaluate("x = 1"));
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "h" => Self::Help,
            "q" => Self::Quit,
            "l" => Self::List,
            expression => Self::Evaluate(expression),
        }
    }
}

/// What the session has to say about one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Help,
    /// The caller should stop reading input.
    Quit,
    /// A snapshot of every variable, in insertion order.
    Variables(Vec<Identifier>),
    /// A plain expression's value.
    Value(f64),
    /// An assignment's target and the value bound to it.
    Assigned {
        name:  String,
        value: f64,
    },
    Invalid,
}

impl Response {
    fn from_evaluation(outcome: EvalResult<Evaluation>) -> Self {
        match outcome {
            Ok(Evaluation { value,
                            target: Some(name), }) => Self::Assigned { name, value },
            Ok(Evaluation { value, target: None }) => Self::Value(value),
            Err(_) => Self::Invalid,
        }
    }
}

/// Formats a result so that it always shows a decimal point, e.g. `9.0`.
fn format_value(value: f64) -> String {
    format!("{value:?}")
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Help => write!(f, "{HELP}"),
            Self::Quit => Ok(()),
            Self::Variables(identifiers) => {
                writeln!(f, "\nVariables:")?;
                for Identifier { name, value } in identifiers {
                    writeln!(f, "  {name} = {value:.2}")?;
                }
                Ok(())
            },
            Self::Value(value) => write!(f, "{}", format_value(*value)),
            Self::Assigned { name, value } => write!(f, "{name} = {}", format_value(*value)),
            Self::Invalid => write!(f, "{INVALID_EXPRESSION}"),
        }
    }
}

/// An interactive calculator session.
///
/// Owns the evaluator, and through it the variables, for as long as the
/// session runs. Reading lines and printing responses is up to the caller.
#[derive(Debug, Default)]
pub struct Session {
    evaluator: Evaluator,
}

impl Session {
    /// Starts a session with `pi` and `e` predefined.
    #[must_use]
    pub fn new() -> Self {
        Self { evaluator: Evaluator::new() }
    }

    #[must_use]
    pub const fn store(&self) -> &IdentifierStore {
        self.evaluator.store()
    }

    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Handles one line of input.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::session::{Response, Session};
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.execute("x = 5").to_string(), "x = 5.0");
    /// assert_eq!(session.execute("x + 1"), Response::Value(6.0));
    /// assert_eq!(session.execute("(1 + 2").to_string(),
    ///            "Not a valid expression. Try again.");
    /// assert_eq!(session.execute("q"), Response::Quit);
    /// ```
    pub fn execute(&mut self, line: &str) -> Response {
        match Command::parse(line) {
            Command::Help => Response::Help,
            Command::Quit => Response::Quit,
            Command::List => Response::Variables(self.store().iter().cloned().collect()),
            Command::Evaluate(expression) => {
                let outcome = match tokenize(expression) {
                    Ok(tokens) => self.evaluator.evaluate(&tokens),
                    Err(e) => {
                        debug!("tokenizing failed: {e}");
                        Err(e.into())
                    },
                };
                Response::from_evaluation(outcome)
            },
        }
    }
}
