/// Lexical and syntactic errors.
///
/// Raised while tokenizing a line or while walking its tokens: characters
/// the tokenizer does not recognize, numerals that fail strict parsing,
/// unbalanced parentheses and malformed assignments.
pub mod parse_error;
/// Errors raised while reducing the evaluation stacks.
///
/// These signal that the operand stack did not reduce to exactly one value.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error produced while evaluating a line.
pub enum Error {
    /// The line could not be tokenized or its structure is invalid.
    Parse(ParseError),
    /// The stacks could not be reduced to a single result.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
