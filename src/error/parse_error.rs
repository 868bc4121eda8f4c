#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or while checking
/// the structure of a token sequence.
pub enum ParseError {
    /// Found a character the tokenizer does not recognize.
    UnexpectedToken {
        /// The unrecognized text.
        token:  String,
        /// Byte offset of the text within the line.
        offset: usize,
    },
    /// A token classified as a numeral could not be parsed as one.
    MalformedNumber {
        /// The offending token text, e.g. `1.2.3`.
        token: String,
    },
    /// An `=` appeared somewhere other than directly after the target name,
    /// or appeared more than once.
    MisplacedEquals {
        /// Index of the offending `=` within the token sequence.
        position: usize,
    },
    /// The left-hand side of an assignment is not a valid variable name.
    InvalidAssignmentTarget {
        /// The rejected name.
        name: String,
    },
    /// A `)` was found with no matching `(` before it.
    UnmatchedClosingParen,
    /// A `(` was never closed.
    UnmatchedOpeningParen,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, offset } => {
                write!(f, "Unexpected token '{token}' at offset {offset}.")
            },
            Self::MalformedNumber { token } => write!(f, "Malformed number '{token}'."),
            Self::MisplacedEquals { position } => write!(f,
                                                         "Unexpected '=' at token {position}. Assignments look like: x = 1 + 2"),
            Self::InvalidAssignmentTarget { name } => write!(f,
                                                             "Cannot assign to '{name}'. Variable names may only contain letters."),
            Self::UnmatchedClosingParen => {
                write!(f, "Found closing parenthesis ')' without a matching '('.")
            },
            Self::UnmatchedOpeningParen => {
                write!(f, "Expected closing parenthesis ')' but none found.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
