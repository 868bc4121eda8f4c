use logos::Logos;

use crate::{error::ParseError, interpreter::operator::Operator};

/// Represents a lexical token in an input line.
///
/// Runs of digits, `.` and letters are accumulated greedily into a single
/// word. A word containing only digits and `.` is a [`Token::Number`];
/// any other word is a [`Token::Identifier`]. Numerals are not validated
/// here, so `1.2.3` still lexes as a number and is rejected when the
/// evaluator parses it.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric words such as `3`, `2.5`, `.5` or the malformed `1.2.3`.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Any other word, e.g. `x`, `pi` or `12ab`.
    #[regex(r"[0-9.]*[A-Za-z][A-Za-z0-9.]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// One of `+ - * / % ^`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("%", |_| Operator::Rem)]
    #[token("^", |_| Operator::Pow)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) => write!(f, "{text}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Equals => write!(f, "="),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits a line into tokens.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] for a character that cannot start
/// any token, such as `$` or `_`.
///
/// # Example
/// ```
/// use stackcalc::interpreter::{lexer::{Token, tokenize}, operator::Operator};
///
/// let tokens = tokenize("x = 2*(y + 1.5)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Identifier("x".into()),
///                 Token::Equals,
///                 Token::Number("2".into()),
///                 Token::Operator(Operator::Mul),
///                 Token::LParen,
///                 Token::Identifier("y".into()),
///                 Token::Operator(Operator::Add),
///                 Token::Number("1.5".into()),
///                 Token::RParen]);
///
/// assert!(tokenize("4 $ 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let Ok(tok) = token else {
            return Err(ParseError::UnexpectedToken { token:  lexer.slice().to_string(),
                                                     offset: lexer.span().start, });
        };
        tokens.push(tok);
    }

    tracing::debug!(count = tokens.len(), "tokenized {source:?}");
    Ok(tokens)
}
