use tracing::{debug, trace};

use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::precedence::has_precedence,
        lexer::Token,
        operator::Operator,
        store::{IdentifierStore, is_valid_name},
    },
    util::stack::Stack,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, Error>;

/// An entry on the operator stack.
///
/// `)` never appears here: it triggers unwinding instead of being stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Pending {
    /// A binary operator waiting for its right operand to be complete.
    Operator(Operator),
    /// An open parenthesis.
    LParen,
}

/// The outcome of a successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The computed value.
    pub value:  f64,
    /// The variable the value was assigned to, for `name = ...` lines.
    pub target: Option<String>,
}

/// Evaluates token sequences against a persistent identifier store.
///
/// ## Usage
///
/// An `Evaluator` is created once per session. Each call to
/// [`Evaluator::evaluate`] uses the operand and operator stacks for a single
/// expression and empties them again before returning, whether the
/// expression succeeded or not. Variables bound by assignments persist in
/// the store between calls.
#[derive(Debug, Default)]
pub struct Evaluator {
    store:     IdentifierStore,
    operands:  Stack<f64>,
    operators: Stack<Pending>,
}

impl Evaluator {
    /// Creates an evaluator whose store is seeded with `pi` and `e`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(IdentifierStore::new())
    }

    /// Creates an evaluator around an existing store.
    #[must_use]
    pub const fn with_store(store: IdentifierStore) -> Self {
        Self { store,
               operands: Stack::new(),
               operators: Stack::new() }
    }

    #[must_use]
    pub const fn store(&self) -> &IdentifierStore {
        &self.store
    }

    /// Whether both evaluation stacks are empty.
    ///
    /// This holds between any two calls to [`Evaluator::evaluate`].
    #[must_use]
    pub fn stacks_are_empty(&self) -> bool {
        self.operands.is_empty() && self.operators.is_empty()
    }

    /// Evaluates a tokenized line.
    ///
    /// A line of the form `name = expression` evaluates `expression` and
    /// binds the result to `name`. Unbound variables read as `0.0`. On
    /// failure the store is left untouched.
    ///
    /// # Errors
    /// Returns a [`ParseError`] for malformed numerals, unbalanced
    /// parentheses, a misplaced `=` or an invalid assignment target, and a
    /// [`RuntimeError`] when the stacks do not reduce to exactly one value.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::{evaluator::core::Evaluator, lexer::tokenize};
    ///
    /// let mut evaluator = Evaluator::new();
    ///
    /// let assigned = evaluator.evaluate(&tokenize("x = 2 * (3 + 4)").unwrap()).unwrap();
    /// assert_eq!(assigned.value, 14.0);
    /// assert_eq!(assigned.target.as_deref(), Some("x"));
    ///
    /// let result = evaluator.evaluate(&tokenize("x - 4").unwrap()).unwrap();
    /// assert_eq!(result.value, 10.0);
    ///
    /// assert!(evaluator.evaluate(&tokenize("(1 + 2").unwrap()).is_err());
    /// assert!(evaluator.stacks_are_empty());
    /// ```
    pub fn evaluate(&mut self, tokens: &[Token]) -> EvalResult<Evaluation> {
        let outcome = self.reduce(tokens);
        self.operands.clear();
        self.operators.clear();

        match &outcome {
            Ok(Evaluation { value,
                            target: Some(name), }) => {
                debug!("bound {name} = {value}");
                self.store.bind(name, *value);
            },
            Ok(Evaluation { value, .. }) => debug!("evaluated to {value}"),
            Err(e) => debug!("evaluation failed: {e}"),
        }

        outcome
    }

    /// Runs the single left-to-right pass and the final unwinding.
    fn reduce(&mut self, tokens: &[Token]) -> EvalResult<Evaluation> {
        let (target, offset) = split_assignment(tokens)?;

        for (index, token) in tokens.iter().enumerate().skip(offset) {
            self.push_token(token, index)?;
        }

        while !self.operators.is_empty() {
            self.pop_pop_pop()?;
        }

        let value = self.operands.pop().ok_or(RuntimeError::StackUnderflow)?;
        if !self.operands.is_empty() {
            return Err(RuntimeError::ResidualOperands { count: self.operands.len() + 1 }.into());
        }

        Ok(Evaluation { value,
                        target: target.map(str::to_string) })
    }

    fn push_token(&mut self, token: &Token, index: usize) -> EvalResult<()> {
        match token {
            Token::Number(text) => {
                let value = text.parse::<f64>()
                                .map_err(|_| ParseError::MalformedNumber { token: text.clone() })?;
                self.operands.push(value);
            },
            Token::Identifier(name) => {
                let value = self.store.lookup(name).unwrap_or(0.0);
                self.operands.push(value);
            },
            Token::LParen => self.operators.push(Pending::LParen),
            Token::RParen => loop {
                match self.operators.peek().copied() {
                    Some(Pending::LParen) => {
                        self.operators.pop();
                        break;
                    },
                    Some(Pending::Operator(_)) => self.pop_pop_pop()?,
                    None => return Err(ParseError::UnmatchedClosingParen.into()),
                }
            },
            Token::Operator(op) => {
                while let Some(&top) = self.operators.peek()
                      && has_precedence(*op, top)
                {
                    self.pop_pop_pop()?;
                }
                self.operators.push(Pending::Operator(*op));
            },
            Token::Equals => return Err(ParseError::MisplacedEquals { position: index }.into()),
            Token::Ignored => {},
        }
        Ok(())
    }

    /// Pops two operands and one operator, applies the operator and pushes
    /// the result.
    ///
    /// The operand popped second is the left-hand side.
    fn pop_pop_pop(&mut self) -> EvalResult<()> {
        let rhs = self.operands.pop().ok_or(RuntimeError::StackUnderflow)?;
        let op = match self.operators.pop() {
            Some(Pending::Operator(op)) => op,
            Some(Pending::LParen) => return Err(ParseError::UnmatchedOpeningParen.into()),
            None => return Err(RuntimeError::StackUnderflow.into()),
        };
        let lhs = self.operands.pop().ok_or(RuntimeError::StackUnderflow)?;

        let value = op.apply(lhs, rhs);
        trace!("{lhs} {op} {rhs} = {value}");
        self.operands.push(value);
        Ok(())
    }
}

/// Detects the `name = expression` form.
///
/// Returns the assignment target, if any, and the index of the first token
/// of the expression proper. The first `=` must be the second token and no
/// other `=` may follow.
fn split_assignment(tokens: &[Token]) -> Result<(Option<&str>, usize), ParseError> {
    let mut equals = tokens.iter()
                           .enumerate()
                           .filter(|(_, token)| matches!(token, Token::Equals))
                           .map(|(index, _)| index);

    match (equals.next(), tokens) {
        (None, _) => Ok((None, 0)),
        (Some(1), [target, ..]) => {
            if let Some(position) = equals.next() {
                return Err(ParseError::MisplacedEquals { position });
            }
            match target {
                Token::Identifier(name) if is_valid_name(name) => Ok((Some(name.as_str()), 2)),
                other => Err(ParseError::InvalidAssignmentTarget { name: other.to_string() }),
            }
        },
        (Some(position), _) => Err(ParseError::MisplacedEquals { position }),
    }
}
