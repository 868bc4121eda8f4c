/// The evaluator module reduces token sequences to values.
///
/// It runs a single-pass, two-stack (shunting-yard style) algorithm: operands
/// go on one stack, pending operators and open parentheses on the other, and
/// operators are applied as soon as precedence allows.
///
/// # Responsibilities
/// - Detects and applies `name = expression` assignments.
/// - Resolves operator precedence by unwinding the operator stack.
/// - Reports malformed expressions as errors and leaves no state behind.
pub mod evaluator;
/// The lexer module splits an input line into tokens.
///
/// # Responsibilities
/// - Recognizes the single-character operators, parentheses and `=`.
/// - Groups runs of digits, `.` and letters into numbers and identifiers.
/// - Rejects characters that cannot start any token.
pub mod lexer;
/// Binary arithmetic operators and their semantics.
pub mod operator;
/// The interactive session built on top of the evaluator.
///
/// Interprets the meta-commands `h`, `l` and `q`, forwards everything else
/// to the evaluator, and renders the responses shown to the user.
pub mod session;
/// Variable storage.
///
/// Holds every variable bound during a session, in insertion order, and
/// seeds the constants `pi` and `e`.
pub mod store;
