/// The two-stack evaluation engine.
///
/// Holds the identifier store together with the operand and operator
/// stacks, walks a token sequence once from left to right and reduces it to
/// a single value.
pub mod core;

/// Operator precedence.
///
/// Decides whether an operator already on the stack must be applied before
/// an incoming operator is pushed.
pub mod precedence;
