/// A minimal LIFO container.
///
/// Both evaluator stacks (operands and pending operators) are built on this
/// type. Popping or peeking an empty stack yields `None` rather than
/// panicking, so the evaluator can turn underflow into an ordinary error.
pub mod stack;
