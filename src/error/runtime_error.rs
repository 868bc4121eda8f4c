#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reducing the evaluation stacks.
pub enum RuntimeError {
    /// An operand or operator was needed but its stack was empty.
    StackUnderflow,
    /// More than one value was left once every operator was applied.
    ResidualOperands {
        /// How many values remained on the operand stack.
        count: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow => write!(f, "Missing operand or operator."),
            Self::ResidualOperands { count } => write!(f,
                                                       "Expression left {count} values instead of one. Is an operator missing?"),
        }
    }
}

impl std::error::Error for RuntimeError {}
