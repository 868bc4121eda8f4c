/// A binary arithmetic operator.
///
/// Every operator is a single character in the source text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floating-point remainder (`%`)
    Rem,
    /// Exponentiation (`^`)
    Pow,
}

impl Operator {
    /// Applies the operator to two operands.
    ///
    /// `lhs` is the operand that appeared first in the expression. All
    /// arithmetic follows IEEE-754: dividing by zero yields an infinity or
    /// `NaN` instead of an error, and `%` keeps the sign of `lhs`.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(5.0, 3.0), 2.0);
    /// assert_eq!(Operator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert_eq!(Operator::Rem.apply(-7.0, 3.0), -1.0);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Rem => lhs % rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }

    /// Whether this is one of `*`, `/` or `%`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div | Self::Rem)
    }

    /// Whether this is one of `+` or `-`.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Rem => '%',
            Self::Pow => '^',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
