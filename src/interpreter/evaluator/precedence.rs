use crate::interpreter::{evaluator::core::Pending, operator::Operator};

/// Returns `true` if `stacked` must be applied before `incoming` is pushed.
///
/// The rule is:
/// - an incoming `^` never unwinds anything;
/// - a stacked `(` is never unwound;
/// - an incoming `*`, `/` or `%` does not unwind a stacked `+` or `-`;
/// - everything else is unwound.
///
/// This yields the usual precedence levels and left-to-right grouping for
/// `+ - * / %`. Chains of `^` stack up without intermediate reductions, so
/// they group right to left: `2^3^2` is `2^9`.
///
/// # Example
/// ```
/// use stackcalc::interpreter::{
///     evaluator::{core::Pending, precedence::has_precedence},
///     operator::Operator,
/// };
///
/// assert!(has_precedence(Operator::Add, Pending::Operator(Operator::Mul)));
/// assert!(has_precedence(Operator::Sub, Pending::Operator(Operator::Sub)));
/// assert!(!has_precedence(Operator::Mul, Pending::Operator(Operator::Add)));
/// assert!(!has_precedence(Operator::Pow, Pending::Operator(Operator::Pow)));
/// assert!(!has_precedence(Operator::Add, Pending::LParen));
/// ```
#[must_use]
pub const fn has_precedence(incoming: Operator, stacked: Pending) -> bool {
    if matches!(incoming, Operator::Pow) {
        return false;
    }
    let Pending::Operator(stacked) = stacked else {
        return false;
    };
    !(incoming.is_multiplicative() && stacked.is_additive())
}
