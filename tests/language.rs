use std::fs;

use stackcalc::{
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::{
        evaluator::core::Evaluator,
        lexer::tokenize,
        session::{Response, Session},
    },
};

const TOLERANCE: f64 = 1e-9;

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < TOLERANCE,
                             "{src} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = evaluate(src) {
        panic!("{src} evaluated to {value} but was expected to fail")
    }
}

fn run(evaluator: &mut Evaluator, src: &str) -> Result<f64, Error> {
    let tokens = tokenize(src)?;
    evaluator.evaluate(&tokens).map(|evaluation| evaluation.value)
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("7 % 3", 1.0);
    assert_value("2 ^ 10", 1024.0);
    assert_value("1.5 + .5", 2.0);
    assert_value("42", 42.0);
}

#[test]
fn parenthesized_expressions() {
    assert_value("(1+2)*3", 9.0);
    assert_value("((2))", 2.0);
    assert_value("(1 + (2 * (3 + 4))) / 3", 5.0);
    assert_value("2 ^ (1 + 2)", 8.0);
}

#[test]
fn precedence_without_parentheses() {
    assert_value("1+2*3", 7.0);
    assert_value("2*3+1", 7.0);
    assert_value("1+6/3", 3.0);
    assert_value("10-7%4", 7.0);
    assert_value("2*3^2", 18.0);
    assert_value("2^3*2", 16.0);
    assert_value("1+2^2*3", 13.0);
}

#[test]
fn equal_precedence_groups_left_to_right() {
    assert_value("2-3-1", -2.0);
    assert_value("100/10/5", 2.0);
    assert_value("8/2*4", 16.0);
    assert_value("10-2+3", 11.0);
    assert_value("17%5%2", 0.0);
}

#[test]
fn exponent_chains_group_right_to_left() {
    assert_value("2^3^2", 512.0);
    assert_value("2^1^3", 2.0);
    assert_value("(2^3)^2", 64.0);
}

#[test]
fn floating_point_edge_cases() {
    assert_eq!(evaluate("1/0").unwrap(), f64::INFINITY);
    assert_eq!(evaluate("0-1/0").unwrap(), f64::NEG_INFINITY);
    assert!(evaluate("0/0").unwrap().is_nan());
    assert!(evaluate("5%0").unwrap().is_nan());
    assert_value("0-7%3", -1.0);
}

#[test]
fn seeded_constants() {
    assert_value("pi", std::f64::consts::PI);
    assert_value("e", std::f64::consts::E);
    assert_value("2*pi", std::f64::consts::TAU);
}

#[test]
fn unbound_variables_read_as_zero() {
    assert_value("y+1", 1.0);
    assert_value("PI", 0.0);
    assert_value("12ab", 0.0);
}

#[test]
fn unbalanced_parentheses_fail() {
    assert_failure("(1+2");
    assert_failure("1+2)");
    assert_failure(")");
    assert_failure("((1)");
    assert_failure("(");
}

#[test]
fn malformed_expressions_fail() {
    assert_failure("");
    assert_failure("   ");
    assert_failure("1 2");
    assert_failure("1 +");
    assert_failure("* 2");
    assert_failure("()");
    assert_failure("1.2.3");
    assert_failure(".");
    assert_failure("3 $ 4");
    assert_failure("-1");
}

#[test]
fn misplaced_equals_fail() {
    assert_failure("= 5");
    assert_failure("x y = 5");
    assert_failure("1 + 2 = 3");
    assert_failure("x = y = 5");
    assert_failure("x =");
}

#[test]
fn errors_are_specific() {
    let mut evaluator = Evaluator::new();
    assert_eq!(run(&mut evaluator, "1.2.3"),
               Err(Error::Parse(ParseError::MalformedNumber { token: "1.2.3".into() })));
    assert_eq!(run(&mut evaluator, "1+2)"),
               Err(Error::Parse(ParseError::UnmatchedClosingParen)));
    assert_eq!(run(&mut evaluator, "(1+2"),
               Err(Error::Parse(ParseError::UnmatchedOpeningParen)));
    assert_eq!(run(&mut evaluator, "1+2=3"),
               Err(Error::Parse(ParseError::MisplacedEquals { position: 3 })));
    assert_eq!(run(&mut evaluator, "1x=5"),
               Err(Error::Parse(ParseError::InvalidAssignmentTarget { name: "1x".into() })));
    assert_eq!(run(&mut evaluator, "1 2 3"),
               Err(Error::Runtime(RuntimeError::ResidualOperands { count: 3 })));
    assert_eq!(run(&mut evaluator, ""), Err(Error::Runtime(RuntimeError::StackUnderflow)));
    assert_eq!(run(&mut evaluator, "a_b"),
               Err(Error::Parse(ParseError::UnexpectedToken { token:  "_".into(),
                                                                offset: 1, })));
}

#[test]
fn assignment_round_trip() {
    let mut evaluator = Evaluator::new();
    assert_eq!(run(&mut evaluator, "x=5"), Ok(5.0));
    assert_eq!(run(&mut evaluator, "x+1"), Ok(6.0));
    assert_eq!(run(&mut evaluator, "x=10"), Ok(10.0));
    assert_eq!(run(&mut evaluator, "x"), Ok(10.0));
    assert_eq!(evaluator.store().iter().filter(|i| i.name == "x").count(), 1);
    assert_eq!(evaluator.store().len(), 3);
}

#[test]
fn assignment_uses_existing_bindings() {
    let mut evaluator = Evaluator::new();
    assert_eq!(run(&mut evaluator, "r = 2"), Ok(2.0));
    assert_eq!(run(&mut evaluator, "area = pi * r ^ 2"),
               Ok(std::f64::consts::PI * 4.0));
    assert_eq!(run(&mut evaluator, "r = r + 1"), Ok(3.0));
    assert_eq!(run(&mut evaluator, "Pi = 3"), Ok(3.0));
    assert_eq!(evaluator.store().lookup("pi"), Some(std::f64::consts::PI));
}

#[test]
fn seeded_constants_can_be_reassigned() {
    let mut evaluator = Evaluator::new();
    assert_eq!(run(&mut evaluator, "pi = 3"), Ok(3.0));
    assert_eq!(run(&mut evaluator, "pi * 2"), Ok(6.0));
    assert_eq!(evaluator.store().len(), 2);
}

#[test]
fn invalid_assignment_target_creates_no_binding() {
    let mut evaluator = Evaluator::new();
    assert!(run(&mut evaluator, "1x=5").is_err());
    assert!(run(&mut evaluator, "x1=5").is_err());
    assert!(run(&mut evaluator, "5=5").is_err());
    assert!(run(&mut evaluator, "(=5").is_err());
    assert_eq!(evaluator.store().len(), 2);
    assert!(!evaluator.store().contains("x"));
}

#[test]
fn failed_assignment_leaves_store_unchanged() {
    let mut evaluator = Evaluator::new();
    assert_eq!(run(&mut evaluator, "x = 1"), Ok(1.0));
    assert!(run(&mut evaluator, "x = (2").is_err());
    assert!(run(&mut evaluator, "z = 1 2").is_err());
    assert_eq!(evaluator.store().lookup("x"), Some(1.0));
    assert!(!evaluator.store().contains("z"));
}

#[test]
fn stacks_are_empty_after_every_evaluation() {
    let mut evaluator = Evaluator::new();
    for src in ["(1+2", "1+2)", "1 2", "(1+2)*3", "x = 4", "", "1.2.3", "2^3^2", "* 2"] {
        let _ = run(&mut evaluator, src);
        assert!(evaluator.stacks_are_empty(), "stacks not empty after {src:?}");
    }
}

#[test]
fn failures_do_not_leak_into_the_next_expression() {
    let mut evaluator = Evaluator::new();
    assert!(run(&mut evaluator, "(1 + 2 * (3").is_err());
    assert_eq!(run(&mut evaluator, "4 + 5"), Ok(9.0));
    assert!(run(&mut evaluator, "1 2 3 +").is_err());
    assert_eq!(run(&mut evaluator, "6"), Ok(6.0));
}

#[test]
fn session_prints_values_and_assignments() {
    let mut session = Session::new();
    assert_eq!(session.execute("(1+2)*3").to_string(), "9.0");
    assert_eq!(session.execute("x=5").to_string(), "x = 5.0");
    assert_eq!(session.execute("x+1").to_string(), "6.0");
    assert_eq!(session.execute("1/4").to_string(), "0.25");
    assert_eq!(session.execute("1/0").to_string(), "inf");
    assert_eq!(session.execute("(1+2").to_string(),
               "Not a valid expression. Try again.");
}

#[test]
fn session_lists_variables_in_insertion_order() {
    let mut session = Session::new();
    assert_eq!(session.execute("l").to_string(),
               "\nVariables:\n  pi = 3.14\n  e = 2.72\n");

    session.execute("x=5");
    session.execute("b = 0.126");
    assert_eq!(session.execute("l").to_string(),
               "\nVariables:\n  pi = 3.14\n  e = 2.72\n  x = 5.00\n  b = 0.13\n");
}

#[test]
fn session_meta_commands() {
    let mut session = Session::new();
    assert_eq!(session.execute("q"), Response::Quit);
    assert_eq!(session.execute("q").to_string(), "");
    assert!(session.execute("h").to_string().contains("l - list variables"));
    assert_eq!(session.execute("  l  "),
               Response::Variables(session.store().iter().cloned().collect()));
    assert_eq!(session.store().len(), 2);
}

#[test]
fn session_rejects_invalid_lines_without_side_effects() {
    let mut session = Session::new();
    for line in ["1x=5", "(1+2", "x = y = 1", "a $ b", "1.2.3 + 1"] {
        assert_eq!(session.execute(line), Response::Invalid, "{line}");
    }
    assert_eq!(session.store().len(), 2);
    assert!(session.evaluator().stacks_are_empty());
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.calc").expect("missing file");
    let mut session = Session::new();

    for line in script.lines() {
        let response = session.execute(line);
        assert_ne!(response, Response::Invalid, "line failed: {line}");
        if response == Response::Quit {
            break;
        }
    }

    assert_eq!(session.store().lookup("total"), Some(42.0));
    assert!(!session.store().contains("unreached"));
}
