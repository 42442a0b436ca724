use super::*;
use crate::lang::ErrorCode;
use num_traits::One;

#[test]
fn test_plus() {
    let mut r = Runtime::default();
    assert_eq!(r.execute_line("2 3 +"), "ok");
    assert_eq!(r.stack().last(), Some(&val(5)));
}

#[test]
fn test_operand_order() {
    let mut r = Runtime::default();
    assert_eq!(r.execute_line("10 4 - 6 3 / 7 2 *"), "ok");
    assert_eq!(stack_of(&r), vec!["6", "2", "14"]);
}

#[test]
fn test_postfix_expression() {
    let mut r = Runtime::default();
    assert_eq!(r.execute_line("1 2 + 3 4 + * ."), "21 ok");
    assert!(r.stack().is_empty());
}

#[test]
fn test_division_is_exact() {
    let mut r = Runtime::default();
    assert_eq!(r.execute_line("1 3 /"), "ok");
    assert_eq!(stack_of(&r), vec!["1/3"]);
    assert_eq!(r.execute_line("3 *"), "ok");
    assert!(r.stack().last().map_or(false, |v| v.is_one()));
    assert_eq!(r.execute_line("."), "1 ok");
}

#[test]
fn test_fraction_printing() {
    let mut r = Runtime::default();
    assert_eq!(r.execute_line("6 4 / ."), "3/2 ok");
    assert_eq!(r.execute_line("-6 4 / ."), "-3/2 ok");
    assert_eq!(r.execute_line("6 -3 / ."), "-2 ok");
}

#[test]
fn test_division_by_zero_consumes_operands() {
    let mut r = Runtime::default();
    assert_eq!(r.execute_line("7 5 0 /"), "Division by zero");
    assert_eq!(stack_of(&r), vec!["7"]);
    let e = r.last_error().unwrap();
    assert_eq!(e.code(), ErrorCode::DivisionByZero);
    assert_eq!(e.failed_word(), Some("/"));
}

#[test]
fn test_big_numbers() {
    let mut r = Runtime::default();
    assert_eq!(
        r.execute_line("99999999999999999999 1 + ."),
        "100000000000000000000 ok"
    );
}

#[test]
fn test_negate_abs() {
    let mut r = Runtime::default();
    assert_eq!(r.execute_line("5 negate . -5 abs ."), "-5 5 ok");
}

#[test]
fn test_arithmetic_underflow_keeps_operand() {
    let mut r = Runtime::default();
    assert_eq!(r.execute_line("4 +"), "Stack underflow");
    assert_eq!(stack_of(&r), vec!["4"]);
    assert_eq!(r.execute_line("0 /"), "Division by zero");
    assert!(r.stack().is_empty());
}
