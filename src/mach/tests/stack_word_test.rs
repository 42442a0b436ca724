use super::*;

#[test]
fn test_dot_s_does_not_consume() {
    let mut r = Runtime::default();
    assert_eq!(r.execute_line("1 2 3 .s"), "<3> 1 2 3 ok");
    assert_eq!(r.stack().len(), 3);
}

#[test]
fn test_dot_s_empty() {
    let mut r = Runtime::default();
    assert_eq!(r.execute_line(".S"), "<0> ok");
}

#[test]
fn test_dot_consumes() {
    let mut r = Runtime::default();
    assert_eq!(r.execute_line("1 2 + ."), "3 ok");
    assert!(r.stack().is_empty());
}

#[test]
fn test_dot_underflow() {
    let mut r = Runtime::default();
    assert_eq!(r.execute_line("."), "Stack underflow");
}

#[test]
fn test_dup_drop() {
    let mut r = Runtime::default();
    assert_eq!(r.execute_line("4 dup * dup"), "ok");
    assert_eq!(stack_of(&r), vec!["16", "16"]);
    assert_eq!(r.execute_line("drop"), "ok");
    assert_eq!(stack_of(&r), vec!["16"]);
}

#[test]
fn test_swap_over_rot() {
    let mut r = Runtime::default();
    assert_eq!(r.execute_line("1 2 swap"), "ok");
    assert_eq!(stack_of(&r), vec!["2", "1"]);
    assert_eq!(r.execute_line("over"), "ok");
    assert_eq!(stack_of(&r), vec!["2", "1", "2"]);
    assert_eq!(r.execute_line("rot"), "ok");
    assert_eq!(stack_of(&r), vec!["1", "2", "2"]);
}

#[test]
fn test_shuffle_underflow_is_atomic() {
    let mut r = Runtime::default();
    r.execute_line("1 2");
    assert_eq!(r.execute_line("rot"), "Stack underflow");
    assert_eq!(stack_of(&r), vec!["1", "2"]);
    r.execute_line("clear 1");
    assert_eq!(r.execute_line("swap"), "Stack underflow");
    assert_eq!(r.execute_line("over"), "Stack underflow");
    assert_eq!(stack_of(&r), vec!["1"]);
}

#[test]
fn test_depth_and_clear() {
    let mut r = Runtime::default();
    assert_eq!(r.execute_line("depth 7 7 depth"), "ok");
    assert_eq!(stack_of(&r), vec!["0", "7", "7", "3"]);
    assert_eq!(r.execute_line("clear .s"), "<0> ok");
}

#[test]
fn test_words() {
    let mut r = Runtime::default();
    let out = r.execute_line("words");
    assert!(out.starts_with("+ - * / . .s dup "));
    assert!(out.ends_with(" words ok"));
    assert!(r.stack().is_empty());
}
