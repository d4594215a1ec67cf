#[path = "support.rs"]
mod support;

use support::run_and_capture;

/// `&&`/`!` collapse to 0/1 ints, and mixing a float operand into `+`
/// promotes the whole expression to float.
#[test]
fn boolean_ops_collapse_to_ints_and_arithmetic_promotes_to_float() {
    let src = r#"
        int a = 5;
        int c = 0;
        print(a > 0 && c > 0);
        print(!c);
        float f = 1;
        print(f + 2);
    "#;
    assert_eq!(run_and_capture(src), "0\n1\n3");
}

/// `&&` must not evaluate its right operand once the left is false — a
/// division by zero there would otherwise raise an `ArithmeticError`, so a
/// clean run proves the short-circuit actually skipped it rather than just
/// happening to produce the right boolean result.
#[test]
fn and_does_not_evaluate_its_right_operand_once_the_left_is_false() {
    let src = r#"
        int c = 0;
        print(c && (1 / 0));
    "#;
    assert_eq!(run_and_capture(src), "0");
}

/// Same property for `||`: a true left operand must short-circuit past a
/// right-hand division by zero.
#[test]
fn or_does_not_evaluate_its_right_operand_once_the_left_is_true() {
    let src = r#"
        int a = 1;
        print(a || (1 / 0));
    "#;
    assert_eq!(run_and_capture(src), "1");
}
