#[path = "support.rs"]
mod support;

use support::run_and_capture;

/// Integers never write through to an enclosing scope: a function-local
/// `int x` shadows the caller's `x` for the call's duration only.
#[test]
fn integer_declarations_shadow_the_enclosing_scope() {
    let src = r#"
        int x = 100;
        print(x);
        ComeAndDo t() {
            int x = 42;
            print(x);
        }
        t();
        print(x);
    "#;
    assert_eq!(run_and_capture(src), "100\n42\n100");
}
