#[path = "support.rs"]
mod support;

use support::run_and_capture;

#[test]
fn object_array_elements_have_independent_fields() {
    let src = r#"
        class P {
            string n;
            ComeAndDo greet() {
                print(n);
            }
        }
        P p[2];
        p[0].n = "Alice";
        p[1].n = "Bob";
        p[0].greet();
        p[1].greet();
    "#;
    assert_eq!(run_and_capture(src), "Alice\nBob");
}
