#[path = "support.rs"]
mod support;

use support::run_and_capture;

/// A single-inheritance subclass can define its own constructor while
/// inheriting the base class's fields and methods.
#[test]
fn subclass_constructor_sets_inherited_field_and_base_method_reads_it() {
    let src = r#"
        class A {
            int v;
            ComeAndDo show() {
                print(v);
            }
        }
        class B : A {
            ComeAndDo init(int x) {
                v = x;
            }
        }
        B b(7);
        b.show();
    "#;
    assert_eq!(run_and_capture(src), "7");
}
