#[path = "support.rs"]
mod support;

use support::run_and_capture;

#[test]
fn plus_on_a_string_operand_concatenates_the_other_sides_display_form() {
    let src = r#"
        string s = "x=" + 5;
        print(s);
    "#;
    assert_eq!(run_and_capture(src), "x=5");
}
