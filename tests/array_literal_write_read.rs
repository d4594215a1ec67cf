#[path = "support.rs"]
mod support;

use support::run_and_capture;

#[test]
fn array_literal_element_write_then_read() {
    let src = r#"
        int arr[] = {1,2,3,4,5};
        arr[2] = 42;
        print(arr[2]);
        print(arr[0]);
    "#;
    assert_eq!(run_and_capture(src), "42\n1");
}
