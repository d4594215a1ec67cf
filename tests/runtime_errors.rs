use tinylang::TinyLangError;

#[test]
fn dividing_by_zero_is_reported_as_an_arithmetic_error() {
    let err = tinylang::run_source("int x = 1 / 0;").unwrap_err();
    assert!(matches!(err, TinyLangError::Runtime(_)));
    assert!(err.to_string().contains("division by zero"));
}

#[test]
fn reading_an_undefined_variable_is_a_name_error() {
    let err = tinylang::run_source("print(missing);").unwrap_err();
    assert!(err.to_string().contains("undefined variable 'missing'"));
}

#[test]
fn calling_a_function_with_the_wrong_arity_is_reported() {
    let src = r#"
        ComeAndDo add(int a, int b) {
            return a + b;
        }
        print(add(1));
    "#;
    let err = tinylang::run_source(src).unwrap_err();
    assert!(err.to_string().contains("expects 2 argument"));
}

#[test]
fn indexing_past_the_end_of_an_array_is_a_bounds_error() {
    let src = r#"
        int arr[] = {1,2,3};
        print(arr[5]);
    "#;
    let err = tinylang::run_source(src).unwrap_err();
    assert!(err.to_string().contains("out of bounds"));
}

#[test]
fn indexing_past_the_end_of_an_object_array_is_a_bounds_error_not_a_name_error() {
    let src = r#"
        class P {
            string n;
        }
        P p[2];
        p[2].n = "x";
    "#;
    let err = tinylang::run_source(src).unwrap_err();
    assert!(matches!(err, TinyLangError::Runtime(tinylang::error::RuntimeError::Bounds { .. })));
    assert!(err.to_string().contains("out of bounds"));
}
