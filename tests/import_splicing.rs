#[path = "support.rs"]
mod support;

use std::path::Path;

use support::run_file_and_capture;

#[test]
fn an_imported_file_is_spliced_in_before_the_importing_source() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/main.tl");
    assert_eq!(run_file_and_capture(&path), "42");
}
