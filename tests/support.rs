//! Shared helper for the end-to-end test files in this directory. Each test
//! binary pulls this in with `#[path = "support.rs"] mod support;` since a
//! single-package crate has no way to share code between integration test
//! binaries other than including the same file.
#![allow(dead_code)]

use std::path::Path;

/// Runs `src` and returns everything it printed, one line per `print` call
/// joined with `\n`, with no trailing newline.
pub fn run_and_capture(src: &str) -> String {
    let output = tinylang::run_source_capturing(src).expect("program should run without error");
    output.trim_end_matches('\n').to_owned()
}

/// Runs the file at `path` (splicing imports) and returns its captured
/// output the same way [`run_and_capture`] does.
pub fn run_file_and_capture(path: &Path) -> String {
    let source = tinylang::loader::load(path).expect("fixture should load");
    run_and_capture(&source)
}
