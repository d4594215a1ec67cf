//! TinyLang: a tree-walking interpreter for a small C-style scripting
//! language with primitive types, arrays, first-class functions, and
//! single-inheritance objects.
pub mod ast;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod loader;
pub mod parser;
pub mod value;

use std::cell::RefCell;
use std::io;
use std::path::Path;
use std::rc::Rc;

pub use error::TinyLangError;

/// A `Write` sink backed by a shared in-memory buffer, so its contents can
/// still be read after the `Box<dyn Write>` holding it has been moved into
/// an [`interpreter::Interpreter`].
#[derive(Clone, Default)]
struct CaptureBuffer(Rc<RefCell<Vec<u8>>>);

impl io::Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Loads, splices imports into, parses, and runs the program at `path`.
/// This is the single entry point both the binary and integration tests
/// drive the interpreter through.
pub fn run_file(path: &Path) -> Result<(), TinyLangError> {
    let source = loader::load(path)?;
    run_source(&source)
}

/// Parses and runs `source` directly, with no import splicing — used for
/// inline test fixtures that have no file of their own.
pub fn run_source(source: &str) -> Result<(), TinyLangError> {
    let tokens = lexer::Lexer::new(source).lex()?;
    let statements = parser::parse(tokens, source)?;
    let mut interpreter = interpreter::Interpreter::new();
    interpreter.run(&statements)?;
    Ok(())
}

/// Like [`run_source`], but captures `print` output instead of writing it
/// to standard output, returning it as a single string.
pub fn run_source_capturing(source: &str) -> Result<String, TinyLangError> {
    let tokens = lexer::Lexer::new(source).lex()?;
    let statements = parser::parse(tokens, source)?;
    let capture = CaptureBuffer::default();
    let mut interpreter = interpreter::Interpreter::with_writer(Box::new(capture.clone()));
    interpreter.run(&statements)?;
    let bytes = capture.0.borrow().clone();
    Ok(String::from_utf8(bytes).expect("print only ever writes valid UTF-8"))
}
