use std::fmt;
use thiserror::Error;

/// A parse error, reported at the offending token's position. When the
/// parser still has the source line handy it renders a caret underneath the
/// offending column, mirroring the teacher's diagnostic style.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub col: usize,
    pub source_line: Option<String>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: usize, col: usize, source_line: Option<String>) -> Self {
        Self {
            message: message.into(),
            line,
            col,
            source_line,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use colored::Colorize;

        if let Some(line_text) = &self.source_line {
            let margin = self.line.to_string().len();
            let fill = " ".repeat(margin);
            let padding = " ".repeat(self.col.saturating_sub(1));
            let caret = "^".red();
            writeln!(f, "{fill} |")?;
            writeln!(f, "{} |{line_text}", self.line)?;
            writeln!(f, "{fill} |{padding}{caret} {}", self.message)
        } else {
            write!(f, "{} at {}:{}", self.message, self.line, self.col)
        }
    }
}
