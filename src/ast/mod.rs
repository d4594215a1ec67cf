//! Tagged-variant data model for TinyLang expressions and statements.
//!
//! Every node owns its children outright (boxed where recursive); there are
//! no shared references between nodes.
mod expression;
mod ops;
mod statement;

pub use expression::Expression;
pub use ops::{BinaryOp, UnaryOp};
pub use statement::{ClassDef, FunctionDef, Statement};

/// A 1-based (line, column) source position, carried on every node for
/// diagnostics raised during evaluation.
pub type Position = (usize, usize);
