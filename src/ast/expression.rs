use super::{BinaryOp, Position, UnaryOp};

#[derive(Debug, Clone)]
pub enum Expression {
    IntLiteral {
        value: i32,
        position: Position,
    },
    FloatLiteral {
        value: f64,
        position: Position,
    },
    CharLiteral {
        value: u8,
        position: Position,
    },
    BoolLiteral {
        value: bool,
        position: Position,
    },
    StringLiteral {
        value: String,
        position: Position,
    },
    Variable {
        name: String,
        position: Position,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
        position: Position,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
        position: Position,
    },
    Call {
        callee: String,
        args: Vec<Expression>,
        position: Position,
    },
    Index {
        array: String,
        index: Box<Expression>,
        position: Position,
    },
    ArrayLiteral {
        elements: Vec<Expression>,
        position: Position,
    },
    Member {
        object: Box<Expression>,
        member: String,
        position: Position,
    },
    MethodCall {
        object: Box<Expression>,
        method: String,
        args: Vec<Expression>,
        position: Position,
    },
    Input {
        position: Position,
    },
    FileRead {
        filename: String,
        position: Position,
    },
}

impl Expression {
    pub fn position(&self) -> Position {
        match self {
            Expression::IntLiteral { position, .. }
            | Expression::FloatLiteral { position, .. }
            | Expression::CharLiteral { position, .. }
            | Expression::BoolLiteral { position, .. }
            | Expression::StringLiteral { position, .. }
            | Expression::Variable { position, .. }
            | Expression::Unary { position, .. }
            | Expression::Binary { position, .. }
            | Expression::Call { position, .. }
            | Expression::Index { position, .. }
            | Expression::ArrayLiteral { position, .. }
            | Expression::Member { position, .. }
            | Expression::MethodCall { position, .. }
            | Expression::Input { position }
            | Expression::FileRead { position, .. } => *position,
        }
    }
}
