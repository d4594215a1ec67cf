use super::{Expression, Position};

#[derive(Debug, Clone)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Statement>,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct ClassDef {
    pub name: String,
    pub base: Option<String>,
    /// Declared fields in source order, as (type, name) pairs.
    pub fields: Vec<(String, String)>,
    pub methods: Vec<FunctionDef>,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub enum Statement {
    /// `<type>? <name> = <expr>?;` for a plain (non-array, non-object) variable.
    Assignment {
        name: String,
        declared_type: Option<String>,
        value: Option<Expression>,
        position: Position,
    },
    /// `obj.field = expr;` or `arr[const].field = expr;`. `object` is either
    /// `Expression::Variable` or `Expression::Index` with a constant index —
    /// the parser rejects any other shape before this node is built.
    FieldAssignment {
        object: Box<Expression>,
        field: String,
        value: Expression,
        position: Position,
    },
    /// `arr[expr] = expr;` against a primitive array.
    ArrayElementAssignment {
        array: String,
        index: Expression,
        value: Expression,
        position: Position,
    },
    /// `<type> arr[n];`, `<type> arr[];`, or `<type> arr[] = { ... };`.
    /// `initializer`, when present, is always an `Expression::ArrayLiteral`.
    ArrayDeclaration {
        name: String,
        element_type: String,
        size: Option<Expression>,
        initializer: Option<Expression>,
        position: Position,
    },
    /// `ClassName var[size];`
    ObjectArrayDeclaration {
        class_name: String,
        var_name: String,
        size: Expression,
        position: Position,
    },
    Print {
        value: Expression,
        position: Position,
    },
    FunctionDefinition(FunctionDef),
    Return {
        value: Option<Expression>,
        position: Position,
    },
    If {
        condition: Expression,
        then_branch: Vec<Statement>,
        else_branch: Vec<Statement>,
        position: Position,
    },
    While {
        condition: Expression,
        body: Vec<Statement>,
        position: Position,
    },
    For {
        init: Option<Box<Statement>>,
        condition: Option<Expression>,
        increment: Option<Box<Statement>>,
        body: Vec<Statement>,
        position: Position,
    },
    ExpressionStatement(Expression),
    ClassDefinition(ClassDef),
    /// `ClassName var;` (`args: None`, no constructor call) or
    /// `ClassName var(args);` (`args: Some(..)`, `init` is invoked even when
    /// `args` is empty — the parens, not the argument count, decide this).
    Instantiate {
        class_name: String,
        var_name: String,
        args: Option<Vec<Expression>>,
        position: Position,
    },
}
