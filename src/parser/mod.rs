//! Recursive-descent parser: tokens to AST (§4.2).
mod error;

pub use error::ParseError;

use std::collections::HashSet;

use log::trace;

use crate::ast::{BinaryOp, ClassDef, Expression, FunctionDef, Statement, UnaryOp};
use crate::lexer::{Token, TokenKind};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses `tokens` into a flat top-level statement list. `source` is used
/// only to render caret diagnostics; it is not re-lexed.
pub fn parse(tokens: Vec<Token>, source: &str) -> ParseResult<Vec<Statement>> {
    Parser::new(tokens, source).parse_program()
}

pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    source: &'a str,
    /// Identifiers known to name a class, populated as `class` statements
    /// are parsed so later statements can recognise object declarations.
    class_names: HashSet<String>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, source: &'a str) -> Self {
        Self {
            tokens,
            pos: 0,
            source,
            class_names: HashSet::new(),
        }
    }

    pub fn parse_program(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    // ---- token plumbing -------------------------------------------------

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let tok = self.peek().clone();
            Err(self.error_at(&tok, format!("expected {kind:?}, found '{}'", tok.lexeme)))
        }
    }

    fn error_here(&self, message: impl Into<String>) -> ParseError {
        let tok = self.peek().clone();
        self.error_at(&tok, message)
    }

    fn error_at(&self, tok: &Token, message: impl Into<String>) -> ParseError {
        let source_line = self.source.lines().nth(tok.line.saturating_sub(1)).map(str::to_owned);
        ParseError::new(message, tok.line, tok.col, source_line)
    }

    // ---- statements -------------------------------------------------------

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        trace!("parse_statement at {:?}", self.peek());
        match self.peek_kind() {
            TokenKind::Class => self.parse_class_def(),
            TokenKind::ComeAndDo => Ok(Statement::FunctionDefinition(self.parse_function_def_inner()?)),
            TokenKind::For => self.parse_for(),
            TokenKind::While => self.parse_while(),
            TokenKind::If => self.parse_if(),
            TokenKind::Int | TokenKind::Float | TokenKind::Char | TokenKind::Bool | TokenKind::Str => {
                let stmt = self.parse_typed_declaration()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(stmt)
            }
            TokenKind::Print => {
                let stmt = self.parse_print()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(stmt)
            }
            TokenKind::Return => {
                let stmt = self.parse_return()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(stmt)
            }
            TokenKind::Identifier => {
                let stmt = self.parse_identifier_led()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(stmt)
            }
            _ => Err(self.error_here("expected a statement")),
        }
    }

    /// One of the clauses inside a `for (...)` header: either a typed
    /// declaration or an identifier-led assignment, without a terminating
    /// `;` (the `for` header owns its own separators).
    fn parse_for_clause(&mut self) -> ParseResult<Statement> {
        match self.peek_kind() {
            TokenKind::Int | TokenKind::Float | TokenKind::Char | TokenKind::Bool | TokenKind::Str => {
                self.parse_typed_declaration()
            }
            TokenKind::Identifier => self.parse_identifier_led(),
            _ => Err(self.error_here("expected a declaration or assignment")),
        }
    }

    fn parse_block(&mut self) -> ParseResult<Vec<Statement>> {
        self.expect(TokenKind::LBrace)?;
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) {
            statements.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(statements)
    }

    fn parse_class_def(&mut self) -> ParseResult<Statement> {
        let start = self.advance(); // `class`
        let position = (start.line, start.col);
        let name_tok = self.expect(TokenKind::Identifier)?;
        self.class_names.insert(name_tok.lexeme.clone());

        let base = if self.check(TokenKind::Colon) {
            self.advance();
            Some(self.expect(TokenKind::Identifier)?.lexeme)
        } else {
            None
        };

        self.expect(TokenKind::LBrace)?;
        let mut fields = Vec::new();
        let mut methods = Vec::new();
        while !self.check(TokenKind::RBrace) {
            match self.peek_kind() {
                TokenKind::ComeAndDo => methods.push(self.parse_function_def_inner()?),
                TokenKind::Int | TokenKind::Float | TokenKind::Char | TokenKind::Bool | TokenKind::Str => {
                    let type_tok = self.advance();
                    let field_name = self.expect(TokenKind::Identifier)?.lexeme;
                    self.expect(TokenKind::Semicolon)?;
                    fields.push((type_tok.lexeme, field_name));
                }
                _ => return Err(self.error_here("expected a field or method declaration")),
            }
        }
        self.expect(TokenKind::RBrace)?;

        Ok(Statement::ClassDefinition(ClassDef {
            name: name_tok.lexeme,
            base,
            fields,
            methods,
            position,
        }))
    }

    fn parse_function_def_inner(&mut self) -> ParseResult<FunctionDef> {
        let start = self.advance(); // `ComeAndDo`
        let position = (start.line, start.col);
        let name = self.expect(TokenKind::Identifier)?.lexeme;
        self.expect(TokenKind::LParen)?;
        let params = self.parse_params()?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(FunctionDef {
            name,
            params,
            body,
            position,
        })
    }

    fn parse_params(&mut self) -> ParseResult<Vec<String>> {
        let mut params = Vec::new();
        if self.check(TokenKind::RParen) {
            return Ok(params);
        }
        loop {
            if matches!(
                self.peek_kind(),
                TokenKind::Int | TokenKind::Float | TokenKind::Char | TokenKind::Bool | TokenKind::Str
            ) {
                self.advance();
            }
            params.push(self.expect(TokenKind::Identifier)?.lexeme);
            if self.check(TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        Ok(params)
    }

    fn parse_args(&mut self) -> ParseResult<Vec<Expression>> {
        let mut args = Vec::new();
        if self.check(TokenKind::RParen) {
            self.advance();
            return Ok(args);
        }
        loop {
            args.push(self.parse_expression()?);
            if self.check(TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(args)
    }

    fn parse_if(&mut self) -> ParseResult<Statement> {
        let start = self.advance(); // `if`
        let position = (start.line, start.col);
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        let then_branch = self.parse_block()?;
        let else_branch = if self.check(TokenKind::Else) {
            self.advance();
            self.parse_block()?
        } else {
            Vec::new()
        };
        Ok(Statement::If {
            condition,
            then_branch,
            else_branch,
            position,
        })
    }

    fn parse_while(&mut self) -> ParseResult<Statement> {
        let start = self.advance(); // `while`
        let position = (start.line, start.col);
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(Statement::While {
            condition,
            body,
            position,
        })
    }

    fn parse_for(&mut self) -> ParseResult<Statement> {
        let start = self.advance(); // `for`
        let position = (start.line, start.col);
        self.expect(TokenKind::LParen)?;

        let init = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(Box::new(self.parse_for_clause()?))
        };
        self.expect(TokenKind::Semicolon)?;

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Semicolon)?;

        let increment = if self.check(TokenKind::RParen) {
            None
        } else {
            Some(Box::new(self.parse_for_clause()?))
        };
        self.expect(TokenKind::RParen)?;

        let body = self.parse_block()?;

        Ok(Statement::For {
            init,
            condition,
            increment,
            body,
            position,
        })
    }

    fn parse_print(&mut self) -> ParseResult<Statement> {
        let start = self.advance(); // `print`
        let position = (start.line, start.col);
        self.expect(TokenKind::LParen)?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        Ok(Statement::Print { value, position })
    }

    fn parse_return(&mut self) -> ParseResult<Statement> {
        let start = self.advance(); // `return`
        let position = (start.line, start.col);
        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        Ok(Statement::Return { value, position })
    }

    fn parse_typed_declaration(&mut self) -> ParseResult<Statement> {
        let type_tok = self.advance();
        let position = (type_tok.line, type_tok.col);
        let element_type = type_tok.lexeme;
        let name = self.expect(TokenKind::Identifier)?.lexeme;

        if self.check(TokenKind::LBracket) {
            self.advance();
            if self.check(TokenKind::RBracket) {
                self.advance();
                if self.check(TokenKind::Assign) {
                    self.advance();
                    let initializer = self.parse_array_literal()?;
                    return Ok(Statement::ArrayDeclaration {
                        name,
                        element_type,
                        size: None,
                        initializer: Some(initializer),
                        position,
                    });
                }
                return Ok(Statement::ArrayDeclaration {
                    name,
                    element_type,
                    size: None,
                    initializer: None,
                    position,
                });
            }
            let size = self.parse_expression()?;
            self.expect(TokenKind::RBracket)?;
            return Ok(Statement::ArrayDeclaration {
                name,
                element_type,
                size: Some(size),
                initializer: None,
                position,
            });
        }

        if self.check(TokenKind::Assign) {
            self.advance();
            let value = self.parse_expression()?;
            return Ok(Statement::Assignment {
                name,
                declared_type: Some(element_type),
                value: Some(value),
                position,
            });
        }

        Ok(Statement::Assignment {
            name,
            declared_type: Some(element_type),
            value: None,
            position,
        })
    }

    fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        let start = self.expect(TokenKind::LBrace)?;
        let position = (start.line, start.col);
        let mut elements = Vec::new();
        if !self.check(TokenKind::RBrace) {
            loop {
                elements.push(self.parse_expression()?);
                if self.check(TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(TokenKind::RBrace)?;
        Ok(Expression::ArrayLiteral { elements, position })
    }

    fn parse_identifier_led(&mut self) -> ParseResult<Statement> {
        let name_tok = self.expect(TokenKind::Identifier)?;
        let position = (name_tok.line, name_tok.col);

        if self.class_names.contains(&name_tok.lexeme) {
            let var_tok = self.expect(TokenKind::Identifier)?;

            if self.check(TokenKind::LBracket) {
                self.advance();
                let size = self.parse_expression()?;
                self.expect(TokenKind::RBracket)?;
                return Ok(Statement::ObjectArrayDeclaration {
                    class_name: name_tok.lexeme,
                    var_name: var_tok.lexeme,
                    size,
                    position,
                });
            }

            if self.check(TokenKind::LParen) {
                self.advance();
                let args = self.parse_args()?;
                return Ok(Statement::Instantiate {
                    class_name: name_tok.lexeme,
                    var_name: var_tok.lexeme,
                    args: Some(args),
                    position,
                });
            }

            return Ok(Statement::Instantiate {
                class_name: name_tok.lexeme,
                var_name: var_tok.lexeme,
                args: None,
                position,
            });
        }

        let target = self.parse_postfix_from_identifier(name_tok.lexeme, position)?;

        if self.check(TokenKind::Assign) {
            self.advance();
            let value = self.parse_expression()?;
            return self.build_assignment(target, value, position);
        }

        Ok(Statement::ExpressionStatement(target))
    }

    fn build_assignment(&self, target: Expression, value: Expression, position: crate::ast::Position) -> ParseResult<Statement> {
        match target {
            Expression::Variable { name, .. } => Ok(Statement::Assignment {
                name,
                declared_type: None,
                value: Some(value),
                position,
            }),
            Expression::Index { array, index, .. } => Ok(Statement::ArrayElementAssignment {
                array,
                index: *index,
                value,
                position,
            }),
            Expression::Member { object, member, .. } => {
                self.check_constant_index_chain(&object)?;
                Ok(Statement::FieldAssignment {
                    object,
                    field: member,
                    value,
                    position,
                })
            }
            other => {
                let (line, col) = other.position();
                Err(ParseError::new("invalid assignment target", line, col, None))
            }
        }
    }

    /// `obj.field = x` is always fine; `arr[idx].field = x` is only fine
    /// when `idx` is a constant — the reference implementation's `?`
    /// sentinel for non-constant indices becomes a clean parse error here.
    fn check_constant_index_chain(&self, object: &Expression) -> ParseResult<()> {
        match object {
            Expression::Variable { .. } => Ok(()),
            Expression::Index { index, .. } => match index.as_ref() {
                Expression::IntLiteral { .. } => Ok(()),
                other => {
                    let (line, col) = other.position();
                    Err(ParseError::new(
                        "non-constant index in assignment target",
                        line,
                        col,
                        None,
                    ))
                }
            },
            other => {
                let (line, col) = other.position();
                Err(ParseError::new("invalid assignment target", line, col, None))
            }
        }
    }

    // ---- expressions --------------------------------------------------

    fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_and()?;
        while self.check(TokenKind::OrOr) {
            let tok = self.advance();
            let right = self.parse_and()?;
            left = Expression::Binary {
                op: BinaryOp::Or,
                left: Box::new(left),
                right: Box::new(right),
                position: (tok.line, tok.col),
            };
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_comparison()?;
        while self.check(TokenKind::AndAnd) {
            let tok = self.advance();
            let right = self.parse_comparison()?;
            left = Expression::Binary {
                op: BinaryOp::And,
                left: Box::new(left),
                right: Box::new(right),
                position: (tok.line, tok.col),
            };
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::EqEq => BinaryOp::Eq,
                TokenKind::NotEq => BinaryOp::NotEq,
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::Gt => BinaryOp::Gt,
                _ => break,
            };
            let tok = self.advance();
            let right = self.parse_additive()?;
            left = Expression::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                position: (tok.line, tok.col),
            };
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            let tok = self.advance();
            let right = self.parse_multiplicative()?;
            left = Expression::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                position: (tok.line, tok.col),
            };
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => break,
            };
            let tok = self.advance();
            let right = self.parse_unary()?;
            left = Expression::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                position: (tok.line, tok.col),
            };
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> ParseResult<Expression> {
        match self.peek_kind() {
            TokenKind::Not => {
                let tok = self.advance();
                let operand = self.parse_unary()?;
                Ok(Expression::Unary {
                    op: UnaryOp::Not,
                    operand: Box::new(operand),
                    position: (tok.line, tok.col),
                })
            }
            TokenKind::Minus => {
                let tok = self.advance();
                let operand = self.parse_unary()?;
                Ok(Expression::Unary {
                    op: UnaryOp::Neg,
                    operand: Box::new(operand),
                    position: (tok.line, tok.col),
                })
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> ParseResult<Expression> {
        let tok = self.peek().clone();
        let position = (tok.line, tok.col);

        match tok.kind {
            TokenKind::IntegerLiteral => {
                self.advance();
                let value = tok
                    .lexeme
                    .parse::<i32>()
                    .map_err(|_| ParseError::new("integer literal out of range", tok.line, tok.col, None))?;
                Ok(Expression::IntLiteral { value, position })
            }
            TokenKind::FloatingLiteral => {
                self.advance();
                let value = tok
                    .lexeme
                    .parse::<f64>()
                    .map_err(|_| ParseError::new("invalid floating literal", tok.line, tok.col, None))?;
                Ok(Expression::FloatLiteral { value, position })
            }
            TokenKind::CharacterLiteral => {
                self.advance();
                let value = tok.lexeme.bytes().next().unwrap_or(0);
                Ok(Expression::CharLiteral { value, position })
            }
            TokenKind::StringLiteral => {
                self.advance();
                Ok(Expression::StringLiteral {
                    value: tok.lexeme,
                    position,
                })
            }
            TokenKind::BooleanLiteral => {
                self.advance();
                Ok(Expression::BoolLiteral {
                    value: tok.lexeme == "true",
                    position,
                })
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::Input => {
                self.advance();
                self.expect(TokenKind::LParen)?;
                self.expect(TokenKind::RParen)?;
                Ok(Expression::Input { position })
            }
            TokenKind::Read => {
                self.advance();
                self.expect(TokenKind::LParen)?;
                let filename_tok = self.expect(TokenKind::StringLiteral)?;
                self.expect(TokenKind::RParen)?;
                Ok(Expression::FileRead {
                    filename: filename_tok.lexeme,
                    position,
                })
            }
            TokenKind::Identifier => {
                self.advance();
                self.parse_postfix_from_identifier(tok.lexeme, position)
            }
            _ => Err(self.error_at(&tok, format!("unexpected token '{}'", tok.lexeme))),
        }
    }

    /// Greedily chains `[expr]`, `.member` (or `.method(args)`) after an
    /// identifier primary; a bare `(args)` is only valid directly on the
    /// identifier itself (a function call), never after a `.` chain.
    fn parse_postfix_from_identifier(&mut self, name: String, position: crate::ast::Position) -> ParseResult<Expression> {
        if self.check(TokenKind::LParen) {
            self.advance();
            let args = self.parse_args()?;
            return Ok(Expression::Call { callee: name, args, position });
        }

        let mut expr = Expression::Variable { name, position };

        loop {
            if self.check(TokenKind::LBracket) {
                self.advance();
                let index = self.parse_expression()?;
                self.expect(TokenKind::RBracket)?;
                let array = match &expr {
                    Expression::Variable { name, .. } => name.clone(),
                    _ => return Err(self.error_here("array indexing is only valid on a named array")),
                };
                expr = Expression::Index {
                    array,
                    index: Box::new(index),
                    position,
                };
                continue;
            }

            if self.check(TokenKind::Dot) {
                self.advance();
                let member_tok = self.expect(TokenKind::Identifier)?;
                if self.check(TokenKind::LParen) {
                    self.advance();
                    let args = self.parse_args()?;
                    expr = Expression::MethodCall {
                        object: Box::new(expr),
                        method: member_tok.lexeme,
                        args,
                        position,
                    };
                } else {
                    expr = Expression::Member {
                        object: Box::new(expr),
                        member: member_tok.lexeme,
                        position,
                    };
                }
                continue;
            }

            break;
        }

        Ok(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parse_src(src: &str) -> Vec<Statement> {
        let tokens = Lexer::new(src).lex().unwrap();
        parse(tokens, src).unwrap()
    }

    #[test]
    fn parses_scoped_integer_declaration() {
        let stmts = parse_src("int x = 100;");
        assert_eq!(stmts.len(), 1);
        assert!(matches!(stmts[0], Statement::Assignment { .. }));
    }

    #[test]
    fn parses_array_literal_declaration() {
        let stmts = parse_src("int arr[] = {1,2,3,4,5};");
        let Statement::ArrayDeclaration { initializer: Some(initializer), .. } = &stmts[0] else {
            panic!("expected array declaration with initializer");
        };
        let Expression::ArrayLiteral { elements, .. } = initializer else {
            panic!("expected initializer to be an array literal");
        };
        assert_eq!(elements.len(), 5);
    }

    #[test]
    fn parses_array_element_assignment() {
        let stmts = parse_src("arr[2] = 42;");
        assert!(matches!(stmts[0], Statement::ArrayElementAssignment { .. }));
    }

    #[test]
    fn parses_class_with_inheritance_and_constructor() {
        let stmts = parse_src(
            "class A { int v; ComeAndDo show(){ print(v); } }\n\
             class B : A { ComeAndDo init(int x){ v = x; } }\n\
             B b(7); b.show();",
        );
        assert_eq!(stmts.len(), 4);
        assert!(matches!(stmts[2], Statement::Instantiate { .. }));
        assert!(matches!(stmts[3], Statement::ExpressionStatement(Expression::MethodCall { .. })));
    }

    #[test]
    fn parses_object_array_declaration_and_field_assignment() {
        let stmts = parse_src("P p[2]; p[0].n = \"Alice\";");
        assert!(matches!(stmts[0], Statement::ObjectArrayDeclaration { .. }));
        assert!(matches!(stmts[1], Statement::FieldAssignment { .. }));
    }

    #[test]
    fn rejects_non_constant_index_in_field_assignment_target() {
        let tokens = Lexer::new("int i = 0; arr[i].n = 1;").lex().unwrap();
        let err = parse(tokens, "int i = 0; arr[i].n = 1;").unwrap_err();
        assert!(err.message.contains("non-constant index"));
    }

    #[test]
    fn precedence_climbs_multiplicative_over_additive() {
        let stmts = parse_src("print(1 + 2 * 3);");
        let Statement::Print { value: Expression::Binary { op: BinaryOp::Add, right, .. }, .. } = &stmts[0] else {
            panic!("expected top-level Add");
        };
        assert!(matches!(right.as_ref(), Expression::Binary { op: BinaryOp::Mul, .. }));
    }
}
