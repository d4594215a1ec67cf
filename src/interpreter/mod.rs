//! Tree-walking evaluator (§4.4): three-pass top-level execution, the four
//! parallel scope stacks, class/object tables, and call/dispatch rules.
mod class;
mod object;
mod scope;

use std::collections::HashMap;
use std::fs;
use std::io::{self, BufRead, Write};

use log::{debug, trace};

use crate::ast::{BinaryOp, Expression, FunctionDef, Position, Statement, UnaryOp};
use crate::error::{RuntimeError, TinyLangError};
use crate::value::Value;

use class::ClassTable;
use object::{Object, ObjectTable, Receiver};
use scope::Scope;

/// What a statement or block wants the caller to do next: keep going, or
/// unwind with a return value. Loops and `if` branches propagate a `Return`
/// straight up to the nearest function/method call.
enum Flow {
    Next,
    Return(Value),
}

pub struct Interpreter {
    functions: HashMap<String, FunctionDef>,
    classes: ClassTable,
    objects: ObjectTable,
    arrays: HashMap<String, Vec<Value>>,
    scope: Scope,
    out: Box<dyn Write>,
}

impl Interpreter {
    /// An interpreter that prints to standard output, as the driver uses.
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// An interpreter that writes `print` output to `out` instead of
    /// standard output — used by tests that need to assert on program
    /// output without racing other tests over the real stdout.
    pub fn with_writer(out: Box<dyn Write>) -> Self {
        Self {
            functions: HashMap::new(),
            classes: ClassTable::default(),
            objects: ObjectTable::default(),
            arrays: HashMap::new(),
            scope: Scope::new(),
            out,
        }
    }

    /// Runs a full program in the three passes required by the forward
    /// reference invariants of §4.4: classes first, then every bare
    /// (no-constructor) object declaration, then everything else in source
    /// order.
    pub fn run(&mut self, statements: &[Statement]) -> Result<(), TinyLangError> {
        for stmt in statements {
            if let Statement::ClassDefinition(class) = stmt {
                debug!("registering class '{}'", class.name);
                self.classes.register(class.clone());
            }
        }

        for stmt in statements {
            match stmt {
                Statement::Instantiate {
                    class_name,
                    var_name,
                    args: None,
                    position,
                } => {
                    self.default_instantiate(class_name, var_name, *position)?;
                }
                Statement::ObjectArrayDeclaration {
                    class_name,
                    var_name,
                    size,
                    position,
                } => {
                    self.default_instantiate_array(class_name, var_name, size, *position)?;
                }
                _ => {}
            }
        }

        for stmt in statements {
            match stmt {
                Statement::ClassDefinition(_) => {}
                Statement::Instantiate { args: None, .. } => {}
                Statement::ObjectArrayDeclaration { .. } => {}
                other => {
                    self.exec_statement(other)?;
                }
            }
        }

        Ok(())
    }

    fn exec_block(&mut self, statements: &[Statement]) -> Result<Flow, TinyLangError> {
        for stmt in statements {
            match self.exec_statement(stmt)? {
                Flow::Next => {}
                returned @ Flow::Return(_) => return Ok(returned),
            }
        }
        Ok(Flow::Next)
    }

    fn exec_statement(&mut self, stmt: &Statement) -> Result<Flow, TinyLangError> {
        trace!("executing statement");
        match stmt {
            Statement::Assignment {
                name,
                declared_type,
                value,
                ..
            } => {
                let v = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => zero_value_for_type(declared_type.as_deref().unwrap_or("int")),
                };
                self.scope.write(name, v);
                Ok(Flow::Next)
            }
            Statement::FieldAssignment {
                object,
                field,
                value,
                position,
            } => {
                let receiver = self.resolve_receiver_expr(object)?;
                let v = self.eval_expr(value)?;
                let (line, col) = *position;
                let label = receiver_label(&receiver);
                let obj = self
                    .objects
                    .resolve_mut(&receiver)
                    .ok_or_else(|| RuntimeError::Name { kind: "object", name: label, line, col })?;
                obj.fields.insert(field.clone(), v);
                Ok(Flow::Next)
            }
            Statement::ArrayElementAssignment { array, index, value, position } => {
                let idx_value = self.eval_expr(index)?;
                let v = self.eval_expr(value)?;
                let (line, col) = *position;
                let idx = Self::as_i32(&idx_value, line, col)?;
                let len = self.arrays.get(array).map(Vec::len).unwrap_or(0);
                if idx < 0 || idx as usize >= len {
                    return Err(RuntimeError::Bounds { name: array.clone(), index: idx as i64, len, line, col }.into());
                }
                if let Some(values) = self.arrays.get_mut(array) {
                    values[idx as usize] = v;
                }
                Ok(Flow::Next)
            }
            Statement::ArrayDeclaration { name, element_type, size, initializer, position } => {
                let (line, col) = *position;
                let values = if let Some(init_expr) = initializer {
                    match init_expr {
                        Expression::ArrayLiteral { elements, .. } => {
                            let mut values = Vec::with_capacity(elements.len());
                            for element in elements {
                                values.push(self.eval_expr(element)?);
                            }
                            values
                        }
                        _ => {
                            return Err(RuntimeError::Type {
                                message: "array initializer must be an array literal".into(),
                                line,
                                col,
                            }
                            .into());
                        }
                    }
                } else if let Some(size_expr) = size {
                    let size_value = self.eval_expr(size_expr)?;
                    let n = Self::as_i32(&size_value, line, col)?;
                    if n < 0 {
                        return Err(RuntimeError::Bounds { name: name.clone(), index: n as i64, len: 0, line, col }.into());
                    }
                    vec![zero_value_for_type(element_type); n as usize]
                } else {
                    Vec::new()
                };
                self.arrays.insert(name.clone(), values);
                Ok(Flow::Next)
            }
            Statement::ObjectArrayDeclaration { class_name, var_name, size, position } => {
                self.default_instantiate_array(class_name, var_name, size, *position)?;
                Ok(Flow::Next)
            }
            Statement::Print { value, .. } => {
                let v = self.eval_expr(value)?;
                writeln!(self.out, "{}", v.display_string()).map_err(|e| RuntimeError::Io { message: e.to_string() })?;
                Ok(Flow::Next)
            }
            Statement::FunctionDefinition(def) => {
                debug!("registering function '{}'", def.name);
                self.functions.insert(def.name.clone(), def.clone());
                Ok(Flow::Next)
            }
            Statement::Return { value, .. } => {
                let v = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Int(0),
                };
                Ok(Flow::Return(v))
            }
            Statement::If { condition, then_branch, else_branch, .. } => {
                let c = self.eval_expr(condition)?;
                if c.is_truthy() {
                    self.exec_block(then_branch)
                } else {
                    self.exec_block(else_branch)
                }
            }
            Statement::While { condition, body, .. } => {
                loop {
                    let c = self.eval_expr(condition)?;
                    if !c.is_truthy() {
                        break;
                    }
                    match self.exec_block(body)? {
                        Flow::Next => {}
                        returned @ Flow::Return(_) => return Ok(returned),
                    }
                }
                Ok(Flow::Next)
            }
            Statement::For { init, condition, increment, body, .. } => {
                if let Some(init_stmt) = init {
                    self.exec_statement(init_stmt)?;
                }
                loop {
                    let proceed = match condition {
                        Some(cond) => self.eval_expr(cond)?.is_truthy(),
                        None => true,
                    };
                    if !proceed {
                        break;
                    }
                    match self.exec_block(body)? {
                        Flow::Next => {}
                        returned @ Flow::Return(_) => return Ok(returned),
                    }
                    if let Some(inc_stmt) = increment {
                        self.exec_statement(inc_stmt)?;
                    }
                }
                Ok(Flow::Next)
            }
            Statement::ExpressionStatement(expr) => {
                self.eval_expr(expr)?;
                Ok(Flow::Next)
            }
            Statement::ClassDefinition(class) => {
                self.classes.register(class.clone());
                Ok(Flow::Next)
            }
            Statement::Instantiate { class_name, var_name, args: None, position } => {
                self.default_instantiate(class_name, var_name, *position)?;
                Ok(Flow::Next)
            }
            Statement::Instantiate { class_name, var_name, args: Some(args), position } => {
                self.default_instantiate(class_name, var_name, *position)?;
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval_expr(arg)?);
                }
                self.call_method_on_receiver(Receiver::Named(var_name.clone()), "init", values, *position)?;
                Ok(Flow::Next)
            }
        }
    }

    fn eval_expr(&mut self, expr: &Expression) -> Result<Value, TinyLangError> {
        match expr {
            Expression::IntLiteral { value, .. } => Ok(Value::Int(*value)),
            Expression::FloatLiteral { value, .. } => Ok(Value::Float(*value)),
            Expression::CharLiteral { value, .. } => Ok(Value::Char(*value)),
            Expression::BoolLiteral { value, .. } => Ok(Value::Int(*value as i32)),
            Expression::StringLiteral { value, .. } => Ok(Value::Str(value.clone())),
            Expression::Variable { name, position } => {
                let (line, col) = *position;
                self.scope
                    .find(name)
                    .ok_or_else(|| RuntimeError::Name { kind: "variable", name: name.clone(), line, col }.into())
            }
            Expression::Unary { op, operand, position } => {
                let v = self.eval_expr(operand)?;
                let (line, col) = *position;
                Self::eval_unary(*op, v, line, col).map_err(TinyLangError::from)
            }
            Expression::Binary { op, left, right, position } => {
                let (line, col) = *position;
                match op {
                    BinaryOp::And => {
                        let l = self.eval_expr(left)?;
                        if !l.is_truthy() {
                            return Ok(Value::Int(0));
                        }
                        let r = self.eval_expr(right)?;
                        Ok(Value::Int(r.is_truthy() as i32))
                    }
                    BinaryOp::Or => {
                        let l = self.eval_expr(left)?;
                        if l.is_truthy() {
                            return Ok(Value::Int(1));
                        }
                        let r = self.eval_expr(right)?;
                        Ok(Value::Int(r.is_truthy() as i32))
                    }
                    other => {
                        let l = self.eval_expr(left)?;
                        let r = self.eval_expr(right)?;
                        Ok(Self::eval_binary(*other, l, r, line, col)?)
                    }
                }
            }
            Expression::Call { callee, args, position } => self.call_function(callee, args, *position),
            Expression::Index { array, index, position } => {
                let idx_value = self.eval_expr(index)?;
                let (line, col) = *position;
                let idx = Self::as_i32(&idx_value, line, col)?;
                if idx < 0 {
                    let len = self.arrays.get(array).map(Vec::len).unwrap_or(0);
                    return Err(RuntimeError::Bounds { name: array.clone(), index: idx as i64, len, line, col }.into());
                }
                let values = self
                    .arrays
                    .get(array)
                    .ok_or_else(|| RuntimeError::Name { kind: "array", name: array.clone(), line, col })?;
                values
                    .get(idx as usize)
                    .cloned()
                    .ok_or_else(|| RuntimeError::Bounds { name: array.clone(), index: idx as i64, len: values.len(), line, col }.into())
            }
            Expression::ArrayLiteral { position, .. } => {
                let (line, col) = *position;
                Err(RuntimeError::Type {
                    message: "array literal is only valid as an array declaration initializer".into(),
                    line,
                    col,
                }
                .into())
            }
            Expression::Member { object, member, position } => {
                let receiver = self.resolve_receiver_expr(object)?;
                let (line, col) = *position;
                let label = receiver_label(&receiver);
                let obj = self
                    .objects
                    .resolve(&receiver)
                    .ok_or_else(|| RuntimeError::Name { kind: "object", name: label, line, col })?;
                obj.fields
                    .get(member)
                    .cloned()
                    .ok_or_else(|| RuntimeError::Name { kind: "field", name: member.clone(), line, col }.into())
            }
            Expression::MethodCall { object, method, args, position } => {
                let receiver = self.resolve_receiver_expr(object)?;
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval_expr(arg)?);
                }
                self.call_method_on_receiver(receiver, method, values, *position)
            }
            Expression::Input { .. } => {
                let mut line = String::new();
                io::stdin()
                    .lock()
                    .read_line(&mut line)
                    .map_err(|e| RuntimeError::Io { message: e.to_string() })?;
                let trimmed = line.trim();
                trimmed
                    .parse::<i32>()
                    .map(Value::Int)
                    .map_err(|_| RuntimeError::Io { message: format!("'{trimmed}' is not a valid integer") }.into())
            }
            Expression::FileRead { filename, .. } => {
                let contents = fs::read_to_string(filename)
                    .map_err(|e| RuntimeError::Io { message: format!("could not read '{filename}': {e}") })?;
                let token = contents
                    .split_whitespace()
                    .next()
                    .ok_or_else(|| RuntimeError::Io { message: format!("'{filename}' contains no whitespace-separated token") })?;
                token
                    .parse::<i32>()
                    .map(Value::Int)
                    .map_err(|_| RuntimeError::Io { message: format!("'{token}' in '{filename}' is not a valid integer") }.into())
            }
        }
    }

    fn resolve_receiver_expr(&mut self, expr: &Expression) -> Result<Receiver, TinyLangError> {
        match expr {
            Expression::Variable { name, .. } => Ok(Receiver::Named(name.clone())),
            Expression::Index { array, index, position } => {
                let idx_value = self.eval_expr(index)?;
                let (line, col) = *position;
                let idx = Self::as_i32(&idx_value, line, col)?;
                let len = self.objects.array_len(array).unwrap_or(0);
                if idx < 0 || idx as usize >= len {
                    return Err(RuntimeError::Bounds { name: array.clone(), index: idx as i64, len, line, col }.into());
                }
                Ok(Receiver::ArrayElement { array: array.clone(), index: idx as usize })
            }
            other => {
                let (line, col) = other.position();
                Err(RuntimeError::Type { message: "expected an object or an object-array element".into(), line, col }.into())
            }
        }
    }

    fn default_instantiate(&mut self, class_name: &str, var_name: &str, position: Position) -> Result<(), TinyLangError> {
        let (line, col) = position;
        let fields = self.classes.effective_fields(class_name, line, col)?;
        let mut field_map = HashMap::with_capacity(fields.len());
        for (field_type, field_name) in fields {
            field_map.insert(field_name, zero_value_for_type(&field_type));
        }
        self.objects.insert(var_name.to_owned(), Object::new(class_name.to_owned(), field_map));
        Ok(())
    }

    fn default_instantiate_array(
        &mut self,
        class_name: &str,
        var_name: &str,
        size_expr: &Expression,
        position: Position,
    ) -> Result<(), TinyLangError> {
        let (line, col) = position;
        let size_value = self.eval_expr(size_expr)?;
        let n = Self::as_i32(&size_value, line, col)?;
        if n < 0 {
            return Err(RuntimeError::Bounds { name: var_name.to_owned(), index: n as i64, len: 0, line, col }.into());
        }
        let fields = self.classes.effective_fields(class_name, line, col)?;
        let mut elements = Vec::with_capacity(n as usize);
        for _ in 0..n {
            let field_map = fields
                .iter()
                .map(|(field_type, field_name)| (field_name.clone(), zero_value_for_type(field_type)))
                .collect();
            elements.push(Object::new(class_name.to_owned(), field_map));
        }
        self.objects.insert_array(var_name.to_owned(), elements);
        Ok(())
    }

    fn call_function(&mut self, name: &str, args_exprs: &[Expression], position: Position) -> Result<Value, TinyLangError> {
        let (line, col) = position;
        debug!("calling function '{name}'");
        let func = self
            .functions
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::Name { kind: "function", name: name.to_owned(), line, col })?;
        if func.params.len() != args_exprs.len() {
            return Err(RuntimeError::Arity {
                name: name.to_owned(),
                expected: func.params.len(),
                got: args_exprs.len(),
                line,
                col,
            }
            .into());
        }

        let mut values = Vec::with_capacity(args_exprs.len());
        for arg in args_exprs {
            values.push(self.eval_expr(arg)?);
        }

        self.scope.push_frame();
        for (param, value) in func.params.iter().zip(values) {
            self.scope.write(param, value);
        }
        let flow = self.exec_block(&func.body)?;
        self.scope.pop_frame();

        Ok(match flow {
            Flow::Return(v) => v,
            Flow::Next => Value::Int(0),
        })
    }

    /// Shared core of a method call and a parenthesised constructor call:
    /// pushes a frame, mirrors the receiver's fields into it, binds
    /// arguments, runs the body, then writes back any field whose name was
    /// touched in the call's own frame (§4.4 "Method call").
    fn call_method_on_receiver(
        &mut self,
        receiver: Receiver,
        method_name: &str,
        arg_values: Vec<Value>,
        position: Position,
    ) -> Result<Value, TinyLangError> {
        let (line, col) = position;
        let label = receiver_label(&receiver);
        debug!("calling method '{label}.{method_name}'");

        let class_name = self
            .objects
            .resolve(&receiver)
            .ok_or_else(|| RuntimeError::Name { kind: "object", name: label.clone(), line, col })?
            .class_name
            .clone();

        let method = self
            .classes
            .find_method(&class_name, method_name, line, col)?
            .ok_or_else(|| RuntimeError::Name { kind: "method", name: method_name.to_owned(), line, col })?;

        if method.params.len() != arg_values.len() {
            return Err(RuntimeError::Arity {
                name: method_name.to_owned(),
                expected: method.params.len(),
                got: arg_values.len(),
                line,
                col,
            }
            .into());
        }

        let field_names: Vec<String> = self
            .classes
            .effective_fields(&class_name, line, col)?
            .into_iter()
            .map(|(_, field_name)| field_name)
            .collect();

        let existing_fields = self
            .objects
            .resolve(&receiver)
            .ok_or_else(|| RuntimeError::Name { kind: "object", name: label.clone(), line, col })?
            .fields
            .clone();

        self.scope.push_frame();
        for (field_name, field_value) in &existing_fields {
            self.scope.write(field_name, field_value.clone());
        }
        for (param, value) in method.params.iter().zip(arg_values) {
            self.scope.write(param, value);
        }

        let flow = self.exec_block(&method.body)?;
        let result = match flow {
            Flow::Return(v) => v,
            Flow::Next => Value::Int(0),
        };

        let mut updated = existing_fields;
        for field_name in &field_names {
            if self.scope.top_contains(field_name) {
                if let Some(v) = self.scope.top_get(field_name) {
                    updated.insert(field_name.clone(), v);
                }
            }
        }
        self.scope.pop_frame();

        if let Some(obj) = self.objects.resolve_mut(&receiver) {
            obj.fields = updated;
        }

        Ok(result)
    }

    fn eval_unary(op: UnaryOp, operand: Value, line: usize, col: usize) -> Result<Value, RuntimeError> {
        match op {
            UnaryOp::Not => Ok(Value::Int(!operand.is_truthy() as i32)),
            UnaryOp::Neg => match operand {
                Value::Int(i) => Ok(Value::Int(-i)),
                Value::Float(f) => Ok(Value::Float(-f)),
                Value::Char(c) => Ok(Value::Int(-(c as i32))),
                _ => Err(RuntimeError::Type { message: format!("cannot negate a {}", operand.type_name()), line, col }),
            },
        }
    }

    /// Binary arithmetic/comparison dispatch (§4.3). `&&`/`||` never reach
    /// here — they short-circuit directly in `eval_expr`.
    fn eval_binary(op: BinaryOp, left: Value, right: Value, line: usize, col: usize) -> Result<Value, RuntimeError> {
        let is_str = |v: &Value| matches!(v, Value::Str(_));

        if op == BinaryOp::Add && (is_str(&left) || is_str(&right)) {
            return Ok(Value::Str(format!("{}{}", left.display_string(), right.display_string())));
        }
        if is_str(&left) || is_str(&right) {
            return match op {
                BinaryOp::Eq => Ok(Value::Int((left.display_string() == right.display_string()) as i32)),
                BinaryOp::NotEq => Ok(Value::Int((left.display_string() != right.display_string()) as i32)),
                _ => Err(RuntimeError::Type { message: "only + == != are defined for string operands".into(), line, col }),
            };
        }
        if matches!(left, Value::Float(_)) || matches!(right, Value::Float(_)) {
            let l = Self::as_f64(&left);
            let r = Self::as_f64(&right);
            return match op {
                BinaryOp::Add => Ok(Value::Float(l + r)),
                BinaryOp::Sub => Ok(Value::Float(l - r)),
                BinaryOp::Mul => Ok(Value::Float(l * r)),
                BinaryOp::Div => {
                    if r == 0.0 {
                        return Err(RuntimeError::Arithmetic { line, col });
                    }
                    Ok(Value::Float(l / r))
                }
                BinaryOp::Eq => Ok(Value::Int((l == r) as i32)),
                BinaryOp::NotEq => Ok(Value::Int((l != r) as i32)),
                BinaryOp::Lt => Ok(Value::Int((l < r) as i32)),
                BinaryOp::Gt => Ok(Value::Int((l > r) as i32)),
                BinaryOp::And | BinaryOp::Or => unreachable!("short-circuit operators never reach eval_binary"),
            };
        }
        if matches!(left, Value::Char(_)) && matches!(right, Value::Char(_)) {
            return match op {
                BinaryOp::Eq => Ok(Value::Int((left == right) as i32)),
                BinaryOp::NotEq => Ok(Value::Int((left != right) as i32)),
                _ => Err(RuntimeError::Type { message: "only == and != are defined between two char values".into(), line, col }),
            };
        }

        let l = Self::as_i32(&left, line, col)?;
        let r = Self::as_i32(&right, line, col)?;
        match op {
            BinaryOp::Add => Ok(Value::Int(l.wrapping_add(r))),
            BinaryOp::Sub => Ok(Value::Int(l.wrapping_sub(r))),
            BinaryOp::Mul => Ok(Value::Int(l.wrapping_mul(r))),
            BinaryOp::Div => {
                if r == 0 {
                    return Err(RuntimeError::Arithmetic { line, col });
                }
                Ok(Value::Int(l / r))
            }
            BinaryOp::Eq => Ok(Value::Int((l == r) as i32)),
            BinaryOp::NotEq => Ok(Value::Int((l != r) as i32)),
            BinaryOp::Lt => Ok(Value::Int((l < r) as i32)),
            BinaryOp::Gt => Ok(Value::Int((l > r) as i32)),
            BinaryOp::And | BinaryOp::Or => unreachable!("short-circuit operators never reach eval_binary"),
        }
    }

    fn as_f64(value: &Value) -> f64 {
        match value {
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
            Value::Char(c) => *c as f64,
            _ => 0.0,
        }
    }

    fn as_i32(value: &Value, line: usize, col: usize) -> Result<i32, RuntimeError> {
        match value {
            Value::Int(i) => Ok(*i),
            Value::Char(c) => Ok(*c as i32),
            other => Err(RuntimeError::Type { message: format!("expected a numeric value, found {}", other.type_name()), line, col }),
        }
    }
}

fn receiver_label(receiver: &Receiver) -> String {
    match receiver {
        Receiver::Named(name) => name.clone(),
        Receiver::ArrayElement { array, index } => format!("{array}[{index}]"),
    }
}

fn zero_value_for_type(type_name: &str) -> Value {
    match type_name {
        "float" => Value::Float(0.0),
        "char" => Value::Char(0),
        "string" => Value::Str(String::new()),
        _ => Value::Int(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::parse;

    fn run_ok(src: &str) {
        let tokens = Lexer::new(src).lex().unwrap();
        let statements = parse(tokens, src).unwrap();
        let mut interpreter = Interpreter::new();
        interpreter.run(&statements).unwrap();
    }

    #[test]
    fn scoped_integer_shadowing_matches_end_to_end_scenario() {
        let tokens = Lexer::new("int x = 100;").lex().unwrap();
        let statements = parse(tokens, "int x = 100;").unwrap();
        let mut interpreter = Interpreter::new();
        interpreter.run(&statements).unwrap();
        assert_eq!(interpreter.scope.find("x"), Some(Value::Int(100)));
    }

    #[test]
    fn array_literal_then_element_write_then_read() {
        let src = "int arr[] = {1,2,3,4,5}; arr[2] = 42;";
        let tokens = Lexer::new(src).lex().unwrap();
        let statements = parse(tokens, src).unwrap();
        let mut interpreter = Interpreter::new();
        interpreter.run(&statements).unwrap();
        assert_eq!(interpreter.arrays.get("arr").unwrap()[2], Value::Int(42));
        assert_eq!(interpreter.arrays.get("arr").unwrap()[0], Value::Int(1));
    }

    #[test]
    fn division_by_zero_is_an_arithmetic_error() {
        let src = "int a = 1 / 0;";
        let tokens = Lexer::new(src).lex().unwrap();
        let statements = parse(tokens, src).unwrap();
        let mut interpreter = Interpreter::new();
        let err = interpreter.run(&statements).unwrap_err();
        assert!(matches!(err, TinyLangError::Runtime(RuntimeError::Arithmetic { .. })));
    }

    #[test]
    fn single_inheritance_constructor_and_method_dispatch() {
        let src = "class A { int v; ComeAndDo show(){ print(v); } }\n\
                   class B : A { ComeAndDo init(int x){ v = x; } }\n\
                   B b(7); b.show();";
        run_ok(src);
    }
}
