//! Class registry and inheritance-chain resolution (§4.4 "Inheritance
//! resolution"): base-first field/method flattening, child overrides by
//! name.
use std::collections::HashMap;

use crate::ast::{ClassDef, FunctionDef};
use crate::error::RuntimeError;

#[derive(Default)]
pub struct ClassTable {
    classes: HashMap<String, ClassDef>,
}

impl ClassTable {
    pub fn register(&mut self, class: ClassDef) {
        self.classes.insert(class.name.clone(), class);
    }

    pub fn get(&self, name: &str, line: usize, col: usize) -> Result<&ClassDef, RuntimeError> {
        self.classes.get(name).ok_or_else(|| RuntimeError::Name {
            kind: "class",
            name: name.to_owned(),
            line,
            col,
        })
    }

    /// Effective fields of `name`, base-first with child overrides, as
    /// (type, field name) pairs in merge order.
    pub fn effective_fields(&self, name: &str, line: usize, col: usize) -> Result<Vec<(String, String)>, RuntimeError> {
        let class = self.get(name, line, col)?;
        let mut fields = match &class.base {
            Some(base) => self.effective_fields(base, line, col)?,
            None => Vec::new(),
        };
        for (field_type, field_name) in &class.fields {
            if let Some(existing) = fields.iter_mut().find(|(_, n)| n == field_name) {
                *existing = (field_type.clone(), field_name.clone());
            } else {
                fields.push((field_type.clone(), field_name.clone()));
            }
        }
        Ok(fields)
    }

    /// Effective methods of `name`, base-first with child overrides,
    /// returned as owned clones since the interpreter needs to hold one
    /// independent of any further mutation of the table.
    pub fn effective_methods(&self, name: &str, line: usize, col: usize) -> Result<Vec<FunctionDef>, RuntimeError> {
        let class = self.get(name, line, col)?;
        let mut methods = match &class.base {
            Some(base) => self.effective_methods(base, line, col)?,
            None => Vec::new(),
        };
        for method in &class.methods {
            if let Some(existing) = methods.iter_mut().find(|m: &&mut FunctionDef| m.name == method.name) {
                *existing = method.clone();
            } else {
                methods.push(method.clone());
            }
        }
        Ok(methods)
    }

    pub fn find_method(&self, class_name: &str, method_name: &str, line: usize, col: usize) -> Result<Option<FunctionDef>, RuntimeError> {
        let methods = self.effective_methods(class_name, line, col)?;
        Ok(methods.into_iter().find(|m| m.name == method_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Position;

    fn class(name: &str, base: Option<&str>, fields: &[(&str, &str)], methods: &[&str]) -> ClassDef {
        ClassDef {
            name: name.to_owned(),
            base: base.map(str::to_owned),
            fields: fields.iter().map(|(t, n)| (t.to_string(), n.to_string())).collect(),
            methods: methods
                .iter()
                .map(|n| FunctionDef {
                    name: n.to_string(),
                    params: Vec::new(),
                    body: Vec::new(),
                    position: (0, 0) as Position,
                })
                .collect(),
            position: (0, 0),
        }
    }

    #[test]
    fn fields_merge_base_first_with_child_override() {
        let mut table = ClassTable::default();
        table.register(class("A", None, &[("int", "v")], &[]));
        table.register(class("B", Some("A"), &[("string", "n")], &[]));
        let fields = table.effective_fields("B", 0, 0).unwrap();
        assert_eq!(fields, vec![("int".to_string(), "v".to_string()), ("string".to_string(), "n".to_string())]);
    }

    #[test]
    fn missing_base_class_errors() {
        let mut table = ClassTable::default();
        table.register(class("B", Some("Missing"), &[], &[]));
        assert!(table.effective_fields("B", 1, 1).is_err());
    }
}
