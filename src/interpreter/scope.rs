//! The four parallel per-domain scope stacks (§4.4). Kept as four
//! independent stacks rather than one tagged environment so the
//! cross-domain read order and the integer-vs-other write asymmetry stay
//! exactly as observable properties of the lookup/write code, not an
//! accidental byproduct of a single merged map.
use std::collections::HashMap;

use crate::value::Value;

#[derive(Default, Debug)]
struct Stack {
    frames: Vec<HashMap<String, Value>>,
}

impl Stack {
    fn push(&mut self) {
        self.frames.push(HashMap::new());
    }

    fn pop(&mut self) {
        self.frames.pop();
    }

    fn find(&self, name: &str) -> Option<&Value> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// Writes to the innermost frame that already declares `name`; creates it
    /// in the current frame if no frame does.
    fn write_through(&mut self, name: &str, value: Value) {
        for frame in self.frames.iter_mut().rev() {
            if frame.contains_key(name) {
                frame.insert(name.to_owned(), value);
                return;
            }
        }
        if let Some(current) = self.frames.last_mut() {
            current.insert(name.to_owned(), value);
        }
    }

    /// Integer writes always land in the current frame, even if an
    /// enclosing frame already binds `name` (§4.4, kept as a deliberate
    /// quirk rather than "fixed" to match the other domains).
    fn write_local(&mut self, name: &str, value: Value) {
        if let Some(current) = self.frames.last_mut() {
            current.insert(name.to_owned(), value);
        }
    }

    fn top_contains(&self, name: &str) -> bool {
        self.frames.last().is_some_and(|frame| frame.contains_key(name))
    }

    fn top_get(&self, name: &str) -> Option<&Value> {
        self.frames.last().and_then(|frame| frame.get(name))
    }
}

/// The four domain stacks plus the shared global frame at the bottom of
/// each. Reads probe int, then float, then char, then string — an
/// observable quirk of the reference language (§4.4, §9), not a design
/// choice made here.
#[derive(Default, Debug)]
pub struct Scope {
    ints: Stack,
    floats: Stack,
    chars: Stack,
    strings: Stack,
}

impl Scope {
    pub fn new() -> Self {
        let mut scope = Self::default();
        scope.push_frame();
        scope
    }

    pub fn push_frame(&mut self) {
        self.ints.push();
        self.floats.push();
        self.chars.push();
        self.strings.push();
    }

    pub fn pop_frame(&mut self) {
        self.ints.pop();
        self.floats.pop();
        self.chars.pop();
        self.strings.pop();
    }

    pub fn find(&self, name: &str) -> Option<Value> {
        self.ints
            .find(name)
            .or_else(|| self.floats.find(name))
            .or_else(|| self.chars.find(name))
            .or_else(|| self.strings.find(name))
            .cloned()
    }

    /// Binds `name` to `value` using the write rule for `value`'s domain.
    pub fn write(&mut self, name: &str, value: Value) {
        match value {
            Value::Int(_) => self.ints.write_local(name, value),
            Value::Float(_) => self.floats.write_through(name, value),
            Value::Char(_) => self.chars.write_through(name, value),
            Value::Str(_) => self.strings.write_through(name, value),
            Value::ObjectArrayElement { .. } => self.strings.write_through(name, value),
        }
    }

    /// True if `name` is bound in the current (innermost) frame of any
    /// domain — used by method dispatch to decide which fields changed
    /// during the call and must be written back to the receiver.
    pub fn top_contains(&self, name: &str) -> bool {
        self.ints.top_contains(name)
            || self.floats.top_contains(name)
            || self.chars.top_contains(name)
            || self.strings.top_contains(name)
    }

    /// The current frame's value for `name`, across all domains.
    pub fn top_get(&self, name: &str) -> Option<Value> {
        self.ints
            .top_get(name)
            .or_else(|| self.floats.top_get(name))
            .or_else(|| self.chars.top_get(name))
            .or_else(|| self.strings.top_get(name))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_after_write_in_same_scope_round_trips() {
        let mut scope = Scope::new();
        scope.write("x", Value::Int(100));
        assert_eq!(scope.find("x"), Some(Value::Int(100)));
    }

    #[test]
    fn integer_write_never_writes_through() {
        let mut scope = Scope::new();
        scope.write("x", Value::Int(100));
        scope.push_frame();
        scope.write("x", Value::Int(42));
        assert_eq!(scope.find("x"), Some(Value::Int(42)));
        scope.pop_frame();
        assert_eq!(scope.find("x"), Some(Value::Int(100)));
    }

    #[test]
    fn string_write_writes_through_to_enclosing_frame() {
        let mut scope = Scope::new();
        scope.write("s", Value::Str("outer".into()));
        scope.push_frame();
        scope.write("s", Value::Str("inner".into()));
        scope.pop_frame();
        assert_eq!(scope.find("s"), Some(Value::Str("inner".into())));
    }

    #[test]
    fn int_domain_is_probed_before_string_domain() {
        let mut scope = Scope::new();
        scope.write("v", Value::Str("text".into()));
        scope.push_frame();
        scope.write("v", Value::Int(7));
        assert_eq!(scope.find("v"), Some(Value::Int(7)));
    }

    #[test]
    fn float_declaration_writes_through_to_an_enclosing_binding_of_the_same_name() {
        let mut scope = Scope::new();
        scope.write("f", Value::Float(1.0));
        scope.push_frame();
        scope.write("f", Value::Float(2.0));
        scope.pop_frame();
        assert_eq!(scope.find("f"), Some(Value::Float(2.0)));
    }
}
