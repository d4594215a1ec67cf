//! Object instances and object arrays. Both are global tables keyed by
//! variable name (§4.4 "Environments": "Arrays and objects are global
//! tables keyed by name; they are not scoped.").
use std::collections::HashMap;

use crate::value::Value;

/// A single instance's field values, keyed by field name.
#[derive(Debug, Clone)]
pub struct Object {
    pub class_name: String,
    pub fields: HashMap<String, Value>,
}

impl Object {
    pub fn new(class_name: String, fields: HashMap<String, Value>) -> Self {
        Self { class_name, fields }
    }
}

/// A receiver for a method call or field access: a named object, or an
/// element of a named object array.
#[derive(Debug, Clone)]
pub enum Receiver {
    Named(String),
    ArrayElement { array: String, index: usize },
}

#[derive(Default)]
pub struct ObjectTable {
    objects: HashMap<String, Object>,
    arrays: HashMap<String, Vec<Object>>,
}

impl ObjectTable {
    pub fn insert(&mut self, name: String, object: Object) {
        self.objects.insert(name, object);
    }

    pub fn get(&self, name: &str) -> Option<&Object> {
        self.objects.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Object> {
        self.objects.get_mut(name)
    }

    pub fn insert_array(&mut self, name: String, objects: Vec<Object>) {
        self.arrays.insert(name, objects);
    }

    pub fn array_len(&self, name: &str) -> Option<usize> {
        self.arrays.get(name).map(Vec::len)
    }

    pub fn get_element(&self, array: &str, index: usize) -> Option<&Object> {
        self.arrays.get(array).and_then(|elements| elements.get(index))
    }

    pub fn get_element_mut(&mut self, array: &str, index: usize) -> Option<&mut Object> {
        self.arrays.get_mut(array).and_then(|elements| elements.get_mut(index))
    }

    pub fn resolve(&self, receiver: &Receiver) -> Option<&Object> {
        match receiver {
            Receiver::Named(name) => self.get(name),
            Receiver::ArrayElement { array, index } => self.get_element(array, *index),
        }
    }

    pub fn resolve_mut(&mut self, receiver: &Receiver) -> Option<&mut Object> {
        match receiver {
            Receiver::Named(name) => self.get_mut(name),
            Receiver::ArrayElement { array, index } => self.get_element_mut(array, *index),
        }
    }
}
