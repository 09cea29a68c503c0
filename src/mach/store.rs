use std::collections::HashMap;
use std::rc::Rc;

/// ## Variable memory contract
///
/// The code generator registers every name it sees; the runtime reads
/// and writes values. A registered name holding no value is declared
/// but unassigned; `prompt_for_value` must obtain a value for such a
/// name through whatever channel the implementation has and store it.
pub trait Store {
    fn contains(&self, name: &str) -> bool;
    fn get(&self, name: &str) -> Option<f64>;
    fn set(&mut self, name: &str, value: f64);
    fn register(&mut self, name: &str);
    fn prompt_for_value(&mut self, name: &str);
    fn clear(&mut self);
}

/// In-memory store. The prompt channel is a closure supplied by the
/// caller; the terminal front end reads a number interactively, tests
/// script the replies.
pub struct Memory {
    vars: HashMap<Rc<str>, Option<f64>>,
    prompt: Box<dyn FnMut(&str) -> f64>,
}

impl Memory {
    pub fn new<F>(prompt: F) -> Memory
    where
        F: FnMut(&str) -> f64 + 'static,
    {
        Memory {
            vars: HashMap::new(),
            prompt: Box::new(prompt),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Default for Memory {
    /// A store whose prompt channel always answers zero.
    fn default() -> Memory {
        Memory::new(|_| 0.0)
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Memory {{ {:?} }}", self.vars)
    }
}

impl Store for Memory {
    fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<f64> {
        match self.vars.get(name) {
            Some(value) => *value,
            None => None,
        }
    }

    fn set(&mut self, name: &str, value: f64) {
        self.vars.insert(name.into(), Some(value));
    }

    fn register(&mut self, name: &str) {
        self.vars.entry(name.into()).or_insert(None);
    }

    fn prompt_for_value(&mut self, name: &str) {
        let value = (self.prompt)(name);
        self.set(name, value);
    }

    fn clear(&mut self) {
        self.vars.clear()
    }
}
