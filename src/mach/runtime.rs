use super::{Opcode, Program, Stack, Store};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack machine
///
/// Owns the evaluation stack; variable values live in the external
/// [`Store`]. One `execute` call is one run: the stack is fresh and the
/// first failing instruction aborts the rest of the stream.

#[derive(Debug, Default)]
pub struct Runtime {
    stack: Stack<f64>,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// The evaluation stack as the last run left it.
    pub fn stack(&self) -> &Stack<f64> {
        &self.stack
    }

    pub fn execute(&mut self, program: &Program, store: &mut dyn Store) -> Result<()> {
        self.stack.clear();
        for op in program.iter() {
            match op {
                Opcode::LoadC(value) => self.stack.push(*value),
                Opcode::LoadV(name) => {
                    if !store.contains(name) {
                        return Err(Error::UndefinedVariable(name.clone()));
                    }
                    if store.get(name).is_none() {
                        store.prompt_for_value(name);
                    }
                    match store.get(name) {
                        Some(value) => self.stack.push(value),
                        // the store broke the prompt contract
                        None => return Err(Error::UndefinedVariable(name.clone())),
                    }
                }
                Opcode::Add => {
                    let (a, b) = self.stack.pop_2()?;
                    self.stack.push(a + b);
                }
                Opcode::Sub => {
                    let (a, b) = self.stack.pop_2()?;
                    self.stack.push(a - b);
                }
                Opcode::Mul => {
                    let (a, b) = self.stack.pop_2()?;
                    self.stack.push(a * b);
                }
                Opcode::Div => {
                    let (a, b) = self.stack.pop_2()?;
                    if b == 0.0 {
                        return Err(Error::DivisionByZero);
                    }
                    self.stack.push(a / b);
                }
                Opcode::Set(name) => {
                    if !store.contains(name) {
                        return Err(Error::UndefinedVariable(name.clone()));
                    }
                    let value = self.stack.pop()?;
                    store.set(name, value);
                }
            }
        }
        Ok(())
    }
}
