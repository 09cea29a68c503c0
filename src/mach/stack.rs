use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced vector
///
/// Push and pop only. Popping past empty is a contract violation of the
/// code generator and surfaces as an internal error, never a domain one.

#[derive(Default)]
pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { vec: vec![] }
    }

    pub fn clear(&mut self) {
        self.vec.clear()
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }

    pub fn push(&mut self, val: T) {
        self.vec.push(val)
    }

    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(Error::Internal("UNDERFLOW")),
        }
    }

    pub fn pop_2(&mut self) -> Result<(T, T)> {
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
}
