use crate::lang::Error;
use std::rc::Rc;
use std::str::FromStr;

/// ## Virtual machine instruction set
///
/// The machine has no registers; every operation works on the
/// evaluation stack. For example `x = 3 * b` compiles to
/// `[LOADC 3, LOADV b, MUL, SET x]`.
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>

#[derive(Clone, PartialEq)]
pub enum Opcode {
    /// Push a constant on the stack.
    LoadC(f64),
    /// Push the value of a named variable. Prompts for a value if the
    /// variable has never been assigned one.
    LoadV(Rc<str>),
    /// Pop two values, combine, push the result.
    Add,
    Sub,
    Mul,
    Div,
    /// Pop the stack into a named variable.
    Set(Rc<str>),
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            LoadC(v) => write!(f, "LOADC {}", v),
            LoadV(s) => write!(f, "LOADV {}", s),
            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            Mul => write!(f, "MUL"),
            Div => write!(f, "DIV"),
            Set(s) => write!(f, "SET {}", s),
        }
    }
}

impl FromStr for Opcode {
    type Err = Error;

    /// Parses the textual instruction form produced by `Display`.
    /// Anything else is an invalid instruction.
    fn from_str(s: &str) -> Result<Opcode, Error> {
        let mut parts = s.split_whitespace();
        let mnemonic = parts.next().unwrap_or("");
        let operand = parts.next();
        if parts.next().is_some() {
            return Err(Error::InvalidInstruction(s.trim().into()));
        }
        match (mnemonic, operand) {
            ("LOADC", Some(v)) => match v.parse::<f64>() {
                Ok(v) => Ok(Opcode::LoadC(v)),
                Err(_) => Err(Error::InvalidInstruction(s.trim().into())),
            },
            ("LOADV", Some(name)) => Ok(Opcode::LoadV(name.into())),
            ("SET", Some(name)) => Ok(Opcode::Set(name.into())),
            ("ADD", None) => Ok(Opcode::Add),
            ("SUB", None) => Ok(Opcode::Sub),
            ("MUL", None) => Ok(Opcode::Mul),
            ("DIV", None) => Ok(Opcode::Div),
            _ => Err(Error::InvalidInstruction(s.trim().into())),
        }
    }
}
