use super::Opcode;
use crate::lang::Error;
use std::str::FromStr;

/// ## Compiled instruction list
///
/// The artifact exchanged between the code generator and the runtime.
/// `Display` and `FromStr` give it a line-oriented textual form, one
/// instruction per line, suitable for listing or transport.

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Program {
    ops: Vec<Opcode>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn push(&mut self, op: Opcode) {
        self.ops.push(op)
    }

    pub fn append(&mut self, ops: &mut Vec<Opcode>) {
        self.ops.append(ops)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[Opcode] {
        &self.ops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Opcode> {
        self.ops.iter()
    }
}

impl From<Vec<Opcode>> for Program {
    fn from(ops: Vec<Opcode>) -> Program {
        Program { ops }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for op in &self.ops {
            writeln!(f, "{}", op)?;
        }
        Ok(())
    }
}

impl FromStr for Program {
    type Err = Error;

    fn from_str(s: &str) -> Result<Program, Error> {
        let mut program = Program::new();
        for line in s.lines() {
            if line.trim().is_empty() {
                continue;
            }
            program.push(line.parse::<Opcode>()?);
        }
        Ok(program)
    }
}
