use super::token::Token;
use std::rc::Rc;

/// Every way a line can fail to compile or a program can fail to run.
/// Variants carry the offending values; formatting is deferred to
/// `Display`.
#[derive(PartialEq, Clone)]
pub enum Error {
    // compile time
    EmptyExpression,
    UnbalancedParens,
    InvalidPair(Token, Token),
    InvalidBoundary,
    NotAnAssignment,
    // run time
    InvalidInstruction(Rc<str>),
    UndefinedVariable(Rc<str>),
    DivisionByZero,
    /// Contract violation inside the machine, such as popping an empty
    /// stack. A correctly generated program never produces one.
    Internal(&'static str),
}

impl Error {
    /// Terminal numeric code. Zero is reserved for success.
    pub fn code(&self) -> u16 {
        use Error::*;
        match self {
            InvalidInstruction(_) => 1,
            UndefinedVariable(_) => 2,
            DivisionByZero => 3,
            EmptyExpression => 4,
            UnbalancedParens => 5,
            InvalidPair(..) => 6,
            InvalidBoundary => 7,
            NotAnAssignment => 8,
            Internal(_) => 51,
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Error::*;
        match self {
            EmptyExpression => write!(f, "EMPTY EXPRESSION"),
            UnbalancedParens => write!(f, "UNBALANCED PARENTHESES"),
            InvalidPair(a, b) => write!(f, "INVALID TOKEN PAIR '{}', '{}'", a, b),
            InvalidBoundary => write!(f, "INVALID FIRST OR LAST TOKEN"),
            NotAnAssignment => write!(f, "NOT AN ASSIGNMENT"),
            InvalidInstruction(s) => write!(f, "INVALID INSTRUCTION {}", s),
            UndefinedVariable(s) => write!(f, "UNDEFINED VARIABLE {}", s),
            DivisionByZero => write!(f, "DIVISION BY ZERO"),
            Internal(s) => write!(f, "INTERNAL ERROR; {}", s),
        }
    }
}
