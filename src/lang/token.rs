use std::rc::Rc;

/// A lexical unit of an assignment line. Equality is structural: the
/// kind and the lexeme both match.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// Variable name.
    Ident(Rc<str>),
    /// Unsigned real constant, kept as source text until code generation.
    Literal(Rc<str>),
    Operator(Operator),
    Equal,
    LParen,
    RParen,
    /// A run of characters no other class accepts. Always rejected by
    /// the validator.
    Unknown(Rc<str>),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Ident(s) => write!(f, "{}", s),
            Literal(s) => write!(f, "{}", s),
            Operator(op) => write!(f, "{}", op),
            Equal => write!(f, "="),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Unknown(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Token::Ident("ab1_".into()), Token::Ident("ab1_".into()));
        assert_ne!(Token::Ident("a".into()), Token::Literal("a".into()));
        assert_ne!(
            Token::Operator(Operator::Plus),
            Token::Operator(Operator::Minus)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Operator(Operator::Divide).to_string(), "/");
        assert_eq!(Token::Literal("345.56".into()).to_string(), "345.56");
        assert_eq!(Token::Equal.to_string(), "=");
    }
}
