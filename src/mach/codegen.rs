use super::{Opcode, Program, Store};
use crate::lang::{check_assignment, lex, Error, Operator, Token};

type Result<T> = std::result::Result<T, Error>;

/// Compiles a whole program, one assignment per line, concatenating the
/// per-line instructions in source order. Lines that reduce to an empty
/// expression are blank and skipped silently; the first real error
/// aborts and discards the partial output.
pub fn generate<'a, I>(lines: I, store: &mut dyn Store, reset_store: bool) -> Result<Program>
where
    I: IntoIterator<Item = &'a str>,
{
    if reset_store {
        store.clear();
    }
    let mut program = Program::new();
    for line in lines {
        match generate_line(line, store) {
            Ok(mut code) => program.append(&mut code),
            Err(Error::EmptyExpression) => continue,
            Err(error) => return Err(error),
        }
    }
    Ok(program)
}

/// Compiles one `variable = expression` line: instructions that leave
/// the expression value on the stack, then a `SET` into the target.
/// Every variable name the line mentions is registered with the store.
pub fn generate_line(line: &str, store: &mut dyn Store) -> Result<Vec<Opcode>> {
    let tokens = lex(line);
    check_assignment(&tokens)?;
    let target = match &tokens[0] {
        Token::Ident(name) => name.clone(),
        _ => return Err(Error::Internal("ASSIGNMENT TARGET")),
    };
    let mut code = vec![];
    Parser::generate(&tokens[2..], &mut code, store)?;
    code.push(Opcode::Set(target.clone()));
    if !store.contains(&target) {
        store.register(&target);
    }
    Ok(code)
}

fn precedence(op: Operator) -> usize {
    use Operator::*;
    match op {
        Plus | Minus => 10,
        Multiply | Divide => 20,
    }
}

fn opcode(op: Operator) -> Opcode {
    use Operator::*;
    match op {
        Plus => Opcode::Add,
        Minus => Opcode::Sub,
        Multiply => Opcode::Mul,
        Divide => Opcode::Div,
    }
}

/// Precedence-climbing parser over the validated token slice. Emits
/// instructions directly in post-order: left operand, right operand,
/// operator, so same-precedence chains fold strictly left to right.
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn generate(tokens: &'a [Token], code: &mut Vec<Opcode>, store: &mut dyn Store) -> Result<()> {
        let mut parser = Parser { tokens, pos: 0 };
        parser.expression(code, store, 0)?;
        match parser.next() {
            None => Ok(()),
            Some(_) => Err(Error::Internal("TRAILING TOKENS")),
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn expression(
        &mut self,
        code: &mut Vec<Opcode>,
        store: &mut dyn Store,
        min_precedence: usize,
    ) -> Result<()> {
        self.factor(code, store)?;
        loop {
            let op = match self.peek() {
                Some(Token::Operator(op)) if precedence(*op) >= min_precedence => *op,
                _ => return Ok(()),
            };
            self.next();
            self.expression(code, store, precedence(op) + 1)?;
            code.push(opcode(op));
        }
    }

    fn factor(&mut self, code: &mut Vec<Opcode>, store: &mut dyn Store) -> Result<()> {
        match self.next() {
            Some(Token::Literal(lexeme)) => {
                let value = match lexeme.parse::<f64>() {
                    Ok(value) => value,
                    Err(_) => return Err(Error::Internal("UNPARSEABLE CONSTANT")),
                };
                code.push(Opcode::LoadC(value));
                Ok(())
            }
            Some(Token::Ident(name)) => {
                code.push(Opcode::LoadV(name.clone()));
                if !store.contains(name) {
                    store.register(name);
                }
                Ok(())
            }
            Some(Token::LParen) => {
                self.expression(code, store, 0)?;
                match self.next() {
                    Some(Token::RParen) => Ok(()),
                    _ => Err(Error::Internal("EXPECTED RIGHT PARENTHESIS")),
                }
            }
            _ => Err(Error::Internal("EXPECTED EXPRESSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Memory;
    use super::*;

    fn line(s: &str) -> Vec<Opcode> {
        let mut store = Memory::default();
        generate_line(s, &mut store).unwrap()
    }

    #[test]
    fn test_single_constant() {
        assert_eq!(
            line("x = 1"),
            vec![Opcode::LoadC(1.0), Opcode::Set("x".into())]
        );
    }

    #[test]
    fn test_redundant_parens_collapse() {
        assert_eq!(line("z = (((a)))"), line("z = a"));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            line("x = a + b * c"),
            vec![
                Opcode::LoadV("a".into()),
                Opcode::LoadV("b".into()),
                Opcode::LoadV("c".into()),
                Opcode::Mul,
                Opcode::Add,
                Opcode::Set("x".into()),
            ]
        );
    }

    #[test]
    fn test_blank_line_is_empty_expression() {
        let mut store = Memory::default();
        assert_eq!(
            generate_line("", &mut store),
            Err(Error::EmptyExpression)
        );
        assert_eq!(
            generate_line("   ", &mut store),
            Err(Error::EmptyExpression)
        );
    }
}
