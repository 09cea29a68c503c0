use super::token::{Operator, Token};

/// Splits a line into tokens. Never fails; characters that fit no class
/// become `Token::Unknown` runs for the validator to reject.
pub fn lex(s: &str) -> Vec<Token> {
    Lexer {
        chars: s.chars().peekable(),
    }
    .collect()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let pk = *self.chars.peek()?;
            if pk == ' ' {
                self.chars.next();
                continue;
            }
            if let Some(token) = single_char_token(pk) {
                self.chars.next();
                return Some(token);
            }
            if is_digit(pk) {
                return Some(self.number());
            }
            if is_ident_start(pk) {
                return Some(self.ident());
            }
            return Some(self.unknown());
        }
    }
}

fn single_char_token(ch: char) -> Option<Token> {
    match ch {
        '(' => Some(Token::LParen),
        ')' => Some(Token::RParen),
        '+' => Some(Token::Operator(Operator::Plus)),
        '-' => Some(Token::Operator(Operator::Minus)),
        '*' => Some(Token::Operator(Operator::Multiply)),
        '/' => Some(Token::Operator(Operator::Divide)),
        '=' => Some(Token::Equal),
        _ => None,
    }
}

impl<'a> Lexer<'a> {
    fn number(&mut self) -> Token {
        let mut s = String::new();
        let mut decimal = false;
        while let Some(pk) = self.chars.peek() {
            if *pk == '.' && !decimal {
                decimal = true;
            } else if !is_digit(*pk) {
                break;
            }
            s.push(*pk);
            self.chars.next();
        }
        Token::Literal(s.into())
    }

    fn ident(&mut self) -> Token {
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if !is_ident_continue(*pk) {
                break;
            }
            s.push(*pk);
            self.chars.next();
        }
        Token::Ident(s.into())
    }

    fn unknown(&mut self) -> Token {
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if *pk == ' '
                || single_char_token(*pk).is_some()
                || is_digit(*pk)
                || is_ident_start(*pk)
            {
                break;
            }
            s.push(*pk);
            self.chars.next();
        }
        Token::Unknown(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment() {
        let tokens = lex("x = (a + b)");
        assert_eq!(
            tokens,
            vec![
                Token::Ident("x".into()),
                Token::Equal,
                Token::LParen,
                Token::Ident("a".into()),
                Token::Operator(Operator::Plus),
                Token::Ident("b".into()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_single_decimal_point() {
        assert_eq!(
            lex("12.34.5"),
            vec![
                Token::Literal("12.34".into()),
                Token::Unknown(".".into()),
                Token::Literal("5".into()),
            ]
        );
        // a trailing point belongs to the constant
        assert_eq!(lex("3."), vec![Token::Literal("3.".into())]);
    }

    #[test]
    fn test_leading_point_is_unknown() {
        assert_eq!(
            lex(".2"),
            vec![Token::Unknown(".".into()), Token::Literal("2".into())]
        );
    }

    #[test]
    fn test_empty_and_spaces() {
        assert_eq!(lex(""), vec![]);
        assert_eq!(lex("   "), vec![]);
    }
}
