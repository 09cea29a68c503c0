use super::token::Token;
use super::Error;

type Result<T> = std::result::Result<T, Error>;

/// Decides well-formedness of an expression token sequence and reports
/// the first violation: empty input, then parenthesis balance, then
/// token adjacency, then the start/end boundary.
pub fn check_expression(tokens: &[Token]) -> Result<()> {
    if tokens.is_empty() {
        return Err(Error::EmptyExpression);
    }
    check_parens(tokens)?;
    check_pairs(tokens)?;
    check_boundary(tokens)
}

/// Decides well-formedness of a whole `variable = expression` sequence.
/// Anything shorter than three tokens is degenerate and reported as
/// empty before any other check.
pub fn check_assignment(tokens: &[Token]) -> Result<()> {
    if tokens.len() < 3 {
        return Err(Error::EmptyExpression);
    }
    check_expression(tokens)?;
    if tokens[1] != Token::Equal {
        return Err(Error::NotAnAssignment);
    }
    match tokens[0] {
        Token::Ident(_) => Ok(()),
        _ => Err(Error::NotAnAssignment),
    }
}

fn check_parens(tokens: &[Token]) -> Result<()> {
    let mut depth = 0;
    for token in tokens {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                if depth == 0 {
                    return Err(Error::UnbalancedParens);
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(Error::UnbalancedParens)
    }
}

fn check_pairs(tokens: &[Token]) -> Result<()> {
    for pair in tokens.windows(2) {
        if !may_follow(&pair[0], &pair[1]) {
            return Err(Error::InvalidPair(pair[0].clone(), pair[1].clone()));
        }
    }
    Ok(())
}

// The successor table: which token kinds may follow a given kind.
fn may_follow(token: &Token, next: &Token) -> bool {
    use Token::*;
    match token {
        Ident(_) => match next {
            Operator(_) | RParen | Equal => true,
            _ => false,
        },
        Literal(_) => match next {
            Operator(_) | RParen => true,
            _ => false,
        },
        Operator(_) | Equal => match next {
            Ident(_) | Literal(_) | LParen => true,
            _ => false,
        },
        LParen => match next {
            LParen | Ident(_) | Literal(_) => true,
            _ => false,
        },
        RParen => match next {
            RParen | Operator(_) => true,
            _ => false,
        },
        Unknown(_) => false,
    }
}

fn check_boundary(tokens: &[Token]) -> Result<()> {
    use Token::*;
    let first = match tokens.first() {
        Some(Ident(_)) | Some(Literal(_)) | Some(LParen) => true,
        _ => false,
    };
    let last = match tokens.last() {
        Some(Ident(_)) | Some(Literal(_)) | Some(RParen) => true,
        _ => false,
    };
    if first && last {
        Ok(())
    } else {
        Err(Error::InvalidBoundary)
    }
}
