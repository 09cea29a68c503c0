use calc::lang::{check_assignment, check_expression, lex, Error, Operator, Token};

fn expression(s: &str) -> Result<(), Error> {
    check_expression(&lex(s))
}

fn assignment(s: &str) -> Result<(), Error> {
    check_assignment(&lex(s))
}

#[test]
fn test_unbalanced_parens() {
    assert_eq!(
        expression("(((ab1_ - 345.56)(*/.2{_cde23"),
        Err(Error::UnbalancedParens)
    );
    assert_eq!(expression("y = (2 - 1"), Err(Error::UnbalancedParens));
}

#[test]
fn test_adjacent_operators() {
    assert_eq!(
        expression("(ab1_ - 345.56)*/.2_cde23"),
        Err(Error::InvalidPair(
            Token::Operator(Operator::Multiply),
            Token::Operator(Operator::Divide)
        ))
    );
    assert_eq!(
        expression(" - 345.56*/.2_cde23"),
        Err(Error::InvalidPair(
            Token::Operator(Operator::Multiply),
            Token::Operator(Operator::Divide)
        ))
    );
}

#[test]
fn test_unknown_token_pairs_with_nothing() {
    assert_eq!(
        expression("2 - .2"),
        Err(Error::InvalidPair(
            Token::Operator(Operator::Minus),
            Token::Unknown(".".into())
        ))
    );
}

#[test]
fn test_trailing_operator() {
    assert_eq!(expression("2 - 345.56 *"), Err(Error::InvalidBoundary));
}

#[test]
fn test_empty() {
    assert_eq!(expression("   "), Err(Error::EmptyExpression));
    assert_eq!(expression(""), Err(Error::EmptyExpression));
}

#[test]
fn test_valid_expressions() {
    assert_eq!(expression("((abc -3 * b2) + d5 / 7)"), Ok(()));
    assert_eq!(expression("a"), Ok(()));
    assert_eq!(expression("(((a)))"), Ok(()));
    assert_eq!(expression("42"), Ok(()));
}

#[test]
fn test_not_an_assignment() {
    assert_eq!(assignment("x + y"), Err(Error::NotAnAssignment));
    assert_eq!(assignment("(x = a+b)"), Err(Error::NotAnAssignment));
}

#[test]
fn test_assignment_needs_an_expression() {
    assert_eq!(assignment("x ="), Err(Error::EmptyExpression));
    assert_eq!(assignment(""), Err(Error::EmptyExpression));
}

#[test]
fn test_valid_assignments() {
    assert_eq!(assignment("x = (a+b)"), Ok(()));
    assert_eq!(assignment("x = 1"), Ok(()));
    assert_eq!(assignment("_x1 = (abc + 123.5)*d2-3/(x+y)"), Ok(()));
}

#[test]
fn test_error_display() {
    assert_eq!(
        expression("2 - .2").unwrap_err().to_string(),
        "INVALID TOKEN PAIR '-', '.'"
    );
    assert_eq!(
        expression("y = (2 - 1").unwrap_err().to_string(),
        "UNBALANCED PARENTHESES"
    );
}
