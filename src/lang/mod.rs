/*!
# Language module

Lexical analysis and syntax validation of assignment lines.

*/

mod error;
mod lex;
mod syntax;
mod token;

pub use error::Error;
pub use lex::lex;
pub use syntax::check_assignment;
pub use syntax::check_expression;
pub use token::Operator;
pub use token::Token;
