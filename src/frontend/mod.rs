mod lexer;
mod parser;

pub use self::parser::{parse_line, SyntaxError, Term};
