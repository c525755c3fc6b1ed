use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use super::lexer::{Lexer, Token, TokenKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Term {
    pub coefficient: i64,
    pub variable: String,
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.coefficient > 0 {
            write!(f, "+")?;
        }
        write!(f, "{}{}", self.coefficient, self.variable)
    }
}

/// What a parser state would have accepted instead of the offending token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    TermStart,
    Magnitude,
    Identifier,
    Sign,
}

impl Display for Expected {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Expected::TermStart => "number, identifier or sign",
            Expected::Magnitude => "number or identifier",
            Expected::Identifier => "identifier",
            Expected::Sign => "sign",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("expected {expected}, found {found}")]
    Unexpected { expected: Expected, found: String },
    #[error("coefficient {0} does not fit in a 64-bit integer")]
    CoefficientOverflow(String),
}

impl SyntaxError {
    fn unexpected(expected: Expected, token: &Token) -> Self {
        let found = match token.kind {
            TokenKind::End => "end of input".to_string(),
            _ => format!("{:?}", token.text),
        };
        SyntaxError::Unexpected { expected, found }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Start,
    AfterSign,
    AfterNumber,
    AfterIdentifier,
}

impl State {
    const fn expected(self) -> Expected {
        match self {
            State::Start => Expected::TermStart,
            State::AfterSign => Expected::Magnitude,
            State::AfterNumber => Expected::Identifier,
            State::AfterIdentifier => Expected::Sign,
        }
    }
}

/// Working state of one in-flight parse. Built fresh by every `parse_line`
/// call, so nothing carries over from one line to the next.
struct Context {
    sign: i64,
    scalar: i64,
    identifier: String,
    terms: Vec<Term>,
}

impl Context {
    fn new() -> Self {
        Context {
            sign: 1,
            scalar: 1,
            identifier: String::new(),
            terms: vec![],
        }
    }

    fn reset_pending(&mut self) {
        self.sign = 1;
        self.scalar = 1;
        self.identifier.clear();
    }

    fn set_scalar(&mut self, token: &Token) -> Result<(), SyntaxError> {
        self.scalar = token
            .text
            .parse()
            .map_err(|_| SyntaxError::CoefficientOverflow(token.text.to_string()))?;
        Ok(())
    }

    fn emit(&mut self, token: &Token) {
        self.identifier.push_str(token.text);
        self.terms.push(Term {
            coefficient: self.sign * self.scalar,
            variable: std::mem::take(&mut self.identifier),
        });
        self.reset_pending();
    }
}

/// Error returns stand in for the non-accepting `Invalid` state: the driver
/// stops consuming tokens as soon as one is produced.
fn transition(state: State, token: &Token, ctx: &mut Context) -> Result<State, SyntaxError> {
    use TokenKind::*;

    let next = match (state, token.kind) {
        (State::Start, Sign) => {
            ctx.sign = token.sign();
            State::AfterSign
        }
        (State::Start | State::AfterSign, Number) => {
            ctx.set_scalar(token)?;
            State::AfterNumber
        }
        (State::Start | State::AfterSign | State::AfterNumber, Identifier) => {
            ctx.emit(token);
            State::AfterIdentifier
        }
        (State::AfterIdentifier, Sign) => {
            ctx.reset_pending();
            ctx.sign = token.sign();
            State::AfterSign
        }
        _ => return Err(SyntaxError::unexpected(state.expected(), token)),
    };

    log::trace!("{:?} --{:?}--> {:?}", state, token.kind, next);
    Ok(next)
}

/// Parses one line of additive terms such as `3x -4y +z`.
///
/// Succeeds only if the whole line matches `sign? term (sign term)*`, where
/// `term := number? identifier`; otherwise no terms are returned.
pub fn parse_line(line: &str) -> Result<Box<[Term]>, SyntaxError> {
    let mut lexer = Lexer::new(line);
    let mut ctx = Context::new();
    let mut state = State::Start;

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::End {
            break if state == State::AfterIdentifier {
                Ok(ctx.terms.into_boxed_slice())
            } else {
                Err(SyntaxError::unexpected(state.expected(), &token))
            };
        }
        state = transition(state, &token, &mut ctx)?;
    }
}
