use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    End,
    Unknown,
    Identifier,
    Number,
    Sign,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    const fn new(kind: TokenKind, text: &'a str) -> Self {
        Token { kind, text }
    }

    /// +1 for `+`, -1 for `-`. Only meaningful on `Sign` tokens.
    pub fn sign(&self) -> i64 {
        if self.text == "-" {
            -1
        } else {
            1
        }
    }
}

/// Pull-based scanner over a single line. Every input maps to a token,
/// and once the line is exhausted `next_token` keeps returning `End`.
pub struct Lexer<'a> {
    line: &'a str,
    stream: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str) -> Self {
        Lexer {
            line,
            stream: line.char_indices().peekable(),
        }
    }

    fn offset(&mut self) -> usize {
        self.stream.peek().map_or(self.line.len(), |&(pos, _)| pos)
    }

    fn munch(&mut self, kind: TokenKind, accept: impl Fn(char) -> bool) -> Token<'a> {
        let start = self.offset();
        while self.stream.next_if(|&(_, c)| accept(c)).is_some() {}
        Token::new(kind, &self.line[start..self.offset()])
    }

    pub fn next_token(&mut self) -> Token<'a> {
        while self.stream.next_if(|&(_, c)| c.is_whitespace()).is_some() {}

        let token = match self.stream.peek() {
            None => Token::new(TokenKind::End, ""),
            Some(&(_, c)) if c.is_ascii_digit() => {
                self.munch(TokenKind::Number, |c| c.is_ascii_digit())
            }
            Some(&(_, c)) if c.is_ascii_alphabetic() => {
                self.munch(TokenKind::Identifier, |c| c.is_ascii_alphanumeric())
            }
            Some(&(pos, c)) => {
                self.stream.next();
                let kind = if c == '+' || c == '-' {
                    TokenKind::Sign
                } else {
                    TokenKind::Unknown
                };
                Token::new(kind, &self.line[pos..pos + c.len_utf8()])
            }
        };

        log::trace!("token {:?} {:?}", token.kind, token.text);
        token
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.next_token();
        (token.kind != TokenKind::End).then(|| token)
    }
}

#[cfg(test)]
mod tests {
    use super::{Lexer, Token, TokenKind};

    fn kinds(line: &str) -> Vec<(TokenKind, &str)> {
        Lexer::new(line).map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn splits_number_from_identifier() {
        assert_eq!(
            kinds("3x"),
            vec![(TokenKind::Number, "3"), (TokenKind::Identifier, "x")]
        );
    }

    #[test]
    fn identifiers_absorb_trailing_digits() {
        assert_eq!(
            kinds("3x2y"),
            vec![(TokenKind::Number, "3"), (TokenKind::Identifier, "x2y")]
        );
    }

    #[test]
    fn skips_whitespace_between_tokens() {
        assert_eq!(
            kinds("  +12 \t alpha- "),
            vec![
                (TokenKind::Sign, "+"),
                (TokenKind::Number, "12"),
                (TokenKind::Identifier, "alpha"),
                (TokenKind::Sign, "-"),
            ]
        );
    }

    #[test]
    fn wraps_single_unknown_characters() {
        assert_eq!(
            kinds("x*é"),
            vec![
                (TokenKind::Identifier, "x"),
                (TokenKind::Unknown, "*"),
                (TokenKind::Unknown, "é"),
            ]
        );
    }

    #[test]
    fn end_is_idempotent() {
        let mut lexer = Lexer::new("  ");
        for _ in 0..3 {
            assert_eq!(lexer.next_token(), Token::new(TokenKind::End, ""));
        }
    }

    #[test]
    fn sign_values() {
        let mut lexer = Lexer::new("+-");
        assert_eq!(lexer.next_token().sign(), 1);
        assert_eq!(lexer.next_token().sign(), -1);
    }
}
