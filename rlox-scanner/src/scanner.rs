use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::{
    error::{Result, ScanError},
    literal::Literal,
    token::Token,
    token_type::TokenTy,
};

static KEYWORDS: phf::Map<&'static str, TokenTy> = phf::phf_map! {
    "and" =>      TokenTy::And,
    "else" =>     TokenTy::Else,
    "false" =>    TokenTy::False,
    "function" => TokenTy::Function,
    "if" =>       TokenTy::If,
    "nil" =>      TokenTy::Nil,
    "or" =>       TokenTy::Or,
    "true" =>     TokenTy::True,
    "var" =>      TokenTy::Var,
};

/// Returned by the cursor once the input is exhausted.
const END: char = '\0';

/// Pull-based scanner over a borrowed source.
///
/// Each call to [`Iterator::next`] consumes just enough input to produce one
/// token or one error. Unexpected characters are reported and skipped; an
/// unterminated string ends the stream.
pub struct Scanner<'a> {
    source: &'a str,
    start: usize,
    current: usize,
    line: usize,
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            done: false,
        }
    }

    /// Line the cursor is currently on.
    pub fn line(&self) -> usize {
        self.line
    }

    fn scan_token(&mut self) -> Option<Result<Token<'a>>> {
        while !self.is_at_end() {
            self.start = self.current;
            let ch = self.advance();
            let ty = match ch {
                '(' => TokenTy::LeftParen,
                ')' => TokenTy::RightParen,
                '{' => TokenTy::LeftBrace,
                '}' => TokenTy::RightBrace,
                ',' => TokenTy::Comma,
                '.' => TokenTy::Dot,
                '-' => TokenTy::Minus,
                '+' => TokenTy::Plus,
                '/' => TokenTy::Slash,
                '*' => TokenTy::Star,
                '=' => {
                    if self.matches('=') {
                        TokenTy::EqualEqual
                    } else {
                        TokenTy::Equal
                    }
                }
                '!' => {
                    if self.matches('=') {
                        TokenTy::BangEqual
                    } else {
                        TokenTy::Bang
                    }
                }
                '>' => {
                    if self.matches('=') {
                        TokenTy::GreaterEqual
                    } else {
                        TokenTy::Greater
                    }
                }
                '<' => {
                    if self.matches('=') {
                        TokenTy::LessEqual
                    } else {
                        TokenTy::Less
                    }
                }
                '"' => return Some(self.string()),
                ch if ch.is_ascii_digit() => return Some(self.number()),
                ch if ch.is_alphabetic() => return Some(Ok(self.identifier())),
                // skip
                ' ' | '\r' | '\t' => continue,
                '\n' => {
                    self.line += 1;
                    continue;
                }
                END => break,
                ch => {
                    return Some(Err(ScanError::UnexpectedCharacter {
                        ch,
                        line: self.line,
                    }))
                }
            };
            return Some(Ok(self.make_token(ty)));
        }
        None
    }

    fn string(&mut self) -> Result<Token<'a>> {
        while self.peek() != '"' {
            // the newline is left unconsumed, so `line` is still the opening line
            if self.is_at_end() || self.peek() == '\n' {
                return Err(ScanError::UnterminatedString { line: self.line });
            }
            self.advance();
        }

        // closing "
        self.advance();

        // trim
        let value = &self.source[self.start + 1..self.current - 1];
        Ok(self.make_literal(TokenTy::String, Literal::String(value)))
    }

    fn number(&mut self) -> Result<Token<'a>> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // `3.` is accepted and reads as 3.0
        if self.matches('.') {
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let lexeme = self.lexeme();
        match lexeme.parse::<f64>() {
            Ok(value) => Ok(self.make_literal(TokenTy::Number, Literal::Number(value))),
            Err(_) => Err(ScanError::InvalidNumber {
                lexeme: lexeme.to_owned(),
                line: self.line,
            }),
        }
    }

    fn identifier(&mut self) -> Token<'a> {
        while matches!(self.peek(), c if c.is_alphabetic() || c.is_ascii_digit()) {
            self.advance();
        }

        let text = self.lexeme();
        match KEYWORDS.get(text) {
            Some(&ty) => self.make_token(ty),
            None => self.make_literal(TokenTy::Identifier, Literal::String(text)),
        }
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        match self.source[self.current..].chars().next() {
            Some(ch) => {
                self.current += ch.len_utf8();
                ch
            }
            None => END,
        }
    }

    #[inline]
    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or(END)
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            false
        } else {
            self.advance();
            true
        }
    }

    #[inline]
    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    #[inline]
    fn make_token(&self, ty: TokenTy) -> Token<'a> {
        Token::new(ty, self.lexeme(), None, self.line)
    }

    #[inline]
    fn make_literal(&self, ty: TokenTy, literal: Literal<'a>) -> Token<'a> {
        Token::new(ty, self.lexeme(), Some(literal), self.line)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.scan_token();
        match &item {
            Some(Ok(token)) => trace!(%token, "scanned"),
            Some(Err(err)) if err.is_fatal() => {
                debug!(%err, "scan aborted");
                self.done = true;
            }
            Some(Err(err)) => debug!(%err, "skipping character"),
            None => self.done = true,
        }
        item
    }
}

impl FusedIterator for Scanner<'_> {}
