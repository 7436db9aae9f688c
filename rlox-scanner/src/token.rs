use crate::{literal::Literal, token_type::TokenTy};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    ty: TokenTy,
    lexeme: &'a str,
    literal: Option<Literal<'a>>,
    line: usize,
}

impl<'a> Token<'a> {
    pub fn new(ty: TokenTy, lexeme: &'a str, literal: Option<Literal<'a>>, line: usize) -> Self {
        Token {
            ty,
            lexeme,
            literal,
            line,
        }
    }

    pub fn ty(&self) -> TokenTy {
        self.ty
    }

    /// Raw source text of the token, quotes included for strings.
    pub fn lexeme(&self) -> &'a str {
        self.lexeme
    }

    pub fn literal(&self) -> Option<Literal<'a>> {
        self.literal
    }

    /// 1-based line the token starts on.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(literal) => write!(
                f,
                "Token: {}, literal: {}, line: {}",
                self.ty, literal, self.line
            ),
            None => write!(f, "Token: {}, literal: None, line: {}", self.ty, self.line),
        }
    }
}
