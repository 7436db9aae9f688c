#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenTy {
    // single character
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Slash,
    Star,

    // one or two character
    Equal,
    EqualEqual,
    Bang,
    BangEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // literals
    Identifier,
    String,
    Number,

    // keywords
    Or,
    And,
    If,
    Else,
    Var,
    Function,
    Nil,
    True,
    False,
}

impl TokenTy {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenTy::LeftParen => "LEFT_PAREN",
            TokenTy::RightParen => "RIGHT_PAREN",
            TokenTy::LeftBrace => "LEFT_BRACE",
            TokenTy::RightBrace => "RIGHT_BRACE",
            TokenTy::Comma => "COMMA",
            TokenTy::Dot => "DOT",
            TokenTy::Minus => "MINUS",
            TokenTy::Plus => "PLUS",
            TokenTy::Slash => "SLASH",
            TokenTy::Star => "STAR",
            TokenTy::Equal => "EQUAL",
            TokenTy::EqualEqual => "EQUAL_EQUAL",
            TokenTy::Bang => "BANG",
            TokenTy::BangEqual => "BANG_EQUAL",
            TokenTy::Greater => "GREATER",
            TokenTy::GreaterEqual => "GREATER_EQUAL",
            TokenTy::Less => "LESS",
            TokenTy::LessEqual => "LESS_EQUAL",
            TokenTy::Identifier => "IDENTIFIER",
            TokenTy::String => "STRING",
            TokenTy::Number => "NUMBER",
            TokenTy::Or => "OR",
            TokenTy::And => "AND",
            TokenTy::If => "IF",
            TokenTy::Else => "ELSE",
            TokenTy::Var => "VAR",
            TokenTy::Function => "FUNCTION",
            TokenTy::Nil => "NIL",
            TokenTy::True => "TRUE",
            TokenTy::False => "FALSE",
        }
    }

    /// Keyword kinds carry no literal.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenTy::Or
                | TokenTy::And
                | TokenTy::If
                | TokenTy::Else
                | TokenTy::Var
                | TokenTy::Function
                | TokenTy::Nil
                | TokenTy::True
                | TokenTy::False
        )
    }
}

impl std::fmt::Display for TokenTy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
