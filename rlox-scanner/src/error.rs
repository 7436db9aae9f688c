use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("unterminated string at line {line}")]
    UnterminatedString { line: usize },
    #[error("unexpected token `{ch}` at line {line}")]
    UnexpectedCharacter { ch: char, line: usize },
    #[error("invalid number `{lexeme}` at line {line}")]
    InvalidNumber { lexeme: String, line: usize },
}

impl ScanError {
    /// A fatal error ends the scan; the scanner yields nothing afterwards.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ScanError::UnterminatedString { .. })
    }

    pub fn line(&self) -> usize {
        match *self {
            ScanError::UnterminatedString { line }
            | ScanError::UnexpectedCharacter { line, .. }
            | ScanError::InvalidNumber { line, .. } => line,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
