//! Lexical scanner for a small Lox-like scripting language.
//!
//! ```
//! use rlox_scanner::{scan, TokenTy};
//!
//! let kinds: Vec<_> = scan("var x = 1")
//!     .map(|item| item.map(|token| token.ty()))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(kinds, [TokenTy::Var, TokenTy::Identifier, TokenTy::Equal, TokenTy::Number]);
//! ```

pub mod error;
pub mod literal;
pub mod scanner;
pub mod token;
pub mod token_type;

pub use error::ScanError;
pub use literal::Literal;
pub use scanner::Scanner;
pub use token::Token;
pub use token_type::TokenTy;

/// Starts a lazy scan over `source`.
pub fn scan(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}
