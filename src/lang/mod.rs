/*!
# Rust Language Module

This Rust module turns a line of text into classified tokens.

*/

pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::lex_columns;
pub use token::Token;
pub use token::TokenKind;
