/*!
# Rust Language Module

This Rust module splits BASIC statements into a keyword and its argument
text, then parses the arguments of each keyword into a typed statement.

*/

pub type LineNumber = u32;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use parse::parse_number;

pub mod ast;
pub mod token;
