/*!
## Rust Machine Module

This Rust module is the stores and the statement engine of BASIC.

*/

pub type Address = usize;

pub const MAX_LINE_LEN: usize = 1024;
pub const MAX_STACK_LEN: usize = u16::max_value() as usize;

mod data;
mod listing;
mod runtime;
mod stack;
mod var;

pub use data::Data;
pub use listing::Listing;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::State;
pub use stack::Stack;
pub use var::Var;

#[cfg(test)]
mod tests;
