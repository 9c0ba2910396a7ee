//! # ZUIX-DOS BASIC
//!
//! A small line-numbered BASIC in the spirit of the 8-bit home computers.
//!
//! Start the interpreter and it greets you with a prompt.
//! ```text
//! ZUIX-DOS Version 1.0 - BASIC Mode
//! READY.
//! A> █
//! ```
//!
//! Type a statement to run it now, or give it a line number to store it
//! in the program. `RUN` executes the stored program, `LIST` shows it and
//! `HELP` lists every command. Run `zuix FILE` to load and run a saved
//! program straight away.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;
