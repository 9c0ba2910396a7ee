//! # ZUIX-DOS BASIC
//!
//! The BASIC programming language as it was in the 8-bit era.
//!

mod term;

fn main() {
    term::main();
}
