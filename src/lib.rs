//! # Forth
//!
//! A small interactive interpreter for a Forth-style stack language.
//!
//! Run the executable and type a line of words separated by spaces.
//! Numbers go on the stack, words take their operands from it.
//! Every line ends with `ok` or with the error that stopped it.
//! ```text
//! 2 3 + .
//! 5 ok
//! ```
//!
//! The library exposes the same interpreter to any host program.
//! ```
//! let mut runtime = forth::mach::Runtime::default();
//! assert_eq!(runtime.execute_line("1 3 / 3 * ."), "1 ok");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
