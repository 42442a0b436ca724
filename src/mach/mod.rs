/*!
## Rust Machine Module

This Rust module executes tokens against a data stack.

*/

mod opcode;
mod operation;
mod runtime;
mod stack;
mod val;
mod words;

pub use opcode::Opcode;
pub use operation::Operation;
pub use runtime::Runtime;
pub use runtime::OK;
pub use stack::Stack;
pub use val::Val;
pub use words::Behavior;
pub use words::WordTable;

#[cfg(test)]
mod tests;
