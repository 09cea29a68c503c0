/*!
## Rust Machine Module

This Rust module is a compiler and virtual machine for assignment
statements. The code generator turns validated token lines into stack
machine instructions; the runtime executes them against a variable
store.

*/

mod codegen;
mod opcode;
mod program;
mod runtime;
mod stack;
mod store;

pub use codegen::generate;
pub use codegen::generate_line;
pub use opcode::Opcode;
pub use program::Program;
pub use runtime::Runtime;
pub use stack::Stack;
pub use store::Memory;
pub use store::Store;
