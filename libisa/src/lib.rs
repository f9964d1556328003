pub mod instruction;
pub mod program;

pub type Word = u8;
pub type Address = usize;
pub type Register = usize;
pub type Immediate = Word;

pub const MEMORY_SIZE: usize = 256;
pub const REGISTER_COUNT: usize = 8;

/// Register reserved as the stack pointer. Nothing stops a program from writing to it directly.
pub const STACK_POINTER: Register = 7;

/// Initial stack pointer value, the stack grows downwards from here.
pub const STACK_BASE: Word = 0xF4;
