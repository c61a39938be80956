//! # LS-8 Specification
//!
//! 8-bit virtual CPU with a 256-byte flat address space.
//!
//! ## Key Features
//! - 8 byte-wide registers, R7 reserved as the stack pointer
//! - Variable-length instructions (1-3 bytes)
//! - Operand count and PC ownership encoded in the opcode byte
//! - Downward-growing stack starting at 0xF4
//! - Three comparison flags (E, L, G)

pub mod encoding;
pub mod opcode;
pub mod register;
pub mod instruction;
pub mod error;
pub mod program;

pub use opcode::Opcode;
pub use register::{Register, NUM_REGISTERS};
pub use instruction::Instruction;
pub use error::Ls8Error;
pub use program::Program;

/// Number of addressable memory cells
pub const MEMORY_SIZE: usize = 256;

/// Address where program images are loaded
pub const PROGRAM_BASE: u8 = 0x00;

/// Initial stack pointer (grows downward)
pub const STACK_TOP: u8 = 0xF4;
