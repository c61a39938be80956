//! # Error Types for LS-8

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Ls8Error {
    // Instruction errors
    #[error("Invalid opcode: {0:#04x}")]
    InvalidOpcode(u8),

    #[error("Invalid register index: {0} (valid range: 0-7)")]
    InvalidRegister(u8),

    // Program format errors
    #[error("Program too large: {size} bytes (memory holds {max})")]
    ProgramTooLarge { size: usize, max: usize },
}
