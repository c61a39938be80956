//! Arithmetic logic unit

use ls8_spec::Opcode;
use crate::error::{Result, RuntimeError};

/// Binary operations the ALU performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Mul,
}

impl AluOp {
    /// ALU operation for an opcode
    ///
    /// Only ADD and MUL are arithmetic; asking for anything else means the
    /// dispatcher is miswired.
    pub fn from_opcode(opcode: Opcode) -> Result<Self> {
        match opcode {
            Opcode::Add => Ok(AluOp::Add),
            Opcode::Mul => Ok(AluOp::Mul),
            other => Err(RuntimeError::UnsupportedAluOperation(other)),
        }
    }

    /// Apply the operation; results wrap modulo 256
    #[inline]
    pub fn apply(self, a: u8, b: u8) -> u8 {
        match self {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Mul => a.wrapping_mul(b),
        }
    }
}
