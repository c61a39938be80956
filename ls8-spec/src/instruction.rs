//! LS-8 Instruction Set
//!
//! Decoded form of an instruction: opcode plus typed operands.
//!
//! ## Instruction Formats
//! - no operands:  [opcode]
//! - one register: [opcode][reg]
//! - two registers: [opcode][regA][regB]
//! - register + immediate: [opcode][reg][imm8]

use crate::opcode::Opcode;
use crate::register::Register;
use serde::{Deserialize, Serialize};

/// LS-8 Instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    // ========== System ==========
    /// HLT: stop execution
    Hlt,

    // ========== Data movement ==========
    /// LDI: reg = value
    Ldi { reg: Register, value: u8 },

    /// PRN: print reg
    Prn { reg: Register },

    // ========== ALU ==========
    /// ADD: reg_a = reg_a + reg_b (mod 256)
    Add { reg_a: Register, reg_b: Register },

    /// MUL: reg_a = reg_a * reg_b (mod 256)
    Mul { reg_a: Register, reg_b: Register },

    /// CMP: flags = compare(reg_a, reg_b)
    Cmp { reg_a: Register, reg_b: Register },

    // ========== Stack ==========
    /// PUSH: SP -= 1; mem[SP] = reg
    Push { reg: Register },

    /// POP: reg = mem[SP]; SP += 1
    Pop { reg: Register },

    // ========== Control flow ==========
    /// CALL: push(PC + 2); PC = reg
    Call { reg: Register },

    /// RET: PC = pop()
    Ret,

    /// JMP: PC = reg
    Jmp { reg: Register },

    /// JEQ: if E then PC = reg
    Jeq { reg: Register },

    /// JNE: if !E then PC = reg
    Jne { reg: Register },
}

impl Instruction {
    /// Opcode of this instruction
    pub const fn opcode(&self) -> Opcode {
        match self {
            Instruction::Hlt => Opcode::Hlt,
            Instruction::Ldi { .. } => Opcode::Ldi,
            Instruction::Prn { .. } => Opcode::Prn,
            Instruction::Add { .. } => Opcode::Add,
            Instruction::Mul { .. } => Opcode::Mul,
            Instruction::Cmp { .. } => Opcode::Cmp,
            Instruction::Push { .. } => Opcode::Push,
            Instruction::Pop { .. } => Opcode::Pop,
            Instruction::Call { .. } => Opcode::Call,
            Instruction::Ret => Opcode::Ret,
            Instruction::Jmp { .. } => Opcode::Jmp,
            Instruction::Jeq { .. } => Opcode::Jeq,
            Instruction::Jne { .. } => Opcode::Jne,
        }
    }

    /// Encoded length in bytes
    #[inline]
    pub const fn length(&self) -> u8 {
        self.opcode().length()
    }

    /// Operand bytes in encoding order
    pub fn operands(&self) -> Vec<u8> {
        match *self {
            Instruction::Hlt | Instruction::Ret => vec![],
            Instruction::Ldi { reg, value } => vec![reg as u8, value],
            Instruction::Add { reg_a, reg_b }
            | Instruction::Mul { reg_a, reg_b }
            | Instruction::Cmp { reg_a, reg_b } => vec![reg_a as u8, reg_b as u8],
            Instruction::Prn { reg }
            | Instruction::Push { reg }
            | Instruction::Pop { reg }
            | Instruction::Call { reg }
            | Instruction::Jmp { reg }
            | Instruction::Jeq { reg }
            | Instruction::Jne { reg } => vec![reg as u8],
        }
    }
}
