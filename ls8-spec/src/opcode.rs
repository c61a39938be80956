//! # LS-8 Opcode Definitions
//!
//! The instruction set is closed: every opcode byte outside this table is a
//! decode error. Opcode values follow the layout described in
//! [`crate::encoding`], so operand count and PC ownership can be read
//! straight off the byte.
//!
//! ## Opcode Groups
//! - System: HLT
//! - Data movement: LDI, PRN
//! - ALU: ADD, MUL, CMP
//! - Stack: PUSH, POP
//! - Control flow: CALL, RET, JMP, JEQ, JNE

use crate::encoding;
use serde::{Deserialize, Serialize};

/// Instruction opcode
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // ========== System ==========
    /// HLT: stop the machine
    Hlt = 0b0000_0001,

    // ========== Data movement ==========
    /// LDI: reg = immediate
    Ldi = 0b1000_0010,
    /// PRN: print reg as decimal
    Prn = 0b0100_0111,

    // ========== ALU ==========
    /// ADD: regA = regA + regB (mod 256)
    Add = 0b1010_0000,
    /// MUL: regA = regA * regB (mod 256)
    Mul = 0b1010_0010,
    /// CMP: set E/L/G from regA vs regB
    Cmp = 0b1010_0111,

    // ========== Stack ==========
    /// PUSH: SP -= 1; mem[SP] = reg
    Push = 0b0100_0101,
    /// POP: reg = mem[SP]; SP += 1
    Pop = 0b0100_0110,

    // ========== Control flow ==========
    /// CALL: push return address; PC = reg
    Call = 0b0101_0000,
    /// RET: PC = pop
    Ret = 0b0001_0001,
    /// JMP: PC = reg
    Jmp = 0b0101_0100,
    /// JEQ: if E, PC = reg
    Jeq = 0b0101_0101,
    /// JNE: if !E, PC = reg
    Jne = 0b0101_0110,
}

impl Opcode {
    /// Every opcode in the instruction set
    pub const ALL: [Opcode; 13] = [
        Opcode::Hlt,
        Opcode::Ldi,
        Opcode::Prn,
        Opcode::Add,
        Opcode::Mul,
        Opcode::Cmp,
        Opcode::Push,
        Opcode::Pop,
        Opcode::Call,
        Opcode::Ret,
        Opcode::Jmp,
        Opcode::Jeq,
        Opcode::Jne,
    ];

    /// Try to convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0b0000_0001 => Some(Opcode::Hlt),
            0b1000_0010 => Some(Opcode::Ldi),
            0b0100_0111 => Some(Opcode::Prn),
            0b1010_0000 => Some(Opcode::Add),
            0b1010_0010 => Some(Opcode::Mul),
            0b1010_0111 => Some(Opcode::Cmp),
            0b0100_0101 => Some(Opcode::Push),
            0b0100_0110 => Some(Opcode::Pop),
            0b0101_0000 => Some(Opcode::Call),
            0b0001_0001 => Some(Opcode::Ret),
            0b0101_0100 => Some(Opcode::Jmp),
            0b0101_0101 => Some(Opcode::Jeq),
            0b0101_0110 => Some(Opcode::Jne),
            _ => None,
        }
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Number of operand bytes
    #[inline]
    pub const fn operand_count(self) -> u8 {
        encoding::operand_count(self as u8)
    }

    /// Instruction length in bytes
    #[inline]
    pub const fn length(self) -> u8 {
        encoding::instruction_length(self as u8)
    }

    /// Whether the handler owns PC
    #[inline]
    pub const fn sets_pc(self) -> bool {
        encoding::sets_pc(self as u8)
    }

    /// Whether the opcode carries the ALU marker bit
    #[inline]
    pub const fn is_alu(self) -> bool {
        encoding::is_alu(self as u8)
    }

    /// Check if this is a stack opcode
    #[inline]
    pub const fn is_stack(self) -> bool {
        matches!(self, Opcode::Push | Opcode::Pop)
    }

    /// Check if this is a jump opcode (conditional or not)
    #[inline]
    pub const fn is_jump(self) -> bool {
        matches!(self, Opcode::Jmp | Opcode::Jeq | Opcode::Jne)
    }

    /// Assembly mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Hlt => "HLT",
            Opcode::Ldi => "LDI",
            Opcode::Prn => "PRN",
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Cmp => "CMP",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
            Opcode::Jmp => "JMP",
            Opcode::Jeq => "JEQ",
            Opcode::Jne => "JNE",
        }
    }

    /// Look up an opcode by mnemonic (case-insensitive)
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

impl TryFrom<u8> for Opcode {
    type Error = crate::Ls8Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Opcode::from_u8(value).ok_or(crate::Ls8Error::InvalidOpcode(value))
    }
}
