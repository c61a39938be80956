//! # Instruction Encoding Constants and Helpers
//!
//! Every LS-8 instruction is one opcode byte followed by zero, one or two
//! operand bytes. The opcode itself carries the control facts the execution
//! loop needs, independent of which operation it names:
//!
//! ```text
//!   7   6   5   4   3   2   1   0
//! [ operands ][alu][pc ][  identifier  ]
//! ```
//!
//! - bits 7-6: operand count (0-2); instruction length is `count + 1`
//! - bit 5: instruction is an ALU operation
//! - bit 4: instruction sets the PC itself (the loop must not advance it)
//! - bits 3-0: instruction identifier within its group

// ============================================================================
// Bit Position Constants
// ============================================================================

/// Operand count field: bits 6-7
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Operand count mask (applied before shifting)
pub const OPERAND_COUNT_MASK: u8 = 0b1100_0000;

/// ALU marker bit
pub const ALU_BIT: u8 = 0b0010_0000;

/// PC-sets-itself bit
pub const SETS_PC_BIT: u8 = 0b0001_0000;

/// Identifier field mask (bits 0-3)
pub const IDENTIFIER_MASK: u8 = 0b0000_1111;

/// Longest instruction in bytes (opcode + two operands)
pub const MAX_INSTRUCTION_LEN: usize = 3;

// ============================================================================
// Field Extraction Functions
// ============================================================================

/// Number of operand bytes following `opcode`
#[inline]
pub const fn operand_count(opcode: u8) -> u8 {
    (opcode & OPERAND_COUNT_MASK) >> OPERAND_COUNT_SHIFT
}

/// Total instruction length in bytes, opcode included
#[inline]
pub const fn instruction_length(opcode: u8) -> u8 {
    operand_count(opcode) + 1
}

/// True when the instruction is responsible for updating PC
#[inline]
pub const fn sets_pc(opcode: u8) -> bool {
    opcode & SETS_PC_BIT != 0
}

/// True when the instruction is dispatched to the ALU
#[inline]
pub const fn is_alu(opcode: u8) -> bool {
    opcode & ALU_BIT != 0
}

/// Identifier bits of the opcode
#[inline]
pub const fn extract_identifier(opcode: u8) -> u8 {
    opcode & IDENTIFIER_MASK
}

/// Build an opcode byte from its fields
#[inline]
pub const fn encode_opcode(operands: u8, alu: bool, sets_pc: bool, identifier: u8) -> u8 {
    let mut byte = (operands << OPERAND_COUNT_SHIFT) & OPERAND_COUNT_MASK;
    if alu {
        byte |= ALU_BIT;
    }
    if sets_pc {
        byte |= SETS_PC_BIT;
    }
    byte | (identifier & IDENTIFIER_MASK)
}
