//! Instruction decoder

use ls8_spec::{Instruction, Opcode, Register};
use crate::error::{DisassemblerError, Result};

/// Decode the instruction starting at `bytes[0]`
///
/// `bytes` may be longer than the instruction; only the opcode and its
/// operands are read.
pub fn decode(bytes: &[u8]) -> Result<Instruction> {
    let (&byte, operands) = bytes.split_first().ok_or(DisassemblerError::EmptyInput)?;
    let opcode = Opcode::from_u8(byte).ok_or(DisassemblerError::UnknownOpcode(byte))?;

    let needed = opcode.length() as usize;
    if bytes.len() < needed {
        return Err(DisassemblerError::Truncated {
            opcode: byte,
            needed,
            available: bytes.len(),
        });
    }

    let instr = match opcode {
        Opcode::Hlt => Instruction::Hlt,
        Opcode::Ret => Instruction::Ret,
        Opcode::Ldi => Instruction::Ldi {
            reg: decode_register(operands[0])?,
            value: operands[1],
        },
        Opcode::Prn => Instruction::Prn { reg: decode_register(operands[0])? },
        Opcode::Push => Instruction::Push { reg: decode_register(operands[0])? },
        Opcode::Pop => Instruction::Pop { reg: decode_register(operands[0])? },
        Opcode::Call => Instruction::Call { reg: decode_register(operands[0])? },
        Opcode::Jmp => Instruction::Jmp { reg: decode_register(operands[0])? },
        Opcode::Jeq => Instruction::Jeq { reg: decode_register(operands[0])? },
        Opcode::Jne => Instruction::Jne { reg: decode_register(operands[0])? },
        Opcode::Add | Opcode::Mul | Opcode::Cmp => {
            let reg_a = decode_register(operands[0])?;
            let reg_b = decode_register(operands[1])?;
            match opcode {
                Opcode::Add => Instruction::Add { reg_a, reg_b },
                Opcode::Mul => Instruction::Mul { reg_a, reg_b },
                _ => Instruction::Cmp { reg_a, reg_b },
            }
        }
    };

    Ok(instr)
}

fn decode_register(index: u8) -> Result<Register> {
    Register::from_index(index as usize).ok_or(DisassemblerError::InvalidRegister(index))
}
