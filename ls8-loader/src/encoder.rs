//! Instruction encoding to LS-8 bytes

use ls8_spec::{Instruction, Program};
use crate::error::Result;

/// Encode instruction as opcode byte followed by its operands
pub fn encode(instr: &Instruction) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(instr.length() as usize);
    bytes.push(instr.opcode().to_u8());
    bytes.extend(instr.operands());
    bytes
}

/// Encode a sequence of instructions into a program image
pub fn encode_program(instructions: &[Instruction]) -> Result<Program> {
    let bytes: Vec<u8> = instructions.iter().flat_map(encode).collect();
    Ok(Program::new(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ls8_spec::Register;

    #[test]
    fn test_encode_ldi() {
        let bytes = encode(&Instruction::Ldi { reg: Register::R1, value: 9 });
        assert_eq!(bytes, vec![0b1000_0010, 0b0000_0001, 0b0000_1001]);
    }

    #[test]
    fn test_encode_ret() {
        assert_eq!(encode(&Instruction::Ret), vec![0b0001_0001]);
    }

    #[test]
    fn test_encode_program_concatenates() {
        let program = encode_program(&[
            Instruction::Prn { reg: Register::R0 },
            Instruction::Hlt,
        ])
        .unwrap();
        assert_eq!(program.as_bytes(), &[0x47, 0x00, 0x01]);
    }

    #[test]
    fn test_encode_program_too_large() {
        let instructions = vec![Instruction::Ldi { reg: Register::R0, value: 0 }; 90];
        assert!(encode_program(&instructions).is_err());
    }
}
