//! Main disassembler logic

use ls8_spec::{Instruction, Program};
use crate::decoder::decode;
use crate::formatter::format;

/// One entry of a linear sweep over a program image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub address: u8,
    pub bytes: Vec<u8>,
    /// `None` when the bytes at `address` do not decode
    pub instruction: Option<Instruction>,
}

/// Linear sweep: decode instructions back to back, treating undecodable
/// bytes as single data bytes
pub fn sweep(program: &Program) -> Vec<Line> {
    let bytes = program.as_bytes();
    let mut lines = Vec::new();
    let mut offset = 0usize;

    while offset < bytes.len() {
        let (instruction, len) = match decode(&bytes[offset..]) {
            Ok(instr) => (Some(instr), instr.length() as usize),
            Err(_) => (None, 1),
        };
        lines.push(Line {
            address: offset as u8,
            bytes: bytes[offset..offset + len].to_vec(),
            instruction,
        });
        offset += len;
    }

    lines
}

/// Disassemble a program into a loadable text image
///
/// Each byte is written as an 8-digit binary literal. The first byte of
/// every instruction carries a comment with its address and assembly, so the
/// output can be fed straight back to the loader.
pub fn disassemble(program: &Program) -> String {
    let mut output = String::new();

    output.push_str("# LS-8 Disassembly\n");
    output.push_str(&format!("# Size: {} bytes\n", program.len()));

    for line in sweep(program) {
        let text = match &line.instruction {
            Some(instr) => format(instr),
            None => format!(".byte 0x{:02X}", line.bytes[0]),
        };

        for (i, byte) in line.bytes.iter().enumerate() {
            if i == 0 {
                output.push_str(&format!("{:08b} # 0x{:02X}: {}\n", byte, line.address, text));
            } else {
                output.push_str(&format!("{:08b}\n", byte));
            }
        }
    }

    output
}
