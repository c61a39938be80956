//! Instruction formatting to assembly text

use ls8_spec::{Instruction, Register};

/// Format instruction as assembly text
pub fn format(instr: &Instruction) -> String {
    let op = instr.opcode();
    match *instr {
        Instruction::Hlt | Instruction::Ret => op.to_string(),

        Instruction::Ldi { reg, value } => format!("{} {}, {}", op, format_reg(reg), value),

        Instruction::Add { reg_a, reg_b }
        | Instruction::Mul { reg_a, reg_b }
        | Instruction::Cmp { reg_a, reg_b } => {
            format!("{} {}, {}", op, format_reg(reg_a), format_reg(reg_b))
        }

        Instruction::Prn { reg }
        | Instruction::Push { reg }
        | Instruction::Pop { reg }
        | Instruction::Call { reg }
        | Instruction::Jmp { reg }
        | Instruction::Jeq { reg }
        | Instruction::Jne { reg } => format!("{} {}", op, format_reg(reg)),
    }
}

fn format_reg(reg: Register) -> String {
    reg.name().to_string()
}

/// Format raw bytes as a hex dump (`82 00 08`)
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
