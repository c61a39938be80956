//! Per-instruction trace lines

use ls8_disassembler::{format, format_bytes};
use ls8_spec::Instruction;
use crate::state::VMState;

/// One trace line describing the instruction about to execute
///
/// ```text
/// 00 | 82 00 08 | 00 00 00 00 00 00 00 F4 | FL=000 | LDI R0, 8
/// ```
pub fn trace_line(state: &VMState, bytes: &[u8], instr: &Instruction) -> String {
    let registers = format_bytes(&state.registers);
    format!(
        "{:02X} | {} | {} | FL={:03b} | {}",
        state.pc,
        format_bytes(bytes),
        registers,
        state.flags.bits(),
        format(instr)
    )
}
