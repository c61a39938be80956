//! Instruction execution for LS-8
//!
//! `execute` is the dispatch table: one arm per opcode. Handlers for
//! instructions whose opcode has the PC-sets-itself bit write `state.pc`
//! themselves, including the fall-through path of conditional jumps. Every
//! other handler leaves PC alone and the VM loop advances it.

use ls8_spec::{Instruction, Register};
use crate::alu::AluOp;
use crate::error::Result;
use crate::io::IOHandler;
use crate::memory::Memory;
use crate::state::{Flags, HaltReason, VMState};

/// Execute single instruction
pub fn execute(
    instr: &Instruction,
    state: &mut VMState,
    memory: &mut Memory,
    io: &mut IOHandler,
) -> Result<()> {
    match *instr {
        // ========== System ==========
        Instruction::Hlt => {
            state.halt(HaltReason::Halt);
        }

        // ========== Data movement ==========
        Instruction::Ldi { reg, value } => {
            state.write_reg(reg, value);
        }

        Instruction::Prn { reg } => {
            io.write(state.read_reg(reg))?;
        }

        // ========== ALU ==========
        Instruction::Add { reg_a, reg_b } | Instruction::Mul { reg_a, reg_b } => {
            let op = AluOp::from_opcode(instr.opcode())?;
            let result = op.apply(state.read_reg(reg_a), state.read_reg(reg_b));
            state.write_reg(reg_a, result);
        }

        Instruction::Cmp { reg_a, reg_b } => {
            state.flags = Flags::compare(state.read_reg(reg_a), state.read_reg(reg_b));
        }

        // ========== Stack ==========
        Instruction::Push { reg } => {
            push_register(state, memory, reg);
        }

        Instruction::Pop { reg } => {
            let value = pop(state, memory);
            state.write_reg(reg, value);
        }

        // ========== Control flow ==========
        Instruction::Call { reg } => {
            let return_addr = state.pc.wrapping_add(instr.length());
            push(state, memory, return_addr);
            state.pc = state.read_reg(reg);
        }

        Instruction::Ret => {
            state.pc = pop(state, memory);
        }

        Instruction::Jmp { reg } => {
            state.pc = state.read_reg(reg);
        }

        Instruction::Jeq { reg } => {
            let taken = state.flags.equal;
            branch(state, taken, reg, instr.length());
        }

        Instruction::Jne { reg } => {
            let taken = !state.flags.equal;
            branch(state, taken, reg, instr.length());
        }
    }

    Ok(())
}

/// SP -= 1, then mem[SP] = value
pub fn push(state: &mut VMState, memory: &mut Memory, value: u8) {
    let sp = state.sp().wrapping_sub(1);
    state.set_sp(sp);
    memory.write(sp, value);
}

/// value = mem[SP], then SP += 1
pub fn pop(state: &mut VMState, memory: &Memory) -> u8 {
    let sp = state.sp();
    let value = memory.read(sp);
    state.set_sp(sp.wrapping_add(1));
    value
}

// The register is read after SP moves, so PUSH R7 stores the new SP.
fn push_register(state: &mut VMState, memory: &mut Memory, reg: Register) {
    let sp = state.sp().wrapping_sub(1);
    state.set_sp(sp);
    memory.write(sp, state.read_reg(reg));
}

fn branch(state: &mut VMState, taken: bool, target: Register, len: u8) {
    state.pc = if taken {
        state.read_reg(target)
    } else {
        state.pc.wrapping_add(len)
    };
}
