//! # LS-8 Runtime
//!
//! Execute LS-8 programs on an 8-bit virtual CPU.
//!
//! ## Features
//!
//! - **256 bytes of memory**: code, data and stack share one flat space
//! - **8 registers**: R0-R7, R7 is the stack pointer
//! - **13 instructions**: data movement, ALU, stack, calls and branches
//! - **Generic PC advance**: instruction length and PC ownership come from
//!   the opcode bits, not from per-opcode cases in the loop
//!
//! ## Example
//!
//! ```rust
//! use ls8_runtime::{VM, VMConfig};
//! use ls8_spec::Program;
//!
//! // LDI R0,8; LDI R1,9; MUL R0,R1; PRN R0; HLT
//! let program = Program::new(vec![
//!     0x82, 0x00, 0x08, 0x82, 0x01, 0x09, 0xA2, 0x00, 0x01, 0x47, 0x00, 0x01,
//! ]).unwrap();
//! let mut vm = VM::new(program, VMConfig::default());
//! let result = vm.run().unwrap();
//! assert_eq!(result.outputs, vec![72]);
//! ```

pub mod error;
pub mod state;
pub mod memory;
pub mod alu;
pub mod execute;
pub mod io;
pub mod trace;
pub mod vm;

pub use state::{Flags, HaltReason, VMState};
pub use memory::Memory;
pub use alu::AluOp;
pub use io::IOHandler;
pub use vm::{ExecutionResult, VMConfig, VM};
pub use error::RuntimeError;

/// Simple execution helper
///
/// Runs a program and returns the values it printed.
pub fn run(program: ls8_spec::Program) -> Result<Vec<u8>, RuntimeError> {
    let mut vm = VM::new(program, VMConfig::default());
    Ok(vm.run()?.outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ls8_spec::{Instruction, Register};

    #[test]
    fn test_public_exports() {
        let _ = VMConfig::default();
        let _ = HaltReason::Halt;
        let _ = Memory::new();
        let _ = Flags::default();
    }

    #[test]
    fn test_vmconfig_default() {
        let config = VMConfig::default();
        assert_eq!(config.max_cycles, None);
        assert!(!config.trace);
    }

    #[test]
    fn test_run_helper() {
        let program = ls8_loader::encode_program(&[
            Instruction::Ldi { reg: Register::R2, value: 42 },
            Instruction::Prn { reg: Register::R2 },
            Instruction::Hlt,
        ])
        .unwrap();
        assert_eq!(run(program).unwrap(), vec![42]);
    }

    #[test]
    fn test_run_helper_propagates_decode_error() {
        let program = ls8_spec::Program::new(vec![0xFF]).unwrap();
        assert!(run(program).is_err());
    }
}
