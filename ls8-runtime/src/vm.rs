//! Virtual Machine for LS-8

use ls8_disassembler::{decode, DisassemblerError};
use ls8_spec::{encoding, Program, STACK_TOP};

use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::io::IOHandler;
use crate::memory::Memory;
use crate::state::{HaltReason, VMState};
use crate::trace::trace_line;

/// VM configuration
#[derive(Debug, Clone, Default)]
pub struct VMConfig {
    /// Stop after this many instructions; `None` runs until HLT
    pub max_cycles: Option<u64>,

    /// Emit a trace line per instruction at TRACE level
    pub trace: bool,
}

/// Execution result
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Number of instructions executed
    pub cycles: u64,

    /// Values printed by PRN, in order
    pub outputs: Vec<u8>,

    /// Reason for halting
    pub halt_reason: HaltReason,
}

/// LS-8 Virtual Machine
#[derive(Debug)]
pub struct VM {
    /// Registers, PC, flags
    state: VMState,

    /// Memory subsystem
    memory: Memory,

    /// PRN sink
    io: IOHandler,

    /// Configuration
    config: VMConfig,
}

impl VM {
    /// Create a VM with `program` loaded at address 0
    pub fn new(program: Program, config: VMConfig) -> Self {
        Self::with_io(program, IOHandler::new(), config)
    }

    /// Create a VM with a custom output sink
    pub fn with_io(program: Program, io: IOHandler, config: VMConfig) -> Self {
        let mut memory = Memory::new();
        memory.load_program(&program);

        Self {
            state: VMState::new(),
            memory,
            io,
            config,
        }
    }

    /// Run-start initialization: reset SP and the cycle count, mark the
    /// machine running
    ///
    /// [`run`](Self::run) calls this; call it directly before driving the
    /// machine with [`step`](Self::step).
    pub fn start(&mut self) {
        self.state.set_sp(STACK_TOP);
        self.state.halted = false;
        self.state.halt_reason = None;
        self.state.cycles = 0;
        tracing::debug!(pc = self.state.pc, sp = STACK_TOP, "starting execution");
    }

    /// Run until halt
    ///
    /// Returns `Err` on a fatal error; the machine is left halted with the
    /// reason recorded in [`VMState::halt_reason`].
    pub fn run(&mut self) -> Result<ExecutionResult> {
        self.start();

        while !self.state.is_halted() {
            if let Some(limit) = self.config.max_cycles {
                if self.state.cycles >= limit {
                    self.state.halt(HaltReason::CycleLimit);
                    break;
                }
            }

            self.step()?;
        }

        let halt_reason = self.state.halt_reason.clone().unwrap_or(HaltReason::Halt);
        tracing::debug!(cycles = self.state.cycles, reason = ?halt_reason, "halted");

        Ok(ExecutionResult {
            cycles: self.state.cycles,
            outputs: self.io.outputs().to_vec(),
            halt_reason,
        })
    }

    /// Fetch, decode and execute one instruction
    ///
    /// Does nothing once the machine has halted.
    pub fn step(&mut self) -> Result<()> {
        if self.state.is_halted() {
            return Ok(());
        }

        let pc = self.state.pc;
        let bytes = self.memory.fetch(pc);
        let opcode = bytes[0];

        let inst = match decode(&bytes) {
            Ok(inst) => inst,
            Err(e) => return Err(self.fault(pc, opcode, e)),
        };

        if self.config.trace {
            let len = encoding::instruction_length(opcode) as usize;
            tracing::trace!("{}", trace_line(&self.state, &bytes[..len], &inst));
        }

        if let Err(e) = execute(&inst, &mut self.state, &mut self.memory, &mut self.io) {
            tracing::warn!(pc, error = %e, "instruction failed");
            self.state.halt(HaltReason::Fault {
                pc,
                msg: e.to_string(),
            });
            return Err(e);
        }

        if !encoding::sets_pc(opcode) {
            self.state.pc = pc.wrapping_add(encoding::instruction_length(opcode));
        }

        self.state.inc_cycles();
        Ok(())
    }

    fn fault(&mut self, pc: u8, opcode: u8, err: DisassemblerError) -> RuntimeError {
        let (reason, error) = match err {
            DisassemblerError::InvalidRegister(index) => (
                HaltReason::InvalidRegister { pc, index },
                RuntimeError::InvalidRegister { pc, index },
            ),
            _ => (
                HaltReason::InvalidInstruction { pc, opcode },
                RuntimeError::UnknownOpcode { pc, opcode },
            ),
        };

        tracing::warn!(pc, opcode, "decode error: {}", error);
        self.state.halt(reason);
        error
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &VMState {
        &self.state
    }

    /// Get memory (for debugging)
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Output sink
    pub fn io(&self) -> &IOHandler {
        &self.io
    }
}
