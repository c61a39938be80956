//! VM state for LS-8

use ls8_spec::{Register, NUM_REGISTERS, PROGRAM_BASE};

/// Comparison flags written by CMP
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub equal: bool,
    pub less: bool,
    pub greater: bool,
}

impl Flags {
    /// Flags for an unsigned comparison of `a` against `b`
    ///
    /// Exactly one flag is set.
    pub fn compare(a: u8, b: u8) -> Self {
        let mut flags = Flags::default();
        match a.cmp(&b) {
            std::cmp::Ordering::Equal => flags.equal = true,
            std::cmp::Ordering::Less => flags.less = true,
            std::cmp::Ordering::Greater => flags.greater = true,
        }
        flags
    }

    /// Packed `00000LGE` form
    pub fn bits(&self) -> u8 {
        (self.less as u8) << 2 | (self.greater as u8) << 1 | self.equal as u8
    }
}

/// VM state
#[derive(Debug, Clone)]
pub struct VMState {
    /// General purpose registers (R7 is SP)
    pub registers: [u8; NUM_REGISTERS],

    /// Program counter
    pub pc: u8,

    /// Comparison flags
    pub flags: Flags,

    /// Executed instruction count
    pub cycles: u64,

    /// Halted flag
    pub halted: bool,

    /// Halt reason
    pub halt_reason: Option<HaltReason>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HaltReason {
    /// HLT instruction
    Halt,
    /// Opcode byte with no handler
    InvalidInstruction { pc: u8, opcode: u8 },
    /// Register operand outside R0-R7
    InvalidRegister { pc: u8, index: u8 },
    /// Configured cycle limit reached
    CycleLimit,
    /// Instruction failed while executing
    Fault { pc: u8, msg: String },
}

impl VMState {
    pub fn new() -> Self {
        VMState {
            registers: [0; NUM_REGISTERS],
            pc: PROGRAM_BASE,
            flags: Flags::default(),
            cycles: 0,
            halted: false,
            halt_reason: None,
        }
    }

    #[inline]
    pub fn read_reg(&self, reg: Register) -> u8 {
        self.registers[reg.index()]
    }

    #[inline]
    pub fn write_reg(&mut self, reg: Register, value: u8) {
        self.registers[reg.index()] = value;
    }

    #[inline]
    pub fn sp(&self) -> u8 {
        self.read_reg(Register::SP)
    }

    #[inline]
    pub fn set_sp(&mut self, value: u8) {
        self.write_reg(Register::SP, value);
    }

    /// Halt execution
    pub fn halt(&mut self, reason: HaltReason) {
        self.halted = true;
        self.halt_reason = Some(reason);
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    #[inline]
    pub fn inc_cycles(&mut self) {
        self.cycles += 1;
    }
}

impl Default for VMState {
    fn default() -> Self {
        Self::new()
    }
}
