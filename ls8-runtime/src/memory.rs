//! Memory subsystem
//!
//! Addresses are `u8`, so every address the machine can form is in range.
//! Address arithmetic wraps modulo 256: reading past 0xFF continues at 0x00
//! and pushing below 0x00 continues at 0xFF.

use ls8_spec::encoding::MAX_INSTRUCTION_LEN;
use ls8_spec::{Program, MEMORY_SIZE, PROGRAM_BASE};

#[derive(Debug, Clone)]
pub struct Memory {
    data: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            data: [0; MEMORY_SIZE],
        }
    }

    #[inline]
    pub fn read(&self, addr: u8) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    pub fn write(&mut self, addr: u8, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Opcode byte at `pc` plus the two bytes after it
    pub fn fetch(&self, pc: u8) -> [u8; MAX_INSTRUCTION_LEN] {
        let mut bytes = [0u8; MAX_INSTRUCTION_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = self.read(pc.wrapping_add(i as u8));
        }
        bytes
    }

    /// Copy a program image into memory at the load address
    pub fn load_program(&mut self, program: &Program) {
        for (i, &byte) in program.as_bytes().iter().enumerate() {
            self.write(PROGRAM_BASE.wrapping_add(i as u8), byte);
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
