//! # Program Image
//!
//! A program is the raw byte sequence the loader places in memory starting
//! at [`PROGRAM_BASE`](crate::PROGRAM_BASE). Code and data share the same
//! image; nothing distinguishes them until the machine executes.

use crate::error::Ls8Error;
use crate::MEMORY_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Program image
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    bytes: Vec<u8>,
}

impl Program {
    /// Create a program from raw bytes
    ///
    /// Fails when the image does not fit in memory.
    pub fn new(bytes: Vec<u8>) -> Result<Self, Ls8Error> {
        if bytes.len() > MEMORY_SIZE {
            return Err(Ls8Error::ProgramTooLarge {
                size: bytes.len(),
                max: MEMORY_SIZE,
            });
        }
        Ok(Self { bytes })
    }

    /// Empty program
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl TryFrom<Vec<u8>> for Program {
    type Error = Ls8Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Program::new(bytes)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program({} bytes)", self.bytes.len())
    }
}
