//! # LS-8 Disassembler
//!
//! Decode LS-8 bytecode into typed instructions and human-readable assembly.
//!
//! The runtime uses [`decode`] as its instruction decoder, so anything this
//! crate accepts is exactly what the machine executes.
//!
//! ## Example
//!
//! ```rust
//! use ls8_spec::Program;
//! use ls8_disassembler::disassemble;
//!
//! let program = Program::new(vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]).unwrap();
//! let listing = disassemble(&program);
//! assert!(listing.contains("LDI R0, 8"));
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::{disassemble, sweep, Line};
pub use decoder::decode;
pub use formatter::{format, format_bytes};
