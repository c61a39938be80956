//! Runtime error types for LS-8

use ls8_spec::Opcode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Unknown opcode {opcode:#04x} at PC {pc:#04x}")]
    UnknownOpcode { pc: u8, opcode: u8 },

    #[error("Invalid register {index} in instruction at PC {pc:#04x}")]
    InvalidRegister { pc: u8, index: u8 },

    #[error("Unsupported ALU operation: {0}")]
    UnsupportedAluOperation(Opcode),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RuntimeError {
    /// Errors caused by the program image rather than by the host
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            RuntimeError::UnknownOpcode { .. } | RuntimeError::InvalidRegister { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_unknown_opcode_display() {
        let err = RuntimeError::UnknownOpcode { pc: 0x05, opcode: 0xFF };
        assert_eq!(err.to_string(), "Unknown opcode 0xff at PC 0x05");
    }

    #[test]
    fn test_invalid_register_display() {
        let err = RuntimeError::InvalidRegister { pc: 0x10, index: 9 };
        assert_eq!(err.to_string(), "Invalid register 9 in instruction at PC 0x10");
    }

    #[test]
    fn test_unsupported_alu_display() {
        let err = RuntimeError::UnsupportedAluOperation(Opcode::Cmp);
        assert_eq!(err.to_string(), "Unsupported ALU operation: CMP");
    }

    #[test]
    fn test_io_error_from() {
        let io_err = IoError::new(ErrorKind::BrokenPipe, "pipe closed");
        let runtime_err: RuntimeError = io_err.into();
        assert!(runtime_err.to_string().contains("pipe closed"));
        assert!(!runtime_err.is_decode_error());
    }

    #[test]
    fn test_decode_errors() {
        assert!(RuntimeError::UnknownOpcode { pc: 0, opcode: 0 }.is_decode_error());
        assert!(RuntimeError::InvalidRegister { pc: 0, index: 8 }.is_decode_error());
        assert!(!RuntimeError::UnsupportedAluOperation(Opcode::Hlt).is_decode_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuntimeError>();
    }
}
