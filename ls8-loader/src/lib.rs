//! LS-8 Program Loader
//!
//! Turn text program images into byte images the machine can execute.
//!
//! ## Example
//!
//! ```rust
//! use ls8_loader::load_source;
//!
//! let source = r#"
//!     10000010 # LDI R0,8
//!     00000000
//!     00001000
//!     00000001 # HLT
//! "#;
//!
//! let program = load_source(source).unwrap();
//! assert_eq!(program.len(), 4);
//! ```

pub mod error;
pub mod lexer;
pub mod loader;
pub mod encoder;

pub use error::{LoaderError, Result};
pub use loader::{load_file, load_source};
pub use encoder::{encode, encode_program};
