//! Integration tests for the LS-8 program loader
//!
//! Covers the full path from text image to program bytes, both from
//! in-memory source and from files on disk.

use ls8_loader::{encode, encode_program, load_file, load_source, LoaderError};
use ls8_spec::{Instruction, Register};

const MULT_SOURCE: &str = "\
# mult.ls8
10000010 # LDI R0,8
00000000
00001000
10000010 # LDI R1,9
00000001
00001001
10100010 # MUL R0,R1
00000000
00000001
01000111 # PRN R0
00000000
00000001 # HLT
";

// ============================================================================
// Text images
// ============================================================================

#[test]
fn test_load_mult_program() {
    let program = load_source(MULT_SOURCE).unwrap();
    assert_eq!(program.len(), 12);
    assert_eq!(
        program.as_bytes(),
        &[0x82, 0x00, 0x08, 0x82, 0x01, 0x09, 0xA2, 0x00, 0x01, 0x47, 0x00, 0x01]
    );
}

#[test]
fn test_text_image_matches_encoder() {
    let encoded = encode_program(&[
        Instruction::Ldi { reg: Register::R0, value: 8 },
        Instruction::Ldi { reg: Register::R1, value: 9 },
        Instruction::Mul { reg_a: Register::R0, reg_b: Register::R1 },
        Instruction::Prn { reg: Register::R0 },
        Instruction::Hlt,
    ])
    .unwrap();

    assert_eq!(load_source(MULT_SOURCE).unwrap(), encoded);
}

#[test]
fn test_windows_line_endings() {
    let program = load_source("10000010\r\n00000000\r\n00000101\r\n00000001\r\n").unwrap();
    assert_eq!(program.as_bytes(), &[0x82, 0x00, 0x05, 0x01]);
}

#[test]
fn test_no_trailing_newline() {
    let program = load_source("00000001").unwrap();
    assert_eq!(program.as_bytes(), &[0x01]);
}

#[test]
fn test_comment_without_space() {
    let program = load_source("01000111#PRN\n00000011#R3\n").unwrap();
    assert_eq!(program.as_bytes(), &[0x47, 0x03]);
}

#[test]
fn test_full_memory_image() {
    let source = "00000000\n".repeat(256);
    let program = load_source(&source).unwrap();
    assert_eq!(program.len(), 256);
}

// ============================================================================
// Encoder
// ============================================================================

#[test]
fn test_encode_operand_order() {
    assert_eq!(
        encode(&Instruction::Cmp { reg_a: Register::R4, reg_b: Register::R2 }),
        vec![0xA7, 0x04, 0x02]
    );
    assert_eq!(encode(&Instruction::Call { reg: Register::R1 }), vec![0x50, 0x01]);
    assert_eq!(encode(&Instruction::Ret), vec![0x11]);
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_load_file_roundtrip() {
    let path = std::env::temp_dir().join(format!("ls8-loader-{}.ls8", std::process::id()));
    std::fs::write(&path, MULT_SOURCE).unwrap();

    let program = load_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(program.len(), 12);
}

#[test]
fn test_load_file_not_found_names_path() {
    let err = load_file("no/such/program.ls8").unwrap_err();
    match &err {
        LoaderError::NotFound { path } => assert!(path.ends_with("program.ls8")),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.to_string(), "Couldn't find file no/such/program.ls8");
}
