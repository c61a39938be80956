//! Main loader logic

use std::io::ErrorKind;
use std::path::Path;

use logos::Logos;
use ls8_spec::Program;

use crate::error::{LoaderError, Result};
use crate::lexer::Token;

/// Digits per byte literal
const BYTE_DIGITS: usize = 8;

/// Parse a text program image into a program
///
/// One byte per line, written as an 8-digit binary literal. `#` starts a
/// comment; blank and comment-only lines are skipped.
pub fn load_source(source: &str) -> Result<Program> {
    let mut bytes = Vec::new();
    let mut lex = Token::lexer(source);

    let mut line = 1usize;
    let mut line_start = 0usize;
    let mut byte_on_line = false;

    while let Some(token) = lex.next() {
        let span = lex.span();
        let column = span.start - line_start + 1;

        match token {
            Ok(Token::Newline) => {
                line += 1;
                line_start = span.end;
                byte_on_line = false;
            }
            Ok(Token::Bits(text)) => {
                if byte_on_line {
                    return Err(LoaderError::SyntaxError {
                        line,
                        column,
                        message: "expected one byte per line".to_string(),
                    });
                }
                bytes.push(parse_byte(&text, line)?);
                byte_on_line = true;
            }
            Err(()) => {
                return Err(LoaderError::SyntaxError {
                    line,
                    column,
                    message: format!("unexpected input '{}'", lex.slice()),
                });
            }
        }
    }

    let program = Program::new(bytes)?;
    tracing::debug!(bytes = program.len(), "loaded program image");
    Ok(program)
}

/// Read and parse a program image from disk
pub fn load_file(path: impl AsRef<Path>) -> Result<Program> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoaderError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoaderError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    tracing::debug!(path = %path.display(), "reading program image");
    load_source(&source)
}

fn parse_byte(text: &str, line: usize) -> Result<u8> {
    if text.len() != BYTE_DIGITS {
        return Err(LoaderError::InvalidByte {
            line,
            text: text.to_string(),
        });
    }
    u8::from_str_radix(text, 2).map_err(|_| LoaderError::InvalidByte {
        line,
        text: text.to_string(),
    })
}
