//! # Lexer for LS-8 Program Images

use logos::Logos;

/// Tokens of a text program image
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip whitespace (not newlines)
#[logos(skip r"#[^\n]*")] // Skip comments
pub enum Token {
    /// Run of binary digits; length is validated by the loader
    #[regex(r"[01]+", |lex| lex.slice().to_string())]
    Bits(String),

    /// Newline
    #[regex(r"\n")]
    Newline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_bits() {
        let mut lex = Token::lexer("10000010 00000000");
        assert_eq!(lex.next(), Some(Ok(Token::Bits("10000010".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Bits("00000000".to_string()))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_skips_comments() {
        let mut lex = Token::lexer("10000010 # LDI R0,8\n# whole line\n");
        assert_eq!(lex.next(), Some(Ok(Token::Bits("10000010".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Newline)));
        assert_eq!(lex.next(), Some(Ok(Token::Newline)));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_crlf() {
        let mut lex = Token::lexer("00000001\r\n");
        assert_eq!(lex.next(), Some(Ok(Token::Bits("00000001".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Newline)));
    }

    #[test]
    fn test_lexer_rejects_other_digits() {
        let mut lex = Token::lexer("1012");
        assert_eq!(lex.next(), Some(Ok(Token::Bits("101".to_string()))));
        assert_eq!(lex.next(), Some(Err(())));
    }
}
