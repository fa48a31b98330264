// Source reading limits
pub mod source {
    // Longest accepted source line, not counting the line terminator
    pub const MAX_LINE_LENGTH: usize = 10_000;
}

// Tokenizer tables and limits
pub mod lexer {
    use crate::frontend::token::TokenKind;
    use lazy_static::lazy_static;
    use regex::Regex;
    use std::collections::HashMap;

    pub const MAX_TOKEN_LEN: usize = 40;

    pub const COMMENT_OPEN: &str = "{";
    pub const COMMENT_CLOSE: &str = "}";

    lazy_static! {
        // Longer symbols must precede any symbol that is a prefix of them.
        pub static ref SYMBOLIC_TOKENS: Vec<(&'static str, TokenKind)> = vec![
            (":=", TokenKind::Assign),
            ("=", TokenKind::Equal),
            ("<", TokenKind::LessThan),
            ("+", TokenKind::Plus),
            ("-", TokenKind::Minus),
            ("*", TokenKind::Times),
            ("/", TokenKind::Divide),
            ("^", TokenKind::Power),
            (";", TokenKind::SemiColon),
            ("(", TokenKind::LeftParen),
            (")", TokenKind::RightParen),
            (COMMENT_OPEN, TokenKind::LeftBrace),
            (COMMENT_CLOSE, TokenKind::RightBrace),
        ];

        pub static ref RESERVED_WORDS: HashMap<&'static str, TokenKind> = [
            ("if", TokenKind::If),
            ("then", TokenKind::Then),
            ("else", TokenKind::Else),
            ("end", TokenKind::End),
            ("repeat", TokenKind::Repeat),
            ("until", TokenKind::Until),
            ("read", TokenKind::Read),
            ("write", TokenKind::Write),
        ]
        .into_iter()
        .collect();

        pub static ref NUMBER_PATTERN: Regex = Regex::new(r"^[0-9]+").unwrap();
        pub static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"^[A-Za-z_]+").unwrap();
    }
}

// Parser limits
pub mod parser {
    // Deepest nesting of "(", "^", "if" and "repeat", and tallest expression tree
    pub const MAX_NESTING_DEPTH: usize = 256;
}

// Tree dump layout
pub mod printer {
    pub const INDENT_WIDTH: usize = 3;
}

// Driver defaults
pub mod output {
    pub const SOURCE_EXTENSION: &str = "tiny";
    pub const DEFAULT_TREE_FILE: &str = "output.txt";
    pub const DEFAULT_ERROR_FILE: &str = "error.txt";
}
