use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    If,
    Then,
    Else,
    End,
    Repeat,
    Until,
    Read,
    Write,
    Assign,
    Equal,
    LessThan,
    Plus,
    Minus,
    Times,
    Divide,
    Power,
    SemiColon,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Id,
    Number,
    EndOfFile,
    Error,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::If => "If",
            TokenKind::Then => "Then",
            TokenKind::Else => "Else",
            TokenKind::End => "End",
            TokenKind::Repeat => "Repeat",
            TokenKind::Until => "Until",
            TokenKind::Read => "Read",
            TokenKind::Write => "Write",
            TokenKind::Assign => "Assign",
            TokenKind::Equal => "Equal",
            TokenKind::LessThan => "LessThan",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Times => "Times",
            TokenKind::Divide => "Divide",
            TokenKind::Power => "Power",
            TokenKind::SemiColon => "SemiColon",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::Id => "ID",
            TokenKind::Number => "Num",
            TokenKind::EndOfFile => "EndFile",
            TokenKind::Error => "Error",
        }
    }

    pub fn is_comparison(self) -> bool {
        matches!(self, TokenKind::LessThan | TokenKind::Equal)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One classified piece of source text and the line it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn end_of_file(line: usize) -> Self {
        Self::new(TokenKind::EndOfFile, "", line)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
