use crate::config::lexer::{
    COMMENT_CLOSE, IDENTIFIER_PATTERN, MAX_TOKEN_LEN, NUMBER_PATTERN, RESERVED_WORDS,
    SYMBOLIC_TOKENS,
};
use crate::errors::{TinyError, TinyResult};
use crate::frontend::source::SourceCursor;
use crate::frontend::token::{Token, TokenKind};
use std::io::BufRead;

/// Pull-based tokenizer: every call to `next_token` reads just enough of the
/// source to produce one token.
pub struct Lexer<R> {
    cursor: SourceCursor<R>,
}

impl<'a> Lexer<&'a [u8]> {
    pub fn from_source(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl<R: BufRead> Lexer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            cursor: SourceCursor::new(reader),
        }
    }

    /// Line errors the cursor queued since the last call, oldest first.
    pub fn take_errors(&mut self) -> Vec<TinyError> {
        self.cursor.take_errors()
    }

    /// Produces the next token. An `Err` is never terminal: the offending text
    /// has already been consumed, so calling again continues with what follows.
    pub fn next_token(&mut self) -> TinyResult<Token> {
        loop {
            let next = self.cursor.next_token_text()?.map(|text| {
                let (kind, lexeme) = Self::classify(text);
                (kind, lexeme.to_string())
            });
            let Some((kind, lexeme)) = next else {
                return Ok(Token::end_of_file(self.cursor.line_number()));
            };
            let line = self.cursor.line_number();
            self.cursor.advance(lexeme.len());

            match kind {
                // Comments never reach the parser.
                TokenKind::LeftBrace => self.cursor.skip_to(COMMENT_CLOSE)?,
                TokenKind::Id | TokenKind::Number if lexeme.len() > MAX_TOKEN_LEN => {
                    return Err(TinyError::TokenTooLong {
                        token: lexeme,
                        line,
                    });
                }
                _ => return Ok(Token::new(kind, lexeme, line)),
            }
        }
    }

    fn classify(text: &str) -> (TokenKind, &str) {
        if let Some((symbol, kind)) = SYMBOLIC_TOKENS
            .iter()
            .find(|(symbol, _)| text.starts_with(*symbol))
        {
            return (*kind, &text[..symbol.len()]);
        }

        if let Some(number) = NUMBER_PATTERN.find(text) {
            return (TokenKind::Number, number.as_str());
        }

        if let Some(word) = IDENTIFIER_PATTERN.find(text) {
            let word = word.as_str();
            let kind = RESERVED_WORDS.get(word).copied().unwrap_or(TokenKind::Id);
            return (kind, word);
        }

        // Unclassifiable: hand back exactly one character so the cursor moves on.
        let width = text.chars().next().map_or(0, char::len_utf8);
        (TokenKind::Error, &text[..width])
    }
}

// Convenience function: tokenizes a whole source string, end-of-file excluded.
pub fn scan(source: &str) -> TinyResult<Vec<Token>> {
    let mut lexer = Lexer::from_source(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        if let Some(err) = lexer.take_errors().into_iter().next() {
            return Err(err);
        }
        let token = token?;
        if token.is(TokenKind::EndOfFile) {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}
