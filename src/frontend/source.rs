use crate::config::source::MAX_LINE_LENGTH;
use crate::errors::{TinyError, TinyResult};
use std::io::BufRead;

/// Line-buffered view over the program text.
///
/// Only the current line is held in memory. The line counter starts at 0 and
/// is bumped every time a line is fetched, so the first line is line 1.
///
/// Problems confined to one line (too long, not UTF-8) do not interrupt
/// reading; they are queued and handed out by `take_errors`.
pub struct SourceCursor<R> {
    reader: R,
    line: String,
    pos: usize,
    line_number: usize,
    exhausted: bool,
    pending: Vec<TinyError>,
}

impl<R: BufRead> SourceCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
            line_number: 0,
            exhausted: false,
            pending: Vec::new(),
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Drains the line errors found since the last call, oldest first.
    pub fn take_errors(&mut self) -> Vec<TinyError> {
        std::mem::take(&mut self.pending)
    }

    /// Returns the unconsumed rest of the current line after skipping
    /// whitespace, fetching further lines as needed. `None` means end of input.
    pub fn next_token_text(&mut self) -> TinyResult<Option<&str>> {
        self.skip_spaces();
        while self.pos >= self.line.len() {
            if !self.fetch_line()? {
                return Ok(None);
            }
            self.skip_spaces();
        }
        Ok(Some(&self.line[self.pos..]))
    }

    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.line.len());
    }

    /// Consumes everything up to and including `delimiter`.
    pub fn skip_to(&mut self, delimiter: &str) -> TinyResult<()> {
        let start_line = self.line_number;
        loop {
            if self.next_token_text()?.is_none() {
                return Err(TinyError::UnterminatedComment { line: start_line });
            }
            let rest = &self.line[self.pos..];
            if rest.starts_with(delimiter) {
                self.advance(delimiter.len());
                return Ok(());
            }
            let step = rest.chars().next().map_or(1, char::len_utf8);
            self.advance(step);
        }
    }

    fn skip_spaces(&mut self) {
        let rest = &self.line[self.pos..];
        let trimmed = rest.trim_start_matches([' ', '\t', '\r', '\n']);
        self.pos += rest.len() - trimmed.len();
    }

    fn fetch_line(&mut self) -> TinyResult<bool> {
        self.line.clear();
        self.pos = 0;
        if self.exhausted {
            return Ok(false);
        }

        let mut bytes = Vec::new();
        loop {
            bytes.clear();
            match self.reader.read_until(b'\n', &mut bytes) {
                Ok(0) => {
                    self.exhausted = true;
                    return Ok(false);
                }
                Ok(_) => self.line_number += 1,
                Err(err) => {
                    self.exhausted = true;
                    return Err(TinyError::IoError(err));
                }
            }

            let mut length = bytes.len();
            while length > 0 && matches!(bytes[length - 1], b'\n' | b'\r') {
                length -= 1;
            }
            if length > MAX_LINE_LENGTH {
                // Dropped whole; whatever state the caller is in carries on
                // with the next line.
                self.pending.push(TinyError::LineTooLong {
                    line: self.line_number,
                    length,
                });
                continue;
            }

            match std::str::from_utf8(&bytes) {
                Ok(text) => self.line.push_str(text),
                Err(_) => {
                    self.pending.push(TinyError::lexer_error(
                        "source is not valid UTF-8",
                        self.line_number,
                    ));
                    self.line.push_str(&String::from_utf8_lossy(&bytes));
                }
            }
            return Ok(true);
        }
    }
}
