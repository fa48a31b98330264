use std::fmt;
use std::io;

#[derive(Debug)]
pub enum TinyError {
    // File and I/O errors
    FileReadError(String),
    FileWriteError(String),
    IoError(io::Error),

    // Lexical analysis errors
    LexerError {
        message: String,
        line: usize,
    },
    UnterminatedComment {
        line: usize,
    },
    LineTooLong {
        line: usize,
        length: usize,
    },
    TokenTooLong {
        token: String,
        line: usize,
    },
    InvalidNumber {
        number: String,
        line: usize,
    },

    // Parsing errors
    UnexpectedToken {
        token: String,
        line: usize,
    },
    UnexpectedStatement {
        line: usize,
    },
    UnexpectedExpression {
        line: usize,
    },
    NestingTooDeep {
        line: usize,
    },

    // Compilation pipeline errors
    CompilationError {
        stage: String,
        message: String,
    },
}

impl TinyError {
    /// Create a lexer error with line information
    pub fn lexer_error(message: impl Into<String>, line: usize) -> Self {
        TinyError::LexerError {
            message: message.into(),
            line,
        }
    }

    /// Create a compilation error for a specific stage
    pub fn compilation_error(stage: impl Into<String>, message: impl Into<String>) -> Self {
        TinyError::CompilationError {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Source line the error refers to, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            TinyError::LexerError { line, .. }
            | TinyError::UnterminatedComment { line }
            | TinyError::LineTooLong { line, .. }
            | TinyError::TokenTooLong { line, .. }
            | TinyError::InvalidNumber { line, .. }
            | TinyError::UnexpectedToken { line, .. }
            | TinyError::UnexpectedStatement { line }
            | TinyError::UnexpectedExpression { line }
            | TinyError::NestingTooDeep { line } => Some(*line),
            _ => None,
        }
    }
}

impl fmt::Display for TinyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TinyError::FileReadError(msg) => write!(f, "File read error: {}", msg),
            TinyError::FileWriteError(msg) => write!(f, "File write error: {}", msg),
            TinyError::IoError(err) => write!(f, "I/O error: {}", err),

            TinyError::LexerError { message, line } => {
                write!(f, "Lexer error at line {}: {}", line, message)
            }
            TinyError::UnterminatedComment { line } => {
                write!(f, "Unterminated comment starting at line {}", line)
            }
            TinyError::LineTooLong { line, length } => {
                write!(f, "Line {} is too long ({} bytes)", line, length)
            }
            TinyError::TokenTooLong { token, line } => {
                write!(f, "Token [{}] at line {} is too long", token, line)
            }
            TinyError::InvalidNumber { number, line } => {
                write!(f, "Invalid number '{}' at line {}", number, line)
            }

            // These three texts are the diagnostic format consumers match on.
            TinyError::UnexpectedToken { token, line } => {
                write!(f, "Unexpected token [{}] at line {}", token, line)
            }
            TinyError::UnexpectedStatement { line } => {
                write!(f, "Unexpected Statement at line {}", line)
            }
            TinyError::UnexpectedExpression { line } => {
                write!(f, "Unexpected expression at line {}", line)
            }
            TinyError::NestingTooDeep { line } => {
                write!(f, "Nesting too deep at line {}", line)
            }

            TinyError::CompilationError { stage, message } => {
                write!(f, "Compilation error in {}: {}", stage, message)
            }
        }
    }
}

impl std::error::Error for TinyError {}

// Conversion implementations for common error types
impl From<io::Error> for TinyError {
    fn from(err: io::Error) -> Self {
        TinyError::IoError(err)
    }
}

// Type alias for Result with TinyError
pub type TinyResult<T> = Result<T, TinyError>;
