pub mod lexer;
pub mod parser;
pub mod source;
pub mod token;

pub use lexer::Lexer;
pub use parser::{parse_reader, parse_source, ParseOutput, Parser};
pub use source::SourceCursor;
pub use token::{Token, TokenKind};
