use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod frontend;

use crate::errors::{TinyError, TinyResult};
use crate::frontend::{parse_reader, ParseOutput};

/// Opens a TINY source file for line-by-line reading.
pub fn open_source(path: &Path) -> TinyResult<BufReader<File>> {
    if !path.is_file() {
        return Err(TinyError::FileReadError(format!(
            "Input file does not exist: {}",
            path.display()
        )));
    }
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Parses the program stored at `path`. Only failing to open the file is an
/// `Err`; everything found while parsing is reported through the output.
pub fn parse_file(path: &Path) -> TinyResult<ParseOutput> {
    let reader = open_source(path)?;
    Ok(parse_reader(reader))
}
