//! Reading the term count.

use std::io::BufRead;

use crate::{Error, Result};

/// Parse a term count, ignoring surrounding whitespace
pub fn parse_count(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    trimmed.parse::<usize>().map_err(|_| Error::InvalidCount(trimmed.to_string()))
}

/// Read one line from `reader` and parse it as a term count
pub fn read_count<R: BufRead>(mut reader: R) -> Result<usize> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    parse_count(&line)
}
