#![allow(clippy::module_inception)]

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::errors::errors::{Diagnostic, Error};
use crate::scanner::scanner::{format_tokens, Scanner};
use crate::scanner::tokens::TokenKind;

pub mod errors;
pub mod scanner;

/// Byte range of a lexeme within its source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Totals for one tokenized file. Diagnostics collect the `ERR` tokens the
/// scan produced; they do not make the run a failure.
#[derive(Debug, Default)]
pub struct Summary {
    pub lines: usize,
    pub tokens: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Output path used when the caller does not name one: the input path with
/// its extension replaced by `tok`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("tok")
}

/// Tokenizes `input` line by line into `output`, one output line per input
/// line. Blank input lines (after stripping the terminator) come out as
/// blank lines so line numbers keep corresponding between the two files.
pub fn tokenize_file(input: &Path, output: &Path) -> Result<Summary, Error> {
    let infile = File::open(input).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::InputNotFound {
            path: input.to_path_buf(),
        },
        _ => Error::Read {
            path: input.to_path_buf(),
            source,
        },
    })?;

    let outfile = File::create(output).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;

    let write_err = |source| Error::Write {
        path: output.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(outfile);
    let scanner = Scanner::new();
    let mut summary = Summary::default();

    for (index, line) in BufReader::new(infile).lines().enumerate() {
        let line = line.map_err(|source| Error::Read {
            path: input.to_path_buf(),
            source,
        })?;
        summary.lines += 1;

        if line.trim().is_empty() {
            writeln!(writer).map_err(write_err)?;
            continue;
        }

        let tokens = scanner.scan_line(&line);
        for token in tokens.iter().filter(|t| t.kind == TokenKind::Err) {
            summary.diagnostics.push(Diagnostic::new(index + 1, &line, token));
        }
        summary.tokens += tokens.len();

        writeln!(writer, "{}", format_tokens(&tokens)).map_err(write_err)?;
    }

    writer.flush().map_err(write_err)?;
    Ok(summary)
}
