use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::scanner::tokens::Token;

/// Faults at the file boundary. Scanning itself never produces one of
/// these; every variant comes from opening, reading or writing a file.
#[derive(Error, Debug)]
pub enum Error {
    #[error("input file {path:?} not found")]
    InputNotFound { path: PathBuf },
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// A lexical complaint attached to one `ERR` token. Line and column are
/// 1-based; `column` counts characters, not bytes.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub lexeme: String,
    pub text: String,
}

impl Diagnostic {
    pub fn new(line: usize, text: &str, token: &Token) -> Diagnostic {
        let column = text[..token.span.start].chars().count() + 1;

        Diagnostic {
            line,
            column,
            lexeme: token.lexeme.clone(),
            text: text.to_string(),
        }
    }

    /// Renders a caret block pointing at the offending character:
    ///
    /// ```text
    /// Warning: unrecognised character `$`
    /// -> input.txt:3
    ///    |
    ///  3 | a$b
    ///    |  ^
    /// ```
    pub fn render(&self, file: &Path) -> String {
        let line_str = self.line.to_string();
        let padding = line_str.len() + 2;

        let (trimmed, removed) = strip_indent(&self.text);
        let arrows = self.column - removed;

        let mut out = String::new();
        out.push_str(&format!(
            "Warning: unrecognised character `{}`\n",
            self.lexeme
        ));
        out.push_str(&format!("-> {}:{}\n", file.display(), self.line));
        out.push_str(&format!("{:>padding$}\n", "|"));
        out.push_str(&format!("{} | {}\n", line_str, trimmed.trim_end()));
        out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
        out
    }
}

fn strip_indent(text: &str) -> (&str, usize) {
    let spaces = text.chars().take_while(|c| *c == ' ').count();
    (&text[spaces..], spaces)
}
