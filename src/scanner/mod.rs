//! Lexical analysis module for the tokenizer.
//!
//! This module contains the scanner that converts one line of source text
//! into a stream of tokens. It handles:
//!
//! - Tokenization using an ordered table of regex rules
//! - Recognition of numeric literals, the `list` keyword, identifiers,
//!   operators and delimiters
//! - Whitespace skipping and per-character error recovery

pub mod scanner;
pub mod tokens;
