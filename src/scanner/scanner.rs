use lazy_static::lazy_static;
use regex::Regex;

use crate::Span;

use super::tokens::{Token, TokenKind};

pub struct Rule {
    kind: TokenKind,
    regex: Regex,
}

impl Rule {
    fn new(kind: TokenKind, pattern: &str) -> Rule {
        Rule {
            kind,
            regex: Regex::new(pattern).unwrap(),
        }
    }
}

lazy_static! {
    /// Lexical rules in priority order. The order is part of the language:
    /// `Real` before `Int`, `List` before `Var`, and every two-character
    /// operator before its one-character prefix.
    static ref RULES: Vec<Rule> = vec![
        Rule::new(TokenKind::Real, r"\d+\.\d+([eE][+-]?\d+)?|\d+[eE][+-]?\d+"),
        Rule::new(TokenKind::Int, r"\d+"),
        Rule::new(TokenKind::List, "list"),
        Rule::new(TokenKind::Gte, ">="),
        Rule::new(TokenKind::Lte, "<="),
        Rule::new(TokenKind::Eq, "=="),
        Rule::new(TokenKind::Neq, "!="),
        Rule::new(TokenKind::IntDiv, "//"),
        Rule::new(TokenKind::Gt, ">"),
        Rule::new(TokenKind::Lt, "<"),
        Rule::new(TokenKind::Plus, r"\+"),
        Rule::new(TokenKind::Minus, "-"),
        Rule::new(TokenKind::Mul, r"\*"),
        Rule::new(TokenKind::Div, "/"),
        Rule::new(TokenKind::Pow, r"\^"),
        Rule::new(TokenKind::Assign, "="),
        Rule::new(TokenKind::LParen, r"\("),
        Rule::new(TokenKind::RParen, r"\)"),
        Rule::new(TokenKind::LBracket, r"\["),
        Rule::new(TokenKind::RBracket, r"\]"),
        Rule::new(TokenKind::Var, "[a-zA-Z][a-zA-Z0-9_]*"),
        Rule::new(TokenKind::Whitespace, "[ \t]+"),
        Rule::new(TokenKind::Err, r"[^\s]"),
    ];
}

/// Turns one line of text into tokens. Stateless between lines; the rule
/// table it borrows is built once for the whole process.
pub struct Scanner {
    rules: &'static [Rule],
}

impl Scanner {
    pub fn new() -> Scanner {
        Scanner { rules: &RULES }
    }

    /// Tokenize a single line. Scanning never fails: characters no other
    /// rule recognises come back as `Err` tokens, one per character, and
    /// whitespace is consumed without being emitted.
    pub fn scan_line(&self, line: &str) -> Vec<Token> {
        let mut tokens = vec![];
        let mut pos = 0;

        while pos < line.len() {
            let rest = &line[pos..];
            let mut matched = false;

            for rule in self.rules {
                let hit = match rule.regex.find(rest) {
                    Some(hit) if hit.start() == 0 => hit,
                    _ => continue,
                };

                if rule.kind != TokenKind::Whitespace {
                    tokens.push(Token {
                        kind: rule.kind,
                        lexeme: hit.as_str().to_string(),
                        span: Span {
                            start: pos,
                            end: pos + hit.end(),
                        },
                    });
                }

                pos += hit.end();
                matched = true;
                break;
            }

            if !matched {
                // Whitespace outside space/tab (form feed and friends) slips
                // past both the Whitespace and Err rules; skip one character
                // and keep scanning.
                pos += rest.chars().next().map_or(1, |c| c.len_utf8());
            }
        }

        tokens
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner::new()
    }
}

/// Convenience wrapper over [`Scanner::scan_line`].
pub fn tokenize_line(line: &str) -> Vec<Token> {
    Scanner::new().scan_line(line)
}

/// Output-file form of one token stream: `lexeme/category` joined by
/// single spaces. An empty stream formats as an empty string.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
