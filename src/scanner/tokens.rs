use std::fmt::Display;

use crate::Span;

/// The closed set of lexical categories. Rule priority lives in the
/// scanner's rule table; the order of variants here carries no meaning.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Real,
    Int,
    List,

    Gte,    // >=
    Lte,    // <=
    Eq,     // ==
    Neq,    // !=
    IntDiv, // //

    Gt,
    Lt,

    Plus,
    Minus,
    Mul,
    Div,
    Pow,

    Assign, // =

    LParen,
    RParen,
    LBracket,
    RBracket,

    Var,

    Whitespace,
    Err,
}

impl TokenKind {
    /// Canonical category label as written to the token stream. Operator
    /// kinds emit their spelling, `List` emits lowercase `list`, the rest
    /// emit their rule name.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Real => "REAL",
            TokenKind::Int => "INT",
            TokenKind::List => "list",
            TokenKind::Gte => ">=",
            TokenKind::Lte => "<=",
            TokenKind::Eq => "==",
            TokenKind::Neq => "!=",
            TokenKind::IntDiv => "//",
            TokenKind::Gt => ">",
            TokenKind::Lt => "<",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::Pow => "POW",
            TokenKind::Assign => "=",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Var => "VAR",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Err => "ERR",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One recognized lexeme. The span is the byte range of the lexeme within
/// its source line; tokens never span lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.lexeme, self.kind.label())
    }
}
