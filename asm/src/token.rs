// token.rs

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Symbol,  // mnemonic or identifier
    Address, // 4 hex digits after '$'
    Literal, // 2 hex digits after '%'

    Percent, // '%'
    Dollar,  // '$'
    Equal,   // '='
    Colon,   // ':'
    Comma,   // ','
    LineEnd, // '\n'
}

impl TokenKind {
    /// Token kinds allowed to follow `self` on the same line.
    /// `LineEnd` doubles as the start-of-line state.
    pub fn follows(&self) -> &'static [TokenKind] {
        use TokenKind::*;
        match self {
            Symbol => &[Equal, Colon, Comma, Dollar, Percent, Symbol, LineEnd],
            Address | Literal => &[Comma, LineEnd],
            Equal => &[Dollar, Percent],
            Percent => &[Literal],
            Dollar => &[Address],
            Colon => &[LineEnd],
            Comma => &[Percent, Dollar, Symbol],
            LineEnd => &[Symbol, LineEnd],
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Symbol => "symbol",
            TokenKind::Address => "address",
            TokenKind::Literal => "literal",
            TokenKind::Percent => "`%`",
            TokenKind::Dollar => "`$`",
            TokenKind::Equal => "`=`",
            TokenKind::Colon => "`:`",
            TokenKind::Comma => "`,`",
            TokenKind::LineEnd => "end of line",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Symbol | TokenKind::Address | TokenKind::Literal => {
                write!(f, "{}({})", self.kind, self.text)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

/// Tokens of one source line, always terminated by `LineEnd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tokens: Vec<Token>,
    /// 1-based
    pub line_no: usize,
}

impl Line {
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}
