use crate::error::Error;
use crate::token::{Line, TokenKind};
use std::fmt;

// ----------------------------------------------------------------------------
// Record kind

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    DefAddress, // SYM = $ADDR
    DefLiteral, // SYM = %LIT
    DefLabel,   // SYM :
    InsAddress, // MNEM $ADDR
    InsLiteral, // MNEM %LIT
    InsLabel,   // MNEM SYM
    InsNone,    // MNEM
}

impl RecordKind {
    pub fn is_instruction(&self) -> bool {
        !matches!(
            self,
            RecordKind::DefAddress | RecordKind::DefLiteral | RecordKind::DefLabel
        )
    }
}

/// Exact match of a line shape. Anything else is not a record.
pub fn classify(kinds: &[TokenKind]) -> Option<RecordKind> {
    use TokenKind::*;
    match kinds {
        [Symbol, Equal, Dollar, Address, LineEnd] => Some(RecordKind::DefAddress),
        [Symbol, Equal, Percent, Literal, LineEnd] => Some(RecordKind::DefLiteral),
        [Symbol, Colon, LineEnd] => Some(RecordKind::DefLabel),
        [Symbol, Dollar, Address, LineEnd] => Some(RecordKind::InsAddress),
        [Symbol, Percent, Literal, LineEnd] => Some(RecordKind::InsLiteral),
        [Symbol, Symbol, LineEnd] => Some(RecordKind::InsLabel),
        [Symbol, LineEnd] => Some(RecordKind::InsNone),
        _ => None,
    }
}

// ----------------------------------------------------------------------------
// Record

/// A classified source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub kind: RecordKind,
    pub line: Line,
}

impl Record {
    pub fn from_line(line: Line) -> Result<Record, Error> {
        match classify(&line.kinds()) {
            Some(kind) => Ok(Record { kind, line }),
            None => Err(Error::InvalidTokenOrder(line.line_no)),
        }
    }

    pub fn line_no(&self) -> usize {
        self.line.line_no
    }

    /// Defined symbol for `Def*`, mnemonic for `Ins*`.
    pub fn name(&self) -> &str {
        &self.line.tokens[0].text
    }

    /// Hex digits of a definition or of an inline operand, or the symbol
    /// referenced by an `InsLabel`.
    pub fn operand(&self) -> Option<&str> {
        let idx = match self.kind {
            RecordKind::DefAddress | RecordKind::DefLiteral => 3,
            RecordKind::InsAddress | RecordKind::InsLiteral => 2,
            RecordKind::InsLabel => 1,
            RecordKind::DefLabel | RecordKind::InsNone => return None,
        };
        self.line.tokens.get(idx).map(|t| t.text.as_str())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operand = self.operand().unwrap_or("");
        match self.kind {
            RecordKind::DefAddress => write!(f, "{} = ${}", self.name(), operand),
            RecordKind::DefLiteral => write!(f, "{} = %{}", self.name(), operand),
            RecordKind::DefLabel => write!(f, "{}:", self.name()),
            RecordKind::InsAddress => write!(f, "{} ${}", self.name(), operand),
            RecordKind::InsLiteral => write!(f, "{} %{}", self.name(), operand),
            RecordKind::InsLabel => write!(f, "{} {}", self.name(), operand),
            RecordKind::InsNone => write!(f, "{}", self.name()),
        }
    }
}

/// Classify every line, stopping at the first malformed one.
pub fn classify_all(lines: Vec<Line>) -> Result<Vec<Record>, Error> {
    lines.into_iter().map(Record::from_line).collect()
}
