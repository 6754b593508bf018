use arch::op::Op;

use crate::error::Error;
use crate::ident::{Ident, Idents, ValueKind};
use crate::record::{Record, RecordKind};

/// First pass: walk the records with a location counter and register every
/// label and variable. No code is emitted.
pub fn collect(records: &[Record]) -> Result<Idents, Error> {
    let mut idents = Idents::new();
    let mut counter: u32 = 0;

    for record in records {
        let line = record.line_no();
        match record.kind {
            RecordKind::DefAddress | RecordKind::DefLiteral => {
                let kind = match record.kind {
                    RecordKind::DefAddress => ValueKind::Address,
                    _ => ValueKind::Literal,
                };
                let value = parse_hex(record.operand(), line)?;
                idents.define(record.name(), Ident { kind, value, line })?;
            }
            RecordKind::DefLabel => {
                let value = location(counter, line)?;
                let kind = ValueKind::Address;
                idents.define(record.name(), Ident { kind, value, line })?;
            }
            _ => {
                let op = Op::parse(record.name())
                    .ok_or_else(|| Error::UnrecognizedOperation(line, record.name().to_string()))?;
                location(counter, line)?;
                counter += op.width() as u32;
            }
        }
    }

    Ok(idents)
}

/// Current location as a 16-bit address.
pub fn location(counter: u32, line: usize) -> Result<u16, Error> {
    u16::try_from(counter).map_err(|_| Error::LocationOverflow(line))
}

/// Digits were checked by the lexer; this only fails on a malformed record.
pub fn parse_hex(digits: Option<&str>, line: usize) -> Result<u16, Error> {
    let digits = digits.ok_or(Error::InvalidTokenOrder(line))?;
    u16::from_str_radix(digits, 16)
        .map_err(|_| Error::UnrecognizedNumber(line, digits.to_string()))
}
