use arch::op::{Op, OperandKind};

use crate::collect::{location, parse_hex};
use crate::error::Error;
use crate::ident::Idents;
use crate::record::{Record, RecordKind};

/// Encoded instruction of one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub line_no: usize,
    pub pc: u16,
    pub op: Op,
    pub bytes: Vec<u8>,
}

/// Second pass: encode every instruction against the frozen symbol table.
/// Definitions emit nothing.
pub fn generate(records: &[Record], idents: &Idents) -> Result<Vec<Chunk>, Error> {
    let mut chunks = vec![];
    let mut counter: u32 = 0;

    for record in records.iter().filter(|r| r.kind.is_instruction()) {
        let line = record.line_no();
        let op = Op::parse(record.name())
            .ok_or_else(|| Error::UnrecognizedOperation(line, record.name().to_string()))?;
        let pc = location(counter, line)?;

        let mut bytes = vec![op.opcode()];
        match record.kind {
            RecordKind::InsNone => {
                expect(op, OperandKind::None, line)?;
            }
            RecordKind::InsAddress => {
                expect(op, OperandKind::Address, line)?;
                let value = parse_hex(record.operand(), line)?;
                bytes.extend(value.to_be_bytes());
            }
            RecordKind::InsLiteral => {
                expect(op, OperandKind::Literal, line)?;
                let value = parse_hex(record.operand(), line)?;
                bytes.push((value & 0xFF) as u8);
            }
            RecordKind::InsLabel => {
                let name = record.operand().unwrap_or("");
                let ident = idents.get(name).ok_or_else(|| {
                    Error::InvalidOperand(line, format!("undefined symbol `{}`", name))
                })?;
                expect(op, ident.kind.operand(), line)?;
                bytes.extend(ident.to_bytes());
            }
            RecordKind::DefAddress | RecordKind::DefLiteral | RecordKind::DefLabel => continue,
        }
        debug_assert_eq!(bytes.len(), op.width());

        counter += op.width() as u32;
        chunks.push(Chunk {
            line_no: line,
            pc,
            op,
            bytes,
        });
    }

    Ok(chunks)
}

/// Flat object: chunks back to back in source order.
pub fn link(chunks: &[Chunk]) -> Vec<u8> {
    chunks.iter().flat_map(|c| c.bytes.iter().copied()).collect()
}

fn expect(op: Op, given: OperandKind, line: usize) -> Result<(), Error> {
    if op.operand() == given {
        Ok(())
    } else {
        Err(Error::InvalidOperand(
            line,
            format!(
                "`{}` takes {} operand, given {}",
                op.mnemonic(),
                op.operand(),
                given
            ),
        ))
    }
}
