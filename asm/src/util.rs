use crate::codegen::Chunk;
use crate::error::Error;
use crate::ident::{Idents, ValueKind};
use crate::record::{Record, RecordKind};
use crate::token::Line;
use color_print::cformat;

pub fn print_tokens(lines: &[Line]) {
    for line in lines {
        let tokens: Vec<String> = line.tokens.iter().map(|t| t.to_string()).collect();
        println!("{:>4}: {}", line.line_no, tokens.join(" "));
    }
}

/// Listing: location, bytes and source of every record.
pub fn print_dump(path: &str, records: &[Record], idents: &Idents, chunks: &[Chunk]) {
    println!(
        "{}+------[{}]{}",
        "-".repeat(19),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    );

    let mut chunks = chunks.iter();
    for record in records {
        let line_no = record.line_no();
        let body = match record.kind {
            RecordKind::DefLabel => {
                let value = idents.get_val(record.name()).unwrap_or_default();
                let label = cformat!("<g>{}:</> 0x{:04X}", record.name(), value);
                format!("{:19}| {:>4}: {}", "", line_no, label)
            }
            RecordKind::DefAddress => {
                let label = cformat!("<c>{} = ${}</>", record.name(), operand(record));
                format!("{:19}| {:>4}: {}", "", line_no, label)
            }
            RecordKind::DefLiteral => {
                let label = cformat!("<y>{} = %{}</>", record.name(), operand(record));
                format!("{:19}| {:>4}: {}", "", line_no, label)
            }
            _ => match chunks.next() {
                Some(chunk) => {
                    let bin: Vec<String> = chunk.bytes.iter().map(|b| format!("{:02X}", b)).collect();
                    format!(
                        "[{:04X}] {:<11} | {:>4}:   {} {}",
                        chunk.pc,
                        bin.join(" "),
                        line_no,
                        chunk.op.cformat(),
                        operand_cfmt(record, idents)
                    )
                }
                None => format!("[????] {} | {:>4}:   {}", cformat!("<r,s>!! !! !!</> "), line_no, record),
            },
        };
        println!("{}", body);
    }
    println!("-------------------+-----------------------------------------------------");
}

fn operand(record: &Record) -> &str {
    record.operand().unwrap_or("")
}

fn operand_cfmt(record: &Record, idents: &Idents) -> String {
    match record.kind {
        RecordKind::InsAddress => cformat!("<y>${}</>", operand(record)),
        RecordKind::InsLiteral => cformat!("<y>%{}</>", operand(record)),
        RecordKind::InsLabel => {
            let name = operand(record);
            match idents.get(name) {
                Some(ident) => match ident.kind {
                    ValueKind::Address => cformat!("<g>0x{:04X}({})</>", ident.value, name),
                    ValueKind::Literal => cformat!("<g>0x{:02X}({})</>", ident.value, name),
                },
                None => cformat!("<r,u>{}</>", name),
            }
        }
        _ => String::new(),
    }
}

/// Symbol table as YAML, in definition order.
pub fn symbol_map(idents: &Idents) -> Result<String, Error> {
    Ok(serde_yaml::to_string(idents)?)
}
