use sapasm::error::Error;
use sapasm::lexer::Lexer;
use sapasm::record::{classify, classify_all, Record, RecordKind, RecordKind::*};
use sapasm::token::TokenKind;

fn record(code: &str) -> Result<Record, Error> {
    let mut lines = Lexer::new(code).parse().unwrap();
    assert_eq!(lines.len(), 1);
    Record::from_line(lines.remove(0))
}

fn assert(code: &str, expect: RecordKind, operand: Option<&str>) {
    let record = record(code).unwrap();
    println!("{} -> {:?}", record, record.kind);
    assert_eq!(record.kind, expect);
    assert_eq!(record.operand(), operand);
}

macro_rules! case {
    ($name:ident, $code:expr, $expect:expr, $operand:expr) => {
        #[test]
        fn $name() {
            assert($code, $expect, $operand);
        }
    };
}

case!(def_address, "PORT = $00F0", DefAddress, Some("00F0"));
case!(def_literal, "TEN = %0A", DefLiteral, Some("0A"));
case!(def_label, "loop:", DefLabel, None);
case!(ins_address, "STA $0010", InsAddress, Some("0010"));
case!(ins_literal, "ADI %01", InsLiteral, Some("01"));
case!(ins_label, "JZ loop", InsLabel, Some("loop"));
case!(ins_none, "PRT", InsNone, None);

#[test]
fn name() {
    assert_eq!(record("PORT = $00F0").unwrap().name(), "PORT");
    assert_eq!(record("JZ loop").unwrap().name(), "JZ");
}

#[test]
fn display() {
    assert_eq!(record("PORT=$00F0").unwrap().to_string(), "PORT = $00F0");
    assert_eq!(record("  loop  :  ").unwrap().to_string(), "loop:");
    assert_eq!(record("LDI    %05").unwrap().to_string(), "LDI %05");
}

#[test]
fn exact_match_only() {
    use TokenKind::*;
    assert_eq!(classify(&[Symbol, LineEnd]), Some(InsNone));
    assert_eq!(classify(&[Symbol]), None);
    assert_eq!(classify(&[Symbol, Colon]), None);
    assert_eq!(classify(&[Symbol, Symbol, Symbol, LineEnd]), None);
    assert_eq!(classify(&[Symbol, Equal, Dollar, Address, Comma, LineEnd]), None);
    assert_eq!(classify(&[]), None);
}

#[test]
fn invalid_token_order() {
    assert!(matches!(record("JMP, START"), Err(Error::InvalidTokenOrder(1))));
    assert!(matches!(record("LDA A B"), Err(Error::InvalidTokenOrder(1))));
    assert!(matches!(record("LDA $0010, %01"), Err(Error::InvalidTokenOrder(1))));
}

#[test]
fn classify_all_stops_at_first_error() {
    let lines = Lexer::new("HLT\n\nA B C\nX Y Z\n").parse().unwrap();
    assert!(matches!(classify_all(lines), Err(Error::InvalidTokenOrder(3))));

    let lines = Lexer::new("A:\nJMP A\n").parse().unwrap();
    let records = classify_all(lines).unwrap();
    let kinds: Vec<RecordKind> = records.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![DefLabel, InsLabel]);
    assert!(!records[0].kind.is_instruction());
    assert!(records[1].kind.is_instruction());
}
