use color_print::cformat;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

// ----------------------------------------------------------------------------
// Operand

/// Kind of argument an operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum OperandKind {
    Address,
    Literal,
    None,
}

impl OperandKind {
    /// Number of operand bytes following the opcode.
    pub fn width(&self) -> usize {
        match self {
            OperandKind::Address => 2,
            OperandKind::Literal => 1,
            OperandKind::None => 0,
        }
    }
}

// ----------------------------------------------------------------------------
// Operation

/// Operations of the 8-bit machine. The discriminant is the opcode byte.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoPrimitive,
    TryFromPrimitive,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum Op {
    HLT = 0x00,
    LDA = 0x10,
    LDI = 0x11,
    ADD = 0x20,
    ADI = 0x21,
    SUB = 0x25,
    SUI = 0x26,
    STA = 0x40,
    JMP = 0x50,
    JC = 0x51,
    JZ = 0x52,
    PRT = 0xE0,
    NOP = 0xFF,
}

static OP_STR: Lazy<HashMap<&'static str, Op>> =
    Lazy::new(|| Op::iter().map(|op| (op.mnemonic(), op)).collect());

impl Op {
    /// Look up a mnemonic. Mnemonics are case-sensitive.
    pub fn parse(s: &str) -> Option<Op> {
        OP_STR.get(s).copied()
    }

    pub fn decode(byte: u8) -> Option<Op> {
        Op::try_from_primitive(byte).ok()
    }

    pub fn mnemonic(&self) -> &'static str {
        (*self).into()
    }

    pub fn opcode(&self) -> u8 {
        (*self).into()
    }

    pub fn operand(&self) -> OperandKind {
        use Op::*;
        match self {
            LDA | ADD | SUB | STA | JMP | JC | JZ => OperandKind::Address,
            LDI | ADI | SUI => OperandKind::Literal,
            HLT | PRT | NOP => OperandKind::None,
        }
    }

    /// Instruction size in bytes, opcode included.
    pub fn width(&self) -> usize {
        1 + self.operand().width()
    }

    pub fn cformat(&self) -> String {
        cformat!("<r>{:<4}</>", self.mnemonic())
    }
}

#[test]
fn table() {
    let expect = [
        ("HLT", 0x00, 1, OperandKind::None),
        ("LDA", 0x10, 3, OperandKind::Address),
        ("LDI", 0x11, 2, OperandKind::Literal),
        ("ADD", 0x20, 3, OperandKind::Address),
        ("ADI", 0x21, 2, OperandKind::Literal),
        ("SUB", 0x25, 3, OperandKind::Address),
        ("SUI", 0x26, 2, OperandKind::Literal),
        ("STA", 0x40, 3, OperandKind::Address),
        ("JMP", 0x50, 3, OperandKind::Address),
        ("JC", 0x51, 3, OperandKind::Address),
        ("JZ", 0x52, 3, OperandKind::Address),
        ("PRT", 0xE0, 1, OperandKind::None),
        ("NOP", 0xFF, 1, OperandKind::None),
    ];
    assert_eq!(Op::iter().count(), expect.len());
    for (name, opcode, width, operand) in expect {
        let op = Op::parse(name).unwrap();
        assert_eq!(op.mnemonic(), name);
        assert_eq!(op.opcode(), opcode);
        assert_eq!(op.width(), width);
        assert_eq!(op.operand(), operand);
        assert_eq!(Op::decode(opcode), Some(op));
    }
}

#[test]
fn parse() {
    assert_eq!(Op::parse("JZ"), Some(Op::JZ));
    assert_eq!(Op::parse("lda"), None);
    assert_eq!(Op::parse("MOV"), None);
    assert_eq!(Op::decode(0x30), None);
}
