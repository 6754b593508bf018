use arch::op::OperandKind;
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueKind {
    Address,
    Literal,
}

impl ValueKind {
    pub fn operand(&self) -> OperandKind {
        match self {
            ValueKind::Address => OperandKind::Address,
            ValueKind::Literal => OperandKind::Literal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ident {
    pub kind: ValueKind,
    pub value: u16,
    /// Line of the definition
    pub line: usize,
}

impl Ident {
    /// Operand bytes, most significant first for addresses.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.kind {
            ValueKind::Address => vec![(self.value >> 8) as u8, (self.value & 0xFF) as u8],
            ValueKind::Literal => vec![(self.value & 0xFF) as u8],
        }
    }
}

/// Symbol table in definition order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Idents(IndexMap<String, Ident>);

impl Idents {
    pub fn new() -> Self {
        Idents(IndexMap::new())
    }

    /// Names are unique; a second definition is an error, never an overwrite.
    pub fn define(&mut self, name: &str, ident: Ident) -> Result<(), Error> {
        if self.0.contains_key(name) {
            return Err(Error::MultiplyDefinedLabel(ident.line, name.to_string()));
        }
        self.0.insert(name.to_string(), ident);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Ident> {
        self.0.get(name)
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.0.get(name).map(|ident| ident.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Ident)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
