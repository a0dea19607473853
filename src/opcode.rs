//! Per-format opcode tables.
//!
//! Every format lists its instructions once, in opcode order. The table built from that
//! list answers both `mnemonic -> opcode` (encoding) and `opcode -> mnemonic`
//! (disassembly), so the two directions cannot drift apart.

use bimap::BiMap;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
/// Operand kinds accepted by one operand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Kinds: u8 {
const REG = 1 << 0; // register
const IMM = 1 << 1; // immediate
const MEM = 1 << 2; // memory reference
}
}

impl Kinds {
    pub const RI: Kinds = Kinds::REG.union(Kinds::IMM);
    pub const RM: Kinds = Kinds::REG.union(Kinds::MEM);
    pub const RIM: Kinds = Kinds::all();
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    /// Accepted kinds per operand, in written (source, destination) order.
    pub operands: &'static [Kinds],
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),
    #[error("invalid opcode {0:#x}")]
    InvalidOpcode(u8),
    #[error("duplicate mnemonic `{0}`")]
    Duplicate(&'static str),
    #[error("{len} opcodes do not fit in a {bits}-bit opcode field")]
    Capacity { len: usize, bits: u32 },
}

/// Bijection between the mnemonics of one format and their opcodes.
///
/// The opcode of the i-th descriptor is `i`.
#[derive(Debug)]
pub struct OpcodeTable {
    descs: &'static [InstrDesc],
    opcodes: BiMap<&'static str, u8>,
}

impl OpcodeTable {
    pub fn new(descs: &'static [InstrDesc], opcode_bits: u32) -> Result<Self, TableError> {
        if descs.len() > 1usize << opcode_bits {
            return Err(TableError::Capacity {
                len: descs.len(),
                bits: opcode_bits,
            });
        }
        let mut opcodes = BiMap::new();
        for (opcode, desc) in descs.iter().enumerate() {
            opcodes
                .insert_no_overwrite(desc.mnemonic, opcode as u8)
                .map_err(|(mnemonic, _)| TableError::Duplicate(mnemonic))?;
        }
        Ok(Self { descs, opcodes })
    }

    pub fn len(&self) -> usize {
        self.descs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descs.is_empty()
    }

    pub fn contains(&self, mnemonic: &str) -> bool {
        self.opcodes.contains_left(mnemonic)
    }

    pub fn opcode(&self, mnemonic: &str) -> Result<u8, TableError> {
        self.opcodes
            .get_by_left(mnemonic)
            .copied()
            .ok_or_else(|| TableError::UnknownMnemonic(mnemonic.to_string()))
    }

    pub fn mnemonic(&self, opcode: u8) -> Result<&'static str, TableError> {
        self.opcodes
            .get_by_right(&opcode)
            .copied()
            .ok_or(TableError::InvalidOpcode(opcode))
    }

    pub fn desc(&self, opcode: u8) -> Result<&'static InstrDesc, TableError> {
        self.descs
            .get(opcode as usize)
            .ok_or(TableError::InvalidOpcode(opcode))
    }

    /// Descriptors in opcode order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &'static InstrDesc)> {
        self.descs
            .iter()
            .enumerate()
            .map(|(opcode, desc)| (opcode as u8, desc))
    }
}
