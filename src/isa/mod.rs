//! Instruction formats (classes) of the z64 ISA.
//!
//! The leading byte of every instruction word is `tag | opcode`. Tags are prefix-free,
//! so at most one format claims any leading byte:
//!
//! ```text
//! 0000 oooo  system      1000 oooo  control
//! 0001 oooo  move        1001 oooo  branch
//! 0010 oooo  alu         1010 oooo  io
//! 0011 oooo  shift       1011 ....  (unassigned)
//! 01oo oooo  flag        11.. ....  (unassigned)
//! ```

pub mod alu;
pub mod branch;
pub mod control;
pub mod flags;
pub mod io;
pub mod movement;
pub mod shift;
pub mod system;

use serde::{Deserialize, Serialize};

use crate::opcode::{InstrDesc, OpcodeTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Class {
    System,
    Move,
    Alu,
    Shift,
    Flag,
    Control,
    Branch,
    Io,
}

/// Binary layout of one instruction class.
#[derive(Debug, Clone, Copy)]
pub struct Format {
    pub class: Class,
    /// Tag value, right-aligned.
    pub tag: u8,
    pub tag_bits: u32,
    /// Leading bytes that carry information.
    pub encoding_width: usize,
    /// Bytes occupied in the program image.
    pub memory_size: usize,
    pub descs: &'static [InstrDesc],
}

impl Format {
    pub const fn opcode_bits(&self) -> u32 {
        8 - self.tag_bits
    }

    pub const fn tag_mask(&self) -> u8 {
        0xFF << self.opcode_bits()
    }

    pub const fn tag_pattern(&self) -> u8 {
        self.tag << self.opcode_bits()
    }

    pub const fn matches(&self, byte: u8) -> bool {
        byte & self.tag_mask() == self.tag_pattern()
    }

    pub const fn opcode_of(&self, byte: u8) -> u8 {
        byte & !self.tag_mask()
    }

    pub const fn leading_byte(&self, opcode: u8) -> u8 {
        self.tag_pattern() | opcode
    }

    /// Mnemonic of an opcode already known to be in range.
    pub(crate) fn mnemonic(&self, opcode: u8) -> &'static str {
        self.descs[opcode as usize].mnemonic
    }
}

fn build_table(format: &Format) -> OpcodeTable {
    match OpcodeTable::new(format.descs, format.opcode_bits()) {
        Ok(table) => table,
        Err(e) => panic!("malformed {:?} opcode table: {e}", format.class),
    }
}

impl Class {
    pub const ALL: [Class; 8] = [
        Class::System,
        Class::Move,
        Class::Alu,
        Class::Shift,
        Class::Flag,
        Class::Control,
        Class::Branch,
        Class::Io,
    ];

    pub fn format(self) -> &'static Format {
        match self {
            Class::System => &system::FORMAT,
            Class::Move => &movement::FORMAT,
            Class::Alu => &alu::FORMAT,
            Class::Shift => &shift::FORMAT,
            Class::Flag => &flags::FORMAT,
            Class::Control => &control::FORMAT,
            Class::Branch => &branch::FORMAT,
            Class::Io => &io::FORMAT,
        }
    }

    pub fn table(self) -> &'static OpcodeTable {
        match self {
            Class::System => &*system::TABLE,
            Class::Move => &*movement::TABLE,
            Class::Alu => &*alu::TABLE,
            Class::Shift => &*shift::TABLE,
            Class::Flag => &*flags::TABLE,
            Class::Control => &*control::TABLE,
            Class::Branch => &*branch::TABLE,
            Class::Io => &*io::TABLE,
        }
    }

    /// Class whose tag pattern matches the leading byte of an encoding.
    pub fn from_leading_byte(byte: u8) -> Option<Class> {
        Self::ALL.into_iter().find(|c| c.format().matches(byte))
    }

    /// Class whose opcode table contains `mnemonic`.
    pub fn of_mnemonic(mnemonic: &str) -> Option<Class> {
        Self::ALL.into_iter().find(|c| c.table().contains(mnemonic))
    }
}
