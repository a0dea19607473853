//! Class 7: port I/O. Ports are an immediate or a register.

use lazy_static::lazy_static;

use super::{Class, Format};
use crate::instructions::WORD_SIZE;
use crate::opcode::{InstrDesc, Kinds, OpcodeTable};

pub const FORMAT: Format = Format {
    class: Class::Io,
    tag: 0b1010,
    tag_bits: 4,
    encoding_width: WORD_SIZE,
    memory_size: WORD_SIZE,
    descs: DESCS,
};

const DESCS: &[InstrDesc] = &[
    InstrDesc { mnemonic: "in", operands: &[Kinds::RI, Kinds::REG] },
    InstrDesc { mnemonic: "out", operands: &[Kinds::REG, Kinds::RI] },
    InstrDesc { mnemonic: "ins", operands: &[] },
    InstrDesc { mnemonic: "outs", operands: &[] },
];

lazy_static! {
    pub static ref TABLE: OpcodeTable = super::build_table(&FORMAT);
}
