//! Class 3: shifts and rotates.

use lazy_static::lazy_static;

use super::{Class, Format};
use crate::instructions::WORD_SIZE;
use crate::opcode::{InstrDesc, Kinds, OpcodeTable};

pub const FORMAT: Format = Format {
    class: Class::Shift,
    tag: 0b0011,
    tag_bits: 4,
    encoding_width: WORD_SIZE,
    memory_size: WORD_SIZE,
    descs: DESCS,
};

// Source operand is the shift count.
const DESCS: &[InstrDesc] = &[
    InstrDesc { mnemonic: "sal", operands: &[Kinds::RI, Kinds::RM] },
    InstrDesc { mnemonic: "sar", operands: &[Kinds::RI, Kinds::RM] },
    InstrDesc { mnemonic: "shl", operands: &[Kinds::RI, Kinds::RM] },
    InstrDesc { mnemonic: "shr", operands: &[Kinds::RI, Kinds::RM] },
    InstrDesc { mnemonic: "rcl", operands: &[Kinds::RI, Kinds::RM] },
    InstrDesc { mnemonic: "rcr", operands: &[Kinds::RI, Kinds::RM] },
    InstrDesc { mnemonic: "rol", operands: &[Kinds::RI, Kinds::RM] },
    InstrDesc { mnemonic: "ror", operands: &[Kinds::RI, Kinds::RM] },
];

lazy_static! {
    pub static ref TABLE: OpcodeTable = super::build_table(&FORMAT);
}
