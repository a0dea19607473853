//! Class 2: integer arithmetic and logic.

use lazy_static::lazy_static;

use super::{Class, Format};
use crate::instructions::WORD_SIZE;
use crate::opcode::{InstrDesc, Kinds, OpcodeTable};

pub const FORMAT: Format = Format {
    class: Class::Alu,
    tag: 0b0010,
    tag_bits: 4,
    encoding_width: WORD_SIZE,
    memory_size: WORD_SIZE,
    descs: DESCS,
};

const DESCS: &[InstrDesc] = &[
    InstrDesc { mnemonic: "add", operands: &[Kinds::RIM, Kinds::RM] },
    InstrDesc { mnemonic: "sub", operands: &[Kinds::RIM, Kinds::RM] },
    InstrDesc { mnemonic: "adc", operands: &[Kinds::RIM, Kinds::RM] },
    InstrDesc { mnemonic: "sbb", operands: &[Kinds::RIM, Kinds::RM] },
    InstrDesc { mnemonic: "cmp", operands: &[Kinds::RIM, Kinds::RM] },
    InstrDesc { mnemonic: "test", operands: &[Kinds::RIM, Kinds::RM] },
    InstrDesc { mnemonic: "and", operands: &[Kinds::RIM, Kinds::RM] },
    InstrDesc { mnemonic: "or", operands: &[Kinds::RIM, Kinds::RM] },
    InstrDesc { mnemonic: "xor", operands: &[Kinds::RIM, Kinds::RM] },
    InstrDesc { mnemonic: "neg", operands: &[Kinds::RM] },
    InstrDesc { mnemonic: "not", operands: &[Kinds::RM] },
];

lazy_static! {
    pub static ref TABLE: OpcodeTable = super::build_table(&FORMAT);
}
