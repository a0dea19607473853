//! Class 5: unconditional transfers of control.

use lazy_static::lazy_static;

use super::{Class, Format};
use crate::instructions::WORD_SIZE;
use crate::opcode::{InstrDesc, Kinds, OpcodeTable};

pub const FORMAT: Format = Format {
    class: Class::Control,
    tag: 0b1000,
    tag_bits: 4,
    encoding_width: WORD_SIZE,
    memory_size: WORD_SIZE,
    descs: DESCS,
};

const DESCS: &[InstrDesc] = &[
    InstrDesc { mnemonic: "jmp", operands: &[Kinds::RIM] },
    InstrDesc { mnemonic: "call", operands: &[Kinds::RIM] },
    InstrDesc { mnemonic: "ret", operands: &[] },
    InstrDesc { mnemonic: "iret", operands: &[] },
];

lazy_static! {
    pub static ref TABLE: OpcodeTable = super::build_table(&FORMAT);
}
