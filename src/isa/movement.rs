//! Class 1: data movement.

use lazy_static::lazy_static;

use super::{Class, Format};
use crate::instructions::WORD_SIZE;
use crate::opcode::{InstrDesc, Kinds, OpcodeTable};

pub const FORMAT: Format = Format {
    class: Class::Move,
    tag: 0b0001,
    tag_bits: 4,
    encoding_width: WORD_SIZE,
    memory_size: WORD_SIZE,
    descs: DESCS,
};

const DESCS: &[InstrDesc] = &[
    InstrDesc { mnemonic: "mov", operands: &[Kinds::RIM, Kinds::RM] },
    InstrDesc { mnemonic: "lea", operands: &[Kinds::MEM, Kinds::REG] },
    InstrDesc { mnemonic: "push", operands: &[Kinds::RIM] },
    InstrDesc { mnemonic: "pop", operands: &[Kinds::RM] },
    InstrDesc { mnemonic: "pushf", operands: &[] },
    InstrDesc { mnemonic: "popf", operands: &[] },
    // string moves work on the implicit %rsi/%rdi pair
    InstrDesc { mnemonic: "movs", operands: &[] },
    InstrDesc { mnemonic: "stos", operands: &[] },
];

lazy_static! {
    pub static ref TABLE: OpcodeTable = super::build_table(&FORMAT);
}
