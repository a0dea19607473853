//! Class 6: conditional jumps.
//!
//! The only operand is the absolute target address, carried as an immediate. Condition
//! order follows the status flags: carry, parity, zero, overflow, sign, then negations.

use lazy_static::lazy_static;

use super::{Class, Format};
use crate::instructions::WORD_SIZE;
use crate::opcode::{InstrDesc, Kinds, OpcodeTable};

pub const FORMAT: Format = Format {
    class: Class::Branch,
    tag: 0b1001,
    tag_bits: 4,
    encoding_width: WORD_SIZE,
    memory_size: WORD_SIZE,
    descs: DESCS,
};

const DESCS: &[InstrDesc] = &[
    InstrDesc { mnemonic: "jc", operands: &[Kinds::IMM] },
    InstrDesc { mnemonic: "jp", operands: &[Kinds::IMM] },
    InstrDesc { mnemonic: "jz", operands: &[Kinds::IMM] },
    InstrDesc { mnemonic: "jo", operands: &[Kinds::IMM] },
    InstrDesc { mnemonic: "js", operands: &[Kinds::IMM] },
    InstrDesc { mnemonic: "jnc", operands: &[Kinds::IMM] },
    InstrDesc { mnemonic: "jnp", operands: &[Kinds::IMM] },
    InstrDesc { mnemonic: "jnz", operands: &[Kinds::IMM] },
    InstrDesc { mnemonic: "jno", operands: &[Kinds::IMM] },
    InstrDesc { mnemonic: "jns", operands: &[Kinds::IMM] },
];

lazy_static! {
    pub static ref TABLE: OpcodeTable = super::build_table(&FORMAT);
}
