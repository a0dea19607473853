//! Class 4: status-flag manipulation.
//!
//! ```text
//! byte 0: 01oo oooo   opcode 0..=13
//! byte 1..8:          reserved, zero
//! ```
//!
//! Opcodes 0..7 clear a flag, 7..14 set the same flags in the same order.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::{Class, Format};
use crate::decoder::DisassembleError;
use crate::encoder::EncodeError;
use crate::instructions::WORD_SIZE;
use crate::opcode::{InstrDesc, OpcodeTable};

pub const FORMAT: Format = Format {
    class: Class::Flag,
    tag: 0b01,
    tag_bits: 2,
    encoding_width: 1,
    memory_size: WORD_SIZE,
    descs: DESCS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    Carry,
    /// Parity (also used as the protection flag).
    Parity,
    Zero,
    Sign,
    Interrupt,
    Direction,
    Overflow,
}

/// Flags in the order their `cl*` and `st*` mnemonics appear in the table.
pub const FLAGS: [Flag; 7] = [
    Flag::Carry,
    Flag::Parity,
    Flag::Zero,
    Flag::Sign,
    Flag::Interrupt,
    Flag::Direction,
    Flag::Overflow,
];

const DESCS: &[InstrDesc] = &[
    InstrDesc { mnemonic: "clc", operands: &[] },
    InstrDesc { mnemonic: "clp", operands: &[] },
    InstrDesc { mnemonic: "clz", operands: &[] },
    InstrDesc { mnemonic: "cls", operands: &[] },
    InstrDesc { mnemonic: "cli", operands: &[] },
    InstrDesc { mnemonic: "cld", operands: &[] },
    InstrDesc { mnemonic: "clo", operands: &[] },
    InstrDesc { mnemonic: "stc", operands: &[] },
    InstrDesc { mnemonic: "stp", operands: &[] },
    InstrDesc { mnemonic: "stz", operands: &[] },
    InstrDesc { mnemonic: "sts", operands: &[] },
    InstrDesc { mnemonic: "sti", operands: &[] },
    InstrDesc { mnemonic: "std", operands: &[] },
    InstrDesc { mnemonic: "sto", operands: &[] },
];

lazy_static! {
    pub static ref TABLE: OpcodeTable = super::build_table(&FORMAT);
}

/// A clear-flag or set-flag instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlagInstr {
    opcode: u8,
    flag: Flag,
    val: bool,
    encoding: [u8; WORD_SIZE],
}

impl FlagInstr {
    pub fn new(mnemonic: &str) -> Result<Self, EncodeError> {
        let opcode = TABLE
            .opcode(mnemonic)
            .map_err(|_| EncodeError::UnknownInstruction(mnemonic.to_string()))?;
        Ok(Self::from_opcode(opcode))
    }

    /// Decodes the instruction in `encoding[0]`; the reserved bytes are not inspected.
    pub fn decode(encoding: &[u8]) -> Result<Self, DisassembleError> {
        opcode_of(encoding).map(Self::from_opcode)
    }

    fn from_opcode(opcode: u8) -> Self {
        let count = FLAGS.len() as u8;
        let mut encoding = [0u8; WORD_SIZE];
        encoding[0] = FORMAT.leading_byte(opcode);
        Self {
            opcode,
            flag: FLAGS[(opcode % count) as usize],
            val: opcode >= count,
            encoding,
        }
    }

    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    pub fn flag(&self) -> Flag {
        self.flag
    }

    /// Value written to the flag: `false` for `cl*`, `true` for `st*`.
    pub fn val(&self) -> bool {
        self.val
    }

    pub fn mnemonic(&self) -> &'static str {
        FORMAT.mnemonic(self.opcode)
    }

    pub fn encoding(&self) -> &[u8; WORD_SIZE] {
        &self.encoding
    }
}

/// Mnemonic of the flag instruction whose leading byte is `encoding[0]`.
pub fn disassemble(encoding: &[u8]) -> Result<&'static str, DisassembleError> {
    opcode_of(encoding).map(|opcode| FORMAT.mnemonic(opcode))
}

fn opcode_of(encoding: &[u8]) -> Result<u8, DisassembleError> {
    let &byte = encoding.first().ok_or(DisassembleError::Truncated {
        needed: 1,
        available: 0,
    })?;
    if !FORMAT.matches(byte) {
        return Err(DisassembleError::UnknownClass(byte));
    }
    let opcode = FORMAT.opcode_of(byte);
    TABLE
        .mnemonic(opcode)
        .map(|_| opcode)
        .map_err(|_| DisassembleError::InvalidOpcode {
            class: Class::Flag,
            byte,
        })
}
