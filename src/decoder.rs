use tracing::trace;

use crate::encoder::build_word;
use crate::instructions::{Instruction, OperandInstr, WORD_SIZE};
use crate::isa::flags::FlagInstr;
use crate::isa::Class;
use crate::operand::{self, Operand, SlotError};

/// Raw bytes that are not an instruction. Recoverable: a caller sweeping an image can
/// report the word and carry on with the next one.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DisassembleError {
    #[error("need {needed} bytes, only {available} available")]
    Truncated { needed: usize, available: usize },
    #[error("unrecognized instruction class in leading byte {0:#04x}")]
    UnknownClass(u8),
    #[error("unrecognized instruction type {byte:#04x} ({class:?} class)")]
    InvalidOpcode { class: Class, byte: u8 },
    #[error("malformed operand slots {kinds:#04x}: {source}")]
    MalformedOperands {
        kinds: u8,
        #[source]
        source: SlotError,
    },
    #[error("operands do not fit `{mnemonic}`")]
    OperandMismatch { mnemonic: &'static str },
}

pub trait Decoder {
    /// Decodes the instruction word at the start of `bytes`.
    fn decode(&self, bytes: &[u8]) -> Result<Instruction, DisassembleError>;
}

/// Decoder for every z64 instruction class.
#[derive(Debug, Default, Clone, Copy)]
pub struct Z64Decoder;

impl Z64Decoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for Z64Decoder {
    fn decode(&self, bytes: &[u8]) -> Result<Instruction, DisassembleError> {
        let word: &[u8; WORD_SIZE] = bytes
            .get(..WORD_SIZE)
            .and_then(|w| <&[u8; WORD_SIZE]>::try_from(w).ok())
            .ok_or(DisassembleError::Truncated {
                needed: WORD_SIZE,
                available: bytes.len(),
            })?;
        let class =
            Class::from_leading_byte(word[0]).ok_or(DisassembleError::UnknownClass(word[0]))?;
        trace!(byte = word[0], ?class, "dispatch");
        let insn = match class {
            Class::Flag => Instruction::Flag(FlagInstr::decode(word)?),
            Class::System => Instruction::System(decode_word(class, word)?),
            Class::Move => Instruction::Move(decode_word(class, word)?),
            Class::Alu => Instruction::Alu(decode_word(class, word)?),
            Class::Shift => Instruction::Shift(decode_word(class, word)?),
            Class::Control => Instruction::Control(decode_word(class, word)?),
            Class::Branch => Instruction::Branch(decode_word(class, word)?),
            Class::Io => Instruction::Io(decode_word(class, word)?),
        };
        Ok(insn)
    }
}

fn decode_word(class: Class, word: &[u8; WORD_SIZE]) -> Result<OperandInstr, DisassembleError> {
    let byte = word[0];
    let opcode = class.format().opcode_of(byte);
    let desc = class
        .table()
        .desc(opcode)
        .map_err(|_| DisassembleError::InvalidOpcode { class, byte })?;
    let slots = operand::read_slots(word).map_err(|source| DisassembleError::MalformedOperands {
        kinds: word[1],
        source,
    })?;
    let operands: Vec<Operand> = slots.iter().flatten().copied().collect();
    // Re-encoding checks the shape and drops whatever sat in reserved bits.
    build_word(class, opcode, &operands).map_err(|_| DisassembleError::OperandMismatch {
        mnemonic: desc.mnemonic,
    })
}
