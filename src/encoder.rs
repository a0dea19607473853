use tracing::trace;

use crate::instructions::{Instruction, OperandInstr, WORD_SIZE};
use crate::isa::flags::FlagInstr;
use crate::isa::Class;
use crate::operand::{self, Operand};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// No format knows the mnemonic. The caller offered something the ISA does not have.
    #[error("unknown instruction `{0}`")]
    UnknownInstruction(String),
    #[error("`{mnemonic}` takes {expected} operand(s), got {found}")]
    OperandCount {
        mnemonic: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("operand {index} of `{mnemonic}` cannot be `{operand}`")]
    InvalidOperand {
        mnemonic: &'static str,
        index: usize,
        operand: Operand,
    },
    #[error("`{mnemonic}`: only one operand may be an immediate or a memory reference")]
    PayloadConflict { mnemonic: &'static str },
}

/// Builds the instruction for `mnemonic` applied to `operands` (source first).
pub fn encode(mnemonic: &str, operands: &[Operand]) -> Result<Instruction, EncodeError> {
    let class = Class::of_mnemonic(mnemonic)
        .ok_or_else(|| EncodeError::UnknownInstruction(mnemonic.to_string()))?;
    trace!(mnemonic, ?class, "encode");
    let insn = match class {
        Class::Flag => {
            let flag = FlagInstr::new(mnemonic)?;
            if !operands.is_empty() {
                return Err(EncodeError::OperandCount {
                    mnemonic: flag.mnemonic(),
                    expected: 0,
                    found: operands.len(),
                });
            }
            Instruction::Flag(flag)
        }
        Class::System => Instruction::System(encode_word(class, mnemonic, operands)?),
        Class::Move => Instruction::Move(encode_word(class, mnemonic, operands)?),
        Class::Alu => Instruction::Alu(encode_word(class, mnemonic, operands)?),
        Class::Shift => Instruction::Shift(encode_word(class, mnemonic, operands)?),
        Class::Control => Instruction::Control(encode_word(class, mnemonic, operands)?),
        Class::Branch => Instruction::Branch(encode_word(class, mnemonic, operands)?),
        Class::Io => Instruction::Io(encode_word(class, mnemonic, operands)?),
    };
    Ok(insn)
}

fn encode_word(
    class: Class,
    mnemonic: &str,
    operands: &[Operand],
) -> Result<OperandInstr, EncodeError> {
    let opcode = class
        .table()
        .opcode(mnemonic)
        .map_err(|_| EncodeError::UnknownInstruction(mnemonic.to_string()))?;
    build_word(class, opcode, operands)
}

/// Validates `operands` against the descriptor of `opcode` and lays out the word.
pub(crate) fn build_word(
    class: Class,
    opcode: u8,
    operands: &[Operand],
) -> Result<OperandInstr, EncodeError> {
    let format = class.format();
    let desc = &format.descs[opcode as usize];
    if operands.len() != desc.operands.len() {
        return Err(EncodeError::OperandCount {
            mnemonic: desc.mnemonic,
            expected: desc.operands.len(),
            found: operands.len(),
        });
    }
    for (index, (op, accepted)) in operands.iter().zip(desc.operands).enumerate() {
        if !accepted.contains(op.kind()) {
            return Err(EncodeError::InvalidOperand {
                mnemonic: desc.mnemonic,
                index,
                operand: *op,
            });
        }
    }

    let mut slots = [None; 2];
    for (slot, op) in slots.iter_mut().zip(operands) {
        *slot = Some(*op);
    }
    let mut encoding = [0u8; WORD_SIZE];
    encoding[0] = format.leading_byte(opcode);
    operand::write_slots(&mut encoding, &slots).map_err(|_| EncodeError::PayloadConflict {
        mnemonic: desc.mnemonic,
    })?;
    Ok(OperandInstr {
        class,
        opcode,
        operands: slots,
        encoding,
    })
}
