use serde::Serialize;

use crate::isa::flags::FlagInstr;
use crate::isa::Class;
use crate::operand::Operand;

/// Size of one instruction word in the program image. Every format uses it.
pub const WORD_SIZE: usize = 8;

/// An instruction of any class but `Flag`: opcode plus up to two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperandInstr {
    pub(crate) class: Class,
    pub(crate) opcode: u8,
    pub(crate) operands: [Option<Operand>; 2],
    pub(crate) encoding: [u8; WORD_SIZE],
}

impl OperandInstr {
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    pub fn mnemonic(&self) -> &'static str {
        self.class.format().mnemonic(self.opcode)
    }

    pub fn operand_count(&self) -> usize {
        self.operands.iter().flatten().count()
    }

    pub fn operand(&self, index: usize) -> Option<Operand> {
        self.operands.get(index).copied().flatten()
    }

    pub fn encoding(&self) -> &[u8; WORD_SIZE] {
        &self.encoding
    }
}

/// One machine instruction. Immutable once built by [`crate::encode`] or a
/// [`crate::Decoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Instruction {
    System(OperandInstr),
    Move(OperandInstr),
    Alu(OperandInstr),
    Shift(OperandInstr),
    Flag(FlagInstr),
    Control(OperandInstr),
    Branch(OperandInstr),
    Io(OperandInstr),
}

impl Instruction {
    pub fn class(&self) -> Class {
        match self {
            Instruction::System(_) => Class::System,
            Instruction::Move(_) => Class::Move,
            Instruction::Alu(_) => Class::Alu,
            Instruction::Shift(_) => Class::Shift,
            Instruction::Flag(_) => Class::Flag,
            Instruction::Control(_) => Class::Control,
            Instruction::Branch(_) => Class::Branch,
            Instruction::Io(_) => Class::Io,
        }
    }

    pub fn opcode(&self) -> u8 {
        match self {
            Instruction::Flag(f) => f.opcode(),
            Instruction::System(w)
            | Instruction::Move(w)
            | Instruction::Alu(w)
            | Instruction::Shift(w)
            | Instruction::Control(w)
            | Instruction::Branch(w)
            | Instruction::Io(w) => w.opcode(),
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        self.class().format().mnemonic(self.opcode())
    }

    /// Bytes this instruction occupies in the program image.
    pub fn memory_size(&self) -> usize {
        self.class().format().memory_size
    }

    pub fn encoding(&self) -> &[u8; WORD_SIZE] {
        match self {
            Instruction::Flag(f) => f.encoding(),
            Instruction::System(w)
            | Instruction::Move(w)
            | Instruction::Alu(w)
            | Instruction::Shift(w)
            | Instruction::Control(w)
            | Instruction::Branch(w)
            | Instruction::Io(w) => w.encoding(),
        }
    }

    /// Operands in written order (source first).
    pub fn operands(&self) -> impl Iterator<Item = Operand> {
        let slots = match self {
            Instruction::Flag(_) => [None; 2],
            Instruction::System(w)
            | Instruction::Move(w)
            | Instruction::Alu(w)
            | Instruction::Shift(w)
            | Instruction::Control(w)
            | Instruction::Branch(w)
            | Instruction::Io(w) => w.operands,
        };
        slots.into_iter().flatten()
    }
}
