//! Operands and the operand-slot layout shared by every operand-carrying format.
//!
//! Word layout (bytes 1..8; byte 0 holds `tag | opcode`):
//!
//! ```text
//! byte 1: kind of operand 0 (bits 7..4), kind of operand 1 (bits 3..0)
//! byte 2: register of operand 0 (bits 7..4), register of operand 1 (bits 3..0)
//! byte 3: reserved
//! byte 4..8: payload, little-endian i32 (immediate or displacement)
//! ```

use serde::{Deserialize, Serialize};

use crate::instructions::WORD_SIZE;
use crate::opcode::Kinds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Reg {
    Rax,
    Rcx,
    Rdx,
    Rbx,
    Rsp,
    Rbp,
    Rsi,
    Rdi,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
}

const REG_NAMES: [&str; 16] = [
    "rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi", "r8", "r9", "r10", "r11", "r12",
    "r13", "r14", "r15",
];

impl Reg {
    pub const ALL: [Reg; 16] = [
        Reg::Rax,
        Reg::Rcx,
        Reg::Rdx,
        Reg::Rbx,
        Reg::Rsp,
        Reg::Rbp,
        Reg::Rsi,
        Reg::Rdi,
        Reg::R8,
        Reg::R9,
        Reg::R10,
        Reg::R11,
        Reg::R12,
        Reg::R13,
        Reg::R14,
        Reg::R15,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Register named by the low four bits of `nibble`.
    pub fn from_nibble(nibble: u8) -> Reg {
        Self::ALL[(nibble & 0xF) as usize]
    }

    pub fn name(self) -> &'static str {
        REG_NAMES[self as usize]
    }

    pub fn from_name(name: &str) -> Option<Reg> {
        REG_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| Self::ALL[i])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    Reg(Reg),
    Imm(i32),
    /// `disp(%base)`, or an absolute address when `base` is `None`.
    Mem { base: Option<Reg>, disp: i32 },
}

impl Operand {
    pub fn kind(&self) -> Kinds {
        match self {
            Operand::Reg(_) => Kinds::REG,
            Operand::Imm(_) => Kinds::IMM,
            Operand::Mem { .. } => Kinds::MEM,
        }
    }

    /// Value stored in the word's payload field, if this operand needs it.
    fn payload(&self) -> Option<i32> {
        match *self {
            Operand::Reg(_) => None,
            Operand::Imm(v) => Some(v),
            Operand::Mem { disp, .. } => Some(disp),
        }
    }

    fn kind_code(&self) -> u8 {
        match self {
            Operand::Reg(_) => KIND_REG,
            Operand::Imm(_) => KIND_IMM,
            Operand::Mem { base: Some(_), .. } => KIND_MEM,
            Operand::Mem { base: None, .. } => KIND_ABS,
        }
    }

    fn reg_index(&self) -> u8 {
        match self {
            Operand::Reg(r) | Operand::Mem { base: Some(r), .. } => r.index(),
            _ => 0,
        }
    }
}

const KIND_NONE: u8 = 0;
const KIND_REG: u8 = 1;
const KIND_IMM: u8 = 2;
const KIND_MEM: u8 = 3;
const KIND_ABS: u8 = 4;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotError {
    #[error("unknown operand kind {0}")]
    UnknownKind(u8),
    #[error("second operand present without a first")]
    Gap,
    #[error("more than one operand needs the payload field")]
    PayloadConflict,
}

fn slot_shift(slot: usize) -> u32 {
    if slot == 0 {
        4
    } else {
        0
    }
}

pub(crate) fn write_slots(
    word: &mut [u8; WORD_SIZE],
    slots: &[Option<Operand>; 2],
) -> Result<(), SlotError> {
    let mut payload = None;
    for (i, op) in slots.iter().enumerate() {
        let Some(op) = op else { continue };
        let shift = slot_shift(i);
        word[1] |= op.kind_code() << shift;
        word[2] |= op.reg_index() << shift;
        if let Some(v) = op.payload() {
            if payload.replace(v).is_some() {
                return Err(SlotError::PayloadConflict);
            }
        }
    }
    word[4..8].copy_from_slice(&payload.unwrap_or(0).to_le_bytes());
    Ok(())
}

pub(crate) fn read_slots(word: &[u8; WORD_SIZE]) -> Result<[Option<Operand>; 2], SlotError> {
    let payload = i32::from_le_bytes([word[4], word[5], word[6], word[7]]);
    let mut slots = [None; 2];
    let mut payloads = 0;
    for (i, slot) in slots.iter_mut().enumerate() {
        let shift = slot_shift(i);
        let reg = Reg::from_nibble(word[2] >> shift);
        *slot = match (word[1] >> shift) & 0xF {
            KIND_NONE => None,
            KIND_REG => Some(Operand::Reg(reg)),
            KIND_IMM => Some(Operand::Imm(payload)),
            KIND_MEM => Some(Operand::Mem { base: Some(reg), disp: payload }),
            KIND_ABS => Some(Operand::Mem { base: None, disp: payload }),
            other => return Err(SlotError::UnknownKind(other)),
        };
        if matches!(slot, Some(op) if op.payload().is_some()) {
            payloads += 1;
        }
    }
    if slots[0].is_none() && slots[1].is_some() {
        return Err(SlotError::Gap);
    }
    if payloads > 1 {
        return Err(SlotError::PayloadConflict);
    }
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn register_names_follow_index_order() {
        assert_eq!(Reg::Rax.index(), 0);
        assert_eq!(Reg::Rbp.name(), "rbp");
        assert_eq!(Reg::from_nibble(0x1F), Reg::R15);
        assert_eq!(Reg::from_name("r9"), Some(Reg::R9));
        assert_eq!(Reg::from_name("eax"), None);
    }

    #[test]
    fn slots_pack_kind_register_and_payload() {
        let mut word = [0u8; WORD_SIZE];
        let slots = [
            Some(Operand::Mem { base: Some(Reg::Rbp), disp: -8 }),
            Some(Operand::Reg(Reg::Rcx)),
        ];
        write_slots(&mut word, &slots).unwrap();
        assert_eq!(word, [0x00, 0x31, 0x51, 0x00, 0xF8, 0xFF, 0xFF, 0xFF]);
        assert_eq!(read_slots(&word).unwrap(), slots);
    }

    #[test]
    fn absolute_memory_has_no_base() {
        let mut word = [0u8; WORD_SIZE];
        let slots = [Some(Operand::Mem { base: None, disp: 0x1000 }), None];
        write_slots(&mut word, &slots).unwrap();
        assert_eq!(word[1], 0x40);
        assert_eq!(read_slots(&word).unwrap(), slots);
    }

    #[test]
    fn only_one_payload_per_word() {
        let mut word = [0u8; WORD_SIZE];
        let slots = [Some(Operand::Imm(1)), Some(Operand::Mem { base: None, disp: 2 })];
        assert_eq!(write_slots(&mut word, &slots), Err(SlotError::PayloadConflict));
        assert_eq!(
            read_slots(&[0, 0x33, 0, 0, 0, 0, 0, 0]),
            Err(SlotError::PayloadConflict)
        );
    }

    #[test]
    fn malformed_slots_are_rejected() {
        assert_eq!(
            read_slots(&[0, 0x51, 0, 0, 0, 0, 0, 0]),
            Err(SlotError::UnknownKind(5))
        );
        assert_eq!(read_slots(&[0, 0x01, 0, 0, 0, 0, 0, 0]), Err(SlotError::Gap));
    }
}
