use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::isa::flags::Flag;

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rflags: u64 {
const CF = 1 << 0; // Carry
const PF = 1 << 2; // Parity / protection
const ZF = 1 << 6; // Zero
const SF = 1 << 7; // Sign
const IF = 1 << 9; // Interrupt enable
const DF = 1 << 10; // Direction
const OF = 1 << 11; // Overflow
}
}

impl Flag {
    /// Bit of [`Rflags`] holding this flag.
    pub fn mask(self) -> Rflags {
        match self {
            Flag::Carry => Rflags::CF,
            Flag::Parity => Rflags::PF,
            Flag::Zero => Rflags::ZF,
            Flag::Sign => Rflags::SF,
            Flag::Interrupt => Rflags::IF,
            Flag::Direction => Rflags::DF,
            Flag::Overflow => Rflags::OF,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Trap {
    #[error("`{mnemonic}` must be executed by the CPU engine")]
    Unsupported { mnemonic: &'static str },
}
