use crate::cpu::{Rflags, Trap};
use crate::instructions::Instruction;
use crate::isa::flags::Flag;

/// Status register of the machine executing an instruction.
pub trait StatusRegister {
    fn flag(&self, flag: Flag) -> bool;
    fn assign(&mut self, flag: Flag, val: bool);
}

impl StatusRegister for Rflags {
    fn flag(&self, flag: Flag) -> bool {
        self.contains(flag.mask())
    }

    fn assign(&mut self, flag: Flag, val: bool) {
        self.set(flag.mask(), val);
    }
}

impl Instruction {
    /// Applies this instruction's effect on the status register.
    ///
    /// Only the flag class and `nop` are defined at this layer; everything else touches
    /// registers or memory and traps back to the engine.
    pub fn run<S: StatusRegister + ?Sized>(&self, status: &mut S) -> Result<(), Trap> {
        match self {
            Instruction::Flag(f) => {
                status.assign(f.flag(), f.val());
                Ok(())
            }
            Instruction::System(w) if w.mnemonic() == "nop" => Ok(()),
            _ => Err(Trap::Unsupported {
                mnemonic: self.mnemonic(),
            }),
        }
    }
}
