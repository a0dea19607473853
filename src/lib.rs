pub mod cpu;
pub mod decoder;
pub mod disasm;
pub mod encoder;
pub mod exec;
pub mod instructions;
pub mod isa;
pub mod opcode;
pub mod operand;

pub use cpu::{Rflags, Trap};
pub use decoder::{DisassembleError, Decoder, Z64Decoder};
pub use encoder::{encode, EncodeError};
pub use exec::StatusRegister;
pub use instructions::{Instruction, OperandInstr, WORD_SIZE};
pub use isa::flags::{Flag, FlagInstr};
pub use isa::{Class, Format};
pub use operand::{Operand, Reg};
