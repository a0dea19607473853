//! Text rendering (AT&T order: source first) and linear listings of program images.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decoder::{Decoder, DisassembleError, Z64Decoder};
use crate::instructions::{Instruction, WORD_SIZE};
use crate::operand::{Operand, Reg};

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.name())
    }
}

fn signed_hex(v: i32) -> String {
    if v < 0 {
        format!("-{:#x}", v.unsigned_abs())
    } else {
        format!("{:#x}", v)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Operand::Reg(r) => write!(f, "{r}"),
            Operand::Imm(v) => write!(f, "${}", signed_hex(v)),
            Operand::Mem { base: Some(r), disp: 0 } => write!(f, "({r})"),
            Operand::Mem { base: Some(r), disp } => write!(f, "{}({r})", signed_hex(disp)),
            Operand::Mem { base: None, disp } => write!(f, "{:#x}", disp as u32),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())?;
        for (i, op) in self.operands().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// Text of the instruction word at the start of `bytes`.
pub fn disassemble(bytes: &[u8]) -> Result<String, DisassembleError> {
    Z64Decoder::new().decode(bytes).map(|insn| insn.to_string())
}

/// Text of the instruction at `offset` and the number of bytes it occupies.
pub fn disassemble_at(image: &[u8], offset: usize) -> Result<(String, usize), DisassembleError> {
    let bytes = image.get(offset..).unwrap_or(&[]);
    let insn = Z64Decoder::new().decode(bytes)?;
    Ok((insn.to_string(), insn.memory_size()))
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListingConfig {
    pub show_bytes: bool,
    /// Stop at the first undecodable word instead of skipping over it.
    pub stop_on_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingLine {
    pub addr: u64,
    pub bytes: Vec<u8>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ListingLine {
    pub fn render(&self, cfg: &ListingConfig) -> String {
        if cfg.show_bytes {
            let hex: Vec<String> = self.bytes.iter().map(|b| format!("{b:02x}")).collect();
            format!("{:#010x}: {:<23}  {}", self.addr, hex.join(" "), self.text)
        } else {
            format!("{:#010x}: {}", self.addr, self.text)
        }
    }
}

/// Linear sweep over `image`, loaded at `base`.
///
/// An undecodable word is emitted as `.quad` (or `.byte` for a trailing partial word)
/// with its error, and the sweep resumes at the next word.
pub fn listing(image: &[u8], base: u64, cfg: &ListingConfig) -> Vec<ListingLine> {
    let dec = Z64Decoder::new();
    let mut lines = Vec::new();
    let mut off = 0usize;
    while off < image.len() {
        let addr = base.wrapping_add(off as u64);
        let rest = &image[off..];
        match dec.decode(rest) {
            Ok(insn) => {
                let size = insn.memory_size();
                lines.push(ListingLine {
                    addr,
                    bytes: rest[..size].to_vec(),
                    text: insn.to_string(),
                    error: None,
                });
                off += size;
            }
            Err(err) => {
                debug!(addr, %err, "undecodable word");
                let size = rest.len().min(WORD_SIZE);
                let bytes = rest[..size].to_vec();
                lines.push(ListingLine {
                    addr,
                    text: data_directive(&bytes),
                    bytes,
                    error: Some(err.to_string()),
                });
                off += size;
                if cfg.stop_on_error {
                    break;
                }
            }
        }
    }
    lines
}

fn data_directive(bytes: &[u8]) -> String {
    if let Ok(word) = <[u8; WORD_SIZE]>::try_from(bytes) {
        format!(".quad {:#018x}", u64::from_le_bytes(word))
    } else {
        let parts: Vec<String> = bytes.iter().map(|b| format!("{b:#04x}")).collect();
        format!(".byte {}", parts.join(", "))
    }
}
