use pretty_assertions::assert_eq;
use z64_isa::isa::flags::{self, FLAGS};
use z64_isa::{encode, Class, Decoder, DisassembleError, EncodeError, Instruction, Z64Decoder};

const MNEMONICS: [&str; 14] = [
    "clc", "clp", "clz", "cls", "cli", "cld", "clo", "stc", "stp", "stz", "sts", "sti", "std",
    "sto",
];

#[test]
fn every_flag_mnemonic_round_trips() {
    let dec = Z64Decoder::new();
    for m in MNEMONICS {
        let insn = encode(m, &[]).unwrap();
        assert_eq!(flags::disassemble(insn.encoding()).unwrap(), m);
        assert_eq!(dec.decode(insn.encoding()).unwrap(), insn);
    }
}

#[test]
fn leading_byte_is_tag_or_table_index() {
    for (i, m) in MNEMONICS.iter().enumerate() {
        let insn = encode(m, &[]).unwrap();
        assert_eq!(insn.class(), Class::Flag);
        assert_eq!(insn.opcode(), i as u8);
        assert_eq!(insn.encoding()[0], 0x40 | i as u8);
    }
}

#[test]
fn footprint_is_eight_zero_padded_bytes() {
    for m in MNEMONICS {
        let insn = encode(m, &[]).unwrap();
        assert_eq!(insn.memory_size(), 8);
        assert_eq!(insn.encoding().len(), 8);
        assert!(insn.encoding()[1..].iter().all(|&b| b == 0));
    }
    assert_eq!(flags::FORMAT.encoding_width, 1);
}

#[test]
fn concrete_encodings() {
    assert_eq!(encode("clc", &[]).unwrap().encoding(), &[0x40, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(encode("sto", &[]).unwrap().encoding(), &[0x4D, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(flags::disassemble(&[0x49, 0, 0, 0, 0, 0, 0, 0]).unwrap(), "stz");
    assert_eq!(flags::disassemble(&[0x44, 0, 0, 0, 0, 0, 0, 0]).unwrap(), "cli");
}

#[test]
fn unknown_mnemonic_is_rejected() {
    assert_eq!(
        encode("xyz", &[]),
        Err(EncodeError::UnknownInstruction("xyz".into()))
    );
    assert_eq!(
        flags::FlagInstr::new("CLC"),
        Err(EncodeError::UnknownInstruction("CLC".into()))
    );
}

#[test]
fn bad_leading_bytes_do_not_disassemble() {
    // opcode 14 is past the end of the table
    assert_eq!(
        flags::disassemble(&[0x4E, 0, 0, 0, 0, 0, 0, 0]),
        Err(DisassembleError::InvalidOpcode { class: Class::Flag, byte: 0x4E })
    );
    assert_eq!(
        flags::disassemble(&[0x3F, 0, 0, 0, 0, 0, 0, 0]),
        Err(DisassembleError::UnknownClass(0x3F))
    );
    for byte in 0x4Eu8..=0x7F {
        assert!(flags::disassemble(&[byte]).is_err(), "{byte:#04x}");
    }
}

#[test]
fn set_and_clear_value_follows_mnemonic() {
    for m in MNEMONICS {
        let Instruction::Flag(f) = encode(m, &[]).unwrap() else {
            panic!("{m} is not a flag instruction");
        };
        assert_eq!(f.val(), m.starts_with("st"));
        assert_eq!(f.flag(), FLAGS[f.opcode() as usize % FLAGS.len()]);
    }
}

#[test]
fn flag_instructions_take_no_operands() {
    use z64_isa::{Operand, Reg};
    assert_eq!(
        encode("stc", &[Operand::Reg(Reg::Rax)]),
        Err(EncodeError::OperandCount { mnemonic: "stc", expected: 0, found: 1 })
    );
}
