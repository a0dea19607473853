use std::collections::HashSet;

use pretty_assertions::assert_eq;
use z64_isa::{encode, Class, Decoder, DisassembleError, Z64Decoder, WORD_SIZE};

#[test]
fn all_tables_build_and_fit_their_opcode_field() {
    for class in Class::ALL {
        let format = class.format();
        let table = class.table();
        assert_eq!(format.class, class);
        assert_eq!(table.len(), format.descs.len());
        assert!(table.len() <= 1 << format.opcode_bits(), "{class:?}");
        assert_eq!(format.memory_size, WORD_SIZE);
    }
}

#[test]
fn mnemonics_are_unique_across_formats() {
    let mut seen = HashSet::new();
    for class in Class::ALL {
        for (_, desc) in class.table().iter() {
            assert!(seen.insert(desc.mnemonic), "duplicate {}", desc.mnemonic);
            assert_eq!(Class::of_mnemonic(desc.mnemonic), Some(class));
        }
    }
}

#[test]
fn at_most_one_format_claims_each_leading_byte() {
    for byte in 0..=0xFFu8 {
        let claims = Class::ALL
            .iter()
            .filter(|c| c.format().matches(byte))
            .count();
        assert!(claims <= 1, "{byte:#04x} claimed {claims} times");
        let expect_claimed = byte < 0xB0;
        assert_eq!(claims == 1, expect_claimed, "{byte:#04x}");
    }
}

#[test]
fn every_mnemonic_round_trips_through_its_leading_byte() {
    let dec = Z64Decoder::new();
    for class in Class::ALL {
        for (opcode, desc) in class.table().iter() {
            if !desc.operands.is_empty() {
                continue;
            }
            let insn = encode(desc.mnemonic, &[]).unwrap();
            assert_eq!(insn.encoding()[0], class.format().leading_byte(opcode));
            assert_eq!(Class::from_leading_byte(insn.encoding()[0]), Some(class));
            assert_eq!(dec.decode(insn.encoding()).unwrap().mnemonic(), desc.mnemonic);
        }
    }
}

#[test]
fn unassigned_tags_fail_at_dispatch() {
    let dec = Z64Decoder::new();
    for byte in [0xB0u8, 0xBF, 0xC0, 0xFF] {
        assert_eq!(
            dec.decode(&[byte, 0, 0, 0, 0, 0, 0, 0]),
            Err(DisassembleError::UnknownClass(byte))
        );
    }
}

#[test]
fn unassigned_opcodes_fail_in_their_format() {
    let dec = Z64Decoder::new();
    assert_eq!(
        dec.decode(&[0x3F, 0, 0, 0, 0, 0, 0, 0]),
        Err(DisassembleError::InvalidOpcode { class: Class::Shift, byte: 0x3F })
    );
    assert_eq!(
        dec.decode(&[0x4E, 0, 0, 0, 0, 0, 0, 0]),
        Err(DisassembleError::InvalidOpcode { class: Class::Flag, byte: 0x4E })
    );
    assert_eq!(
        dec.decode(&[0x84, 0, 0, 0, 0, 0, 0, 0]),
        Err(DisassembleError::InvalidOpcode { class: Class::Control, byte: 0x84 })
    );
}

#[test]
fn short_input_is_truncated() {
    let dec = Z64Decoder::new();
    assert_eq!(
        dec.decode(&[0x40, 0, 0]),
        Err(DisassembleError::Truncated { needed: 8, available: 3 })
    );
    assert_eq!(
        dec.decode(&[]),
        Err(DisassembleError::Truncated { needed: 8, available: 0 })
    );
}

#[test]
fn decode_reads_only_the_first_word() {
    let dec = Z64Decoder::new();
    let mut bytes = encode("ret", &[]).unwrap().encoding().to_vec();
    bytes.extend_from_slice(&[0xFF; 8]);
    assert_eq!(dec.decode(&bytes).unwrap().mnemonic(), "ret");
}
