use anyhow::{anyhow, Result};

/// Parses bytes typed as hex: `4d`, `0x4d`, or runs such as `4d000000`.
pub fn parse_hex_bytes<S: AsRef<str>>(items: &[S]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for item in items {
        let t = item.as_ref().trim();
        let digits = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")).unwrap_or(t);
        anyhow::ensure!(
            !digits.is_empty() && digits.len() % 2 == 0,
            "bad hex bytes `{t}`: need an even number of digits"
        );
        for pair in digits.as_bytes().chunks(2) {
            let pair = std::str::from_utf8(pair).map_err(|_| anyhow!("bad hex bytes `{t}`"))?;
            out.push(u8::from_str_radix(pair, 16).map_err(|_| anyhow!("bad hex bytes `{t}`"))?);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_bytes_and_runs() {
        assert_eq!(parse_hex_bytes(&["4d", "0x00", "0X1f"]).unwrap(), vec![0x4d, 0, 0x1f]);
        assert_eq!(parse_hex_bytes(&["4d00000000000000"]).unwrap(), vec![0x4d, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn rejects_odd_or_non_hex() {
        assert!(parse_hex_bytes(&["4"]).is_err());
        assert!(parse_hex_bytes(&["0x"]).is_err());
        assert!(parse_hex_bytes(&["zz"]).is_err());
        assert!(parse_hex_bytes(&["é0"]).is_err());
    }

    #[test]
    fn typed_word_disassembles() {
        let bytes = parse_hex_bytes(&["49", "00000000000000"]).unwrap();
        assert_eq!(z64_isa::disasm::disassemble(&bytes).unwrap(), "stz");
        let bad = parse_hex_bytes(&["4e00000000000000"]).unwrap();
        assert!(z64_isa::disasm::disassemble(&bad).is_err());
    }
}
