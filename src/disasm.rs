use std::fmt::Write as _;

use tracing::trace;

use crate::decode::{decode_word, Decoded, FourthField};
use crate::error::{CodecError, LineError};
use crate::region::{Region, RegionSplit};

/// Formats a decoded record as the annotated multi-line block:
/// mnemonic, both source registers, then the layout-specific fourth field.
pub fn fmt_decoded(d: &Decoded) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "Opcode: {}", d.mnemonic);
    let _ = writeln!(s, "Rs: R{}  Rt: R{}", d.rs, d.rt);
    match d.field {
        FourthField::Rd(rd) => {
            let _ = writeln!(s, "Rd: R{rd}");
        }
        FourthField::Imm(imm) => {
            let _ = writeln!(s, "Immediate: {imm}");
        }
    }
    s
}

/// Renders one trace line, or `None` for an all-zero padding word.
/// Padding is skipped uniformly in both regions; the counter is owned by
/// the caller and advances regardless.
pub fn render_line(word: u32, line: u32, region: Region) -> Result<Option<String>, CodecError> {
    if word == 0 {
        trace!(line, "padding word skipped");
        return Ok(None);
    }
    match region {
        Region::Instruction => {
            let d = decode_word(word)?;
            Ok(Some(format!("Line: {line}\n{}", fmt_decoded(&d))))
        }
        Region::Memory => Ok(Some(format!("Line {line}: {word:X}\n"))),
    }
}

/// Drives a full decode pass over a word sequence: one monotone counter,
/// zero words skipped, instruction records separated by a blank line.
pub fn render_trace(words: &[u32], split: RegionSplit) -> Result<String, LineError> {
    let mut out = String::new();
    for (line, &word) in words.iter().enumerate() {
        let counter = line as u32;
        let region = split.classify(counter);
        let rendered =
            render_line(word, counter, region).map_err(|source| LineError { line, source })?;
        if let Some(text) = rendered {
            out.push_str(&text);
            if region == Region::Instruction {
                out.push('\n');
            }
        }
    }
    Ok(out)
}
