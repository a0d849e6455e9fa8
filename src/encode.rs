use tracing::debug;

use crate::error::{CodecError, LineError};
use crate::opcode::{Layout, Mnemonic, NUM_REGISTERS};
use crate::stats::Stats;

#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Reject out-of-range register indices and immediates instead of
    /// silently masking them to field width.
    pub strict: bool,
}

/// An assembled program: the word sequence (truncated at HALT inclusive)
/// and the per-category instruction tally.
#[derive(Debug, Clone)]
pub struct EncodedProgram {
    pub words: Vec<u32>,
    pub stats: Stats,
}

pub fn encode_line(line: &str) -> Result<u32, CodecError> {
    encode_line_with(line, EncodeOptions::default())
}

/// Encodes one mnemonic line into a 32-bit word.
///
/// Mnemonic operand order is `OPCODE RD RS RT` for register-form and
/// `OPCODE RT RS IMM` for immediate-form; the physical field order is
/// rs, rt, then rd/immediate. Short immediate-form lines (BZ, JR, HALT)
/// are padded with zero operands before reordering.
pub fn encode_line_with(line: &str, opts: EncodeOptions) -> Result<u32, CodecError> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    let mnemonic = match tokens.first() {
        Some(tok) => tok
            .parse::<Mnemonic>()
            .map_err(|_| CodecError::UnknownMnemonic(tok.to_string()))?,
        None => return Err(CodecError::MissingOperands { expected: 1, found: 0 }),
    };

    match mnemonic.layout() {
        Layout::Register => {
            if tokens.len() < 4 {
                return Err(CodecError::MissingOperands { expected: 4, found: tokens.len() });
            }
            let rd = parse_register(tokens[1], opts)?;
            let rs = parse_register(tokens[2], opts)?;
            let rt = parse_register(tokens[3], opts)?;
            Ok(pack_register(mnemonic, rs, rt, rd))
        }
        Layout::Immediate => {
            while tokens.len() < 4 {
                tokens.push("0");
            }
            let rt = parse_register(tokens[1], opts)?;
            let rs = parse_register(tokens[2], opts)?;
            let imm = parse_fourth(tokens[3], opts)?;
            Ok(pack_immediate(mnemonic, rs, rt, imm))
        }
    }
}

/// Encodes a whole source text, one instruction per line. Blank lines and
/// `#` comment lines are skipped. Encoding stops after the first HALT;
/// trailing lines may be non-executable annotations.
pub fn encode_program(source: &str, opts: EncodeOptions) -> Result<EncodedProgram, LineError> {
    let mut words = Vec::new();
    let mut stats = Stats::default();
    for (line_no, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let word = encode_line_with(line, opts).map_err(|source| LineError { line: line_no, source })?;
        // The word was packed from a table mnemonic, so this lookup cannot miss.
        let opcode = (word >> 26) as u8;
        let mnemonic = Mnemonic::try_from(opcode)
            .map_err(|_| LineError { line: line_no, source: CodecError::UnknownOpcode(opcode) })?;
        stats.record(mnemonic);
        debug!(line = line_no, "encoded {:08x}", word);
        words.push(word);
        if mnemonic == Mnemonic::Halt {
            break;
        }
    }
    Ok(EncodedProgram { words, stats })
}

fn parse_register(tok: &str, opts: EncodeOptions) -> Result<u32, CodecError> {
    let digits = tok.strip_prefix('R').unwrap_or(tok);
    let idx = digits
        .parse::<u32>()
        .map_err(|_| CodecError::MalformedOperand(tok.to_string()))?;
    if opts.strict && idx >= NUM_REGISTERS {
        return Err(CodecError::OutOfRange(tok.to_string()));
    }
    Ok(idx)
}

// The fourth mnemonic field is a register when `R`-prefixed (register-form
// rd), otherwise a signed immediate literal.
fn parse_fourth(tok: &str, opts: EncodeOptions) -> Result<i64, CodecError> {
    if tok.starts_with('R') {
        return Ok(parse_register(tok, opts)? as i64);
    }
    let imm = tok
        .parse::<i64>()
        .map_err(|_| CodecError::MalformedOperand(tok.to_string()))?;
    if opts.strict && (imm < -(1 << 15) || imm >= (1 << 15)) {
        return Err(CodecError::OutOfRange(tok.to_string()));
    }
    Ok(imm)
}

fn pack_register(mnemonic: Mnemonic, rs: u32, rt: u32, rd: u32) -> u32 {
    ((mnemonic.opcode() as u32) << 26) | ((rs & 0x1F) << 21) | ((rt & 0x1F) << 16) | ((rd & 0x1F) << 11)
}

fn pack_immediate(mnemonic: Mnemonic, rs: u32, rt: u32, imm: i64) -> u32 {
    ((mnemonic.opcode() as u32) << 26) | ((rs & 0x1F) << 21) | ((rt & 0x1F) << 16) | ((imm as u32) & 0xFFFF)
}
