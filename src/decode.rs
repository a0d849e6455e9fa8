use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::opcode::{Layout, Mnemonic};

/// A decoded instruction word. The fourth field keeps its layout: a
/// destination register for register-form, a signed immediate otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    pub mnemonic: Mnemonic,
    pub rs: u8,
    pub rt: u8,
    pub field: FourthField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FourthField {
    Rd(u8),
    Imm(i16),
}

/// Two's-complement interpretation of the low `bits` bits of `v`.
#[inline]
pub fn sign_extend(v: u32, bits: u32) -> i32 {
    let s = 32 - bits;
    ((v << s) as i32) >> s
}

/// Unpacks a 32-bit word at the fixed field boundaries
/// [0,6) | [6,11) | [11,16) | [16,32), counted from the top bit.
pub fn decode_word(word: u32) -> Result<Decoded, CodecError> {
    let opcode = (word >> 26) as u8;
    let mnemonic = Mnemonic::try_from(opcode).map_err(|_| CodecError::UnknownOpcode(opcode))?;
    let rs = ((word >> 21) & 0x1F) as u8;
    let rt = ((word >> 16) & 0x1F) as u8;
    let field = match mnemonic.layout() {
        // Only the high 5 bits of the 16-bit fourth field carry rd.
        Layout::Register => FourthField::Rd(((word >> 11) & 0x1F) as u8),
        Layout::Immediate => FourthField::Imm(sign_extend(word & 0xFFFF, 16) as i16),
    };
    Ok(Decoded { mnemonic, rs, rt, field })
}
