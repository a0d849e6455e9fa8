pub mod decode;
pub mod disasm;
pub mod encode;
pub mod error;
pub mod opcode;
pub mod region;
pub mod stats;

pub use decode::{decode_word, Decoded, FourthField};
pub use encode::{encode_line, encode_line_with, encode_program, EncodeOptions, EncodedProgram};
pub use error::{CodecError, LineError};
pub use opcode::{Category, Layout, Mnemonic};
pub use region::{Region, RegionSplit};
pub use stats::Stats;
