/// Codec failures. Every variant is local to one input line; no state
/// persists across lines except the running counter, which always advances.
#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),
    #[error("unknown opcode {0:#08b}")]
    UnknownOpcode(u8),
    #[error("malformed operand `{0}`")]
    MalformedOperand(String),
    #[error("expected {expected} fields, found {found}")]
    MissingOperands { expected: usize, found: usize },
    #[error("operand out of range `{0}`")]
    OutOfRange(String),
}

/// A codec failure tagged with the 0-based input line it occurred on.
#[derive(thiserror::Error, Debug)]
#[error("line {line}: {source}")]
pub struct LineError {
    pub line: usize,
    #[source]
    pub source: CodecError,
}
