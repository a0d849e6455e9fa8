use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Register file size. Indices outside [0, 32) are not rejected by the
/// lenient encoder; they are masked to 5 bits during packing.
pub const NUM_REGISTERS: u32 = 32;

/// The MIPS-lite opcode table.
///
/// Discriminants are the 6-bit opcode values, so the table is the enum
/// itself: `num_enum` converts in the opcode direction and `strum` in the
/// text direction, both bijective over the 18 entries.
#[derive(
    Display, EnumString, IntoStaticStr, EnumIter, TryFromPrimitive, IntoPrimitive,
    Clone, Copy, Eq, PartialEq, Debug, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Mnemonic {
    // Arithmetic
    Add = 0b000000,
    Addi = 0b000001,
    Sub = 0b000010,
    Subi = 0b000011,
    Mul = 0b000100,
    Muli = 0b000101,
    // Logical
    Or = 0b000110,
    Ori = 0b000111,
    And = 0b001000,
    Andi = 0b001001,
    Xor = 0b001010,
    Xori = 0b001011,
    // Memory access
    Ldw = 0b001100,
    Stw = 0b001101,
    // Control flow
    Bz = 0b001110,   // uses 3 of the 4 mnemonic fields
    Beq = 0b001111,
    Jr = 0b010000,   // uses 2 of the 4 mnemonic fields
    Halt = 0b010001, // uses 1 of the 4 mnemonic fields
}

/// The two physical instruction layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// opcode(6) | rs(5) | rt(5) | rd(5) | unused(11)
    Register,
    /// opcode(6) | rs(5) | rt(5) | immediate(16, two's-complement)
    Immediate,
}

/// Statistics grouping of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Arithmetic,
    Logical,
    MemoryAccess,
    ControlFlow,
}

impl Mnemonic {
    pub fn opcode(self) -> u8 {
        self.into()
    }

    pub fn layout(self) -> Layout {
        match self {
            Mnemonic::Add
            | Mnemonic::Sub
            | Mnemonic::Mul
            | Mnemonic::Or
            | Mnemonic::And
            | Mnemonic::Xor => Layout::Register,
            _ => Layout::Immediate,
        }
    }

    pub fn category(self) -> Category {
        use Mnemonic::*;
        match self {
            Add | Addi | Sub | Subi | Mul | Muli => Category::Arithmetic,
            Or | Ori | And | Andi | Xor | Xori => Category::Logical,
            Ldw | Stw => Category::MemoryAccess,
            Bz | Beq | Jr | Halt => Category::ControlFlow,
        }
    }
}
