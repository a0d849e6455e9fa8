use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::opcode::{Category, Mnemonic};

/// Instruction-category tally kept while assembling a program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub arithmetic: u32,
    pub logical: u32,
    pub memory_access: u32,
    pub control_flow: u32,
}

impl Stats {
    pub fn record(&mut self, mnemonic: Mnemonic) {
        match mnemonic.category() {
            Category::Arithmetic => self.arithmetic += 1,
            Category::Logical => self.logical += 1,
            Category::MemoryAccess => self.memory_access += 1,
            Category::ControlFlow => self.control_flow += 1,
        }
    }

    pub fn count(&self, category: Category) -> u32 {
        match category {
            Category::Arithmetic => self.arithmetic,
            Category::Logical => self.logical,
            Category::MemoryAccess => self.memory_access,
            Category::ControlFlow => self.control_flow,
        }
    }

    pub fn total(&self) -> u32 {
        self.arithmetic + self.logical + self.memory_access + self.control_flow
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Instruction Count: {}", self.total())?;
        writeln!(f, "Arithmetic Count: {}", self.arithmetic)?;
        writeln!(f, "Logic Count: {}", self.logical)?;
        writeln!(f, "Memory Access Count: {}", self.memory_access)?;
        write!(f, "Control Flow Count: {}", self.control_flow)
    }
}
