//! WebAssembly instructions representation.
//!
//! Only a seed set is modelled; further instructions slot into the same enum and pick up
//! both output forms by extending the corresponding `match` arms.
//!
//! Defined in <https://www.w3.org/TR/wasm-core-2/#instructions>
use crate::core::indices::LocalIdx;

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    // --- Variable instructions (5.4.4) ---
    LocalGet(LocalIdx),
    LocalSet(LocalIdx),

    // --- Numeric instructions (5.4.7) ---
    I32Const(u32),
    I32Add,

    // --- Control instructions (5.4.1) ---
    If(InstructionList, InstructionList),
}

/// An ordered sequence of instructions, such as a function body or the branch of an `if`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstructionList {
    instructions: Vec<Instruction>,
}

impl InstructionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl FromIterator<Instruction> for InstructionList {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}
