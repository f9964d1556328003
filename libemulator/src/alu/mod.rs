use libisa::{instruction::kind::InstructionKind, Word};
use thiserror::Error;


#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AluError {
    #[error("Unsupported ALU operation {0}")]
    UnsupportedOperation(InstructionKind),
}

/// Byte wide arithmetic, results wrap around modulo 256.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ALU;

impl ALU {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, op: InstructionKind, a: Word, b: Word) -> Result<Word, AluError> {
        match op {
            InstructionKind::Add => Ok(self.add(a, b)),
            InstructionKind::Mul => Ok(self.mul(a, b)),
            _ => Err(AluError::UnsupportedOperation(op)),
        }
    }

    pub fn add(&self, a: Word, b: Word) -> Word {
        a.wrapping_add(b)
    }

    pub fn mul(&self, a: Word, b: Word) -> Word {
        a.wrapping_mul(b)
    }
}
