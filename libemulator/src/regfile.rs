use libisa::{Register, Word, REGISTER_COUNT, STACK_BASE, STACK_POINTER};
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Invalid register R{0}")]
    InvalidRegister(Register),
}

/// General purpose registers R0 to R7, with R7 doubling as the stack pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegFile([Word; REGISTER_COUNT]);

impl RegFile {
    pub fn new() -> Self {
        let mut registers = [0; REGISTER_COUNT];
        registers[STACK_POINTER] = STACK_BASE;

        Self(registers)
    }

    pub fn check_index(index: Register) -> Result<(), RegisterError> {
        if index < REGISTER_COUNT {
            Ok(())
        } else {
            Err(RegisterError::InvalidRegister(index))
        }
    }

    pub fn register(&self, index: Register) -> Result<Word, RegisterError> {
        self.0
            .get(index)
            .copied()
            .ok_or(RegisterError::InvalidRegister(index))
    }

    pub fn register_mut(&mut self, index: Register) -> Result<&mut Word, RegisterError> {
        self.0
            .get_mut(index)
            .ok_or(RegisterError::InvalidRegister(index))
    }

    pub fn set(&mut self, index: Register, value: Word) -> Result<(), RegisterError> {
        *self.register_mut(index)? = value;
        Ok(())
    }

    pub fn sp(&self) -> Word {
        self.0[STACK_POINTER]
    }

    pub fn set_sp(&mut self, value: Word) {
        self.0[STACK_POINTER] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.0.iter()
    }
}

impl Default for RegFile {
    fn default() -> Self {
        Self::new()
    }
}
