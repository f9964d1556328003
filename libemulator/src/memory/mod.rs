use libisa::{Address, Word, MEMORY_SIZE};
use thiserror::Error;


#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Memory access violation at {0:#04X}")]
    OutOfBounds(Address),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory([Word; MEMORY_SIZE]);

impl Memory {
    pub fn new() -> Self {
        Self([0; MEMORY_SIZE])
    }

    pub fn byte(&self, addr: Address) -> Result<Word, MemoryError> {
        self.0
            .get(addr)
            .copied()
            .ok_or(MemoryError::OutOfBounds(addr))
    }

    pub fn byte_mut(&mut self, addr: Address) -> Result<&mut Word, MemoryError> {
        self.0.get_mut(addr).ok_or(MemoryError::OutOfBounds(addr))
    }

    pub fn set_byte(&mut self, addr: Address, value: Word) -> Result<(), MemoryError> {
        *self.byte_mut(addr)? = value;
        Ok(())
    }

    pub fn load(&mut self, start: Address, data: &[Word]) -> Result<(), MemoryError> {
        let end = start.saturating_add(data.len());

        if end > MEMORY_SIZE {
            // Report the first address that doesn't exist.
            return Err(MemoryError::OutOfBounds(start.max(MEMORY_SIZE)));
        }

        self.0[start..end].copy_from_slice(data);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.0.iter()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
