use alu::ALU;
use anyhow::Context;
use libisa::{Address, Word};
use memory::{Memory, MemoryError};
use output::Output;
use regfile::RegFile;

pub mod alu;
pub mod execute;
pub mod memory;
pub mod output;
pub mod regfile;
pub mod tracing;

pub use execute::{ExecuteErr, ExecuteOk};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    Running,
    Halted,
    Faulted,
}

/// Everything an instruction handler is allowed to touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    pub memory: Memory,
    pub reg_file: RegFile,
    pub alu: ALU,
    pub pc: Address,
}

impl Machine {
    pub fn new() -> Self {
        Self {
            memory: Memory::new(),
            reg_file: RegFile::new(),
            alu: ALU::new(),
            pc: 0,
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Emulator<O>
where
    O: Output,
{
    pub machine: Machine,
    pub output: O,
    state: MachineState,
}

impl<O> Emulator<O>
where
    O: Output,
{
    pub fn new(program: &[Word], output: O) -> anyhow::Result<Self> {
        let mut emulator = Self {
            machine: Machine::new(),
            output,
            state: MachineState::Running,
        };

        emulator
            .load(0, program)
            .context("Program doesn't fit into memory")?;

        Ok(emulator)
    }

    /// Writes bytes into memory from `start` onwards, nothing is written if they don't all fit.
    pub fn load(&mut self, start: Address, bytes: &[Word]) -> Result<(), MemoryError> {
        self.machine.memory.load(start, bytes)
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn pc(&self) -> Address {
        self.machine.pc
    }

    pub fn set_pc(&mut self, pc: Address) {
        self.machine.pc = pc;
    }
}
