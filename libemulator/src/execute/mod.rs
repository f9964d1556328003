use std::io;

use libisa::{
    instruction::{
        kind::{InstructionKind, OpcodeFlags},
        Instruction, InstructionDeassemblyError,
    },
    Address, Word,
};
use thiserror::Error;

use crate::{
    alu::AluError, memory::MemoryError, output::Output, regfile::RegisterError, Emulator,
    Machine, MachineState,
};

pub mod dispatch;
mod handlers;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOk {
    Normal,
    Halted,
}

#[derive(Debug, Error)]
pub enum ExecuteErr {
    #[error(transparent)]
    Memory(#[from] MemoryError),

    #[error(transparent)]
    Register(#[from] RegisterError),

    #[error(transparent)]
    Alu(#[from] AluError),

    #[error("Unknown opcode {opcode:#04X} at PC {pc:#04X}")]
    UnknownOpcode { opcode: Word, pc: Address },

    #[error("Illegal instruction ({0})")]
    IllegalInstruction(#[from] InstructionDeassemblyError),

    #[error("{0} is missing an operand")]
    MissingOperand(InstructionKind),

    #[error("Stack overflow")]
    StackOverflow,

    #[error("Stack underflow")]
    StackUnderflow,

    #[error("Couldn't emit output ({0})")]
    Output(#[from] io::Error),

    #[error("Machine has faulted and can't execute further")]
    Faulted,
}

/// How the PC moves on after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Past the instruction and its operands.
    Advance,
    Jump(Address),
    Halt,
}

impl<O> Emulator<O>
where
    O: Output,
{
    pub fn execute_to_halt(&mut self) -> Result<(), ExecuteErr> {
        while self.execute_instruction()? != ExecuteOk::Halted {}

        Ok(())
    }

    pub fn execute_instruction(&mut self) -> Result<ExecuteOk, ExecuteErr> {
        match self.state {
            MachineState::Running => {}
            MachineState::Halted => return Ok(ExecuteOk::Halted),
            MachineState::Faulted => return Err(ExecuteErr::Faulted),
        }

        match self.step() {
            Ok(ExecuteOk::Halted) => {
                log::info!("Halted, PC now at {:#04X}", self.machine.pc);
                self.state = MachineState::Halted;
                Ok(ExecuteOk::Halted)
            }
            Ok(ExecuteOk::Normal) => Ok(ExecuteOk::Normal),
            Err(e) => {
                log::error!("Fault at PC {:#04X}: {}", self.machine.pc, e);
                self.state = MachineState::Faulted;
                Err(e)
            }
        }
    }

    fn step(&mut self) -> Result<ExecuteOk, ExecuteErr> {
        let pc = self.machine.pc;
        let opcode = self.machine.memory.byte(pc)?;

        let handler =
            dispatch::handler(opcode).ok_or(ExecuteErr::UnknownOpcode { opcode, pc })?;
        let instruction = self.machine.fetch_operands(handler.kind)?;

        log::trace!("{}", self.machine.trace());
        log::debug!("{:#04X}: {}", pc, instruction);

        let step = (handler.execute)(&mut self.machine, &mut self.output, &instruction)?;

        Ok(self.machine.apply_step(step, handler.kind))
    }
}

impl Machine {
    fn fetch_operands(&self, kind: InstructionKind) -> Result<Instruction, ExecuteErr> {
        let operands = (1..=kind.operand_count())
            .map(|offset| self.memory.byte(self.pc + offset))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Instruction::from_operands(kind, &operands)?)
    }

    fn apply_step(&mut self, step: Step, kind: InstructionKind) -> ExecuteOk {
        debug_assert_eq!(
            matches!(step, Step::Jump(_)),
            kind.flags().contains(OpcodeFlags::SETS_PC),
            "{} disagrees with its opcode about setting the PC",
            kind
        );

        match step {
            Step::Advance => {
                self.pc += kind.width();
                ExecuteOk::Normal
            }
            Step::Jump(addr) => {
                self.pc = addr;
                ExecuteOk::Normal
            }
            Step::Halt => {
                self.pc += kind.width();
                ExecuteOk::Halted
            }
        }
    }

    /// Pre-decrements SP and stores the value at the new top of the stack.
    pub fn push(&mut self, value: Word) -> Result<(), ExecuteErr> {
        let sp = self
            .reg_file
            .sp()
            .checked_sub(1)
            .ok_or(ExecuteErr::StackOverflow)?;

        self.memory.set_byte(sp as Address, value)?;
        self.reg_file.set_sp(sp);

        Ok(())
    }

    /// Reads the top of the stack and post-increments SP.
    pub fn pop(&mut self) -> Result<Word, ExecuteErr> {
        let sp = self.reg_file.sp();
        let next_sp = sp.checked_add(1).ok_or(ExecuteErr::StackUnderflow)?;

        let value = self.memory.byte(sp as Address)?;
        self.reg_file.set_sp(next_sp);

        Ok(value)
    }
}
