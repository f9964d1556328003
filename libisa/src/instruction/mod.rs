use std::fmt::Display;

use kind::InstructionKind;
use thiserror::Error;

use crate::{Immediate, Register, Word};

pub mod assembler;
pub mod kind;


#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Missing register operand A")]
    MissingRegA,

    #[error("Missing register operand B")]
    MissingRegB,

    #[error("Missing immediate")]
    MissingImmediate,

    #[error("Register {0} doesn't fit into an operand byte")]
    RegisterOutOfRange(Register),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InstructionDeassemblyError {
    #[error("Unrecognized opcode {0:#04X}")]
    UnrecognizedOpcode(Word),

    #[error("Expected {expected} operand bytes, got {actual}")]
    OperandCountMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub reg_a: Option<Register>,
    pub reg_b: Option<Register>,
    pub immediate: Option<Immediate>,
}

impl Instruction {
    pub const fn new(kind: InstructionKind) -> Self {
        Self {
            kind,
            reg_a: None,
            reg_b: None,
            immediate: None,
        }
    }

    pub const fn with_reg_a(mut self, reg_a: Register) -> Self {
        self.reg_a = Some(reg_a);
        self
    }

    pub const fn with_reg_b(mut self, reg_b: Register) -> Self {
        self.reg_b = Some(reg_b);
        self
    }

    pub const fn with_immediate(mut self, immediate: Immediate) -> Self {
        self.immediate = Some(immediate);
        self
    }

    pub fn assemble(self) -> Result<Vec<Word>, AssemblyError> {
        let mut output = Vec::with_capacity(self.kind.width());
        output.push(self.kind.opcode());

        if self.kind.has_reg_a() {
            let reg_a = self.reg_a.ok_or(AssemblyError::MissingRegA)?;
            output.push(register_operand(reg_a)?);
        }

        if self.kind.has_reg_b() {
            let reg_b = self.reg_b.ok_or(AssemblyError::MissingRegB)?;
            output.push(register_operand(reg_b)?);
        }

        if self.kind.has_immediate() {
            output.push(self.immediate.ok_or(AssemblyError::MissingImmediate)?);
        }

        Ok(output)
    }

    pub fn deassemble(opcode: Word, operands: &[Word]) -> Result<Self, InstructionDeassemblyError> {
        let kind = InstructionKind::from_opcode(opcode)
            .ok_or(InstructionDeassemblyError::UnrecognizedOpcode(opcode))?;

        Self::from_operands(kind, operands)
    }

    /// Builds an instruction from the operand bytes following its opcode in memory.
    pub fn from_operands(
        kind: InstructionKind,
        operands: &[Word],
    ) -> Result<Self, InstructionDeassemblyError> {
        if operands.len() != kind.operand_count() {
            return Err(InstructionDeassemblyError::OperandCountMismatch {
                expected: kind.operand_count(),
                actual: operands.len(),
            });
        }

        let mut operands = operands.iter().copied();
        let mut instruction = Self::new(kind);

        // Operand order in memory is reg A, reg B, immediate.
        if kind.has_reg_a() {
            instruction.reg_a = operands.next().map(Register::from);
        }

        if kind.has_reg_b() {
            instruction.reg_b = operands.next().map(Register::from);
        }

        if kind.has_immediate() {
            instruction.immediate = operands.next();
        }

        Ok(instruction)
    }
}

fn register_operand(register: Register) -> Result<Word, AssemblyError> {
    Word::try_from(register).map_err(|_| AssemblyError::RegisterOutOfRange(register))
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.kind))?;

        if let Some(reg_a) = self.reg_a {
            f.write_fmt(format_args!(" R{}", reg_a))?;
        }

        if let Some(reg_b) = self.reg_b {
            f.write_fmt(format_args!(", R{}", reg_b))?;
        }

        if let Some(immediate) = self.immediate {
            f.write_fmt(format_args!(", {}", immediate))?;
        }

        Ok(())
    }
}
