use libisa::{instruction::Instruction, Address, Register, Word};

use crate::{memory::MemoryError, output::Output, regfile::RegFile, Machine};

use super::{ExecuteErr, Step};

// Handlers check everything that can fail before writing any state.

pub(super) fn ldi(
    machine: &mut Machine,
    _: &mut dyn Output,
    instruction: &Instruction,
) -> Result<Step, ExecuteErr> {
    let value = immediate(instruction)?;
    machine.reg_file.set(reg_a(instruction)?, value)?;

    Ok(Step::Advance)
}

pub(super) fn prn(
    machine: &mut Machine,
    output: &mut dyn Output,
    instruction: &Instruction,
) -> Result<Step, ExecuteErr> {
    let value = machine.reg_file.register(reg_a(instruction)?)?;
    output.emit(value)?;

    Ok(Step::Advance)
}

pub(super) fn alu(
    machine: &mut Machine,
    _: &mut dyn Output,
    instruction: &Instruction,
) -> Result<Step, ExecuteErr> {
    let dest = reg_a(instruction)?;

    let a = machine.reg_file.register(dest)?;
    let b = machine.reg_file.register(reg_b(instruction)?)?;

    let result = machine.alu.apply(instruction.kind, a, b)?;
    machine.reg_file.set(dest, result)?;

    Ok(Step::Advance)
}

pub(super) fn push(
    machine: &mut Machine,
    _: &mut dyn Output,
    instruction: &Instruction,
) -> Result<Step, ExecuteErr> {
    let value = machine.reg_file.register(reg_a(instruction)?)?;
    machine.push(value)?;

    Ok(Step::Advance)
}

pub(super) fn pop(
    machine: &mut Machine,
    _: &mut dyn Output,
    instruction: &Instruction,
) -> Result<Step, ExecuteErr> {
    let dest = reg_a(instruction)?;
    RegFile::check_index(dest)?;

    // SP moves before the destination is written, so `POP R7` leaves SP at the popped value.
    let value = machine.pop()?;
    machine.reg_file.set(dest, value)?;

    Ok(Step::Advance)
}

pub(super) fn call(
    machine: &mut Machine,
    _: &mut dyn Output,
    instruction: &Instruction,
) -> Result<Step, ExecuteErr> {
    let target = machine.reg_file.register(reg_a(instruction)?)?;

    let return_addr = machine.pc + instruction.kind.width();
    let return_addr =
        Word::try_from(return_addr).map_err(|_| MemoryError::OutOfBounds(return_addr))?;

    machine.push(return_addr)?;

    Ok(Step::Jump(target as Address))
}

pub(super) fn ret(
    machine: &mut Machine,
    _: &mut dyn Output,
    _: &Instruction,
) -> Result<Step, ExecuteErr> {
    let return_addr = machine.pop()?;

    Ok(Step::Jump(return_addr as Address))
}

pub(super) fn hlt(
    _: &mut Machine,
    _: &mut dyn Output,
    _: &Instruction,
) -> Result<Step, ExecuteErr> {
    Ok(Step::Halt)
}

fn reg_a(instruction: &Instruction) -> Result<Register, ExecuteErr> {
    instruction
        .reg_a
        .ok_or(ExecuteErr::MissingOperand(instruction.kind))
}

fn reg_b(instruction: &Instruction) -> Result<Register, ExecuteErr> {
    instruction
        .reg_b
        .ok_or(ExecuteErr::MissingOperand(instruction.kind))
}

fn immediate(instruction: &Instruction) -> Result<Word, ExecuteErr> {
    instruction
        .immediate
        .ok_or(ExecuteErr::MissingOperand(instruction.kind))
}
