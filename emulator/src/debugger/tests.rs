use libemulator::{Emulator, ExecuteErr, MachineState};
use libisa::{
    instruction::{kind::InstructionKind, Instruction},
    Word,
};

use super::execute_command;
use crate::{command::Command, exit_code};

fn emulator(program: &[Word]) -> anyhow::Result<Emulator<Vec<Word>>> {
    Emulator::new(program, Vec::new())
}

fn run(line: &str, emulator: &mut Emulator<Vec<Word>>) -> anyhow::Result<bool> {
    execute_command(&Command::new(line), emulator)
}

fn print8() -> anyhow::Result<Vec<Word>> {
    let mut program = Vec::new();
    for instruction in [
        Instruction::new(InstructionKind::Ldi).with_reg_a(0).with_immediate(8),
        Instruction::new(InstructionKind::Prn).with_reg_a(0),
        Instruction::new(InstructionKind::Hlt),
    ] {
        program.extend(instruction.assemble()?);
    }

    Ok(program)
}

#[test]
fn fault_while_stepping_fails_the_process() -> anyhow::Result<()> {
    let mut emulator = emulator(&[0xFF])?;

    let error = run("e", &mut emulator).unwrap_err();

    assert!(matches!(
        error.downcast_ref::<ExecuteErr>(),
        Some(ExecuteErr::UnknownOpcode { opcode: 0xFF, pc: 0 })
    ));
    assert_eq!(emulator.state(), MachineState::Faulted);
    assert_eq!(exit_code(emulator.state()), 1);

    assert!(run("q", &mut emulator)?);
    assert_eq!(exit_code(emulator.state()), 1);

    Ok(())
}

#[test]
fn stepping_to_halt() -> anyhow::Result<()> {
    let mut emulator = emulator(&print8()?)?;

    assert!(!run("e 10", &mut emulator)?);

    assert_eq!(emulator.state(), MachineState::Halted);
    assert_eq!(emulator.output, [8]);
    assert_eq!(exit_code(emulator.state()), 0);

    Ok(())
}

#[test]
fn quitting_early_is_not_a_failure() -> anyhow::Result<()> {
    let mut emulator = emulator(&print8()?)?;

    assert!(!run("e", &mut emulator)?);
    assert!(run("q", &mut emulator)?);

    assert_eq!(emulator.state(), MachineState::Running);
    assert_eq!(exit_code(emulator.state()), 0);

    Ok(())
}

#[test]
fn inspection_commands_leave_the_machine_alone() -> anyhow::Result<()> {
    let mut emulator = emulator(&print8()?)?;
    let before = emulator.machine.clone();

    for line in ["r", "d", "d 0 4", "l", "l 0 2"] {
        assert!(!run(line, &mut emulator)?);
    }

    assert_eq!(emulator.machine, before);
    assert!(emulator.output.is_empty());

    Ok(())
}

#[test]
fn breakpoint_and_jump() -> anyhow::Result<()> {
    let mut emulator = emulator(&print8()?)?;

    assert!(!run("eb 3", &mut emulator)?);
    assert_eq!(emulator.pc(), 3);
    assert_eq!(emulator.machine.reg_file.register(0)?, 8);

    assert!(!run("jmp 0", &mut emulator)?);
    assert_eq!(emulator.pc(), 0);

    Ok(())
}

#[test]
fn unknown_command() -> anyhow::Result<()> {
    let mut emulator = emulator(&print8()?)?;

    assert!(run("frobnicate", &mut emulator).is_err());
    assert!(run("jmp", &mut emulator).is_err());

    Ok(())
}
