use libdeassembler::Deassembler;
use libemulator::{output::Output, Emulator, ExecuteOk};
use libisa::{Address, Word, MEMORY_SIZE};

use crate::command::{Command, CommandError};

#[cfg(test)]
mod tests;

const DEFAULT_INSTRUCTION_LIMIT: usize = 1_000_000;

pub fn run<O>(emulator: &mut Emulator<O>) -> anyhow::Result<()>
where
    O: Output,
{
    loop {
        println!("<<<   {}   >>>", emulator.trace());

        let Some(command) = Command::prompt()? else {
            return Ok(());
        };

        match execute_command(&command, emulator) {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(e) => eprintln!("!> {}", e),
        }
    }
}

/// Runs a single debugger command, returns whether the debugger should quit.
fn execute_command<O>(command: &Command, emulator: &mut Emulator<O>) -> anyhow::Result<bool>
where
    O: Output,
{
    let mut args = command.args();

    match args.next()? {
        "e" => {
            let instruction_count: usize = args.next_parsed_or(1)?;

            for _ in 0..instruction_count {
                if emulator.execute_instruction()? == ExecuteOk::Halted {
                    println!("Halted");
                    break;
                }
            }
        }
        "eb" => {
            let break_pc: Address = args.next_parsed()?;
            let instruction_limit = args.next_parsed_or(DEFAULT_INSTRUCTION_LIMIT)?;

            let mut executed_instructions = 0;
            while emulator.pc() != break_pc {
                if executed_instructions >= instruction_limit {
                    eprintln!(
                        "Didn't reach breakpoint by {} executed instructions",
                        executed_instructions
                    );
                    return Ok(false);
                }

                if emulator.execute_instruction()? == ExecuteOk::Halted {
                    println!("Halted before reaching breakpoint");
                    break;
                }
                executed_instructions += 1;
            }

            println!("Executed {} instructions", executed_instructions);
        }
        "r" => println!("{}", emulator.trace()),
        "d" => {
            let begin: Address = args.next_parsed_or(0)?;
            let length: usize = args.next_parsed_or(MEMORY_SIZE)?;

            let dump = memory(emulator)
                .into_iter()
                .skip(begin)
                .take(length)
                .collect::<Vec<_>>();

            println!("{:02X?}", dump);
        }
        "l" => {
            let begin: Address = args.next_parsed_or(emulator.pc())?;
            let count: usize = args.next_parsed_or(8)?;

            let memory = memory(emulator);
            let code = memory.get(begin..).unwrap_or_default();

            for (offset, instruction) in Deassembler::new(code).take(count) {
                match instruction {
                    Ok(instruction) => println!("{:02X}: {}", begin + offset, instruction),
                    Err(e) => println!("{:02X}: {}", begin + offset, e),
                }
            }
        }
        "jmp" => {
            emulator.set_pc(args.next_parsed()?);
        }

        "q" => return Ok(true),
        _ => return Err(CommandError::UnknownCommand.into()),
    }

    let unused_arg_count = args.remaining();
    if unused_arg_count != 0 {
        eprintln!("{} unused command arguments!", unused_arg_count);
    }

    Ok(false)
}

fn memory<O>(emulator: &Emulator<O>) -> Vec<Word>
where
    O: Output,
{
    emulator.machine.memory.iter().copied().collect()
}
