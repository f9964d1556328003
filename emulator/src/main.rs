use std::{
    fs, io,
    path::{Path, PathBuf},
    process::exit,
};

use anyhow::Context;
use clap::Parser;
use libemulator::{output::WriteOutput, Emulator, MachineState};
use libisa::{program::Program, Word};
use log::LevelFilter;

mod command;
mod debugger;

/// Runs LS-8 programs.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Program in the .ls8 text format.
    program: PathBuf,

    /// Log a trace line before every instruction.
    #[arg(short, long)]
    trace: bool,

    /// Log every decoded instruction.
    #[arg(short, long)]
    verbose: bool,

    /// Start the interactive debugger instead of running to halt.
    #[arg(short, long)]
    interactive: bool,
}

fn main() {
    let args = Args::parse();
    init_logger(&args);

    let program = match load_program(&args.program) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Failed to load program: {:#}", e);
            exit(1);
        }
    };

    let mut emulator = match Emulator::new(&program, WriteOutput::new(io::stdout())) {
        Ok(emulator) => emulator,
        Err(e) => {
            eprintln!("{:#}", e);
            exit(1);
        }
    };

    if args.interactive {
        if let Err(e) = debugger::run(&mut emulator) {
            eprintln!("Debugger failed: {:#}", e);
            exit(1);
        }
    } else if let Err(e) = emulator.execute_to_halt() {
        eprintln!("Fault at PC {:#04X}: {}", emulator.pc(), e);
    }

    exit(exit_code(emulator.state()));
}

/// A faulted machine fails the process, however the run was driven.
fn exit_code(state: MachineState) -> i32 {
    match state {
        MachineState::Faulted => 1,
        MachineState::Running | MachineState::Halted => 0,
    }
}

fn init_logger(args: &Args) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn).parse_default_env();

    if args.trace {
        builder.filter_level(LevelFilter::Trace);
    } else if args.verbose {
        builder.filter_level(LevelFilter::Debug);
    }

    builder.init();
}

fn load_program(path: &Path) -> anyhow::Result<Vec<Word>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Couldn't read {}", path.display()))?;

    let program = Program::parse(&text);

    for line in &program.malformed_lines {
        log::warn!(
            "Skipping line {} ({:?}): {}",
            line.line_number,
            line.text,
            line.error
        );
    }

    Ok(program.bytes)
}
