use std::{env, fs, path::PathBuf, process::exit};

use libdeassembler::Deassembler;
use libisa::program::Program;

fn main() {
    let path: PathBuf = env::args().skip(1).collect();

    if path.file_name().is_none() {
        eprintln!("Specify the .ls8 program file path as arguments.");
        exit(1);
    }

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading program file: {}", e);
            exit(1);
        }
    };

    let program = Program::parse(&text);

    for line in &program.malformed_lines {
        eprintln!("Skipped line {}: {}", line.line_number, line.error);
    }

    let deassembler = Deassembler::new(&program.bytes);
    print!("{}", deassembler.deassemble_text());
}
