//! The `.ls8` program text format.
//!
//! Every line holds at most one byte written as a binary literal, e.g. `10000010`.
//! Anything after a `#` is a comment, blank and comment-only lines carry no byte.

use std::fmt::Write;

use thiserror::Error;

use crate::{
    instruction::{assembler, AssemblyError, Instruction},
    Word,
};

#[cfg(test)]
mod tests;

const COMMENT_DELIMITER: char = '#';
const BYTE_DIGITS: usize = 8;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgramLineError {
    #[error("Invalid binary digit '{0}'")]
    InvalidDigit(char),

    #[error("Expected {BYTE_DIGITS} binary digits, got {0}")]
    WrongWidth(usize),
}

/// A line that couldn't be read as a byte and got skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// One-based line number.
    pub line_number: usize,
    pub text: String,
    pub error: ProgramLineError,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Program {
    pub bytes: Vec<Word>,
    pub malformed_lines: Vec<MalformedLine>,
}

impl Program {
    pub fn parse(text: &str) -> Self {
        let mut program = Self::default();

        for (index, line) in text.lines().enumerate() {
            match parse_line(line) {
                Ok(Some(byte)) => program.bytes.push(byte),
                Ok(None) => {}
                Err(error) => program.malformed_lines.push(MalformedLine {
                    line_number: index + 1,
                    text: line.to_string(),
                    error,
                }),
            }
        }

        program
    }

    /// Renders instructions in the program text format, annotating every opcode line with its mnemonic.
    pub fn render<I>(instructions: I) -> Result<String, AssemblyError>
    where
        I: IntoIterator<Item = Instruction>,
    {
        let instructions: Vec<_> = instructions.into_iter().collect();
        let output = assembler::assemble(instructions.iter().copied())?;

        let mut text = String::new();

        for (byte_index, byte) in output.machine_code.iter().enumerate() {
            // Writing into a string can't fail.
            let _ = write!(text, "{:0width$b}", byte, width = BYTE_DIGITS);

            if let Some(index) = output.instruction_at(byte_index) {
                let _ = write!(text, " {} {}", COMMENT_DELIMITER, instructions[index]);
            }

            text.push('\n');
        }

        Ok(text)
    }
}

fn parse_line(line: &str) -> Result<Option<Word>, ProgramLineError> {
    let code = match line.split_once(COMMENT_DELIMITER) {
        Some((code, _)) => code,
        None => line,
    }
    .trim();

    if code.is_empty() {
        return Ok(None);
    }

    let digits = code.strip_prefix("0b").unwrap_or(code);

    if let Some(invalid) = digits.chars().find(|c| !matches!(c, '0' | '1')) {
        return Err(ProgramLineError::InvalidDigit(invalid));
    }

    if digits.len() != BYTE_DIGITS {
        return Err(ProgramLineError::WrongWidth(digits.len()));
    }

    let byte = digits
        .chars()
        .fold(0, |byte: Word, digit| byte << 1 | Word::from(digit == '1'));

    Ok(Some(byte))
}
