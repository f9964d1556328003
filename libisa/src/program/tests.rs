use crate::instruction::{kind::InstructionKind, Instruction};

use super::{Program, ProgramLineError};

const PRINT8: &str = "\
# print8.ls8: Print the number 8 on the screen

10000010 # LDI R0,8
00000000
00001000
01000111 # PRN R0
00000000
00000001 # HLT
";

#[test]
fn parse_print8() {
    let program = Program::parse(PRINT8);

    assert_eq!(program.bytes, [130, 0, 8, 71, 0, 1]);
    assert!(program.malformed_lines.is_empty());
}

#[test]
fn malformed_lines_are_skipped() {
    let program = Program::parse(
        "00000001\n1000x010 # typo\n   \n111111111\n1 # too short\n0000001\n00000010",
    );

    assert_eq!(program.bytes, [1, 2]);

    let errors: Vec<_> = program
        .malformed_lines
        .iter()
        .map(|line| (line.line_number, line.error.clone()))
        .collect();

    assert_eq!(
        errors,
        [
            (2, ProgramLineError::InvalidDigit('x')),
            (4, ProgramLineError::WrongWidth(9)),
            (5, ProgramLineError::WrongWidth(1)),
            (6, ProgramLineError::WrongWidth(7)),
        ]
    );
}

#[test]
fn render_is_parseable() {
    let instructions = [
        Instruction::new(InstructionKind::Ldi)
            .with_reg_a(0)
            .with_immediate(8),
        Instruction::new(InstructionKind::Prn).with_reg_a(0),
        Instruction::new(InstructionKind::Hlt),
    ];

    let text = Program::render(instructions).unwrap();

    assert!(text.starts_with("10000010 # LDI R0, 8\n00000000\n"), "{}", text);
    assert_eq!(Program::parse(&text).bytes, [130, 0, 8, 71, 0, 1]);
}

#[test]
fn prefixed_literal() {
    let program = Program::parse("0b01000111\n0b\n");

    assert_eq!(program.bytes, [71]);
    assert_eq!(
        program.malformed_lines[0].error,
        ProgramLineError::WrongWidth(0)
    );
}
