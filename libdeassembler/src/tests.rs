use libisa::instruction::{assembler, kind::InstructionKind, Instruction};

use crate::Deassembler;

fn print8() -> Vec<u8> {
    assembler::assemble([
        Instruction::new(InstructionKind::Ldi)
            .with_reg_a(0)
            .with_immediate(8),
        Instruction::new(InstructionKind::Prn).with_reg_a(0),
        Instruction::new(InstructionKind::Hlt),
    ])
    .unwrap()
    .machine_code
}

#[test]
fn listing() {
    let code = print8();

    assert_eq!(
        Deassembler::new(&code).deassemble_text(),
        "00: LDI R0, 8\n03: PRN R0\n05: HLT\n"
    );
}

#[test]
fn unknown_opcode_resyncs() {
    let mut code = vec![0xFF];
    code.extend(print8());

    let listing: Vec<_> = Deassembler::new(&code).collect();

    assert_eq!(listing.len(), 4);
    assert_eq!(listing[0], (0, Err("<unknown opcode 0xFF>".to_string())));
    assert_eq!(listing[1].0, 1);
    assert!(Deassembler::new(&code).deassemble().is_err());
}

#[test]
fn incomplete_instruction_stops() {
    let code = [InstructionKind::Ldi.opcode(), 0];
    let mut deassembler = Deassembler::new(&code);

    assert_eq!(deassembler.deassemble_instruction_text(), "<incomplete instruction>");
    assert_eq!(deassembler.next(), None);
}
