use libisa::{
    instruction::{kind::InstructionKind, Instruction},
    Address, Word,
};

#[cfg(test)]
mod tests;

/// Walks machine code one instruction at a time, yielding every instruction together with its address.
pub struct Deassembler<'a> {
    code: &'a [Word],
    position: Address,
}

impl<'a> Deassembler<'a> {
    pub fn new(code: &'a [Word]) -> Self {
        Self { code, position: 0 }
    }

    pub fn deassemble(self) -> Result<Vec<Instruction>, String> {
        self.map(|(_, instruction)| instruction).collect()
    }

    pub fn deassemble_text(self) -> String {
        self.map(|(addr, instruction)| match instruction {
            Ok(instruction) => format!("{:02X}: {}\n", addr, instruction),
            Err(e) => format!("{:02X}: {}\n", addr, e),
        })
        .collect()
    }

    pub fn deassemble_instruction(&mut self) -> Result<Instruction, String> {
        let code = self.code;

        let opcode = *code
            .get(self.position)
            .ok_or("<out of deassembler bounds>".to_string())?;

        let Some(kind) = InstructionKind::from_opcode(opcode) else {
            // Data or garbage, resync on the next byte.
            self.position += 1;
            return Err(format!("<unknown opcode {:#04X}>", opcode));
        };

        let Some(operands) = code.get(self.position + 1..self.position + kind.width()) else {
            self.position = code.len();
            return Err("<incomplete instruction>".to_string());
        };

        let instruction =
            Instruction::from_operands(kind, operands).map_err(|e| format!("<{}>", e))?;

        self.position += kind.width();
        Ok(instruction)
    }

    pub fn deassemble_instruction_text(&mut self) -> String {
        match self.deassemble_instruction() {
            Ok(instr) => format!("{}", instr),
            Err(e) => e,
        }
    }
}

impl Iterator for Deassembler<'_> {
    type Item = (Address, Result<Instruction, String>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.code.len() {
            return None;
        }

        let addr = self.position;
        Some((addr, self.deassemble_instruction()))
    }
}
