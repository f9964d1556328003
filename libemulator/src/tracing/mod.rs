use std::fmt::Write;

use libisa::Address;

use crate::{output::Output, Emulator, Machine};


/// Bytes of the instruction window shown after the PC.
const TRACE_WINDOW: Address = 3;

impl Machine {
    /// Renders the state as `TRACE: PC | OP A B | R0 .. R7`, bytes past the end of memory show up as `--`.
    pub fn trace(&self) -> String {
        let mut line = format!("TRACE: {:02X} |", self.pc);

        for offset in 0..TRACE_WINDOW {
            // Writing into a string can't fail.
            let _ = match self.pc.checked_add(offset).map(|addr| self.memory.byte(addr)) {
                Some(Ok(byte)) => write!(line, " {:02X}", byte),
                _ => write!(line, " --"),
            };
        }

        line.push_str(" |");

        for register in self.reg_file.iter() {
            let _ = write!(line, " {:02X}", register);
        }

        line
    }
}

impl<O> Emulator<O>
where
    O: Output,
{
    pub fn trace(&self) -> String {
        self.machine.trace()
    }
}
