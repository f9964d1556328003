use super::{AssemblyError, Instruction};
use crate::{Address, Word};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AssemblyOutput {
    pub machine_code: Vec<Word>,

    /// Machine code byte index of every assembled instruction's opcode, in input order.
    pub instruction_starts: Vec<Address>,
}

impl AssemblyOutput {
    /// Index of the instruction whose opcode sits at the given byte index, if any.
    pub fn instruction_at(&self, byte_index: Address) -> Option<usize> {
        self.instruction_starts.binary_search(&byte_index).ok()
    }
}

pub fn assemble<I>(instructions: I) -> Result<AssemblyOutput, AssemblyError>
where
    I: IntoIterator<Item = Instruction>,
{
    instructions
        .into_iter()
        .try_fold(AssemblyOutput::default(), |mut output, instruction| {
            let instruction_machine_code = instruction.assemble()?;

            output.instruction_starts.push(output.machine_code.len());
            output.machine_code.extend(instruction_machine_code);

            Ok(output)
        })
}
