use lazy_static::lazy_static;
use libisa::{
    instruction::{kind::InstructionKind, Instruction},
    Word,
};

use crate::{output::Output, Machine};

use super::{handlers, ExecuteErr, Step};

const OPCODE_COUNT: usize = Word::MAX as usize + 1;

pub type HandlerFn = fn(&mut Machine, &mut dyn Output, &Instruction) -> Result<Step, ExecuteErr>;

#[derive(Clone, Copy)]
pub struct Handler {
    pub kind: InstructionKind,
    pub execute: HandlerFn,
}

lazy_static! {
    static ref DISPATCH_TABLE: [Option<Handler>; OPCODE_COUNT] = {
        let mut table = [None; OPCODE_COUNT];

        for kind in InstructionKind::ALL {
            table[kind.opcode() as usize] = Some(Handler {
                kind,
                execute: handler_fn(kind),
            });
        }

        table
    };
}

pub fn handler(opcode: Word) -> Option<Handler> {
    DISPATCH_TABLE[opcode as usize]
}

fn handler_fn(kind: InstructionKind) -> HandlerFn {
    match kind {
        InstructionKind::Ldi => handlers::ldi,
        InstructionKind::Prn => handlers::prn,
        InstructionKind::Push => handlers::push,
        InstructionKind::Pop => handlers::pop,
        InstructionKind::Call => handlers::call,
        InstructionKind::Ret => handlers::ret,
        InstructionKind::Hlt => handlers::hlt,
        InstructionKind::Mul | InstructionKind::Add => handlers::alu,
    }
}
