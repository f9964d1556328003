use std::fmt::Display;

use bimap::BiMap;
use bitflags::bitflags;
use lazy_static::lazy_static;

use crate::Word;

lazy_static! {
    static ref KIND_OPCODE_BIMAP: BiMap<InstructionKind, Word> = BiMap::from_iter([
        (InstructionKind::Ldi, 0b1000_0010),
        (InstructionKind::Prn, 0b0100_0111),
        (InstructionKind::Mul, 0b1010_0010),
        (InstructionKind::Add, 0b1010_0000),
        (InstructionKind::Push, 0b0100_0101),
        (InstructionKind::Pop, 0b0100_0110),
        (InstructionKind::Call, 0b0101_0000),
        (InstructionKind::Ret, 0b0001_0001),
        (InstructionKind::Hlt, 0b0000_0001),
    ]);
}

bitflags! {
    /// Informational bits of an opcode byte, laid out as `AABCDDDD`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpcodeFlags: Word {
        /// `B`: the instruction is carried out by the ALU.
        const ALU     = 0b0010_0000;
        /// `C`: the instruction sets the PC itself.
        const SETS_PC = 0b0001_0000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    Ldi,
    Prn,

    Mul,
    Add,

    Push,
    Pop,

    Call,
    Ret,

    Hlt,
}

impl InstructionKind {
    pub const ALL: [InstructionKind; 9] = [
        Self::Ldi,
        Self::Prn,
        Self::Mul,
        Self::Add,
        Self::Push,
        Self::Pop,
        Self::Call,
        Self::Ret,
        Self::Hlt,
    ];

    pub fn from_opcode(opcode: Word) -> Option<Self> {
        KIND_OPCODE_BIMAP.get_by_right(&opcode).copied()
    }

    pub fn opcode(&self) -> Word {
        // Every variant is listed in the bimap, the opcode table test makes sure of it.
        KIND_OPCODE_BIMAP.get_by_left(self).copied().unwrap_or_default()
    }

    pub fn flags(&self) -> OpcodeFlags {
        OpcodeFlags::from_bits_truncate(self.opcode())
    }

    /// Operand count as encoded in the top two bits of the opcode.
    pub fn operand_count(&self) -> usize {
        (self.opcode() >> 6) as usize
    }

    /// Full instruction width in bytes, opcode included.
    pub fn width(&self) -> usize {
        1 + self.operand_count()
    }

    pub fn has_reg_a(&self) -> bool {
        !matches!(self, Self::Ret | Self::Hlt)
    }

    pub fn has_reg_b(&self) -> bool {
        matches!(self, Self::Mul | Self::Add)
    }

    pub fn has_immediate(&self) -> bool {
        matches!(self, Self::Ldi)
    }
}

impl Display for InstructionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Mul => "MUL",
            Self::Add => "ADD",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Hlt => "HLT",
        })
    }
}
