//! Instruction builders that derive every address an instruction needs.

pub mod program;
