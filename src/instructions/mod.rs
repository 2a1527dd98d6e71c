//! Instruction implementations, grouped by family.
//!
//! Each handler takes the CPU and (where relevant) the addressing mode, and
//! composes the cycle-counted primitives on [`crate::CPU`]. The dispatch
//! table in [`crate::opcodes`] decides which handler runs for which opcode
//! byte; nothing here inspects opcode bytes directly.

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod illegal;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;
