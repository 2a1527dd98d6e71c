//! Flag set and clear instructions. Each is implicit-mode, 2 cycles: the
//! opcode fetch plus one internal cycle.

use crate::{MemoryBus, CPU};

/// CLC - clear the carry flag.
pub(crate) fn clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_c = false;
    cpu.tick(1);
}

/// CLD - clear the decimal mode flag.
pub(crate) fn cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_d = false;
    cpu.tick(1);
}

/// CLI - clear the interrupt disable flag.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_i = false;
    cpu.tick(1);
}

/// CLV - clear the overflow flag.
pub(crate) fn clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_v = false;
    cpu.tick(1);
}

/// SEC - set the carry flag.
pub(crate) fn sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_c = true;
    cpu.tick(1);
}

/// SED - set the decimal mode flag. The flag is tracked but arithmetic stays
/// binary.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_d = true;
    cpu.tick(1);
}

/// SEI - set the interrupt disable flag.
pub(crate) fn sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_i = true;
    cpu.tick(1);
}
