//! Shift and rotate instructions: ASL, LSR, ROL, ROR.
//!
//! Each comes in an accumulator form (2 cycles) and memory forms that go
//! through the shared read-modify-write sequence. The per-byte cores are
//! `pub(crate)` because the unofficial RMW combos (SLO, SRE, RLA, RRA) reuse
//! them.

use crate::{AddressingMode, MemoryBus, CPU};

/// ASL - arithmetic shift left. Bit 7 goes to carry, bit 0 becomes 0.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify(cpu, mode, asl_value);
}

/// LSR - logical shift right. Bit 0 goes to carry, bit 7 becomes 0.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify(cpu, mode, lsr_value);
}

/// ROL - rotate left through carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify(cpu, mode, rol_value);
}

/// ROR - rotate right through carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify(cpu, mode, ror_value);
}

fn modify<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    f: fn(&mut CPU<M>, u8) -> u8,
) {
    let result = if mode == AddressingMode::Accumulator {
        let value = cpu.a;
        let result = f(cpu, value);
        cpu.a = result;
        cpu.tick(1);
        result
    } else {
        cpu.read_modify_write(mode, f)
    };
    cpu.set_nz(result);
}

pub(crate) fn asl_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    cpu.flag_c = value & 0x80 != 0;
    value << 1
}

pub(crate) fn lsr_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    cpu.flag_c = value & 0x01 != 0;
    value >> 1
}

pub(crate) fn rol_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    let carry_in = cpu.flag_c as u8;
    cpu.flag_c = value & 0x80 != 0;
    (value << 1) | carry_in
}

pub(crate) fn ror_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    let carry_in = (cpu.flag_c as u8) << 7;
    cpu.flag_c = value & 0x01 != 0;
    (value >> 1) | carry_in
}
