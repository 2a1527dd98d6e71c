//! Increments and decrements: INC/DEC on memory, INX/INY/DEX/DEY on
//! registers. All set Z and N from the result; carry is never touched, so
//! 0xFF + 1 wraps to 0x00 with Z set and C unchanged.

use crate::{AddressingMode, MemoryBus, CPU};

/// INC - increment a memory location.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = cpu.read_modify_write(mode, inc_value);
    cpu.set_nz(result);
}

/// DEC - decrement a memory location.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = cpu.read_modify_write(mode, dec_value);
    cpu.set_nz(result);
}

pub(crate) fn inc_value<M: MemoryBus>(_cpu: &mut CPU<M>, value: u8) -> u8 {
    value.wrapping_add(1)
}

pub(crate) fn dec_value<M: MemoryBus>(_cpu: &mut CPU<M>, value: u8) -> u8 {
    value.wrapping_sub(1)
}

/// INX - increment the X register.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    let result = cpu.x;
    cpu.set_nz(result);
    cpu.tick(1);
}

/// INY - increment the Y register.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    let result = cpu.y;
    cpu.set_nz(result);
    cpu.tick(1);
}

/// DEX - decrement the X register.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    let result = cpu.x;
    cpu.set_nz(result);
    cpu.tick(1);
}

/// DEY - decrement the Y register.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    let result = cpu.y;
    cpu.set_nz(result);
    cpu.tick(1);
}
