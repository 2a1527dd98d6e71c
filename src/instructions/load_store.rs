//! Register loads and stores: LDA, LDX, LDY, STA, STX, STY.

use crate::{AddressingMode, MemoryBus, CPU};

/// LDA - load the accumulator. Sets Z and N.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.fetch_operand(mode);
    cpu.a = value;
    cpu.set_nz(value);
}

/// LDX - load the X register. Sets Z and N.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.fetch_operand(mode);
    cpu.x = value;
    cpu.set_nz(value);
}

/// LDY - load the Y register. Sets Z and N.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.fetch_operand(mode);
    cpu.y = value;
    cpu.set_nz(value);
}

/// STA - store the accumulator. No flags affected.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.fetch_address(mode);
    let value = cpu.a;
    cpu.write_byte(addr, value);
}

/// STX - store the X register. No flags affected.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.fetch_address(mode);
    let value = cpu.x;
    cpu.write_byte(addr, value);
}

/// STY - store the Y register. No flags affected.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.fetch_address(mode);
    let value = cpu.y;
    cpu.write_byte(addr, value);
}
