//! Register transfers: TAX, TAY, TXA, TYA, TSX, TXS. Implicit mode, 2
//! cycles each. All set Z and N except TXS.

use crate::{MemoryBus, CPU};

/// TAX - transfer A to X.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    cpu.x = value;
    cpu.set_nz(value);
    cpu.tick(1);
}

/// TAY - transfer A to Y.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    cpu.y = value;
    cpu.set_nz(value);
    cpu.tick(1);
}

/// TXA - transfer X to A.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.x;
    cpu.a = value;
    cpu.set_nz(value);
    cpu.tick(1);
}

/// TYA - transfer Y to A.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.y;
    cpu.a = value;
    cpu.set_nz(value);
    cpu.tick(1);
}

/// TSX - transfer the stack pointer's low byte to X, setting Z and N.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = (cpu.sp & 0x00FF) as u8;
    cpu.x = value;
    cpu.set_nz(value);
    cpu.tick(1);
}

/// TXS - transfer X to the stack pointer's low byte. No flags affected.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp = 0x0100 | cpu.x as u16;
    cpu.tick(1);
}
