//! Stack push and pull instructions: PHA, PHP, PLA, PLP.
//!
//! The stack lives in page 1 and is empty-ascending: SP names the next free
//! slot, a push writes there and steps up, a pull steps down and reads.

use crate::{MemoryBus, CPU};

/// PHA - push the accumulator. 3 cycles.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick(1);
    let value = cpu.a;
    cpu.push(value);
}

/// PHP - push the status byte. 3 cycles.
///
/// The pushed byte always has B (bit 4) and the phantom bit 5 set, whatever
/// the live flag state.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick(1);
    let status = cpu.status() | 0b0011_0000;
    cpu.push(status);
}

/// PLA - pull into the accumulator, setting Z and N. 4 cycles.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick(2);
    let value = cpu.pull();
    cpu.a = value;
    cpu.set_nz(value);
}

/// PLP - pull the status byte, ignoring bits 5 and 4. 4 cycles.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick(2);
    let value = cpu.pull();
    cpu.set_status(value);
}
