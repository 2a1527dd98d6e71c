//! Conditional branches. All eight (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! share one handler; the dispatcher evaluates the condition.

use crate::{MemoryBus, CPU};

/// Applies a relative branch.
///
/// The signed 8-bit displacement is always fetched (2 cycles with the opcode).
/// A branch not taken costs nothing more. A taken branch that moves PC onto a
/// different page costs 2 extra internal cycles; a taken branch within the
/// page costs no extra.
///
/// The displacement is relative to the PC after the operand byte, so the
/// reachable window is -126 to +129 from the branch opcode itself.
pub(crate) fn branch<M: MemoryBus>(cpu: &mut CPU<M>, taken: bool) {
    let offset = cpu.fetch_instruction() as i8;
    if taken {
        let old_pc = cpu.pc;
        cpu.pc = old_pc.wrapping_add_signed(offset as i16);
        if (old_pc ^ cpu.pc) & 0xFF00 != 0 {
            cpu.tick(2);
        }
    }
}
