//! Control flow: JMP, JSR/RTS, BRK/RTI, and the NOP variants.

use crate::{AddressingMode, MemoryBus, CPU};

/// JMP - unconditional jump, absolute (3 cycles) or indirect (5 cycles).
///
/// The indirect form reproduces the NMOS page-wrap bug: when the pointer's
/// low byte is 0xFF, the high byte of the target is read from the start of
/// the same page instead of the next page. JMP ($30FF) reads its low byte
/// from $30FF and its high byte from $3000.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let target = cpu.fetch_word();
    match mode {
        AddressingMode::Absolute => cpu.pc = target,
        AddressingMode::Indirect => {
            let lo = cpu.read_byte(target) as u16;
            let hi_ptr = if target & 0x00FF == 0x00FF {
                target & 0xFF00
            } else {
                target.wrapping_add(1)
            };
            let hi = cpu.read_byte(hi_ptr) as u16;
            cpu.pc = (hi << 8) | lo;
        }
        _ => unreachable!("JMP only supports Absolute and Indirect, got {:?}", mode),
    }
}

/// JSR - jump to subroutine. 6 cycles.
///
/// Pushes the address of the last byte of the JSR instruction (PC - 1 after
/// the operand fetch), high byte first, then jumps.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>) {
    let target = cpu.fetch_word();
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.tick(1);
    cpu.push((return_addr >> 8) as u8);
    cpu.push(return_addr as u8);
    cpu.pc = target;
}

/// RTS - return from subroutine. 6 cycles.
///
/// Pulls low byte then high byte and resumes at the pulled address plus one,
/// undoing JSR's off-by-one so the pair round-trips.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    let lo = cpu.pull() as u16;
    let hi = cpu.pull() as u16;
    cpu.pc = ((hi << 8) | lo).wrapping_add(1);
    cpu.tick(3);
}

/// BRK - software interrupt. 7 cycles.
///
/// Consumes a padding byte (the return address pushed is BRK + 2), pushes
/// PC high/low and the status byte with B and bit 5 set, sets I, and jumps
/// through the vector at 0xFFFE/0xFFFF. The live B flag is not changed; B
/// exists only in the pushed byte.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.fetch_instruction(); // padding byte
    let pc = cpu.pc;
    cpu.push((pc >> 8) as u8);
    cpu.push(pc as u8);
    let status = cpu.status() | 0b0011_0000;
    cpu.push(status);
    cpu.flag_i = true;
    let lo = cpu.read_byte(0xFFFE) as u16;
    let hi = cpu.read_byte(0xFFFF) as u16;
    cpu.pc = (hi << 8) | lo;
}

/// RTI - return from interrupt. 6 cycles.
///
/// Pulls the status byte (bits 5 and 4 ignored), then PC low and high. No
/// plus-one correction: the pushed PC is resumed exactly.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull();
    cpu.set_status(status);
    let lo = cpu.pull() as u16;
    let hi = cpu.pull() as u16;
    cpu.pc = (hi << 8) | lo;
    cpu.tick(2);
}

/// NOP - no operation, official (0xEA) and the unofficial multi-byte
/// variants.
///
/// The implicit form costs 2 cycles. The addressed forms go through the
/// normal operand fetch and discard the value, so they consume the operand
/// bytes and charge the same cycles as a load of the same mode, including
/// the page-cross penalty on the absolute,X forms.
pub(crate) fn nop<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    match mode {
        AddressingMode::Implicit => cpu.tick(1),
        _ => {
            cpu.fetch_operand(mode);
        }
    }
}
