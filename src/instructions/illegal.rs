//! Unofficial (undocumented) opcodes.
//!
//! Most are combinations of two official operations sharing one
//! read-modify-write or operand fetch, so the handlers here compose the same
//! cores the official instructions use. The "unstable" stores (SHA, SHX,
//! SHY, TAS) AND the stored value with the high byte of the target address
//! plus one; ANE and LXA use the conventional 0xEE magic constant.

use crate::instructions::{alu, inc_dec, shifts};
use crate::{AddressingMode, MemoryBus, CPU};

/// Magic constant for the ANE/LXA bus interaction. Varies between physical
/// chips; 0xEE is the commonly emulated value.
const ANE_MAGIC: u8 = 0xEE;

/// SLO - shift left then OR: ASL on memory, result ORed into A.
pub(crate) fn slo<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = cpu.read_modify_write(mode, shifts::asl_value);
    cpu.a |= result;
    let a = cpu.a;
    cpu.set_nz(a);
}

/// RLA - rotate left then AND: ROL on memory, result ANDed into A.
pub(crate) fn rla<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = cpu.read_modify_write(mode, shifts::rol_value);
    cpu.a &= result;
    let a = cpu.a;
    cpu.set_nz(a);
}

/// SRE - shift right then EOR: LSR on memory, result EORed into A.
pub(crate) fn sre<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = cpu.read_modify_write(mode, shifts::lsr_value);
    cpu.a ^= result;
    let a = cpu.a;
    cpu.set_nz(a);
}

/// RRA - rotate right then add: ROR on memory, result added to A with the
/// carry the rotate produced.
pub(crate) fn rra<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = cpu.read_modify_write(mode, shifts::ror_value);
    alu::add_with_carry(cpu, result);
}

/// DCP - decrement then compare: DEC on memory, result compared against A.
pub(crate) fn dcp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = cpu.read_modify_write(mode, inc_dec::dec_value);
    let a = cpu.a;
    alu::compare_value(cpu, a, result);
}

/// ISC - increment then subtract: INC on memory, result subtracted from A.
pub(crate) fn isc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = cpu.read_modify_write(mode, inc_dec::inc_value);
    alu::add_with_carry(cpu, result ^ 0xFF);
}

/// SAX - store A AND X. No flags affected.
pub(crate) fn sax<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.fetch_address(mode);
    let value = cpu.a & cpu.x;
    cpu.write_byte(addr, value);
}

/// LAX - load A and X with the same value.
pub(crate) fn lax<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.fetch_operand(mode);
    cpu.a = value;
    cpu.x = value;
    cpu.set_nz(value);
}

/// ANC - AND immediate, then copy N into C.
pub(crate) fn anc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand(AddressingMode::Immediate);
    cpu.a &= value;
    let a = cpu.a;
    cpu.set_nz(a);
    cpu.flag_c = a & 0x80 != 0;
}

/// ALR - AND immediate, then LSR the accumulator.
pub(crate) fn alr<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand(AddressingMode::Immediate);
    let and = cpu.a & value;
    cpu.flag_c = and & 0x01 != 0;
    cpu.a = and >> 1;
    let a = cpu.a;
    cpu.set_nz(a);
}

/// ARR - AND immediate, then ROR the accumulator, with C and V taken from
/// the rotated result: C from bit 6, V from bit 6 XOR bit 5.
pub(crate) fn arr<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand(AddressingMode::Immediate);
    let and = cpu.a & value;
    let result = (and >> 1) | ((cpu.flag_c as u8) << 7);
    cpu.a = result;
    cpu.set_nz(result);
    cpu.flag_c = result & 0x40 != 0;
    cpu.flag_v = ((result >> 6) ^ (result >> 5)) & 0x01 != 0;
}

/// ANE - (A OR magic) AND X AND immediate into A.
pub(crate) fn ane<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand(AddressingMode::Immediate);
    let result = (cpu.a | ANE_MAGIC) & cpu.x & value;
    cpu.a = result;
    cpu.set_nz(result);
}

/// LXA - (A OR magic) AND immediate into both A and X.
pub(crate) fn lxa<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand(AddressingMode::Immediate);
    let result = (cpu.a | ANE_MAGIC) & value;
    cpu.a = result;
    cpu.x = result;
    cpu.set_nz(result);
}

/// SBX - (A AND X) minus immediate into X, with compare-style flags.
pub(crate) fn sbx<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand(AddressingMode::Immediate);
    let ax = cpu.a & cpu.x;
    alu::compare_value(cpu, ax, value);
    cpu.x = ax.wrapping_sub(value);
}

/// LAS - memory AND SP into A, X, and SP.
pub(crate) fn las<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.fetch_operand(mode);
    let result = value & (cpu.sp & 0x00FF) as u8;
    cpu.a = result;
    cpu.x = result;
    cpu.sp = 0x0100 | result as u16;
    cpu.set_nz(result);
}

/// SHA - store A AND X AND (target high byte + 1).
pub(crate) fn sha<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.fetch_address(mode);
    let value = cpu.a & cpu.x & high_plus_one(addr);
    cpu.write_byte(addr, value);
}

/// SHX - store X AND (target high byte + 1).
pub(crate) fn shx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.fetch_address(mode);
    let value = cpu.x & high_plus_one(addr);
    cpu.write_byte(addr, value);
}

/// SHY - store Y AND (target high byte + 1).
pub(crate) fn shy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.fetch_address(mode);
    let value = cpu.y & high_plus_one(addr);
    cpu.write_byte(addr, value);
}

/// TAS - SP = A AND X, then store SP AND (target high byte + 1).
pub(crate) fn tas<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.fetch_address(mode);
    let ax = cpu.a & cpu.x;
    cpu.sp = 0x0100 | ax as u16;
    let value = ax & high_plus_one(addr);
    cpu.write_byte(addr, value);
}

fn high_plus_one(addr: u16) -> u8 {
    ((addr >> 8) as u8).wrapping_add(1)
}
