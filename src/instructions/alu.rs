//! Arithmetic and logical instructions: ADC, SBC, AND, ORA, EOR, the
//! compares (CMP, CPX, CPY), and BIT.

use crate::{AddressingMode, MemoryBus, CPU};

/// ADC - Add with Carry.
///
/// A = A + operand + C. Carry out when the unsigned sum exceeds 0xFF;
/// overflow when the operands agree in sign and the result disagrees.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.fetch_operand(mode);
    add_with_carry(cpu, value);
}

/// SBC - Subtract with Carry.
///
/// Subtraction is addition of the one's complement: A - M - (1-C) is exactly
/// A + !M + C, so the carry acts as an inverted borrow and the flag logic is
/// shared with ADC.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.fetch_operand(mode);
    add_with_carry(cpu, value ^ 0xFF);
}

/// Shared ADC/SBC core, also used by the unofficial RRA and ISC.
pub(crate) fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let sum = a as u16 + value as u16 + cpu.flag_c as u16;
    let result = sum as u8;

    cpu.flag_c = sum > 0xFF;
    cpu.flag_v = (!(a ^ value) & (a ^ result) & 0x80) != 0;
    cpu.a = result;
    cpu.set_nz(result);
}

/// AND - bitwise AND into the accumulator.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.fetch_operand(mode);
    cpu.a &= value;
    let result = cpu.a;
    cpu.set_nz(result);
}

/// ORA - bitwise OR into the accumulator.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.fetch_operand(mode);
    cpu.a |= value;
    let result = cpu.a;
    cpu.set_nz(result);
}

/// EOR - bitwise exclusive OR into the accumulator.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.fetch_operand(mode);
    cpu.a ^= value;
    let result = cpu.a;
    cpu.set_nz(result);
}

/// CMP/CPX/CPY - compare a register against the operand.
///
/// Computes reg - operand without storing it: C = reg >= operand (unsigned),
/// Z = equality, N = bit 7 of the difference.
pub(crate) fn compare<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, reg: u8) {
    let value = cpu.fetch_operand(mode);
    compare_value(cpu, reg, value);
}

/// Flag core shared with the unofficial DCP and SBX.
pub(crate) fn compare_value<M: MemoryBus>(cpu: &mut CPU<M>, reg: u8, value: u8) {
    let diff = reg.wrapping_sub(value);
    cpu.flag_c = reg >= value;
    cpu.flag_z = reg == value;
    cpu.flag_n = diff & 0x80 != 0;
}

/// BIT - test bits in memory against the accumulator.
///
/// N and V are copied from bits 7 and 6 of the operand; Z reflects
/// A AND operand. The accumulator is not modified.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.fetch_operand(mode);
    cpu.flag_n = value & 0b1000_0000 != 0;
    cpu.flag_v = value & 0b0100_0000 != 0;
    cpu.flag_z = cpu.a & value == 0;
}
