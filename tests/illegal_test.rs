//! Tests for the unofficial opcodes: the RMW combos (SLO, RLA, SRE, RRA,
//! DCP, ISC), the loads/stores (LAX, SAX), the immediate-mode group (ANC,
//! ALR, ARR, ANE, LXA, SBX), and the unstable stores (SHA, SHX, SHY, TAS)
//! plus LAS.

use emu6502::{FlatMemory, MemoryBus, CPU};

const BUDGET: i64 = 100;

fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new(), BUDGET);
    cpu.set_pc(0x8000);
    cpu
}

fn consumed(cpu: &CPU<FlatMemory>) -> i64 {
    BUDGET - cpu.cycles()
}

// ========== Read-Modify-Write Combos ==========

#[test]
fn test_slo_shifts_then_ors() {
    let mut cpu = setup_cpu();

    // SLO $42 (0x07)
    cpu.memory_mut().write(0x8000, 0x07);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.memory_mut().write(0x0042, 0b1100_0001);

    cpu.set_a(0x01);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0042), 0b1000_0010); // shifted and written back
    assert_eq!(cpu.a(), 0b1000_0011); // ORed into A
    assert!(cpu.flag_c()); // old bit 7
    assert!(cpu.flag_n());
    assert_eq!(consumed(&cpu), 5);
}

#[test]
fn test_rla_rotates_then_ands() {
    let mut cpu = setup_cpu();

    // RLA $42 (0x27) with C=1
    cpu.memory_mut().write(0x8000, 0x27);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.memory_mut().write(0x0042, 0b0100_0000);

    cpu.set_a(0xFF);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0042), 0b1000_0001);
    assert_eq!(cpu.a(), 0b1000_0001);
    assert!(!cpu.flag_c());
}

#[test]
fn test_sre_shifts_then_eors() {
    let mut cpu = setup_cpu();

    // SRE $42 (0x47)
    cpu.memory_mut().write(0x8000, 0x47);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.memory_mut().write(0x0042, 0b0000_0011);

    cpu.set_a(0xFF);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0042), 0b0000_0001);
    assert_eq!(cpu.a(), 0xFE);
    assert!(cpu.flag_c()); // old bit 0
}

#[test]
fn test_rra_rotates_then_adds_with_rotated_carry() {
    let mut cpu = setup_cpu();

    // RRA $42 (0x67): ROR produces carry 1 from bit 0, ADC consumes it
    cpu.memory_mut().write(0x8000, 0x67);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.memory_mut().write(0x0042, 0x03);

    cpu.set_a(0x10);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0042), 0x01);
    assert_eq!(cpu.a(), 0x12); // 0x10 + 0x01 + carry from the rotate
}

#[test]
fn test_dcp_decrements_then_compares() {
    let mut cpu = setup_cpu();

    // DCP $42 (0xC7)
    cpu.memory_mut().write(0x8000, 0xC7);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.memory_mut().write(0x0042, 0x11);

    cpu.set_a(0x10);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0042), 0x10);
    assert!(cpu.flag_z()); // A equals the decremented value
    assert!(cpu.flag_c());
    assert_eq!(cpu.a(), 0x10);
    assert_eq!(consumed(&cpu), 5);
}

#[test]
fn test_isc_increments_then_subtracts() {
    let mut cpu = setup_cpu();

    // ISC $42 (0xE7) with C=1
    cpu.memory_mut().write(0x8000, 0xE7);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.memory_mut().write(0x0042, 0x04);

    cpu.set_a(0x10);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0042), 0x05);
    assert_eq!(cpu.a(), 0x0B); // 0x10 - 0x05
    assert!(cpu.flag_c());
}

// ========== LAX and SAX ==========

#[test]
fn test_lax_loads_both_registers() {
    let mut cpu = setup_cpu();

    // LAX $42 (0xA7)
    cpu.memory_mut().write(0x8000, 0xA7);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.memory_mut().write(0x0042, 0x80);

    cpu.step();

    assert_eq!(cpu.a(), 0x80);
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(consumed(&cpu), 3);
}

#[test]
fn test_sax_stores_a_and_x() {
    let mut cpu = setup_cpu();

    // SAX $42 (0x87)
    cpu.memory_mut().write(0x8000, 0x87);
    cpu.memory_mut().write(0x8001, 0x42);

    cpu.set_a(0b1100_1100);
    cpu.set_x(0b1010_1010);
    let before = cpu.status();

    cpu.step();

    assert_eq!(cpu.memory().read(0x0042), 0b1000_1000);
    assert_eq!(cpu.status(), before); // no flags
    assert_eq!(consumed(&cpu), 3);
}

// ========== Immediate-Mode Group ==========

#[test]
fn test_anc_copies_n_into_c() {
    let mut cpu = setup_cpu();

    // ANC #$FF (0x0B)
    cpu.memory_mut().write(0x8000, 0x0B);
    cpu.memory_mut().write(0x8001, 0xFF);

    cpu.set_a(0x80);

    cpu.step();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(cpu.flag_c());
    assert_eq!(consumed(&cpu), 2);
}

#[test]
fn test_alr_ands_then_shifts_right() {
    let mut cpu = setup_cpu();

    // ALR #$0F (0x4B)
    cpu.memory_mut().write(0x8000, 0x4B);
    cpu.memory_mut().write(0x8001, 0x0F);

    cpu.set_a(0xF7);

    cpu.step();

    assert_eq!(cpu.a(), 0x03); // (0xF7 & 0x0F) >> 1
    assert!(cpu.flag_c()); // bit 0 of the AND result
}

#[test]
fn test_arr_flags_from_rotated_result() {
    let mut cpu = setup_cpu();

    // ARR #$FF (0x6B) with C=0: result 0x7F, C from bit 6, V from bit6^bit5
    cpu.memory_mut().write(0x8000, 0x6B);
    cpu.memory_mut().write(0x8001, 0xFF);

    cpu.set_a(0xFF);

    cpu.step();

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
}

#[test]
fn test_ane_uses_magic_constant() {
    let mut cpu = setup_cpu();

    // ANE #$FF (0x8B): A = (A | 0xEE) & X & imm
    cpu.memory_mut().write(0x8000, 0x8B);
    cpu.memory_mut().write(0x8001, 0xFF);

    cpu.set_a(0x00);
    cpu.set_x(0xFF);

    cpu.step();

    assert_eq!(cpu.a(), 0xEE);
    assert!(cpu.flag_n());
}

#[test]
fn test_lxa_loads_both_with_magic() {
    let mut cpu = setup_cpu();

    // LXA #$0F (0xAB): A = X = (A | 0xEE) & imm
    cpu.memory_mut().write(0x8000, 0xAB);
    cpu.memory_mut().write(0x8001, 0x0F);

    cpu.set_a(0x00);

    cpu.step();

    assert_eq!(cpu.a(), 0x0E);
    assert_eq!(cpu.x(), 0x0E);
}

#[test]
fn test_sbx_subtracts_from_a_and_x() {
    let mut cpu = setup_cpu();

    // SBX #$05 (0xCB): X = (A & X) - imm, compare-style flags
    cpu.memory_mut().write(0x8000, 0xCB);
    cpu.memory_mut().write(0x8001, 0x05);

    cpu.set_a(0xFF);
    cpu.set_x(0x0F);

    cpu.step();

    assert_eq!(cpu.x(), 0x0A);
    assert_eq!(cpu.a(), 0xFF); // A unchanged
    assert!(cpu.flag_c());
}

// ========== Unstable Stores and LAS ==========

#[test]
fn test_shy_stores_y_and_high_plus_one() {
    let mut cpu = setup_cpu();

    // SHY $12F0,X (0x9C) with X=0: value = Y & 0x13
    cpu.memory_mut().write(0x8000, 0x9C);
    cpu.memory_mut().write(0x8001, 0xF0);
    cpu.memory_mut().write(0x8002, 0x12);

    cpu.set_y(0xFF);

    cpu.step();

    assert_eq!(cpu.memory().read(0x12F0), 0x13);
    assert_eq!(consumed(&cpu), 4);
}

#[test]
fn test_shx_stores_x_and_high_plus_one() {
    let mut cpu = setup_cpu();

    // SHX $1200,Y (0x9E) with Y=0x10: value = X & 0x13
    cpu.memory_mut().write(0x8000, 0x9E);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x12);

    cpu.set_x(0xFF);
    cpu.set_y(0x10);

    cpu.step();

    assert_eq!(cpu.memory().read(0x1210), 0x13);
}

#[test]
fn test_sha_indirect_y() {
    let mut cpu = setup_cpu();

    // SHA ($20),Y (0x93) with Y=0x10, base 0x3000: value = A & X & 0x31
    cpu.memory_mut().write(0x8000, 0x93);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.memory_mut().write(0x0020, 0x00);
    cpu.memory_mut().write(0x0021, 0x30);

    cpu.set_a(0xFF);
    cpu.set_x(0x33);
    cpu.set_y(0x10);

    cpu.step();

    assert_eq!(cpu.memory().read(0x3010), 0x31);
    assert_eq!(consumed(&cpu), 6);
}

#[test]
fn test_tas_sets_sp_and_stores() {
    let mut cpu = setup_cpu();

    // TAS $1200,Y (0x9B) with Y=0: SP = A & X, store SP & 0x13
    cpu.memory_mut().write(0x8000, 0x9B);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x12);

    cpu.set_a(0xFF);
    cpu.set_x(0x37);

    cpu.step();

    assert_eq!(cpu.sp(), 0x0137);
    assert_eq!(cpu.memory().read(0x1200), 0x37 & 0x13);
}

#[test]
fn test_las_ands_memory_with_sp() {
    let mut cpu = setup_cpu();

    // LAS $1200,Y (0xBB) with Y=0: A = X = SP = mem & SP_low
    cpu.memory_mut().write(0x8000, 0xBB);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1200, 0xCC);

    cpu.set_sp(0x01F0);

    cpu.step();

    assert_eq!(cpu.a(), 0xC0);
    assert_eq!(cpu.x(), 0xC0);
    assert_eq!(cpu.sp(), 0x01C0);
    assert!(cpu.flag_n());
    assert_eq!(consumed(&cpu), 4);
}
