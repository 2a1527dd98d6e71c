//! Tests for the stack instructions (PHA, PHP, PLA, PLP) and the
//! empty-ascending stack convention: SP names the next free slot in page 1,
//! push writes then steps up, pull steps down then reads.

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

#[test]
fn test_pha_writes_at_sp_then_steps_up() {
    let mut cpu = setup_cpu();

    // PHA (0x48)
    cpu.memory_mut().write(0x8000, 0x48);

    cpu.set_a(0x42);

    assert_eq!(cpu.sp(), 0x0100);
    cpu.step();

    assert_eq!(cpu.memory().read(0x0100), 0x42);
    assert_eq!(cpu.sp(), 0x0101);
    assert_eq!(consumed(&cpu), 3);
}

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu();

    // PHA; LDA #$00; PLA
    cpu.memory_mut().write(0x8000, 0x48);
    cpu.memory_mut().write(0x8001, 0xA9);
    cpu.memory_mut().write(0x8002, 0x00);
    cpu.memory_mut().write(0x8003, 0x68);

    cpu.set_a(0x99);

    cpu.step();
    cpu.step();
    assert_eq!(cpu.a(), 0x00);

    cpu.step();
    assert_eq!(cpu.a(), 0x99);
    assert!(cpu.flag_n());
    assert_eq!(cpu.sp(), 0x0100);
    assert_eq!(consumed(&cpu), 3 + 2 + 4);
}

#[test]
fn test_php_pushes_b_and_bit5() {
    let mut cpu = setup_cpu();

    // PHP (0x08) with only carry set
    cpu.memory_mut().write(0x8000, 0x08);

    cpu.set_flag_c(true);

    cpu.step();

    // Pushed byte: bit 5 and B forced on, plus C
    assert_eq!(cpu.memory().read(0x0100), 0b0011_0001);
    assert!(!cpu.flag_b()); // live flag unchanged
    assert_eq!(consumed(&cpu), 3);
}

#[test]
fn test_plp_ignores_b_and_bit5() {
    let mut cpu = setup_cpu();

    // PLP (0x28) pulling a byte with B and bit 5 set
    cpu.memory_mut().write(0x8000, 0x28);
    cpu.memory_mut().write(0x0100, 0b1011_0011);
    cpu.set_sp(0x0101);

    cpu.step();

    assert!(cpu.flag_n());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_b()); // bit 4 in the pulled byte is discarded
    assert!(!cpu.flag_v());
    assert_eq!(consumed(&cpu), 4);
}

#[test]
fn test_php_plp_round_trip() {
    let mut cpu = setup_cpu();

    // PHP; SEC-era flags scrambled in between; PLP
    cpu.memory_mut().write(0x8000, 0x08);
    cpu.memory_mut().write(0x8001, 0x28);

    cpu.set_flag_n(true);
    cpu.set_flag_v(true);
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);
    let before = cpu.status();

    cpu.step();
    cpu.step();

    assert_eq!(cpu.status(), before);
    assert_eq!(cpu.sp(), 0x0100);
}

#[test]
fn test_pla_sets_zero_flag() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x68);
    cpu.memory_mut().write(0x0100, 0x00);
    cpu.set_sp(0x0101);

    cpu.set_a(0xFF);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_stack_wraps_within_page_one() {
    let mut cpu = setup_cpu();

    // PHA at the top of the page wraps SP back to 0x0100
    cpu.memory_mut().write(0x8000, 0x48);

    cpu.set_sp(0x01FF);
    cpu.set_a(0xAB);

    cpu.step();

    assert_eq!(cpu.memory().read(0x01FF), 0xAB);
    assert_eq!(cpu.sp(), 0x0100);
}
