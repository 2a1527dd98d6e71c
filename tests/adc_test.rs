//! Tests for the ADC (Add with Carry) instruction.
//!
//! Tests cover:
//! - All 8 addressing modes with exact cycle counts
//! - Carry-in participation
//! - Flag updates (C, Z, V, N) including known overflow regression cases
//! - Page crossing penalties

use emu6502::{FlatMemory, MemoryBus, CPU};

const BUDGET: i64 = 100;

/// Helper function to create a CPU with a fixed budget, positioned at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new(), BUDGET);
    cpu.set_pc(0x8000);
    cpu
}

fn consumed(cpu: &CPU<FlatMemory>) -> i64 {
    BUDGET - cpu.cycles()
}

// ========== Basic ADC Operation Tests ==========

#[test]
fn test_adc_immediate_basic() {
    let mut cpu = setup_cpu();

    // ADC #$05 (0x69 0x05)
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x05);

    cpu.set_a(0x10);

    assert!(cpu.step().is_none());

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(consumed(&cpu), 2);
}

#[test]
fn test_adc_adds_carry_in() {
    let mut cpu = setup_cpu();

    // ADC #$05
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x05);

    cpu.set_a(0x10);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x16); // 0x10 + 0x05 + 1
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_carry_and_zero() {
    let mut cpu = setup_cpu();

    // ADC #$FF with A=0x01: wraps to 0x00 with carry out
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0xFF);

    cpu.set_a(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
}

// ========== Overflow Regression Cases ==========

#[test]
fn test_adc_carry_without_overflow() {
    let mut cpu = setup_cpu();

    // 123 + 168 = 291: result 35, carry out, no signed overflow
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 168);

    cpu.set_a(123);

    cpu.step();

    assert_eq!(cpu.a(), 35);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_adc_carry_with_overflow() {
    let mut cpu = setup_cpu();

    // 130 + 140 = 270: two negatives produce a positive, so V is set
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 140);

    cpu.set_a(130);

    cpu.step();

    assert_eq!(cpu.a(), 14);
    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
}

#[test]
fn test_adc_positive_overflow() {
    let mut cpu = setup_cpu();

    // 0x50 + 0x50 = 0xA0: two positives produce a negative
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x50);

    cpu.set_a(0x50);

    cpu.step();

    assert_eq!(cpu.a(), 0xA0);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
}

// ========== Addressing Mode Tests ==========

#[test]
fn test_adc_zero_page() {
    let mut cpu = setup_cpu();

    // ADC $42 (0x65)
    cpu.memory_mut().write(0x8000, 0x65);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.memory_mut().write(0x0042, 0x07);

    cpu.set_a(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x08);
    assert_eq!(consumed(&cpu), 3);
}

#[test]
fn test_adc_zero_page_x_wraps() {
    let mut cpu = setup_cpu();

    // ADC $F0,X (0x75) with X=0x20: wraps to 0x10
    cpu.memory_mut().write(0x8000, 0x75);
    cpu.memory_mut().write(0x8001, 0xF0);
    cpu.memory_mut().write(0x0010, 0x03);

    cpu.set_a(0x01);
    cpu.set_x(0x20);

    cpu.step();

    assert_eq!(cpu.a(), 0x04);
    assert_eq!(consumed(&cpu), 4);
}

#[test]
fn test_adc_absolute() {
    let mut cpu = setup_cpu();

    // ADC $1234 (0x6D)
    cpu.memory_mut().write(0x8000, 0x6D);
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1234, 0x09);

    cpu.set_a(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x0A);
    assert_eq!(consumed(&cpu), 4);
}

#[test]
fn test_adc_absolute_x_no_page_cross() {
    let mut cpu = setup_cpu();

    // ADC $1200,X (0x7D) with X=0x10
    cpu.memory_mut().write(0x8000, 0x7D);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1210, 0x02);

    cpu.set_a(0x01);
    cpu.set_x(0x10);

    cpu.step();

    assert_eq!(cpu.a(), 0x03);
    assert_eq!(consumed(&cpu), 4);
}

#[test]
fn test_adc_absolute_x_page_cross_penalty() {
    let mut cpu = setup_cpu();

    // ADC $12FF,X (0x7D) with X=0x01 crosses into page 0x13
    cpu.memory_mut().write(0x8000, 0x7D);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1300, 0x02);

    cpu.set_a(0x01);
    cpu.set_x(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x03);
    assert_eq!(consumed(&cpu), 5);
}

#[test]
fn test_adc_indirect_x() {
    let mut cpu = setup_cpu();

    // ADC ($20,X) (0x61) with X=0x04: pointer at 0x24 -> 0x3000
    cpu.memory_mut().write(0x8000, 0x61);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.memory_mut().write(0x0024, 0x00);
    cpu.memory_mut().write(0x0025, 0x30);
    cpu.memory_mut().write(0x3000, 0x05);

    cpu.set_a(0x01);
    cpu.set_x(0x04);

    cpu.step();

    assert_eq!(cpu.a(), 0x06);
    assert_eq!(consumed(&cpu), 6);
}

#[test]
fn test_adc_indirect_y() {
    let mut cpu = setup_cpu();

    // ADC ($20),Y (0x71) with Y=0x10: base 0x3000 -> 0x3010, no cross
    cpu.memory_mut().write(0x8000, 0x71);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.memory_mut().write(0x0020, 0x00);
    cpu.memory_mut().write(0x0021, 0x30);
    cpu.memory_mut().write(0x3010, 0x05);

    cpu.set_a(0x01);
    cpu.set_y(0x10);

    cpu.step();

    assert_eq!(cpu.a(), 0x06);
    assert_eq!(consumed(&cpu), 5);
}

#[test]
fn test_adc_indirect_y_page_cross_penalty() {
    let mut cpu = setup_cpu();

    // ADC ($20),Y with base 0x30FF and Y=0x01 crosses into page 0x31
    cpu.memory_mut().write(0x8000, 0x71);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.memory_mut().write(0x0020, 0xFF);
    cpu.memory_mut().write(0x0021, 0x30);
    cpu.memory_mut().write(0x3100, 0x05);

    cpu.set_a(0x01);
    cpu.set_y(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x06);
    assert_eq!(consumed(&cpu), 6);
}
