//! # Addressing Modes
//!
//! The 13 addressing modes of the 6502. Each mode determines how many operand
//! bytes an instruction fetches and how the effective operand or address is
//! derived from them; the CPU's resolvers charge the cycle cost of each step
//! as it happens.

/// 6502 addressing mode enumeration.
///
/// Operand widths:
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by the instruction (CLC, RTS, NOP).
    Implicit,

    /// Operates directly on the accumulator (ASL A, LSR A).
    Accumulator,

    /// 8-bit constant in the instruction stream (LDA #$10).
    Immediate,

    /// 8-bit address into the zero page (LDA $80).
    ZeroPage,

    /// Zero page address indexed by X, wrapping within the zero page.
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within the zero page.
    ZeroPageY,

    /// Signed 8-bit displacement for branch instructions.
    Relative,

    /// Full 16-bit little-endian address (JMP $1234).
    Absolute,

    /// 16-bit address indexed by X; +1 cycle when the index crosses a page.
    AbsoluteX,

    /// 16-bit address indexed by Y; +1 cycle when the index crosses a page.
    AbsoluteY,

    /// Jump through a 16-bit pointer; JMP only. Reproduces the hardware
    /// page-wrap bug when the pointer's low byte is 0xFF.
    Indirect,

    /// Indexed indirect: the zero-page operand plus X names a pointer, which
    /// is dereferenced. The pointer fetch wraps within the zero page.
    IndirectX,

    /// Indirect indexed: the zero-page operand names a pointer, Y is added to
    /// the dereferenced base; +1 cycle when the add crosses a page.
    IndirectY,
}
