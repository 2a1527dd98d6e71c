//! # Opcode Metadata Table
//!
//! The complete 256-entry opcode table: the single source of truth mapping
//! every opcode byte to its operation, addressing mode, and fixed cycle
//! cost.
//!
//! The table covers the 151 documented NMOS 6502 instructions, the commonly
//! emulated unofficial opcodes (SLO, RLA, SRE, RRA, SAX, LAX, DCP, ISC, ANC,
//! ALR, ARR, ANE, LXA, SBX, LAS, TAS, the SHA/SHX/SHY unstable stores, and
//! USBC), the multi-byte NOP variants, and the twelve JAM halt opcodes.
//! Every byte 0x00-0xFF maps to an entry; a `None` entry would be an
//! undefined opcode, which terminates execution.
//!
//! Note that `base_cycles` documents the fixed cost this engine charges,
//! excluding page-cross penalties; at run time the CPU counts cycles per
//! primitive access, so the table value is reference metadata, not an
//! execution input. Indexed absolute stores and read-modify-writes resolve
//! their address in two plain fetches, so those forms run one cycle under
//! the hardware datasheet figure.

use crate::addressing::AddressingMode;

/// Semantic operation tag, decoupled from addressing mode.
///
/// Dispatch matches on this tag and hands the table's addressing mode to a
/// generic handler, which collapses the ~150-case opcode space into a small
/// number of handler shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Operation {
    // Official instructions
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny,
    Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror,
    Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs,
    Tya,
    // Unofficial instructions
    Alr, Anc, Ane, Arr, Dcp, Isc, Las, Lax, Lxa, Rla, Rra, Sax, Sbx,
    Sha, Shx, Shy, Slo, Sre, Tas, Usbc,
    // Halt opcodes
    Jam,
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// // LDA immediate (0xA9)
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic ("LDA", "SLO", "JAM", ...).
    pub mnemonic: &'static str,

    /// Semantic operation executed for this opcode.
    pub operation: Operation,

    /// How the operand bytes are interpreted.
    pub addressing_mode: AddressingMode,

    /// Fixed cycle cost, excluding page-crossing penalties.
    pub base_cycles: u8,
}

const fn op(
    mnemonic: &'static str,
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> Option<OpcodeMetadata> {
    Some(OpcodeMetadata {
        mnemonic,
        operation,
        addressing_mode,
        base_cycles,
    })
}

use AddressingMode as Am;
use Operation as Op;

/// Complete opcode dispatch table indexed by opcode byte value.
///
/// Immutable after definition. `None` marks an undefined opcode: fetching one
/// forces the cycle budget to zero and ends execution. The full NMOS matrix
/// leaves no byte undefined, so with this table the JAM set is the practical
/// way to hit a designed halt.
#[rustfmt::skip]
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = [
    // 0x00 - 0x0F
    op("BRK", Op::Brk, Am::Implicit, 7),
    op("ORA", Op::Ora, Am::IndirectX, 6),
    op("JAM", Op::Jam, Am::Implicit, 0),
    op("SLO", Op::Slo, Am::IndirectX, 8),
    op("NOP", Op::Nop, Am::ZeroPage, 3),
    op("ORA", Op::Ora, Am::ZeroPage, 3),
    op("ASL", Op::Asl, Am::ZeroPage, 5),
    op("SLO", Op::Slo, Am::ZeroPage, 5),
    op("PHP", Op::Php, Am::Implicit, 3),
    op("ORA", Op::Ora, Am::Immediate, 2),
    op("ASL", Op::Asl, Am::Accumulator, 2),
    op("ANC", Op::Anc, Am::Immediate, 2),
    op("NOP", Op::Nop, Am::Absolute, 4),
    op("ORA", Op::Ora, Am::Absolute, 4),
    op("ASL", Op::Asl, Am::Absolute, 6),
    op("SLO", Op::Slo, Am::Absolute, 6),
    // 0x10 - 0x1F
    op("BPL", Op::Bpl, Am::Relative, 2),
    op("ORA", Op::Ora, Am::IndirectY, 5),
    op("JAM", Op::Jam, Am::Implicit, 0),
    op("SLO", Op::Slo, Am::IndirectY, 8),
    op("NOP", Op::Nop, Am::ZeroPageX, 4),
    op("ORA", Op::Ora, Am::ZeroPageX, 4),
    op("ASL", Op::Asl, Am::ZeroPageX, 6),
    op("SLO", Op::Slo, Am::ZeroPageX, 6),
    op("CLC", Op::Clc, Am::Implicit, 2),
    op("ORA", Op::Ora, Am::AbsoluteY, 4),
    op("NOP", Op::Nop, Am::Implicit, 2),
    op("SLO", Op::Slo, Am::AbsoluteY, 6),
    op("NOP", Op::Nop, Am::AbsoluteX, 4),
    op("ORA", Op::Ora, Am::AbsoluteX, 4),
    op("ASL", Op::Asl, Am::AbsoluteX, 6),
    op("SLO", Op::Slo, Am::AbsoluteX, 6),
    // 0x20 - 0x2F
    op("JSR", Op::Jsr, Am::Absolute, 6),
    op("AND", Op::And, Am::IndirectX, 6),
    op("JAM", Op::Jam, Am::Implicit, 0),
    op("RLA", Op::Rla, Am::IndirectX, 8),
    op("BIT", Op::Bit, Am::ZeroPage, 3),
    op("AND", Op::And, Am::ZeroPage, 3),
    op("ROL", Op::Rol, Am::ZeroPage, 5),
    op("RLA", Op::Rla, Am::ZeroPage, 5),
    op("PLP", Op::Plp, Am::Implicit, 4),
    op("AND", Op::And, Am::Immediate, 2),
    op("ROL", Op::Rol, Am::Accumulator, 2),
    op("ANC", Op::Anc, Am::Immediate, 2),
    op("BIT", Op::Bit, Am::Absolute, 4),
    op("AND", Op::And, Am::Absolute, 4),
    op("ROL", Op::Rol, Am::Absolute, 6),
    op("RLA", Op::Rla, Am::Absolute, 6),
    // 0x30 - 0x3F
    op("BMI", Op::Bmi, Am::Relative, 2),
    op("AND", Op::And, Am::IndirectY, 5),
    op("JAM", Op::Jam, Am::Implicit, 0),
    op("RLA", Op::Rla, Am::IndirectY, 8),
    op("NOP", Op::Nop, Am::ZeroPageX, 4),
    op("AND", Op::And, Am::ZeroPageX, 4),
    op("ROL", Op::Rol, Am::ZeroPageX, 6),
    op("RLA", Op::Rla, Am::ZeroPageX, 6),
    op("SEC", Op::Sec, Am::Implicit, 2),
    op("AND", Op::And, Am::AbsoluteY, 4),
    op("NOP", Op::Nop, Am::Implicit, 2),
    op("RLA", Op::Rla, Am::AbsoluteY, 6),
    op("NOP", Op::Nop, Am::AbsoluteX, 4),
    op("AND", Op::And, Am::AbsoluteX, 4),
    op("ROL", Op::Rol, Am::AbsoluteX, 6),
    op("RLA", Op::Rla, Am::AbsoluteX, 6),
    // 0x40 - 0x4F
    op("RTI", Op::Rti, Am::Implicit, 6),
    op("EOR", Op::Eor, Am::IndirectX, 6),
    op("JAM", Op::Jam, Am::Implicit, 0),
    op("SRE", Op::Sre, Am::IndirectX, 8),
    op("NOP", Op::Nop, Am::ZeroPage, 3),
    op("EOR", Op::Eor, Am::ZeroPage, 3),
    op("LSR", Op::Lsr, Am::ZeroPage, 5),
    op("SRE", Op::Sre, Am::ZeroPage, 5),
    op("PHA", Op::Pha, Am::Implicit, 3),
    op("EOR", Op::Eor, Am::Immediate, 2),
    op("LSR", Op::Lsr, Am::Accumulator, 2),
    op("ALR", Op::Alr, Am::Immediate, 2),
    op("JMP", Op::Jmp, Am::Absolute, 3),
    op("EOR", Op::Eor, Am::Absolute, 4),
    op("LSR", Op::Lsr, Am::Absolute, 6),
    op("SRE", Op::Sre, Am::Absolute, 6),
    // 0x50 - 0x5F
    op("BVC", Op::Bvc, Am::Relative, 2),
    op("EOR", Op::Eor, Am::IndirectY, 5),
    op("JAM", Op::Jam, Am::Implicit, 0),
    op("SRE", Op::Sre, Am::IndirectY, 8),
    op("NOP", Op::Nop, Am::ZeroPageX, 4),
    op("EOR", Op::Eor, Am::ZeroPageX, 4),
    op("LSR", Op::Lsr, Am::ZeroPageX, 6),
    op("SRE", Op::Sre, Am::ZeroPageX, 6),
    op("CLI", Op::Cli, Am::Implicit, 2),
    op("EOR", Op::Eor, Am::AbsoluteY, 4),
    op("NOP", Op::Nop, Am::Implicit, 2),
    op("SRE", Op::Sre, Am::AbsoluteY, 6),
    op("NOP", Op::Nop, Am::AbsoluteX, 4),
    op("EOR", Op::Eor, Am::AbsoluteX, 4),
    op("LSR", Op::Lsr, Am::AbsoluteX, 6),
    op("SRE", Op::Sre, Am::AbsoluteX, 6),
    // 0x60 - 0x6F
    op("RTS", Op::Rts, Am::Implicit, 6),
    op("ADC", Op::Adc, Am::IndirectX, 6),
    op("JAM", Op::Jam, Am::Implicit, 0),
    op("RRA", Op::Rra, Am::IndirectX, 8),
    op("NOP", Op::Nop, Am::ZeroPage, 3),
    op("ADC", Op::Adc, Am::ZeroPage, 3),
    op("ROR", Op::Ror, Am::ZeroPage, 5),
    op("RRA", Op::Rra, Am::ZeroPage, 5),
    op("PLA", Op::Pla, Am::Implicit, 4),
    op("ADC", Op::Adc, Am::Immediate, 2),
    op("ROR", Op::Ror, Am::Accumulator, 2),
    op("ARR", Op::Arr, Am::Immediate, 2),
    op("JMP", Op::Jmp, Am::Indirect, 5),
    op("ADC", Op::Adc, Am::Absolute, 4),
    op("ROR", Op::Ror, Am::Absolute, 6),
    op("RRA", Op::Rra, Am::Absolute, 6),
    // 0x70 - 0x7F
    op("BVS", Op::Bvs, Am::Relative, 2),
    op("ADC", Op::Adc, Am::IndirectY, 5),
    op("JAM", Op::Jam, Am::Implicit, 0),
    op("RRA", Op::Rra, Am::IndirectY, 8),
    op("NOP", Op::Nop, Am::ZeroPageX, 4),
    op("ADC", Op::Adc, Am::ZeroPageX, 4),
    op("ROR", Op::Ror, Am::ZeroPageX, 6),
    op("RRA", Op::Rra, Am::ZeroPageX, 6),
    op("SEI", Op::Sei, Am::Implicit, 2),
    op("ADC", Op::Adc, Am::AbsoluteY, 4),
    op("NOP", Op::Nop, Am::Implicit, 2),
    op("RRA", Op::Rra, Am::AbsoluteY, 6),
    op("NOP", Op::Nop, Am::AbsoluteX, 4),
    op("ADC", Op::Adc, Am::AbsoluteX, 4),
    op("ROR", Op::Ror, Am::AbsoluteX, 6),
    op("RRA", Op::Rra, Am::AbsoluteX, 6),
    // 0x80 - 0x8F
    op("NOP", Op::Nop, Am::Immediate, 2),
    op("STA", Op::Sta, Am::IndirectX, 6),
    op("NOP", Op::Nop, Am::Immediate, 2),
    op("SAX", Op::Sax, Am::IndirectX, 6),
    op("STY", Op::Sty, Am::ZeroPage, 3),
    op("STA", Op::Sta, Am::ZeroPage, 3),
    op("STX", Op::Stx, Am::ZeroPage, 3),
    op("SAX", Op::Sax, Am::ZeroPage, 3),
    op("DEY", Op::Dey, Am::Implicit, 2),
    op("NOP", Op::Nop, Am::Immediate, 2),
    op("TXA", Op::Txa, Am::Implicit, 2),
    op("ANE", Op::Ane, Am::Immediate, 2),
    op("STY", Op::Sty, Am::Absolute, 4),
    op("STA", Op::Sta, Am::Absolute, 4),
    op("STX", Op::Stx, Am::Absolute, 4),
    op("SAX", Op::Sax, Am::Absolute, 4),
    // 0x90 - 0x9F
    op("BCC", Op::Bcc, Am::Relative, 2),
    op("STA", Op::Sta, Am::IndirectY, 6),
    op("JAM", Op::Jam, Am::Implicit, 0),
    op("SHA", Op::Sha, Am::IndirectY, 6),
    op("STY", Op::Sty, Am::ZeroPageX, 4),
    op("STA", Op::Sta, Am::ZeroPageX, 4),
    op("STX", Op::Stx, Am::ZeroPageY, 4),
    op("SAX", Op::Sax, Am::ZeroPageY, 4),
    op("TYA", Op::Tya, Am::Implicit, 2),
    op("STA", Op::Sta, Am::AbsoluteY, 4),
    op("TXS", Op::Txs, Am::Implicit, 2),
    op("TAS", Op::Tas, Am::AbsoluteY, 4),
    op("SHY", Op::Shy, Am::AbsoluteX, 4),
    op("STA", Op::Sta, Am::AbsoluteX, 4),
    op("SHX", Op::Shx, Am::AbsoluteY, 4),
    op("SHA", Op::Sha, Am::AbsoluteY, 4),
    // 0xA0 - 0xAF
    op("LDY", Op::Ldy, Am::Immediate, 2),
    op("LDA", Op::Lda, Am::IndirectX, 6),
    op("LDX", Op::Ldx, Am::Immediate, 2),
    op("LAX", Op::Lax, Am::IndirectX, 6),
    op("LDY", Op::Ldy, Am::ZeroPage, 3),
    op("LDA", Op::Lda, Am::ZeroPage, 3),
    op("LDX", Op::Ldx, Am::ZeroPage, 3),
    op("LAX", Op::Lax, Am::ZeroPage, 3),
    op("TAY", Op::Tay, Am::Implicit, 2),
    op("LDA", Op::Lda, Am::Immediate, 2),
    op("TAX", Op::Tax, Am::Implicit, 2),
    op("LXA", Op::Lxa, Am::Immediate, 2),
    op("LDY", Op::Ldy, Am::Absolute, 4),
    op("LDA", Op::Lda, Am::Absolute, 4),
    op("LDX", Op::Ldx, Am::Absolute, 4),
    op("LAX", Op::Lax, Am::Absolute, 4),
    // 0xB0 - 0xBF
    op("BCS", Op::Bcs, Am::Relative, 2),
    op("LDA", Op::Lda, Am::IndirectY, 5),
    op("JAM", Op::Jam, Am::Implicit, 0),
    op("LAX", Op::Lax, Am::IndirectY, 5),
    op("LDY", Op::Ldy, Am::ZeroPageX, 4),
    op("LDA", Op::Lda, Am::ZeroPageX, 4),
    op("LDX", Op::Ldx, Am::ZeroPageY, 4),
    op("LAX", Op::Lax, Am::ZeroPageY, 4),
    op("CLV", Op::Clv, Am::Implicit, 2),
    op("LDA", Op::Lda, Am::AbsoluteY, 4),
    op("TSX", Op::Tsx, Am::Implicit, 2),
    op("LAS", Op::Las, Am::AbsoluteY, 4),
    op("LDY", Op::Ldy, Am::AbsoluteX, 4),
    op("LDA", Op::Lda, Am::AbsoluteX, 4),
    op("LDX", Op::Ldx, Am::AbsoluteY, 4),
    op("LAX", Op::Lax, Am::AbsoluteY, 4),
    // 0xC0 - 0xCF
    op("CPY", Op::Cpy, Am::Immediate, 2),
    op("CMP", Op::Cmp, Am::IndirectX, 6),
    op("NOP", Op::Nop, Am::Immediate, 2),
    op("DCP", Op::Dcp, Am::IndirectX, 8),
    op("CPY", Op::Cpy, Am::ZeroPage, 3),
    op("CMP", Op::Cmp, Am::ZeroPage, 3),
    op("DEC", Op::Dec, Am::ZeroPage, 5),
    op("DCP", Op::Dcp, Am::ZeroPage, 5),
    op("INY", Op::Iny, Am::Implicit, 2),
    op("CMP", Op::Cmp, Am::Immediate, 2),
    op("DEX", Op::Dex, Am::Implicit, 2),
    op("SBX", Op::Sbx, Am::Immediate, 2),
    op("CPY", Op::Cpy, Am::Absolute, 4),
    op("CMP", Op::Cmp, Am::Absolute, 4),
    op("DEC", Op::Dec, Am::Absolute, 6),
    op("DCP", Op::Dcp, Am::Absolute, 6),
    // 0xD0 - 0xDF
    op("BNE", Op::Bne, Am::Relative, 2),
    op("CMP", Op::Cmp, Am::IndirectY, 5),
    op("JAM", Op::Jam, Am::Implicit, 0),
    op("DCP", Op::Dcp, Am::IndirectY, 8),
    op("NOP", Op::Nop, Am::ZeroPageX, 4),
    op("CMP", Op::Cmp, Am::ZeroPageX, 4),
    op("DEC", Op::Dec, Am::ZeroPageX, 6),
    op("DCP", Op::Dcp, Am::ZeroPageX, 6),
    op("CLD", Op::Cld, Am::Implicit, 2),
    op("CMP", Op::Cmp, Am::AbsoluteY, 4),
    op("NOP", Op::Nop, Am::Implicit, 2),
    op("DCP", Op::Dcp, Am::AbsoluteY, 6),
    op("NOP", Op::Nop, Am::AbsoluteX, 4),
    op("CMP", Op::Cmp, Am::AbsoluteX, 4),
    op("DEC", Op::Dec, Am::AbsoluteX, 6),
    op("DCP", Op::Dcp, Am::AbsoluteX, 6),
    // 0xE0 - 0xEF
    op("CPX", Op::Cpx, Am::Immediate, 2),
    op("SBC", Op::Sbc, Am::IndirectX, 6),
    op("NOP", Op::Nop, Am::Immediate, 2),
    op("ISC", Op::Isc, Am::IndirectX, 8),
    op("CPX", Op::Cpx, Am::ZeroPage, 3),
    op("SBC", Op::Sbc, Am::ZeroPage, 3),
    op("INC", Op::Inc, Am::ZeroPage, 5),
    op("ISC", Op::Isc, Am::ZeroPage, 5),
    op("INX", Op::Inx, Am::Implicit, 2),
    op("SBC", Op::Sbc, Am::Immediate, 2),
    op("NOP", Op::Nop, Am::Implicit, 2),
    op("USBC", Op::Usbc, Am::Immediate, 2),
    op("CPX", Op::Cpx, Am::Absolute, 4),
    op("SBC", Op::Sbc, Am::Absolute, 4),
    op("INC", Op::Inc, Am::Absolute, 6),
    op("ISC", Op::Isc, Am::Absolute, 6),
    // 0xF0 - 0xFF
    op("BEQ", Op::Beq, Am::Relative, 2),
    op("SBC", Op::Sbc, Am::IndirectY, 5),
    op("JAM", Op::Jam, Am::Implicit, 0),
    op("ISC", Op::Isc, Am::IndirectY, 8),
    op("NOP", Op::Nop, Am::ZeroPageX, 4),
    op("SBC", Op::Sbc, Am::ZeroPageX, 4),
    op("INC", Op::Inc, Am::ZeroPageX, 6),
    op("ISC", Op::Isc, Am::ZeroPageX, 6),
    op("SED", Op::Sed, Am::Implicit, 2),
    op("SBC", Op::Sbc, Am::AbsoluteY, 4),
    op("NOP", Op::Nop, Am::Implicit, 2),
    op("ISC", Op::Isc, Am::AbsoluteY, 6),
    op("NOP", Op::Nop, Am::AbsoluteX, 4),
    op("SBC", Op::Sbc, Am::AbsoluteX, 4),
    op("INC", Op::Inc, Am::AbsoluteX, 6),
    op("ISC", Op::Isc, Am::AbsoluteX, 6),
];
