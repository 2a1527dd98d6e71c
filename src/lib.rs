//! # 6502 Cycle-Counting Emulator Core
//!
//! A cycle-counting NMOS 6502 CPU emulator that executes raw machine code
//! against a flat 64KB memory image, reproducing register, flag, and memory
//! side effects instruction by instruction until a cycle budget runs out or a
//! halting opcode is fetched.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{CPU, FlatMemory, Halt, MemoryBus};
//!
//! // Create 64KB flat memory and load a tiny program at 0x0100:
//! //   LDA #$02 ; ADC #$03
//! let mut memory = FlatMemory::new();
//! memory.load_image(&[0xA9, 0x02, 0x69, 0x03], 0x0100).unwrap();
//!
//! // Give the CPU a cycle budget and run from the load address.
//! let mut cpu = CPU::new(memory, 10);
//! assert_eq!(cpu.execute(0x0100), Halt::CyclesExhausted);
//! assert_eq!(cpu.a(), 0x05);
//! ```
//!
//! ## Architecture
//!
//! - **Cycle budget**: every primitive memory access (opcode fetch, operand
//!   read, write) costs exactly one cycle, plus fixed internal cycles for
//!   indexing, read-modify-write sequences, and taken-branch page crossings.
//!   Execution stops the moment the budget reaches zero or below.
//! - **Table-driven dispatch**: a single 256-entry [`OPCODE_TABLE`] maps each
//!   opcode byte to its operation, addressing mode, and datasheet cycle cost,
//!   feeding a small set of generic handlers.
//! - **Full opcode matrix**: the 151 official instructions plus the commonly
//!   emulated unofficial family (SLO, RLA, SRE, RRA, SAX, LAX, DCP, ISC,
//!   ANC, ALR, ARR, ANE, LXA, SBX, LAS, TAS, SHA/SHX/SHY, USBC), the
//!   multi-byte NOP variants, and the JAM halt opcodes.
//! - **Halts are statuses, not errors**: budget exhaustion, JAM, and
//!   undefined opcodes all surface as a [`Halt`] value so the engine stays
//!   embeddable and testable.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, addressing resolvers, and the execute loop
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - the opcode metadata table
//! - `addressing` - addressing mode enumeration

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::CPU;
pub use memory::{FlatMemory, LoadError, MemoryBus};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};

/// Why execution stopped.
///
/// These are designed termination states, not errors: the engine always runs
/// until one of them occurs and reports which one, so callers (and tests) can
/// assert on the outcome instead of guessing why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// The cycle budget reached zero or below.
    CyclesExhausted,

    /// A byte with no entry in the dispatch table was fetched.
    ///
    /// The budget is forced to zero; the fetch itself still cost one cycle
    /// and advanced the PC. Contains the opcode byte for reporting.
    UndefinedOpcode(u8),

    /// A JAM opcode (0x02, 0x12, ... 0xF2) was fetched.
    ///
    /// Real hardware wedges the processor; the emulator returns a terminal
    /// status instead of spinning. Contains the opcode byte.
    Jam(u8),
}

impl std::fmt::Display for Halt {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Halt::CyclesExhausted => write!(f, "cycle budget exhausted"),
            Halt::UndefinedOpcode(opcode) => {
                write!(f, "undefined opcode 0x{:02X}", opcode)
            }
            Halt::Jam(opcode) => write!(f, "jammed on opcode 0x{:02X}", opcode),
        }
    }
}
