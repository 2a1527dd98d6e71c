//! # CPU State and Execution
//!
//! The CPU struct holds the 6502 processor state plus the remaining cycle
//! budget, and drives the fetch-decode-execute loop.
//!
//! ## Execution model
//!
//! Everything the CPU does is built from three primitives - `fetch_instruction`,
//! `read_byte`, and `write_byte` - each of which costs exactly one cycle, plus
//! `tick` for internal cycles with no bus access. Addressing-mode resolvers and
//! instruction handlers compose these primitives, which is what makes the cycle
//! accounting observable and testable in isolation.
//!
//! Execution ends in one of three ways, reported as a [`Halt`]:
//! - the cycle budget reaches zero or below,
//! - a JAM opcode is fetched,
//! - an undefined opcode byte is fetched (budget forced to zero).

use crate::{AddressingMode, Halt, MemoryBus, Operation, OPCODE_TABLE};
use crate::instructions::{alu, branches, control, flags, illegal, inc_dec, load_store, shifts, stack, transfer};

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait. One
/// `CPU` value is the sole mutable state of an emulation session: single
/// threaded, fully synchronous, no suspension points.
///
/// # Examples
///
/// ```
/// use emu6502::{CPU, FlatMemory, Halt, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0200, 0xE8); // INX
///
/// let mut cpu = CPU::new(memory, 2);
/// assert_eq!(cpu.execute(0x0200), Halt::CyclesExhausted);
/// assert_eq!(cpu.x(), 1);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction byte)
    pub(crate) pc: u16,

    /// Stack pointer, kept as a full page-1 address (0x0100-0x01FF).
    /// Semantically an 8-bit offset; all movement wraps within page 1.
    pub(crate) sp: u16,

    /// Carry flag
    pub(crate) flag_c: bool,

    /// Zero flag
    pub(crate) flag_z: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Decimal mode flag (tracked but never applied to arithmetic)
    pub(crate) flag_d: bool,

    /// Break flag
    pub(crate) flag_b: bool,

    /// Overflow flag
    pub(crate) flag_v: bool,

    /// Negative flag
    pub(crate) flag_n: bool,

    /// Remaining cycle budget. Every primitive access subtracts one; internal
    /// steps subtract fixed extras. Execution stops at zero or below.
    pub(crate) cycles: i64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and cycle budget, then
    /// resets it to the documented power-on defaults.
    pub fn new(memory: M, cycle_budget: i64) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            flag_c: false,
            flag_z: false,
            flag_i: false,
            flag_d: false,
            flag_b: false,
            flag_v: false,
            flag_n: false,
            cycles: cycle_budget,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Resets registers and flags to the power-on defaults: PC = 0xFFFC,
    /// SP = 0x0100, A = X = Y = 0, all seven flags clear.
    ///
    /// This is the only state-reset entry point. It touches neither memory
    /// contents nor the remaining cycle budget.
    pub fn reset(&mut self) {
        self.pc = 0xFFFC;
        self.sp = 0x0100;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.flag_c = false;
        self.flag_z = false;
        self.flag_i = false;
        self.flag_d = false;
        self.flag_b = false;
        self.flag_v = false;
        self.flag_n = false;
    }

    // ========== Cycle-counted primitives ==========

    /// Reads the byte at PC, charges one cycle, and advances PC (wrapping at
    /// 0xFFFF). Used for opcode bytes and immediate/operand bytes alike.
    pub fn fetch_instruction(&mut self) -> u8 {
        self.cycles -= 1;
        let byte = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Reads the byte at `addr`, charging one cycle. Does not touch PC.
    pub fn read_byte(&mut self, addr: u16) -> u8 {
        self.cycles -= 1;
        self.memory.read(addr)
    }

    /// Writes `value` to `addr`, charging one cycle.
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.cycles -= 1;
        self.memory.write(addr, value);
    }

    /// Charges `n` internal cycles with no bus access.
    pub(crate) fn tick(&mut self, n: i64) {
        self.cycles -= n;
    }

    // ========== Addressing-mode resolvers ==========

    /// Resolves an addressing mode to its operand value, charging the exact
    /// cycle cost of each fetch/read as it happens.
    ///
    /// Costs (excluding the opcode fetch): Immediate 1; ZeroPage 2;
    /// ZeroPage,X/Y 3; Absolute 3; Absolute,X/Y 3 (+1 on page cross);
    /// (Indirect,X) 5; (Indirect),Y 4 (+1 on page cross); Accumulator 0.
    ///
    /// The page-cross test compares the high byte of the unindexed base
    /// address against the high byte of base+index.
    pub fn fetch_operand(&mut self, mode: AddressingMode) -> u8 {
        match mode {
            AddressingMode::Immediate => self.fetch_instruction(),
            AddressingMode::Accumulator => self.a,
            AddressingMode::ZeroPage => {
                let addr = self.fetch_instruction() as u16;
                self.read_byte(addr)
            }
            AddressingMode::ZeroPageX => {
                let addr = self.fetch_instruction().wrapping_add(self.x) as u16;
                self.tick(1);
                self.read_byte(addr)
            }
            AddressingMode::ZeroPageY => {
                let addr = self.fetch_instruction().wrapping_add(self.y) as u16;
                self.tick(1);
                self.read_byte(addr)
            }
            AddressingMode::Absolute => {
                let addr = self.fetch_word();
                self.read_byte(addr)
            }
            AddressingMode::AbsoluteX => {
                let index = self.x;
                self.indexed_read(index)
            }
            AddressingMode::AbsoluteY => {
                let index = self.y;
                self.indexed_read(index)
            }
            AddressingMode::IndirectX => {
                let ptr = self.fetch_instruction().wrapping_add(self.x);
                self.tick(1);
                let addr = self.read_zero_page_word(ptr);
                self.read_byte(addr)
            }
            AddressingMode::IndirectY => {
                let ptr = self.fetch_instruction();
                let base = self.read_zero_page_word(ptr);
                let addr = base.wrapping_add(self.y as u16);
                if (base ^ addr) & 0xFF00 != 0 {
                    self.tick(1);
                }
                self.read_byte(addr)
            }
            AddressingMode::Implicit | AddressingMode::Relative | AddressingMode::Indirect => {
                unreachable!("mode {:?} does not produce an operand value", mode)
            }
        }
    }

    /// Resolves an addressing mode to an effective address, for stores and
    /// read-modify-write instructions.
    ///
    /// Costs (excluding the opcode fetch): ZeroPage 1; ZeroPage,X/Y 2;
    /// Absolute 2; Absolute,X/Y 2; (Indirect,X) 4; (Indirect),Y 4.
    /// Store forms pay no page-cross penalty.
    pub fn fetch_address(&mut self, mode: AddressingMode) -> u16 {
        match mode {
            AddressingMode::ZeroPage => self.fetch_instruction() as u16,
            AddressingMode::ZeroPageX => {
                self.tick(1);
                self.fetch_instruction().wrapping_add(self.x) as u16
            }
            AddressingMode::ZeroPageY => {
                self.tick(1);
                self.fetch_instruction().wrapping_add(self.y) as u16
            }
            AddressingMode::Absolute => self.fetch_word(),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                base.wrapping_add(self.x as u16)
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                base.wrapping_add(self.y as u16)
            }
            AddressingMode::IndirectX => {
                let ptr = self.fetch_instruction().wrapping_add(self.x);
                self.tick(1);
                self.read_zero_page_word(ptr)
            }
            AddressingMode::IndirectY => {
                let ptr = self.fetch_instruction();
                let base = self.read_zero_page_word(ptr);
                self.tick(1);
                base.wrapping_add(self.y as u16)
            }
            AddressingMode::Implicit
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative
            | AddressingMode::Indirect => {
                unreachable!("mode {:?} does not produce an effective address", mode)
            }
        }
    }

    /// Fetches a little-endian 16-bit address from the instruction stream.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_instruction() as u16;
        let hi = self.fetch_instruction() as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian word from the zero page. The pointer wraps at
    /// 0x100: a pointer at 0xFF reads its high byte from 0x00.
    pub(crate) fn read_zero_page_word(&mut self, ptr: u8) -> u16 {
        let lo = self.read_byte(ptr as u16) as u16;
        let hi = self.read_byte(ptr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    fn indexed_read(&mut self, index: u8) -> u8 {
        let base = self.fetch_word();
        let addr = base.wrapping_add(index as u16);
        if (base ^ addr) & 0xFF00 != 0 {
            self.tick(1);
        }
        self.read_byte(addr)
    }

    /// Read-modify-write sequence shared by the memory shift/rotate forms,
    /// INC/DEC, and the unofficial RMW opcodes: resolve the address, read,
    /// one internal modify cycle, write back. Returns the written value.
    pub(crate) fn read_modify_write(
        &mut self,
        mode: AddressingMode,
        f: fn(&mut Self, u8) -> u8,
    ) -> u8 {
        let addr = self.fetch_address(mode);
        let value = self.read_byte(addr);
        self.tick(1);
        let result = f(self, value);
        self.write_byte(addr, result);
        result
    }

    // ========== Stack helpers ==========

    // Empty-ascending convention: push writes at SP then steps up, pull steps
    // down then reads. SP movement wraps within page 1.

    pub(crate) fn push(&mut self, value: u8) {
        let sp = self.sp;
        self.write_byte(sp, value);
        self.sp = 0x0100 | (sp.wrapping_add(1) & 0x00FF);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = 0x0100 | (self.sp.wrapping_sub(1) & 0x00FF);
        let sp = self.sp;
        self.read_byte(sp)
    }

    /// Sets the Z and N flags from a result byte.
    pub(crate) fn set_nz(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }

    // ========== Execution ==========

    /// Executes one instruction: fetch the opcode byte, look it up in the
    /// dispatch table, and run its handler.
    ///
    /// Returns `Some(Halt)` for the terminal outcomes (JAM, undefined
    /// opcode), `None` when execution can continue. Budget exhaustion is
    /// checked by [`execute`](Self::execute) between instructions, so a
    /// single `step` always runs its instruction to completion even if the
    /// budget goes negative partway through.
    pub fn step(&mut self) -> Option<Halt> {
        let opcode = self.fetch_instruction();

        let Some(entry) = OPCODE_TABLE[opcode as usize] else {
            // Designed termination, not a crash: kill the budget and report.
            self.cycles = 0;
            return Some(Halt::UndefinedOpcode(opcode));
        };

        let mode = entry.addressing_mode;
        match entry.operation {
            Operation::Adc => alu::adc(self, mode),
            Operation::And => alu::and(self, mode),
            Operation::Asl => shifts::asl(self, mode),
            Operation::Bcc => {
                let taken = !self.flag_c;
                branches::branch(self, taken);
            }
            Operation::Bcs => {
                let taken = self.flag_c;
                branches::branch(self, taken);
            }
            Operation::Beq => {
                let taken = self.flag_z;
                branches::branch(self, taken);
            }
            Operation::Bit => alu::bit(self, mode),
            Operation::Bmi => {
                let taken = self.flag_n;
                branches::branch(self, taken);
            }
            Operation::Bne => {
                let taken = !self.flag_z;
                branches::branch(self, taken);
            }
            Operation::Bpl => {
                let taken = !self.flag_n;
                branches::branch(self, taken);
            }
            Operation::Brk => control::brk(self),
            Operation::Bvc => {
                let taken = !self.flag_v;
                branches::branch(self, taken);
            }
            Operation::Bvs => {
                let taken = self.flag_v;
                branches::branch(self, taken);
            }
            Operation::Clc => flags::clc(self),
            Operation::Cld => flags::cld(self),
            Operation::Cli => flags::cli(self),
            Operation::Clv => flags::clv(self),
            Operation::Cmp => {
                let reg = self.a;
                alu::compare(self, mode, reg);
            }
            Operation::Cpx => {
                let reg = self.x;
                alu::compare(self, mode, reg);
            }
            Operation::Cpy => {
                let reg = self.y;
                alu::compare(self, mode, reg);
            }
            Operation::Dec => inc_dec::dec(self, mode),
            Operation::Dex => inc_dec::dex(self),
            Operation::Dey => inc_dec::dey(self),
            Operation::Eor => alu::eor(self, mode),
            Operation::Inc => inc_dec::inc(self, mode),
            Operation::Inx => inc_dec::inx(self),
            Operation::Iny => inc_dec::iny(self),
            Operation::Jmp => control::jmp(self, mode),
            Operation::Jsr => control::jsr(self),
            Operation::Lda => load_store::lda(self, mode),
            Operation::Ldx => load_store::ldx(self, mode),
            Operation::Ldy => load_store::ldy(self, mode),
            Operation::Lsr => shifts::lsr(self, mode),
            Operation::Nop => control::nop(self, mode),
            Operation::Ora => alu::ora(self, mode),
            Operation::Pha => stack::pha(self),
            Operation::Php => stack::php(self),
            Operation::Pla => stack::pla(self),
            Operation::Plp => stack::plp(self),
            Operation::Rol => shifts::rol(self, mode),
            Operation::Ror => shifts::ror(self, mode),
            Operation::Rti => control::rti(self),
            Operation::Rts => control::rts(self),
            Operation::Sbc | Operation::Usbc => alu::sbc(self, mode),
            Operation::Sec => flags::sec(self),
            Operation::Sed => flags::sed(self),
            Operation::Sei => flags::sei(self),
            Operation::Sta => load_store::sta(self, mode),
            Operation::Stx => load_store::stx(self, mode),
            Operation::Sty => load_store::sty(self, mode),
            Operation::Tax => transfer::tax(self),
            Operation::Tay => transfer::tay(self),
            Operation::Tsx => transfer::tsx(self),
            Operation::Txa => transfer::txa(self),
            Operation::Txs => transfer::txs(self),
            Operation::Tya => transfer::tya(self),
            Operation::Alr => illegal::alr(self),
            Operation::Anc => illegal::anc(self),
            Operation::Ane => illegal::ane(self),
            Operation::Arr => illegal::arr(self),
            Operation::Dcp => illegal::dcp(self, mode),
            Operation::Isc => illegal::isc(self, mode),
            Operation::Las => illegal::las(self, mode),
            Operation::Lax => illegal::lax(self, mode),
            Operation::Lxa => illegal::lxa(self),
            Operation::Rla => illegal::rla(self, mode),
            Operation::Rra => illegal::rra(self, mode),
            Operation::Sax => illegal::sax(self, mode),
            Operation::Sbx => illegal::sbx(self),
            Operation::Sha => illegal::sha(self, mode),
            Operation::Shx => illegal::shx(self, mode),
            Operation::Shy => illegal::shy(self, mode),
            Operation::Slo => illegal::slo(self, mode),
            Operation::Sre => illegal::sre(self, mode),
            Operation::Tas => illegal::tas(self, mode),
            Operation::Jam => {
                self.cycles = 0;
                return Some(Halt::Jam(opcode));
            }
        }

        None
    }

    /// Sets PC to `start` and runs instructions until the cycle budget is
    /// exhausted or a halting opcode is fetched. Returns why execution
    /// stopped.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory, Halt, MemoryBus};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.write(0x0100, 0x02); // JAM
    ///
    /// let mut cpu = CPU::new(memory, 100);
    /// assert_eq!(cpu.execute(0x0100), Halt::Jam(0x02));
    /// ```
    pub fn execute(&mut self, start: u16) -> Halt {
        self.pc = start;
        while self.cycles > 0 {
            if let Some(halt) = self.step() {
                return halt;
            }
        }
        Halt::CyclesExhausted
    }

    // ========== Register and flag accessors ==========

    /// Returns the accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer as a full page-1 address (0x0100-0x01FF).
    pub fn sp(&self) -> u16 {
        self.sp
    }

    /// Returns the remaining cycle budget.
    pub fn cycles(&self) -> i64 {
        self.cycles
    }

    /// Returns the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns the memory bus mutably.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Packs the status flags into a byte.
    ///
    /// Bit layout (bit 7 to bit 0): N V 1 B D I Z C, with bit 5 always set.
    /// This layout is the external contract used by PHP/BRK/PLP regardless of
    /// the internal flag representation.
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000; // bit 5 always 1

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Restores flags from a packed status byte, as PLP and RTI do.
    /// Bits 5 and 4 (the phantom bit and B) are ignored.
    pub(crate) fn set_status(&mut self, value: u8) {
        self.flag_n = value & 0b1000_0000 != 0;
        self.flag_v = value & 0b0100_0000 != 0;
        self.flag_d = value & 0b0000_1000 != 0;
        self.flag_i = value & 0b0000_0100 != 0;
        self.flag_z = value & 0b0000_0010 != 0;
        self.flag_c = value & 0b0000_0001 != 0;
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    // ========== Test and embedding setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer. Only the low byte is significant; the value is
    /// forced into page 1.
    pub fn set_sp(&mut self, value: u16) {
        self.sp = 0x0100 | (value & 0x00FF);
    }

    /// Replaces the remaining cycle budget.
    pub fn set_cycles(&mut self, value: i64) {
        self.cycles = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }
}
