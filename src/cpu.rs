//! # CPU State and Execution
//!
//! The register file, the addressing-mode resolver, the stack helpers, the
//! ROM loader, and the fetch-execute loop.
//!
//! ## Execution model
//!
//! [`Cpu::step`] runs exactly one instruction:
//!
//! 1. Fetch the byte at PC and advance PC by one, so PC now points at the
//!    operand bytes and the resolver can read them directly.
//! 2. Decode through [`OPCODE_TABLE`]; an unknown byte is an error.
//! 3. Execute the handler, which reports a [`Disposition`].
//! 4. Unless the handler already set PC (branch taken, jump, subroutine),
//!    advance PC by the remaining operand bytes (size − 1).
//!
//! [`Cpu::run`] repeats this until a `BRK` halt or an unknown opcode.

use log::{debug, trace};

use crate::addressing::AddressingMode;
use crate::instructions::{alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer};
use crate::memory::{FlatMemory, MemoryBus};
use crate::opcodes::{Mnemonic, Opcode, OPCODE_TABLE};
use crate::status::Status;
use crate::CpuError;

/// Base address the ROM image is copied to.
pub const ROM_BASE: u16 = 0x8000;

/// Base address of the stack page; the stack pointer offsets into it.
pub const STACK_BASE: u16 = 0x0100;

/// Location of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// What the execution loop should do after a handler returns.
///
/// Branches, jumps and subroutine calls set PC themselves and must not have
/// the loop's size-based advance applied on top; `BRK` stops the loop
/// altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Advance PC past the operand bytes and keep going.
    Continue,
    /// The handler already set PC; leave it alone.
    PcUpdated,
    /// Stop the run loop.
    Halt,
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via [`MemoryBus`]; the default
/// constructor pairs the CPU with [`FlatMemory`].
///
/// # Examples
///
/// ```
/// use nes6502::Cpu;
///
/// let mut cpu = Cpu::new();
/// cpu.load_and_reset(&[0xA9, 0x42, 0x00]).unwrap(); // LDA #$42; BRK
/// cpu.run().unwrap();
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct Cpu<M: MemoryBus> {
    /// Program counter: address of the next byte to fetch.
    pub(crate) pc: u16,

    /// Stack pointer: offset into the page at [`STACK_BASE`].
    pub(crate) sp: u8,

    /// Accumulator.
    pub(crate) a: u8,

    /// X index register.
    pub(crate) x: u8,

    /// Y index register.
    pub(crate) y: u8,

    /// Processor status flags.
    pub(crate) status: Status,

    /// Memory behind the bus trait.
    pub(crate) memory: M,
}

impl Cpu<FlatMemory> {
    /// Creates a CPU over zeroed flat memory, with all registers zero.
    ///
    /// Call [`Cpu::load_rom`] (or [`Cpu::load_and_reset`]) before running.
    pub fn new() -> Self {
        Self::with_memory(FlatMemory::new())
    }
}

impl Default for Cpu<FlatMemory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a CPU over the given memory, with all registers zero.
    pub fn with_memory(memory: M) -> Self {
        Self {
            pc: 0,
            sp: 0,
            a: 0,
            x: 0,
            y: 0,
            status: Status::empty(),
            memory,
        }
    }

    /// Copies a program image into memory at [`ROM_BASE`] and points the
    /// reset vector at it.
    ///
    /// Fails with [`CpuError::RomTooLarge`] if the image exceeds the 64 KiB
    /// address space. Images longer than 32 KiB wrap past 0xFFFF into low
    /// memory rather than faulting.
    pub fn load_rom(&mut self, image: &[u8]) -> Result<(), CpuError> {
        if image.len() > 0x10000 {
            return Err(CpuError::RomTooLarge(image.len()));
        }

        let mut addr = ROM_BASE;
        for &byte in image {
            self.memory.write(addr, byte);
            addr = addr.wrapping_add(1);
        }

        self.memory.write_word(RESET_VECTOR, ROM_BASE);
        debug!("loaded {} byte ROM image at {:#06X}", image.len(), ROM_BASE);

        Ok(())
    }

    /// Zeroes SP, A, X, Y and the status register, then loads PC from the
    /// reset vector.
    pub fn reset(&mut self) {
        self.sp = 0;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.status = Status::empty();

        self.pc = self.memory.read_word(RESET_VECTOR);
        debug!("reset, pc = {:#06X}", self.pc);
    }

    /// [`Cpu::load_rom`] followed by [`Cpu::reset`].
    pub fn load_and_reset(&mut self, image: &[u8]) -> Result<(), CpuError> {
        self.load_rom(image)?;
        self.reset();
        Ok(())
    }

    /// Runs the fetch-execute loop until a `BRK` halt or an unknown opcode.
    ///
    /// Returns `Ok(())` on a clean halt. Embedders that need a step budget
    /// or other metering can drive [`Cpu::step`] directly instead.
    pub fn run(&mut self) -> Result<(), CpuError> {
        loop {
            if self.step()? == Disposition::Halt {
                return Ok(());
            }
        }
    }

    /// Executes a single instruction and returns its disposition.
    ///
    /// On an unknown opcode, PC has advanced past the fetched byte and
    /// nothing else has changed.
    pub fn step(&mut self) -> Result<Disposition, CpuError> {
        let origin = self.pc;
        let byte = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);

        let Some(opcode) = OPCODE_TABLE[byte as usize] else {
            return Err(CpuError::UnimplementedOpcode(byte));
        };

        let disposition = self.execute(opcode);
        if disposition != Disposition::PcUpdated {
            self.pc = self.pc.wrapping_add(opcode.size as u16 - 1);
        }

        trace!(
            "{:?} {:?} pc {:#06X} -> {:#06X}",
            opcode.mnemonic,
            opcode.mode,
            origin,
            self.pc
        );

        Ok(disposition)
    }

    fn execute(&mut self, opcode: Opcode) -> Disposition {
        let mode = opcode.mode;
        match opcode.mnemonic {
            Mnemonic::Adc => alu::adc(self, mode),
            Mnemonic::And => alu::and(self, mode),
            Mnemonic::Asl => shifts::asl(self, mode),
            Mnemonic::Bcc => branches::bcc(self, mode),
            Mnemonic::Bcs => branches::bcs(self, mode),
            Mnemonic::Beq => branches::beq(self, mode),
            Mnemonic::Bit => alu::bit(self, mode),
            Mnemonic::Bmi => branches::bmi(self, mode),
            Mnemonic::Bne => branches::bne(self, mode),
            Mnemonic::Bpl => branches::bpl(self, mode),
            Mnemonic::Brk => control::brk(self, mode),
            Mnemonic::Bvc => branches::bvc(self, mode),
            Mnemonic::Bvs => branches::bvs(self, mode),
            Mnemonic::Clc => flags::clc(self, mode),
            Mnemonic::Cld => flags::cld(self, mode),
            Mnemonic::Cli => flags::cli(self, mode),
            Mnemonic::Clv => flags::clv(self, mode),
            Mnemonic::Cmp => alu::cmp(self, mode),
            Mnemonic::Cpx => alu::cpx(self, mode),
            Mnemonic::Cpy => alu::cpy(self, mode),
            Mnemonic::Dec => inc_dec::dec(self, mode),
            Mnemonic::Dex => inc_dec::dex(self, mode),
            Mnemonic::Dey => inc_dec::dey(self, mode),
            Mnemonic::Eor => alu::eor(self, mode),
            Mnemonic::Inc => inc_dec::inc(self, mode),
            Mnemonic::Inx => inc_dec::inx(self, mode),
            Mnemonic::Iny => inc_dec::iny(self, mode),
            Mnemonic::Jmp => control::jmp(self, mode),
            Mnemonic::Jsr => control::jsr(self, mode),
            Mnemonic::Lda => load_store::lda(self, mode),
            Mnemonic::Ldx => load_store::ldx(self, mode),
            Mnemonic::Ldy => load_store::ldy(self, mode),
            Mnemonic::Lsr => shifts::lsr(self, mode),
            Mnemonic::Nop => control::nop(self, mode),
            Mnemonic::Ora => alu::ora(self, mode),
            Mnemonic::Pha => stack::pha(self, mode),
            Mnemonic::Php => stack::php(self, mode),
            Mnemonic::Pla => stack::pla(self, mode),
            Mnemonic::Plp => stack::plp(self, mode),
            Mnemonic::Rol => shifts::rol(self, mode),
            Mnemonic::Ror => shifts::ror(self, mode),
            Mnemonic::Rts => control::rts(self, mode),
            Mnemonic::Sbc => alu::sbc(self, mode),
            Mnemonic::Sec => flags::sec(self, mode),
            Mnemonic::Sed => flags::sed(self, mode),
            Mnemonic::Sei => flags::sei(self, mode),
            Mnemonic::Sta => load_store::sta(self, mode),
            Mnemonic::Stx => load_store::stx(self, mode),
            Mnemonic::Sty => load_store::sty(self, mode),
            Mnemonic::Tax => transfer::tax(self, mode),
            Mnemonic::Tay => transfer::tay(self, mode),
            Mnemonic::Tsx => transfer::tsx(self, mode),
            Mnemonic::Txa => transfer::txa(self, mode),
            Mnemonic::Txs => transfer::txs(self, mode),
            Mnemonic::Tya => transfer::tya(self, mode),
        }
    }

    // ========== Operand resolution ==========

    /// Computes the effective operand address for `mode`.
    ///
    /// Called while PC points at the operand byte(s). Immediate and relative
    /// operands resolve to PC itself, so callers read them through the same
    /// path as any other address.
    pub(crate) fn operand_address(&self, mode: AddressingMode) -> u16 {
        match mode {
            AddressingMode::Immediate | AddressingMode::Relative => self.pc,
            AddressingMode::ZeroPage => self.memory.read(self.pc) as u16,
            AddressingMode::ZeroPageX => self.memory.read(self.pc).wrapping_add(self.x) as u16,
            AddressingMode::ZeroPageY => self.memory.read(self.pc).wrapping_add(self.y) as u16,
            AddressingMode::Absolute => self.memory.read_word(self.pc),
            AddressingMode::AbsoluteX => {
                self.memory.read_word(self.pc).wrapping_add(self.x as u16)
            }
            AddressingMode::AbsoluteY => {
                self.memory.read_word(self.pc).wrapping_add(self.y as u16)
            }
            AddressingMode::Indirect => {
                let pointer = self.memory.read_word(self.pc);
                self.memory.read_word(pointer)
            }
            AddressingMode::IndirectX => {
                let pointer = self.memory.read(self.pc).wrapping_add(self.x) as u16;
                self.memory.read_word(pointer)
            }
            AddressingMode::IndirectY => {
                let pointer = self.memory.read(self.pc) as u16;
                self.memory.read_word(pointer).wrapping_add(self.y as u16)
            }
            AddressingMode::Implied | AddressingMode::Accumulator => {
                unreachable!("{mode:?} has no operand address")
            }
        }
    }

    /// Reads the operand byte for `mode` through the resolver.
    pub(crate) fn operand(&self, mode: AddressingMode) -> u8 {
        self.memory.read(self.operand_address(mode))
    }

    // ========== Stack helpers ==========

    /// Pushes a byte: write at `STACK_BASE + SP`, then decrement SP.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pops a byte: increment SP, then read at `STACK_BASE + SP`.
    pub(crate) fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE + self.sp as u16)
    }

    /// Pushes a 16-bit word, high byte first so the low byte pops first.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    /// Pops a 16-bit word pushed by [`Cpu::push_word`].
    pub(crate) fn pop_word(&mut self) -> u16 {
        let low = self.pop();
        let high = self.pop();
        u16::from_le_bytes([low, high])
    }

    // ========== Register and flag access ==========

    /// Accumulator value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Stack pointer value.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Processor status flags.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Sets the accumulator. Intended for tests and embedders.
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

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the processor status flags.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable reference to the memory bus, for loading data and inspecting
    /// side effects.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}
