//! # 6502 CPU Core for an NES-style Machine
//!
//! This crate implements the instruction-fetch/decode/execute engine of a
//! MOS 6502 as found in NES-class hardware: a register file, a 64 KiB flat
//! address space, a table-driven decoder, and handlers for the documented
//! instruction subset with byte-exact flag behavior.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes6502::Cpu;
//!
//! // LDA #$C0; TAX; INX; BRK
//! let program = [0xA9, 0xC0, 0xAA, 0xE8, 0x00];
//!
//! let mut cpu = Cpu::new();
//! cpu.load_and_reset(&program).unwrap();
//! cpu.run().unwrap();
//!
//! assert_eq!(cpu.a(), 0xC0);
//! assert_eq!(cpu.x(), 0xC1);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the [`MemoryBus`]
//!   trait; [`FlatMemory`] provides the plain 64 KiB array.
//! - **Table-driven decode**: a 256-entry table maps each opcode byte to a
//!   [`Mnemonic`], an [`AddressingMode`] and an encoded size. Unknown bytes
//!   have no entry and stop execution with an error.
//! - **Uniform operand resolution**: one resolver computes the effective
//!   address for every addressing mode; immediate operands are read through
//!   the same path by resolving to the program counter itself.
//! - **Explicit control flow**: every handler reports whether the loop should
//!   advance the program counter, leave it alone, or halt.
//!
//! ## Scope
//!
//! Cartridge parsing, mappers, PPU/APU, controllers, external interrupts,
//! decimal mode and cycle timing are all left to embedders. `BRK` halts the
//! run loop rather than vectoring through 0xFFFE.

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Instruction semantics, grouped by family. Internal: the public surface is
// the CPU itself.
mod instructions;

pub use addressing::AddressingMode;
pub use cpu::{Cpu, Disposition};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, Opcode, OPCODE_TABLE};
pub use status::Status;

/// Errors surfaced at the crate boundary.
///
/// Everything else the 6502 does — 8-bit wrap-around, carries, borrows,
/// negative results — is modeled behavior that sets flags, not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CpuError {
    /// The ROM image does not fit in the 64 KiB address space.
    ///
    /// The CPU's memory is left partially written and must not be run.
    #[error("ROM image of {0} bytes exceeds the 64 KiB address space")]
    RomTooLarge(usize),

    /// The fetched byte has no entry in the opcode table.
    ///
    /// Execution stops before the unknown instruction touches any state;
    /// only the program counter has advanced, past the fetched byte.
    #[error("opcode 0x{0:02X} is not implemented")]
    UnimplementedOpcode(u8),
}
