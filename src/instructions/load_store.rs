//! # Load and Store Instructions
//!
//! Loads copy the operand byte into a register and perform the standard N/Z
//! update. Stores copy a register to the effective address and touch no
//! flags.

use crate::addressing::AddressingMode;
use crate::cpu::{Cpu, Disposition};
use crate::memory::MemoryBus;

/// LDA: A := operand. Flags: N, Z.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let value = cpu.operand(mode);
    cpu.a = value;
    cpu.status.update_nz(value);
    Disposition::Continue
}

/// LDX: X := operand. Flags: N, Z.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let value = cpu.operand(mode);
    cpu.x = value;
    cpu.status.update_nz(value);
    Disposition::Continue
}

/// LDY: Y := operand. Flags: N, Z.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let value = cpu.operand(mode);
    cpu.y = value;
    cpu.status.update_nz(value);
    Disposition::Continue
}

/// STA: memory := A. No flags.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let addr = cpu.operand_address(mode);
    cpu.memory.write(addr, cpu.a);
    Disposition::Continue
}

/// STX: memory := X. No flags.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let addr = cpu.operand_address(mode);
    cpu.memory.write(addr, cpu.x);
    Disposition::Continue
}

/// STY: memory := Y. No flags.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let addr = cpu.operand_address(mode);
    cpu.memory.write(addr, cpu.y);
    Disposition::Continue
}
