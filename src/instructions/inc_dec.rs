//! # Increment and Decrement Instructions
//!
//! ±1 with wrap modulo 256, on memory (INC/DEC) or on the index registers.
//! Flags: N, Z.

use crate::addressing::AddressingMode;
use crate::cpu::{Cpu, Disposition};
use crate::memory::MemoryBus;

/// INC: memory := memory + 1.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let addr = cpu.operand_address(mode);
    let value = cpu.memory.read(addr).wrapping_add(1);
    cpu.memory.write(addr, value);
    cpu.status.update_nz(value);
    Disposition::Continue
}

/// DEC: memory := memory - 1.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let addr = cpu.operand_address(mode);
    let value = cpu.memory.read(addr).wrapping_sub(1);
    cpu.memory.write(addr, value);
    cpu.status.update_nz(value);
    Disposition::Continue
}

/// INX: X := X + 1.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.update_nz(cpu.x);
    Disposition::Continue
}

/// INY: Y := Y + 1.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.update_nz(cpu.y);
    Disposition::Continue
}

/// DEX: X := X - 1.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.update_nz(cpu.x);
    Disposition::Continue
}

/// DEY: Y := Y - 1.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.update_nz(cpu.y);
    Disposition::Continue
}
