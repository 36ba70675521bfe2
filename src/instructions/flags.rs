//! # Flag Instructions
//!
//! Each clears or sets exactly one status bit and touches nothing else.

use crate::addressing::AddressingMode;
use crate::cpu::{Cpu, Disposition};
use crate::memory::MemoryBus;
use crate::status::Status;

/// CLC: clear carry.
pub(crate) fn clc<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.status.remove(Status::CARRY);
    Disposition::Continue
}

/// CLD: clear decimal mode.
pub(crate) fn cld<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.status.remove(Status::DECIMAL);
    Disposition::Continue
}

/// CLI: clear interrupt disable.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.status.remove(Status::INTERRUPT_DISABLE);
    Disposition::Continue
}

/// CLV: clear overflow.
pub(crate) fn clv<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.status.remove(Status::OVERFLOW);
    Disposition::Continue
}

/// SEC: set carry.
pub(crate) fn sec<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.status.insert(Status::CARRY);
    Disposition::Continue
}

/// SED: set decimal mode. The NES 6502 ignores the flag in arithmetic, but
/// it is still a storable status bit.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.status.insert(Status::DECIMAL);
    Disposition::Continue
}

/// SEI: set interrupt disable.
pub(crate) fn sei<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.status.insert(Status::INTERRUPT_DISABLE);
    Disposition::Continue
}
