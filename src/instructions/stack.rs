//! # Stack Instructions
//!
//! The stack lives in the page at 0x0100 and grows downward: a push writes
//! at 0x0100 + SP and decrements SP, a pull increments SP and reads. PLA
//! runs the standard N/Z update; PLP replaces the whole status byte.

use crate::addressing::AddressingMode;
use crate::cpu::{Cpu, Disposition};
use crate::memory::MemoryBus;
use crate::status::Status;

/// PHA: push the accumulator.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.push(cpu.a);
    Disposition::Continue
}

/// PHP: push the status register.
pub(crate) fn php<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.push(cpu.status.bits());
    Disposition::Continue
}

/// PLA: pull into the accumulator. Flags: N, Z.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    let value = cpu.pop();
    cpu.a = value;
    cpu.status.update_nz(value);
    Disposition::Continue
}

/// PLP: pull into the status register, replacing every flag.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    let value = cpu.pop();
    cpu.status = Status::from_bits_retain(value);
    Disposition::Continue
}
