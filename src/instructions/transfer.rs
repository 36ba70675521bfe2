//! # Register Transfer Instructions
//!
//! Register-to-register copies. All run the standard N/Z update except TXS,
//! which writes the stack pointer and leaves the flags alone.

use crate::addressing::AddressingMode;
use crate::cpu::{Cpu, Disposition};
use crate::memory::MemoryBus;

/// TAX: X := A. Flags: N, Z.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.x = cpu.a;
    cpu.status.update_nz(cpu.x);
    Disposition::Continue
}

/// TAY: Y := A. Flags: N, Z.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.y = cpu.a;
    cpu.status.update_nz(cpu.y);
    Disposition::Continue
}

/// TXA: A := X. Flags: N, Z.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.a = cpu.x;
    cpu.status.update_nz(cpu.a);
    Disposition::Continue
}

/// TYA: A := Y. Flags: N, Z.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.a = cpu.y;
    cpu.status.update_nz(cpu.a);
    Disposition::Continue
}

/// TSX: X := SP. Flags: N, Z.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.x = cpu.sp;
    cpu.status.update_nz(cpu.x);
    Disposition::Continue
}

/// TXS: SP := X. No flags.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    cpu.sp = cpu.x;
    Disposition::Continue
}
