//! # Branch Instructions
//!
//! All eight branches read a signed 8-bit displacement through the relative
//! addressing path. When the condition holds, the displacement is added to
//! the address just past the operand byte and the handler reports that it
//! updated PC itself; otherwise the loop advances PC normally. No flags are
//! affected.

use crate::addressing::AddressingMode;
use crate::cpu::{Cpu, Disposition};
use crate::memory::MemoryBus;
use crate::status::Status;

/// BCC: branch if carry clear.
pub(crate) fn bcc<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    let taken = !cpu.status.contains(Status::CARRY);
    branch_on(cpu, taken)
}

/// BCS: branch if carry set.
pub(crate) fn bcs<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    let taken = cpu.status.contains(Status::CARRY);
    branch_on(cpu, taken)
}

/// BEQ: branch if zero set.
pub(crate) fn beq<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    let taken = cpu.status.contains(Status::ZERO);
    branch_on(cpu, taken)
}

/// BNE: branch if zero clear.
pub(crate) fn bne<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    let taken = !cpu.status.contains(Status::ZERO);
    branch_on(cpu, taken)
}

/// BMI: branch if negative set.
pub(crate) fn bmi<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    let taken = cpu.status.contains(Status::NEGATIVE);
    branch_on(cpu, taken)
}

/// BPL: branch if negative clear.
pub(crate) fn bpl<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    let taken = !cpu.status.contains(Status::NEGATIVE);
    branch_on(cpu, taken)
}

/// BVC: branch if overflow clear.
pub(crate) fn bvc<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    let taken = !cpu.status.contains(Status::OVERFLOW);
    branch_on(cpu, taken)
}

/// BVS: branch if overflow set.
pub(crate) fn bvs<M: MemoryBus>(cpu: &mut Cpu<M>, _mode: AddressingMode) -> Disposition {
    let taken = cpu.status.contains(Status::OVERFLOW);
    branch_on(cpu, taken)
}

/// Common branch tail. PC points at the displacement byte; the target is
/// the instruction end plus the sign-extended displacement.
fn branch_on<M: MemoryBus>(cpu: &mut Cpu<M>, taken: bool) -> Disposition {
    if !taken {
        return Disposition::Continue;
    }

    let offset = cpu.operand(AddressingMode::Relative) as i8;
    let instruction_end = cpu.pc.wrapping_add(1);
    cpu.pc = instruction_end.wrapping_add_signed(offset as i16);
    Disposition::PcUpdated
}
