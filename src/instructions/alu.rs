//! # Arithmetic and Logic Instructions
//!
//! ADC and SBC share one accumulator-addition path: SBC is ADC of the
//! one's complement of the operand, which yields the correct result, carry
//! (set when no borrow occurred) and signed overflow in one place. The
//! compares subtract without writing a register, and BIT tests memory
//! against the accumulator mask.

use crate::addressing::AddressingMode;
use crate::cpu::{Cpu, Disposition};
use crate::memory::MemoryBus;
use crate::status::{self, Status};

/// ADC: A := A + M + C. Flags: C, V, N, Z.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let value = cpu.operand(mode);
    add_to_accumulator(cpu, value)
}

/// SBC: A := A - M - (1 - C), computed as A + !M + C. Flags: C, V, N, Z.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let value = cpu.operand(mode);
    add_to_accumulator(cpu, !value)
}

fn add_to_accumulator<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) -> Disposition {
    let carry_in = cpu.status.contains(Status::CARRY);
    let (result, carry_out) = status::add_with_carry(cpu.a, value, carry_in);

    // Signed overflow: both inputs share a sign the result does not.
    let overflow = (cpu.a ^ result) & (value ^ result) & 0x80 != 0;

    cpu.status.set(Status::CARRY, carry_out);
    cpu.status.set(Status::OVERFLOW, overflow);
    cpu.status.update_nz(result);
    cpu.a = result;
    Disposition::Continue
}

/// AND: A := A & M. Flags: N, Z.
pub(crate) fn and<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let result = cpu.a & cpu.operand(mode);
    cpu.a = result;
    cpu.status.update_nz(result);
    Disposition::Continue
}

/// ORA: A := A | M. Flags: N, Z.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let result = cpu.a | cpu.operand(mode);
    cpu.a = result;
    cpu.status.update_nz(result);
    Disposition::Continue
}

/// EOR: A := A ^ M. Flags: N, Z.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let result = cpu.a ^ cpu.operand(mode);
    cpu.a = result;
    cpu.status.update_nz(result);
    Disposition::Continue
}

/// BIT: Z := (A & M == 0), N := bit 7 of M, V := bit 6 of M. A unchanged,
/// C unaffected.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let value = cpu.operand(mode);
    cpu.status.set(Status::ZERO, cpu.a & value == 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
    Disposition::Continue
}

/// CMP: flags from A - M. A unchanged.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let register = cpu.a;
    compare(cpu, register, mode)
}

/// CPX: flags from X - M. X unchanged.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let register = cpu.x;
    compare(cpu, register, mode)
}

/// CPY: flags from Y - M. Y unchanged.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let register = cpu.y;
    compare(cpu, register, mode)
}

/// C := register >= M; N and Z from the 8-bit difference. Equality sets
/// both Z and C.
fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, register: u8, mode: AddressingMode) -> Disposition {
    let value = cpu.operand(mode);
    let difference = register.wrapping_sub(value);
    cpu.status.set(Status::CARRY, register >= value);
    cpu.status.update_nz(difference);
    Disposition::Continue
}
