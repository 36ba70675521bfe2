//! # Shift and Rotate Instructions
//!
//! All four operate either on the accumulator or on memory at the effective
//! address, set C to the ejected edge bit, and run the standard N/Z update
//! on the result. Rotates feed the previous carry into the vacated bit.

use crate::addressing::AddressingMode;
use crate::cpu::{Cpu, Disposition};
use crate::memory::MemoryBus;
use crate::status::{self, Status};

/// ASL: operand := operand << 1; C := old bit 7.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    modify_operand(cpu, mode, status::shift_left)
}

/// LSR: operand := operand >> 1 (logical); C := old bit 0.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    modify_operand(cpu, mode, status::shift_right)
}

/// ROL: left rotate through carry. New bit 0 := old C; C := old bit 7.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let carry_in = cpu.status.contains(Status::CARRY);
    modify_operand(cpu, mode, |value| {
        let (shifted, carry_out) = status::shift_left(value);
        (shifted | carry_in as u8, carry_out)
    })
}

/// ROR: right rotate through carry. New bit 7 := old C; C := old bit 0.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Disposition {
    let carry_in = cpu.status.contains(Status::CARRY);
    modify_operand(cpu, mode, |value| {
        let (shifted, carry_out) = status::shift_right(value);
        (shifted | (carry_in as u8) << 7, carry_out)
    })
}

/// Applies `f` to the accumulator or the addressed byte, writes the result
/// back, and updates C, N and Z.
fn modify_operand<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    f: impl FnOnce(u8) -> (u8, bool),
) -> Disposition {
    let (result, carry) = if mode == AddressingMode::Accumulator {
        let (result, carry) = f(cpu.a);
        cpu.a = result;
        (result, carry)
    } else {
        let addr = cpu.operand_address(mode);
        let (result, carry) = f(cpu.memory.read(addr));
        cpu.memory.write(addr, result);
        (result, carry)
    };

    cpu.status.set(Status::CARRY, carry);
    cpu.status.update_nz(result);
    Disposition::Continue
}
