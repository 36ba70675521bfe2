//! Shift and rotate tests, on the accumulator and on memory operands.

use nes6502::{Cpu, FlatMemory, MemoryBus, Status};

fn loaded(program: &[u8]) -> Cpu<FlatMemory> {
    let mut cpu = Cpu::new();
    cpu.load_and_reset(program).unwrap();
    cpu
}

// ========== ASL ==========

#[test]
fn asl_accumulator() {
    let mut cpu = loaded(&[0x0A, 0x00]);
    cpu.set_a(0x03);
    cpu.run().unwrap();

    assert_eq!(cpu.a(), 0x06);
    assert_eq!(cpu.status(), Status::empty());
}

#[test]
fn asl_accumulator_carries_bit7() {
    let mut cpu = loaded(&[0x0A, 0x00]);
    cpu.set_a(0x83);
    cpu.run().unwrap();

    assert_eq!(cpu.a(), 0x06);
    assert_eq!(cpu.status(), Status::CARRY);
}

#[test]
fn asl_accumulator_zero_with_carry() {
    let mut cpu = loaded(&[0x0A, 0x00]);
    cpu.set_a(0x80);
    cpu.run().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.status(), Status::ZERO | Status::CARRY);
}

#[test]
fn asl_zero_page_writes_back() {
    let mut cpu = loaded(&[0x06, 0x10, 0x00]);
    cpu.memory_mut().write(0x0010, 0x66);
    cpu.run().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0xCC);
    assert_eq!(cpu.status(), Status::NEGATIVE);
}

#[test]
fn asl_absolute_x() {
    let mut cpu = loaded(&[0x1E, 0x00, 0x10, 0x00]);
    cpu.set_x(0x03);
    cpu.memory_mut().write(0x1003, 0xC2);
    cpu.run().unwrap();

    assert_eq!(cpu.memory().read(0x1003), 0x84);
    assert_eq!(cpu.status(), Status::NEGATIVE | Status::CARRY);
}

// ========== LSR ==========

#[test]
fn lsr_accumulator_carries_bit0() {
    let mut cpu = loaded(&[0x4A, 0x00]);
    cpu.set_a(0x01);
    cpu.run().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.status(), Status::ZERO | Status::CARRY);
}

#[test]
fn lsr_never_sets_negative() {
    let mut cpu = loaded(&[0x4A, 0x00]);
    cpu.set_a(0xFF);
    cpu.run().unwrap();

    assert_eq!(cpu.a(), 0x7F);
    assert_eq!(cpu.status(), Status::CARRY);
}

#[test]
fn lsr_zero_page() {
    let mut cpu = loaded(&[0x46, 0x20, 0x00]);
    cpu.memory_mut().write(0x0020, 0x82);
    cpu.run().unwrap();

    assert_eq!(cpu.memory().read(0x0020), 0x41);
    assert_eq!(cpu.status(), Status::empty());
}

// ========== ROL ==========

#[test]
fn rol_shifts_carry_into_bit0() {
    let mut cpu = loaded(&[0x2A, 0x00]);
    cpu.set_a(0x40);
    cpu.set_status(Status::CARRY);
    cpu.run().unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert_eq!(cpu.status(), Status::NEGATIVE);
}

#[test]
fn rol_moves_bit7_to_carry() {
    let mut cpu = loaded(&[0x2A, 0x00]);
    cpu.set_a(0x80);
    cpu.run().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.status(), Status::ZERO | Status::CARRY);
}

#[test]
fn rol_memory_round() {
    let mut cpu = loaded(&[0x26, 0x10, 0x00]);
    cpu.memory_mut().write(0x0010, 0x81);
    cpu.run().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x02);
    assert_eq!(cpu.status(), Status::CARRY);
}

// ========== ROR ==========

#[test]
fn ror_shifts_carry_into_bit7() {
    let mut cpu = loaded(&[0x6A, 0x00]);
    cpu.set_a(0x02);
    cpu.set_status(Status::CARRY);
    cpu.run().unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert_eq!(cpu.status(), Status::NEGATIVE);
}

#[test]
fn ror_moves_bit0_to_carry() {
    let mut cpu = loaded(&[0x6A, 0x00]);
    cpu.set_a(0x01);
    cpu.run().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.status(), Status::ZERO | Status::CARRY);
}

#[test]
fn ror_absolute() {
    let mut cpu = loaded(&[0x6E, 0x00, 0x10, 0x00]);
    cpu.memory_mut().write(0x1000, 0x04);
    cpu.run().unwrap();

    assert_eq!(cpu.memory().read(0x1000), 0x02);
    assert_eq!(cpu.status(), Status::empty());
}

#[test]
fn rotate_roundtrip_through_carry() {
    // ROL A then ROR A restores the original value and carry.
    let mut cpu = loaded(&[0x2A, 0x6A, 0x00]);
    cpu.set_a(0xA5);
    cpu.run().unwrap();

    assert_eq!(cpu.a(), 0xA5);
    assert_eq!(cpu.status(), Status::NEGATIVE);
}
