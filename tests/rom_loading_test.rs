//! ROM loading and reset tests.

use nes6502::{Cpu, CpuError, MemoryBus, Status};

#[test]
fn load_rom_copies_image_to_rom_base() {
    let mut cpu = Cpu::new();
    cpu.load_rom(&[0x01, 0x02, 0x03]).unwrap();

    assert_eq!(cpu.memory().read(0x8000), 0x01);
    assert_eq!(cpu.memory().read(0x8001), 0x02);
    assert_eq!(cpu.memory().read(0x8002), 0x03);
}

#[test]
fn load_rom_writes_reset_vector_little_endian() {
    let mut cpu = Cpu::new();
    cpu.load_rom(&[0xEA]).unwrap();

    assert_eq!(cpu.memory().read(0xFFFC), 0x00);
    assert_eq!(cpu.memory().read(0xFFFD), 0x80);
}

#[test]
fn load_rom_rejects_oversized_image() {
    let image = vec![0x01; 0x10001];

    let mut cpu = Cpu::new();
    assert_eq!(cpu.load_rom(&image), Err(CpuError::RomTooLarge(0x10001)));
}

#[test]
fn load_rom_accepts_full_address_space_image() {
    let image = vec![0xEA; 0x10000];

    let mut cpu = Cpu::new();
    assert_eq!(cpu.load_rom(&image), Ok(()));
}

#[test]
fn load_and_reset_points_pc_at_rom() {
    let mut cpu = Cpu::new();
    cpu.load_and_reset(&[0x01, 0x02, 0x03]).unwrap();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.memory().read(0x8000), 0x01);
}

#[test]
fn load_and_reset_propagates_size_error() {
    let image = vec![0x01; 0x20000];

    let mut cpu = Cpu::new();
    assert_eq!(
        cpu.load_and_reset(&image),
        Err(CpuError::RomTooLarge(0x20000))
    );
}

#[test]
fn reset_clears_every_register() {
    let mut cpu = Cpu::new();
    cpu.load_rom(&[0x00]).unwrap();
    cpu.set_a(0x11);
    cpu.set_x(0x22); // X must clear too, not only Y
    cpu.set_y(0x33);
    cpu.set_sp(0x44);
    cpu.set_status(Status::NEGATIVE | Status::CARRY);

    cpu.reset();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.status(), Status::empty());
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn reset_rereads_the_vector() {
    let mut cpu = Cpu::new();
    cpu.memory_mut().write_word(0xFFFC, 0x9000);
    cpu.reset();

    assert_eq!(cpu.pc(), 0x9000);
}

#[test]
fn reloading_overwrites_previous_image() {
    let mut cpu = Cpu::new();
    cpu.load_and_reset(&[0xA9, 0x01, 0x00]).unwrap();
    cpu.run().unwrap();
    assert_eq!(cpu.a(), 0x01);

    cpu.load_and_reset(&[0xA9, 0x02, 0x00]).unwrap();
    cpu.run().unwrap();
    assert_eq!(cpu.a(), 0x02);
}
