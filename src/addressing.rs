//! # Addressing Modes
//!
//! The encoding families of the 6502. Each mode determines how many operand
//! bytes follow an opcode and how the CPU turns them into an effective
//! address. Resolution itself lives on the CPU, next to the registers it
//! consults.

/// 6502 addressing mode enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the operation is implied by the instruction.
    ///
    /// Examples: CLC, INX, BRK
    Implied,

    /// Operates directly on the accumulator.
    ///
    /// Examples: ASL A, LSR A
    Accumulator,

    /// 8-bit constant embedded in the instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address within the zero page (0x0000-0x00FF).
    ///
    /// Example: LDA $C0
    ZeroPage,

    /// Zero-page address indexed by X; wraps within the zero page.
    ///
    /// Example: LDA $C0,X
    ZeroPageX,

    /// Zero-page address indexed by Y; wraps within the zero page.
    ///
    /// Example: LDX $C0,Y
    ZeroPageY,

    /// Signed 8-bit displacement used by branch instructions.
    Relative,

    /// Full 16-bit address, little-endian.
    ///
    /// Example: LDA $C000
    Absolute,

    /// 16-bit address indexed by X.
    AbsoluteX,

    /// 16-bit address indexed by Y.
    AbsoluteY,

    /// Jump through a 16-bit pointer. Used only by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: the operand plus X (wrapping in the zero page)
    /// names the location of a 16-bit pointer.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: the operand names a zero-page pointer; Y is added
    /// to the pointed-to address.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}
