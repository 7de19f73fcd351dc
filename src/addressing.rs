//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor.
//! Each mode determines how many operand bytes follow the opcode and how the
//! effective address is derived from them. The address arithmetic itself lives
//! in [`crate::resolver`]; this module only carries the static, per-mode facts
//! shared by the executor, the disassembler and external assemblers.

use std::fmt;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (offset is relative to the address after the operand)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X, may cross a page)
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y, may cross a page)
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X). The pointer location and its high byte both wrap
    /// within zero page.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y. The pointer's high byte wraps within zero page,
    /// but adding Y to the dereferenced address carries into the high byte.
    IndirectY,
}

impl AddressingMode {
    /// Every addressing mode, in declaration order.
    pub const ALL: [AddressingMode; 13] = [
        AddressingMode::Implicit,
        AddressingMode::Accumulator,
        AddressingMode::Immediate,
        AddressingMode::ZeroPage,
        AddressingMode::ZeroPageX,
        AddressingMode::ZeroPageY,
        AddressingMode::Relative,
        AddressingMode::Absolute,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteY,
        AddressingMode::Indirect,
        AddressingMode::IndirectX,
        AddressingMode::IndirectY,
    ];

    /// Number of operand bytes that follow an opcode using this mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::Implicit.operand_size(), 0);
    /// assert_eq!(AddressingMode::IndirectY.operand_size(), 1);
    /// assert_eq!(AddressingMode::AbsoluteX.operand_size(), 2);
    /// ```
    pub const fn operand_size(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Display template used by the disassembler.
    ///
    /// The `{}` placeholder stands for the operand, already rendered as 2 or 4
    /// hex digits (relative branches are shown as their resolved target).
    pub const fn display_format(self) -> &'static str {
        match self {
            AddressingMode::Implicit => "",
            AddressingMode::Accumulator => " A",
            AddressingMode::Immediate => " #${}",
            AddressingMode::ZeroPage
            | AddressingMode::Relative
            | AddressingMode::Absolute => " ${}",
            AddressingMode::ZeroPageX | AddressingMode::AbsoluteX => " ${},X",
            AddressingMode::ZeroPageY | AddressingMode::AbsoluteY => " ${},Y",
            AddressingMode::Indirect => " (${})",
            AddressingMode::IndirectX => " (${},X)",
            AddressingMode::IndirectY => " (${}),Y",
        }
    }

    /// Returns true for modes whose operand resolves to a memory address
    /// (everything except Implicit, Accumulator, Immediate and Relative).
    pub const fn is_memory(self) -> bool {
        !matches!(
            self,
            AddressingMode::Implicit
                | AddressingMode::Accumulator
                | AddressingMode::Immediate
                | AddressingMode::Relative
        )
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_sizes_match_instruction_lengths() {
        let two_byte_modes = AddressingMode::ALL
            .iter()
            .filter(|m| m.operand_size() == 2)
            .count();
        assert_eq!(two_byte_modes, 4);
        assert_eq!(AddressingMode::Relative.operand_size(), 1);
    }

    #[test]
    fn test_display_format_has_placeholder_only_with_operand() {
        for mode in AddressingMode::ALL {
            let has_placeholder = mode.display_format().contains("{}");
            assert_eq!(has_placeholder, mode.operand_size() > 0, "{:?}", mode);
        }
    }

    #[test]
    fn test_memory_modes() {
        assert!(AddressingMode::ZeroPage.is_memory());
        assert!(AddressingMode::Indirect.is_memory());
        assert!(!AddressingMode::Immediate.is_memory());
        assert!(!AddressingMode::Relative.is_memory());
    }
}
