//! # Instruction Metadata
//!
//! The static opcode table: for each of the 256 opcode bytes, the instruction
//! identity it decodes to and the addressing mode it uses. The table is the
//! single source of truth shared by the executor, the disassembler and any
//! external assembler.
//!
//! - **151 documented opcodes** map to one of 56 [`Mnemonic`]s
//! - **105 undocumented opcodes** carry no instruction and the `"???"` mnemonic;
//!   executing one is an error, disassembling one renders `???`
//!
//! The table is a `const`, built at compile time and never mutated.

use crate::addressing::AddressingMode;
use std::fmt;
use std::str::FromStr;

/// Instruction identity, independent of addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Add with carry
    Adc,
    /// Logical AND
    And,
    /// Arithmetic shift left
    Asl,
    /// Branch if carry clear
    Bcc,
    /// Branch if carry set
    Bcs,
    /// Branch if equal (zero set)
    Beq,
    /// Bit test
    Bit,
    /// Branch if minus
    Bmi,
    /// Branch if not equal (zero clear)
    Bne,
    /// Branch if plus
    Bpl,
    /// Force interrupt (stub)
    Brk,
    /// Branch if overflow clear
    Bvc,
    /// Branch if overflow set
    Bvs,
    /// Clear carry
    Clc,
    /// Clear decimal mode
    Cld,
    /// Clear interrupt disable
    Cli,
    /// Clear overflow
    Clv,
    /// Compare accumulator
    Cmp,
    /// Compare X
    Cpx,
    /// Compare Y
    Cpy,
    /// Decrement memory
    Dec,
    /// Decrement X
    Dex,
    /// Decrement Y
    Dey,
    /// Exclusive OR
    Eor,
    /// Increment memory
    Inc,
    /// Increment X
    Inx,
    /// Increment Y
    Iny,
    /// Jump
    Jmp,
    /// Jump to subroutine
    Jsr,
    /// Load accumulator
    Lda,
    /// Load X
    Ldx,
    /// Load Y
    Ldy,
    /// Logical shift right
    Lsr,
    /// No operation
    Nop,
    /// Logical inclusive OR
    Ora,
    /// Push accumulator
    Pha,
    /// Push processor status
    Php,
    /// Pull accumulator
    Pla,
    /// Pull processor status
    Plp,
    /// Rotate left
    Rol,
    /// Rotate right
    Ror,
    /// Return from interrupt (stub)
    Rti,
    /// Return from subroutine
    Rts,
    /// Subtract with carry
    Sbc,
    /// Set carry
    Sec,
    /// Set decimal mode
    Sed,
    /// Set interrupt disable
    Sei,
    /// Store accumulator
    Sta,
    /// Store X
    Stx,
    /// Store Y
    Sty,
    /// Transfer A to X
    Tax,
    /// Transfer A to Y
    Tay,
    /// Transfer S to X
    Tsx,
    /// Transfer X to A
    Txa,
    /// Transfer X to S
    Txs,
    /// Transfer Y to A
    Tya,
}

impl Mnemonic {
    /// All 56 documented instructions in alphabetical order.
    pub const ALL: [Mnemonic; 56] = [
        Mnemonic::Adc,
        Mnemonic::And,
        Mnemonic::Asl,
        Mnemonic::Bcc,
        Mnemonic::Bcs,
        Mnemonic::Beq,
        Mnemonic::Bit,
        Mnemonic::Bmi,
        Mnemonic::Bne,
        Mnemonic::Bpl,
        Mnemonic::Brk,
        Mnemonic::Bvc,
        Mnemonic::Bvs,
        Mnemonic::Clc,
        Mnemonic::Cld,
        Mnemonic::Cli,
        Mnemonic::Clv,
        Mnemonic::Cmp,
        Mnemonic::Cpx,
        Mnemonic::Cpy,
        Mnemonic::Dec,
        Mnemonic::Dex,
        Mnemonic::Dey,
        Mnemonic::Eor,
        Mnemonic::Inc,
        Mnemonic::Inx,
        Mnemonic::Iny,
        Mnemonic::Jmp,
        Mnemonic::Jsr,
        Mnemonic::Lda,
        Mnemonic::Ldx,
        Mnemonic::Ldy,
        Mnemonic::Lsr,
        Mnemonic::Nop,
        Mnemonic::Ora,
        Mnemonic::Pha,
        Mnemonic::Php,
        Mnemonic::Pla,
        Mnemonic::Plp,
        Mnemonic::Rol,
        Mnemonic::Ror,
        Mnemonic::Rti,
        Mnemonic::Rts,
        Mnemonic::Sbc,
        Mnemonic::Sec,
        Mnemonic::Sed,
        Mnemonic::Sei,
        Mnemonic::Sta,
        Mnemonic::Stx,
        Mnemonic::Sty,
        Mnemonic::Tax,
        Mnemonic::Tay,
        Mnemonic::Tsx,
        Mnemonic::Txa,
        Mnemonic::Txs,
        Mnemonic::Tya,
    ];

    /// Upper-case three-letter assembler name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mnemonic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMnemonic(pub String);

impl fmt::Display for UnknownMnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mnemonic '{}'", self.0)
    }
}

impl std::error::Error for UnknownMnemonic {}

impl FromStr for Mnemonic {
    type Err = UnknownMnemonic;

    /// Parses a mnemonic, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mnemonic::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMnemonic(s.to_string()))
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.instruction, Some(Mnemonic::Lda));
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// assert_eq!(OPCODE_TABLE[0x02].mnemonic, "???");
/// assert!(OPCODE_TABLE[0x02].instruction.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", or "???" for undocumented opcodes).
    pub mnemonic: &'static str,

    /// Decoded instruction identity, `None` for undocumented opcodes.
    pub instruction: Option<Mnemonic>,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands), 1-3.
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    /// Returns true for the 151 documented opcodes.
    pub const fn is_documented(&self) -> bool {
        self.instruction.is_some()
    }
}

const fn op(mnemonic: Mnemonic, addressing_mode: AddressingMode) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic: mnemonic.as_str(),
        instruction: Some(mnemonic),
        addressing_mode,
        size_bytes: 1 + addressing_mode.operand_size(),
    }
}

const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
    mnemonic: "???",
    instruction: None,
    addressing_mode: AddressingMode::Implicit,
    size_bytes: 1,
};

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = {
    use AddressingMode::*;
    [
        op(Mnemonic::Brk, Implicit), // 0x00
        op(Mnemonic::Ora, IndirectX), // 0x01
        ILLEGAL, // 0x02
        ILLEGAL, // 0x03
        ILLEGAL, // 0x04
        op(Mnemonic::Ora, ZeroPage), // 0x05
        op(Mnemonic::Asl, ZeroPage), // 0x06
        ILLEGAL, // 0x07
        op(Mnemonic::Php, Implicit), // 0x08
        op(Mnemonic::Ora, Immediate), // 0x09
        op(Mnemonic::Asl, Accumulator), // 0x0A
        ILLEGAL, // 0x0B
        ILLEGAL, // 0x0C
        op(Mnemonic::Ora, Absolute), // 0x0D
        op(Mnemonic::Asl, Absolute), // 0x0E
        ILLEGAL, // 0x0F
        op(Mnemonic::Bpl, Relative), // 0x10
        op(Mnemonic::Ora, IndirectY), // 0x11
        ILLEGAL, // 0x12
        ILLEGAL, // 0x13
        ILLEGAL, // 0x14
        op(Mnemonic::Ora, ZeroPageX), // 0x15
        op(Mnemonic::Asl, ZeroPageX), // 0x16
        ILLEGAL, // 0x17
        op(Mnemonic::Clc, Implicit), // 0x18
        op(Mnemonic::Ora, AbsoluteY), // 0x19
        ILLEGAL, // 0x1A
        ILLEGAL, // 0x1B
        ILLEGAL, // 0x1C
        op(Mnemonic::Ora, AbsoluteX), // 0x1D
        op(Mnemonic::Asl, AbsoluteX), // 0x1E
        ILLEGAL, // 0x1F
        op(Mnemonic::Jsr, Absolute), // 0x20
        op(Mnemonic::And, IndirectX), // 0x21
        ILLEGAL, // 0x22
        ILLEGAL, // 0x23
        op(Mnemonic::Bit, ZeroPage), // 0x24
        op(Mnemonic::And, ZeroPage), // 0x25
        op(Mnemonic::Rol, ZeroPage), // 0x26
        ILLEGAL, // 0x27
        op(Mnemonic::Plp, Implicit), // 0x28
        op(Mnemonic::And, Immediate), // 0x29
        op(Mnemonic::Rol, Accumulator), // 0x2A
        ILLEGAL, // 0x2B
        op(Mnemonic::Bit, Absolute), // 0x2C
        op(Mnemonic::And, Absolute), // 0x2D
        op(Mnemonic::Rol, Absolute), // 0x2E
        ILLEGAL, // 0x2F
        op(Mnemonic::Bmi, Relative), // 0x30
        op(Mnemonic::And, IndirectY), // 0x31
        ILLEGAL, // 0x32
        ILLEGAL, // 0x33
        ILLEGAL, // 0x34
        op(Mnemonic::And, ZeroPageX), // 0x35
        op(Mnemonic::Rol, ZeroPageX), // 0x36
        ILLEGAL, // 0x37
        op(Mnemonic::Sec, Implicit), // 0x38
        op(Mnemonic::And, AbsoluteY), // 0x39
        ILLEGAL, // 0x3A
        ILLEGAL, // 0x3B
        ILLEGAL, // 0x3C
        op(Mnemonic::And, AbsoluteX), // 0x3D
        op(Mnemonic::Rol, AbsoluteX), // 0x3E
        ILLEGAL, // 0x3F
        op(Mnemonic::Rti, Implicit), // 0x40
        op(Mnemonic::Eor, IndirectX), // 0x41
        ILLEGAL, // 0x42
        ILLEGAL, // 0x43
        ILLEGAL, // 0x44
        op(Mnemonic::Eor, ZeroPage), // 0x45
        op(Mnemonic::Lsr, ZeroPage), // 0x46
        ILLEGAL, // 0x47
        op(Mnemonic::Pha, Implicit), // 0x48
        op(Mnemonic::Eor, Immediate), // 0x49
        op(Mnemonic::Lsr, Accumulator), // 0x4A
        ILLEGAL, // 0x4B
        op(Mnemonic::Jmp, Absolute), // 0x4C
        op(Mnemonic::Eor, Absolute), // 0x4D
        op(Mnemonic::Lsr, Absolute), // 0x4E
        ILLEGAL, // 0x4F
        op(Mnemonic::Bvc, Relative), // 0x50
        op(Mnemonic::Eor, IndirectY), // 0x51
        ILLEGAL, // 0x52
        ILLEGAL, // 0x53
        ILLEGAL, // 0x54
        op(Mnemonic::Eor, ZeroPageX), // 0x55
        op(Mnemonic::Lsr, ZeroPageX), // 0x56
        ILLEGAL, // 0x57
        op(Mnemonic::Cli, Implicit), // 0x58
        op(Mnemonic::Eor, AbsoluteY), // 0x59
        ILLEGAL, // 0x5A
        ILLEGAL, // 0x5B
        ILLEGAL, // 0x5C
        op(Mnemonic::Eor, AbsoluteX), // 0x5D
        op(Mnemonic::Lsr, AbsoluteX), // 0x5E
        ILLEGAL, // 0x5F
        op(Mnemonic::Rts, Implicit), // 0x60
        op(Mnemonic::Adc, IndirectX), // 0x61
        ILLEGAL, // 0x62
        ILLEGAL, // 0x63
        ILLEGAL, // 0x64
        op(Mnemonic::Adc, ZeroPage), // 0x65
        op(Mnemonic::Ror, ZeroPage), // 0x66
        ILLEGAL, // 0x67
        op(Mnemonic::Pla, Implicit), // 0x68
        op(Mnemonic::Adc, Immediate), // 0x69
        op(Mnemonic::Ror, Accumulator), // 0x6A
        ILLEGAL, // 0x6B
        op(Mnemonic::Jmp, Indirect), // 0x6C
        op(Mnemonic::Adc, Absolute), // 0x6D
        op(Mnemonic::Ror, Absolute), // 0x6E
        ILLEGAL, // 0x6F
        op(Mnemonic::Bvs, Relative), // 0x70
        op(Mnemonic::Adc, IndirectY), // 0x71
        ILLEGAL, // 0x72
        ILLEGAL, // 0x73
        ILLEGAL, // 0x74
        op(Mnemonic::Adc, ZeroPageX), // 0x75
        op(Mnemonic::Ror, ZeroPageX), // 0x76
        ILLEGAL, // 0x77
        op(Mnemonic::Sei, Implicit), // 0x78
        op(Mnemonic::Adc, AbsoluteY), // 0x79
        ILLEGAL, // 0x7A
        ILLEGAL, // 0x7B
        ILLEGAL, // 0x7C
        op(Mnemonic::Adc, AbsoluteX), // 0x7D
        op(Mnemonic::Ror, AbsoluteX), // 0x7E
        ILLEGAL, // 0x7F
        ILLEGAL, // 0x80
        op(Mnemonic::Sta, IndirectX), // 0x81
        ILLEGAL, // 0x82
        ILLEGAL, // 0x83
        op(Mnemonic::Sty, ZeroPage), // 0x84
        op(Mnemonic::Sta, ZeroPage), // 0x85
        op(Mnemonic::Stx, ZeroPage), // 0x86
        ILLEGAL, // 0x87
        op(Mnemonic::Dey, Implicit), // 0x88
        ILLEGAL, // 0x89
        op(Mnemonic::Txa, Implicit), // 0x8A
        ILLEGAL, // 0x8B
        op(Mnemonic::Sty, Absolute), // 0x8C
        op(Mnemonic::Sta, Absolute), // 0x8D
        op(Mnemonic::Stx, Absolute), // 0x8E
        ILLEGAL, // 0x8F
        op(Mnemonic::Bcc, Relative), // 0x90
        op(Mnemonic::Sta, IndirectY), // 0x91
        ILLEGAL, // 0x92
        ILLEGAL, // 0x93
        op(Mnemonic::Sty, ZeroPageX), // 0x94
        op(Mnemonic::Sta, ZeroPageX), // 0x95
        op(Mnemonic::Stx, ZeroPageY), // 0x96
        ILLEGAL, // 0x97
        op(Mnemonic::Tya, Implicit), // 0x98
        op(Mnemonic::Sta, AbsoluteY), // 0x99
        op(Mnemonic::Txs, Implicit), // 0x9A
        ILLEGAL, // 0x9B
        ILLEGAL, // 0x9C
        op(Mnemonic::Sta, AbsoluteX), // 0x9D
        ILLEGAL, // 0x9E
        ILLEGAL, // 0x9F
        op(Mnemonic::Ldy, Immediate), // 0xA0
        op(Mnemonic::Lda, IndirectX), // 0xA1
        op(Mnemonic::Ldx, Immediate), // 0xA2
        ILLEGAL, // 0xA3
        op(Mnemonic::Ldy, ZeroPage), // 0xA4
        op(Mnemonic::Lda, ZeroPage), // 0xA5
        op(Mnemonic::Ldx, ZeroPage), // 0xA6
        ILLEGAL, // 0xA7
        op(Mnemonic::Tay, Implicit), // 0xA8
        op(Mnemonic::Lda, Immediate), // 0xA9
        op(Mnemonic::Tax, Implicit), // 0xAA
        ILLEGAL, // 0xAB
        op(Mnemonic::Ldy, Absolute), // 0xAC
        op(Mnemonic::Lda, Absolute), // 0xAD
        op(Mnemonic::Ldx, Absolute), // 0xAE
        ILLEGAL, // 0xAF
        op(Mnemonic::Bcs, Relative), // 0xB0
        op(Mnemonic::Lda, IndirectY), // 0xB1
        ILLEGAL, // 0xB2
        ILLEGAL, // 0xB3
        op(Mnemonic::Ldy, ZeroPageX), // 0xB4
        op(Mnemonic::Lda, ZeroPageX), // 0xB5
        op(Mnemonic::Ldx, ZeroPageY), // 0xB6
        ILLEGAL, // 0xB7
        op(Mnemonic::Clv, Implicit), // 0xB8
        op(Mnemonic::Lda, AbsoluteY), // 0xB9
        op(Mnemonic::Tsx, Implicit), // 0xBA
        ILLEGAL, // 0xBB
        op(Mnemonic::Ldy, AbsoluteX), // 0xBC
        op(Mnemonic::Lda, AbsoluteX), // 0xBD
        op(Mnemonic::Ldx, AbsoluteY), // 0xBE
        ILLEGAL, // 0xBF
        op(Mnemonic::Cpy, Immediate), // 0xC0
        op(Mnemonic::Cmp, IndirectX), // 0xC1
        ILLEGAL, // 0xC2
        ILLEGAL, // 0xC3
        op(Mnemonic::Cpy, ZeroPage), // 0xC4
        op(Mnemonic::Cmp, ZeroPage), // 0xC5
        op(Mnemonic::Dec, ZeroPage), // 0xC6
        ILLEGAL, // 0xC7
        op(Mnemonic::Iny, Implicit), // 0xC8
        op(Mnemonic::Cmp, Immediate), // 0xC9
        op(Mnemonic::Dex, Implicit), // 0xCA
        ILLEGAL, // 0xCB
        op(Mnemonic::Cpy, Absolute), // 0xCC
        op(Mnemonic::Cmp, Absolute), // 0xCD
        op(Mnemonic::Dec, Absolute), // 0xCE
        ILLEGAL, // 0xCF
        op(Mnemonic::Bne, Relative), // 0xD0
        op(Mnemonic::Cmp, IndirectY), // 0xD1
        ILLEGAL, // 0xD2
        ILLEGAL, // 0xD3
        ILLEGAL, // 0xD4
        op(Mnemonic::Cmp, ZeroPageX), // 0xD5
        op(Mnemonic::Dec, ZeroPageX), // 0xD6
        ILLEGAL, // 0xD7
        op(Mnemonic::Cld, Implicit), // 0xD8
        op(Mnemonic::Cmp, AbsoluteY), // 0xD9
        ILLEGAL, // 0xDA
        ILLEGAL, // 0xDB
        ILLEGAL, // 0xDC
        op(Mnemonic::Cmp, AbsoluteX), // 0xDD
        op(Mnemonic::Dec, AbsoluteX), // 0xDE
        ILLEGAL, // 0xDF
        op(Mnemonic::Cpx, Immediate), // 0xE0
        op(Mnemonic::Sbc, IndirectX), // 0xE1
        ILLEGAL, // 0xE2
        ILLEGAL, // 0xE3
        op(Mnemonic::Cpx, ZeroPage), // 0xE4
        op(Mnemonic::Sbc, ZeroPage), // 0xE5
        op(Mnemonic::Inc, ZeroPage), // 0xE6
        ILLEGAL, // 0xE7
        op(Mnemonic::Inx, Implicit), // 0xE8
        op(Mnemonic::Sbc, Immediate), // 0xE9
        op(Mnemonic::Nop, Implicit), // 0xEA
        ILLEGAL, // 0xEB
        op(Mnemonic::Cpx, Absolute), // 0xEC
        op(Mnemonic::Sbc, Absolute), // 0xED
        op(Mnemonic::Inc, Absolute), // 0xEE
        ILLEGAL, // 0xEF
        op(Mnemonic::Beq, Relative), // 0xF0
        op(Mnemonic::Sbc, IndirectY), // 0xF1
        ILLEGAL, // 0xF2
        ILLEGAL, // 0xF3
        ILLEGAL, // 0xF4
        op(Mnemonic::Sbc, ZeroPageX), // 0xF5
        op(Mnemonic::Inc, ZeroPageX), // 0xF6
        ILLEGAL, // 0xF7
        op(Mnemonic::Sed, Implicit), // 0xF8
        op(Mnemonic::Sbc, AbsoluteY), // 0xF9
        ILLEGAL, // 0xFA
        ILLEGAL, // 0xFB
        ILLEGAL, // 0xFC
        op(Mnemonic::Sbc, AbsoluteX), // 0xFD
        op(Mnemonic::Inc, AbsoluteX), // 0xFE
        ILLEGAL, // 0xFF
    ]
};

/// Finds the opcode for a mnemonic/addressing-mode pair.
///
/// Returns `None` when the instruction does not support that mode.
///
/// # Examples
///
/// ```
/// use emu6502::{find_opcode, AddressingMode, Mnemonic};
///
/// assert_eq!(find_opcode(Mnemonic::Sta, AddressingMode::AbsoluteY), Some(0x99));
/// assert_eq!(find_opcode(Mnemonic::Sta, AddressingMode::Immediate), None);
/// ```
pub fn find_opcode(mnemonic: Mnemonic, mode: AddressingMode) -> Option<u8> {
    OPCODE_TABLE
        .iter()
        .position(|m| m.instruction == Some(mnemonic) && m.addressing_mode == mode)
        .map(|index| index as u8)
}

/// Lists the addressing modes an instruction supports, in opcode order.
pub fn supported_modes(mnemonic: Mnemonic) -> Vec<AddressingMode> {
    OPCODE_TABLE
        .iter()
        .filter(|m| m.instruction == Some(mnemonic))
        .map(|m| m.addressing_mode)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_count() {
        let documented = OPCODE_TABLE.iter().filter(|m| m.is_documented()).count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn test_every_mnemonic_has_an_opcode() {
        for mnemonic in Mnemonic::ALL {
            assert!(
                !supported_modes(mnemonic).is_empty(),
                "{} has no opcode",
                mnemonic
            );
        }
    }

    #[test]
    fn test_find_opcode_round_trips_table() {
        for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
            if let Some(mnemonic) = metadata.instruction {
                assert_eq!(
                    find_opcode(mnemonic, metadata.addressing_mode),
                    Some(opcode as u8)
                );
            }
        }
    }

    #[test]
    fn test_mnemonic_parse() {
        assert_eq!("lda".parse::<Mnemonic>(), Ok(Mnemonic::Lda));
        assert_eq!("TXS".parse::<Mnemonic>(), Ok(Mnemonic::Txs));
        assert!("XYZ".parse::<Mnemonic>().is_err());
    }

    #[test]
    fn test_size_follows_mode() {
        assert_eq!(OPCODE_TABLE[0x6C].size_bytes, 3); // JMP ($nnnn)
        assert_eq!(OPCODE_TABLE[0x0A].size_bytes, 1); // ASL A
        assert_eq!(OPCODE_TABLE[0xD0].size_bytes, 2); // BNE
    }
}
