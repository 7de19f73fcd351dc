//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;

/// Format a single instruction as assembly text
///
/// The operand is substituted into the addressing mode's display format:
/// two hex digits for one-byte operands, four for words. Relative branches
/// show the resolved absolute target rather than the raw offset.
///
/// # Arguments
///
/// * `instr` - The instruction to format
///
/// # Returns
///
/// A string containing the formatted assembly instruction
pub fn format_instruction(instr: &Instruction) -> String {
    let format = instr.addressing_mode.display_format();

    match format_operand(instr) {
        Some(operand) => format!("{}{}", instr.mnemonic, format.replace("{}", &operand)),
        None => format!("{}{}", instr.mnemonic, format),
    }
}

/// Format the operand value as hex, or `None` if the mode takes no operand
fn format_operand(instr: &Instruction) -> Option<String> {
    match (instr.addressing_mode, instr.operand_bytes.as_slice()) {
        (AddressingMode::Relative, &[offset]) => {
            let next = instr.address.wrapping_add(instr.size_bytes as u16);
            Some(format!("{:04X}", next.wrapping_add_signed(offset as i8 as i16)))
        }
        (_, &[value]) => Some(format!("{:02X}", value)),
        (_, &[low, high]) => Some(format!("{:04X}", u16::from_le_bytes([low, high]))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instruction(
        address: u16,
        mnemonic: &'static str,
        addressing_mode: AddressingMode,
        operand_bytes: Vec<u8>,
    ) -> Instruction {
        Instruction {
            address,
            opcode: 0,
            mnemonic,
            addressing_mode,
            size_bytes: 1 + operand_bytes.len() as u8,
            operand_bytes,
        }
    }

    #[test]
    fn test_format_immediate() {
        let instr = instruction(0x8000, "LDA", AddressingMode::Immediate, vec![0x42]);
        assert_eq!(format_instruction(&instr), "LDA #$42");
    }

    #[test]
    fn test_format_absolute() {
        let instr = instruction(0x0000, "STA", AddressingMode::Absolute, vec![0x00, 0x80]);
        assert_eq!(format_instruction(&instr), "STA $8000");
    }

    #[test]
    fn test_format_implied() {
        let instr = instruction(0x1000, "NOP", AddressingMode::Implicit, vec![]);
        assert_eq!(format_instruction(&instr), "NOP");
    }

    #[test]
    fn test_format_accumulator() {
        let instr = instruction(0x1000, "ASL", AddressingMode::Accumulator, vec![]);
        assert_eq!(format_instruction(&instr), "ASL A");
    }

    #[test]
    fn test_format_indirect_modes() {
        let instr = instruction(0, "JMP", AddressingMode::Indirect, vec![0x20, 0x01]);
        assert_eq!(format_instruction(&instr), "JMP ($0120)");

        let instr = instruction(0, "LDA", AddressingMode::IndirectX, vec![0x10]);
        assert_eq!(format_instruction(&instr), "LDA ($10,X)");

        let instr = instruction(0, "LDA", AddressingMode::IndirectY, vec![0x10]);
        assert_eq!(format_instruction(&instr), "LDA ($10),Y");
    }

    #[test]
    fn test_format_relative_backward() {
        let instr = instruction(0x0200, "BCC", AddressingMode::Relative, vec![0xF0]);
        assert_eq!(format_instruction(&instr), "BCC $01F2");
    }

    #[test]
    fn test_format_illegal_opcode() {
        let instr = instruction(0x2000, "???", AddressingMode::Implicit, vec![]);
        assert_eq!(format_instruction(&instr), "???");
    }
}
