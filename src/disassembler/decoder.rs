//! Instruction decoder for the 6502 disassembler

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;
use crate::opcodes::OPCODE_TABLE;

/// Decode a single instruction from a byte slice
///
/// Undocumented opcodes decode to a one-byte instruction whose mnemonic is
/// `"???"`.
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// `None` if the slice is empty or too short to hold the operands
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, operands) = bytes.split_first()?;
    let metadata = &OPCODE_TABLE[opcode as usize];

    let operand_count = metadata.size_bytes as usize - 1;
    let operand_bytes = operands.get(..operand_count)?.to_vec();

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        operand_bytes,
        size_bytes: metadata.size_bytes,
    })
}

/// Placeholder for a byte that cannot be decoded as a complete instruction.
pub fn unknown_instruction(opcode: u8, address: u16) -> Instruction {
    Instruction {
        address,
        opcode,
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        operand_bytes: Vec::new(),
        size_bytes: 1,
    }
}
