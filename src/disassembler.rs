//! 6502 Disassembler Module
//!
//! Converts binary machine code into human-readable assembly mnemonics.
//!
//! Two entry points share the same decoder and formatter:
//!
//! - [`disassemble_bytes`] decodes a plain byte slice
//! - [`Disassembler`] walks a block of machine memory and renders registered
//!   non-executable sections as `DB` data lines instead of instructions

pub mod decoder;
pub mod formatter;

use crate::addressing::AddressingMode;
use crate::memory::{Memory, MemoryBus};
use crate::resolver::InstructionStream;
use crate::ExecutionError;

pub use formatter::format_instruction;

/// Maximum number of data bytes rendered on one `DB` line.
pub const MAX_DATA_LINE_BYTES: usize = 16;

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "JMP"), or "???" for an
    /// undocumented opcode
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,
}

/// One line of a memory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisassemblyLine {
    /// Address of the first byte the line covers
    pub address: u16,

    /// Instruction text or `DB` data directive
    pub text: String,
}

/// A memory range holding data rather than code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonExecutableSection {
    pub address: u16,
    pub length: u16,
}

impl NonExecutableSection {
    fn contains(&self, address: u16) -> bool {
        let start = self.address as usize;
        (start..start + self.length as usize).contains(&(address as usize))
    }

    fn end(&self) -> usize {
        self.address as usize + self.length as usize
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// Undocumented opcodes decode as one-byte `???` entries. A final instruction
/// whose operands run past the end of the slice is also emitted as a one-byte
/// `???` entry.
///
/// # Arguments
///
/// * `bytes` - The machine code to disassemble
/// * `start_address` - Address of `bytes[0]`, used for listing addresses and
///   branch targets
///
/// # Examples
///
/// ```
/// use emu6502::{disassemble_bytes, disassembler::format_instruction};
///
/// let listing = disassemble_bytes(&[0xA9, 0x10, 0xD0, 0xFC], 0x0200);
/// let text: Vec<String> = listing.iter().map(format_instruction).collect();
///
/// assert_eq!(text, ["LDA #$10", "BNE $0200"]);
/// ```
pub fn disassemble_bytes(bytes: &[u8], start_address: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = start_address;

    while offset < bytes.len() {
        let instr = decoder::decode_instruction(&bytes[offset..], address)
            .unwrap_or_else(|| decoder::unknown_instruction(bytes[offset], address));

        offset += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}

/// Listing generator over a block of machine memory.
///
/// # Examples
///
/// ```
/// use emu6502::{Disassembler, Machine};
///
/// let mut machine = Machine::new();
/// // LDA $0205 ; RTS ; two data bytes
/// machine.load_executable(&[0xAD, 0x05, 0x02, 0x60, 0xEA, 0x01, 0x02], 0x0200);
///
/// let mut disassembler = Disassembler::new(machine.memory(), 0x0200, 7);
/// disassembler.add_non_executable_section(0x0205, 2);
///
/// let lines = disassembler.disassemble().unwrap();
/// let text: Vec<&str> = lines.iter().map(|line| line.text.as_str()).collect();
/// assert_eq!(text, ["LDA $0205", "RTS", "NOP", "DB 0x01, 0x02"]);
/// ```
pub struct Disassembler<'a> {
    memory: &'a Memory,
    start_address: u16,
    length: u16,
    current_address: u16,
    non_executable_sections: Vec<NonExecutableSection>,
}

impl<'a> Disassembler<'a> {
    /// Creates a disassembler for `length` bytes of `memory` from
    /// `start_address`.
    pub fn new(memory: &'a Memory, start_address: u16, length: u16) -> Self {
        Self {
            memory,
            start_address,
            length,
            current_address: start_address,
            non_executable_sections: Vec::new(),
        }
    }

    /// Address of the next byte to be listed.
    pub fn current_address(&self) -> u16 {
        self.current_address
    }

    /// Returns true once the cursor has reached the end of the block.
    pub fn is_end_of_data(&self) -> bool {
        self.current_address as usize >= self.start_address as usize + self.length as usize
    }

    /// Marks `length` bytes from `address` as data.
    pub fn add_non_executable_section(&mut self, address: u16, length: u16) {
        self.non_executable_sections
            .push(NonExecutableSection { address, length });
    }

    /// Removes the section at `index`; returns false if there is none.
    pub fn remove_non_executable_section(&mut self, index: usize) -> bool {
        if index < self.non_executable_sections.len() {
            self.non_executable_sections.remove(index);
            true
        } else {
            false
        }
    }

    pub fn non_executable_sections(&self) -> &[NonExecutableSection] {
        &self.non_executable_sections
    }

    /// Produces the listing for the whole block, starting again from the
    /// start address.
    ///
    /// # Errors
    ///
    /// [`ExecutionError::EndOfData`] if an instruction's operands or a data
    /// section run past the end of the block.
    pub fn disassemble(&mut self) -> Result<Vec<DisassemblyLine>, ExecutionError> {
        self.current_address = self.start_address;
        let mut lines = Vec::new();

        while !self.is_end_of_data() {
            let address = self.current_address;
            let section = self
                .non_executable_sections
                .iter()
                .copied()
                .find(|section| section.contains(address));

            let text = match section {
                Some(section) => self.data_line(section)?,
                None => self.instruction_line()?,
            };
            lines.push(DisassemblyLine { address, text });
        }

        Ok(lines)
    }

    /// Renders up to [`MAX_DATA_LINE_BYTES`] bytes of `section` from the
    /// cursor.
    fn data_line(&mut self, section: NonExecutableSection) -> Result<String, ExecutionError> {
        let remaining = section.end() - self.current_address as usize;
        let count = remaining.min(MAX_DATA_LINE_BYTES);

        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(format!("0x{:02X}", self.fetch_byte()?));
        }

        Ok(format!("DB {}", values.join(", ")))
    }

    fn instruction_line(&mut self) -> Result<String, ExecutionError> {
        let address = self.current_address;
        let opcode = self.fetch_byte()?;
        let size = crate::OPCODE_TABLE[opcode as usize].size_bytes;

        let mut bytes = vec![opcode];
        for _ in 1..size {
            bytes.push(self.fetch_byte()?);
        }

        let instr = decoder::decode_instruction(&bytes, address)
            .unwrap_or_else(|| decoder::unknown_instruction(opcode, address));
        Ok(format_instruction(&instr))
    }
}

impl InstructionStream for Disassembler<'_> {
    fn fetch_byte(&mut self) -> Result<u8, ExecutionError> {
        if self.is_end_of_data() {
            return Err(ExecutionError::EndOfData {
                address: self.current_address,
            });
        }
        let value = self.memory.read(self.current_address);
        self.current_address = self.current_address.wrapping_add(1);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_with(bytes: &[u8], address: u16) -> Memory {
        let mut memory = Memory::new();
        assert!(memory.load(bytes, address, true));
        memory
    }

    #[test]
    fn test_disassemble_bytes_empty() {
        assert!(disassemble_bytes(&[], 0).is_empty());
    }

    #[test]
    fn test_disassemble_bytes_truncated_tail() {
        let instructions = disassemble_bytes(&[0xEA, 0xAD, 0x10], 0x1000);
        assert_eq!(instructions.len(), 3);
        assert_eq!(instructions[1].mnemonic, "???");
        assert_eq!(instructions[1].address, 0x1001);
    }

    #[test]
    fn test_sections_add_and_remove() {
        let memory = Memory::new();
        let mut disassembler = Disassembler::new(&memory, 0, 0x10);
        disassembler.add_non_executable_section(0x04, 2);
        disassembler.add_non_executable_section(0x08, 4);
        assert_eq!(disassembler.non_executable_sections().len(), 2);

        assert!(!disassembler.remove_non_executable_section(2));
        assert!(disassembler.remove_non_executable_section(0));
        assert_eq!(
            disassembler.non_executable_sections(),
            &[NonExecutableSection {
                address: 0x08,
                length: 4
            }]
        );
    }

    #[test]
    fn test_data_lines_split_at_sixteen_bytes() {
        let data: Vec<u8> = (0..20).collect();
        let memory = memory_with(&data, 0x3000);
        let mut disassembler = Disassembler::new(&memory, 0x3000, 20);
        disassembler.add_non_executable_section(0x3000, 20);

        let lines = disassembler.disassemble().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].address, 0x3000);
        assert!(lines[0].text.ends_with("0x0E, 0x0F"));
        assert_eq!(lines[1].address, 0x3010);
        assert_eq!(lines[1].text, "DB 0x10, 0x11, 0x12, 0x13");
    }

    #[test]
    fn test_truncated_instruction_is_end_of_data() {
        let memory = memory_with(&[0xAD, 0x10], 0x0200);
        let mut disassembler = Disassembler::new(&memory, 0x0200, 2);
        assert_eq!(
            disassembler.disassemble(),
            Err(ExecutionError::EndOfData { address: 0x0202 })
        );
    }

    #[test]
    fn test_disassemble_restarts_from_start() {
        let memory = memory_with(&[0xEA, 0xEA], 0x0200);
        let mut disassembler = Disassembler::new(&memory, 0x0200, 2);
        let first = disassembler.disassemble().unwrap();
        assert!(disassembler.is_end_of_data());
        let second = disassembler.disassemble().unwrap();
        assert_eq!(first, second);
    }
}
