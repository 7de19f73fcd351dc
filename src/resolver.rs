//! # Operand Fetch and Address Resolution
//!
//! Every addressing mode is resolved by consuming operand bytes from the
//! instruction stream (advancing PC) and, for the indirect modes, reading a
//! pointer from memory. The same fetch primitive backs execution and the
//! disassembler through the [`InstructionStream`] trait.
//!
//! ## Wraparound rules
//!
//! | Mode        | Rule                                                        |
//! |-------------|-------------------------------------------------------------|
//! | `$nn,X/Y`   | `(nn + index) mod 256`, never leaves page zero              |
//! | `$nnnn,X/Y` | 16-bit wrapping add, may cross pages                        |
//! | `($nnnn)`   | pointer high byte read from `nnnn + 1` (no page-wrap bug)   |
//! | `($nn,X)`   | pointer at `(nn + X) mod 256`, high byte at `(ptr+1) mod 256` |
//! | `($nn),Y`   | pointer high byte at `(nn+1) mod 256`, then 16-bit add of Y |
//! | relative    | PC after the operand plus the signed offset, 16-bit wrap    |

use crate::addressing::AddressingMode;
use crate::machine::Machine;
use crate::memory::MemoryBus;
use crate::opcodes::Mnemonic;
use crate::ExecutionError;

/// A cursor over executable bytes.
///
/// Implemented by [`Machine`] (cursor = PC, bounded by the loaded executable
/// window) and by [`crate::Disassembler`] (cursor = current listing address,
/// bounded by the block being disassembled).
pub trait InstructionStream {
    /// Returns the byte at the cursor and advances the cursor by one.
    ///
    /// Fails with [`ExecutionError::EndOfData`] once the cursor has reached
    /// the end of the stream.
    fn fetch_byte(&mut self) -> Result<u8, ExecutionError>;

    /// Fetches a little-endian 16-bit word.
    fn fetch_word(&mut self) -> Result<u16, ExecutionError> {
        let low = self.fetch_byte()?;
        let high = self.fetch_byte()?;
        Ok(u16::from_le_bytes([low, high]))
    }
}

impl Machine {
    /// Zero page: `$nn`.
    pub fn zero_page_address(&mut self) -> Result<u8, ExecutionError> {
        self.fetch_byte()
    }

    /// X-indexed zero page: `$nn,X`, wrapping within page zero.
    pub fn zero_page_x_address(&mut self) -> Result<u8, ExecutionError> {
        Ok(self.fetch_byte()?.wrapping_add(self.cpu.x))
    }

    /// Y-indexed zero page: `$nn,Y`, wrapping within page zero.
    pub fn zero_page_y_address(&mut self) -> Result<u8, ExecutionError> {
        Ok(self.fetch_byte()?.wrapping_add(self.cpu.y))
    }

    /// Absolute: `$nnnn`.
    pub fn absolute_address(&mut self) -> Result<u16, ExecutionError> {
        self.fetch_word()
    }

    /// X-indexed absolute: `$nnnn,X`.
    pub fn absolute_x_address(&mut self) -> Result<u16, ExecutionError> {
        Ok(self.fetch_word()?.wrapping_add(self.cpu.x as u16))
    }

    /// Y-indexed absolute: `$nnnn,Y`.
    pub fn absolute_y_address(&mut self) -> Result<u16, ExecutionError> {
        Ok(self.fetch_word()?.wrapping_add(self.cpu.y as u16))
    }

    /// Indirect: `($nnnn)`, JMP only.
    ///
    /// The high byte of the target comes from `pointer + 1` even when the
    /// pointer sits at the end of a page; the NMOS page-wrap bug is not
    /// reproduced.
    pub fn indirect_address(&mut self) -> Result<u16, ExecutionError> {
        let pointer = self.fetch_word()?;
        let low = self.memory.read(pointer);
        let high = self.memory.read(pointer.wrapping_add(1));
        Ok(u16::from_le_bytes([low, high]))
    }

    /// Indexed indirect: `($nn,X)`.
    pub fn indexed_indirect_address(&mut self) -> Result<u16, ExecutionError> {
        let pointer = self.fetch_byte()?.wrapping_add(self.cpu.x);
        Ok(self.read_zero_page_word(pointer))
    }

    /// Indirect indexed: `($nn),Y`.
    pub fn indirect_indexed_address(&mut self) -> Result<u16, ExecutionError> {
        let pointer = self.fetch_byte()?;
        let base = self.read_zero_page_word(pointer);
        Ok(base.wrapping_add(self.cpu.y as u16))
    }

    /// Relative: branch target computed from the signed offset byte and the
    /// PC value after that byte has been fetched.
    pub fn relative_address(&mut self) -> Result<u16, ExecutionError> {
        let offset = self.fetch_byte()? as i8;
        Ok(self.cpu.pc.wrapping_add_signed(offset as i16))
    }

    /// Resolves the effective address for any memory-addressing mode.
    ///
    /// Implicit, Accumulator and Immediate have no address; they are rejected
    /// with an [`ExecutionError::InvalidAddressingMode`] naming `instruction`.
    pub fn effective_address(
        &mut self,
        instruction: Mnemonic,
        mode: AddressingMode,
    ) -> Result<u16, ExecutionError> {
        match mode {
            AddressingMode::ZeroPage => self.zero_page_address().map(u16::from),
            AddressingMode::ZeroPageX => self.zero_page_x_address().map(u16::from),
            AddressingMode::ZeroPageY => self.zero_page_y_address().map(u16::from),
            AddressingMode::Absolute => self.absolute_address(),
            AddressingMode::AbsoluteX => self.absolute_x_address(),
            AddressingMode::AbsoluteY => self.absolute_y_address(),
            AddressingMode::Indirect => self.indirect_address(),
            AddressingMode::IndirectX => self.indexed_indirect_address(),
            AddressingMode::IndirectY => self.indirect_indexed_address(),
            AddressingMode::Relative => self.relative_address(),
            AddressingMode::Implicit | AddressingMode::Accumulator | AddressingMode::Immediate => {
                Err(ExecutionError::InvalidAddressingMode {
                    mnemonic: instruction,
                    mode,
                })
            }
        }
    }

    /// Fetches the operand value: the next stream byte for Immediate, the
    /// byte at the effective address otherwise.
    pub fn operand_value(
        &mut self,
        instruction: Mnemonic,
        mode: AddressingMode,
    ) -> Result<u8, ExecutionError> {
        match mode {
            AddressingMode::Immediate => self.fetch_byte(),
            _ => {
                let address = self.effective_address(instruction, mode)?;
                Ok(self.memory.read(address))
            }
        }
    }

    /// Little-endian word from zero page; the high byte wraps to 0x00.
    fn read_zero_page_word(&self, pointer: u8) -> u16 {
        let low = self.memory.read(pointer as u16);
        let high = self.memory.read(pointer.wrapping_add(1) as u16);
        u16::from_le_bytes([low, high])
    }
}
