//! # Memory
//!
//! This module provides the `MemoryBus` trait, the byte-level read/write seam
//! used by the stack and the disassembler, and `Memory`, the flat 64KB RAM
//! owned by a [`crate::Machine`].
//!
//! ## Design Principles
//!
//! - Addresses are `u16`, so single-byte accesses can never be out of range
//! - Bulk loads are bounds-checked and either fully succeed or leave memory untouched
//! - Page helpers address `page * 0x100 + offset`, used for the page-1 stack

use log::warn;

/// Size of the 6502 address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Size of one memory page in bytes.
pub const PAGE_SIZE: u16 = 0x0100;

/// Memory bus trait for reading and writing single bytes.
///
/// # Examples
///
/// ```
/// use emu6502::{Memory, MemoryBus};
///
/// let mut mem = Memory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a byte from `offset` within memory page `page`.
    fn read_page(&self, page: u8, offset: u8) -> u8 {
        self.read(page_address(page, offset))
    }

    /// Writes a byte to `offset` within memory page `page`.
    fn write_page(&mut self, page: u8, offset: u8, value: u8) {
        self.write(page_address(page, offset), value);
    }
}

/// Start address of `page` plus `offset`.
///
/// ```
/// assert_eq!(emu6502::memory::page_address(0x01, 0xFF), 0x01FF);
/// ```
pub const fn page_address(page: u8, offset: u8) -> u16 {
    (page as u16) * PAGE_SIZE + offset as u16
}

/// Flat 64KB memory.
///
/// All 65536 addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use emu6502::{Memory, MemoryBus};
///
/// let mut memory = Memory::new();
/// assert!(memory.load(&[0xA9, 0x01], 0x0200, true));
/// assert_eq!(memory.read(0x0201), 0x01);
///
/// // Does not fit below 0xFFFF: rejected, nothing written
/// assert!(!memory.load(&[1, 2, 3, 4, 5, 6], 0xFFFC, false));
/// ```
pub struct Memory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    /// Creates a new memory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Copies `data` into memory starting at `address`.
    ///
    /// Fails (returns `false` without touching memory) when
    /// `address + data.len()` exceeds 0xFFFF. When `clear_first` is set the
    /// whole address space is zero-filled before copying.
    pub fn load(&mut self, data: &[u8], address: u16, clear_first: bool) -> bool {
        let start = address as usize;
        let end = start + data.len();
        if end > 0xFFFF {
            warn!(
                "rejected load of {} bytes at ${:04X}: exceeds address space",
                data.len(),
                address
            );
            return false;
        }

        if clear_first {
            self.clear();
        }
        self.data[start..end].copy_from_slice(data);
        true
    }

    /// Zero-fills the whole address space.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Returns a read-only view of `length` bytes starting at `address`.
    ///
    /// # Panics
    ///
    /// Panics if `address + length` runs past 0x10000.
    pub fn dump(&self, address: u16, length: u16) -> &[u8] {
        let start = address as usize;
        &self.data[start..start + length as usize]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Memory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_read_write() {
        let mut mem = Memory::new();

        // Initially all zeros
        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours unchanged
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_load_fits() {
        let mut mem = Memory::new();
        assert!(mem.load(&[1, 2, 3, 4, 5, 6], 0x2000, true));
        assert_eq!(mem.dump(0x2000, 6), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_load_out_of_range_leaves_memory_untouched() {
        let mut mem = Memory::new();
        mem.write(0xFFFC, 0x77);
        mem.write(0x0000, 0x11);

        assert!(!mem.load(&[1, 2, 3, 4, 5, 6], 0xFFFC, true));

        // Neither the copy nor the clear happened
        assert_eq!(mem.read(0xFFFC), 0x77);
        assert_eq!(mem.read(0x0000), 0x11);
    }

    #[test]
    fn test_load_last_byte_boundary() {
        let mut mem = Memory::new();
        // Ends at 0xFFFE: allowed
        assert!(mem.load(&[0xAA, 0xBB], 0xFFFD, false));
        // Would end at 0xFFFF: rejected
        assert!(!mem.load(&[0xAA, 0xBB], 0xFFFE, false));
    }

    #[test]
    fn test_load_clear_first() {
        let mut mem = Memory::new();
        mem.write(0x4000, 0x99);

        assert!(mem.load(&[0x01], 0x2000, false));
        assert_eq!(mem.read(0x4000), 0x99);

        assert!(mem.load(&[0x01], 0x2000, true));
        assert_eq!(mem.read(0x4000), 0x00);
        assert_eq!(mem.read(0x2000), 0x01);
    }

    #[test]
    fn test_page_access() {
        let mut mem = Memory::new();
        mem.write_page(0x01, 0xFF, 0x5A);
        assert_eq!(mem.read(0x01FF), 0x5A);
        assert_eq!(mem.read_page(0x01, 0xFF), 0x5A);
        assert_eq!(page_address(0x00, 0x10), 0x0010);
        assert_eq!(page_address(0xFF, 0xFF), 0xFFFF);
    }

    #[test]
    fn test_dump_returns_requested_block() {
        let mut mem = Memory::new();
        assert!(mem.load(&[1, 2, 3, 4, 5, 6], 0x2000, true));

        let dump = mem.dump(0x2002, 0x0010);
        assert_eq!(dump.len(), 0x10);
        assert_eq!(dump[2], 0x05);
    }

    #[test]
    #[should_panic]
    fn test_dump_past_end_panics() {
        let mem = Memory::new();
        let _ = mem.dump(0xFFF0, 0x20);
    }
}
