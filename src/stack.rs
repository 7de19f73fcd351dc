//! # Hardware Stack
//!
//! The 6502 stack lives in memory page 1 (0x0100-0x01FF) and grows downward.
//! `Stack` owns only the 8-bit stack pointer; the bytes themselves live in the
//! machine's memory, which is borrowed for the duration of each push or pop.
//!
//! The pointer wraps at byte boundaries in both directions and there is no
//! overflow or underflow detection. Programs that rely on the wrap get it.

use crate::memory::MemoryBus;

/// Memory page that hosts the stack.
pub const STACK_PAGE: u8 = 0x01;

/// Stack pointer value after a reset (top of page 1).
pub const STACK_POINTER_RESET: u8 = 0xFF;

/// 6502 hardware stack pointer.
///
/// # Examples
///
/// ```
/// use emu6502::{Memory, MemoryBus, Stack};
///
/// let mut memory = Memory::new();
/// let mut stack = Stack::new();
///
/// stack.push(&mut memory, 0x42);
/// assert_eq!(stack.pointer(), 0xFE);
/// assert_eq!(memory.read(0x01FF), 0x42);
///
/// assert_eq!(stack.pop(&memory), 0x42);
/// assert_eq!(stack.pointer(), 0xFF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stack {
    s: u8,
}

impl Stack {
    /// Creates a stack with the pointer at 0xFF.
    pub fn new() -> Self {
        Self {
            s: STACK_POINTER_RESET,
        }
    }

    /// Returns the stack pointer S.
    pub fn pointer(&self) -> u8 {
        self.s
    }

    /// Overwrites the stack pointer S.
    pub fn set_pointer(&mut self, s: u8) {
        self.s = s;
    }

    /// Puts the pointer back at 0xFF. Stack memory is left alone.
    pub fn reset(&mut self) {
        self.s = STACK_POINTER_RESET;
    }

    /// Writes `value` at 0x0100 + S, then decrements S (wrapping).
    pub fn push<M: MemoryBus>(&mut self, memory: &mut M, value: u8) {
        memory.write_page(STACK_PAGE, self.s, value);
        self.s = self.s.wrapping_sub(1);
    }

    /// Increments S (wrapping), then reads the byte at 0x0100 + S.
    pub fn pop<M: MemoryBus>(&mut self, memory: &M) -> u8 {
        self.s = self.s.wrapping_add(1);
        memory.read_page(STACK_PAGE, self.s)
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Memory;

    #[test]
    fn test_new_stack_pointer() {
        assert_eq!(Stack::new().pointer(), 0xFF);
    }

    #[test]
    fn test_push_pop_lifo() {
        let mut memory = Memory::new();
        let mut stack = Stack::new();

        stack.push(&mut memory, 0x01);
        stack.push(&mut memory, 0x02);
        stack.push(&mut memory, 0x03);
        assert_eq!(stack.pointer(), 0xFC);

        assert_eq!(stack.pop(&memory), 0x03);
        assert_eq!(stack.pop(&memory), 0x02);
        assert_eq!(stack.pop(&memory), 0x01);
        assert_eq!(stack.pointer(), 0xFF);
    }

    #[test]
    fn test_push_writes_into_page_one() {
        let mut memory = Memory::new();
        let mut stack = Stack::new();
        stack.set_pointer(0x80);

        stack.push(&mut memory, 0xAB);

        assert_eq!(memory.read(0x0180), 0xAB);
        assert_eq!(stack.pointer(), 0x7F);
    }

    #[test]
    fn test_push_wraps_below_zero() {
        let mut memory = Memory::new();
        let mut stack = Stack::new();
        stack.set_pointer(0x00);

        stack.push(&mut memory, 0x55);

        assert_eq!(memory.read(0x0100), 0x55);
        assert_eq!(stack.pointer(), 0xFF);
    }

    #[test]
    fn test_pop_wraps_above_ff() {
        let mut memory = Memory::new();
        memory.write(0x0100, 0x66);
        let mut stack = Stack::new();

        // S = 0xFF, pop wraps to 0x00 and reads 0x0100
        assert_eq!(stack.pop(&memory), 0x66);
        assert_eq!(stack.pointer(), 0x00);
    }

    #[test]
    fn test_reset() {
        let mut memory = Memory::new();
        let mut stack = Stack::new();
        stack.push(&mut memory, 0x01);
        stack.reset();
        assert_eq!(stack.pointer(), 0xFF);
        // Reset does not clear stack memory
        assert_eq!(memory.read(0x01FF), 0x01);
    }
}
