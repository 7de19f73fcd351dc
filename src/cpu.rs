//! # CPU State
//!
//! This module contains the `CPU` struct holding the 6502 register file:
//!
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next byte to fetch
//! - **Status register**: N, V, B, D, I, Z, C packed into one byte
//!
//! The stack pointer is owned by [`crate::Stack`] and memory by
//! [`crate::Memory`]; both sit next to the CPU inside [`crate::Machine`].
//! Execution itself lives in [`crate::instructions`].

use crate::status::{ProcessorFlags, StatusRegister};

/// Partial register update.
///
/// Every field is optional; `None` leaves the corresponding register as it is.
/// The CPU ignores `s` (the stack pointer belongs to the stack); the machine
/// applies it.
///
/// # Examples
///
/// ```
/// use emu6502::{ProcessorFlags, StateUpdate};
///
/// let update = StateUpdate::default()
///     .with_a(0x10)
///     .with_flags(ProcessorFlags::DECIMAL);
/// assert_eq!(update.a, Some(0x10));
/// assert_eq!(update.x, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateUpdate {
    pub a: Option<u8>,
    pub x: Option<u8>,
    pub y: Option<u8>,
    pub pc: Option<u16>,
    pub s: Option<u8>,
    pub flags: Option<ProcessorFlags>,
}

impl StateUpdate {
    pub fn with_a(mut self, a: u8) -> Self {
        self.a = Some(a);
        self
    }

    pub fn with_x(mut self, x: u8) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: u8) -> Self {
        self.y = Some(y);
        self
    }

    pub fn with_pc(mut self, pc: u16) -> Self {
        self.pc = Some(pc);
        self
    }

    pub fn with_s(mut self, s: u8) -> Self {
        self.s = Some(s);
        self
    }

    pub fn with_flags(mut self, flags: ProcessorFlags) -> Self {
        self.flags = Some(flags);
        self
    }
}

/// Snapshot of the CPU registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub pc: u16,
    pub flags: ProcessorFlags,
}

/// 6502 register file.
///
/// # Examples
///
/// ```
/// use emu6502::{CPU, StateUpdate};
///
/// let mut cpu = CPU::new();
/// cpu.set_state(StateUpdate::default().with_pc(0x0200).with_x(3));
/// cpu.add_offset_to_pc(-3);
///
/// let state = cpu.get_state();
/// assert_eq!(state.pc, 0x01FD);
/// assert_eq!(state.x, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CPU {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next byte to fetch)
    pub(crate) pc: u16,

    /// Processor status flags
    pub(crate) sr: StatusRegister,
}

impl CPU {
    /// Creates a CPU with every register and flag zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes A, X, Y and PC and replaces the status register with a fresh,
    /// all-clear one.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.pc = 0;
        self.sr = StatusRegister::new();
    }

    /// Applies every `Some` field of `update`; `update.s` is ignored here.
    pub fn set_state(&mut self, update: StateUpdate) {
        if let Some(a) = update.a {
            self.a = a;
        }
        if let Some(x) = update.x {
            self.x = x;
        }
        if let Some(y) = update.y {
            self.y = y;
        }
        if let Some(pc) = update.pc {
            self.pc = pc;
        }
        if let Some(flags) = update.flags {
            self.sr.set_flags(flags);
        }
    }

    /// Returns a snapshot of the registers.
    pub fn get_state(&self) -> CpuState {
        CpuState {
            a: self.a,
            x: self.x,
            y: self.y,
            pc: self.pc,
            flags: self.sr.flags(),
        }
    }

    /// Advances PC by one, wrapping at 0xFFFF.
    pub fn increment_pc(&mut self) {
        self.pc = self.pc.wrapping_add(1);
    }

    /// Adds a signed branch displacement to PC modulo 0x10000.
    pub fn add_offset_to_pc(&mut self, offset: i8) {
        self.pc = self.pc.wrapping_add_signed(offset as i16);
    }

    // ========== Register Accessors ==========

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the status register.
    pub fn status(&self) -> &StatusRegister {
        &self.sr
    }

    /// Returns the status register for modification.
    pub fn status_mut(&mut self) -> &mut StatusRegister {
        &mut self.sr
    }
}
