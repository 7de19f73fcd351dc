//! # Machine
//!
//! `Machine` ties the register file, memory and stack together and is the
//! host-facing entry point: load code and data, step or run, inspect and patch
//! state, dump memory.
//!
//! ## Execution Model
//!
//! - `step()`: fetch one opcode through PC and execute it
//! - `run()`: step until PC leaves the loaded executable window or an RTS with
//!   no pending JSR ends the program
//!
//! The end-of-program RTS rule is a convention of this emulator for bare
//! programs without a reset vector; a real 6502 would simply return to
//! whatever address is on the stack.

use std::fmt;

use log::{debug, trace};

use crate::cpu::{StateUpdate, CPU};
use crate::instructions;
use crate::memory::{Memory, MemoryBus};
use crate::resolver::InstructionStream;
use crate::stack::Stack;
use crate::status::ProcessorFlags;
use crate::{ExecutionError, OPCODE_TABLE};

/// Snapshot of the machine registers, stack pointer included.
///
/// `Display` renders the register dump shown by the demo programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub pc: u16,
    pub s: u8,
    pub flags: ProcessorFlags,
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "A: 0x{:02X} ({})", self.a, self.a)?;
        writeln!(f, "X: 0x{:02X} ({})", self.x, self.x)?;
        writeln!(f, "Y: 0x{:02X} ({})", self.y, self.y)?;
        writeln!(f, "PC: 0x{:04X} ({})", self.pc, self.pc)?;
        writeln!(f, "SP: 0x{:02X} ({})", self.s, self.s)?;
        writeln!(f, "Flags: {}", self.flags)
    }
}

/// Why `run()` returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// PC reached the end of the loaded executable data.
    EndOfData,
    /// An RTS was executed with no JSR pending.
    EndOfExecution,
}

/// A complete 6502 machine.
///
/// # Examples
///
/// ```
/// use emu6502::{Machine, StopReason};
///
/// let mut machine = Machine::new();
/// // LDA #$2A ; RTS
/// assert!(machine.load_executable(&[0xA9, 0x2A, 0x60], 0x0200));
///
/// assert_eq!(machine.run().unwrap(), StopReason::EndOfExecution);
/// assert_eq!(machine.get_state().a, 0x2A);
/// ```
pub struct Machine {
    pub(crate) cpu: CPU,
    pub(crate) memory: Memory,
    pub(crate) stack: Stack,

    /// Start of the loaded executable window.
    loaded_address: u16,

    /// Length of the loaded executable window in bytes.
    loaded_length: usize,

    /// Set by an RTS with no pending JSR.
    pub(crate) end_of_execution: bool,

    /// JSRs not yet matched by an RTS.
    pub(crate) pending_calls: u32,
}

impl Machine {
    /// Creates a machine with zeroed registers and memory and S = 0xFF.
    pub fn new() -> Self {
        Self {
            cpu: CPU::new(),
            memory: Memory::new(),
            stack: Stack::new(),
            loaded_address: 0,
            loaded_length: 0,
            end_of_execution: false,
            pending_calls: 0,
        }
    }

    /// Loads executable code at `address` after clearing all memory.
    ///
    /// On success PC is set to `address`, the loaded window is recorded for
    /// end-of-data detection and any previous end-of-execution state is
    /// discarded. Fails without changes if the code does not fit.
    pub fn load_executable(&mut self, data: &[u8], address: u16) -> bool {
        if !self.memory.load(data, address, true) {
            return false;
        }

        self.cpu.pc = address;
        self.loaded_address = address;
        self.loaded_length = data.len();
        self.end_of_execution = false;
        self.pending_calls = 0;
        debug!(
            "loaded {} bytes of code at ${:04X}",
            data.len(),
            address
        );
        true
    }

    /// Loads non-executable data at `address`, optionally clearing memory
    /// first. PC and the executable window are left alone.
    pub fn load_data(&mut self, data: &[u8], address: u16, clear_first: bool) -> bool {
        let loaded = self.memory.load(data, address, clear_first);
        if loaded {
            debug!("loaded {} bytes of data at ${:04X}", data.len(), address);
        }
        loaded
    }

    /// Start address of the loaded executable data.
    pub fn loaded_address(&self) -> u16 {
        self.loaded_address
    }

    /// Number of executable bytes loaded.
    pub fn loaded_length(&self) -> usize {
        self.loaded_length
    }

    /// Address one past the last executable byte.
    pub fn loaded_end(&self) -> usize {
        self.loaded_address as usize + self.loaded_length
    }

    /// Returns true once PC has reached or passed the end of the loaded
    /// executable data.
    ///
    /// Addresses below the load address are not checked, so code may call
    /// into routines placed there with [`Machine::load_data`].
    pub fn is_end_of_data(&self) -> bool {
        self.cpu.pc as usize >= self.loaded_end()
    }

    /// Returns true once an RTS without a pending JSR has been executed.
    pub fn is_end_of_execution(&self) -> bool {
        self.end_of_execution
    }

    /// Executes the instruction at PC.
    ///
    /// # Errors
    ///
    /// - [`ExecutionError::EndOfData`] if PC (or an operand fetch) is past
    ///   the end of the loaded executable data
    /// - [`ExecutionError::IllegalOpcode`] if the byte at PC is undocumented
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let pc = self.cpu.pc;
        let opcode = self.fetch_byte()?;
        trace!(
            "${:04X}: {:02X} {}",
            pc,
            opcode,
            OPCODE_TABLE[opcode as usize].mnemonic
        );
        instructions::execute(self, opcode)
    }

    /// Steps until the program leaves its loaded window or ends with RTS.
    pub fn run(&mut self) -> Result<StopReason, ExecutionError> {
        loop {
            if self.end_of_execution {
                debug!("execution ended by RTS at ${:04X}", self.cpu.pc);
                return Ok(StopReason::EndOfExecution);
            }
            if self.is_end_of_data() {
                debug!("execution reached end of data at ${:04X}", self.cpu.pc);
                return Ok(StopReason::EndOfData);
            }
            self.step()?;
        }
    }

    /// Clears memory, zeroes the CPU, resets S to 0xFF and forgets the loaded
    /// window and any end-of-execution state.
    pub fn reset(&mut self) {
        self.memory.clear();
        self.cpu.reset();
        self.stack.reset();
        self.end_of_execution = false;
        self.pending_calls = 0;
        self.loaded_address = 0;
        self.loaded_length = 0;
        debug!("machine reset");
    }

    /// Applies every `Some` field of `update`, stack pointer included.
    pub fn set_state(&mut self, update: StateUpdate) {
        self.cpu.set_state(update);
        if let Some(s) = update.s {
            self.stack.set_pointer(s);
        }
    }

    /// Returns the registers, stack pointer and flags.
    pub fn get_state(&self) -> MachineState {
        let cpu = self.cpu.get_state();
        MachineState {
            a: cpu.a,
            x: cpu.x,
            y: cpu.y,
            pc: cpu.pc,
            s: self.stack.pointer(),
            flags: cpu.flags,
        }
    }

    /// Human-readable register dump.
    pub fn dump(&self) -> String {
        self.get_state().to_string()
    }

    /// Returns `length` bytes of memory from `address`.
    ///
    /// # Panics
    ///
    /// Panics if the block runs past the top of memory.
    pub fn dump_memory(&self, address: u16, length: u16) -> &[u8] {
        self.memory.dump(address, length)
    }

    pub fn cpu(&self) -> &CPU {
        &self.cpu
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Pushes a byte onto the page-1 stack.
    pub(crate) fn push(&mut self, value: u8) {
        self.stack.push(&mut self.memory, value);
    }

    /// Pops a byte from the page-1 stack.
    pub(crate) fn pop(&mut self) -> u8 {
        self.stack.pop(&self.memory)
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionStream for Machine {
    fn fetch_byte(&mut self) -> Result<u8, ExecutionError> {
        if self.is_end_of_data() {
            return Err(ExecutionError::EndOfData {
                address: self.cpu.pc,
            });
        }
        let value = self.memory.read(self.cpu.pc);
        self.cpu.increment_pc();
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_machine_state() {
        let machine = Machine::new();
        let state = machine.get_state();
        assert_eq!(state.a, 0);
        assert_eq!(state.pc, 0);
        assert_eq!(state.s, 0xFF);
        assert!(machine.is_end_of_data());
        assert!(!machine.is_end_of_execution());
    }

    #[test]
    fn test_end_of_data_window() {
        let mut machine = Machine::new();
        assert!(machine.load_executable(&[1, 2, 3, 4, 5, 6], 0x2000));
        assert!(!machine.is_end_of_data());

        machine.set_state(StateUpdate::default().with_pc(0x2005));
        assert!(!machine.is_end_of_data());

        machine.set_state(StateUpdate::default().with_pc(0x2006));
        assert!(machine.is_end_of_data());

        machine.set_state(StateUpdate::default().with_pc(0x2008));
        assert!(machine.is_end_of_data());

        machine.set_state(StateUpdate::default().with_pc(0x1FFF));
        assert!(!machine.is_end_of_data());
    }

    #[test]
    fn test_fetch_byte_advances_pc() {
        let mut machine = Machine::new();
        assert!(machine.load_executable(&[1, 2, 3, 4, 5, 6], 0x2000));
        assert_eq!(machine.fetch_byte(), Ok(1));
        assert_eq!(machine.cpu().pc(), 0x2001);
    }

    #[test]
    fn test_fetch_byte_past_end_fails() {
        let mut machine = Machine::new();
        assert!(machine.load_executable(&[1, 2, 3, 4, 5, 6], 0x2000));
        machine.set_state(StateUpdate::default().with_pc(0x2008));
        assert_eq!(
            machine.fetch_byte(),
            Err(ExecutionError::EndOfData { address: 0x2008 })
        );
        assert_eq!(machine.cpu().pc(), 0x2008);
    }

    #[test]
    fn test_dump_format() {
        let mut machine = Machine::new();
        machine.set_state(
            StateUpdate::default()
                .with_a(144)
                .with_pc(0x021B)
                .with_flags(ProcessorFlags::CARRY | ProcessorFlags::ZERO),
        );
        let dump = machine.dump();
        assert!(dump.contains("A: 0x90 (144)"));
        assert!(dump.contains("PC: 0x021B (539)"));
        assert!(dump.contains("SP: 0xFF (255)"));
        assert!(dump.contains("Flags: Carry | Zero"));
    }

    #[test]
    fn test_push_pop_through_machine() {
        let mut machine = Machine::new();
        machine.push(0x12);
        assert_eq!(machine.memory().read(0x01FF), 0x12);
        assert_eq!(machine.pop(), 0x12);
        assert_eq!(machine.stack().pointer(), 0xFF);
    }
}
