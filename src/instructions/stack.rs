//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (S) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | S.

use crate::{ExecutionError, Machine};

/// Executes the PHA (Push Accumulator) instruction.
///
/// PHA pushes a copy of the accumulator onto the stack and decrements the
/// stack pointer.
///
/// Stack operation:
/// 1. Write accumulator value to 0x0100 | S
/// 2. Decrement S (wraps from 0x00 to 0xFF)
///
/// Flags affected: None
///
/// # Examples
///
/// ```
/// use emu6502::{Machine, MemoryBus, StateUpdate};
///
/// let mut machine = Machine::new();
/// machine.load_executable(&[0x48], 0x0200); // PHA
/// machine.set_state(StateUpdate::default().with_a(0x42));
///
/// machine.step().unwrap();
///
/// assert_eq!(machine.memory().read(0x01FF), 0x42);
/// assert_eq!(machine.get_state().s, 0xFE);
/// assert_eq!(machine.get_state().pc, 0x0201);
/// ```
pub(crate) fn execute_pha(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    let a = machine.cpu.a;
    machine.push(a);
    Ok(())
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// Pushes the status register byte exactly as it is held; the Break bit is
/// not forced on. Flags affected: None.
pub(crate) fn execute_php(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    let status = machine.cpu.sr.bits();
    machine.push(status);
    Ok(())
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Increments S, loads the byte at 0x0100 | S into A and sets Z and N.
pub(crate) fn execute_pla(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    let value = machine.pop();
    machine.cpu.a = value;
    machine.cpu.sr.update_zero_negative(value);
    Ok(())
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Replaces the whole status register with the pulled byte, every bit
/// included.
pub(crate) fn execute_plp(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    let status = machine.pop();
    machine.cpu.sr.set_bits(status);
    Ok(())
}
