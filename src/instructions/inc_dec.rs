//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC: Increment Memory
//! - DEC: Decrement Memory
//! - INX: Increment X Register
//! - INY: Increment Y Register
//! - DEX: Decrement X Register
//! - DEY: Decrement Y Register
//!
//! All wrap at 8 bits and update only Z and N.

use crate::{ExecutionError, Machine, MemoryBus, Mnemonic, OPCODE_TABLE};

/// Executes the INC (Increment Memory) instruction.
///
/// Adds one to the value held at the effective address, wrapping 0xFF to
/// 0x00.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if result = 0
/// - Negative (N): Set if bit 7 of result is set
/// - Other flags: Not affected
pub(crate) fn execute_inc(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let address = machine.effective_address(Mnemonic::Inc, metadata.addressing_mode)?;
    let result = machine.memory.read(address).wrapping_add(1);
    machine.memory.write(address, result);
    machine.cpu.sr.update_zero_negative(result);

    Ok(())
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// Subtracts one from the value at the effective address, wrapping 0x00 to
/// 0xFF. Sets Z and N.
pub(crate) fn execute_dec(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let address = machine.effective_address(Mnemonic::Dec, metadata.addressing_mode)?;
    let result = machine.memory.read(address).wrapping_sub(1);
    machine.memory.write(address, result);
    machine.cpu.sr.update_zero_negative(result);

    Ok(())
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.x = machine.cpu.x.wrapping_add(1);
    machine.cpu.sr.update_zero_negative(machine.cpu.x);
    Ok(())
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.y = machine.cpu.y.wrapping_add(1);
    machine.cpu.sr.update_zero_negative(machine.cpu.y);
    Ok(())
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.x = machine.cpu.x.wrapping_sub(1);
    machine.cpu.sr.update_zero_negative(machine.cpu.x);
    Ok(())
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.y = machine.cpu.y.wrapping_sub(1);
    machine.cpu.sr.update_zero_negative(machine.cpu.y);
    Ok(())
}
