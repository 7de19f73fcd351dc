//! # Flag Instructions
//!
//! This module implements the status flag manipulation instructions:
//! - CLC / SEC: Clear / Set Carry
//! - CLD / SED: Clear / Set Decimal Mode
//! - CLI / SEI: Clear / Set Interrupt Disable
//! - CLV: Clear Overflow
//!
//! Each touches exactly one flag and has no other side effect.

use crate::{ExecutionError, Machine};

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.sr.set_carry(false);
    Ok(())
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.sr.set_carry(true);
    Ok(())
}

/// Executes the CLD (Clear Decimal Mode) instruction.
///
/// Subsequent ADC and SBC instructions use binary arithmetic.
pub(crate) fn execute_cld(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.sr.set_decimal(false);
    Ok(())
}

/// Executes the SED (Set Decimal Flag) instruction.
///
/// Subsequent ADC and SBC instructions use BCD arithmetic.
pub(crate) fn execute_sed(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.sr.set_decimal(true);
    Ok(())
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.sr.set_interrupt(false);
    Ok(())
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.sr.set_interrupt(true);
    Ok(())
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.sr.set_overflow(false);
    Ok(())
}
