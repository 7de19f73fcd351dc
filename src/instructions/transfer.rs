//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! All transfers set Z and N from the copied value except TXS, which leaves
//! the flags alone.

use crate::{ExecutionError, Machine};

/// Executes the TAX (Transfer Accumulator to X) instruction.
///
/// Copies the current contents of the accumulator into the X register
/// and sets the zero and negative flags as appropriate.
pub(crate) fn execute_tax(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.x = machine.cpu.a;
    machine.cpu.sr.update_zero_negative(machine.cpu.x);
    Ok(())
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.y = machine.cpu.a;
    machine.cpu.sr.update_zero_negative(machine.cpu.y);
    Ok(())
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.a = machine.cpu.x;
    machine.cpu.sr.update_zero_negative(machine.cpu.a);
    Ok(())
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.a = machine.cpu.y;
    machine.cpu.sr.update_zero_negative(machine.cpu.a);
    Ok(())
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
///
/// Copies S into X and sets Z and N from the copied value.
pub(crate) fn execute_tsx(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.cpu.x = machine.stack.pointer();
    machine.cpu.sr.update_zero_negative(machine.cpu.x);
    Ok(())
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Copies X into S. Unlike every other transfer, no flags are affected.
pub(crate) fn execute_txs(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    machine.stack.set_pointer(machine.cpu.x);
    Ok(())
}
