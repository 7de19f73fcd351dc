//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register

use crate::{ExecutionError, Machine, MemoryBus, Mnemonic, OPCODE_TABLE};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory into the accumulator, setting the zero and negative
/// flags as appropriate.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
///
/// # Arguments
///
/// * `machine` - Mutable reference to the machine
/// * `opcode` - The opcode byte for this LDA instruction
pub(crate) fn execute_lda(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = machine.operand_value(Mnemonic::Lda, metadata.addressing_mode)?;

    machine.cpu.a = value;
    machine.cpu.sr.update_zero_negative(value);

    Ok(())
}

/// Executes the LDX (Load X Register) instruction.
///
/// Loads a byte of memory into X. Sets Z and N; no other flags are affected.
pub(crate) fn execute_ldx(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = machine.operand_value(Mnemonic::Ldx, metadata.addressing_mode)?;

    machine.cpu.x = value;
    machine.cpu.sr.update_zero_negative(value);

    Ok(())
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Loads a byte of memory into Y. Sets Z and N; no other flags are affected.
pub(crate) fn execute_ldy(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = machine.operand_value(Mnemonic::Ldy, metadata.addressing_mode)?;

    machine.cpu.y = value;
    machine.cpu.sr.update_zero_negative(value);

    Ok(())
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Stores the contents of the accumulator into memory. No flags are affected.
///
/// # Arguments
///
/// * `machine` - Mutable reference to the machine
/// * `opcode` - The opcode byte for this STA instruction
pub(crate) fn execute_sta(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let address = machine.effective_address(Mnemonic::Sta, metadata.addressing_mode)?;
    machine.memory.write(address, machine.cpu.a);

    Ok(())
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let address = machine.effective_address(Mnemonic::Stx, metadata.addressing_mode)?;
    machine.memory.write(address, machine.cpu.x);

    Ok(())
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let address = machine.effective_address(Mnemonic::Sty, metadata.addressing_mode)?;
    machine.memory.write(address, machine.cpu.y);

    Ok(())
}
