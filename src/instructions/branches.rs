//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch if Carry Clear / Set
//! - BEQ / BNE: Branch if Equal (Z set) / Not Equal (Z clear)
//! - BMI / BPL: Branch if Minus (N set) / Plus (N clear)
//! - BVC / BVS: Branch if Overflow Clear / Set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! applied to the address of the next instruction. The offset byte is always
//! consumed, taken or not, and no flags are affected.

use crate::status::StatusRegister;
use crate::{ExecutionError, Machine, Mnemonic, OPCODE_TABLE};

/// Executes the BCC (Branch if Carry Clear) instruction.
///
/// Branches to a new location if the carry flag is clear (C = 0).
///
/// # Arguments
///
/// * `machine` - Mutable reference to the machine
/// * `opcode` - The opcode byte for this BCC instruction (0x90)
///
/// # Examples
///
/// ```
/// use emu6502::Machine;
///
/// let mut machine = Machine::new();
/// machine.load_executable(&[0x90, 0x40], 0x0200); // BCC +$40
///
/// machine.step().unwrap();
///
/// assert_eq!(machine.get_state().pc, 0x0242);
/// ```
pub(crate) fn execute_bcc(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    branch_if(machine, Mnemonic::Bcc, opcode, |sr| !sr.carry())
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    branch_if(machine, Mnemonic::Bcs, opcode, |sr| sr.carry())
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    branch_if(machine, Mnemonic::Beq, opcode, |sr| sr.zero())
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    branch_if(machine, Mnemonic::Bne, opcode, |sr| !sr.zero())
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    branch_if(machine, Mnemonic::Bmi, opcode, |sr| sr.negative())
}

/// Executes the BPL (Branch if Plus) instruction.
pub(crate) fn execute_bpl(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    branch_if(machine, Mnemonic::Bpl, opcode, |sr| !sr.negative())
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    branch_if(machine, Mnemonic::Bvc, opcode, |sr| !sr.overflow())
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    branch_if(machine, Mnemonic::Bvs, opcode, |sr| sr.overflow())
}

/// Resolves the branch target and jumps to it when `condition` holds.
fn branch_if<F>(
    machine: &mut Machine,
    instruction: Mnemonic,
    opcode: u8,
    condition: F,
) -> Result<(), ExecutionError>
where
    F: FnOnce(&StatusRegister) -> bool,
{
    let metadata = &OPCODE_TABLE[opcode as usize];

    // Always consume the offset so PC lands on the next instruction
    let target = machine.effective_address(instruction, metadata.addressing_mode)?;

    if condition(&machine.cpu.sr) {
        machine.cpu.pc = target;
    }

    Ok(())
}
