//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left
//! - ROR: Rotate Right
//!
//! Each works on the accumulator (`ASL A`) or on a memory byte
//! (read-modify-write). The bit shifted out lands in Carry; Z and N are
//! recomputed from the result.

use crate::{AddressingMode, ExecutionError, Machine, MemoryBus, Mnemonic, OPCODE_TABLE};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Shifts all bits of the accumulator or memory contents one bit left.
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
/// Updates C, Z, and N flags.
///
/// # Arguments
///
/// * `machine` - Mutable reference to the machine
/// * `opcode` - The opcode byte for this ASL instruction
pub(crate) fn execute_asl(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    shift(machine, Mnemonic::Asl, opcode, |value, _| (value << 1, value & 0x80 != 0))
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to Carry and bit 7 becomes 0, so N is always cleared.
pub(crate) fn execute_lsr(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    shift(machine, Mnemonic::Lsr, opcode, |value, _| (value >> 1, value & 0x01 != 0))
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Bit 7 goes to Carry and the old Carry fills bit 0.
pub(crate) fn execute_rol(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    shift(machine, Mnemonic::Rol, opcode, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Bit 0 goes to Carry and the old Carry fills bit 7, which is the only way a
/// right shift can leave N set.
pub(crate) fn execute_ror(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    shift(machine, Mnemonic::Ror, opcode, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    })
}

/// Applies `op` to the accumulator or the addressed memory byte.
///
/// `op` receives the operand and the current carry and returns the result and
/// the new carry.
fn shift<F>(
    machine: &mut Machine,
    instruction: Mnemonic,
    opcode: u8,
    op: F,
) -> Result<(), ExecutionError>
where
    F: FnOnce(u8, bool) -> (u8, bool),
{
    let metadata = &OPCODE_TABLE[opcode as usize];
    let carry = machine.cpu.sr.carry();

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        let (result, carry_out) = op(machine.cpu.a, carry);
        machine.cpu.a = result;
        machine.cpu.sr.set_carry(carry_out);
        result
    } else {
        let address = machine.effective_address(instruction, metadata.addressing_mode)?;
        let (result, carry_out) = op(machine.memory.read(address), carry);
        machine.memory.write(address, result);
        machine.cpu.sr.set_carry(carry_out);
        result
    };

    machine.cpu.sr.update_zero_negative(result);

    Ok(())
}
