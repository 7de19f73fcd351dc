//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND: Logical AND
//! - ORA: Logical Inclusive OR
//! - EOR: Exclusive OR
//! - BIT: Bit Test
//! - CMP, CPX, CPY: Compare Accumulator, X or Y with memory
//!
//! ## Decimal mode
//!
//! With the D flag set, ADC and SBC treat both operands as packed BCD and
//! update only Carry. N, Z and V keep whatever value they had before the
//! instruction.

use crate::status::StatusRegister;
use crate::{ExecutionError, Machine, Mnemonic, OPCODE_TABLE};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the value at the effective address (determined by addressing mode)
/// plus the carry flag to the accumulator.
///
/// # Flag Behavior
///
/// Binary mode:
/// - Carry (C): Set if the unsigned sum exceeds 0xFF
/// - Overflow (V): Set if both inputs share a sign the result does not have
/// - Zero (Z), Negative (N): From the result
///
/// Decimal mode: only Carry, set when the BCD sum exceeds 99.
///
/// # Arguments
///
/// * `machine` - Mutable reference to the machine
/// * `opcode` - The opcode byte for this ADC instruction
pub(crate) fn execute_adc(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = machine.operand_value(Mnemonic::Adc, metadata.addressing_mode)?;

    machine.cpu.a = if machine.cpu.sr.decimal() {
        decimal_add(&mut machine.cpu.sr, machine.cpu.a, value)
    } else {
        binary_add(&mut machine.cpu.sr, machine.cpu.a, value)
    };

    Ok(())
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the operand and the inverted carry (the borrow) from the
/// accumulator. In binary mode this is exactly ADC of the one's complement of
/// the operand, flags included.
pub(crate) fn execute_sbc(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = machine.operand_value(Mnemonic::Sbc, metadata.addressing_mode)?;

    machine.cpu.a = if machine.cpu.sr.decimal() {
        decimal_subtract(&mut machine.cpu.sr, machine.cpu.a, value)
    } else {
        binary_add(&mut machine.cpu.sr, machine.cpu.a, !value)
    };

    Ok(())
}

/// Executes the AND (Logical AND) instruction.
///
/// Performs a bitwise AND operation between the accumulator and the value at
/// the effective address (determined by addressing mode). Updates Z and N flags.
pub(crate) fn execute_and(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = machine.operand_value(Mnemonic::And, metadata.addressing_mode)?;
    machine.cpu.a &= value;
    machine.cpu.sr.update_zero_negative(machine.cpu.a);

    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = machine.operand_value(Mnemonic::Ora, metadata.addressing_mode)?;
    machine.cpu.a |= value;
    machine.cpu.sr.update_zero_negative(machine.cpu.a);

    Ok(())
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = machine.operand_value(Mnemonic::Eor, metadata.addressing_mode)?;
    machine.cpu.a ^= value;
    machine.cpu.sr.update_zero_negative(machine.cpu.a);

    Ok(())
}

/// Executes the BIT (Bit Test) instruction.
///
/// Tests bits in memory against the accumulator without changing either.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A AND M = 0
/// - Overflow (V): Bit 6 of M
/// - Negative (N): Bit 7 of M
pub(crate) fn execute_bit(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = machine.operand_value(Mnemonic::Bit, metadata.addressing_mode)?;

    let sr = &mut machine.cpu.sr;
    sr.set_zero(machine.cpu.a & value == 0);
    sr.set_overflow(value & 0x40 != 0);
    sr.set_negative(value & 0x80 != 0);

    Ok(())
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = machine.operand_value(Mnemonic::Cmp, metadata.addressing_mode)?;
    compare(&mut machine.cpu.sr, machine.cpu.a, value);

    Ok(())
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = machine.operand_value(Mnemonic::Cpx, metadata.addressing_mode)?;
    compare(&mut machine.cpu.sr, machine.cpu.x, value);

    Ok(())
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = machine.operand_value(Mnemonic::Cpy, metadata.addressing_mode)?;
    compare(&mut machine.cpu.sr, machine.cpu.y, value);

    Ok(())
}

/// Two's-complement addition with carry in; sets C, V, Z and N.
fn binary_add(sr: &mut StatusRegister, a: u8, value: u8) -> u8 {
    let sum = a as u16 + value as u16 + sr.carry() as u16;
    let result = sum as u8;

    // Same-sign inputs with a different-sign result
    sr.set_overflow(!(a ^ value) & (a ^ result) & 0x80 != 0);
    sr.update_zero_negative(result);
    sr.set_carry(sum > 0xFF);

    result
}

/// Packed BCD addition with carry in; sets only C.
fn decimal_add(sr: &mut StatusRegister, a: u8, value: u8) -> u8 {
    let low = (a & 0x0F) as u16 + (value & 0x0F) as u16 + sr.carry() as u16;
    let low = if low > 0x09 { 0x10 + low - 0x0A } else { low };
    let mut result = (a & 0xF0) as u16 + (value & 0xF0) as u16 + low;

    // Non-BCD inputs can land in 0x9A..=0x9F; the adjustment wraps there
    let carry = result > 0x99;
    if carry {
        result = result.wrapping_sub(0xA0);
    }
    sr.set_carry(carry);

    result as u8
}

/// Packed BCD subtraction with borrow in (`!C`); sets only C.
fn decimal_subtract(sr: &mut StatusRegister, a: u8, value: u8) -> u8 {
    let borrow = !sr.carry() as u8;
    let mut low = (a & 0x0F).wrapping_sub(value & 0x0F).wrapping_sub(borrow);
    let mut high = (a & 0xF0).wrapping_sub(value & 0xF0);

    if low & 0x80 != 0 {
        low = low.wrapping_add(0x0A);
        high = high.wrapping_sub(0x10);
    }

    let mut carry = true;
    if high > 0x90 {
        high = high.wrapping_add(0xA0);
        carry = false;
    }
    sr.set_carry(carry);

    high.wrapping_add(low)
}

/// Sets Z, C and N as if `register - value` had been computed.
fn compare(sr: &mut StatusRegister, register: u8, value: u8) {
    sr.set_zero(register == value);
    sr.set_carry(register >= value);
    sr.set_negative(register.wrapping_sub(value) & 0x80 != 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProcessorFlags;

    fn status(flags: ProcessorFlags) -> StatusRegister {
        let mut sr = StatusRegister::new();
        sr.set_flags(flags);
        sr
    }

    #[test]
    fn test_decimal_add_low_nibble_carry() {
        let mut sr = status(ProcessorFlags::DECIMAL);
        assert_eq!(decimal_add(&mut sr, 0x15, 0x26), 0x41);
        assert!(!sr.carry());
    }

    #[test]
    fn test_decimal_add_wraps_past_99() {
        let mut sr = status(ProcessorFlags::DECIMAL | ProcessorFlags::CARRY);
        assert_eq!(decimal_add(&mut sr, 0x58, 0x46), 0x05);
        assert!(sr.carry());
    }

    #[test]
    fn test_decimal_add_non_bcd_sum_wraps() {
        let mut sr = status(ProcessorFlags::DECIMAL);
        assert_eq!(decimal_add(&mut sr, 0x8A, 0x0A), 0xFA);
        assert!(sr.carry());
    }

    #[test]
    fn test_decimal_subtract_borrow_in() {
        let mut sr = status(ProcessorFlags::DECIMAL);
        assert_eq!(decimal_subtract(&mut sr, 0x32, 0x02), 0x29);
        assert!(sr.carry());
    }

    #[test]
    fn test_decimal_subtract_below_zero() {
        let mut sr = status(ProcessorFlags::DECIMAL | ProcessorFlags::CARRY);
        assert_eq!(decimal_subtract(&mut sr, 0x21, 0x34), 0x87);
        assert!(!sr.carry());
    }

    #[test]
    fn test_decimal_leaves_other_flags() {
        let flags = ProcessorFlags::DECIMAL | ProcessorFlags::ZERO | ProcessorFlags::OVERFLOW;
        let mut sr = status(flags);
        decimal_add(&mut sr, 0x12, 0x34);
        assert_eq!(sr.flags(), flags);
    }

    #[test]
    fn test_compare_flags() {
        let mut sr = StatusRegister::new();
        compare(&mut sr, 0x40, 0x40);
        assert_eq!(sr.flags(), ProcessorFlags::ZERO | ProcessorFlags::CARRY);

        compare(&mut sr, 0x40, 0x41);
        assert_eq!(sr.flags(), ProcessorFlags::NEGATIVE);

        compare(&mut sr, 0x41, 0x40);
        assert_eq!(sr.flags(), ProcessorFlags::CARRY);
    }
}
