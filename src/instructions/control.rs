//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - BRK: Force Interrupt (no-op)
//! - RTI: Return from Interrupt (no-op)
//! - NOP: No Operation
//!
//! JSR and RTS form a matched pair: JSR pushes the address of the byte that
//! follows it and RTS returns to exactly the popped address, with no
//! off-by-one adjustment in either direction. The machine counts JSRs that
//! have not yet returned; an RTS executed while that count is zero ends the
//! program instead of returning.
//!
//! Interrupts are not modelled, so BRK and RTI only consume their opcode.

use log::warn;

use crate::{ExecutionError, Machine, Mnemonic, OPCODE_TABLE};

/// Executes the JMP (Jump) instruction.
///
/// Sets PC to the absolute target or, for `JMP ($nnnn)`, to the word stored
/// at the pointer. The pointer high byte is read from `pointer + 1` even
/// across a page boundary.
///
/// Flags affected: None
pub(crate) fn execute_jmp(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let target = machine.effective_address(Mnemonic::Jmp, metadata.addressing_mode)?;
    machine.cpu.pc = target;

    Ok(())
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// After the target is fetched PC points just past the 3-byte instruction.
/// That address is pushed high byte first, then PC is set to the target and
/// the pending-call count goes up by one.
///
/// # Examples
///
/// ```
/// use emu6502::{Machine, MemoryBus};
///
/// let mut machine = Machine::new();
/// machine.load_executable(&[0x20, 0x56, 0x04], 0x0200); // JSR $0456
///
/// machine.step().unwrap();
///
/// assert_eq!(machine.get_state().pc, 0x0456);
/// assert_eq!(machine.memory().read(0x01FF), 0x02);
/// assert_eq!(machine.memory().read(0x01FE), 0x03);
/// assert_eq!(machine.get_state().s, 0xFD);
/// ```
pub(crate) fn execute_jsr(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let target = machine.effective_address(Mnemonic::Jsr, metadata.addressing_mode)?;
    let [low, high] = machine.cpu.pc.to_le_bytes();

    machine.push(high);
    machine.push(low);
    machine.cpu.pc = target;
    machine.pending_calls = machine.pending_calls.saturating_add(1);

    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pops the return address (low byte first). With a JSR pending, PC is set to
/// that address and the pending count drops by one. With none pending, the
/// popped address is discarded, PC stays just past the RTS and the machine is
/// marked as finished.
pub(crate) fn execute_rts(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    let low = machine.pop();
    let high = machine.pop();

    if machine.pending_calls == 0 {
        machine.end_of_execution = true;
        return Ok(());
    }

    machine.cpu.pc = u16::from_le_bytes([low, high]);
    machine.pending_calls -= 1;

    Ok(())
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Consumes the opcode and leaves every register, flag and memory byte
/// unchanged.
pub(crate) fn execute_brk(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    warn!(
        "BRK at ${:04X} ignored: interrupts are not emulated",
        machine.cpu.pc.wrapping_sub(1)
    );
    Ok(())
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Consumes the opcode and nothing else; the stack is not touched.
pub(crate) fn execute_rti(machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    warn!(
        "RTI at ${:04X} ignored: interrupts are not emulated",
        machine.cpu.pc.wrapping_sub(1)
    );
    Ok(())
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop(_machine: &mut Machine, _opcode: u8) -> Result<(), ExecutionError> {
    Ok(())
}
