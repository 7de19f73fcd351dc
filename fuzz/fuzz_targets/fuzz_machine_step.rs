//! Fuzz target for single-step execution.
//!
//! This target creates arbitrary register states and memory contents,
//! then executes one instruction to find edge cases and crashes.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{ExecutionError, Machine, ProcessorFlags, StateUpdate};
use libfuzzer_sys::fuzz_target;

/// Arbitrary register state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    a: u8,
    x: u8,
    y: u8,
    /// Stack pointer
    s: u8,
    /// Raw status byte
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    registers: FuzzRegisters,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut machine = Machine::new();

    assert!(machine.load_executable(&input.memory.instruction_bytes, 0x8000));
    assert!(machine.load_data(&input.memory.zero_page, 0x0000, false));
    assert!(machine.load_data(&input.memory.stack_page, 0x0100, false));
    assert!(machine.load_data(&input.memory.main_memory, 0x4000, false));

    let registers = &input.registers;
    machine.set_state(
        StateUpdate::default()
            .with_a(registers.a)
            .with_x(registers.x)
            .with_y(registers.y)
            .with_s(registers.s)
            .with_flags(ProcessorFlags::from_bits_retain(registers.status)),
    );

    match machine.step() {
        // Operands never extend past the three loaded bytes
        Err(ExecutionError::EndOfData { .. }) => panic!("fetch past a 3-byte window"),
        Err(ExecutionError::InvalidAddressingMode { .. }) => panic!("opcode table mismatch"),
        Err(ExecutionError::IllegalOpcode { opcode, address }) => {
            assert_eq!(opcode, input.memory.instruction_bytes[0]);
            assert_eq!(address, 0x8000);
        }
        Ok(()) => {}
    }
});
