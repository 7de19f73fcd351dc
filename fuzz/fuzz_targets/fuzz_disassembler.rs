//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences to both disassembly entry
//! points to find edge cases and crashes in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{disassemble_bytes, Disassembler, Memory};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u16,
    /// Optional data section as (offset, length) into `bytes`
    data_section: Option<(u16, u16)>,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 4096 {
        return;
    }

    let instructions = disassemble_bytes(&input.bytes, input.start_address);

    // Verify invariants
    let mut total_size: usize = 0;
    let mut expected_address = input.start_address;

    for instr in &instructions {
        assert_eq!(instr.address, expected_address);
        assert!(instr.size_bytes >= 1 && instr.size_bytes <= 3);
        assert_eq!(instr.operand_bytes.len(), instr.size_bytes as usize - 1);

        total_size += instr.size_bytes as usize;
        expected_address = expected_address.wrapping_add(instr.size_bytes as u16);
    }

    assert_eq!(total_size, input.bytes.len());

    // Memory listing: may fail with EndOfData, must never panic
    let mut memory = Memory::new();
    if !memory.load(&input.bytes, input.start_address, true) {
        return;
    }

    let mut disassembler =
        Disassembler::new(&memory, input.start_address, input.bytes.len() as u16);
    if let Some((offset, length)) = input.data_section {
        disassembler.add_non_executable_section(input.start_address.wrapping_add(offset), length);
    }

    if let Ok(lines) = disassembler.disassemble() {
        assert!(lines.windows(2).all(|pair| pair[0].address < pair[1].address));
    }
});
