//! Tests for the disassembler: instruction text for every addressing mode,
//! data sections, illegal opcodes and block bounds.

use emu6502::{
    disassemble_bytes, disassembler::format_instruction, Disassembler, ExecutionError, Memory,
};

/// Disassembles `bytes` loaded at 0x0200 and returns the listing text
fn listing(bytes: &[u8]) -> Vec<String> {
    let mut memory = Memory::new();
    assert!(memory.load(bytes, 0x0200, true));
    let mut disassembler = Disassembler::new(&memory, 0x0200, bytes.len() as u16);
    disassembler
        .disassemble()
        .unwrap()
        .into_iter()
        .map(|line| line.text)
        .collect()
}

// ========== Addressing Mode Formats ==========

#[test]
fn test_lda_formats() {
    let cases: [(&[u8], &str); 8] = [
        (&[0xA9, 0x10], "LDA #$10"),
        (&[0xAD, 0x10, 0x30], "LDA $3010"),
        (&[0xBD, 0x10, 0x30], "LDA $3010,X"),
        (&[0xB9, 0x10, 0x30], "LDA $3010,Y"),
        (&[0xA5, 0x10], "LDA $10"),
        (&[0xB5, 0x10], "LDA $10,X"),
        (&[0xA1, 0x10], "LDA ($10,X)"),
        (&[0xB1, 0x10], "LDA ($10),Y"),
    ];

    for (bytes, expected) in cases {
        assert_eq!(listing(bytes), [expected]);
    }
}

#[test]
fn test_other_formats() {
    let cases: [(&[u8], &str); 7] = [
        (&[0xB6, 0x10], "LDX $10,Y"),
        (&[0x0A], "ASL A"),
        (&[0x6A], "ROR A"),
        (&[0x6C, 0x20, 0x01], "JMP ($0120)"),
        (&[0x20, 0x56, 0x04], "JSR $0456"),
        (&[0x60], "RTS"),
        (&[0xEA], "NOP"),
    ];

    for (bytes, expected) in cases {
        assert_eq!(listing(bytes), [expected]);
    }
}

#[test]
fn test_branch_targets() {
    let cases: [(u8, &str); 8] = [
        (0x90, "BCC"),
        (0xB0, "BCS"),
        (0xF0, "BEQ"),
        (0x30, "BMI"),
        (0xD0, "BNE"),
        (0x10, "BPL"),
        (0x50, "BVC"),
        (0x70, "BVS"),
    ];

    for (opcode, mnemonic) in cases {
        assert_eq!(listing(&[opcode, 0x40]), [format!("{} $0242", mnemonic)]);
        assert_eq!(listing(&[opcode, 0xF0]), [format!("{} $01F2", mnemonic)]);
    }
}

#[test]
fn test_illegal_opcode_renders_unknown() {
    assert_eq!(listing(&[0xFF]), ["???"]);
    assert_eq!(listing(&[0x02, 0xEA]), ["???", "NOP"]);
}

// ========== Data Sections ==========

#[test]
fn test_non_executable_section() {
    let bytes = [0x10, 0x11, 0x12, 0x13, 0x14, 0x15];
    let mut memory = Memory::new();
    assert!(memory.load(&bytes, 0x0200, true));

    let mut disassembler = Disassembler::new(&memory, 0x0200, 6);
    disassembler.add_non_executable_section(0x0200, 6);

    let lines = disassembler.disassemble().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].address, 0x0200);
    assert_eq!(lines[0].text, "DB 0x10, 0x11, 0x12, 0x13, 0x14, 0x15");
}

#[test]
fn test_code_and_data_mixed() {
    // LDA $0206,X ; RTS ; NOP ; NOP ; table
    let bytes = [0xBD, 0x06, 0x02, 0x60, 0xEA, 0xEA, 0x01, 0x05, 0x06];
    let mut memory = Memory::new();
    assert!(memory.load(&bytes, 0x0200, true));

    let mut disassembler = Disassembler::new(&memory, 0x0200, bytes.len() as u16);
    disassembler.add_non_executable_section(0x0206, 3);

    let lines = disassembler.disassemble().unwrap();
    let addresses: Vec<u16> = lines.iter().map(|line| line.address).collect();
    let text: Vec<&str> = lines.iter().map(|line| line.text.as_str()).collect();

    assert_eq!(addresses, [0x0200, 0x0203, 0x0204, 0x0205, 0x0206]);
    assert_eq!(
        text,
        ["LDA $0206,X", "RTS", "NOP", "NOP", "DB 0x01, 0x05, 0x06"]
    );
}

#[test]
fn test_removed_section_is_disassembled_as_code() {
    let bytes = [0xEA, 0xEA];
    let mut memory = Memory::new();
    assert!(memory.load(&bytes, 0x0200, true));

    let mut disassembler = Disassembler::new(&memory, 0x0200, 2);
    disassembler.add_non_executable_section(0x0200, 2);
    assert!(disassembler.remove_non_executable_section(0));
    assert!(!disassembler.remove_non_executable_section(0));

    let lines = disassembler.disassemble().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "NOP");
}

// ========== Bounds ==========

#[test]
fn test_instruction_running_past_block_fails() {
    let mut memory = Memory::new();
    assert!(memory.load(&[0xEA, 0x20, 0x56, 0x04], 0x0200, true));

    // Block ends in the middle of the JSR operand
    let mut disassembler = Disassembler::new(&memory, 0x0200, 3);
    assert_eq!(
        disassembler.disassemble(),
        Err(ExecutionError::EndOfData { address: 0x0203 })
    );
}

#[test]
fn test_empty_block() {
    let memory = Memory::new();
    let mut disassembler = Disassembler::new(&memory, 0x0200, 0);
    assert!(disassembler.is_end_of_data());
    assert_eq!(disassembler.disassemble(), Ok(vec![]));
}

// ========== Slice Disassembly ==========

#[test]
fn test_disassemble_bytes_matches_listing() {
    let code = [0xA2, 0x01, 0x86, 0x00, 0x38, 0xA0, 0x0C, 0xD0, 0xF5];
    let from_slice: Vec<String> = disassemble_bytes(&code, 0x0200)
        .iter()
        .map(format_instruction)
        .collect();

    assert_eq!(from_slice, listing(&code));
    assert_eq!(
        from_slice,
        ["LDX #$01", "STX $00", "SEC", "LDY #$0C", "BNE $01FE"]
    );
}
