//! Tests for the conditional branch instructions
//! (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS).
//!
//! Offsets are relative to the address after the 2-byte branch. With the
//! branch at 0x0200, an offset of 0x40 targets 0x0242 and 0xF0 targets 0x01F2.

use emu6502::{Machine, ProcessorFlags, StateUpdate};

/// Runs a branch at 0x0200 with the given offset and flags and returns the
/// resulting PC
fn branch_target(opcode: u8, offset: u8, flags: ProcessorFlags) -> u16 {
    let mut machine = Machine::new();
    assert!(machine.load_executable(&[opcode, offset], 0x0200));
    machine.set_state(StateUpdate::default().with_flags(flags));

    machine.step().unwrap();

    assert_eq!(machine.get_state().flags, flags, "branches never touch flags");
    machine.get_state().pc
}

/// (opcode, flag tested, branch taken when flag set)
const BRANCHES: [(u8, ProcessorFlags, bool); 8] = [
    (0x90, ProcessorFlags::CARRY, false),
    (0xB0, ProcessorFlags::CARRY, true),
    (0xF0, ProcessorFlags::ZERO, true),
    (0xD0, ProcessorFlags::ZERO, false),
    (0x30, ProcessorFlags::NEGATIVE, true),
    (0x10, ProcessorFlags::NEGATIVE, false),
    (0x70, ProcessorFlags::OVERFLOW, true),
    (0x50, ProcessorFlags::OVERFLOW, false),
];

#[test]
fn test_branch_forward_when_taken() {
    for (opcode, flag, taken_when_set) in BRANCHES {
        let flags = if taken_when_set {
            flag
        } else {
            ProcessorFlags::empty()
        };
        assert_eq!(branch_target(opcode, 0x40, flags), 0x0242, "opcode {:02X}", opcode);
    }
}

#[test]
fn test_branch_backward_when_taken() {
    for (opcode, flag, taken_when_set) in BRANCHES {
        let flags = if taken_when_set {
            flag
        } else {
            ProcessorFlags::empty()
        };
        assert_eq!(branch_target(opcode, 0xF0, flags), 0x01F2, "opcode {:02X}", opcode);
    }
}

#[test]
fn test_branch_not_taken_falls_through() {
    for (opcode, flag, taken_when_set) in BRANCHES {
        let flags = if taken_when_set {
            ProcessorFlags::empty()
        } else {
            flag
        };
        assert_eq!(branch_target(opcode, 0x40, flags), 0x0202, "opcode {:02X}", opcode);
    }
}

#[test]
fn test_branch_ignores_unrelated_flags() {
    let others = ProcessorFlags::all() - ProcessorFlags::CARRY;
    assert_eq!(branch_target(0x90, 0x10, others), 0x0212);
}

#[test]
fn test_branch_offset_zero() {
    assert_eq!(branch_target(0xB0, 0x00, ProcessorFlags::CARRY), 0x0202);
}

#[test]
fn test_branch_loop() {
    // LDX #$05 ; DEX ; BNE -3
    let mut machine = Machine::new();
    assert!(machine.load_executable(&[0xA2, 0x05, 0xCA, 0xD0, 0xFD], 0x0200));

    machine.run().unwrap();

    assert_eq!(machine.get_state().x, 0x00);
    assert_eq!(machine.get_state().pc, 0x0205);
}
