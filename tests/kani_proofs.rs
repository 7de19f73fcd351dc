//! Kani formal verification proofs for the 6502 emulator.
//!
//! These proofs use bounded model checking to verify address arithmetic
//! and flag rules for every possible input.
//!
//! To run these proofs, install Kani and run:
//! ```
//! cargo kani --tests
//! ```
//!
//! They are ignored when running regular tests.

// Allow the `kani` cfg which is set by the Kani verifier
#![allow(unexpected_cfgs)]

#[cfg(kani)]
mod kani_proofs {
    use emu6502::{Machine, ProcessorFlags, StateUpdate, StatusRegister, OPCODE_TABLE};

    fn bcd(value: u8) -> u8 {
        (value >> 4) * 10 + (value & 0x0F)
    }

    fn is_bcd(value: u8) -> bool {
        (value >> 4) <= 9 && (value & 0x0F) <= 9
    }

    // ========== Stack Address Proofs ==========

    /// Proof: Stack address is always in range 0x0100-0x01FF
    #[kani::proof]
    fn proof_stack_address_always_in_stack_page() {
        let sp: u8 = kani::any();
        let stack_addr: u16 = 0x0100 | (sp as u16);

        kani::assert(
            (0x0100..=0x01FF).contains(&stack_addr),
            "Stack address must be in range 0x0100-0x01FF",
        );
    }

    // ========== Addressing Proofs ==========

    /// Proof: Zero page,X never leaves page zero
    #[kani::proof]
    fn proof_zero_page_x_wrap() {
        let base: u8 = kani::any();
        let x: u8 = kani::any();
        let effective = base.wrapping_add(x) as u16;

        kani::assert(effective <= 0x00FF, "Zero page,X must stay in page zero");
    }

    /// Proof: Branch target arithmetic matches signed 16-bit addition
    #[kani::proof]
    fn proof_branch_target_calculation() {
        let pc: u16 = kani::any();
        let offset: i8 = kani::any();

        let target = pc.wrapping_add(offset as i16 as u16);
        let expected = (pc as i32 + offset as i32).rem_euclid(0x1_0000) as u16;

        kani::assert(target == expected, "Branch target must wrap like signed addition");
    }

    // ========== Flag Computation Proofs ==========

    /// Proof: The overflow rule agrees with signed addition out of range
    #[kani::proof]
    fn proof_overflow_flag_addition() {
        let a: u8 = kani::any();
        let b: u8 = kani::any();
        let carry: bool = kani::any();

        let result = a.wrapping_add(b).wrapping_add(carry as u8);
        let overflow = (a ^ result) & (b ^ result) & 0x80 != 0;

        let signed = a as i8 as i16 + b as i8 as i16 + carry as i16;
        kani::assert(
            overflow == !(-128..=127).contains(&signed),
            "Overflow must be set iff the signed sum is out of range",
        );
    }

    /// Proof: Status register accessors map onto the documented bit layout
    #[kani::proof]
    fn proof_status_register_bit_layout() {
        let bits: u8 = kani::any();
        let mut sr = StatusRegister::new();
        sr.set_bits(bits);

        kani::assert(sr.bits() == bits, "Raw byte must be kept verbatim");
        kani::assert(sr.carry() == (bits & 0x01 != 0), "C is bit 0");
        kani::assert(sr.zero() == (bits & 0x02 != 0), "Z is bit 1");
        kani::assert(sr.interrupt() == (bits & 0x04 != 0), "I is bit 2");
        kani::assert(sr.decimal() == (bits & 0x08 != 0), "D is bit 3");
        kani::assert(sr.brk() == (bits & 0x10 != 0), "B is bit 4");
        kani::assert(sr.overflow() == (bits & 0x40 != 0), "V is bit 6");
        kani::assert(sr.negative() == (bits & 0x80 != 0), "N is bit 7");
    }

    // ========== Opcode Table Proofs ==========

    /// Proof: Every opcode size is between 1 and 3 bytes
    #[kani::proof]
    fn proof_all_opcode_sizes_valid() {
        let opcode: u8 = kani::any();
        let size = OPCODE_TABLE[opcode as usize].size_bytes;

        kani::assert((1..=3).contains(&size), "Opcode size must be 1-3 bytes");
    }

    // ========== Decimal Mode Proofs ==========

    /// Proof: Decimal ADC on valid BCD operands yields the BCD sum mod 100
    #[kani::proof]
    #[kani::unwind(3)]
    fn proof_decimal_adc_valid_bcd() {
        let a: u8 = kani::any();
        let operand: u8 = kani::any();
        let carry: bool = kani::any();
        kani::assume(is_bcd(a) && is_bcd(operand));

        let mut machine = Machine::new();
        machine.load_executable(&[0x69, operand], 0x0200);
        let mut flags = ProcessorFlags::DECIMAL;
        flags.set(ProcessorFlags::CARRY, carry);
        machine.set_state(StateUpdate::default().with_a(a).with_flags(flags));

        kani::assert(machine.step().is_ok(), "ADC immediate must execute");

        let sum = bcd(a) as u16 + bcd(operand) as u16 + carry as u16;
        let result = machine.cpu().a();
        kani::assert(is_bcd(result), "Result must be valid BCD");
        kani::assert(bcd(result) as u16 == sum % 100, "Result must be the BCD sum");
        kani::assert(
            machine.cpu().status().carry() == (sum >= 100),
            "Carry must be set on decimal overflow",
        );
    }
}
