//! # Status Register
//!
//! The processor status register (P) as a single byte with named views.
//!
//! Bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: (unused)
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)
//!
//! Unlike hardware, bit 5 is not forced high: a reset clears the whole byte and
//! PLP restores whatever byte it pops, unused bit included.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Individual processor flag bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ProcessorFlags: u8 {
        /// Set on unsigned overflow out of bit 7 (or no borrow on subtract).
        const CARRY = 0x01;
        /// Set when a result is zero.
        const ZERO = 0x02;
        /// Interrupt disable.
        const INTERRUPT = 0x04;
        /// Decimal (BCD) mode for ADC and SBC.
        const DECIMAL = 0x08;
        /// Break.
        const BREAK = 0x10;
        /// Set on signed overflow.
        const OVERFLOW = 0x40;
        /// Mirrors bit 7 of a result.
        const NEGATIVE = 0x80;
    }
}

impl fmt::Display for ProcessorFlags {
    /// Renders the set flags by name, e.g. `Carry | Zero`, or `None`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(ProcessorFlags, &str); 7] = [
            (ProcessorFlags::CARRY, "Carry"),
            (ProcessorFlags::ZERO, "Zero"),
            (ProcessorFlags::INTERRUPT, "Interrupt"),
            (ProcessorFlags::DECIMAL, "Decimal"),
            (ProcessorFlags::BREAK, "Break"),
            (ProcessorFlags::OVERFLOW, "Overflow"),
            (ProcessorFlags::NEGATIVE, "Negative"),
        ];

        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("None")?;
        }
        Ok(())
    }
}

/// Processor status register.
///
/// Each accessor is a plain bit test or bit set on the same underlying byte.
///
/// # Examples
///
/// ```
/// use emu6502::{ProcessorFlags, StatusRegister};
///
/// let mut sr = StatusRegister::new();
/// sr.set_carry(true);
/// sr.set_negative(true);
/// assert_eq!(sr.flags(), ProcessorFlags::CARRY | ProcessorFlags::NEGATIVE);
/// assert_eq!(sr.bits(), 0x81);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusRegister {
    flags: ProcessorFlags,
}

impl StatusRegister {
    /// Creates a status register with every bit clear.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the whole flag set.
    pub fn flags(&self) -> ProcessorFlags {
        self.flags
    }

    /// Replaces the whole flag set.
    pub fn set_flags(&mut self, flags: ProcessorFlags) {
        self.flags = flags;
    }

    /// Returns the raw status byte.
    pub fn bits(&self) -> u8 {
        self.flags.bits()
    }

    /// Replaces the raw status byte verbatim, undefined bit 5 included.
    pub fn set_bits(&mut self, bits: u8) {
        self.flags = ProcessorFlags::from_bits_retain(bits);
    }

    pub fn carry(&self) -> bool {
        self.flags.contains(ProcessorFlags::CARRY)
    }

    pub fn set_carry(&mut self, value: bool) {
        self.flags.set(ProcessorFlags::CARRY, value);
    }

    pub fn zero(&self) -> bool {
        self.flags.contains(ProcessorFlags::ZERO)
    }

    pub fn set_zero(&mut self, value: bool) {
        self.flags.set(ProcessorFlags::ZERO, value);
    }

    pub fn interrupt(&self) -> bool {
        self.flags.contains(ProcessorFlags::INTERRUPT)
    }

    pub fn set_interrupt(&mut self, value: bool) {
        self.flags.set(ProcessorFlags::INTERRUPT, value);
    }

    pub fn decimal(&self) -> bool {
        self.flags.contains(ProcessorFlags::DECIMAL)
    }

    pub fn set_decimal(&mut self, value: bool) {
        self.flags.set(ProcessorFlags::DECIMAL, value);
    }

    pub fn brk(&self) -> bool {
        self.flags.contains(ProcessorFlags::BREAK)
    }

    pub fn set_brk(&mut self, value: bool) {
        self.flags.set(ProcessorFlags::BREAK, value);
    }

    pub fn overflow(&self) -> bool {
        self.flags.contains(ProcessorFlags::OVERFLOW)
    }

    pub fn set_overflow(&mut self, value: bool) {
        self.flags.set(ProcessorFlags::OVERFLOW, value);
    }

    pub fn negative(&self) -> bool {
        self.flags.contains(ProcessorFlags::NEGATIVE)
    }

    pub fn set_negative(&mut self, value: bool) {
        self.flags.set(ProcessorFlags::NEGATIVE, value);
    }

    /// Sets Zero and Negative from a result byte.
    pub fn update_zero_negative(&mut self, value: u8) {
        self.set_zero(value == 0);
        self.set_negative(value & 0x80 != 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_positions() {
        assert_eq!(ProcessorFlags::CARRY.bits(), 0x01);
        assert_eq!(ProcessorFlags::ZERO.bits(), 0x02);
        assert_eq!(ProcessorFlags::INTERRUPT.bits(), 0x04);
        assert_eq!(ProcessorFlags::DECIMAL.bits(), 0x08);
        assert_eq!(ProcessorFlags::BREAK.bits(), 0x10);
        assert_eq!(ProcessorFlags::OVERFLOW.bits(), 0x40);
        assert_eq!(ProcessorFlags::NEGATIVE.bits(), 0x80);
    }

    #[test]
    fn test_each_accessor_touches_only_its_bit() {
        type Setter = fn(&mut StatusRegister, bool);
        let setters: [(Setter, u8); 7] = [
            (StatusRegister::set_carry, 0x01),
            (StatusRegister::set_zero, 0x02),
            (StatusRegister::set_interrupt, 0x04),
            (StatusRegister::set_decimal, 0x08),
            (StatusRegister::set_brk, 0x10),
            (StatusRegister::set_overflow, 0x40),
            (StatusRegister::set_negative, 0x80),
        ];

        for (set, bit) in setters {
            let mut sr = StatusRegister::new();
            set(&mut sr, true);
            assert_eq!(sr.bits(), bit);

            sr.set_bits(0xFF);
            set(&mut sr, false);
            assert_eq!(sr.bits(), 0xFF & !bit);
        }
    }

    #[test]
    fn test_getters_read_raw_byte() {
        let mut sr = StatusRegister::new();
        sr.set_bits(0b1100_0011);
        assert!(sr.carry());
        assert!(sr.zero());
        assert!(!sr.interrupt());
        assert!(!sr.decimal());
        assert!(!sr.brk());
        assert!(sr.overflow());
        assert!(sr.negative());
    }

    #[test]
    fn test_unused_bit_is_retained() {
        let mut sr = StatusRegister::new();
        sr.set_bits(0x20);
        assert_eq!(sr.bits(), 0x20);
    }

    #[test]
    fn test_update_zero_negative() {
        let mut sr = StatusRegister::new();
        sr.update_zero_negative(0x00);
        assert!(sr.zero());
        assert!(!sr.negative());

        sr.update_zero_negative(0x80);
        assert!(!sr.zero());
        assert!(sr.negative());
    }

    #[test]
    fn test_flags_display() {
        assert_eq!(ProcessorFlags::empty().to_string(), "None");
        assert_eq!(
            (ProcessorFlags::CARRY | ProcessorFlags::NEGATIVE).to_string(),
            "Carry | Negative"
        );
    }
}
