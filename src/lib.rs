//! # 6502 CPU Emulator Core
//!
//! An emulator for the MOS Technology 6502 processor: a byte-addressable CPU
//! with three 8-bit registers, a 16-bit program counter, an 8-bit status
//! register and a flat 64KB address space with a hardware stack in page 1.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::Machine;
//!
//! // Fibonacci: leaves the 13th number of the sequence in A
//! let program = [
//!     0xA2, 0x01, 0x86, 0x00, 0x38, 0xA0, 0x0C, 0x98, 0xE9, 0x03, 0xA8, 0x18, 0xA9, 0x02,
//!     0x85, 0x01, 0xA6, 0x01, 0x65, 0x00, 0x85, 0x01, 0x86, 0x00, 0x88, 0xD0, 0xF5,
//! ];
//!
//! let mut machine = Machine::new();
//! assert!(machine.load_executable(&program, 0x0200));
//! machine.run().unwrap();
//!
//! assert_eq!(machine.get_state().a, 144);
//! ```
//!
//! ## Architecture
//!
//! - **Table-driven decoding**: every opcode byte maps to an instruction and an
//!   addressing mode through one `const` table ([`OPCODE_TABLE`])
//! - **Single owner**: [`Machine`] owns the CPU registers, memory and stack
//!   pointer by value; instruction handlers borrow the machine for one step
//! - **No hidden state**: nothing is global except the immutable opcode table,
//!   so independent machines can run side by side
//!
//! ## Modules
//!
//! - `addressing` - Addressing mode enumeration and per-mode facts
//! - `memory` - 64KB memory and the `MemoryBus` trait
//! - `status` - Status register flags
//! - `stack` - Page-1 stack pointer
//! - `cpu` - Register file and partial state updates
//! - `opcodes` - Opcode metadata table
//! - `resolver` - Operand fetch and effective-address calculation
//! - `machine` - Load, step, run, reset and state inspection
//! - `disassembler` - Text listing built on the opcode table
//!
//! ## Deliberate deviations from hardware
//!
//! - BRK and RTI consume their opcode and do nothing else
//! - `JMP ($xxFF)` reads the pointer high byte from the next page
//! - An RTS with no pending JSR ends execution instead of returning
//! - Decimal-mode ADC/SBC only update Carry

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod machine;
pub mod memory;
pub mod opcodes;
pub mod resolver;
pub mod stack;
pub mod status;

// Instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{CpuState, StateUpdate, CPU};
pub use disassembler::{disassemble_bytes, Disassembler, DisassemblyLine, NonExecutableSection};
pub use machine::{Machine, MachineState, StopReason};
pub use memory::{Memory, MemoryBus};
pub use opcodes::{find_opcode, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use resolver::InstructionStream;
pub use stack::Stack;
pub use status::{ProcessorFlags, StatusRegister};

/// Errors that stop execution or disassembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// A byte was fetched from the instruction stream at or past the end of
    /// the loaded executable data.
    ///
    /// Contains the address of the attempted fetch.
    EndOfData { address: u16 },

    /// The opcode byte does not decode to any instruction.
    IllegalOpcode { opcode: u8, address: u16 },

    /// An instruction handler was reached with an addressing mode it does not
    /// support. Indicates a corrupt opcode table.
    InvalidAddressingMode {
        mnemonic: Mnemonic,
        mode: AddressingMode,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::EndOfData { address } => {
                write!(f, "Fetch at 0x{:04X} ran past the end of the loaded data", address)
            }
            ExecutionError::IllegalOpcode { opcode, address } => {
                write!(f, "Illegal opcode 0x{:02X} at 0x{:04X}", opcode, address)
            }
            ExecutionError::InvalidAddressingMode { mnemonic, mode } => {
                write!(f, "{} does not support {} addressing", mnemonic, mode)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
