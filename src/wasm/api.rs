//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for loading programs, stepping,
//! state inspection and disassembly.

use crate::{Disassembler, ExecutionError, Machine, StateUpdate, StopReason};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for JsError {
    fn from(error: ExecutionError) -> Self {
        JsError::new(&error.to_string())
    }
}

/// One line of a disassembly listing
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct ListingLine {
    address: u16,
    text: String,
}

#[wasm_bindgen]
impl ListingLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    machine: Machine,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create a new emulator with cleared memory
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            machine: Machine::new(),
        }
    }

    /// Load a program (clearing memory first) and set PC to its start.
    /// Returns false if the program does not fit.
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) -> bool {
        self.machine.load_executable(program, start_addr)
    }

    /// Load non-executable data
    pub fn load_data(&mut self, data: &[u8], start_addr: u16, clear_first: bool) -> bool {
        self.machine.load_data(data, start_addr, clear_first)
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Result<(), JsError> {
        self.machine.step().map_err(JsError::from)
    }

    /// Run until the program ends; returns `"end-of-data"` or
    /// `"end-of-execution"`
    pub fn run(&mut self) -> Result<String, JsError> {
        let reason = self.machine.run()?;
        Ok(match reason {
            StopReason::EndOfData => "end-of-data".to_string(),
            StopReason::EndOfExecution => "end-of-execution".to_string(),
        })
    }

    /// Reset registers and clear memory
    pub fn reset(&mut self) {
        self.machine.reset();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.machine.cpu().a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.machine.cpu().x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.machine.cpu().y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.machine.cpu().pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.machine.stack().pointer()
    }

    /// Raw status register byte
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.machine.cpu().status().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn end_of_execution(&self) -> bool {
        self.machine.is_end_of_execution()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.machine.set_state(StateUpdate::default().with_pc(addr));
    }

    /// Human-readable register dump
    pub fn dump(&self) -> String {
        self.machine.dump()
    }

    /// Copy `length` bytes of memory starting at `addr`, clamped to the top of
    /// memory
    pub fn dump_memory(&self, addr: u16, length: u16) -> js_sys::Uint8Array {
        let length = (0x1_0000 - addr as u32).min(length as u32) as u16;
        js_sys::Uint8Array::from(self.machine.dump_memory(addr, length))
    }

    /// Disassemble `length` bytes of memory starting at `start_addr`
    pub fn disassemble(&self, start_addr: u16, length: u16) -> Result<Vec<JsValue>, JsError> {
        let mut disassembler = Disassembler::new(self.machine.memory(), start_addr, length);
        let lines = disassembler.disassemble()?;

        Ok(lines
            .into_iter()
            .map(|line| {
                JsValue::from(ListingLine {
                    address: line.address,
                    text: line.text,
                })
            })
            .collect())
    }

    /// Get the program start address
    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.machine.loaded_address()
    }

    /// Get the address one past the last program byte
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u32 {
        self.machine.loaded_end() as u32
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
