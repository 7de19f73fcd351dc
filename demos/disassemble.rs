//! Disassembly listing
//!
//! Loads the day-of-week routine (code plus its month table) followed by the
//! Fibonacci program and prints a listing, with the table marked as data.
//! Run with: `cargo run --example disassemble`

use emu6502::{Disassembler, Machine};

const DAY_OF_WEEK: [u8; 45] = [
    0xE0, 0x03, 0xB0, 0x01, 0x88, 0x49, 0x7F, 0xC0, 0xC8, 0x7D, 0x20, 0x00, 0x85, 0x86, 0x98,
    0x20, 0x1C, 0x00, 0xE5, 0x86, 0x85, 0x86, 0x98, 0x4A, 0x4A, 0x18, 0x65, 0x86, 0x69, 0x07,
    0x90, 0xFC, 0x60, 0x01, 0x05, 0x06, 0x03, 0x01, 0x05, 0x03, 0x00, 0x04, 0x02, 0x06, 0x04,
];

const FIBONACCI: [u8; 27] = [
    0xA2, 0x01, 0x86, 0x00, 0x38, 0xA0, 0x0C, 0x98, 0xE9, 0x03, 0xA8, 0x18, 0xA9, 0x02, 0x85,
    0x01, 0xA6, 0x01, 0x65, 0x00, 0x85, 0x01, 0x86, 0x00, 0x88, 0xD0, 0xF5,
];

fn main() {
    let mut code = DAY_OF_WEEK.to_vec();
    code.extend_from_slice(&FIBONACCI);

    let mut machine = Machine::new();
    if !machine.load_executable(&code, 0x0000) {
        eprintln!("Program does not fit in memory");
        std::process::exit(1);
    }

    let mut disassembler = Disassembler::new(machine.memory(), 0x0000, code.len() as u16);
    // Month offset table
    disassembler.add_non_executable_section(0x0021, 12);

    match disassembler.disassemble() {
        Ok(lines) => {
            for line in lines {
                println!("{:04X}  {}", line.address, line.text);
            }
        }
        Err(e) => {
            eprintln!("Disassembly failed: {}", e);
            std::process::exit(1);
        }
    }
}
