//! Fibonacci calculator
//!
//! Runs a small machine-code program that leaves the 13th number of the
//! Fibonacci sequence (144) in the accumulator.
//! Run with: `cargo run --example fibonacci`

use emu6502::Machine;

const FIBONACCI: [u8; 27] = [
    0xA2, 0x01, 0x86, 0x00, 0x38, 0xA0, 0x0C, 0x98, 0xE9, 0x03, 0xA8, 0x18, 0xA9, 0x02, 0x85,
    0x01, 0xA6, 0x01, 0x65, 0x00, 0x85, 0x01, 0x86, 0x00, 0x88, 0xD0, 0xF5,
];

fn main() {
    let mut machine = Machine::new();
    if !machine.load_executable(&FIBONACCI, 0x0200) {
        eprintln!("Program does not fit in memory");
        std::process::exit(1);
    }

    match machine.run() {
        Ok(reason) => {
            println!("Fibonacci calculator. 13th number in the sequence (144) is in A:");
            println!("{}", machine.dump());
            println!("Stopped: {:?}", reason);
        }
        Err(e) => {
            eprintln!("Execution failed: {}", e);
            std::process::exit(1);
        }
    }
}
