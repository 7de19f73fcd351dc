//! Day of week calculator
//!
//! Runs a machine-code routine that computes the weekday of a Gregorian date
//! from 1900 onwards. The date goes in as A = day, X = month and
//! Y = year - 1900; the weekday comes back in A (0 = Sunday).
//!
//! Run with: `cargo run --example day_of_week -- 19 10 2026`

use emu6502::{Machine, ProcessorFlags, StateUpdate};

/// 33 bytes of code followed by a 12-entry month offset table.
const DAY_OF_WEEK: [u8; 45] = [
    0xE0, 0x03, 0xB0, 0x01, 0x88, 0x49, 0x7F, 0xC0, 0xC8, 0x7D, 0x20, 0x00, 0x85, 0x86, 0x98,
    0x20, 0x1C, 0x00, 0xE5, 0x86, 0x85, 0x86, 0x98, 0x4A, 0x4A, 0x18, 0x65, 0x86, 0x69, 0x07,
    0x90, 0xFC, 0x60, 0x01, 0x05, 0x06, 0x03, 0x01, 0x05, 0x03, 0x00, 0x04, 0x02, 0x06, 0x04,
];

const DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

fn parse_date() -> Result<(u8, u8, u16), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return Ok((4, 7, 2024));
    }
    if args.len() != 3 {
        return Err("usage: day_of_week <day> <month> <year>".to_string());
    }

    let day = args[0].parse().map_err(|_| format!("invalid day: {}", args[0]))?;
    let month = args[1].parse().map_err(|_| format!("invalid month: {}", args[1]))?;
    let year: u16 = args[2].parse().map_err(|_| format!("invalid year: {}", args[2]))?;

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) || !(1900..=2155).contains(&year)
    {
        return Err("date out of range (years 1900-2155)".to_string());
    }
    Ok((day, month, year))
}

fn main() {
    let (day, month, year) = match parse_date() {
        Ok(date) => date,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    let mut machine = Machine::new();
    if !machine.load_executable(&DAY_OF_WEEK, 0x0000) {
        eprintln!("Program does not fit in memory");
        std::process::exit(1);
    }
    machine.set_state(
        StateUpdate::default()
            .with_a(day)
            .with_x(month)
            .with_y((year - 1900) as u8)
            .with_flags(ProcessorFlags::empty()),
    );

    if let Err(e) = machine.run() {
        eprintln!("Execution failed: {}", e);
        std::process::exit(1);
    }

    let a = machine.get_state().a;
    println!(
        "Day of week calculator. Result is in A register: {:02}/{:02}/{} is a {}",
        day,
        month,
        year,
        DAYS.get(a as usize).copied().unwrap_or("???")
    );
    println!("[ 0 - Sunday, 1 - Monday, 2 - Tuesday, 3 - Wednesday, 4 - Thursday, 5 - Friday, 6 - Saturday ]");
    println!("{}", machine.dump());
}
