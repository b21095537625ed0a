use std::fmt::Display;

use colored::Colorize;

use chipvm_core::{Chip8, Fault, Screen, Step};

pub enum MsgColor {
    Green,
    Cyan,
    Red,
}

/// Prints `left` right-aligned and coloured, followed by `right`
pub fn message<R: Display>(color: MsgColor, left: &str, right: R) {
    let left = match color {
        MsgColor::Green => left.green(),
        MsgColor::Cyan => left.cyan(),
        MsgColor::Red => left.red(),
    };
    println!("{left:>12} {right}");
}

pub fn fault_message(fault: &Fault) {
    message(MsgColor::Red, "Halted", fault);
}

/// One line per executed instruction: where, what, and the registers it left behind
pub fn trace(step: &Step, chip8: &Chip8) {
    if let Step::Executed {
        address,
        opcode,
        instruction,
    } = step
    {
        let registers = chip8.registers();
        println!(
            "{:04X} {:04X} {:<16} v{:02X?} i{:04X}",
            address,
            opcode,
            instruction.to_string(),
            registers.v(),
            registers.i
        );
    }
}

/// The screen as text, `#` for lit pixels and `.` for unlit ones
pub fn frame_to_text(screen: &dyn Screen) -> String {
    let mut text = String::with_capacity((screen.width() + 1) * screen.height());
    for y in 0..screen.height() {
        for x in 0..screen.width() {
            text.push(if screen.pixel(x, y) { '#' } else { '.' });
        }
        text.push('\n');
    }
    text
}
