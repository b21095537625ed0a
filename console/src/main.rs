use std::fs;
use std::path::PathBuf;

use clap::Parser;
use miette::{bail, IntoDiagnostic, Result};

use chipvm_core::constants::{CPU_FREQUENCY, PROGRAM_START};
use chipvm_core::Chip8;

use output::{message, MsgColor};

mod headless;
mod keymap;
mod output;
mod run;

/// A Chip-8 virtual machine. Runs a ROM in a window, or headless for a fixed number of cycles.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// ROM file to run
    rom: PathBuf,

    /// Instructions executed per second
    #[arg(long, default_value_t = CPU_FREQUENCY)]
    cpu_hz: u32,

    /// Size of each pixel on screen
    #[arg(long, default_value_t = 10)]
    scale: usize,

    /// Address the ROM is loaded at and execution starts from
    #[arg(long, default_value_t = PROGRAM_START, value_parser = parse_address)]
    origin: u16,

    /// Print every executed instruction
    #[arg(short, long)]
    trace: bool,

    /// Run this many cycles without a window, then print the screen
    #[arg(long, value_name = "CYCLES")]
    headless: Option<u64>,
}

/// Accepts decimal or `0x` prefixed hexadecimal
fn parse_address(arg: &str) -> Result<u16, String> {
    let parsed = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => arg.parse(),
    };
    parsed.map_err(|e| format!("invalid address `{arg}`: {e}"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.cpu_hz == 0 {
        bail!("--cpu-hz must be above 0");
    }
    if args.scale == 0 {
        bail!("--scale must be above 0");
    }

    message(MsgColor::Green, "Loading", args.rom.display());
    let rom = fs::read(&args.rom).into_diagnostic()?;
    let mut chip8 = Chip8::new();
    chip8.load_rom_at(args.origin, &rom).into_diagnostic()?;
    message(
        MsgColor::Green,
        "Loaded",
        format!("{} bytes at {:#05X}", rom.len(), args.origin),
    );

    match args.headless {
        Some(cycles) => headless::run(&mut chip8, cycles, args.cpu_hz, args.trace),
        None => run::run(&mut chip8, args.cpu_hz, args.scale, args.trace),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("512"), Ok(0x200));
        assert_eq!(parse_address("0x300"), Ok(0x300));
        assert!(parse_address("0xZZZ").is_err());
    }

    #[test]
    fn test_args() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
