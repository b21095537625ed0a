use std::time::Duration;

use miette::{IntoDiagnostic, Result};

use chipvm_core::constants::TIMER_FREQUENCY;
use chipvm_core::{Chip8, Clock};

use crate::output::{self, message, MsgColor};

/// Runs `cycles` steps at simulated time, then prints the screen.
/// Timers tick as if the steps had taken place at `cpu_hz`.
pub fn run(chip8: &mut Chip8, cycles: u64, cpu_hz: u32, trace: bool) -> Result<()> {
    message(MsgColor::Green, "Running", format!("{cycles} cycles headless"));

    let cycle_time = Duration::from_secs(1) / cpu_hz;
    let mut clock = Clock::new(cpu_hz, TIMER_FREQUENCY);
    let mut result = Ok(());

    for _ in 0..cycles {
        match chip8.step() {
            Ok(step) => {
                if trace {
                    output::trace(&step, chip8);
                }
            }
            Err(fault) => {
                output::fault_message(&fault);
                result = Err(fault);
                break;
            }
        }
        for _ in 0..clock.advance(cycle_time).timer_ticks {
            chip8.tick_timers();
        }
    }

    print!("{}", output::frame_to_text(chip8.screen()));
    result.into_diagnostic()
}
