use std::time::{Duration, Instant};

use miette::{IntoDiagnostic, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chipvm_core::constants::TIMER_FREQUENCY;
use chipvm_core::{Chip8, Clock, Screen};
use chipvm_display::Display;

use crate::keymap::keymap;
use crate::output::{self, message, MsgColor};

/// Longest stretch of time made up for in one go, e.g. after the window was dragged
const MAX_CATCH_UP: Duration = Duration::from_millis(100);

/// How much faster time passes while fast forwarding
const FAST_FORWARD: u32 = 4;

/// How long to idle between polls
const POLL_INTERVAL: Duration = Duration::from_millis(1);

pub fn run(chip8: &mut Chip8, cpu_hz: u32, scale: usize, trace: bool) -> Result<()> {
    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| miette::miette!("unable to initialise SDL2: {e}"))?;
    let screen = chip8.screen();
    let mut display = Display::new(&sdl, screen.width(), screen.height(), scale).into_diagnostic()?;
    let mut events = sdl
        .event_pump()
        .map_err(|e| miette::miette!("unable to poll SDL2 events: {e}"))?;

    message(MsgColor::Green, "Running", format!("at {cpu_hz}Hz"));
    message(MsgColor::Cyan, "Help", "hold SPACE to fast forward, ESC to quit");

    let mut clock = Clock::new(cpu_hz, TIMER_FREQUENCY);
    let mut last_cycle = Instant::now();

    // Whether or not the default clock speed should be respected
    let mut fast_forward = false;
    // Set once the program faults, the window stays up until it's closed
    let mut halted = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        let now = Instant::now();
        let mut elapsed = (now - last_cycle).min(MAX_CATCH_UP);
        last_cycle = now;
        if fast_forward {
            elapsed *= FAST_FORWARD;
        }

        let ticks = clock.advance(elapsed);
        if !halted {
            for _ in 0..ticks.cycles {
                match chip8.step() {
                    Ok(step) => {
                        if trace {
                            output::trace(&step, chip8);
                        }
                    }
                    Err(fault) => {
                        output::fault_message(&fault);
                        halted = true;
                        break;
                    }
                }
            }
            for _ in 0..ticks.timer_ticks {
                chip8.tick_timers();
            }
        }

        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = chip8.get_frame() {
            display.render(frame).into_diagnostic()?;
        }

        std::thread::sleep(POLL_INTERVAL);
    }

    Ok(())
}
