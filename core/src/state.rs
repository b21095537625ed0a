use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{FONT_START, PROGRAM_START, SPRITE_SHEET};
use crate::memory::Memory;
use crate::registers::{Register, Registers};

/// Everything the CPU owns outright; the screen and input are borrowed from whoever supplied them.
///
/// ## Input
/// Emulation halts while `register_needing_key` is set, until a key press is written to it.
///
/// ## Rendering
/// `draw_flag` is raised whenever the screen changes and lowered once the frame has been handed out.
pub struct State {
    pub registers: Registers,
    pub memory: Memory,
    pub draw_flag: bool,
    pub register_needing_key: Option<Register>,
    pub rng: StdRng,
}

impl State {
    pub fn new(rng: StdRng) -> Self {
        let mut memory = Memory::new();
        memory.load(FONT_START, &SPRITE_SHEET);

        State {
            registers: Registers::new(PROGRAM_START),
            memory,
            draw_flag: false,
            register_needing_key: None,
            rng,
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}
