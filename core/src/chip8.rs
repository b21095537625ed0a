use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{ADDRESS_SPACE, PROGRAM_START};
use crate::error::{Chip8Error, Fault};
use crate::framebuffer::{FrameBuffer, Screen};
use crate::instruction::Instruction;
use crate::keypad::{Input, Keypad};
use crate::memory::Memory;
use crate::operations::{execute, Flow};
use crate::registers::{Register, Registers};
use crate::state::State;

/// What a single call to `step` did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    /// The instruction at `address` ran
    Executed {
        address: u16,
        opcode: u16,
        instruction: Instruction,
    },
    /// Nothing ran, a register is still waiting for a key press
    AwaitingKey,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns the `State` (registers, memory) and the `screen` and `input` it was given.
///
/// Supplies interfaces for:
/// - loading roms
/// - advancing the CPU one instruction at a time
/// - advancing its timers
/// - inspecting its screen for rendering by some display
///
/// Timing is up to the caller: `step` should be called at the CPU's clock speed and
/// `tick_timers` at 60Hz, independently of one another.
pub struct Chip8<S: Screen = FrameBuffer, I: Input = Keypad> {
    state: State,
    screen: S,
    input: I,
}

impl Chip8 {
    /// A 64x32 Chip-8 with its own keypad
    pub fn new() -> Self {
        Self::with_devices(FrameBuffer::default(), Keypad::new())
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Screen, I: Input> Chip8<S, I> {
    pub fn with_devices(screen: S, input: I) -> Self {
        Chip8 {
            state: State::from_entropy(),
            screen,
            input,
        }
    }

    /// Makes RND reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.state.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Loads a rom at the default program start, see `load_rom_at`
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), Chip8Error> {
        self.load_rom_at(PROGRAM_START, rom)
    }

    /// Copies `rom` into memory at `origin` and resets the registers to start executing it.
    /// Fails without touching memory if the rom doesn't fit in the address space.
    pub fn load_rom_at(&mut self, origin: u16, rom: &[u8]) -> Result<(), Chip8Error> {
        let max_size = ADDRESS_SPACE.saturating_sub(origin as usize);
        if rom.len() > max_size {
            return Err(Chip8Error::RomTooLarge {
                size: rom.len(),
                max_size,
                origin,
            });
        }
        self.state.memory.load(origin, rom);
        self.state.registers = Registers::new(origin);
        self.state.register_needing_key = None;
        Ok(())
    }

    /// Advances the CPU by a single instruction
    /// - doesn't fetch anything while a register is awaiting a key press
    /// - otherwise gets, decodes and executes the next opcode, then moves pc
    ///
    /// Failures leave pc on the offending instruction.
    pub fn step(&mut self) -> Result<Step, Fault> {
        if let Some(register) = self.state.register_needing_key {
            match self.input.take_key_press() {
                Some(key) => {
                    self.state.registers.set(register, key);
                    self.state.register_needing_key = None;
                }
                None => return Ok(Step::AwaitingKey),
            }
        }

        let address = self.state.registers.pc;
        let opcode = self.get_op();
        let fault = move |source| Fault {
            address,
            opcode,
            source,
        };

        if address % 2 != 0 {
            return Err(fault(Chip8Error::MisalignedProgramCounter { pc: address }));
        }

        let instruction = Instruction::decode(opcode).map_err(fault)?;
        let flow = execute(
            instruction,
            &mut self.state,
            &mut self.screen,
            &mut self.input,
        )
        .map_err(fault)?;

        self.state.registers.pc = match flow {
            Flow::Next => address.wrapping_add(2),
            Flow::Skip => address.wrapping_add(4),
            Flow::Jump(target) => target,
        };

        Ok(Step::Executed {
            address,
            opcode,
            instruction,
        })
    }

    /// Decrements the delay and sound timers once, should be called at 60Hz
    pub fn tick_timers(&mut self) {
        self.state.registers.tick_timers();
    }

    /// Whether a tone should be playing
    pub fn sound_active(&self) -> bool {
        self.state.registers.sound_timer > 0
    }

    /// Returns the screen if it changed since it was last returned
    pub fn get_frame(&mut self) -> Option<&S> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.screen)
        } else {
            None
        }
    }

    pub fn needs_redraw(&self) -> bool {
        self.state.draw_flag
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn registers(&self) -> &Registers {
        &self.state.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }

    /// The register an Fx0A is still waiting to fill
    pub fn awaiting_key(&self) -> Option<Register> {
        self.state.register_needing_key
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> u16 {
        self.state.memory.read_word(self.state.registers.pc)
    }
}

impl<S: Screen> Chip8<S, Keypad> {
    /// Set the pressed status of key
    pub fn key_press(&mut self, key: u8) {
        self.input.press(key);
    }

    /// Unset the pressed status of key
    pub fn key_release(&mut self, key: u8) {
        self.input.release(key);
    }
}
