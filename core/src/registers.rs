use std::fmt;

use crate::error::Chip8Error;

/// Index of one of the sixteen general purpose registers V0..VF.
///
/// Decoded opcodes always produce a valid index since it's taken from a single nibble,
/// anything else has to go through `TryFrom<u8>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Register(u8);

impl Register {
    /// VF doubles as the carry/borrow/collision flag
    pub const FLAG: Register = Register(0xF);
    pub const V0: Register = Register(0x0);

    /// Takes the low nibble of `nibble` as the register index
    pub(crate) fn from_nibble(nibble: u8) -> Self {
        Register(nibble & 0xF)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Registers V0..=self
    pub fn range_from_v0(self) -> impl Iterator<Item = Register> {
        (0..=self.0).map(Register)
    }
}

impl TryFrom<u8> for Register {
    type Error = Chip8Error;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if index <= 0xF {
            Ok(Register(index))
        } else {
            Err(Chip8Error::InvalidRegister { index })
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{:X}", self.0)
    }
}

/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry flag, arithmetic overwrites it even when it's an operand
/// - (i) a 16-bit memory address register
/// - (pc) a 16-bit program counter
/// - (sp) an 8-bit stack pointer, the depth of the call stack
/// - 2 8-bit timers (delay & sound) counting down to 0
///
/// All register values are `u8` so arithmetic has to wrap rather than clamp.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Registers {
    v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
}

impl Registers {
    pub fn new(pc: u16) -> Self {
        Registers {
            v: [0; 16],
            i: 0,
            pc,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
        }
    }

    pub fn get(&self, register: Register) -> u8 {
        self.v[register.index()]
    }

    pub fn set(&mut self, register: Register, value: u8) {
        self.v[register.index()] = value;
    }

    pub fn flag(&self) -> u8 {
        self.get(Register::FLAG)
    }

    pub fn set_flag(&mut self, set: bool) {
        self.set(Register::FLAG, u8::from(set));
    }

    /// A copy of V0..VF
    pub fn v(&self) -> [u8; 16] {
        self.v
    }

    /// Decrements both timers once, neither goes below 0
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}
