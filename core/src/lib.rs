pub use chip8::{Chip8, Step};
pub use clock::{Clock, Ticks};
pub use error::{Chip8Error, ErrorKind, Fault};
pub use framebuffer::{FrameBuffer, Screen};
pub use instruction::Instruction;
pub use keypad::{Input, Keypad};
pub use memory::Memory;
pub use registers::{Register, Registers};

mod chip8;
mod clock;
pub mod constants;
mod error;
mod framebuffer;
mod instruction;
mod keypad;
mod memory;
mod opcode;
mod operations;
mod registers;
mod state;
