/// Default Chip-8 display width in pixels
pub const DISPLAY_WIDTH: usize = 64;

/// Default Chip-8 display height in pixels
pub const DISPLAY_HEIGHT: usize = 32;

/// Size of the conventional Chip-8 address space; ROMs must fit inside it
pub const ADDRESS_SPACE: usize = 0x1000;

/// Size of the backing store, every 16-bit address is readable and writable
pub const MEMORY_SIZE: usize = 0x1_0000;

/// ROMs are loaded (and execution starts) here unless told otherwise
pub const PROGRAM_START: u16 = 0x200;

/// 0x000 - 0x050 holds the sprite sheet
pub const FONT_START: u16 = 0x000;

/// Bytes per font sprite
pub const FONT_SPRITE_HEIGHT: u16 = 5;

/// 0x0E0 - 0x100 holds the call stack, two bytes per return address
pub const STACK_START: u16 = 0x0E0;

/// Number of nested subroutine calls that fit in the stack region
pub const MAX_STACK_DEPTH: u8 = 16;

/// The CPU should have a clock speed of 500Hz
pub const CPU_FREQUENCY: u32 = 500;

/// The timers should be decremented at 60Hz
pub const TIMER_FREQUENCY: u32 = 60;

/// # Sprite Sheet
/// Built-in 4x5 sprites for the hexadecimal digits 0..F, five bytes each.
/// Only the high nibble of each byte is drawn.
/// ```text
/// 0xF0  ####
/// 0x90  #  #
/// 0x90  #  #
/// 0x90  #  #
/// 0xF0  ####
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
