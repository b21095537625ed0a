/// Source of key state for the CPU.
///
/// Chip-8 input is generated with a hexadecimal keypad, keys are numbered 0x0..=0xF.
pub trait Input {
    /// Whether `key` is currently held down
    fn is_pressed(&self, key: u8) -> bool;

    /// The next key pressed since the last call, if any
    fn take_key_press(&mut self) -> Option<u8>;
}

/// # Keypad
/// Tracks the pressed status of keys 0..F along with the most recent key press.
/// Front-ends feed it with `press` and `release` as events arrive.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Keypad {
    pressed: [bool; 16],
    latest: Option<u8>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys outside of 0x0..=0xF are ignored
    pub fn press(&mut self, key: u8) {
        if let Some(pressed) = self.pressed.get_mut(key as usize) {
            *pressed = true;
            self.latest = Some(key);
        }
    }

    pub fn release(&mut self, key: u8) {
        if let Some(pressed) = self.pressed.get_mut(key as usize) {
            *pressed = false;
        }
    }
}

impl Input for Keypad {
    fn is_pressed(&self, key: u8) -> bool {
        self.pressed.get(key as usize).copied().unwrap_or(false)
    }

    fn take_key_press(&mut self) -> Option<u8> {
        self.latest.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_pressed_keys() {
        let mut keypad = Keypad::new();
        keypad.press(0xE);
        assert!(keypad.is_pressed(0xE));
        keypad.release(0xE);
        assert!(!keypad.is_pressed(0xE));
    }

    #[test]
    fn test_key_press_is_taken_once() {
        let mut keypad = Keypad::new();
        keypad.press(0x1);
        keypad.press(0x2);
        keypad.release(0x2);
        assert_eq!(keypad.take_key_press(), Some(0x2));
        assert_eq!(keypad.take_key_press(), None);
    }

    #[test]
    fn test_ignores_keys_off_the_keypad() {
        let mut keypad = Keypad::new();
        keypad.press(0x10);
        assert!(!keypad.is_pressed(0x10));
        assert_eq!(keypad.take_key_press(), None);
    }
}
