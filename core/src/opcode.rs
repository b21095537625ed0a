use crate::registers::Register;

/// # Opcodes
///
/// Opcodes are 16-bit words, read big-endian from two consecutive bytes.
/// Which instruction a word encodes is decided by some combination of:
/// - `(n, _, _, _)` the broad category; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within a category
/// - `(_, _, n, n)` more specific behavior within a category
/// - `(_, n, n, n)` a fixed function that takes no operands (e.g. CLS)
///
/// The remaining nibbles carry operands:
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` an 8-bit immediate assigned to and/or compared with Vx
/// - `(_, n, _, _)` the register Vx, or the range V0..=Vx
/// - `(_, _, n, _)` the register Vy
/// - `(_, _, _, n)` a 4-bit immediate (sprite height)
pub trait Opcode {
    /// The four nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// `[_x__]`
    fn x(&self) -> Register;

    /// `[__y_]`
    fn y(&self) -> Register;

    /// `[___n]`
    fn n(&self) -> u8;

    /// `[__kk]`
    fn kk(&self) -> u8;

    /// `[_adr]`
    fn addr(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (
            ((self & 0xF000) >> 12) as u8,
            ((self & 0x0F00) >> 8) as u8,
            ((self & 0x00F0) >> 4) as u8,
            self.n(),
        )
    }

    fn x(&self) -> Register {
        Register::from_nibble(((self & 0x0F00) >> 8) as u8)
    }

    fn y(&self) -> Register {
        Register::from_nibble(((self & 0x00F0) >> 4) as u8)
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn addr(&self) -> u16 {
        self & 0x0FFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OP: u16 = 0xABCD;

    #[test]
    fn test_nibbles() {
        assert_eq!(OP.nibbles(), (0xA, 0xB, 0xC, 0xD));
    }

    #[test]
    fn test_registers() {
        assert_eq!(OP.x(), Register::try_from(0xB).unwrap());
        assert_eq!(OP.y(), Register::try_from(0xC).unwrap());
    }

    #[test]
    fn test_immediates() {
        assert_eq!(OP.n(), 0xD);
        assert_eq!(OP.kk(), 0xCD);
        assert_eq!(OP.addr(), 0x0BCD);
    }
}
