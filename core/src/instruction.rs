use std::fmt;

use crate::error::Chip8Error;
use crate::opcode::Opcode;
use crate::registers::Register;

/// A decoded opcode.
/// `x` and `y` name registers, `kk` is a byte immediate, `n` a nibble immediate
/// and `addr` a 12-bit address.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    Cls,
    /// 00EE
    Ret,
    /// 1nnn
    Jp { addr: u16 },
    /// 2nnn
    Call { addr: u16 },
    /// 3xkk
    SeByte { x: Register, kk: u8 },
    /// 4xkk
    SneByte { x: Register, kk: u8 },
    /// 5xy0
    SeReg { x: Register, y: Register },
    /// 6xkk
    LdByte { x: Register, kk: u8 },
    /// 7xkk
    AddByte { x: Register, kk: u8 },
    /// 8xy0
    LdReg { x: Register, y: Register },
    /// 8xy1
    Or { x: Register, y: Register },
    /// 8xy2
    And { x: Register, y: Register },
    /// 8xy3
    Xor { x: Register, y: Register },
    /// 8xy4
    AddReg { x: Register, y: Register },
    /// 8xy5
    Sub { x: Register, y: Register },
    /// 8xy6
    Shr { x: Register },
    /// 8xy7
    Subn { x: Register, y: Register },
    /// 8xyE
    Shl { x: Register },
    /// 9xy0
    SneReg { x: Register, y: Register },
    /// Annn
    LdI { addr: u16 },
    /// Bnnn
    JpV0 { addr: u16 },
    /// Cxkk
    Rnd { x: Register, kk: u8 },
    /// Dxyn
    Drw { x: Register, y: Register, n: u8 },
    /// Ex9E
    Skp { x: Register },
    /// ExA1
    Sknp { x: Register },
    /// Fx07
    LdVxDt { x: Register },
    /// Fx0A
    LdKey { x: Register },
    /// Fx15
    LdDtVx { x: Register },
    /// Fx18
    LdStVx { x: Register },
    /// Fx1E
    AddI { x: Register },
    /// Fx29
    LdFont { x: Register },
    /// Fx33
    LdBcd { x: Register },
    /// Fx55
    Store { x: Register },
    /// Fx65
    Load { x: Register },
}

impl Instruction {
    /// Selects the Instruction a given opcode encodes
    pub fn decode(op: u16) -> Result<Instruction, Chip8Error> {
        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.addr());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Instruction::Cls,
            (0x0, 0x0, 0xE, 0xE) => Instruction::Ret,
            (0x1, ..) => Instruction::Jp { addr },
            (0x2, ..) => Instruction::Call { addr },
            (0x3, ..) => Instruction::SeByte { x, kk },
            (0x4, ..) => Instruction::SneByte { x, kk },
            (0x5, .., 0x0) => Instruction::SeReg { x, y },
            (0x6, ..) => Instruction::LdByte { x, kk },
            (0x7, ..) => Instruction::AddByte { x, kk },
            (0x8, .., 0x0) => Instruction::LdReg { x, y },
            (0x8, .., 0x1) => Instruction::Or { x, y },
            (0x8, .., 0x2) => Instruction::And { x, y },
            (0x8, .., 0x3) => Instruction::Xor { x, y },
            (0x8, .., 0x4) => Instruction::AddReg { x, y },
            (0x8, .., 0x5) => Instruction::Sub { x, y },
            (0x8, .., 0x6) => Instruction::Shr { x },
            (0x8, .., 0x7) => Instruction::Subn { x, y },
            (0x8, .., 0xE) => Instruction::Shl { x },
            (0x9, .., 0x0) => Instruction::SneReg { x, y },
            (0xA, ..) => Instruction::LdI { addr },
            (0xB, ..) => Instruction::JpV0 { addr },
            (0xC, ..) => Instruction::Rnd { x, kk },
            (0xD, ..) => Instruction::Drw { x, y, n },
            (0xE, _, 0x9, 0xE) => Instruction::Skp { x },
            (0xE, _, 0xA, 0x1) => Instruction::Sknp { x },
            (0xF, _, 0x0, 0x7) => Instruction::LdVxDt { x },
            (0xF, _, 0x0, 0xA) => Instruction::LdKey { x },
            (0xF, _, 0x1, 0x5) => Instruction::LdDtVx { x },
            (0xF, _, 0x1, 0x8) => Instruction::LdStVx { x },
            (0xF, _, 0x1, 0xE) => Instruction::AddI { x },
            (0xF, _, 0x2, 0x9) => Instruction::LdFont { x },
            (0xF, _, 0x3, 0x3) => Instruction::LdBcd { x },
            (0xF, _, 0x5, 0x5) => Instruction::Store { x },
            (0xF, _, 0x6, 0x5) => Instruction::Load { x },
            _ => return Err(Chip8Error::UnknownOpcode { opcode: op }),
        };
        Ok(instruction)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::Cls => write!(f, "CLS"),
            Instruction::Ret => write!(f, "RET"),
            Instruction::Jp { addr } => write!(f, "JP {:#05X}", addr),
            Instruction::Call { addr } => write!(f, "CALL {:#05X}", addr),
            Instruction::SeByte { x, kk } => write!(f, "SE {}, {:#04X}", x, kk),
            Instruction::SneByte { x, kk } => write!(f, "SNE {}, {:#04X}", x, kk),
            Instruction::SeReg { x, y } => write!(f, "SE {}, {}", x, y),
            Instruction::LdByte { x, kk } => write!(f, "LD {}, {:#04X}", x, kk),
            Instruction::AddByte { x, kk } => write!(f, "ADD {}, {:#04X}", x, kk),
            Instruction::LdReg { x, y } => write!(f, "LD {}, {}", x, y),
            Instruction::Or { x, y } => write!(f, "OR {}, {}", x, y),
            Instruction::And { x, y } => write!(f, "AND {}, {}", x, y),
            Instruction::Xor { x, y } => write!(f, "XOR {}, {}", x, y),
            Instruction::AddReg { x, y } => write!(f, "ADD {}, {}", x, y),
            Instruction::Sub { x, y } => write!(f, "SUB {}, {}", x, y),
            Instruction::Shr { x } => write!(f, "SHR {}", x),
            Instruction::Subn { x, y } => write!(f, "SUBN {}, {}", x, y),
            Instruction::Shl { x } => write!(f, "SHL {}", x),
            Instruction::SneReg { x, y } => write!(f, "SNE {}, {}", x, y),
            Instruction::LdI { addr } => write!(f, "LD I, {:#05X}", addr),
            Instruction::JpV0 { addr } => write!(f, "JP V0, {:#05X}", addr),
            Instruction::Rnd { x, kk } => write!(f, "RND {}, {:#04X}", x, kk),
            Instruction::Drw { x, y, n } => write!(f, "DRW {}, {}, {}", x, y, n),
            Instruction::Skp { x } => write!(f, "SKP {}", x),
            Instruction::Sknp { x } => write!(f, "SKNP {}", x),
            Instruction::LdVxDt { x } => write!(f, "LD {}, DT", x),
            Instruction::LdKey { x } => write!(f, "LD {}, K", x),
            Instruction::LdDtVx { x } => write!(f, "LD DT, {}", x),
            Instruction::LdStVx { x } => write!(f, "LD ST, {}", x),
            Instruction::AddI { x } => write!(f, "ADD I, {}", x),
            Instruction::LdFont { x } => write!(f, "LD F, {}", x),
            Instruction::LdBcd { x } => write!(f, "LD B, {}", x),
            Instruction::Store { x } => write!(f, "LD [I], {}", x),
            Instruction::Load { x } => write!(f, "LD {}, [I]", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(index: u8) -> Register {
        Register::try_from(index).unwrap()
    }

    #[test]
    fn test_decodes_fixed_functions() {
        assert_eq!(Instruction::decode(0x00E0), Ok(Instruction::Cls));
        assert_eq!(Instruction::decode(0x00EE), Ok(Instruction::Ret));
    }

    #[test]
    fn test_decodes_addresses() {
        assert_eq!(Instruction::decode(0x1ABC), Ok(Instruction::Jp { addr: 0xABC }));
        assert_eq!(Instruction::decode(0x2123), Ok(Instruction::Call { addr: 0x123 }));
        assert_eq!(Instruction::decode(0xAABC), Ok(Instruction::LdI { addr: 0xABC }));
        assert_eq!(Instruction::decode(0xB300), Ok(Instruction::JpV0 { addr: 0x300 }));
    }

    #[test]
    fn test_decodes_register_operands() {
        assert_eq!(
            Instruction::decode(0x8124),
            Ok(Instruction::AddReg { x: v(0x1), y: v(0x2) })
        );
        assert_eq!(
            Instruction::decode(0xD125),
            Ok(Instruction::Drw { x: v(0x1), y: v(0x2), n: 0x5 })
        );
        assert_eq!(Instruction::decode(0xF465), Ok(Instruction::Load { x: v(0x4) }));
    }

    #[test]
    fn test_shifts_ignore_vy() {
        assert_eq!(Instruction::decode(0x81A6), Ok(Instruction::Shr { x: v(0x1) }));
        assert_eq!(Instruction::decode(0x81AE), Ok(Instruction::Shl { x: v(0x1) }));
    }

    #[test]
    fn test_rejects_unassigned_opcodes() {
        for &opcode in &[0x0123, 0x5121, 0x8128, 0x9121, 0xE19F, 0xF1FF] {
            assert_eq!(
                Instruction::decode(opcode),
                Err(Chip8Error::UnknownOpcode { opcode })
            );
        }
    }

    #[test]
    fn test_disassembles() {
        let text = |op: u16| Instruction::decode(op).unwrap().to_string();
        assert_eq!(text(0x00E0), "CLS");
        assert_eq!(text(0x1ABC), "JP 0xABC");
        assert_eq!(text(0x6122), "LD V1, 0x22");
        assert_eq!(text(0x8F14), "ADD VF, V1");
        assert_eq!(text(0xD015), "DRW V0, V1, 5");
        assert_eq!(text(0xF10A), "LD V1, K");
        assert_eq!(text(0xF355), "LD [I], V3");
    }
}
