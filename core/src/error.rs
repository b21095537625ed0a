use std::fmt;

use thiserror::Error;

/// Broad categories of failure, used by front-ends to decide how to react.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The machine reached a state it can't continue from (e.g. returning with an empty stack)
    IllegalState,
    /// The opcode word doesn't correspond to any instruction
    UnimplementedOpcode,
    /// An operand is outside of its valid range
    InvalidOperand,
    /// A ROM couldn't be loaded
    InvalidRom,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::IllegalState => "illegal state",
            ErrorKind::UnimplementedOpcode => "unimplemented opcode",
            ErrorKind::InvalidOperand => "invalid operand",
            ErrorKind::InvalidRom => "invalid rom",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Chip8Error {
    #[error("stack underflow: cannot return from a subroutine with an empty call stack")]
    StackUnderflow,

    #[error("stack overflow: cannot nest more than {depth} subroutine calls")]
    StackOverflow { depth: u8 },

    #[error("program counter {pc:#06X} is not aligned to an instruction boundary")]
    MisalignedProgramCounter { pc: u16 },

    #[error("unknown opcode {opcode:#06X}")]
    UnknownOpcode { opcode: u16 },

    #[error("register index {index:#X} is out of range V0..VF")]
    InvalidRegister { index: u8 },

    #[error("ROM is too large ({size} bytes), at most {max_size} bytes fit from {origin:#05X}")]
    RomTooLarge {
        size: usize,
        max_size: usize,
        origin: u16,
    },
}

impl Chip8Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Chip8Error::StackUnderflow
            | Chip8Error::StackOverflow { .. }
            | Chip8Error::MisalignedProgramCounter { .. } => ErrorKind::IllegalState,
            Chip8Error::UnknownOpcode { .. } => ErrorKind::UnimplementedOpcode,
            Chip8Error::InvalidRegister { .. } => ErrorKind::InvalidOperand,
            Chip8Error::RomTooLarge { .. } => ErrorKind::InvalidRom,
        }
    }
}

/// A failed `step`, located at the instruction that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} at {address:#06X} ({opcode:#06X}): {source}", .source.kind())]
pub struct Fault {
    pub address: u16,
    pub opcode: u16,
    #[source]
    pub source: Chip8Error,
}

impl Fault {
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_errors_are_illegal_state() {
        assert_eq!(Chip8Error::StackUnderflow.kind(), ErrorKind::IllegalState);
        assert_eq!(
            Chip8Error::StackOverflow { depth: 16 }.kind(),
            ErrorKind::IllegalState
        );
    }

    #[test]
    fn test_underflow_message_mentions_stack() {
        assert!(Chip8Error::StackUnderflow.to_string().contains("stack"));
    }

    #[test]
    fn test_fault_reports_location() {
        let fault = Fault {
            address: 0x0204,
            opcode: 0x00EE,
            source: Chip8Error::StackUnderflow,
        };
        let message = fault.to_string();
        assert!(message.starts_with("illegal state at 0x0204 (0x00EE)"));
        assert!(message.contains("stack underflow"));
    }
}
