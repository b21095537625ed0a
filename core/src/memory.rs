use crate::constants::MEMORY_SIZE;

/// # Memory
/// A flat byte store backing the whole 16-bit address range.
///
/// Every address is valid; anything never written reads as zero.
/// Programs conventionally only use the first 4096 bytes:
/// ```text
/// 0x000 - 0x050  sprite sheet
/// 0x0E0 - 0x100  call stack
/// 0x200 - 0xFFF  program and data
/// ```
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    pub fn read(&self, address: u16) -> u8 {
        self.bytes[address as usize]
    }

    pub fn write(&mut self, address: u16, value: u8) {
        self.bytes[address as usize] = value;
    }

    /// Reads a big-endian word from `address` and the byte after it
    pub fn read_word(&self, address: u16) -> u16 {
        let high = u16::from(self.read(address));
        let low = u16::from(self.read(address.wrapping_add(1)));
        high << 8 | low
    }

    /// Writes a big-endian word to `address` and the byte after it
    pub fn write_word(&mut self, address: u16, value: u16) {
        let [high, low] = value.to_be_bytes();
        self.write(address, high);
        self.write(address.wrapping_add(1), low);
    }

    /// Copies `bytes` into memory starting at `origin`, wrapping past the top of the address range
    pub fn load(&mut self, origin: u16, bytes: &[u8]) {
        for (offset, byte) in bytes.iter().enumerate() {
            self.write(origin.wrapping_add(offset as u16), *byte);
        }
    }

    /// Reads `len` bytes starting at `origin`, wrapping past the top of the address range
    pub fn read_range(&self, origin: u16, len: usize) -> Vec<u8> {
        (0..len)
            .map(|offset| self.read(origin.wrapping_add(offset as u16)))
            .collect()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_back_writes() {
        let mut memory = Memory::new();
        memory.write(0x0, 0x3);
        assert_eq!(memory.read(0x0), 0x3);
        assert_eq!(memory.read(0x1), 0x0);
    }

    #[test]
    fn test_whole_address_range_is_valid() {
        let mut memory = Memory::new();
        assert_eq!(memory.read(0xFFFF), 0x0);
        memory.write(0xFFFF, 0xAB);
        assert_eq!(memory.read(0xFFFF), 0xAB);
    }

    #[test]
    fn test_words_are_big_endian() {
        let mut memory = Memory::new();
        memory.write_word(0x200, 0xAABB);
        assert_eq!(memory.read(0x200), 0xAA);
        assert_eq!(memory.read(0x201), 0xBB);
        assert_eq!(memory.read_word(0x200), 0xAABB);
    }

    #[test]
    fn test_load_wraps_at_top_of_memory() {
        let mut memory = Memory::new();
        memory.load(0xFFFE, &[0x1, 0x2, 0x3]);
        assert_eq!(memory.read_range(0xFFFE, 3), vec![0x1, 0x2, 0x3]);
        assert_eq!(memory.read(0x0000), 0x3);
    }
}
