//! The register access port the engine is driven through.
//!
//! The controller never touches hardware directly; every read and write goes
//! through a [`RegisterAccess`] implementation injected at construction time.
//! A kernel shim backs it with MMIO, a test harness with a plain array.

use crate::error::Result;

/// Access to the pinmux register banks.
///
/// `bank` selects one of the controller's memory apertures, `offset` is the
/// byte offset of a 32-bit register within it. Implementations only need the
/// raw accessors; posted-write flushing (read-back after write) is layered on
/// top by the controller.
///
/// All register state lives behind this trait — the engine keeps no mirrored
/// software copy of configuration registers.
pub trait RegisterAccess {
    /// Reads the 32-bit register at `offset` within `bank`.
    fn read(&mut self, bank: u32, offset: u32) -> Result<u32>;

    /// Writes the 32-bit register at `offset` within `bank`.
    fn write(&mut self, bank: u32, offset: u32, value: u32) -> Result<()>;
}

/// A register within a bank, as a (bank, byte offset) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register {
    pub bank: u32,
    pub offset: u32,
}

/// A contiguous run of bits within a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitSpan {
    pub bit: u8,
    pub width: u8,
}

/// A fully resolved configuration bit field: which register, which bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigField {
    pub bank: u32,
    pub offset: u32,
    pub bit: u8,
    pub width: u8,
}

impl ConfigField {
    /// Unshifted mask covering `width` bits.
    #[inline]
    pub fn mask(&self) -> u32 {
        (1u32 << self.width) - 1
    }

    /// Extracts this field's value from a raw register word.
    #[inline]
    pub fn extract(&self, reg_val: u32) -> u16 {
        ((reg_val >> self.bit) & self.mask()) as u16
    }

    /// Returns `reg_val` with this field replaced by `arg`.
    #[inline]
    pub fn insert(&self, reg_val: u32, arg: u16) -> u32 {
        (reg_val & !(self.mask() << self.bit)) | ((arg as u32) << self.bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_extract_and_insert_are_inverse() {
        let field = ConfigField {
            bank: 0,
            offset: 0x20,
            bit: 12,
            width: 5,
        };
        let reg = 0xFFFF_FFFF;
        let updated = field.insert(reg, 0x0A);
        assert_eq!(field.extract(updated), 0x0A);
        // Bits outside the field are untouched.
        assert_eq!(updated | (field.mask() << 12), reg);
    }

    #[test]
    fn one_bit_field_mask() {
        let field = ConfigField {
            bank: 1,
            offset: 0,
            bit: 4,
            width: 1,
        };
        assert_eq!(field.mask(), 1);
        assert_eq!(field.insert(0, 1), 1 << 4);
    }
}
