//! Big-endian byte composition and single-bit extraction helpers.
//!
//! Every multi-byte field in the base block is assembled through these
//! helpers so byte-order decisions live in one place.

/// Composes two bytes into a `u16`, first byte high.
#[must_use]
pub fn u16_from_be(high: u8, low: u8) -> u16 {
    u16::from(high) << 8 | u16::from(low)
}

/// Composes four bytes into a `u32`, first byte highest.
#[must_use]
pub fn u32_from_be(b0: u8, b1: u8, b2: u8, b3: u8) -> u32 {
    u32::from(u16_from_be(b0, b1)) << 16 | u32::from(u16_from_be(b2, b3))
}

/// Composes eight bytes into a `u64`, first byte highest.
#[must_use]
pub fn u64_from_be(b0: u8, b1: u8, b2: u8, b3: u8, b4: u8, b5: u8, b6: u8, b7: u8) -> u64 {
    u64::from(u32_from_be(b0, b1, b2, b3)) << 32 | u64::from(u32_from_be(b4, b5, b6, b7))
}

/// Extracts bit `index` (0 = least significant) of a byte as a boolean.
#[must_use]
pub const fn bit(byte: u8, index: u8) -> bool {
    (byte >> index) & 1 == 1
}
