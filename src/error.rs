use thiserror::Error;

/// Failure taxonomy for base-block construction.
///
/// These are the only failure conditions in the crate. They are detected
/// once, in strict order, when a block is parsed; every accessor on a
/// parsed block is total. Reserved bit patterns inside the block (unknown
/// descriptor tags, unknown interface-standard codes) decode to explicit
/// data variants instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum EdidError {
    /// Input is shorter than the 128-byte base block.
    #[error("edid data is shorter than the 128-byte base block")]
    TooShort,
    /// The first 8 bytes do not match the fixed header magic.
    #[error("edid header magic mismatch")]
    BadHeader,
    /// The 8-bit wrapping sum over the base block is not zero.
    #[error("edid base block checksum does not wrap to zero")]
    BadChecksum,
}
