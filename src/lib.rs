//! Decoder for the VESA EDID 1.x base block.
//!
//! Turns the fixed-size binary display-identification block a monitor
//! reports into a strongly typed, query-able value. Parsing validates the
//! header magic and wrapping checksum once, up front; every accessor on a
//! parsed [`EdidBlock`] is a total function over the immutable raw bytes.
//! Acquiring the bytes from hardware and presenting the result are caller
//! concerns.

/// Big-endian byte composition and bit extraction helpers.
pub mod bits;
pub use bits::{bit, u16_from_be, u32_from_be, u64_from_be};

/// Decode failure taxonomy.
pub mod error;
pub use error::EdidError;

/// Video Input Definition decoder for byte 20.
pub mod input;
pub use input::{
    AnalogInput, ColorBitDepth, DigitalInput, InterfaceStandard, SignalLevel,
    VideoInputDefinition, VideoSetup,
};

/// Standard, detailed, and established timing structures.
pub mod timing;
pub use timing::{DetailedTiming, EstablishedTimings, StandardTiming};

/// Dispatch for the four 18-byte descriptor slots.
pub mod descriptor;
pub use descriptor::{Descriptor, DESCRIPTOR_BYTES};

/// The validated base block and its field accessors.
pub mod block;
pub use block::{
    Chromaticity, EdidBlock, BASE_BLOCK_BYTES, DESCRIPTOR_OFFSETS, HEADER_MAGIC,
};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
