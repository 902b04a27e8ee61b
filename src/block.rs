//! The validated EDID base block and its fixed-offset field accessors.

use crate::bits::{u16_from_be, u32_from_be, u64_from_be};
use crate::descriptor::{Descriptor, DESCRIPTOR_BYTES};
use crate::error::EdidError;
use crate::input::VideoInputDefinition;
use crate::timing::{EstablishedTimings, StandardTiming};

/// Length in bytes of the base block. Bytes past this belong to extension
/// blocks and are only counted, never interpreted.
pub const BASE_BLOCK_BYTES: usize = 128;

/// Fixed 8-byte header magic, composed big-endian.
pub const HEADER_MAGIC: u64 = 0x00FF_FFFF_FFFF_FF00;

/// Byte offsets of the four descriptor slots.
pub const DESCRIPTOR_OFFSETS: [usize; 4] = [54, 72, 90, 108];

/// Raw chromaticity bytes 25-34: the packed least-significant-bit pairs and
/// the eight most-significant coordinate bytes. Coordinate reconstruction is
/// a caller concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[allow(missing_docs)]
pub struct Chromaticity {
    pub red_green_lsb: u8,
    pub blue_white_lsb: u8,
    pub red_x_msb: u8,
    pub red_y_msb: u8,
    pub green_x_msb: u8,
    pub green_y_msb: u8,
    pub blue_x_msb: u8,
    pub blue_y_msb: u8,
    pub white_x_msb: u8,
    pub white_y_msb: u8,
}

/// A validated EDID 1.x base block.
///
/// Owns the raw bytes and derives every field on demand; repeated reads of
/// the same block always return identical values. Construction through
/// [`EdidBlock::parse`] is the only failure point in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdidBlock {
    raw: Vec<u8>,
}

impl EdidBlock {
    /// Validates raw EDID bytes and wraps them as a base block.
    ///
    /// Checks run strictly in order and short-circuit: length, header magic,
    /// then the 8-bit wrapping checksum over the first 128 bytes. No other
    /// validation exists; every accessor on the returned block is total.
    ///
    /// # Errors
    ///
    /// Returns [`EdidError::TooShort`] for inputs under 128 bytes,
    /// [`EdidError::BadHeader`] on header magic mismatch, and
    /// [`EdidError::BadChecksum`] when the base block does not sum to zero.
    pub fn parse(data: Vec<u8>) -> Result<Self, EdidError> {
        if data.len() < BASE_BLOCK_BYTES {
            return Err(EdidError::TooShort);
        }

        let block = Self { raw: data };
        if block.header() != HEADER_MAGIC {
            return Err(EdidError::BadHeader);
        }
        if block.checksum() != 0 {
            return Err(EdidError::BadChecksum);
        }

        Ok(block)
    }

    /// Borrows the underlying raw bytes, extension blocks included.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Big-endian composition of the 8 header bytes.
    #[must_use]
    pub fn header(&self) -> u64 {
        u64_from_be(
            self.raw[0],
            self.raw[1],
            self.raw[2],
            self.raw[3],
            self.raw[4],
            self.raw[5],
            self.raw[6],
            self.raw[7],
        )
    }

    /// Packed 3-letter manufacturer identifier, big-endian over bytes 8-9.
    #[must_use]
    pub fn manufacturer_id(&self) -> u16 {
        u16_from_be(self.raw[8], self.raw[9])
    }

    /// Manufacturer identifier as its three 5-bit letters, offset from
    /// `'A' - 1`.
    #[must_use]
    pub fn manufacturer_string(&self) -> String {
        let high = self.raw[8];
        let low = self.raw[9];
        let letters = [
            high >> 2 & 0b1_1111,
            (high & 0b11) << 3 | low >> 5,
            low & 0b1_1111,
        ];
        letters
            .iter()
            .map(|&code| char::from(code + (b'A' - 1)))
            .collect()
    }

    /// Manufacturer-assigned product code, little-endian over bytes 10-11.
    #[must_use]
    pub fn product_code(&self) -> u16 {
        u16_from_be(self.raw[11], self.raw[10])
    }

    /// Display serial number, little-endian over bytes 12-15.
    #[must_use]
    pub fn serial_number(&self) -> u32 {
        u32_from_be(self.raw[15], self.raw[14], self.raw[13], self.raw[12])
    }

    /// Manufacture week, byte 16 verbatim. The values 0 and 255 mark
    /// unspecified/model-year blocks and are surfaced as-is.
    #[must_use]
    pub fn week(&self) -> u8 {
        self.raw[16]
    }

    /// Manufacture year, 1990 plus byte 17.
    #[must_use]
    pub fn year(&self) -> u16 {
        1990 + u16::from(self.raw[17])
    }

    /// EDID structure version, byte 18.
    #[must_use]
    pub fn edid_version(&self) -> u8 {
        self.raw[18]
    }

    /// EDID structure revision, byte 19.
    #[must_use]
    pub fn edid_revision(&self) -> u8 {
        self.raw[19]
    }

    /// Version and revision formatted as `major.minor`.
    #[must_use]
    pub fn version_string(&self) -> String {
        let major = self.edid_version();
        let minor = self.edid_revision();
        format!("{major}.{minor}")
    }

    /// Video Input Definition decoded from byte 20.
    #[must_use]
    pub fn video_input_definition(&self) -> VideoInputDefinition {
        VideoInputDefinition::decode(self.raw[20])
    }

    /// Horizontal screen size in centimeters, byte 21; zero means absent.
    #[must_use]
    pub fn screen_width_cm(&self) -> Option<u8> {
        match self.raw[21] {
            0 => None,
            width => Some(width),
        }
    }

    /// Vertical screen size in centimeters, byte 22; zero means absent.
    #[must_use]
    pub fn screen_height_cm(&self) -> Option<u8> {
        match self.raw[22] {
            0 => None,
            height => Some(height),
        }
    }

    /// Landscape aspect ratio, defined only when exactly one of the two
    /// screen-size bytes is present.
    ///
    /// Width-only blocks store the ratio directly; height-only blocks store
    /// the portrait ratio, inverted here to landscape. When both or neither
    /// byte is present the ratio is undefined.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        match (self.screen_width_cm(), self.screen_height_cm()) {
            (Some(width), None) => Some(f32::from(width).mul_add(2.54, 1.0)),
            (None, Some(height)) => Some(f32::from(height).mul_add(0.71, 0.28).recip()),
            _ => None,
        }
    }

    /// Display gamma from byte 23, rounded to two decimal places.
    #[must_use]
    pub fn gamma(&self) -> f32 {
        ((f32::from(self.raw[23]) / 255.0).mul_add(2.54, 1.0) * 100.0).round() / 100.0
    }

    /// Supported-features bitmap, byte 24 verbatim.
    #[must_use]
    pub fn features(&self) -> u8 {
        self.raw[24]
    }

    /// Raw chromaticity bytes 25-34.
    #[must_use]
    pub fn chromaticity(&self) -> Chromaticity {
        Chromaticity {
            red_green_lsb: self.raw[25],
            blue_white_lsb: self.raw[26],
            red_x_msb: self.raw[27],
            red_y_msb: self.raw[28],
            green_x_msb: self.raw[29],
            green_y_msb: self.raw[30],
            blue_x_msb: self.raw[31],
            blue_y_msb: self.raw[32],
            white_x_msb: self.raw[33],
            white_y_msb: self.raw[34],
        }
    }

    /// Established-timing flags decoded from bytes 35-37.
    #[must_use]
    pub fn established_timings(&self) -> EstablishedTimings {
        EstablishedTimings::decode([self.raw[35], self.raw[36], self.raw[37]])
    }

    /// The eight standard timing slots, bytes 38-53.
    #[must_use]
    pub fn standard_display_modes(&self) -> [Option<StandardTiming>; 8] {
        std::array::from_fn(|index| {
            let offset = 38 + index * 2;
            StandardTiming::decode([self.raw[offset], self.raw[offset + 1]])
        })
    }

    /// The four descriptor slots at offsets 54, 72, 90, and 108.
    #[must_use]
    pub fn descriptors(&self) -> [Descriptor; 4] {
        DESCRIPTOR_OFFSETS.map(|offset| {
            let mut slot = [0u8; DESCRIPTOR_BYTES];
            slot.copy_from_slice(&self.raw[offset..offset + DESCRIPTOR_BYTES]);
            Descriptor::decode(&slot)
        })
    }

    /// Number of appended extension blocks, byte 126. Extension content is
    /// never interpreted here.
    #[must_use]
    pub fn extension_count(&self) -> u8 {
        self.raw[126]
    }

    /// 8-bit wrapping sum over the base block; zero for a valid block.
    #[must_use]
    pub fn checksum(&self) -> u8 {
        self.raw[..BASE_BLOCK_BYTES]
            .iter()
            .fold(0u8, |sum, &byte| sum.wrapping_add(byte))
    }
}
