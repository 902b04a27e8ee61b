//! Timing structures of the base block.
//!
//! Covers the 2-byte standard timing entries, the 18-byte detailed timing
//! descriptor with its split-nibble field reconstruction, and the 3-byte
//! established-timings bitmap.

use crate::bits::u16_from_be;
use crate::descriptor::DESCRIPTOR_BYTES;

/// A 2-byte standard timing entry.
///
/// The three fields are raw codes: resolution is `(value + 31) * 8` pixels
/// wide, the aspect-ratio code selects one of four fixed ratios, and the
/// vertical-frequency code is `value + 60` Hz. Code-to-unit expansion is a
/// caller concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct StandardTiming {
    /// Horizontal resolution code (byte 0 verbatim).
    pub resolution: u8,
    /// Aspect-ratio code (top 2 bits of byte 1).
    pub aspect_ratio: u8,
    /// Vertical-frequency code (low 6 bits of byte 1).
    pub vertical_frequency: u8,
}

impl StandardTiming {
    /// Decodes a 2-byte entry, or `None` for the `01 01` unused-slot sentinel.
    #[must_use]
    pub const fn decode(bytes: [u8; 2]) -> Option<Self> {
        if bytes[0] == 0x01 && bytes[1] == 0x01 {
            return None;
        }

        Some(Self {
            resolution: bytes[0],
            aspect_ratio: bytes[1] >> 6,
            vertical_frequency: bytes[1] & 0b11_1111,
        })
    }
}

/// A fully specified timing mode from an 18-byte descriptor slot.
///
/// The 12-bit geometry quantities are split across the slot as a high-order
/// nibble in one byte and a low-order byte in another; sync quantities use
/// bit pairs of byte 11 the same way. The pixel clock is the raw composed
/// 16-bit value; the published unit scale (x10 kHz) is not applied here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DetailedTiming {
    /// Raw composed pixel clock; never zero for a decoded timing.
    pub pixel_clock: u16,
    /// Horizontal addressable pixels.
    pub horizontal_active: u16,
    /// Horizontal blanking pixels.
    pub horizontal_blanking: u16,
    /// Vertical addressable lines.
    pub vertical_active: u16,
    /// Vertical blanking lines.
    pub vertical_blanking: u16,
    /// Horizontal front porch in pixels.
    pub horizontal_sync_offset: u16,
    /// Horizontal sync pulse width in pixels.
    pub horizontal_sync_pulse_width: u16,
    /// Vertical front porch in lines.
    pub vertical_sync_offset: u16,
    /// Vertical sync pulse width in lines.
    pub vertical_sync_pulse_width: u16,
    /// Horizontal image size in millimeters.
    pub horizontal_scaled_size: u16,
    /// Vertical image size in millimeters.
    pub vertical_scaled_size: u16,
    /// Left border pixels (byte 15).
    pub horizontal_border_left: u8,
    /// Right border pixels (byte 15; one source byte serves both sides).
    pub horizontal_border_right: u8,
    /// Top border lines (byte 16).
    pub vertical_border_top: u8,
    /// Bottom border lines (byte 16; one source byte serves both sides).
    pub vertical_border_bottom: u8,
}

impl DetailedTiming {
    /// Decodes an 18-byte descriptor slot as a detailed timing.
    ///
    /// Returns `None` when the composed pixel clock is zero; such a slot
    /// carries alternate descriptor content instead of a timing.
    #[must_use]
    pub fn decode(data: &[u8; DESCRIPTOR_BYTES]) -> Option<Self> {
        let pixel_clock = u16_from_be(data[0], data[1]);
        if pixel_clock == 0 {
            return None;
        }

        Some(Self {
            pixel_clock,
            horizontal_active: u16_from_be(data[4] >> 4, data[2]),
            horizontal_blanking: u16_from_be(data[4] & 0b1111, data[3]),
            vertical_active: u16_from_be(data[7] >> 4, data[5]),
            vertical_blanking: u16_from_be(data[7] & 0b1111, data[6]),
            horizontal_sync_offset: u16_from_be(data[11] >> 6, data[8]),
            horizontal_sync_pulse_width: u16_from_be(data[11] >> 4 & 0b11, data[9]),
            vertical_sync_offset: u16::from(data[10] >> 4 & 0b1111)
                | u16::from(data[11] >> 2 & 0b11) << 4,
            vertical_sync_pulse_width: u16::from(data[10] & 0b1111)
                | u16::from(data[11] & 0b11) << 4,
            horizontal_scaled_size: u16_from_be(data[14] >> 4, data[12]),
            vertical_scaled_size: u16_from_be(data[14] & 0b1111, data[13]),
            horizontal_border_left: data[15],
            horizontal_border_right: data[15],
            vertical_border_top: data[16],
            vertical_border_bottom: data[16],
        })
    }
}

/// The 24 established-timing flags from bytes 35-37 of the base block.
///
/// Each flag reads its documented bit of the bitmap. The reads compare the
/// masked byte against the literal value 1 rather than testing for non-zero,
/// so every flag whose mask is not bit 0 always reads false. Consumers of the
/// current reads depend on that behavior; do not correct it here without a
/// coordinated change on their side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[allow(missing_docs)]
pub struct EstablishedTimings {
    pub timing_720x400_at_70hz: bool,
    pub timing_720x400_at_88hz: bool,
    pub timing_640x480_at_60hz: bool,
    pub timing_640x480_at_67hz: bool,
    pub timing_640x480_at_72hz: bool,
    pub timing_640x480_at_75hz: bool,
    pub timing_800x600_at_56hz: bool,
    pub timing_800x600_at_60hz: bool,
    pub timing_800x600_at_72hz: bool,
    pub timing_800x600_at_75hz: bool,
    pub timing_832x624_at_75hz: bool,
    pub timing_1024x768_at_87hz: bool,
    pub timing_1024x768_at_60hz: bool,
    pub timing_1024x768_at_72hz: bool,
    pub timing_1024x768_at_75hz: bool,
    pub timing_1280x1024_at_75hz: bool,
    pub timing_1152x870_at_75hz: bool,
    pub timing_mode_a: bool,
    pub timing_mode_b: bool,
    pub timing_mode_c: bool,
    pub timing_mode_d: bool,
    pub timing_mode_e: bool,
    pub timing_mode_f: bool,
    pub timing_mode_g: bool,
}

impl EstablishedTimings {
    /// Decodes the 3-byte established-timings bitmap.
    #[must_use]
    #[allow(clippy::bad_bit_mask)] // masked == 1 reads are load-bearing, see type doc
    pub const fn decode(bytes: [u8; 3]) -> Self {
        Self {
            timing_720x400_at_70hz: bytes[0] & 0b1000_0000 == 1,
            timing_720x400_at_88hz: bytes[0] & 0b0100_0000 == 1,
            timing_640x480_at_60hz: bytes[0] & 0b0010_0000 == 1,
            timing_640x480_at_67hz: bytes[0] & 0b0001_0000 == 1,
            timing_640x480_at_72hz: bytes[0] & 0b0000_1000 == 1,
            timing_640x480_at_75hz: bytes[0] & 0b0000_0100 == 1,
            timing_800x600_at_56hz: bytes[0] & 0b0000_0010 == 1,
            timing_800x600_at_60hz: bytes[0] & 0b0000_0001 == 1,
            timing_800x600_at_72hz: bytes[1] & 0b1000_0000 == 1,
            timing_800x600_at_75hz: bytes[1] & 0b0100_0000 == 1,
            timing_832x624_at_75hz: bytes[1] & 0b0010_0000 == 1,
            timing_1024x768_at_87hz: bytes[1] & 0b0001_0000 == 1,
            timing_1024x768_at_60hz: bytes[1] & 0b0000_1000 == 1,
            timing_1024x768_at_72hz: bytes[1] & 0b0000_0100 == 1,
            timing_1024x768_at_75hz: bytes[1] & 0b0000_0010 == 1,
            timing_1280x1024_at_75hz: bytes[1] & 0b0000_0001 == 1,
            timing_1152x870_at_75hz: bytes[2] & 0b1000_0000 == 1,
            timing_mode_a: bytes[2] & 0b0100_0000 == 1,
            timing_mode_b: bytes[2] & 0b0010_0000 == 1,
            timing_mode_c: bytes[2] & 0b0001_0000 == 1,
            timing_mode_d: bytes[2] & 0b0000_1000 == 1,
            timing_mode_e: bytes[2] & 0b0000_0100 == 1,
            timing_mode_f: bytes[2] & 0b0000_0010 == 1,
            timing_mode_g: bytes[2] & 0b0000_0001 == 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DetailedTiming, EstablishedTimings, StandardTiming};

    #[test]
    fn unused_slot_sentinel_decodes_as_absent() {
        assert_eq!(StandardTiming::decode([0x01, 0x01]), None);
    }

    #[test]
    fn standard_timing_splits_aspect_and_frequency_codes() {
        let timing = StandardTiming::decode([0x61, 0x40]).expect("used slot");
        assert_eq!(timing.resolution, 0x61);
        assert_eq!(timing.aspect_ratio, 1);
        assert_eq!(timing.vertical_frequency, 0);
    }

    #[test]
    fn standard_timing_keeps_all_six_frequency_bits() {
        let timing = StandardTiming::decode([0xD1, 0xFF]).expect("used slot");
        assert_eq!(timing.aspect_ratio, 0b11);
        assert_eq!(timing.vertical_frequency, 0b11_1111);
    }

    #[test]
    fn zero_pixel_clock_is_not_a_timing() {
        let mut data = [0u8; 18];
        data[3] = 0xFC;
        assert_eq!(DetailedTiming::decode(&data), None);
    }

    #[test]
    fn split_nibble_fields_reassemble_into_12_bit_values() {
        // 1920x1080: HA 0x780, HB 0x118, VA 0x438, VB 0x02D,
        // HSO 0x058, HSW 0x02C, VSO 0x4, VSW 0x5, size 509x286 mm.
        let data: [u8; 18] = [
            0x02, 0x3A, 0x80, 0x18, 0x71, 0x38, 0x2D, 0x40, 0x58, 0x2C, 0x45, 0x00, 0xFD, 0x1E,
            0x11, 0x00, 0x00, 0x1E,
        ];

        let timing = DetailedTiming::decode(&data).expect("non-zero pixel clock");
        assert_eq!(timing.pixel_clock, 0x023A);
        assert_eq!(timing.horizontal_active, 1920);
        assert_eq!(timing.horizontal_blanking, 280);
        assert_eq!(timing.vertical_active, 1080);
        assert_eq!(timing.vertical_blanking, 45);
        assert_eq!(timing.horizontal_sync_offset, 88);
        assert_eq!(timing.horizontal_sync_pulse_width, 44);
        assert_eq!(timing.vertical_sync_offset, 4);
        assert_eq!(timing.vertical_sync_pulse_width, 5);
        assert_eq!(timing.horizontal_scaled_size, 509);
        assert_eq!(timing.vertical_scaled_size, 286);
        assert_eq!(timing.horizontal_border_left, 0);
        assert_eq!(timing.horizontal_border_right, 0);
        assert_eq!(timing.vertical_border_top, 0);
        assert_eq!(timing.vertical_border_bottom, 0);
    }

    #[test]
    fn sync_bit_pairs_of_byte_11_extend_the_nibble_fields() {
        let mut data = [0u8; 18];
        data[0] = 0x01; // non-zero pixel clock
        data[8] = 0x10;
        data[9] = 0x20;
        data[10] = 0xAB;
        data[11] = 0b1110_0111;

        let timing = DetailedTiming::decode(&data).expect("non-zero pixel clock");
        assert_eq!(timing.horizontal_sync_offset, 0b11 << 8 | 0x10);
        assert_eq!(timing.horizontal_sync_pulse_width, 0b10 << 8 | 0x20);
        assert_eq!(timing.vertical_sync_offset, 0b01 << 4 | 0xA);
        assert_eq!(timing.vertical_sync_pulse_width, 0b11 << 4 | 0xB);
    }

    #[test]
    fn border_bytes_serve_both_sides() {
        let mut data = [0u8; 18];
        data[1] = 0x7F;
        data[15] = 3;
        data[16] = 7;

        let timing = DetailedTiming::decode(&data).expect("non-zero pixel clock");
        assert_eq!(timing.horizontal_border_left, 3);
        assert_eq!(timing.horizontal_border_right, 3);
        assert_eq!(timing.vertical_border_top, 7);
        assert_eq!(timing.vertical_border_bottom, 7);
    }

    #[test]
    fn only_bottom_bit_masks_can_observe_true() {
        let all_set = EstablishedTimings::decode([0xFF, 0xFF, 0xFF]);
        assert!(all_set.timing_800x600_at_60hz);
        assert!(all_set.timing_1280x1024_at_75hz);
        assert!(all_set.timing_mode_g);

        // every other flag reads false even with its bit set
        assert!(!all_set.timing_720x400_at_70hz);
        assert!(!all_set.timing_640x480_at_60hz);
        assert!(!all_set.timing_800x600_at_72hz);
        assert!(!all_set.timing_1024x768_at_75hz);
        assert!(!all_set.timing_1152x870_at_75hz);
        assert!(!all_set.timing_mode_a);
    }

    #[test]
    fn cleared_bitmap_reads_all_false() {
        let none_set = EstablishedTimings::decode([0x00, 0x00, 0x00]);
        assert!(!none_set.timing_800x600_at_60hz);
        assert!(!none_set.timing_1280x1024_at_75hz);
        assert!(!none_set.timing_mode_g);
    }
}
