//! Dispatch for the four 18-byte descriptor slots of the base block.
//!
//! A slot whose composed pixel clock is non-zero is a detailed timing; any
//! other slot carries alternate content selected by the tag byte at offset 3.
//! Unassigned tags decode to [`Descriptor::Reserved`], never to an error.

use crate::timing::{DetailedTiming, StandardTiming};

/// Length in bytes of one descriptor slot.
pub const DESCRIPTOR_BYTES: usize = 18;

/// Content of one descriptor slot.
///
/// Text payloads are bytes 5-17 widened byte-for-byte into characters and
/// trimmed of surrounding whitespace and line breaks. Raw payloads carry the
/// entire 18-byte slot; their internal layout is a caller concern.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Descriptor {
    /// A fully specified timing mode (non-zero pixel clock).
    DetailedTiming(DetailedTiming),
    /// Display serial number text (tag `0xFF`).
    SerialNumber(String),
    /// Unspecified text (tag `0xFE`).
    Text(String),
    /// Display range limits, raw (tag `0xFD`).
    RangeLimits([u8; DESCRIPTOR_BYTES]),
    /// Display name text (tag `0xFC`).
    DisplayName(String),
    /// Additional white point data, raw (tag `0xFB`).
    WhitePoint([u8; DESCRIPTOR_BYTES]),
    /// Six more optional standard timing entries (tag `0xFA`).
    AdditionalStandardTimings([Option<StandardTiming>; 6]),
    /// Display color management data, raw (tag `0xF9`).
    ColorManagementData([u8; DESCRIPTOR_BYTES]),
    /// CVT 3-byte timing codes, raw (tag `0xF8`).
    CvtTimingCodes([u8; DESCRIPTOR_BYTES]),
    /// Established timings 3, raw (tag `0xF7`).
    AdditionalStandardTiming3([u8; DESCRIPTOR_BYTES]),
    /// Dummy placeholder slot (tag `0x10`).
    Dummy,
    /// Any unassigned tag; reserved for future use.
    Reserved,
}

impl Descriptor {
    /// Decodes one 18-byte descriptor slot.
    #[must_use]
    pub fn decode(data: &[u8; DESCRIPTOR_BYTES]) -> Self {
        DetailedTiming::decode(data).map_or_else(|| Self::dispatch(data), Self::DetailedTiming)
    }

    fn dispatch(data: &[u8; DESCRIPTOR_BYTES]) -> Self {
        match data[3] {
            0xFF => Self::SerialNumber(descriptor_text(data)),
            0xFE => Self::Text(descriptor_text(data)),
            0xFD => Self::RangeLimits(*data),
            0xFC => Self::DisplayName(descriptor_text(data)),
            0xFB => Self::WhitePoint(*data),
            0xFA => Self::AdditionalStandardTimings([
                StandardTiming::decode([data[5], data[6]]),
                StandardTiming::decode([data[7], data[8]]),
                StandardTiming::decode([data[9], data[10]]),
                StandardTiming::decode([data[11], data[12]]),
                StandardTiming::decode([data[13], data[14]]),
                StandardTiming::decode([data[15], data[16]]),
            ]),
            0xF9 => Self::ColorManagementData(*data),
            0xF8 => Self::CvtTimingCodes(*data),
            0xF7 => Self::AdditionalStandardTiming3(*data),
            0x10 => Self::Dummy,
            _ => Self::Reserved,
        }
    }
}

fn descriptor_text(data: &[u8; DESCRIPTOR_BYTES]) -> String {
    data[5..]
        .iter()
        .map(|&byte| char::from(byte))
        .collect::<String>()
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::{Descriptor, DESCRIPTOR_BYTES};
    use crate::timing::StandardTiming;

    fn slot(tag: u8, payload: &[u8]) -> [u8; DESCRIPTOR_BYTES] {
        let mut data = [0u8; DESCRIPTOR_BYTES];
        data[3] = tag;
        data[5..5 + payload.len()].copy_from_slice(payload);
        data
    }

    #[test]
    fn serial_number_text_is_trimmed() {
        let data = slot(0xFF, b"ABC123       ");
        assert_eq!(
            Descriptor::decode(&data),
            Descriptor::SerialNumber("ABC123".to_owned())
        );
    }

    #[test]
    fn display_name_trims_newline_termination() {
        let data = slot(0xFC, b"PA278QV\n     ");
        assert_eq!(
            Descriptor::decode(&data),
            Descriptor::DisplayName("PA278QV".to_owned())
        );
    }

    #[test]
    fn text_tag_uses_the_same_extraction() {
        let data = slot(0xFE, b" note \n      ");
        assert_eq!(Descriptor::decode(&data), Descriptor::Text("note".to_owned()));
    }

    #[test]
    fn raw_variants_carry_the_whole_slot() {
        for (tag, expect) in [
            (0xFD, Descriptor::RangeLimits as fn([u8; DESCRIPTOR_BYTES]) -> Descriptor),
            (0xFB, Descriptor::WhitePoint),
            (0xF9, Descriptor::ColorManagementData),
            (0xF8, Descriptor::CvtTimingCodes),
            (0xF7, Descriptor::AdditionalStandardTiming3),
        ] {
            let data = slot(tag, &[0xAA, 0xBB, 0xCC]);
            assert_eq!(Descriptor::decode(&data), expect(data), "tag {tag:#04x}");
        }
    }

    #[test]
    fn additional_standard_timings_decode_six_pairs() {
        let mut data = slot(0xFA, &[]);
        data[5] = 0x61;
        data[6] = 0x40;
        data[7] = 0x01;
        data[8] = 0x01;
        data[9] = 0x81;
        data[10] = 0xC0;
        data[11] = 0x01;
        data[12] = 0x01;
        data[13] = 0x01;
        data[14] = 0x01;
        data[15] = 0x01;
        data[16] = 0x01;

        assert_eq!(
            Descriptor::decode(&data),
            Descriptor::AdditionalStandardTimings([
                Some(StandardTiming {
                    resolution: 0x61,
                    aspect_ratio: 1,
                    vertical_frequency: 0,
                }),
                None,
                Some(StandardTiming {
                    resolution: 0x81,
                    aspect_ratio: 3,
                    vertical_frequency: 0,
                }),
                None,
                None,
                None,
            ])
        );
    }

    #[test]
    fn dummy_and_unassigned_tags_are_data_not_errors() {
        assert_eq!(Descriptor::decode(&slot(0x10, &[])), Descriptor::Dummy);
        for tag in [0x00, 0x0F, 0x42, 0xF6] {
            assert_eq!(
                Descriptor::decode(&slot(tag, &[])),
                Descriptor::Reserved,
                "tag {tag:#04x}"
            );
        }
    }

    #[test]
    fn non_zero_pixel_clock_wins_over_the_tag_byte() {
        let mut data = slot(0xFC, b"ignored");
        data[1] = 0x01;
        assert!(matches!(
            Descriptor::decode(&data),
            Descriptor::DetailedTiming(_)
        ));
    }
}
