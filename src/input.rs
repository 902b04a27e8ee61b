//! Video Input Definition decoder.
//!
//! Byte 20 of the base block selects an analog or digital input description;
//! the remaining seven bits are sub-fields of the selected variant.

use crate::bits::bit;

/// Analog video/sync signal amplitude pair, in volts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SignalLevel {
    /// Video signal amplitude.
    pub video: f32,
    /// Sync signal amplitude.
    pub sync: f32,
}

impl SignalLevel {
    /// Total signal amplitude (video plus sync).
    #[must_use]
    pub fn total(self) -> f32 {
        self.video + self.sync
    }
}

/// Analog video setup behavior selected by bit 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum VideoSetup {
    /// Blank level equals black level.
    BlankLevelIsBlackLevel,
    /// Blank-to-black setup or pedestal.
    BlankToBlackSetupOrPedestal,
}

/// Analog input description (bit 7 of byte 20 clear).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct AnalogInput {
    /// Video/sync voltage pair selected by bits 6-5.
    pub signal_level: SignalLevel,
    /// Setup behavior selected by bit 4.
    pub video_setup: VideoSetup,
    /// Separate horizontal and vertical sync signals supported (bit 3).
    pub separate_sync_supported: bool,
    /// Composite sync signal on horizontal supported (bit 2).
    pub composite_sync_on_horizontal_supported: bool,
    /// Composite sync signal on green video supported (bit 1).
    pub composite_sync_on_green_supported: bool,
    /// Serration on vertical sync supported (bit 0).
    pub serration_on_vertical_sync_supported: bool,
}

impl AnalogInput {
    fn decode(byte: u8) -> Self {
        let signal_level = match (byte >> 5) & 0b11 {
            0b00 => SignalLevel {
                video: 0.700,
                sync: 0.300,
            },
            0b01 => SignalLevel {
                video: 0.714,
                sync: 0.286,
            },
            0b10 => SignalLevel {
                video: 1.000,
                sync: 0.400,
            },
            _ => SignalLevel {
                video: 0.700,
                sync: 0.000,
            },
        };

        let video_setup = if bit(byte, 4) {
            VideoSetup::BlankLevelIsBlackLevel
        } else {
            VideoSetup::BlankToBlackSetupOrPedestal
        };

        Self {
            signal_level,
            video_setup,
            separate_sync_supported: bit(byte, 3),
            composite_sync_on_horizontal_supported: bit(byte, 2),
            composite_sync_on_green_supported: bit(byte, 1),
            serration_on_vertical_sync_supported: bit(byte, 0),
        }
    }
}

/// Digital color bit depth selected by bits 6-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ColorBitDepth {
    /// Depth not defined (`000`).
    Undefined,
    /// Bits per primary color (6, 8, 10, 12, 14, or 16).
    BitsPerPrimaryColor(u8),
    /// Reserved pattern (`111`).
    Reserved,
}

impl ColorBitDepth {
    /// Decodes a 3-bit color-depth code. Total over all inputs.
    #[must_use]
    pub const fn from_u3(value: u8) -> Self {
        match value & 0b111 {
            0b000 => Self::Undefined,
            0b001 => Self::BitsPerPrimaryColor(6),
            0b010 => Self::BitsPerPrimaryColor(8),
            0b011 => Self::BitsPerPrimaryColor(10),
            0b100 => Self::BitsPerPrimaryColor(12),
            0b101 => Self::BitsPerPrimaryColor(14),
            0b110 => Self::BitsPerPrimaryColor(16),
            _ => Self::Reserved,
        }
    }
}

/// Digital video interface standard selected by bits 3-0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum InterfaceStandard {
    /// Interface not defined (`0000`).
    Undefined,
    /// DVI.
    Dvi,
    /// HDMI-a.
    HdmiA,
    /// HDMI-b.
    HdmiB,
    /// MDDI.
    Mddi,
    /// DisplayPort.
    DisplayPort,
    /// Any other 4-bit pattern; reserved for future assignment.
    Reserved,
}

impl InterfaceStandard {
    /// Decodes a 4-bit interface-standard code. Total over all inputs.
    #[must_use]
    pub const fn from_u4(value: u8) -> Self {
        match value & 0b1111 {
            0b0000 => Self::Undefined,
            0b0001 => Self::Dvi,
            0b0010 => Self::HdmiA,
            0b0011 => Self::HdmiB,
            0b0100 => Self::Mddi,
            0b0101 => Self::DisplayPort,
            _ => Self::Reserved,
        }
    }
}

/// Digital input description (bit 7 of byte 20 set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DigitalInput {
    /// Color depth selected by bits 6-4.
    pub color_bit_depth: ColorBitDepth,
    /// Interface standard selected by bits 3-0.
    pub interface_standard: InterfaceStandard,
}

impl DigitalInput {
    const fn decode(byte: u8) -> Self {
        Self {
            color_bit_depth: ColorBitDepth::from_u3(byte >> 4),
            interface_standard: InterfaceStandard::from_u4(byte),
        }
    }
}

/// Video Input Definition for byte 20 of the base block.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum VideoInputDefinition {
    /// Analog input (bit 7 clear).
    Analog(AnalogInput),
    /// Digital input (bit 7 set).
    Digital(DigitalInput),
}

impl VideoInputDefinition {
    /// Decodes byte 20 into the analog or digital variant.
    #[must_use]
    pub fn decode(byte: u8) -> Self {
        if bit(byte, 7) {
            Self::Digital(DigitalInput::decode(byte))
        } else {
            Self::Analog(AnalogInput::decode(byte))
        }
    }
}
