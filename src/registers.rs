/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! OV7740 register addresses and the bit fields the driver touches.
//!
//! Most sensor registers live in the 8-bit SCCB address space. The PLL,
//! AEC and light-meter blocks sit at wide (0x3000+) addresses; the transport
//! decides how to frame them on the wire.

#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Register {
    // Exposure (AEC) value, in line periods
    AecHigh = 0x0f,
    AecLow = 0x10,

    /// Common control 7: soft reset and output format
    Com7 = 0x12,
    /// Low bits of the horizontal/vertical output size
    Reg16 = 0x16,
    /// Horizontal output size, high bits
    HOutSize = 0x18,
    /// Vertical output size, high bits
    VOutSize = 0x1a,

    // Identification
    Midh = 0x1c,
    Midl = 0x1d,

    // PLL
    PllBitMode = 0x3034,
    PllSysDiv = 0x3035,
    PllMultiplier = 0x3036,
    PllPreDiv = 0x3037,
    SclkRootDiv = 0x3108,

    // Manual exposure / gain
    AeAgCtrl = 0x3503,
    GainHigh = 0x350a,
    GainLow = 0x350b,

    // AEC control
    AecCtrl = 0x3a00,
    B50StepHigh = 0x3a08,
    B50StepLow = 0x3a09,
    B60StepHigh = 0x3a0a,
    B60StepLow = 0x3a0b,
    B60MaxBands = 0x3a0d,
    B50MaxBands = 0x3a0e,
    StableHigh = 0x3a0f,
    StableLow = 0x3a10,
    FastHigh = 0x3a11,
    StableHigh2 = 0x3a1b,
    StableLow2 = 0x3a1e,
    FastLow = 0x3a1f,

    // 50/60Hz light detection
    LightCtrl = 0x3c00,
    LightManual = 0x3c01,
    LightStatus = 0x3c0c,
}

impl Register {
    /// Return the raw register address
    #[inline]
    pub fn addr(self) -> u16 {
        self as u16
    }
}

/// COM7[7]: writing 1 resets every register to its default
pub const COM7_SOFT_RESET: u8 = 0x80;
/// Value written to COM7 to trigger a soft reset
pub const SOFT_RESET_VALUE: u8 = COM7_SOFT_RESET;

/// Expected MIDH contents
pub const MANUFACTURER_ID_HIGH: u8 = 0x7f;
/// Expected MIDL contents
pub const MANUFACTURER_ID_LOW: u8 = 0xa2;

/// AEC_CTRL[2]: night mode (frame rate drops to extend exposure)
pub const AEC_CTRL_NIGHT_MODE: u8 = 0x04;

/// AE_AG_CTRL[1:0]: 1 = manual gain / manual exposure
pub const AE_AG_MANUAL: u8 = 0x03;

/// GAIN_HIGH[1:0]: bits 9:8 of the 10-bit gain
pub const GAIN_HIGH_MASK: u8 = 0x03;

/// LIGHT_MANUAL[7]: banding frequency is set by hand, not detected
pub const LIGHT_MANUAL_ENABLE: u8 = 0x80;
/// LIGHT_CTRL[2]: manual frequency selection, 1 = 50Hz
pub const LIGHT_CTRL_50HZ: u8 = 0x04;
/// LIGHT_STATUS[0]: detected frequency, 1 = 50Hz
pub const LIGHT_STATUS_50HZ: u8 = 0x01;
