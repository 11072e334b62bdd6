/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Auto-exposure tuning: AE target window, banding filter, night mode,
//! AEC/AGC enable, light frequency, and manual shutter/gain access.

use embedded_hal::blocking::delay::DelayMs;

use crate::bus::RegisterIo;
use crate::registers::{
    Register, AEC_CTRL_NIGHT_MODE, AE_AG_MANUAL, GAIN_HIGH_MASK,
    LIGHT_CTRL_50HZ, LIGHT_MANUAL_ENABLE, LIGHT_STATUS_50HZ,
};
use crate::timing::Timing;
use crate::writer::MaskedWriter;
use crate::{ConfigError, Error};

/// Target luminance used until the caller picks another
pub const DEFAULT_AE_TARGET: u8 = 52;

/// Lines kept clear of the banding limit at the end of a frame
const BAND_VTS_MARGIN: u16 = 4;

/// Stable / fast AE windows derived from a target.
///
/// The stable window is roughly ±8% around the target; the fast window
/// doubles the upper edge and halves the lower one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AeThresholds {
    pub target: u8,
    pub low: u8,
    pub high: u8,
    pub fast_low: u8,
    pub fast_high: u8,
}

fn saturate(value: u32) -> u8 {
    value.min(u32::from(u8::MAX)) as u8
}

impl AeThresholds {
    pub fn from_target(target: u8) -> Self {
        let target32 = u32::from(target);
        let low = target32 * 23 / 25;
        let high = target32 * 27 / 25;
        Self {
            target,
            low: saturate(low),
            high: saturate(high),
            fast_low: saturate(low / 2),
            fast_high: saturate(high * 2),
        }
    }
}

impl Default for AeThresholds {
    fn default() -> Self {
        Self::from_target(DEFAULT_AE_TARGET)
    }
}

/// Write the six AE window registers for `target`
pub fn set_ae_target<B, D>(
    writer: &mut MaskedWriter<B, D>,
    target: u8,
) -> Result<AeThresholds, Error<B::Error>>
where
    B: RegisterIo,
    D: DelayMs<u32>,
{
    let ae = AeThresholds::from_target(target);
    writer.write(Register::StableHigh.addr(), ae.high)?;
    writer.write(Register::StableLow.addr(), ae.low)?;
    writer.write(Register::StableHigh2.addr(), ae.high)?;
    writer.write(Register::StableLow2.addr(), ae.low)?;
    writer.write(Register::FastHigh.addr(), ae.fast_high)?;
    writer.write(Register::FastLow.addr(), ae.fast_low)?;
    Ok(ae)
}

/// Banding step and maximum band count for one mains frequency
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BandSetting {
    /// Exposure lines per flicker half-period
    pub step: u16,
    pub max_bands: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BandingFilter {
    pub hz50: BandSetting,
    pub hz60: BandSetting,
}

impl BandingFilter {
    /// Compute both banding settings from a fresh timing snapshot.
    ///
    /// `step50 = sysclk * 100 / hts`, `step60 = step50 * 100 / 120`,
    /// `max_bands = (vts - 4) / step`, all in integer arithmetic.
    pub fn compute(timing: &Timing) -> Result<Self, ConfigError> {
        if timing.hts == 0 {
            return Err(ConfigError::ZeroHts);
        }
        let per_line = u64::from(timing.sysclk) * 100 / u64::from(timing.hts);
        let step60 = per_line * 100 / 120;
        let step50 = per_line;
        Ok(Self {
            hz60: Self::band(step60, timing.vts)?,
            hz50: Self::band(step50, timing.vts)?,
        })
    }

    fn band(step: u64, vts: u16) -> Result<BandSetting, ConfigError> {
        if step == 0 {
            return Err(ConfigError::ZeroBandStep);
        }
        let max_bands = u64::from(vts.saturating_sub(BAND_VTS_MARGIN)) / step;
        Ok(BandSetting {
            step: step.min(u64::from(u16::MAX)) as u16,
            max_bands: max_bands.min(u64::from(u8::MAX)) as u8,
        })
    }
}

/// Program the banding filter from `timing`, which must be freshly read
pub fn set_banding_filter<B, D>(
    writer: &mut MaskedWriter<B, D>,
    timing: &Timing,
) -> Result<BandingFilter, Error<B::Error>>
where
    B: RegisterIo,
    D: DelayMs<u32>,
{
    let filter = BandingFilter::compute(timing)?;
    let [hi60, lo60] = filter.hz60.step.to_be_bytes();
    let [hi50, lo50] = filter.hz50.step.to_be_bytes();

    writer.write(Register::B60StepHigh.addr(), hi60)?;
    writer.write(Register::B60StepLow.addr(), lo60)?;
    writer.write(Register::B60MaxBands.addr(), filter.hz60.max_bands)?;

    writer.write(Register::B50StepHigh.addr(), hi50)?;
    writer.write(Register::B50StepLow.addr(), lo50)?;
    writer.write(Register::B50MaxBands.addr(), filter.hz50.max_bands)?;
    Ok(filter)
}

pub fn set_night_mode<B, D>(
    writer: &mut MaskedWriter<B, D>,
    enable: bool,
) -> Result<(), Error<B::Error>>
where
    B: RegisterIo,
    D: DelayMs<u32>,
{
    let value = if enable { AEC_CTRL_NIGHT_MODE } else { 0 };
    writer.update_bits(Register::AecCtrl.addr(), AEC_CTRL_NIGHT_MODE, value)
}

/// Enable or disable automatic exposure and gain together.
/// With both off the caller owns shutter and gain.
pub fn set_ae_ag_enable<B, D>(
    writer: &mut MaskedWriter<B, D>,
    enable: bool,
) -> Result<(), Error<B::Error>>
where
    B: RegisterIo,
    D: DelayMs<u32>,
{
    let value = if enable { 0 } else { AE_AG_MANUAL };
    writer.update_bits(Register::AeAgCtrl.addr(), AE_AG_MANUAL, value)
}

/// Mains frequency the banding filter is locked to
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LightFrequency {
    Hz50,
    Hz60,
}

impl LightFrequency {
    pub fn hz(self) -> u32 {
        match self {
            LightFrequency::Hz50 => 50,
            LightFrequency::Hz60 => 60,
        }
    }
}

pub fn light_frequency<B, D>(
    writer: &mut MaskedWriter<B, D>,
) -> Result<LightFrequency, Error<B::Error>>
where
    B: RegisterIo,
    D: DelayMs<u32>,
{
    let manual =
        writer.read(Register::LightManual.addr())? & LIGHT_MANUAL_ENABLE != 0;
    let is_50hz = if manual {
        writer.read(Register::LightCtrl.addr())? & LIGHT_CTRL_50HZ != 0
    } else {
        writer.read(Register::LightStatus.addr())? & LIGHT_STATUS_50HZ != 0
    };
    Ok(if is_50hz {
        LightFrequency::Hz50
    } else {
        LightFrequency::Hz60
    })
}

/// Exposure time, in line periods
pub fn shutter<B, D>(
    writer: &mut MaskedWriter<B, D>,
) -> Result<u16, Error<B::Error>>
where
    B: RegisterIo,
    D: DelayMs<u32>,
{
    let low = writer.read(Register::AecLow.addr())?;
    let high = writer.read(Register::AecHigh.addr())?;
    Ok(u16::from_be_bytes([high, low]))
}

pub fn set_shutter<B, D>(
    writer: &mut MaskedWriter<B, D>,
    lines: u16,
) -> Result<(), Error<B::Error>>
where
    B: RegisterIo,
    D: DelayMs<u32>,
{
    let [high, low] = lines.to_be_bytes();
    writer.write(Register::AecLow.addr(), low)?;
    writer.write(Register::AecHigh.addr(), high)
}

/// Analog gain where 16 means 1x
pub fn gain16<B, D>(
    writer: &mut MaskedWriter<B, D>,
) -> Result<u16, Error<B::Error>>
where
    B: RegisterIo,
    D: DelayMs<u32>,
{
    let high = writer.read(Register::GainHigh.addr())? & GAIN_HIGH_MASK;
    let low = writer.read(Register::GainLow.addr())?;
    Ok(u16::from_be_bytes([high, low]))
}
