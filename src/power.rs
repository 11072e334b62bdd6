/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Platform collaborators: master clock, supply rails and the
//! power-down / reset lines. The driver only sequences them.

use embedded_hal::digital::v2::OutputPin;

/// Lowest master clock the sensor accepts
pub const XCLK_MIN_HZ: u32 = 6_000_000;
/// Highest master clock the sensor accepts
pub const XCLK_MAX_HZ: u32 = 27_000_000;

/// Settle time after toggling the power-down line
pub const POWER_DOWN_SETTLE_MS: u32 = 2;

/// Clamp a requested master clock into the supported range
pub fn clamp_xclk(hz: u32) -> u32 {
    hz.max(XCLK_MIN_HZ).min(XCLK_MAX_HZ)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClockError;

/// Source of the sensor's XVCLK input
pub trait MasterClock {
    fn set_rate(&mut self, hz: u32) -> Result<(), ClockError>;
    fn enable(&mut self);
    fn disable(&mut self);
}

/// Free-running oscillator: nothing to program or gate
pub struct FixedClock;

impl MasterClock for FixedClock {
    fn set_rate(&mut self, _hz: u32) -> Result<(), ClockError> {
        Ok(())
    }

    fn enable(&mut self) {}

    fn disable(&mut self) {}
}

/// Sensor supply rails, in the order they are brought up
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rail {
    /// DOVDD
    Io,
    /// DVDD
    Core,
    /// AVDD
    Analog,
}

impl Rail {
    pub const POWER_UP_ORDER: [Rail; 3] = [Rail::Io, Rail::Core, Rail::Analog];

    pub fn microvolts(self) -> u32 {
        match self {
            Rail::Io => 1_800_000,
            Rail::Core => 1_500_000,
            Rail::Analog => 2_800_000,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegulatorError {
    /// The board has no controllable regulator for this rail
    Absent,
    /// The regulator exists but refused the request
    Failed,
}

pub trait Regulators {
    fn enable(
        &mut self,
        rail: Rail,
        microvolts: u32,
    ) -> Result<(), RegulatorError>;
    fn disable(&mut self, rail: Rail);
}

/// Board with fixed supplies
pub struct NoRegulators;

impl Regulators for NoRegulators {
    fn enable(
        &mut self,
        _rail: Rail,
        _microvolts: u32,
    ) -> Result<(), RegulatorError> {
        Err(RegulatorError::Absent)
    }

    fn disable(&mut self, _rail: Rail) {}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PinError;

/// Power-down and reset control.
/// `true` always means "asserted", whatever the electrical polarity.
pub trait PowerLines {
    fn set_power_down(&mut self, asserted: bool) -> Result<(), PinError>;
    fn set_reset(&mut self, asserted: bool) -> Result<(), PinError>;
}

/// Lines tied off on the board
impl PowerLines for () {
    fn set_power_down(&mut self, _asserted: bool) -> Result<(), PinError> {
        Ok(())
    }

    fn set_reset(&mut self, _asserted: bool) -> Result<(), PinError> {
        Ok(())
    }
}

/// Active-high PWDN and active-low RESETB on GPIOs
pub struct GpioLines<PWDN, RST> {
    pwdn: PWDN,
    reset: RST,
}

impl<PWDN, RST> GpioLines<PWDN, RST>
where
    PWDN: OutputPin,
    RST: OutputPin,
{
    pub fn new(pwdn: PWDN, reset: RST) -> Self {
        Self { pwdn, reset }
    }

    pub fn release(self) -> (PWDN, RST) {
        (self.pwdn, self.reset)
    }
}

impl<PWDN, RST> PowerLines for GpioLines<PWDN, RST>
where
    PWDN: OutputPin,
    RST: OutputPin,
{
    fn set_power_down(&mut self, asserted: bool) -> Result<(), PinError> {
        if asserted {
            self.pwdn.set_high().map_err(|_| PinError)
        } else {
            self.pwdn.set_low().map_err(|_| PinError)
        }
    }

    fn set_reset(&mut self, asserted: bool) -> Result<(), PinError> {
        if asserted {
            self.reset.set_low().map_err(|_| PinError)
        } else {
            self.reset.set_high().map_err(|_| PinError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    #[derive(Default)]
    struct Pin {
        high: Option<bool>,
    }

    impl OutputPin for Pin {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = Some(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = Some(true);
            Ok(())
        }
    }

    #[test]
    fn gpio_polarity() {
        let mut lines = GpioLines::new(Pin::default(), Pin::default());
        lines.set_power_down(true).unwrap();
        lines.set_reset(true).unwrap();
        let (pwdn, reset) = lines.release();
        assert_eq!(pwdn.high, Some(true));
        assert_eq!(reset.high, Some(false));
    }

    #[test]
    fn xclk_is_clamped() {
        assert_eq!(clamp_xclk(1_000_000), XCLK_MIN_HZ);
        assert_eq!(clamp_xclk(48_000_000), XCLK_MAX_HZ);
        assert_eq!(clamp_xclk(24_000_000), 24_000_000);
    }
}
