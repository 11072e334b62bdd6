/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! The surface an outer video framework drives.

use embedded_hal::blocking::delay::DelayMs;

use crate::catalog::{self, FrameRate, FrameRateSet, Mode};
use crate::power::{MasterClock, PowerLines};
use crate::{ChipId, Error, Ov7740, RegisterIo};

/// Operations exposed to the framework glue (format negotiation,
/// power callbacks, debug register access).
pub trait SensorControl {
    type Error;

    fn identify(&mut self) -> Result<ChipId, Self::Error>;

    fn enumerate_modes(&self) -> [(Mode, FrameRateSet); 2];

    fn enumerate_frame_intervals(
        &self,
        width: u32,
        height: u32,
    ) -> FrameRateSet;

    fn switch_to(
        &mut self,
        mode: Mode,
        frame_rate: FrameRate,
    ) -> Result<(), Self::Error>;

    fn set_power(&mut self, on: bool);

    fn set_exposure_target(&mut self, target: u8) -> Result<(), Self::Error>;

    fn set_night_mode(&mut self, enable: bool) -> Result<(), Self::Error>;

    fn get_register(&mut self, address: u16) -> Result<u8, Self::Error>;

    fn set_register(
        &mut self,
        address: u16,
        value: u8,
    ) -> Result<(), Self::Error>;
}

impl<B, D, C, P> SensorControl for Ov7740<B, D, C, P>
where
    B: RegisterIo,
    D: DelayMs<u32>,
    C: MasterClock,
    P: PowerLines,
{
    type Error = Error<B::Error>;

    fn identify(&mut self) -> Result<ChipId, Self::Error> {
        Ov7740::identify(self)
    }

    fn enumerate_modes(&self) -> [(Mode, FrameRateSet); 2] {
        catalog::enumerate_modes()
    }

    fn enumerate_frame_intervals(
        &self,
        width: u32,
        height: u32,
    ) -> FrameRateSet {
        catalog::frame_intervals(width, height)
    }

    fn switch_to(
        &mut self,
        mode: Mode,
        frame_rate: FrameRate,
    ) -> Result<(), Self::Error> {
        Ov7740::switch_to(self, mode, frame_rate)
    }

    fn set_power(&mut self, on: bool) {
        Ov7740::set_power(self, on)
    }

    fn set_exposure_target(&mut self, target: u8) -> Result<(), Self::Error> {
        Ov7740::set_exposure_target(self, target).map(|_| ())
    }

    fn set_night_mode(&mut self, enable: bool) -> Result<(), Self::Error> {
        Ov7740::set_night_mode(self, enable)
    }

    fn get_register(&mut self, address: u16) -> Result<u8, Self::Error> {
        Ov7740::get_register(self, address)
    }

    fn set_register(
        &mut self,
        address: u16,
        value: u8,
    ) -> Result<(), Self::Error> {
        Ov7740::set_register(self, address, value)
    }
}

/// One lock around a whole device.
///
/// Every entry point (mode switch, exposure, power, debug access) runs under
/// the same mutex, so two threads can never interleave register traffic.
#[cfg(any(test, feature = "std"))]
pub struct Locked<S> {
    inner: std::sync::Mutex<S>,
}

#[cfg(any(test, feature = "std"))]
impl<S> Locked<S> {
    pub fn new(device: S) -> Self {
        Self {
            inner: std::sync::Mutex::new(device),
        }
    }

    /// Run `f` with exclusive access to the device.
    /// A panic in an earlier holder does not lock the device out.
    pub fn with<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut *guard)
    }

    pub fn into_inner(self) -> S {
        self.inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
