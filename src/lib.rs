/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/
#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Configuration driver for the OmniVision OV7740 image sensor
//! This imaging sensor has multiple interfaces:
//! - SCCB (i2c-like) for configuration registers
//! - parallel pixel data out (dout)
//! - pixel out sync (vsync, hsync, pix clock)
//! This driver is concerned only with the SCCB interface: bringing the
//! sensor from power-up to a streaming mode and tuning auto-exposure.

#[cfg(feature = "rttdebug")]
use panic_rtt_core::rprintln;

use embedded_hal::blocking::delay::DelayMs;

pub mod bus;
pub mod catalog;
pub mod control;
pub mod exposure;
pub mod power;
pub mod registers;
pub mod timing;
pub mod writer;

pub use bus::{RegisterIo, Sccb, DEFAULT_I2C_ADDRESS};
pub use catalog::{FrameRate, FrameRateSet, Mode, ModeProgram, OutputFormat};
pub use control::SensorControl;
#[cfg(feature = "std")]
pub use control::Locked;
pub use exposure::{AeThresholds, BandingFilter, LightFrequency};
pub use power::{MasterClock, PinError, PowerLines, Rail, Regulators};
pub use timing::Timing;
pub use writer::{MaskedWriter, RegisterOp};

use exposure::DEFAULT_AE_TARGET;
use power::{RegulatorError, POWER_DOWN_SETTLE_MS};
use registers::{
    Register, MANUFACTURER_ID_HIGH, MANUFACTURER_ID_LOW, SOFT_RESET_VALUE,
};

/// Errors in this crate
#[derive(Debug)]
pub enum Error<CommE> {
    /// Sensor communication error while accessing `address`
    Bus { address: u16, source: CommE },

    /// Op `index` of a register sequence failed; later ops were not issued
    Sequence {
        index: usize,
        address: u16,
        source: CommE,
    },

    /// No register program for this size and frame rate
    UnsupportedMode { width: u32, height: u32, fps: u32 },

    /// Registers decoded to values the driver cannot work with
    Configuration(ConfigError),

    /// Identity register did not hold the expected value
    NotFound { address: u16, expected: u8, actual: u8 },

    /// The device is powered down
    InvalidState(DeviceState),

    /// Operation not implemented for this sensor
    Unsupported,

    /// The master clock rejected the requested rate
    Clock,

    /// A power-down or reset line could not be driven
    Pin,

    /// A supply rail failed to come up
    Regulator(Rail),
}

/// Register state the timing and exposure maths cannot use
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// PLL bit mode other than 8 or 10
    UnsupportedBitMode(u8),
    ZeroPreDivider,
    ZeroHts,
    /// Banding step rounded down to zero lines
    ZeroBandStep,
}

impl<CommE> From<ConfigError> for Error<CommE> {
    fn from(err: ConfigError) -> Self {
        Error::Configuration(err)
    }
}

impl<CommE> From<PinError> for Error<CommE> {
    fn from(_: PinError) -> Self {
        Error::Pin
    }
}

/// Soft reset needs at least 5ms before the next access
const SOFT_RESET_SETTLE_MS: u32 = 10;
/// Skip 9 vsyncs after a mode program: capture starts at the 10th
const POST_APPLY_SETTLE_MS: u32 = 300;
const RESET_PULSE_MS: u32 = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeviceState {
    Uninitialized,
    /// Clocked, mode program not (yet) committed
    Configuring,
    Streaming,
    PoweredDown,
}

/// Manufacturer ID read back at probe
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChipId {
    pub high: u8,
    pub low: u8,
}

/// Construction-time settings
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Requested master clock; clamped to the supported range
    pub xclk_hz: u32,
    pub output_format: OutputFormat,
    /// AE target written after every mode program
    pub ae_target: u8,
    pub default_mode: Mode,
    pub default_frame_rate: FrameRate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            xclk_hz: 24_000_000,
            output_format: OutputFormat::Yuyv,
            ae_target: DEFAULT_AE_TARGET,
            default_mode: Mode::Vga640x480,
            default_frame_rate: catalog::DEFAULT_FRAME_RATE,
        }
    }
}

/// Runtime state tracked for one sensor
#[derive(Clone, Debug)]
pub struct SensorState {
    device: DeviceState,
    active: Option<(Mode, FrameRate)>,
    timing: Option<Timing>,
    ae: AeThresholds,
    night_mode: bool,
}

impl SensorState {
    fn new(ae_target: u8) -> Self {
        Self {
            device: DeviceState::Uninitialized,
            active: None,
            timing: None,
            ae: AeThresholds::from_target(ae_target),
            night_mode: false,
        }
    }

    pub fn device(&self) -> DeviceState {
        self.device
    }

    /// Last committed mode
    pub fn mode(&self) -> Option<Mode> {
        self.active.map(|(mode, _)| mode)
    }

    /// Last committed frame rate
    pub fn frame_rate(&self) -> Option<FrameRate> {
        self.active.map(|(_, rate)| rate)
    }

    /// Last timing snapshot; `None` after a mode change or power-off
    pub fn timing(&self) -> Option<Timing> {
        self.timing
    }

    pub fn ae(&self) -> AeThresholds {
        self.ae
    }

    pub fn night_mode(&self) -> bool {
        self.night_mode
    }
}

/// Main driver struct
pub struct Ov7740<B, D, C, P> {
    writer: MaskedWriter<B, D>,
    clock: C,
    lines: P,
    config: Config,
    state: SensorState,
}

impl<B, D, C, P> Ov7740<B, D, C, P>
where
    B: RegisterIo,
    D: DelayMs<u32>,
    C: MasterClock,
    P: PowerLines,
{
    pub fn new(bus: B, delay: D, clock: C, lines: P, config: Config) -> Self {
        let config = Config {
            xclk_hz: power::clamp_xclk(config.xclk_hz),
            ..config
        };
        Self {
            writer: MaskedWriter::new(bus, delay),
            clock,
            lines,
            state: SensorState::new(config.ae_target),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &SensorState {
        &self.state
    }

    /// Give back the bus, delay, clock and lines
    pub fn release(self) -> (B, D, C, P) {
        let (bus, delay) = self.writer.release();
        (bus, delay, self.clock, self.lines)
    }

    /// Attach sequence: clock, supplies, reset, identity check, default mode.
    ///
    /// Leaves the clock gated and the device `PoweredDown` with the default
    /// mode committed; call `set_power(true)` before streaming.
    pub fn probe<R: Regulators>(
        &mut self,
        supplies: &mut R,
    ) -> Result<ChipId, Error<B::Error>> {
        #[cfg(feature = "rttdebug")]
        rprintln!("ov7740 probe start");

        log::debug!("ov7740: mclk {} Hz", self.config.xclk_hz);
        self.clock
            .set_rate(self.config.xclk_hz)
            .map_err(|_| Error::Clock)?;
        self.clock.enable();

        let id = match self.power_up(supplies) {
            Ok(id) => id,
            Err(err) => {
                self.clock.disable();
                return Err(err);
            }
        };

        let (mode, frame_rate) =
            (self.config.default_mode, self.config.default_frame_rate);
        if let Err(err) = self.switch_to(mode, frame_rate) {
            log::warn!("ov7740: init failed, powering down");
            self.clock.disable();
            if self.power_down(true).is_err() {
                log::warn!("ov7740: cannot assert power-down");
            }
            return Err(err);
        }
        self.set_power(false);

        #[cfg(feature = "rttdebug")]
        rprintln!("ov7740 probe done");
        log::info!("ov7740: found, id {:02x}{:02x}", id.high, id.low);
        Ok(id)
    }

    fn power_up<R: Regulators>(
        &mut self,
        supplies: &mut R,
    ) -> Result<ChipId, Error<B::Error>> {
        for rail in Rail::POWER_UP_ORDER.iter().copied() {
            match supplies.enable(rail, rail.microvolts()) {
                Ok(()) => log::debug!("ov7740: {:?} rail up", rail),
                Err(RegulatorError::Absent) => {
                    log::warn!("ov7740: no {:?} regulator", rail)
                }
                Err(RegulatorError::Failed) => {
                    return Err(Error::Regulator(rail))
                }
            }
        }

        self.lines.set_reset(true)?;
        self.writer.delay_ms(RESET_PULSE_MS);
        self.lines.set_reset(false)?;
        self.power_down(false)?;

        self.identify()
    }

    /// Detach: enter power-down, drop the supplies in reverse order and
    /// hand back the parts.
    pub fn shutdown<R: Regulators>(mut self, supplies: &mut R) -> (B, D, C, P) {
        self.set_power(false);
        if self.power_down(true).is_err() {
            log::warn!("ov7740: cannot assert power-down");
        }
        for rail in Rail::POWER_UP_ORDER.iter().rev() {
            supplies.disable(*rail);
        }
        self.release()
    }

    fn power_down(&mut self, asserted: bool) -> Result<(), Error<B::Error>> {
        self.lines.set_power_down(asserted)?;
        self.writer.delay_ms(POWER_DOWN_SETTLE_MS);
        Ok(())
    }

    fn ensure_powered(&self) -> Result<(), Error<B::Error>> {
        match self.state.device {
            DeviceState::PoweredDown => {
                Err(Error::InvalidState(DeviceState::PoweredDown))
            }
            _ => Ok(()),
        }
    }

    /// Check both manufacturer ID registers
    pub fn identify(&mut self) -> Result<ChipId, Error<B::Error>> {
        let high = self.check_id(Register::Midh, MANUFACTURER_ID_HIGH)?;
        let low = self.check_id(Register::Midl, MANUFACTURER_ID_LOW)?;
        Ok(ChipId { high, low })
    }

    fn check_id(
        &mut self,
        reg: Register,
        expected: u8,
    ) -> Result<u8, Error<B::Error>> {
        let actual = self.writer.read(reg.addr())?;
        if actual != expected {
            log::warn!(
                "ov7740: not found, {:?} expected {:02x} got {:02x}",
                reg,
                expected,
                actual
            );
            return Err(Error::NotFound {
                address: reg.addr(),
                expected,
                actual,
            });
        }
        Ok(actual)
    }

    /// Gate or ungate the master clock.
    /// Powering off discards cached timing: it is stale once the clock stops.
    pub fn set_power(&mut self, on: bool) {
        if on {
            self.clock.enable();
            if let DeviceState::PoweredDown | DeviceState::Uninitialized =
                self.state.device
            {
                self.state.device = DeviceState::Configuring;
            }
        } else {
            self.clock.disable();
            self.state.device = DeviceState::PoweredDown;
            self.state.timing = None;
        }
    }

    /// Reset the sensor, apply the catalog program for `(mode, frame_rate)`
    /// and restore the current AE target.
    ///
    /// On failure the tracked mode and frame rate are left as they were; the
    /// hardware itself needs another switch.
    pub fn switch_to(
        &mut self,
        mode: Mode,
        frame_rate: FrameRate,
    ) -> Result<(), Error<B::Error>> {
        self.ensure_powered()?;
        let program = catalog::lookup(mode, frame_rate).ok_or(
            Error::UnsupportedMode {
                width: u32::from(mode.width()),
                height: u32::from(mode.height()),
                fps: frame_rate.fps(),
            },
        )?;

        log::debug!(
            "ov7740: switching to {:?} @ {} fps ({} ops)",
            mode,
            frame_rate.fps(),
            program.len()
        );
        self.state.device = DeviceState::Configuring;

        self.writer.write(Register::Com7.addr(), SOFT_RESET_VALUE)?;
        self.writer.delay_ms(SOFT_RESET_SETTLE_MS);

        if let Err(err) = self
            .writer
            .apply_sequence(program.ops(self.config.output_format))
        {
            if let Error::Sequence { index, address, .. } = &err {
                log::warn!(
                    "ov7740: mode program aborted at op {} (0x{:04x})",
                    index,
                    address
                );
            }
            return Err(err);
        }
        self.writer.delay_ms(POST_APPLY_SETTLE_MS);

        // the reset put the AE window back to chip defaults
        let target = self.state.ae.target;
        let ae = exposure::set_ae_target(&mut self.writer, target)?;

        // it also cleared night mode and invalidated timing
        self.state.ae = ae;
        self.state.active = Some((mode, frame_rate));
        self.state.night_mode = false;
        self.state.timing = None;
        self.state.device = DeviceState::Streaming;
        Ok(())
    }

    /// Resolve a raw size / frame rate request, then `switch_to`
    pub fn set_format(
        &mut self,
        width: u32,
        height: u32,
        fps: u32,
    ) -> Result<(), Error<B::Error>> {
        self.ensure_powered()?;
        match (Mode::from_size(width, height), FrameRate::from_fps(fps)) {
            (Some(mode), Some(rate)) => self.switch_to(mode, rate),
            _ => Err(Error::UnsupportedMode { width, height, fps }),
        }
    }

    /// Read sysclk, HTS and VTS back from the sensor and cache them
    pub fn refresh_timing(&mut self) -> Result<Timing, Error<B::Error>> {
        self.ensure_powered()?;
        let timing =
            timing::read_timing(&mut self.writer, self.config.xclk_hz)?;
        self.state.timing = Some(timing);
        Ok(timing)
    }

    pub fn set_vts(&mut self, vts: u16) -> Result<(), Error<B::Error>> {
        self.ensure_powered()?;
        timing::write_vts(&mut self.writer, vts)?;
        self.state.timing = None;
        Ok(())
    }

    pub fn set_exposure_target(
        &mut self,
        target: u8,
    ) -> Result<AeThresholds, Error<B::Error>> {
        self.ensure_powered()?;
        let ae = exposure::set_ae_target(&mut self.writer, target)?;
        self.state.ae = ae;
        Ok(ae)
    }

    /// Recompute timing, then program both banding filters from it
    pub fn set_banding_filter(
        &mut self,
    ) -> Result<BandingFilter, Error<B::Error>> {
        let timing = self.refresh_timing()?;
        exposure::set_banding_filter(&mut self.writer, &timing)
    }

    pub fn set_night_mode(
        &mut self,
        enable: bool,
    ) -> Result<(), Error<B::Error>> {
        self.ensure_powered()?;
        exposure::set_night_mode(&mut self.writer, enable)?;
        self.state.night_mode = enable;
        Ok(())
    }

    pub fn set_ae_ag_enable(
        &mut self,
        enable: bool,
    ) -> Result<(), Error<B::Error>> {
        self.ensure_powered()?;
        exposure::set_ae_ag_enable(&mut self.writer, enable)
    }

    pub fn light_frequency(
        &mut self,
    ) -> Result<LightFrequency, Error<B::Error>> {
        self.ensure_powered()?;
        exposure::light_frequency(&mut self.writer)
    }

    pub fn shutter(&mut self) -> Result<u16, Error<B::Error>> {
        self.ensure_powered()?;
        exposure::shutter(&mut self.writer)
    }

    pub fn set_shutter(&mut self, lines: u16) -> Result<(), Error<B::Error>> {
        self.ensure_powered()?;
        exposure::set_shutter(&mut self.writer, lines)
    }

    pub fn gain16(&mut self) -> Result<u16, Error<B::Error>> {
        self.ensure_powered()?;
        exposure::gain16(&mut self.writer)
    }

    /// Manual gain is not wired up for this sensor
    pub fn set_gain16(&mut self, _gain16: u16) -> Result<(), Error<B::Error>> {
        Err(Error::Unsupported)
    }

    /// Raw register read for debug tooling
    pub fn get_register(
        &mut self,
        address: u16,
    ) -> Result<u8, Error<B::Error>> {
        self.ensure_powered()?;
        self.writer.read(address)
    }

    /// Raw register write for debug tooling
    pub fn set_register(
        &mut self,
        address: u16,
        value: u8,
    ) -> Result<(), Error<B::Error>> {
        self.ensure_powered()?;
        self.writer.write(address, value)
    }
}
