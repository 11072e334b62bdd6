/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Static catalog of resolution / frame rate register programs.
//!
//! Lookup is a pure scan: a missing entry is the normal way of saying a
//! combination is unsupported.

mod tables;

use crate::registers::{Register, COM7_SOFT_RESET};
use crate::writer::RegisterOp;

/// Output resolutions the sensor can be programmed for
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Vga640x480,
    Qvga320x240,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Vga640x480, Mode::Qvga320x240];

    pub fn width(self) -> u16 {
        match self {
            Mode::Vga640x480 => 640,
            Mode::Qvga320x240 => 320,
        }
    }

    pub fn height(self) -> u16 {
        match self {
            Mode::Vga640x480 => 480,
            Mode::Qvga320x240 => 240,
        }
    }

    pub fn from_size(width: u32, height: u32) -> Option<Mode> {
        Mode::ALL
            .iter()
            .copied()
            .find(|m| {
                u32::from(m.width()) == width
                    && u32::from(m.height()) == height
            })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameRate {
    Fps15,
    Fps30,
    Fps60,
}

/// Frame rate chosen when a request leaves the interval unspecified
pub const DEFAULT_FRAME_RATE: FrameRate = FrameRate::Fps30;

impl FrameRate {
    pub const ALL: [FrameRate; 3] =
        [FrameRate::Fps15, FrameRate::Fps30, FrameRate::Fps60];

    pub fn fps(self) -> u32 {
        match self {
            FrameRate::Fps15 => 15,
            FrameRate::Fps30 => 30,
            FrameRate::Fps60 => 60,
        }
    }

    pub fn from_fps(fps: u32) -> Option<FrameRate> {
        FrameRate::ALL.iter().copied().find(|r| r.fps() == fps)
    }

    /// Resolve a frame interval (seconds per frame as a fraction).
    /// A zero term selects the default rate.
    pub fn from_interval(
        numerator: u32,
        denominator: u32,
    ) -> Option<FrameRate> {
        if numerator == 0 || denominator == 0 {
            return Some(DEFAULT_FRAME_RATE);
        }
        if denominator % numerator != 0 {
            return None;
        }
        FrameRate::from_fps(denominator / numerator)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Small set of frame rates, iterated in ascending order
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameRateSet(u8);

impl FrameRateSet {
    pub const fn empty() -> Self {
        FrameRateSet(0)
    }

    pub fn insert(&mut self, rate: FrameRate) {
        self.0 |= rate.bit();
    }

    pub fn contains(&self, rate: FrameRate) -> bool {
        self.0 & rate.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = FrameRate> {
        let set = *self;
        (0..FrameRate::ALL.len())
            .map(|i| FrameRate::ALL[i])
            .filter(move |r| set.contains(*r))
    }
}

/// Sensor output encoding, fixed at construction
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// YUV 4:2:2, YUYV byte order
    Yuyv,
    /// Raw Bayer
    Raw,
    /// ITU-R BT.656 embedded sync
    Bt656,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Yuyv
    }
}

impl OutputFormat {
    /// COM7 value selecting this format
    pub fn com7(self) -> u8 {
        match self {
            OutputFormat::Yuyv => 0x00,
            OutputFormat::Raw => 0x01,
            OutputFormat::Bt656 => 0x20,
        }
    }
}

/// Ordered register ops for exactly one (mode, frame rate) pair
#[derive(Debug)]
pub struct ModeProgram {
    pub mode: Mode,
    pub frame_rate: FrameRate,
    pub ops: &'static [RegisterOp],
}

impl ModeProgram {
    /// The program's ops with its output-format write rewritten for `format`
    pub fn ops(
        &self,
        format: OutputFormat,
    ) -> impl Iterator<Item = RegisterOp> + '_ {
        self.ops.iter().map(move |op| {
            if Self::selects_format(op) {
                RegisterOp {
                    value: format.com7(),
                    ..*op
                }
            } else {
                *op
            }
        })
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Any plain COM7 write that is not a soft reset picks the output format
    fn selects_format(op: &RegisterOp) -> bool {
        op.address == Register::Com7.addr()
            && op.mask == 0
            && op.value & COM7_SOFT_RESET == 0
    }
}

static PROGRAMS: [ModeProgram; 5] = [
    ModeProgram {
        mode: Mode::Vga640x480,
        frame_rate: FrameRate::Fps15,
        ops: tables::VGA_640_480_15FPS,
    },
    ModeProgram {
        mode: Mode::Vga640x480,
        frame_rate: FrameRate::Fps30,
        ops: tables::VGA_640_480_30FPS,
    },
    ModeProgram {
        mode: Mode::Qvga320x240,
        frame_rate: FrameRate::Fps15,
        ops: tables::QVGA_320_240_15FPS,
    },
    ModeProgram {
        mode: Mode::Qvga320x240,
        frame_rate: FrameRate::Fps30,
        ops: tables::QVGA_320_240_30FPS,
    },
    ModeProgram {
        mode: Mode::Qvga320x240,
        frame_rate: FrameRate::Fps60,
        ops: tables::QVGA_320_240_60FPS,
    },
];

/// Every populated catalog entry
pub fn programs() -> &'static [ModeProgram] {
    &PROGRAMS
}

pub fn lookup(
    mode: Mode,
    frame_rate: FrameRate,
) -> Option<&'static ModeProgram> {
    PROGRAMS
        .iter()
        .find(|p| p.mode == mode && p.frame_rate == frame_rate)
}

pub fn supported_frame_rates(mode: Mode) -> FrameRateSet {
    let mut rates = FrameRateSet::empty();
    for program in PROGRAMS.iter().filter(|p| p.mode == mode) {
        rates.insert(program.frame_rate);
    }
    rates
}

/// Largest (width, height) across populated entries
pub fn max_frame_size() -> (u16, u16) {
    PROGRAMS.iter().fold((0, 0), |(w, h), p| {
        (w.max(p.mode.width()), h.max(p.mode.height()))
    })
}

/// Each mode with the frame rates populated for it
pub fn enumerate_modes() -> [(Mode, FrameRateSet); 2] {
    let mut out = [(Mode::Vga640x480, FrameRateSet::empty()); 2];
    for (slot, mode) in out.iter_mut().zip(Mode::ALL.iter()) {
        *slot = (*mode, supported_frame_rates(*mode));
    }
    out
}

/// Frame rates populated for an exact frame size; empty if the size is unknown
pub fn frame_intervals(width: u32, height: u32) -> FrameRateSet {
    Mode::from_size(width, height)
        .map(supported_frame_rates)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_stable() {
        let first = lookup(Mode::Vga640x480, FrameRate::Fps30).unwrap();
        let second = lookup(Mode::Vga640x480, FrameRate::Fps30).unwrap();
        assert!(core::ptr::eq(first, second));
        assert_eq!(first.mode, Mode::Vga640x480);
        assert_eq!(first.frame_rate, FrameRate::Fps30);
    }

    #[test]
    fn unpopulated_pair_is_none() {
        assert!(lookup(Mode::Vga640x480, FrameRate::Fps60).is_none());
        assert!(lookup(Mode::Qvga320x240, FrameRate::Fps60).is_some());
    }

    #[test]
    fn every_program_starts_with_soft_reset() {
        for program in programs() {
            let first = program.ops[0];
            assert_eq!(first.address, Register::Com7.addr());
            assert_eq!(first.value, COM7_SOFT_RESET);
            assert!(first.delay_ms >= 5);
        }
    }

    #[test]
    fn capability_queries() {
        assert_eq!(max_frame_size(), (640, 480));

        let vga = supported_frame_rates(Mode::Vga640x480);
        assert_eq!(vga.len(), 2);
        assert!(!vga.contains(FrameRate::Fps60));

        let qvga: Vec<u32> = frame_intervals(320, 240)
            .iter()
            .map(FrameRate::fps)
            .collect();
        assert_eq!(qvga, vec![15, 30, 60]);
        assert!(frame_intervals(800, 600).is_empty());

        let modes = enumerate_modes();
        assert_eq!(modes[0].0, Mode::Vga640x480);
        assert_eq!(modes[1].1, qvga_rates());
    }

    fn qvga_rates() -> FrameRateSet {
        let mut set = FrameRateSet::empty();
        for rate in FrameRate::ALL.iter() {
            set.insert(*rate);
        }
        set
    }

    #[test]
    fn output_format_rewrites_only_the_format_write() {
        let program = lookup(Mode::Qvga320x240, FrameRate::Fps15).unwrap();
        let com7: Vec<u8> = program
            .ops(OutputFormat::Bt656)
            .filter(|op| op.address == Register::Com7.addr())
            .map(|op| op.value)
            .collect();
        assert_eq!(com7, vec![COM7_SOFT_RESET, 0x20]);
        assert_eq!(program.ops(OutputFormat::Raw).count(), program.len());
    }

    #[test]
    fn interval_resolution() {
        assert_eq!(FrameRate::from_interval(1, 15), Some(FrameRate::Fps15));
        assert_eq!(FrameRate::from_interval(2, 120), Some(FrameRate::Fps60));
        assert_eq!(FrameRate::from_interval(0, 0), Some(DEFAULT_FRAME_RATE));
        assert_eq!(FrameRate::from_interval(1, 24), None);
        assert_eq!(FrameRate::from_fps(24), None);
    }
}
