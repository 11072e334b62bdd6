/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Derived sensor timing: system clock, HTS and VTS.
//!
//! Frame rate is not a register; it falls out of the PLL chain and the
//! total line/frame sizes. Everything here reads live register state and is
//! only invoked explicitly, so cached values may go stale between calls.
//!
//! The PLL block addresses (0x3034..0x3037, 0x3108) sit outside the 8-bit
//! space used by the mode tables. They are kept as provisional and should be
//! checked against the datasheet for the exact part in use.

use embedded_hal::blocking::delay::DelayMs;

use crate::bus::RegisterIo;
use crate::registers::Register;
use crate::writer::MaskedWriter;
use crate::{ConfigError, Error};

/// The master clock enters the PLL maths in units of 10 kHz
pub const XCLK_UNIT_HZ: u32 = 10_000;

/// PLL_BIT_MODE[3:0]: MIPI bit mode, 8 or 10 bit
const BIT_MODE_MASK: u8 = 0x0f;
/// PLL_SYS_DIV[7:4]: system divider, 0 means 16
const SYS_DIV_SHIFT: u8 = 4;
/// PLL_PRE_DIV[3:0]: pre-divider
const PRE_DIV_MASK: u8 = 0x0f;
/// PLL_PRE_DIV[4]: root divider, 0 = /1, 1 = /2
const ROOT_DIV_BIT: u8 = 0x10;
/// SCLK_ROOT_DIV[1:0]: index into [1, 2, 4, 8]
const SCLK_ROOT_DIV_MASK: u8 = 0x03;
const SCLK_ROOT_DIV_MAP: [u32; 4] = [1, 2, 4, 8];

/// REG16[4:3]: HTS bits 1:0
const HTS_LOW_MASK: u8 = 0x18;
const HTS_LOW_SHIFT: u8 = 3;
/// HOUTSIZE holds HTS bits 9:2
const HTS_HIGH_SHIFT: u8 = 2;
/// REG16[5]: VTS bit 0
const VTS_LOW_MASK: u8 = 0x20;
const VTS_LOW_SHIFT: u8 = 5;
/// VOUTSIZE holds VTS bits 8:1
const VTS_HIGH_SHIFT: u8 = 1;

/// Raw contents of the PLL configuration registers
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PllRegisters {
    pub bit_mode: u8,
    pub sys_div: u8,
    pub multiplier: u8,
    pub pre_div: u8,
    pub sclk_root_div: u8,
}

impl PllRegisters {
    /// Decode the PLL chain and compute sysclk (in 10 kHz units)
    pub fn sysclk(&self, xclk_hz: u32) -> Result<u32, ConfigError> {
        let bit_mode = self.bit_mode & BIT_MODE_MASK;
        let bit_div2x = match bit_mode {
            8 | 10 => u32::from(bit_mode / 2),
            other => return Err(ConfigError::UnsupportedBitMode(other)),
        };

        let sys_div = match self.sys_div >> SYS_DIV_SHIFT {
            0 => 16,
            n => u32::from(n),
        };
        let pre_div = u32::from(self.pre_div & PRE_DIV_MASK);
        if pre_div == 0 {
            return Err(ConfigError::ZeroPreDivider);
        }
        let root_div = if self.pre_div & ROOT_DIV_BIT != 0 { 2 } else { 1 };
        let sclk_root_div = SCLK_ROOT_DIV_MAP
            [(self.sclk_root_div & SCLK_ROOT_DIV_MASK) as usize];

        let xvclk = xclk_hz / XCLK_UNIT_HZ;
        let vco = xvclk * u32::from(self.multiplier) / pre_div;
        Ok(vco / sys_div / root_div * 2 / bit_div2x / sclk_root_div)
    }
}

/// HTS assembled from HOUTSIZE and REG16[4:3]
pub fn assemble_hts(hout_size: u8, reg16: u8) -> u16 {
    (u16::from(hout_size) << HTS_HIGH_SHIFT)
        + u16::from((reg16 & HTS_LOW_MASK) >> HTS_LOW_SHIFT)
}

/// VTS assembled from VOUTSIZE and REG16[5]
pub fn assemble_vts(vout_size: u8, reg16: u8) -> u16 {
    (u16::from(vout_size) << VTS_HIGH_SHIFT)
        + u16::from((reg16 & VTS_LOW_MASK) >> VTS_LOW_SHIFT)
}

/// Last computed timing snapshot
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Effective system clock in 10 kHz units
    pub sysclk: u32,
    /// Horizontal total size, pixel clocks per line
    pub hts: u16,
    /// Vertical total size, lines per frame
    pub vts: u16,
}

pub fn read_pll<B, D>(
    writer: &mut MaskedWriter<B, D>,
) -> Result<PllRegisters, Error<B::Error>>
where
    B: RegisterIo,
    D: DelayMs<u32>,
{
    Ok(PllRegisters {
        bit_mode: writer.read(Register::PllBitMode.addr())?,
        sys_div: writer.read(Register::PllSysDiv.addr())?,
        multiplier: writer.read(Register::PllMultiplier.addr())?,
        pre_div: writer.read(Register::PllPreDiv.addr())?,
        sclk_root_div: writer.read(Register::SclkRootDiv.addr())?,
    })
}

pub fn read_sysclk<B, D>(
    writer: &mut MaskedWriter<B, D>,
    xclk_hz: u32,
) -> Result<u32, Error<B::Error>>
where
    B: RegisterIo,
    D: DelayMs<u32>,
{
    let pll = read_pll(writer)?;
    match pll.sysclk(xclk_hz) {
        Ok(sysclk) => Ok(sysclk),
        Err(err) => {
            log::error!(
                "ov7740: cannot derive sysclk from {:?}: {:?}",
                pll,
                err
            );
            Err(err.into())
        }
    }
}

pub fn read_hts<B, D>(
    writer: &mut MaskedWriter<B, D>,
) -> Result<u16, Error<B::Error>>
where
    B: RegisterIo,
    D: DelayMs<u32>,
{
    let high = writer.read(Register::HOutSize.addr())?;
    let low = writer.read(Register::Reg16.addr())?;
    Ok(assemble_hts(high, low))
}

pub fn read_vts<B, D>(
    writer: &mut MaskedWriter<B, D>,
) -> Result<u16, Error<B::Error>>
where
    B: RegisterIo,
    D: DelayMs<u32>,
{
    let high = writer.read(Register::VOutSize.addr())?;
    let low = writer.read(Register::Reg16.addr())?;
    Ok(assemble_vts(high, low))
}

/// Write VTS: bits 8:1 to VOUTSIZE, bit 0 into REG16[5]
pub fn write_vts<B, D>(
    writer: &mut MaskedWriter<B, D>,
    vts: u16,
) -> Result<(), Error<B::Error>>
where
    B: RegisterIo,
    D: DelayMs<u32>,
{
    writer.write(Register::VOutSize.addr(), (vts >> VTS_HIGH_SHIFT) as u8)?;
    writer.update_bits(
        Register::Reg16.addr(),
        VTS_LOW_MASK,
        ((vts & 0x01) as u8) << VTS_LOW_SHIFT,
    )
}

/// Read back the full timing snapshot
pub fn read_timing<B, D>(
    writer: &mut MaskedWriter<B, D>,
    xclk_hz: u32,
) -> Result<Timing, Error<B::Error>>
where
    B: RegisterIo,
    D: DelayMs<u32>,
{
    let sysclk = read_sysclk(writer, xclk_hz)?;
    let hts = read_hts(writer)?;
    let vts = read_vts(writer)?;
    log::debug!("ov7740: sysclk {} hts {} vts {}", sysclk, hts, vts);
    Ok(Timing { sysclk, hts, vts })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pll() -> PllRegisters {
        PllRegisters {
            bit_mode: 0x1a, // 10 bit
            sys_div: 0x10,  // /1
            multiplier: 0x50,
            pre_div: 0x03,  // /3, root /1
            sclk_root_div: 0x01, // /2
        }
    }

    #[test]
    fn sysclk_integer_chain() {
        // 24 MHz -> 2400, * 80 / 3 = 64000, /1 /1 *2 /5 /2 = 12800
        assert_eq!(pll().sysclk(24_000_000), Ok(12_800));
    }

    #[test]
    fn sys_div_zero_means_sixteen() {
        let regs = PllRegisters { sys_div: 0x00, ..pll() };
        assert_eq!(regs.sysclk(24_000_000), Ok(64_000 / 16 * 2 / 5 / 2));
    }

    #[test]
    fn root_divider_halves() {
        let regs = PllRegisters { pre_div: 0x13, ..pll() };
        assert_eq!(regs.sysclk(24_000_000), Ok(6_400));
    }

    #[test]
    fn unsupported_bit_mode() {
        let regs = PllRegisters { bit_mode: 0x09, ..pll() };
        assert_eq!(
            regs.sysclk(24_000_000),
            Err(ConfigError::UnsupportedBitMode(9))
        );
    }

    #[test]
    fn zero_pre_divider() {
        let regs = PllRegisters { pre_div: 0x10, ..pll() };
        assert_eq!(regs.sysclk(24_000_000), Err(ConfigError::ZeroPreDivider));
    }

    #[test]
    fn hts_vts_borrow_reg16_bits() {
        assert_eq!(assemble_hts(200, 0x00), 800);
        assert_eq!(assemble_hts(200, 0x18), 803);
        assert_eq!(assemble_vts(250, 0x00), 500);
        assert_eq!(assemble_vts(250, 0x20), 501);
        // bits outside each field are ignored
        assert_eq!(assemble_hts(1, 0xe7), 4);
        assert_eq!(assemble_vts(1, 0xdf), 2);
    }
}
