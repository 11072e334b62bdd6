/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Single-register access to the sensor

/// Default 7-bit bus address (0x42 write / 0x43 read on the wire)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x21;

/// Byte-wide register access.
///
/// Addresses are generic: the implementation decides how wide addresses are
/// framed on the wire. No masking and no retries happen at this level.
pub trait RegisterIo {
    type Error;

    fn read_register(&mut self, address: u16) -> Result<u8, Self::Error>;

    fn write_register(
        &mut self,
        address: u16,
        value: u8,
    ) -> Result<(), Self::Error>;
}

impl<T> RegisterIo for &mut T
where
    T: RegisterIo + ?Sized,
{
    type Error = T::Error;

    fn read_register(&mut self, address: u16) -> Result<u8, Self::Error> {
        (**self).read_register(address)
    }

    fn write_register(
        &mut self,
        address: u16,
        value: u8,
    ) -> Result<(), Self::Error> {
        (**self).write_register(address, value)
    }
}

/// SCCB (OmniVision's I2C dialect) transport
pub struct Sccb<I2C> {
    base_address: u8,
    i2c: I2C,
}

impl<I2C, CommE> Sccb<I2C>
where
    I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
        + embedded_hal::blocking::i2c::Read<Error = CommE>,
{
    /// Create a new instance with an i2c address:
    /// May use DEFAULT_I2C_ADDRESS if in doubt.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            base_address: address,
            i2c,
        }
    }

    pub fn default(i2c: I2C) -> Self {
        Self::new(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Give the underlying bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Register addresses above 0xFF go out as two big-endian bytes
    fn address_bytes(reg: u16, buf: &mut [u8; 3]) -> usize {
        if reg <= 0xFF {
            buf[0] = reg as u8;
            1
        } else {
            buf[0] = (reg >> 8) as u8;
            buf[1] = (reg & 0xFF) as u8;
            2
        }
    }
}

impl<I2C, CommE> RegisterIo for Sccb<I2C>
where
    I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
        + embedded_hal::blocking::i2c::Read<Error = CommE>,
{
    type Error = CommE;

    fn read_register(&mut self, address: u16) -> Result<u8, CommE> {
        // SCCB has no repeated start: address phase, then a separate read
        let mut cmd_buf = [0u8; 3];
        let len = Self::address_bytes(address, &mut cmd_buf);
        let mut recv_buf = [0u8];
        self.i2c.write(self.base_address, &cmd_buf[..len])?;
        self.i2c.read(self.base_address, &mut recv_buf)?;
        Ok(recv_buf[0])
    }

    fn write_register(&mut self, address: u16, value: u8) -> Result<(), CommE> {
        let mut write_buf = [0u8; 3];
        let len = Self::address_bytes(address, &mut write_buf);
        write_buf[len] = value;
        self.i2c.write(self.base_address, &write_buf[..=len])
    }
}
