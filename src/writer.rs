/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Masked, delayed register writes

use embedded_hal::blocking::delay::DelayMs;

use crate::bus::RegisterIo;
use crate::Error;

/// One step of a register program.
///
/// A zero `mask` is an unconditional write of `value`. Otherwise only the
/// bits set in `mask` are replaced, the rest are taken from a prior read.
/// `delay_ms` is the settle time honoured before the next op.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RegisterOp {
    pub address: u16,
    pub value: u8,
    pub mask: u8,
    pub delay_ms: u32,
}

impl RegisterOp {
    pub const fn new(address: u16, value: u8, mask: u8, delay_ms: u32) -> Self {
        Self {
            address,
            value,
            mask,
            delay_ms,
        }
    }

    /// Unconditional write, no settle time
    pub const fn write(address: u16, value: u8) -> Self {
        Self::new(address, value, 0, 0)
    }

    /// Merge `value` into `current` under this op's mask
    pub fn merge(&self, current: u8) -> u8 {
        (current & !self.mask) | (self.value & self.mask)
    }
}

/// Owns the register bus plus the delay source used for settle times.
///
/// Every higher layer goes through this type; a bus failure surfaces
/// immediately with the failing address and is never retried.
pub struct MaskedWriter<B, D> {
    bus: B,
    delay: D,
}

impl<B, D> MaskedWriter<B, D>
where
    B: RegisterIo,
    D: DelayMs<u32>,
{
    pub fn new(bus: B, delay: D) -> Self {
        Self { bus, delay }
    }

    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    pub fn read(&mut self, address: u16) -> Result<u8, Error<B::Error>> {
        self.bus
            .read_register(address)
            .map_err(|source| Error::Bus { address, source })
    }

    pub fn write(
        &mut self,
        address: u16,
        value: u8,
    ) -> Result<(), Error<B::Error>> {
        self.bus
            .write_register(address, value)
            .map_err(|source| Error::Bus { address, source })
    }

    /// Read-modify-write of the bits in `mask`
    pub fn update_bits(
        &mut self,
        address: u16,
        mask: u8,
        value: u8,
    ) -> Result<(), Error<B::Error>> {
        self.apply_op(&RegisterOp::new(address, value, mask, 0))
    }

    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Apply a single op, honouring its mask and settle delay
    pub fn apply_op(&mut self, op: &RegisterOp) -> Result<(), Error<B::Error>> {
        let value = if op.mask == 0 {
            op.value
        } else {
            let current = self.read(op.address)?;
            op.merge(current)
        };
        self.write(op.address, value)?;
        if op.delay_ms > 0 {
            self.delay.delay_ms(op.delay_ms);
        }
        Ok(())
    }

    /// Apply ops strictly in order, stopping at the first failure.
    ///
    /// The error names the index and address of the op that failed; nothing
    /// after it has been issued.
    pub fn apply_sequence<I>(&mut self, ops: I) -> Result<(), Error<B::Error>>
    where
        I: IntoIterator<Item = RegisterOp>,
    {
        for (index, op) in ops.into_iter().enumerate() {
            if let Err(err) = self.apply_op(&op) {
                return Err(match err {
                    Error::Bus { address, source } => Error::Sequence {
                        index,
                        address,
                        source,
                    },
                    other => other,
                });
            }
        }
        Ok(())
    }
}
