#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use embedded_hal::blocking::delay::DelayMs;
use ov7740_sccb::power::{
    ClockError, MasterClock, PinError, PowerLines, Rail, RegulatorError,
    Regulators,
};
use ov7740_sccb::registers::{
    Register, MANUFACTURER_ID_HIGH, MANUFACTURER_ID_LOW,
};
use ov7740_sccb::{Config, Ov7740, RegisterIo};

#[derive(Debug, PartialEq)]
pub struct BusFault;

#[derive(Default)]
pub struct RegisterFile {
    pub regs: HashMap<u16, u8>,
    pub writes: Vec<(u16, u8)>,
    pub transactions: usize,
    /// Transaction number (reads and writes, from zero) that fails
    pub fail_at: Option<usize>,
}

/// In-memory sensor register file shared between the test and the driver
#[derive(Clone, Default)]
pub struct FakeBus(pub Rc<RefCell<RegisterFile>>);

impl FakeBus {
    /// Responds to the identity registers like a real part
    pub fn ov7740() -> Self {
        let bus = FakeBus::default();
        bus.set(Register::Midh.addr(), MANUFACTURER_ID_HIGH);
        bus.set(Register::Midl.addr(), MANUFACTURER_ID_LOW);
        bus
    }

    pub fn set(&self, address: u16, value: u8) {
        self.0.borrow_mut().regs.insert(address, value);
    }

    pub fn get(&self, address: u16) -> u8 {
        *self.0.borrow().regs.get(&address).unwrap_or(&0)
    }

    pub fn writes(&self) -> Vec<(u16, u8)> {
        self.0.borrow().writes.clone()
    }

    pub fn clear_writes(&self) {
        self.0.borrow_mut().writes.clear();
    }

    pub fn transactions(&self) -> usize {
        self.0.borrow().transactions
    }

    /// Fail the `n`th transaction from now
    pub fn fail_in(&self, n: usize) {
        let mut file = self.0.borrow_mut();
        file.fail_at = Some(file.transactions + n);
    }

    fn tick(&self) -> Result<(), BusFault> {
        let mut file = self.0.borrow_mut();
        let n = file.transactions;
        file.transactions += 1;
        if file.fail_at == Some(n) {
            Err(BusFault)
        } else {
            Ok(())
        }
    }
}

impl RegisterIo for FakeBus {
    type Error = BusFault;

    fn read_register(&mut self, address: u16) -> Result<u8, BusFault> {
        self.tick()?;
        Ok(self.get(address))
    }

    fn write_register(
        &mut self,
        address: u16,
        value: u8,
    ) -> Result<(), BusFault> {
        self.tick()?;
        let mut file = self.0.borrow_mut();
        file.writes.push((address, value));
        file.regs.insert(address, value);
        Ok(())
    }
}

/// Records requested sleeps instead of sleeping
#[derive(Clone, Default)]
pub struct FakeDelay(pub Rc<RefCell<Vec<u32>>>);

impl FakeDelay {
    pub fn total_ms(&self) -> u64 {
        self.0.borrow().iter().map(|ms| u64::from(*ms)).sum()
    }
}

impl DelayMs<u32> for FakeDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().push(ms);
    }
}

#[derive(Default)]
pub struct ClockLog {
    pub rate: Option<u32>,
    pub enabled: bool,
    pub reject_rate: bool,
}

#[derive(Clone, Default)]
pub struct FakeClock(pub Rc<RefCell<ClockLog>>);

impl FakeClock {
    pub fn enabled(&self) -> bool {
        self.0.borrow().enabled
    }

    pub fn rate(&self) -> Option<u32> {
        self.0.borrow().rate
    }
}

impl MasterClock for FakeClock {
    fn set_rate(&mut self, hz: u32) -> Result<(), ClockError> {
        let mut log = self.0.borrow_mut();
        if log.reject_rate {
            return Err(ClockError);
        }
        log.rate = Some(hz);
        Ok(())
    }

    fn enable(&mut self) {
        self.0.borrow_mut().enabled = true;
    }

    fn disable(&mut self) {
        self.0.borrow_mut().enabled = false;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LineEvent {
    PowerDown(bool),
    Reset(bool),
}

#[derive(Clone, Default)]
pub struct FakeLines(pub Rc<RefCell<Vec<LineEvent>>>);

impl FakeLines {
    pub fn events(&self) -> Vec<LineEvent> {
        self.0.borrow().clone()
    }
}

impl PowerLines for FakeLines {
    fn set_power_down(&mut self, asserted: bool) -> Result<(), PinError> {
        self.0.borrow_mut().push(LineEvent::PowerDown(asserted));
        Ok(())
    }

    fn set_reset(&mut self, asserted: bool) -> Result<(), PinError> {
        self.0.borrow_mut().push(LineEvent::Reset(asserted));
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SupplyEvent {
    Enable(Rail, u32),
    Disable(Rail),
}

#[derive(Default)]
pub struct FakeSupplies {
    pub events: Vec<SupplyEvent>,
    pub absent: Vec<Rail>,
    pub failing: Vec<Rail>,
}

impl Regulators for FakeSupplies {
    fn enable(
        &mut self,
        rail: Rail,
        microvolts: u32,
    ) -> Result<(), RegulatorError> {
        if self.absent.contains(&rail) {
            return Err(RegulatorError::Absent);
        }
        self.events.push(SupplyEvent::Enable(rail, microvolts));
        if self.failing.contains(&rail) {
            return Err(RegulatorError::Failed);
        }
        Ok(())
    }

    fn disable(&mut self, rail: Rail) {
        self.events.push(SupplyEvent::Disable(rail));
    }
}

pub type TestSensor = Ov7740<FakeBus, FakeDelay, FakeClock, FakeLines>;

pub struct Rig {
    pub bus: FakeBus,
    pub delay: FakeDelay,
    pub clock: FakeClock,
    pub lines: FakeLines,
}

impl Rig {
    pub fn new() -> Self {
        Self {
            bus: FakeBus::ov7740(),
            delay: FakeDelay::default(),
            clock: FakeClock::default(),
            lines: FakeLines::default(),
        }
    }

    pub fn sensor(&self) -> TestSensor {
        self.sensor_with(Config::default())
    }

    pub fn sensor_with(&self, config: Config) -> TestSensor {
        Ov7740::new(
            self.bus.clone(),
            self.delay.clone(),
            self.clock.clone(),
            self.lines.clone(),
            config,
        )
    }
}
