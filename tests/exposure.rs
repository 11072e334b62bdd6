mod common;

use common::{Rig, TestSensor};
use ov7740_sccb::power::NoRegulators;
use ov7740_sccb::registers::Register;
use ov7740_sccb::{
    AeThresholds, Config, ConfigError, Error, FrameRate, LightFrequency, Mode,
    Timing,
};

fn streaming(rig: &Rig) -> TestSensor {
    let mut sensor = rig.sensor();
    sensor.switch_to(Mode::Vga640x480, FrameRate::Fps30).unwrap();
    rig.bus.clear_writes();
    sensor
}

/// PLL set up so a 24 MHz XCLK decodes to sysclk 2400; HTS 800, VTS 500
fn seed_timing(rig: &Rig) {
    rig.bus.set(Register::PllBitMode.addr(), 0x08);
    rig.bus.set(Register::PllSysDiv.addr(), 0x10);
    rig.bus.set(Register::PllMultiplier.addr(), 0x02);
    rig.bus.set(Register::PllPreDiv.addr(), 0x01);
    rig.bus.set(Register::SclkRootDiv.addr(), 0x00);
    rig.bus.set(Register::HOutSize.addr(), 200);
    rig.bus.set(Register::VOutSize.addr(), 250);
    rig.bus.set(Register::Reg16.addr(), 0x00);
}

#[test]
fn ae_target_writes_six_registers() {
    let rig = Rig::new();
    let mut sensor = streaming(&rig);

    let ae = sensor.set_exposure_target(52).unwrap();
    assert_eq!((ae.low, ae.high, ae.fast_low, ae.fast_high), (47, 56, 23, 112));
    assert_eq!(
        rig.bus.writes(),
        vec![
            (Register::StableHigh.addr(), 56),
            (Register::StableLow.addr(), 47),
            (Register::StableHigh2.addr(), 56),
            (Register::StableLow2.addr(), 47),
            (Register::FastHigh.addr(), 112),
            (Register::FastLow.addr(), 23),
        ]
    );
    assert_eq!(sensor.state().ae(), ae);
}

fn hardware_window(rig: &Rig) -> (u8, u8, u8, u8, u8, u8) {
    (
        rig.bus.get(Register::StableHigh.addr()),
        rig.bus.get(Register::StableLow.addr()),
        rig.bus.get(Register::StableHigh2.addr()),
        rig.bus.get(Register::StableLow2.addr()),
        rig.bus.get(Register::FastHigh.addr()),
        rig.bus.get(Register::FastLow.addr()),
    )
}

fn expected_window(ae: AeThresholds) -> (u8, u8, u8, u8, u8, u8) {
    (ae.high, ae.low, ae.high, ae.low, ae.fast_high, ae.fast_low)
}

#[test]
fn configured_ae_target_reaches_the_sensor() {
    let rig = Rig::new();
    let config = Config {
        ae_target: 80,
        ..Config::default()
    };
    let mut sensor = rig.sensor_with(config);
    sensor.probe(&mut NoRegulators).unwrap();
    sensor.set_power(true);

    let ae = sensor.state().ae();
    assert_eq!((ae.target, ae.low, ae.high), (80, 73, 86));
    assert_eq!((ae.fast_low, ae.fast_high), (36, 172));
    assert_eq!(hardware_window(&rig), expected_window(ae));
}

#[test]
fn ae_target_survives_mode_switch() {
    let rig = Rig::new();
    let mut sensor = streaming(&rig);
    let ae = sensor.set_exposure_target(60).unwrap();

    sensor.switch_to(Mode::Qvga320x240, FrameRate::Fps60).unwrap();
    assert_eq!(sensor.state().ae(), ae);
    assert_eq!(hardware_window(&rig), expected_window(ae));
}

#[test]
fn timing_is_read_back_and_cached() {
    let rig = Rig::new();
    let mut sensor = streaming(&rig);
    seed_timing(&rig);
    assert_eq!(sensor.state().timing(), None);

    let timing = sensor.refresh_timing().unwrap();
    assert_eq!(
        timing,
        Timing {
            sysclk: 2_400,
            hts: 800,
            vts: 500
        }
    );
    assert_eq!(sensor.state().timing(), Some(timing));
    assert!(rig.bus.writes().is_empty());

    sensor.set_power(false);
    assert_eq!(sensor.state().timing(), None);
}

#[test]
fn banding_filter_from_fresh_timing() {
    let rig = Rig::new();
    let mut sensor = streaming(&rig);
    seed_timing(&rig);

    let filter = sensor.set_banding_filter().unwrap();
    let step60: u32 = 2_400 * 100 / 800 * 100 / 120;
    let step50: u32 = 2_400 * 100 / 800;
    assert_eq!(u32::from(filter.hz60.step), step60);
    assert_eq!(u32::from(filter.hz50.step), step50);
    assert_eq!(u32::from(filter.hz60.max_bands), (500 - 4) / step60);
    assert_eq!(u32::from(filter.hz50.max_bands), (500 - 4) / step50);

    assert_eq!(
        rig.bus.writes(),
        vec![
            (Register::B60StepHigh.addr(), 0x00),
            (Register::B60StepLow.addr(), 250),
            (Register::B60MaxBands.addr(), 1),
            (Register::B50StepHigh.addr(), 0x01),
            (Register::B50StepLow.addr(), 0x2c),
            (Register::B50MaxBands.addr(), 1),
        ]
    );
}

#[test]
fn unsupported_bit_mode_aborts_banding() {
    let rig = Rig::new();
    let mut sensor = streaming(&rig);
    seed_timing(&rig);
    rig.bus.set(Register::PllBitMode.addr(), 0x09);

    assert!(matches!(
        sensor.set_banding_filter(),
        Err(Error::Configuration(ConfigError::UnsupportedBitMode(9)))
    ));
    assert!(rig.bus.writes().is_empty());
    assert_eq!(sensor.state().timing(), None);

    // not fatal for the device
    sensor.set_night_mode(true).unwrap();
}

#[test]
fn zero_hts_is_a_configuration_error() {
    let rig = Rig::new();
    let mut sensor = streaming(&rig);
    seed_timing(&rig);
    rig.bus.set(Register::HOutSize.addr(), 0);

    assert!(matches!(
        sensor.set_banding_filter(),
        Err(Error::Configuration(ConfigError::ZeroHts))
    ));
    assert!(rig.bus.writes().is_empty());
}

#[test]
fn night_mode_touches_one_bit() {
    let rig = Rig::new();
    let mut sensor = streaming(&rig);
    rig.bus.set(Register::AecCtrl.addr(), 0xf1);

    sensor.set_night_mode(true).unwrap();
    assert_eq!(rig.bus.get(Register::AecCtrl.addr()), 0xf5);
    assert!(sensor.state().night_mode());

    sensor.set_night_mode(false).unwrap();
    assert_eq!(rig.bus.get(Register::AecCtrl.addr()), 0xf1);
    assert!(!sensor.state().night_mode());
}

#[test]
fn ae_ag_enable_field() {
    let rig = Rig::new();
    let mut sensor = streaming(&rig);
    rig.bus.set(Register::AeAgCtrl.addr(), 0x10);

    sensor.set_ae_ag_enable(false).unwrap();
    assert_eq!(rig.bus.get(Register::AeAgCtrl.addr()), 0x13);
    sensor.set_ae_ag_enable(true).unwrap();
    assert_eq!(rig.bus.get(Register::AeAgCtrl.addr()), 0x10);
}

#[test]
fn light_frequency_manual_and_auto() {
    let rig = Rig::new();
    let mut sensor = streaming(&rig);

    rig.bus.set(Register::LightManual.addr(), 0x80);
    rig.bus.set(Register::LightCtrl.addr(), 0x04);
    assert_eq!(sensor.light_frequency().unwrap(), LightFrequency::Hz50);
    rig.bus.set(Register::LightCtrl.addr(), 0x00);
    assert_eq!(sensor.light_frequency().unwrap(), LightFrequency::Hz60);

    // auto detection ignores the manual selection
    rig.bus.set(Register::LightManual.addr(), 0x00);
    rig.bus.set(Register::LightCtrl.addr(), 0x04);
    rig.bus.set(Register::LightStatus.addr(), 0x01);
    assert_eq!(sensor.light_frequency().unwrap().hz(), 50);
    rig.bus.set(Register::LightStatus.addr(), 0x00);
    assert_eq!(sensor.light_frequency().unwrap().hz(), 60);
}

#[test]
fn shutter_and_gain() {
    let rig = Rig::new();
    let mut sensor = streaming(&rig);

    sensor.set_shutter(0x1234).unwrap();
    assert_eq!(rig.bus.get(Register::AecHigh.addr()), 0x12);
    assert_eq!(rig.bus.get(Register::AecLow.addr()), 0x34);
    assert_eq!(sensor.shutter().unwrap(), 0x1234);

    rig.bus.set(Register::GainHigh.addr(), 0xff);
    rig.bus.set(Register::GainLow.addr(), 0x20);
    assert_eq!(sensor.gain16().unwrap(), 0x320);

    rig.bus.clear_writes();
    assert!(matches!(sensor.set_gain16(32), Err(Error::Unsupported)));
    assert!(rig.bus.writes().is_empty());
}

#[test]
fn vts_write_preserves_neighbouring_bits() {
    let rig = Rig::new();
    let mut sensor = streaming(&rig);
    seed_timing(&rig);
    rig.bus.set(Register::Reg16.addr(), 0x18);

    sensor.set_vts(501).unwrap();
    assert_eq!(rig.bus.get(Register::VOutSize.addr()), 250);
    assert_eq!(rig.bus.get(Register::Reg16.addr()), 0x38);

    let timing = sensor.refresh_timing().unwrap();
    assert_eq!(timing.vts, 501);
    assert_eq!(timing.hts, 803);
}
