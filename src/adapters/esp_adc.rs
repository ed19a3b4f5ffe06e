//! ESP32 oneshot-ADC moisture source.
//!
//! Both probes sit on ADC1 (GPIO 32 = CH4, GPIO 33 = CH5) at 11 dB
//! attenuation.  Raw 12-bit samples are scaled to the 10-bit range the
//! dryness threshold is expressed in.

use esp_idf_hal::adc::ADC1;
use esp_idf_hal::adc::attenuation::DB_11;
use esp_idf_hal::adc::oneshot::config::AdcChannelConfig;
use esp_idf_hal::adc::oneshot::{AdcChannelDriver, AdcDriver};
use esp_idf_hal::gpio::{Gpio32, Gpio33};
use esp_idf_hal::peripheral::Peripheral;
use log::info;

use super::hardware::{MoistureSource, scale_adc};
use crate::control::PumpId;
use crate::error::{Error, Result, SensorError};

pub struct EspMoistureSensors<'d> {
    bed_1: AdcChannelDriver<'d, Gpio32, &'d AdcDriver<'d, ADC1>>,
    bed_2: AdcChannelDriver<'d, Gpio33, &'d AdcDriver<'d, ADC1>>,
}

impl<'d> EspMoistureSensors<'d> {
    pub fn new(
        adc: &'d AdcDriver<'d, ADC1>,
        bed_1: impl Peripheral<P = Gpio32> + 'd,
        bed_2: impl Peripheral<P = Gpio33> + 'd,
    ) -> Result<Self> {
        let config = AdcChannelConfig {
            attenuation: DB_11,
            ..Default::default()
        };
        let bed_1 = AdcChannelDriver::new(adc, bed_1, &config)
            .map_err(|_| Error::Init("ADC1 CH4 config failed"))?;
        let bed_2 = AdcChannelDriver::new(adc, bed_2, &config)
            .map_err(|_| Error::Init("ADC1 CH5 config failed"))?;
        info!("esp_adc: ADC1 configured (CH4=bed 1, CH5=bed 2)");
        Ok(Self { bed_1, bed_2 })
    }
}

impl MoistureSource for EspMoistureSensors<'_> {
    fn read(&mut self, pump: PumpId) -> Result<u16> {
        let raw = match pump {
            PumpId::One => self.bed_1.read_raw(),
            PumpId::Two => self.bed_2.read_raw(),
        }
        .map_err(|_| Error::Sensor(SensorError::AdcReadFailed))?;
        Ok(scale_adc(raw))
    }
}
