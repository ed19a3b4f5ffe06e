//! GPIO / peripheral pin assignments for the irrigator board (ESP32).
//!
//! Single source of truth — the firmware entry point references this module
//! rather than hard-coding pin numbers.  Change a pin here and it
//! propagates everywhere.

// ---------------------------------------------------------------------------
// Buttons (active-low momentary switches, internal pull-up)
// ---------------------------------------------------------------------------

/// Master enable toggle.
pub const SYSTEM_BUTTON_GPIO: i32 = 4;
/// Arms / disarms pump 1.
pub const PUMP_1_BUTTON_GPIO: i32 = 16;
/// Arms / disarms pump 2.
pub const PUMP_2_BUTTON_GPIO: i32 = 17;

// ---------------------------------------------------------------------------
// Pump outputs (relay / MOSFET gate, active HIGH)
// ---------------------------------------------------------------------------

pub const PUMP_1_GPIO: i32 = 25;
pub const PUMP_2_GPIO: i32 = 26;

// ---------------------------------------------------------------------------
// Soil moisture sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Resistive probe for bed 1.  ADC1 channel 4.
pub const MOISTURE_1_ADC_GPIO: i32 = 32;
/// Resistive probe for bed 2.  ADC1 channel 5.
pub const MOISTURE_2_ADC_GPIO: i32 = 33;

/// Native ADC resolution on the ESP32 (12-bit, 0 – 4095).
pub const ADC_NATIVE_BITS: u32 = 12;
/// Resolution the moisture thresholds are expressed in (10-bit, 0 – 1023).
pub const MOISTURE_SCALE_BITS: u32 = 10;
