//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements             | Connects to                     |
//! |-------------|------------------------|---------------------------------|
//! | `hardware`  | InputPort, OutputPort  | embedded-hal GPIO pins          |
//! | `esp_adc`   | MoistureSource         | ESP32 ADC1 oneshot (espidf only)|
//! | `log_sink`  | EventSink              | Serial log output               |

#[cfg(feature = "espidf")]
pub mod esp_adc;
pub mod hardware;
pub mod log_sink;
