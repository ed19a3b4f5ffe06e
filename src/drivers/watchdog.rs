//! Task Watchdog Timer (TWDT) driver.
//!
//! Wraps the ESP-IDF TWDT API to reset the board if the control loop
//! stalls.  A stuck loop would otherwise leave a pump output latched high
//! with no run-duration enforcement.
//!
//! The control loop must call `feed()` once per tick.

#[cfg(feature = "espidf")]
use esp_idf_svc::sys::*;

use log::info;

/// Stall timeout.  Several orders of magnitude above one tick.
pub const WATCHDOG_TIMEOUT_MS: u32 = 5_000;

pub struct Watchdog {
    #[cfg(feature = "espidf")]
    subscribed: bool,
    feeds: u64,
}

impl Default for Watchdog {
    fn default() -> Self {
        Self::new()
    }
}

impl Watchdog {
    /// Initialise and subscribe the current task to the TWDT.
    pub fn new() -> Self {
        #[cfg(feature = "espidf")]
        {
            // SAFETY: called once from the main task before the loop starts.
            unsafe {
                let cfg = esp_task_wdt_config_t {
                    timeout_ms: WATCHDOG_TIMEOUT_MS,
                    idle_core_mask: 0,
                    trigger_panic: true,
                };
                let ret = esp_task_wdt_reconfigure(&cfg);
                if ret != ESP_OK {
                    log::warn!(
                        "TWDT reconfigure returned {} (may already be configured)",
                        ret
                    );
                }

                let ret = esp_task_wdt_add(core::ptr::null_mut());
                let subscribed = ret == ESP_OK;
                if subscribed {
                    info!(
                        "Watchdog: subscribed ({}ms timeout, panic on trigger)",
                        WATCHDOG_TIMEOUT_MS
                    );
                } else {
                    log::warn!("Watchdog: failed to subscribe ({})", ret);
                }

                Self {
                    subscribed,
                    feeds: 0,
                }
            }
        }

        #[cfg(not(feature = "espidf"))]
        {
            info!("Watchdog(sim): no-op");
            Self { feeds: 0 }
        }
    }

    /// Feed the watchdog.
    pub fn feed(&mut self) {
        #[cfg(feature = "espidf")]
        {
            if self.subscribed {
                // SAFETY: resets the TWDT for the subscribed calling task.
                unsafe {
                    esp_task_wdt_reset();
                }
            }
        }
        self.feeds = self.feeds.wrapping_add(1);
    }

    /// Number of feeds since construction.
    pub fn feeds(&self) -> u64 {
        self.feeds
    }
}
