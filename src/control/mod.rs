//! Control-loop building blocks — pure state logic, zero I/O.
//!
//! ```text
//!  InputSample ──▶ ButtonEdge ×3 ──▶ SystemState / ArmState ×2
//!                                            │
//!  moisture ×2 ─────────────────────▶ PumpChannel ×2 ──▶ Level ×2
//!                                            │
//!                               TickCounter (wrap → reset epochs)
//! ```
//!
//! Everything here is driven by [`ControlService`](crate::app::service::ControlService),
//! which owns the [`context::ControlContext`] and talks to hardware through
//! port traits.

pub mod context;
pub mod edge;
pub mod pump;
pub mod tick_counter;

use core::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Electrical level
// ---------------------------------------------------------------------------

/// Raw electrical level of a digital line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub fn from_high(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }

    pub fn is_high(self) -> bool {
        self == Self::High
    }
}

// ---------------------------------------------------------------------------
// Logical toggles
// ---------------------------------------------------------------------------

/// Master enable, flipped by the system button.  Gates all pump activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SystemState {
    #[default]
    Disabled,
    Enabled,
}

impl SystemState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Disabled => Self::Enabled,
            Self::Enabled => Self::Disabled,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

/// Per-pump manual arm flag, flipped by that pump's button.  Allows
/// automatic activation but never drives the output directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ArmState {
    #[default]
    Disarmed,
    Armed,
}

impl ArmState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Disarmed => Self::Armed,
            Self::Armed => Self::Disarmed,
        }
    }

    pub fn is_armed(self) -> bool {
        self == Self::Armed
    }
}

// ---------------------------------------------------------------------------
// Pump identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PumpId {
    One = 0,
    Two = 1,
}

impl PumpId {
    /// Number of pump channels on the board.
    pub const COUNT: usize = 2;

    /// Every pump, in evaluation order.
    pub const ALL: [Self; Self::COUNT] = [Self::One, Self::Two];

    /// Array index for per-pump tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PumpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "pump 1"),
            Self::Two => write!(f, "pump 2"),
        }
    }
}
