//! Minimum delays between lifecycle steps, in microseconds.
//!
//! Every value is a floor: the delay source may wait longer, but the next
//! step must not be issued before the delay has elapsed.

/// IOVCC ramp time before VCI is enabled.
pub const IOVCC_RAMP_US: u32 = 1_000;

/// Reset held high before the falling edge (tRPWIRES, >= 5 ms).
pub const RESET_HIGH_HOLD_US: u32 = 5_000;

/// Reset low pulse width (tRESETL, >= 10 us, 1 ms for reliability).
pub const RESET_LOW_PULSE_US: u32 = 1_000;

/// Settle time after reset is released (tRESETH, >= 5 ms, 10 ms for reliability).
pub const RESET_RELEASE_SETTLE_US: u32 = 10_000;

/// Settle time after exit sleep mode (tSLPOUT).
pub const SLEEP_OUT_SETTLE_US: u32 = 120_000;

/// Settle time after display on (tDISON).
pub const DISPLAY_ON_SETTLE_US: u32 = 10_000;

/// Settle time after display off (tDISOFF).
pub const DISPLAY_OFF_SETTLE_US: u32 = 50_000;

/// Settle time after enter sleep mode (tSLPIN).
pub const SLEEP_IN_SETTLE_US: u32 = 100_000;

/// Reset hold before VCI is cut when prepare fails.
pub const ROLLBACK_RESET_HOLD_US: u32 = 10_000;

/// VCI discharge before IOVCC is cut when prepare fails.
pub const ROLLBACK_VCI_OFF_US: u32 = 5_000;

/// Reset hold before VCI is cut on unprepare (tRESETL).
pub const POWER_OFF_RESET_HOLD_US: u32 = 1_000;

/// VCI discharge before IOVCC is cut on unprepare.
pub const POWER_OFF_VCI_OFF_US: u32 = 1_000;
