//! Shared constants for the application

use std::time::Duration;

/// Number of simulated pipeline sensors
pub const SENSOR_COUNT: usize = 3;

/// Interval between display refreshes (1 second)
pub const DISPLAY_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Maximum raw water-level reading (10-bit ADC range)
pub const WATER_LEVEL_MAX: u32 = 1024;

/// Water-level readings at or above this are reported as fully submerged
pub const WATER_SUBMERGED_THRESHOLD: u32 = 500;
