//! In-memory sensor records for the monitoring shell
//!
//! Three simulated sensors, each carrying an infrared obstacle reading
//! and a water-level reading. Values change only through the simulate
//! operations; the display timer is a pure read.

use serde::{Deserialize, Serialize};

use crate::core::constants::{SENSOR_COUNT, WATER_SUBMERGED_THRESHOLD};
use crate::core::Role;

/// Derived status label shown next to each sensor.
///
/// One shared field per sensor: an infrared simulation overwrites a
/// water-derived status and vice versa. The last simulation wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorStatus {
    Normal,
    Obstacle,
    Dry,
    PartialLeak,
    FullySubmerged,
}

impl SensorStatus {
    /// Status derived from an infrared reading (0 = clear, 1 = obstacle)
    pub fn from_infrared(value: u8) -> Self {
        if value == 1 {
            Self::Obstacle
        } else {
            Self::Normal
        }
    }

    /// Status derived from a raw water-level reading
    pub fn from_water_level(value: u32) -> Self {
        if value == 0 {
            Self::Dry
        } else if value < WATER_SUBMERGED_THRESHOLD {
            Self::PartialLeak
        } else {
            Self::FullySubmerged
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Obstacle => "Obstacle",
            Self::Dry => "Dry",
            Self::PartialLeak => "Partial Leak",
            Self::FullySubmerged => "Fully Submerged",
        }
    }
}

impl std::fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sensor record: raw readings plus the derived status label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReading {
    /// 1-based sensor id as shown in the UI
    pub id: u32,
    /// Infrared obstacle reading, 0 or 1
    pub infrared: u8,
    /// Raw water-level reading, 0..=1024
    pub water_level: u32,
    pub status: SensorStatus,
}

impl SensorReading {
    fn new(id: u32) -> Self {
        Self {
            id,
            infrared: 0,
            water_level: 0,
            status: SensorStatus::Normal,
        }
    }
}

/// Application state for the monitoring window.
///
/// Owned by the window closures as `Rc<RefCell<MonitorState>>`; all
/// access happens on the GTK main thread.
#[derive(Debug)]
pub struct MonitorState {
    role: Role,
    sensors: Vec<SensorReading>,
}

impl MonitorState {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            sensors: (1..=SENSOR_COUNT as u32).map(SensorReading::new).collect(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn sensors(&self) -> &[SensorReading] {
        &self.sensors
    }

    /// Set a simulated infrared reading and rederive the status.
    ///
    /// `index` is 0-based; `value` is already constrained to 0..=1 by
    /// the input widget.
    pub fn simulate_infrared(&mut self, index: usize, value: u8) {
        let sensor = &mut self.sensors[index];
        sensor.infrared = value;
        sensor.status = SensorStatus::from_infrared(value);
    }

    /// Set a simulated water-level reading and rederive the status.
    ///
    /// `index` is 0-based; `value` is already constrained to 0..=1024 by
    /// the input widget.
    pub fn simulate_water(&mut self, index: usize, value: u32) {
        let sensor = &mut self.sensors[index];
        sensor.water_level = value;
        sensor.status = SensorStatus::from_water_level(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = MonitorState::new(Role::Technician);
        assert_eq!(state.sensors().len(), SENSOR_COUNT);
        for (i, sensor) in state.sensors().iter().enumerate() {
            assert_eq!(sensor.id, i as u32 + 1);
            assert_eq!(sensor.infrared, 0);
            assert_eq!(sensor.water_level, 0);
            assert_eq!(sensor.status, SensorStatus::Normal);
        }
    }

    #[test]
    fn test_infrared_status() {
        assert_eq!(SensorStatus::from_infrared(0), SensorStatus::Normal);
        assert_eq!(SensorStatus::from_infrared(1), SensorStatus::Obstacle);
    }

    #[test]
    fn test_water_thresholds() {
        assert_eq!(SensorStatus::from_water_level(0), SensorStatus::Dry);
        assert_eq!(SensorStatus::from_water_level(1), SensorStatus::PartialLeak);
        assert_eq!(SensorStatus::from_water_level(499), SensorStatus::PartialLeak);
        assert_eq!(SensorStatus::from_water_level(500), SensorStatus::FullySubmerged);
        assert_eq!(SensorStatus::from_water_level(1024), SensorStatus::FullySubmerged);
    }

    #[test]
    fn test_simulate_updates_only_target_sensor() {
        let mut state = MonitorState::new(Role::Engineer);
        state.simulate_water(1, 750);

        assert_eq!(state.sensors()[1].water_level, 750);
        assert_eq!(state.sensors()[1].status, SensorStatus::FullySubmerged);
        assert_eq!(state.sensors()[0].status, SensorStatus::Normal);
        assert_eq!(state.sensors()[2].status, SensorStatus::Normal);
    }

    #[test]
    fn test_status_field_is_shared_between_derivations() {
        // The last simulation wins; IR and water do not combine.
        let mut state = MonitorState::new(Role::Admin);

        state.simulate_water(0, 300);
        assert_eq!(state.sensors()[0].status, SensorStatus::PartialLeak);

        state.simulate_infrared(0, 1);
        assert_eq!(state.sensors()[0].status, SensorStatus::Obstacle);
        // The raw water reading survives even though its status was replaced
        assert_eq!(state.sensors()[0].water_level, 300);

        state.simulate_infrared(0, 0);
        assert_eq!(state.sensors()[0].status, SensorStatus::Normal);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(SensorStatus::PartialLeak.to_string(), "Partial Leak");
        assert_eq!(SensorStatus::FullySubmerged.to_string(), "Fully Submerged");
    }

    #[test]
    fn test_sensor_reading_serialization() {
        let mut state = MonitorState::new(Role::Admin);
        state.simulate_water(2, 500);

        let json = serde_json::to_string(&state.sensors()[2]).unwrap();
        assert!(json.contains("\"status\":\"fully_submerged\""));

        let parsed: SensorReading = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.water_level, 500);
        assert_eq!(parsed.status, SensorStatus::FullySubmerged);
    }
}
