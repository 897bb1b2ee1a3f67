use aerodesk_shared::{AircraftInput, AircraftPayload, SeatClassConfig};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::seatmap::{normalize_seat_class, SeatMap, SeatMapBuilder};
use crate::{ConfigurationError, CoreResult};

/// An aircraft record with its cabin layout, checked once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AircraftConfiguration {
    aircraft: AircraftInput,
    seat_classes: Vec<SeatClassConfig>,
}

/// Declared capacity versus the seats the layout actually generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityReport {
    pub declared: u32,
    pub generated: u32,
    pub matches: bool,
}

impl AircraftConfiguration {
    pub fn new(aircraft: AircraftInput, seat_classes: Vec<SeatClassConfig>) -> CoreResult<Self> {
        let name = aircraft.name.trim();
        if name.is_empty() {
            return Err(ConfigurationError::InvalidAircraft("name is required".to_string()));
        }

        let manufacturer = aircraft.manufacturer.trim();
        if manufacturer.is_empty() {
            return Err(ConfigurationError::InvalidAircraft(
                "manufacturer is required".to_string(),
            ));
        }

        if aircraft.capacity < 0 {
            return Err(ConfigurationError::InvalidAircraft(format!(
                "capacity must not be negative, got {}",
                aircraft.capacity
            )));
        }

        let seat_classes = seat_classes
            .iter()
            .enumerate()
            .map(|(index, class)| normalize_seat_class(index, class))
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Self {
            aircraft: AircraftInput {
                name: name.to_string(),
                manufacturer: manufacturer.to_string(),
                ..aircraft
            },
            seat_classes,
        })
    }

    pub fn name(&self) -> &str {
        &self.aircraft.name
    }

    pub fn manufacturer(&self) -> &str {
        &self.aircraft.manufacturer
    }

    pub fn capacity(&self) -> u32 {
        // Non-negative once constructed.
        self.aircraft.capacity as u32
    }

    pub fn airline_id(&self) -> Uuid {
        self.aircraft.airline_id
    }

    pub fn seat_classes(&self) -> &[SeatClassConfig] {
        &self.seat_classes
    }

    pub fn seat_map(&self, builder: &SeatMapBuilder) -> CoreResult<SeatMap> {
        builder.build(&self.seat_classes)
    }

    pub fn capacity_report(&self, seat_map: &SeatMap) -> CapacityReport {
        let generated = seat_map.seat_count() as u32;
        CapacityReport {
            declared: self.capacity(),
            generated,
            matches: generated == self.capacity(),
        }
    }
}

impl TryFrom<AircraftPayload> for AircraftConfiguration {
    type Error = ConfigurationError;

    fn try_from(payload: AircraftPayload) -> Result<Self, Self::Error> {
        Self::new(payload.aircraft, payload.seat_classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(capacity: i32) -> AircraftInput {
        AircraftInput {
            name: " A220-300 ".to_string(),
            manufacturer: "Airbus".to_string(),
            capacity,
            airline_id: Uuid::new_v4(),
        }
    }

    fn classes() -> Vec<SeatClassConfig> {
        vec![
            SeatClassConfig::new("Business", 1, 3, &["a", "c", "d", "f"]),
            SeatClassConfig::new("Economy", 4, 23, &["A", "B", "C", "D", "E"]).auto_assign(true),
        ]
    }

    #[test]
    fn test_configuration_normalizes_input() {
        let config = AircraftConfiguration::new(input(112), classes()).unwrap();

        assert_eq!(config.name(), "A220-300");
        assert_eq!(config.seat_classes()[0].columns, vec!["A", "C", "D", "F"]);
        assert!(config.seat_classes()[1].auto_assign);
    }

    #[test]
    fn test_capacity_report() {
        let config = AircraftConfiguration::new(input(112), classes()).unwrap();
        let map = config.seat_map(&SeatMapBuilder::new()).unwrap();

        assert_eq!(
            config.capacity_report(&map),
            CapacityReport { declared: 112, generated: 112, matches: true }
        );

        let config = AircraftConfiguration::new(input(120), classes()).unwrap();
        let report = config.capacity_report(&map);
        assert!(!report.matches);
        assert_eq!(report.generated, 112);
    }

    #[test]
    fn test_rejects_bad_aircraft_fields() {
        let mut aircraft = input(100);
        aircraft.manufacturer = String::new();
        assert!(matches!(
            AircraftConfiguration::new(aircraft, classes()),
            Err(ConfigurationError::InvalidAircraft(_))
        ));

        assert!(matches!(
            AircraftConfiguration::new(input(-1), classes()),
            Err(ConfigurationError::InvalidAircraft(_))
        ));
    }

    #[test]
    fn test_rejects_bad_seat_class_at_construction() {
        let payload = AircraftPayload {
            aircraft: input(10),
            seat_classes: vec![SeatClassConfig::new("Economy", 9, 2, &["A"])],
        };

        assert!(matches!(
            AircraftConfiguration::try_from(payload),
            Err(ConfigurationError::InvalidRange { .. })
        ));
    }
}
