use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One cabin partition as the admin console submits it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeatClassConfig {
    pub class_name: String,
    pub starting_row: i32,
    pub ending_row: i32,
    pub columns: Vec<String>,
    #[serde(default)]
    pub auto_assign: bool,
}

impl SeatClassConfig {
    pub fn new(class_name: impl Into<String>, starting_row: i32, ending_row: i32, columns: &[&str]) -> Self {
        Self {
            class_name: class_name.into(),
            starting_row,
            ending_row,
            columns: columns.iter().map(|c| c.to_string()).collect(),
            auto_assign: false,
        }
    }

    pub fn auto_assign(mut self, auto_assign: bool) -> Self {
        self.auto_assign = auto_assign;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AircraftInput {
    pub name: String,
    pub manufacturer: String,
    pub capacity: i32,
    pub airline_id: Uuid,
}

/// Aircraft create/update body: the aircraft record plus its seat classes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AircraftPayload {
    pub aircraft: AircraftInput,
    pub seat_classes: Vec<SeatClassConfig>,
}
