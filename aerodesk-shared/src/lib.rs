pub mod models;

pub use models::aircraft::{AircraftInput, AircraftPayload, SeatClassConfig};
