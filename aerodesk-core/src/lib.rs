pub mod aircraft;
pub mod render;
pub mod seatmap;

pub use aircraft::{AircraftConfiguration, CapacityReport};
pub use seatmap::{aisle_after, CollisionPolicy, DEFAULT_MAX_SEATS, SeatAssignment, SeatMap, SeatMapBuilder, SeatRow};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Seat class #{index} has an empty class name")]
    EmptyClassName { index: usize },
    #[error("Seat class '{class_name}' has invalid row {row}: rows start at 1")]
    InvalidRow { class_name: String, row: i32 },
    #[error("Seat class '{class_name}' ends at row {ending_row} before it starts at row {starting_row}")]
    InvalidRange {
        class_name: String,
        starting_row: i32,
        ending_row: i32,
    },
    #[error("Seat class '{class_name}' has no columns")]
    EmptyColumns { class_name: String },
    #[error("Seat class '{class_name}' has an empty column label at position {position}")]
    EmptyColumnLabel { class_name: String, position: usize },
    #[error("Seat {seat} is claimed by both '{first_class}' and '{second_class}'")]
    SeatCollision {
        seat: String,
        first_class: String,
        second_class: String,
    },
    #[error("Layout requests {requested} seats, more than the limit of {limit}")]
    TooManySeats { requested: u64, limit: usize },
    #[error("Invalid aircraft: {0}")]
    InvalidAircraft(String),
}

pub type CoreResult<T> = Result<T, ConfigurationError>;
