use std::collections::BTreeMap;

use aerodesk_shared::SeatClassConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ConfigurationError, CoreResult};

/// What happens when two seat classes generate the same seat identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// The class defined later in the input silently takes the seat.
    #[default]
    LastWriteWins,
    /// Overlapping classes are a configuration error.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatAssignment {
    pub class_name: String,
    pub row: u32,
    pub column: String,
}

/// One cabin row of a class, columns left to right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatRow {
    pub row: u32,
    pub columns: Vec<String>,
    /// Index of the column the aisle gap follows, if any.
    pub aisle_after: Option<usize>,
}

impl SeatRow {
    pub fn seat_identifiers(&self) -> impl Iterator<Item = String> + '_ {
        self.columns.iter().map(move |column| seat_identifier(self.row, column))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatMap {
    pub seats_by_identifier: BTreeMap<String, SeatAssignment>,
    pub rows_by_class: BTreeMap<String, Vec<SeatRow>>,
}

impl SeatMap {
    pub fn seat_count(&self) -> usize {
        self.seats_by_identifier.len()
    }

    pub fn seat(&self, identifier: &str) -> Option<&SeatAssignment> {
        self.seats_by_identifier.get(identifier)
    }

    pub fn class_rows(&self, class_name: &str) -> Option<&[SeatRow]> {
        self.rows_by_class.get(class_name).map(Vec::as_slice)
    }
}

pub fn seat_identifier(row: u32, column: &str) -> String {
    format!("{}{}", row, column)
}

/// Aisle gap position for a row: after column `len / 2 - 1`, none below two columns.
pub fn aisle_after<S>(columns: &[S]) -> Option<usize> {
    if columns.len() < 2 {
        None
    } else {
        Some(columns.len() / 2 - 1)
    }
}

/// Seats a normalized class contributes before any overlap is resolved.
pub fn class_seat_count(class: &SeatClassConfig) -> u64 {
    let rows = (class.ending_row as i64 - class.starting_row as i64 + 1).max(0) as u64;
    rows.saturating_mul(class.columns.len() as u64)
}

/// Checks a seat class and returns it with trimmed names and uppercase columns.
pub fn normalize_seat_class(index: usize, class: &SeatClassConfig) -> CoreResult<SeatClassConfig> {
    let class_name = class.class_name.trim();
    if class_name.is_empty() {
        return Err(ConfigurationError::EmptyClassName { index });
    }

    for row in [class.starting_row, class.ending_row] {
        if row < 1 {
            return Err(ConfigurationError::InvalidRow {
                class_name: class_name.to_string(),
                row,
            });
        }
    }

    if class.ending_row < class.starting_row {
        return Err(ConfigurationError::InvalidRange {
            class_name: class_name.to_string(),
            starting_row: class.starting_row,
            ending_row: class.ending_row,
        });
    }

    if class.columns.is_empty() {
        return Err(ConfigurationError::EmptyColumns {
            class_name: class_name.to_string(),
        });
    }

    let columns = class
        .columns
        .iter()
        .enumerate()
        .map(|(position, column)| {
            let label = column.trim().to_uppercase();
            if label.is_empty() {
                Err(ConfigurationError::EmptyColumnLabel {
                    class_name: class_name.to_string(),
                    position,
                })
            } else {
                Ok(label)
            }
        })
        .collect::<CoreResult<Vec<_>>>()?;

    Ok(SeatClassConfig {
        class_name: class_name.to_string(),
        starting_row: class.starting_row,
        ending_row: class.ending_row,
        columns,
        auto_assign: class.auto_assign,
    })
}

/// Upper bound on seats generated by one build when none is configured.
pub const DEFAULT_MAX_SEATS: usize = 5_000;

/// Expands seat-class row ranges into a seat inventory and a row layout.
///
/// The builder holds nothing but its collision policy and seat ceiling, so
/// one instance can be shared freely and every call starts from scratch.
#[derive(Debug, Clone, Copy)]
pub struct SeatMapBuilder {
    policy: CollisionPolicy,
    max_seats: usize,
}

impl Default for SeatMapBuilder {
    fn default() -> Self {
        Self {
            policy: CollisionPolicy::default(),
            max_seats: DEFAULT_MAX_SEATS,
        }
    }
}

impl SeatMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn with_max_seats(mut self, max_seats: usize) -> Self {
        self.max_seats = max_seats;
        self
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    pub fn max_seats(&self) -> usize {
        self.max_seats
    }

    /// Builds the seat map. Every class is validated, and the total seat count
    /// checked against the ceiling, before any seat is generated, so an error
    /// never leaves a partial map behind.
    pub fn build(&self, seat_classes: &[SeatClassConfig]) -> CoreResult<SeatMap> {
        let classes = seat_classes
            .iter()
            .enumerate()
            .map(|(index, class)| normalize_seat_class(index, class))
            .collect::<CoreResult<Vec<_>>>()?;

        let requested = classes.iter().map(class_seat_count).fold(0u64, u64::saturating_add);
        if requested > self.max_seats as u64 {
            return Err(ConfigurationError::TooManySeats {
                requested,
                limit: self.max_seats,
            });
        }

        let mut map = SeatMap::default();

        for class in &classes {
            // Rows are >= 1 after normalization.
            let starting_row = class.starting_row as u32;
            let ending_row = class.ending_row as u32;
            let aisle = aisle_after(&class.columns);

            for row in starting_row..=ending_row {
                for column in &class.columns {
                    let identifier = seat_identifier(row, column);
                    let assignment = SeatAssignment {
                        class_name: class.class_name.clone(),
                        row,
                        column: column.clone(),
                    };

                    if let Some(previous) = map.seats_by_identifier.insert(identifier.clone(), assignment) {
                        match self.policy {
                            CollisionPolicy::Reject => {
                                return Err(ConfigurationError::SeatCollision {
                                    seat: identifier,
                                    first_class: previous.class_name,
                                    second_class: class.class_name.clone(),
                                });
                            }
                            CollisionPolicy::LastWriteWins => {
                                debug!(
                                    seat = %identifier,
                                    from = %previous.class_name,
                                    to = %class.class_name,
                                    "Seat reassigned by a later class"
                                );
                            }
                        }
                    }
                }

                map.rows_by_class
                    .entry(class.class_name.clone())
                    .or_default()
                    .push(SeatRow {
                        row,
                        columns: class.columns.clone(),
                        aisle_after: aisle,
                    });
            }
        }

        debug!(
            classes = classes.len(),
            seats = map.seat_count(),
            "Built seat map"
        );

        Ok(map)
    }
}
