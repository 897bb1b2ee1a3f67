use aerodesk_shared::SeatClassConfig;

use crate::aircraft::AircraftConfiguration;
use crate::seatmap::{aisle_after, seat_identifier, SeatMap};

const SEAT_SEPARATOR: &str = " ";
const AISLE_GAP: &str = "   ";

/// Plain-text cabin diagram: an aircraft header, then one block per seat
/// class in cabin order, one line per row, with a wider gap at the aisle.
///
/// `seat_map` must come from the same aircraft; it supplies the generated seat
/// count shown next to the declared capacity when the two differ.
pub fn render_text(aircraft: &AircraftConfiguration, seat_map: &SeatMap) -> String {
    let capacity = aircraft.capacity_report(seat_map);

    let mut out = format!(
        "Seat Map: {}\n{} - Capacity: {} seats",
        aircraft.name(),
        aircraft.manufacturer(),
        capacity.declared
    );
    if !capacity.matches {
        out.push_str(&format!(" (layout generates {})", capacity.generated));
    }
    out.push('\n');

    for class in aircraft.seat_classes() {
        out.push('\n');
        out.push_str(&render_class(class));
    }

    out
}

fn render_class(class: &SeatClassConfig) -> String {
    // Rows are >= 1 once the aircraft is constructed.
    let first = class.starting_row as u32;
    let last = class.ending_row as u32;
    let aisle = aisle_after(&class.columns);

    let gutter = last.to_string().len();
    let cell = class
        .columns
        .iter()
        .map(|column| seat_identifier(last, column).len())
        .max()
        .unwrap_or(1);

    let mut out = format!("{} (rows {}-{})\n", class.class_name, first, last);
    out.push_str(&format!(
        "{:gutter$} {}\n",
        "",
        join_cells(&class.columns, aisle, cell),
        gutter = gutter
    ));

    for row in first..=last {
        let seats: Vec<String> = class
            .columns
            .iter()
            .map(|column| seat_identifier(row, column))
            .collect();
        out.push_str(&format!(
            "{:>gutter$} {}\n",
            row,
            join_cells(&seats, aisle, cell),
            gutter = gutter
        ));
    }

    out
}

fn join_cells(cells: &[String], aisle_after: Option<usize>, width: usize) -> String {
    let mut line = String::new();
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            let gap = if aisle_after == Some(index - 1) { AISLE_GAP } else { SEAT_SEPARATOR };
            line.push_str(gap);
        }
        line.push_str(&format!("{:>width$}", cell, width = width));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seatmap::SeatMapBuilder;
    use aerodesk_shared::AircraftInput;
    use uuid::Uuid;

    fn aircraft(capacity: i32, seat_classes: Vec<SeatClassConfig>) -> AircraftConfiguration {
        AircraftConfiguration::new(
            AircraftInput {
                name: "E190".to_string(),
                manufacturer: "Embraer".to_string(),
                capacity,
                airline_id: Uuid::new_v4(),
            },
            seat_classes,
        )
        .unwrap()
    }

    fn render(aircraft: &AircraftConfiguration) -> String {
        let map = aircraft.seat_map(&SeatMapBuilder::new()).unwrap();
        render_text(aircraft, &map)
    }

    #[test]
    fn test_render_single_class() {
        let aircraft = aircraft(8, vec![SeatClassConfig::new("Business", 1, 2, &["A", "B", "C", "D"])]);

        let expected = "\
Seat Map: E190
Embraer - Capacity: 8 seats

Business (rows 1-2)
   A  B    C  D
1 1A 1B   1C 1D
2 2A 2B   2C 2D
";
        assert_eq!(render(&aircraft), expected);
    }

    #[test]
    fn test_render_single_column_has_no_aisle() {
        let aircraft = aircraft(2, vec![SeatClassConfig::new("Crew", 9, 10, &["j"])]);

        let text = render(&aircraft);
        assert!(text.ends_with("\
Crew (rows 9-10)
     J
 9  9J
10 10J
"));
    }

    #[test]
    fn test_render_keeps_cabin_order_and_repeated_classes() {
        let aircraft = aircraft(
            9,
            vec![
                SeatClassConfig::new("First", 1, 1, &["A", "F"]),
                SeatClassConfig::new("Economy", 10, 11, &["A", "B"]),
                SeatClassConfig::new("Economy", 20, 20, &["A", "B", "C"]),
            ],
        );

        let text = render(&aircraft);
        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 4);
        assert!(blocks[1].starts_with("First (rows 1-1)"));
        assert_eq!(blocks[2], "Economy (rows 10-11)\n     A     B\n10 10A   10B\n11 11A   11B");
        assert_eq!(blocks[3], "Economy (rows 20-20)\n     A     B   C\n20 20A   20B 20C\n");
    }

    #[test]
    fn test_render_header_shows_declared_capacity() {
        let aircraft = aircraft(12, vec![SeatClassConfig::new("Economy", 1, 2, &["A", "B"])]);

        assert!(render(&aircraft).starts_with("Seat Map: E190\nEmbraer - Capacity: 12 seats (layout generates 4)\n"));
    }
}
