//! Scripted sessions through the interactive shell.

use std::io::Cursor;

use roomledger::prelude::*;
use roomledger::MENU;

// =========================================================================
// Helpers
// =========================================================================

const CHOICE: &str = "Enter your choice: ";

/// Runs `script` against `registry` and returns everything the shell wrote.
fn session(registry: &mut RoomRegistry, script: &str, format: OutputFormat) -> String {
    let mut output = Vec::new();
    Shell::new(registry, Cursor::new(script.to_string()), &mut output)
        .format(format)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

fn text_session(script: &str) -> (String, RoomRegistry) {
    let mut registry = RoomRegistry::new();
    let output = session(&mut registry, script, OutputFormat::Text);
    (output, registry)
}

fn rn(number: &str) -> RoomNumber {
    RoomNumber::from(number)
}

// =========================================================================
// Menu handling
// =========================================================================

#[test]
fn test_exit_prints_menu_once() {
    let (output, registry) = text_session("6\n");
    assert_eq!(output, format!("{MENU}{CHOICE}"));
    assert!(registry.is_empty());
}

#[test]
fn test_end_of_input_ends_session() {
    let (output, _) = text_session("");
    assert_eq!(output, format!("{MENU}{CHOICE}"));
}

#[test]
fn test_invalid_choice_is_reported_and_loop_continues() {
    let (output, _) = text_session("9\n6\n");
    let expected = format!(
        "{MENU}{CHOICE}Invalid choice. Please try again.\n\n{MENU}{CHOICE}"
    );
    assert_eq!(output, expected);
}

#[test]
fn test_menu_choices_read_as_integers() {
    let (output, registry) = text_session("+1\nR1\nDana\n9:00\n10:00\n06\n");
    assert!(output.contains("Room R1 added successfully\n"));
    assert!(!output.contains("Invalid choice"));
    assert!(output.ends_with(CHOICE));
    assert_eq!(registry.room_count(), 1);
}

#[test]
fn test_end_of_input_mid_command_ends_session() {
    let (output, registry) = text_session("1\nR1\nDana\n");
    assert!(output.ends_with("Enter Start Time: "));
    assert!(registry.is_empty());
}

// =========================================================================
// Commands
// =========================================================================

#[test]
fn test_add_room_prompts_and_confirms() {
    let (output, registry) = text_session("1\nR1\nDana\n9:00\n10:00\n6\n");
    assert!(output.contains(
        "Enter Room Number: Enter Host: Enter Start Time: Enter End Time: \
         Room R1 added successfully\n"
    ));
    let room = registry.find_room(&rn("R1")).unwrap();
    assert_eq!(room.host(), "Dana");
    assert_eq!(room.start_time(), "9:00");
    assert_eq!(room.end_time(), "10:00");
}

#[test]
fn test_booking_scenario() {
    let script = "\
1\nR1\nH\n9:00\n10:00\n\
2\nR1\nAlice\n1\n\
2\nR1\nBob\n1\n\
3\nR1\n1\n\
2\nR1\nBob\n1\n\
6\n";
    let (output, registry) = text_session(script);

    let outcomes: Vec<&str> = output
        .lines()
        .filter_map(|line| line.rsplit(": ").next())
        .filter(|tail| tail.starts_with("Chair ") || tail.starts_with("The chair "))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            "Chair 1 has been booked for Alice",
            "The chair 1 is already reserved",
            "Chair 1 has been released",
            "Chair 1 has been booked for Bob",
        ]
    );

    let room = registry.find_room(&rn("R1")).unwrap();
    assert_eq!(room.occupant(SeatNumber(1)), Some("Bob"));
}

#[test]
fn test_unknown_room_reported_for_every_command() {
    let (output, _) = text_session("2\nR9\nAlice\n1\n3\nR9\n1\n4\nR9\n6\n");
    assert_eq!(output.matches("Room R9 not found\n").count(), 3);
}

#[test]
fn test_release_of_free_seat_is_reported() {
    let (output, _) = text_session("1\nR1\nH\n9:00\n10:00\n3\nR1\n4\n6\n");
    assert!(output.contains("The chair 4 is not reserved\n"));
}

#[test]
fn test_non_numeric_chair_is_reported_and_nothing_booked() {
    let (output, registry) =
        text_session("1\nR1\nH\n9:00\n10:00\n2\nR1\nAlice\nfront row\n6\n");
    assert!(output.contains("Invalid chair number: front row\n"));
    assert_eq!(registry.find_room(&rn("R1")).unwrap().occupied_count(), 0);
}

#[test]
fn test_display_room_renders_listing() {
    let script = "\
1\nR1\nDana\n9:00\n10:00\n\
2\nR1\nCarol\n12\n\
2\nR1\nAlice\n3\n\
4\nR1\n\
6\n";
    let (output, _) = text_session(script);
    let listing = "\
Room Number: R1
Host: Dana
Start Time: 9:00
End Time: 10:00
Chair Bookings:
Chair 3: Alice
Chair 12: Carol
-----------------------------------
";
    assert!(output.contains(&format!("Enter Room Number: {listing}\n")));
}

#[test]
fn test_display_all_rooms_in_insertion_order() {
    let script = "\
1\nR2\nH\na\nb\n\
1\nR1\nH\na\nb\n\
1\nR3\nH\na\nb\n\
5\n6\n";
    let (output, _) = text_session(script);
    let p2 = output.find("Room Number: R2").unwrap();
    let p1 = output.find("Room Number: R1").unwrap();
    let p3 = output.find("Room Number: R3").unwrap();
    assert!(p2 < p1 && p1 < p3);
}

#[test]
fn test_duplicate_room_shadows_by_default() {
    let script = "\
1\nR1\nA\na\nb\n\
1\nR1\nB\na\nb\n\
2\nR1\nAlice\n1\n\
6\n";
    let (output, registry) = text_session(script);
    assert_eq!(output.matches("Room R1 added successfully").count(), 2);

    let rooms: Vec<&Room> = registry.display_all_rooms().collect();
    assert_eq!(rooms[0].occupant(SeatNumber(1)), Some("Alice"));
    assert_eq!(rooms[1].occupied_count(), 0);
}

#[test]
fn test_configured_registry_rejects_duplicates_and_full_rooms() {
    let mut registry = RoomRegistry::with_config(RegistryConfig {
        room: RoomConfig {
            max_capacity: 1,
            enforce_capacity: true,
        },
        reject_duplicate_rooms: true,
    });
    let script = "\
1\nR1\nA\na\nb\n\
1\nR1\nB\na\nb\n\
2\nR1\nAlice\n1\n\
2\nR1\nBob\n2\n\
6\n";
    let output = session(&mut registry, script, OutputFormat::Text);

    assert!(output.contains("Room R1 already exists\n"));
    assert!(output.contains("Room R1 is full (capacity 1)\n"));
    assert_eq!(registry.room_count(), 1);
}

// =========================================================================
// JSON output
// =========================================================================

#[test]
fn test_json_display_all_rooms() {
    let mut registry = RoomRegistry::new();
    registry.add_room("R1", "Dana", "9:00", "10:00").unwrap();
    registry.book_room(&rn("R1"), "Alice", SeatNumber(2)).unwrap();

    let output = session(&mut registry, "5\n6\n", OutputFormat::Json);
    let start = output.find('[').unwrap();
    let end = output.rfind(']').unwrap();
    let rooms: Vec<RoomSnapshot> =
        serde_json::from_str(&output[start..=end]).unwrap();

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].host, "Dana");
    assert_eq!(rooms[0].occupant(SeatNumber(2)), Some("Alice"));
}

#[test]
fn test_json_display_room() {
    let mut registry = RoomRegistry::new();
    registry.add_room("R1", "Dana", "9:00", "10:00").unwrap();

    let output = session(&mut registry, "4\nR1\n6\n", OutputFormat::Json);
    let start = output.find('{').unwrap();
    let end = output.rfind('}').unwrap();
    let room: serde_json::Value =
        serde_json::from_str(&output[start..=end]).unwrap();

    assert_eq!(room["room_number"], "R1");
    assert_eq!(room["max_capacity"], 40);
    assert_eq!(room["seats"], serde_json::json!([]));
}
