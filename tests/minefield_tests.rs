//! Minefield tests - placement guarantees and flood reveal on fixed layouts

use std::collections::BTreeSet;

use grid_puzzles::config::FieldConfig;
use grid_puzzles::minefield::{FieldEvent, FieldInput, FieldStatus, Minefield, RevealOutcome};

fn uncovered(field: &Minefield) -> BTreeSet<(usize, usize)> {
    let mut out = BTreeSet::new();
    for y in 0..field.height() {
        for x in 0..field.width() {
            if field.cell(x, y).unwrap().uncovered {
                out.insert((x, y));
            }
        }
    }
    out
}

fn mine_count(field: &Minefield) -> usize {
    (0..field.height())
        .flat_map(|y| (0..field.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| field.cell(x, y).unwrap().mine)
        .count()
}

/// 6x5 field: a wall of mines down column 3 and one mine at (0, 4).
fn walled_field() -> Minefield {
    let mut field = Minefield::seeded(FieldConfig::new(6, 5, 6).unwrap(), 0);
    let mut mines: Vec<(usize, usize)> = (0..5).map(|y| (3, y)).collect();
    mines.push((0, 4));
    field.set_mines(&mines);
    field
}

#[test]
fn test_first_click_area_never_mined() {
    let config = FieldConfig::default();
    for seed in 0..20 {
        for y in 0..9 {
            for x in 0..9 {
                let mut field = Minefield::seeded(config, seed);
                field.place_mines(x, y);
                assert_eq!(mine_count(&field), 10);
                for ny in y.saturating_sub(1)..=(y + 1).min(8) {
                    for nx in x.saturating_sub(1)..=(x + 1).min(8) {
                        assert!(!field.cell(nx, ny).unwrap().mine, "({nx}, {ny}) near ({x}, {y})");
                    }
                }
            }
        }
    }
}

#[test]
fn test_crowded_field_spares_only_clicked_cell() {
    let config = FieldConfig::new(4, 4, 8).unwrap();
    for seed in 0..20 {
        let mut field = Minefield::seeded(config, seed);
        field.place_mines(0, 0);
        assert_eq!(mine_count(&field), 8);
        assert!(!field.cell(0, 0).unwrap().mine);
    }
}

#[test]
fn test_nearly_full_field_still_places_exact_count() {
    // 25 cells, 16 mines: the 3x3 exclusion still leaves exactly enough room,
    // so every mine sits on the border and the centre block is all that is safe.
    let config = FieldConfig::new(5, 5, 16).unwrap();
    let mut field = Minefield::seeded(config, 4);
    field.place_mines(2, 2);
    assert_eq!(mine_count(&field), 16);
    assert_eq!(field.reveal(2, 2), RevealOutcome::Won);
    assert_eq!(uncovered(&field).len(), 9);
}

#[test]
fn test_first_reveal_never_detonates() {
    for seed in 0..30 {
        let mut field = Minefield::seeded(FieldConfig::new(9, 9, 40).unwrap(), seed);
        let outcome = field.reveal(seed as usize % 9, 4);
        assert_ne!(outcome, RevealOutcome::Detonated);
        assert_eq!(field.status(), FieldStatus::Playing);
    }
}

#[test]
fn test_flood_reveal_matches_expected_region() {
    let mut field = walled_field();
    assert_eq!(field.reveal(0, 0), RevealOutcome::Uncovered(12));

    let expected: BTreeSet<(usize, usize)> = [
        (0, 0), (1, 0), (2, 0),
        (0, 1), (1, 1), (2, 1),
        (0, 2), (1, 2), (2, 2),
        (0, 3), (1, 3), (2, 3),
    ]
    .into_iter()
    .collect();
    assert_eq!(uncovered(&field), expected);
    assert_eq!(field.remaining(), 12);
}

#[test]
fn test_flood_reveal_stops_at_flags() {
    let mut field = walled_field();
    assert!(field.toggle_flag(1, 1));
    field.reveal(0, 0);
    let shown = uncovered(&field);
    assert!(!shown.contains(&(1, 1)));
    // The fill goes around the flag through (0, 1) and (1, 0).
    assert!(shown.contains(&(2, 2)));
    assert_eq!(shown.len(), 11);
}

#[test]
fn test_clearing_every_safe_cell_wins() {
    let mut field = walled_field();
    field.reveal(0, 0);
    assert_eq!(field.reveal(5, 0), RevealOutcome::Uncovered(10));
    assert_eq!(field.reveal(1, 4), RevealOutcome::Uncovered(1));
    assert_eq!(field.reveal(2, 4), RevealOutcome::Won);
    assert_eq!(field.status(), FieldStatus::Won);
    assert!(!field.toggle_flag(0, 4));
}

#[test]
fn test_input_events() {
    let mut field = walled_field();
    let flag = FieldInput {
        flag: Some((5, 4)),
        ..FieldInput::default()
    };
    assert_eq!(field.handle_input(&flag), FieldEvent::Flagged { mines_to_flag: 5 });

    let reveal_flagged = FieldInput {
        reveal: Some((5, 4)),
        ..FieldInput::default()
    };
    assert_eq!(
        field.handle_input(&reveal_flagged),
        FieldEvent::Revealed(RevealOutcome::Ignored)
    );

    let boom = FieldInput {
        reveal: Some((3, 2)),
        ..FieldInput::default()
    };
    assert_eq!(
        field.handle_input(&boom),
        FieldEvent::Revealed(RevealOutcome::Detonated)
    );
    assert_eq!(field.handle_input(&flag), FieldEvent::Idle);
    assert_eq!(field.handle_input(&FieldInput::default()), FieldEvent::Idle);
}
