//! Rendering adapter tests.

use memory_match::view::grid_columns;
use memory_match::{
    BoardView, Face, MemoryStore, Outcome, RoundConfig, RoundController, RoundSnapshot,
};

fn controller() -> RoundController<MemoryStore> {
    let config = RoundConfig::new()
        .with_seed(3)
        .with_value_template("v{index}");
    RoundController::new(config, MemoryStore::new()).unwrap()
}

fn card_with_value(snapshot: &RoundSnapshot, value: &str) -> Vec<memory_match::CardId> {
    snapshot
        .cards
        .iter()
        .filter(|c| c.value.as_str() == value)
        .map(|c| c.id)
        .collect()
}

#[test]
fn test_fresh_board_is_hidden() {
    let c = controller();
    let snapshot = c.snapshot();
    let view = BoardView::new(&snapshot);

    assert_eq!(view.columns(), 2);
    assert!(view.faces().all(|(_, face)| face == Face::Hidden));
    assert_eq!(view.render_grid(), "? ?\n? ?\n");
    assert_eq!(view.status_lines(), vec!["Moves: 0", "Time: 0 sec"]);
    assert_eq!(view.win_message(), None);
}

#[test]
fn test_revealed_and_matched_faces() {
    let mut c = controller();
    c.start_round(4).unwrap();

    let v1 = card_with_value(&c.snapshot(), "v1");
    let v2 = card_with_value(&c.snapshot(), "v2");
    c.select_card(v1[0]).unwrap();
    c.select_card(v1[1]).unwrap();
    c.select_card(v2[0]).unwrap();

    let snapshot = c.snapshot();
    let view = BoardView::new(&snapshot);
    for (id, face) in view.faces() {
        if v1.contains(&id) {
            assert!(matches!(face, Face::Matched(v) if v.as_str() == "v1"));
        } else if id == v2[0] {
            assert!(matches!(face, Face::Revealed(v) if v.as_str() == "v2"));
        } else {
            assert_eq!(face, Face::Hidden);
        }
    }

    let grid = view.render_grid();
    assert_eq!(grid.matches('?').count(), 1);
    assert_eq!(grid.matches("v1").count(), 2);
    assert_eq!(grid.lines().count(), 2);
}

#[test]
fn test_win_message_and_records() {
    let mut c = controller();
    c.start_round(4).unwrap();
    let snapshot = c.snapshot();
    for value in ["v1", "v2"] {
        let ids = card_with_value(&snapshot, value);
        c.select_card(ids[0]).unwrap();
        let outcome = c.select_card(ids[1]).unwrap();
        assert!(outcome.is_move());
    }
    assert_eq!(c.state().moves, 2);

    let snapshot = c.snapshot();
    let view = BoardView::new(&snapshot);
    assert_eq!(
        view.win_message().as_deref(),
        Some("Congratulations! You completed the game in 2 moves and 0 seconds.")
    );
    assert_eq!(
        view.status_lines(),
        vec!["Moves: 2", "Time: 0 sec", "Top Score: 2 Moves", "Top Time: 0 sec"]
    );
}

#[test]
fn test_custom_labels_and_columns() {
    let mut c = controller();
    c.start_round(4).unwrap();
    let ids = card_with_value(&c.snapshot(), "v2");
    c.select_card(ids[0]).unwrap();
    assert_eq!(c.select_card(ids[1]).unwrap(), Outcome::Matched);

    let snapshot = c.snapshot();
    let grid = BoardView::new(&snapshot)
        .with_columns(4)
        .render_grid_with(|_| "##".to_string());
    assert_eq!(grid.lines().count(), 1);
    assert_eq!(grid.matches("##").count(), 2);
}

#[test]
fn test_grid_columns_for_offered_sizes() {
    let columns: Vec<usize> = memory_match::DECK_SIZE_OPTIONS
        .iter()
        .map(|&n| grid_columns(n))
        .collect();
    assert_eq!(columns, vec![2, 4, 6]);
}
