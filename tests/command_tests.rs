//! Command integration tests.
//!
//! These tests verify each command variant's commit semantics and the
//! all-or-nothing behavior of `Board::make_effect`.

use reversi_engine::{
    Board, Color, Command, Coord, EngineError, FlipEffect, PlaceMove, SkipMove,
};

// =============================================================================
// PlaceMove
// =============================================================================

/// A placement writes the disc and applies every flip.
#[test]
fn test_place_commits_disc_and_flips() {
    let mut board = Board::new();
    let place = PlaceMove::new(Color::Black, Coord::new(3, 2), [FlipEffect::new(Coord::new(3, 3))]);

    board.make_effect(place.clone()).unwrap();

    assert_eq!(board.get_piece(Coord::new(3, 2)), Ok(Color::Black));
    assert_eq!(board.get_piece(Coord::new(3, 3)), Ok(Color::Black));
    assert_eq!(board.history().len(), 1);
    assert_eq!(board.last_move(), Some(&Command::Place(place)));
}

/// A failing flip in the middle of a placement rolls back the disc and
/// the flips that already ran.
#[test]
fn test_place_with_bad_flip_is_atomic() {
    let mut board = Board::new();
    let before = board.clone();

    let place = PlaceMove::new(
        Color::Black,
        Coord::new(3, 2),
        [FlipEffect::new(Coord::new(3, 3)), FlipEffect::new(Coord::new(0, 0))],
    );
    let err = board.make_effect(place).unwrap_err();

    assert_eq!(err, EngineError::InvalidOperation(Coord::new(0, 0)));
    assert_eq!(board, before);
    assert_eq!(board.get_piece(Coord::new(3, 3)), Ok(Color::White));
    assert_eq!(board.turn_count(), 0);
}

/// An off-grid target fails before anything is written.
#[test]
fn test_place_out_of_bounds() {
    let mut board = Board::new();
    let place = PlaceMove::new(Color::White, Coord::new(-1, 4), []);

    let err = board.make_effect(place).unwrap_err();
    assert_eq!(err, EngineError::OutOfBounds(Coord::new(-1, 4)));
    assert_eq!(board, Board::new());
}

/// Committing directly (outside `make_effect`) still applies in order.
#[test]
fn test_place_commit_direct() {
    let mut board = Board::new();
    let command = Command::from(PlaceMove::new(
        Color::White,
        Coord::new(5, 3),
        [FlipEffect::new(Coord::new(4, 3))],
    ));

    command.commit(&mut board).unwrap();

    assert_eq!(board.get_piece(Coord::new(5, 3)), Ok(Color::White));
    assert_eq!(board.get_piece(Coord::new(4, 3)), Ok(Color::White));
    // Direct commits bypass history.
    assert_eq!(board.turn_count(), 0);
}

// =============================================================================
// FlipEffect
// =============================================================================

/// Flipping twice restores the original color.
#[test]
fn test_flip_twice_restores() {
    let mut board = Board::new();
    let flip = FlipEffect::new(Coord::new(4, 4));

    board.make_effect(flip).unwrap();
    assert_eq!(board.get_piece(Coord::new(4, 4)), Ok(Color::Black));

    board.make_effect(flip).unwrap();
    assert_eq!(board, Board::new());
}

/// Flipping an empty cell is an invalid operation and changes nothing.
#[test]
fn test_flip_empty_rejected() {
    let mut board = Board::new();
    let err = board.make_effect(FlipEffect::new(Coord::new(7, 7))).unwrap_err();

    assert_eq!(err, EngineError::InvalidOperation(Coord::new(7, 7)));
    assert_eq!(board, Board::new());
}

// =============================================================================
// SkipMove
// =============================================================================

/// A pass consumes a turn without touching the grid.
#[test]
fn test_skip_changes_only_history() {
    let mut board = Board::new();
    board.make_effect(SkipMove::new(Color::Black)).unwrap();

    assert_eq!(board.pieces(), Board::new().pieces());
    assert_eq!(board.turn_count(), 1);
    assert_eq!(board.whose_turn(), Color::White);
}

// =============================================================================
// History persistence
// =============================================================================

/// History serializes and replays into an identical board.
#[test]
fn test_history_replay_from_json() {
    let mut board = Board::new();
    for target in [Coord::new(3, 2), Coord::new(2, 2), Coord::new(4, 5)] {
        let player = board.whose_turn();
        let hint = board.hint_at(player, target).unwrap();
        board.make_effect(hint).unwrap();
    }
    board.make_effect(SkipMove::new(Color::White)).unwrap();

    let saved: Vec<Command> = board.history().iter().cloned().collect();
    let json = serde_json::to_string(&saved).unwrap();
    let loaded: Vec<Command> = serde_json::from_str(&json).unwrap();

    let mut restored = Board::new();
    for command in loaded {
        restored.make_effect(command).unwrap();
    }

    assert_eq!(restored, board);
    assert_eq!(restored.logs(), board.logs());
}
