//! Game session integration tests: move acceptance, computer replies,
//! coordinate codes, rematch cache carryover.

use mnk::game::parse_move_code;
use mnk::{Coord, Game, GameConfig, InvalidMove, Mark};
use proptest::prelude::*;

// =============================================================================
// Move Code Round-Trip
// =============================================================================

#[test]
fn test_code_round_trips_for_every_addressable_coordinate() {
    for row in 0..9 {
        for col in 0..26 {
            let coord = Coord::new(row, col);
            let code = coord.code().expect("addressable");
            assert_eq!(parse_move_code(&code), Ok(coord), "code {code}");
        }
    }
}

#[test]
fn test_documented_example_a3() {
    assert_eq!(Coord::new(2, 0).code().as_deref(), Some("A3"));
    assert_eq!(parse_move_code("A3"), Ok(Coord::new(2, 0)));
}

proptest! {
    #[test]
    fn prop_parse_never_panics(code in ".{0,4}") {
        let _ = parse_move_code(&code);
    }

    #[test]
    fn prop_well_formed_codes_parse(col in 0u8..26, row in 0u8..9) {
        let code = format!("{}{}", (b'A' + col) as char, (b'1' + row) as char);
        prop_assert_eq!(
            parse_move_code(&code),
            Ok(Coord::new(row as usize, col as usize))
        );
    }
}

// =============================================================================
// Validation Failures
// =============================================================================

#[test]
fn test_invalid_codes_leave_board_unchanged() {
    let mut game = Game::new(GameConfig::new(3, 3, 3)).with_seed(1);

    let failures = [
        ("", InvalidMove::MalformedCode),
        ("A33", InvalidMove::MalformedCode),
        ("a3", InvalidMove::ColumnLetter),
        ("A0", InvalidMove::RowDigit),
        ("D1", InvalidMove::ColumnOutOfBounds(3)),
        ("A4", InvalidMove::RowOutOfBounds(3)),
    ];

    for (code, expected) in failures {
        assert_eq!(game.place_code(code), Err(expected), "code {code:?}");
    }
    assert_eq!(game.position().key(), "---------");
}

#[test]
fn test_occupied_cell_is_rejected_with_reason() {
    let mut game = Game::new(GameConfig::new(3, 3, 3)).with_seed(1);
    game.place_code("B2").unwrap();

    // B2 is taken by the human; whichever cell the computer answered with
    // is taken as well.
    let err = game.place_code("B2").unwrap_err();
    assert_eq!(err, InvalidMove::CellTaken(Coord::new(1, 1)));
    assert!(err.to_string().contains("already taken"));
}

// =============================================================================
// Scripted Games
// =============================================================================

#[test]
fn test_scripted_draw_on_1x3() {
    // Run of 2 on a 1x3 strip. X takes the left end, the computer must
    // answer with the center (its only non-losing continuation, found as a
    // forced win within the horizon), X blocks the last cell: draw.
    let mut game = Game::new(GameConfig::new(3, 1, 2)).with_seed(7);

    game.place_code("A1").unwrap();
    assert_eq!(game.position().render(), " ABC\n1XO-\n");

    game.place_code("C1").unwrap();
    assert!(game.is_over());
    assert_eq!(game.winner(), None);
    assert!(game.position().is_draw());
}

#[test]
fn test_human_win_ends_game_without_reply() {
    let mut game = Game::new(GameConfig::new(1, 1, 1)).with_seed(7);
    game.place_code("A1").unwrap();

    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Mark::X));
    assert_eq!(game.position().render(), " A\n1X\n");
}

// =============================================================================
// Session Invariants
// =============================================================================

proptest! {
    // Whatever the human tries, marks stay balanced: the computer answers
    // every accepted move unless that move ended the game.
    #[test]
    fn prop_marks_stay_balanced(
        moves in proptest::collection::vec((0usize..3, 0usize..3), 1..9),
        seed in any::<u64>(),
    ) {
        let mut game = Game::new(GameConfig::new(3, 3, 3)).with_seed(seed);

        for (row, col) in moves {
            if game.is_over() {
                break;
            }
            let _ = game.place(Coord::new(row, col));

            let key = game.position().key();
            let x = key.matches('X').count();
            let o = key.matches('O').count();
            prop_assert!(x == o || x == o + 1);
            if x == o + 1 {
                prop_assert!(game.is_over());
            }
        }
    }
}

#[test]
fn test_rematch_reuses_learned_positions() {
    let config = GameConfig::new(3, 1, 2);
    let mut game = Game::new(config).with_seed(11);
    game.place_code("A1").unwrap();
    let learned = game.cache().len();
    assert!(learned > 0);

    let mut rematch = Game::with_cache(config, game.into_cache()).with_seed(11);
    assert_eq!(rematch.cache().len(), learned);

    // The rematch board starts fresh.
    assert_eq!(rematch.position().key(), "---");
    rematch.place_code("A1").unwrap();
    assert_eq!(rematch.position().render(), " ABC\n1XO-\n");
}
