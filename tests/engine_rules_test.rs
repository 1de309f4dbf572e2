//! Tests for engine move, termination and scoring rules.

use tictactoe_session::rules::LINES;
use tictactoe_session::{
    Engine, EngineError, Line, ManualClock, Mark, MemoryScoreStore, Outcome, PlayerSetup,
    Position, Score,
};

type TestEngine = Engine<MemoryScoreStore, ManualClock>;

fn new_engine() -> TestEngine {
    let mut engine = Engine::with_clock(MemoryScoreStore::new(), ManualClock::default());
    engine
        .start_round(
            PlayerSetup::new(Mark::First, "Ada"),
            PlayerSetup::new(Mark::Second, "Bo"),
        )
        .expect("valid setup");
    engine
}

fn play(engine: &mut TestEngine, positions: &[i64]) -> Option<Outcome> {
    let mut outcome = None;
    for &pos in positions {
        outcome = engine.apply_move(pos).expect("legal move").outcome;
    }
    outcome
}

fn off_line(line: &Line) -> Vec<i64> {
    (0..9)
        .filter(|i| !line.indices().contains(&(*i as usize)))
        .collect()
}

#[test]
fn test_first_row_scenario() {
    let mut engine = new_engine();
    let outcome = play(&mut engine, &[0, 3, 1, 4, 2]).expect("round should end");

    assert_eq!(outcome.winner(), Some(Mark::First));
    assert_eq!(outcome.line().map(|l| l.indices()), Some([0, 1, 2]));
    assert!(engine.round().is_over());
    assert_eq!(engine.round().winning_line().map(|l| l.indices()), Some([0, 1, 2]));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let mut engine = new_engine();
    let outcome = play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("round should end");

    assert_eq!(outcome, Outcome::Draw);
    assert!(engine.round().is_over());
    assert_eq!(engine.round().winning_line(), None);
    assert_eq!(engine.score(), Score::new(0, 0, 1));
}

#[test]
fn test_row_major_fill_completes_anti_diagonal_first() {
    // Filling 0,1,2,3,4,5,6 alternately gives First 2-4-6 on the seventh move.
    let mut engine = new_engine();
    let outcome = play(&mut engine, &[0, 1, 2, 3, 4, 5, 6]).expect("round should end");

    assert_eq!(outcome.winner(), Some(Mark::First));
    assert_eq!(outcome.line().map(|l| l.indices()), Some([2, 4, 6]));
    assert_eq!(engine.apply_move(8), Err(EngineError::RoundAlreadyOver));
}

#[test]
fn test_every_line_wins_for_first() {
    for line in LINES {
        let mut engine = new_engine();
        let [a, b, c] = line.indices().map(|i| i as i64);
        let filler = off_line(&line);

        let outcome = play(&mut engine, &[a, filler[0], b, filler[1], c])
            .unwrap_or_else(|| panic!("{:?} should win", line.indices()));

        assert_eq!(outcome, Outcome::Winner { mark: Mark::First, line });
        assert_eq!(engine.round().winning_line(), Some(line));
    }
}

#[test]
fn test_every_line_wins_for_second() {
    for line in LINES {
        let filler = off_line(&line);
        // Three First fillers that do not themselves form a line.
        let n = filler.len();
        let first: Vec<i64> = (0..n)
            .flat_map(|i| (i + 1..n).flat_map(move |j| (j + 1..n).map(move |k| [i, j, k])))
            .map(|[i, j, k]| [filler[i], filler[j], filler[k]])
            .find(|cells| {
                !LINES.iter().any(|l| {
                    l.indices()
                        .iter()
                        .all(|idx| cells.contains(&(*idx as i64)))
                })
            })
            .expect("non-winning filler exists")
            .to_vec();

        let mut engine = new_engine();
        let [a, b, c] = line.indices().map(|i| i as i64);
        let outcome = play(&mut engine, &[first[0], a, first[1], b, first[2], c])
            .unwrap_or_else(|| panic!("{:?} should win", line.indices()));

        assert_eq!(outcome, Outcome::Winner { mark: Mark::Second, line });
    }
}

#[test]
fn test_played_cell_rejected_twice() {
    for pos in 0..9 {
        let mut engine = new_engine();
        engine.apply_move(pos).expect("first play");
        let before = engine.snapshot();

        let position = Position::try_from(pos).unwrap();
        assert_eq!(engine.apply_move(pos), Err(EngineError::CellOccupied(position)));
        assert_eq!(engine.snapshot(), before);
    }
}

#[test]
fn test_out_of_bounds() {
    let mut engine = new_engine();
    let before = engine.snapshot();

    assert_eq!(engine.apply_move(9), Err(EngineError::OutOfBounds(9)));
    assert_eq!(engine.apply_move(-1), Err(EngineError::OutOfBounds(-1)));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_turn_alternates() {
    let mut engine = new_engine();
    assert_eq!(engine.round().current_turn(), Mark::First);
    engine.apply_move(4).unwrap();
    assert_eq!(engine.round().current_turn(), Mark::Second);
    engine.apply_move(0).unwrap();
    assert_eq!(engine.round().current_turn(), Mark::First);
}

#[test]
fn test_move_after_round_over_rejected() {
    let mut engine = new_engine();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    let before = engine.snapshot();

    assert_eq!(engine.apply_move(8), Err(EngineError::RoundAlreadyOver));
    assert_eq!(engine.undo(), Err(EngineError::RoundAlreadyOver));
    assert_eq!(engine.snapshot(), before);
    assert!(!engine.can_undo());
}

#[test]
fn test_score_recorded_once_per_round() {
    let mut engine = new_engine();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    assert_eq!(engine.score(), Score::new(1, 0, 0));
    assert_eq!(engine.store().saves(), 1);
    assert_eq!(engine.store().saved(), Some(Score::new(1, 0, 0)));

    // Rejected calls after the end do not count again.
    let _ = engine.apply_move(8);
    let _ = engine.undo();
    assert_eq!(engine.store().saves(), 1);

    engine.reset_round();
    play(&mut engine, &[3, 0, 4, 1, 8, 2]);
    assert_eq!(engine.score(), Score::new(1, 1, 0));
    assert_eq!(engine.store().saves(), 2);

    engine.reset_round();
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(engine.score(), Score::new(1, 1, 1));
    assert_eq!(engine.store().saves(), 3);
}

#[test]
fn test_non_terminal_moves_do_not_save() {
    let mut engine = new_engine();
    play(&mut engine, &[0, 3, 1, 4]);
    assert_eq!(engine.store().saves(), 0);
    assert_eq!(engine.score(), Score::default());
}

#[test]
fn test_score_loaded_from_store() {
    let engine = Engine::with_clock(
        MemoryScoreStore::with_score(Score::new(4, 2, 7)),
        ManualClock::default(),
    );
    assert_eq!(engine.score(), Score::new(4, 2, 7));
    assert_eq!(engine.snapshot().score, Score::new(4, 2, 7));
}

#[test]
fn test_reset_score_zeroes_and_persists() {
    let mut engine = new_engine();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    let snapshot = engine.reset_score();

    assert_eq!(snapshot.score, Score::default());
    assert_eq!(engine.store().saved(), Some(Score::default()));
    assert_eq!(engine.store().saves(), 2);
    // The finished round is left as it was.
    assert!(engine.round().is_over());
}
