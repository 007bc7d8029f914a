//! Tests for the Score value type

use match_simulator_core_rs::{Alliance, Score};

#[test]
fn test_score_addition() {
    let s1 = Score::new(10, 20);
    let s2 = Score::new(100, 200);
    let s3 = Score::new(110, 220);
    assert_eq!(s1 + s2, s3);
}

#[test]
fn test_score_pick() {
    let s4 = Score::pick(Alliance::Red, 11);
    assert_eq!(s4, Score::new(11, 0));

    let s5 = Score::pick(Alliance::Blue, 9);
    assert_eq!(s5, Score::new(0, 9));
}

#[test]
fn test_score_zero_identity() {
    let s = Score::new(7, 3);
    assert_eq!(s + Score::ZERO, s);
    assert_eq!(Score::ZERO + s, s);
    assert_eq!(Score::ZERO, Score::new(0, 0));
    assert_eq!(Score::default(), Score::ZERO);
}

#[test]
fn test_score_accessors() {
    let s = Score::new(4, 9);
    assert_eq!(s.red(), 4);
    assert_eq!(s.blue(), 9);
    assert_eq!(s.of(Alliance::Red), 4);
    assert_eq!(s.of(Alliance::Blue), 9);
}

#[test]
fn test_score_wlt() {
    let s1 = Score::new(10, 11);
    assert_eq!(s1.wlt_rp(), Score::new(0, 2));

    let s2 = Score::new(100, 11);
    assert_eq!(s2.wlt_rp(), Score::new(2, 0));

    let s3 = Score::new(0, 0);
    assert_eq!(s3.wlt_rp(), Score::new(1, 1));
}

#[test]
fn test_score_sum_of_ticks() {
    let ticks = vec![
        Score::new(2, 0),
        Score::new(0, 1),
        Score::new(5, 5),
        Score::ZERO,
    ];
    let total: Score = ticks.iter().copied().sum();
    assert_eq!(total, Score::new(7, 6));

    // Folding with + gives the same total as Sum.
    let folded = ticks.into_iter().fold(Score::ZERO, |acc, s| acc + s);
    assert_eq!(folded, total);
}
