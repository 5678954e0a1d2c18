use golf_wagers::handicap::{course_handicap, net_score, strokes_for_hole};
use golf_wagers::model::{ScoreDisplay, score_to_par};

#[test]
fn test1_course_handicap_standard_slope() {
    // slope 113 is the baseline, so the index passes through untouched
    assert_eq!(course_handicap(10.0, 113, 72.0, 72), 10);
    assert_eq!(course_handicap(0.0, 113, 72.0, 72), 0);
}

#[test]
fn test1_course_handicap_rounds_half_away_from_zero() {
    // 12.5 * 130/113 - 0.5 = 13.88.. rounds up
    assert_eq!(course_handicap(12.5, 130, 71.5, 72), 14);
    // raw value of exactly -0.5 rounds away from zero
    assert_eq!(course_handicap(0.0, 113, 71.5, 72), -1);
}

#[test]
fn test1_strokes_for_hole_single_allocation() {
    // an 18 handicap gets one stroke on every hole
    for idx in 1..=18 {
        assert_eq!(strokes_for_hole(idx, 18, 18), 1);
    }
    // a 9 handicap only covers stroke indexes 1 through 9
    assert_eq!(strokes_for_hole(9, 9, 18), 1);
    assert_eq!(strokes_for_hole(10, 9, 18), 0);
}

#[test]
fn test1_strokes_for_hole_wraps_past_total() {
    // 20 covers every hole once and the two hardest twice
    assert_eq!(strokes_for_hole(1, 20, 18), 2);
    assert_eq!(strokes_for_hole(2, 20, 18), 2);
    assert_eq!(strokes_for_hole(3, 20, 18), 1);
}

#[test]
fn test1_scratch_or_better_gets_nothing() {
    assert_eq!(strokes_for_hole(1, 0, 18), 0);
    assert_eq!(strokes_for_hole(1, -3, 18), 0);
}

#[test]
fn test1_net_score_subtracts_strokes() {
    assert_eq!(net_score(5, 3, 9, 18), 4);
    assert_eq!(net_score(5, 12, 9, 18), 5);
    // handicap strokes may push net below gross minus one on wrapped holes
    assert_eq!(net_score(5, 1, 20, 18), 3);
}

#[test]
fn test1_score_display_names() {
    assert_eq!(ScoreDisplay::from(score_to_par(3, 4)), ScoreDisplay::Birdie);
    assert_eq!(ScoreDisplay::from(score_to_par(4, 4)), ScoreDisplay::Par);
    assert_eq!(ScoreDisplay::from(score_to_par(2, 4)), ScoreDisplay::Eagle);
    assert_eq!(
        ScoreDisplay::from(score_to_par(6, 4)),
        ScoreDisplay::DoubleBogey
    );
}
