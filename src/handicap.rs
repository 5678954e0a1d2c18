//! Course handicap and per-hole stroke allocation.
//!
//! All functions here are pure; inputs are validated upstream, so there are
//! no failure modes.

/// Course handicap from a handicap index:
/// `index × slope/113 + (rating − par)`, rounded half away from zero.
/// Computed once when a round is created and stable thereafter.
#[must_use]
pub fn course_handicap(handicap_index: f64, slope_rating: i32, course_rating: f64, par: i32) -> i32 {
    let raw = handicap_index * (f64::from(slope_rating) / 113.0) + (course_rating - f64::from(par));
    // f64::round is half-away-from-zero, which is the convention here
    raw.round() as i32
}

/// Handicap strokes a player receives on one hole: one stroke for every
/// multiple of `total_holes` by which the course handicap covers the hole's
/// stroke index. Zero for scratch-or-better players.
#[must_use]
pub fn strokes_for_hole(hole_handicap_index: i32, course_handicap: i32, total_holes: u32) -> i32 {
    if course_handicap <= 0 || total_holes == 0 {
        return 0;
    }

    let mut strokes = 0;
    let mut remaining = course_handicap;
    while remaining >= hole_handicap_index {
        strokes += 1;
        remaining -= total_holes as i32;
    }
    strokes
}

#[must_use]
pub fn net_score(
    gross: i32,
    hole_handicap_index: i32,
    course_handicap: i32,
    total_holes: u32,
) -> i32 {
    gross - strokes_for_hole(hole_handicap_index, course_handicap, total_holes)
}
