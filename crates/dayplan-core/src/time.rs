//! Minute-of-day time arithmetic.
//!
//! All engine computations run on integer minutes since 00:00. Wall-clock
//! values cross the API boundary as "HH:MM" 24-hour strings; this module
//! converts between the two and provides the interval primitives the
//! scheduler builds on.

/// Minutes in one day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parse an "HH:MM" string into minutes since midnight.
///
/// Returns `None` when the string is malformed, the hour is outside
/// [0, 23], or the minute is outside [0, 59]. Callers treat `None` as the
/// not-a-number sentinel; parsing never panics.
pub fn parse_time(hm: &str) -> Option<i32> {
    let (h_str, m_str) = hm.split_once(':')?;
    let h: i32 = h_str.trim().parse().ok()?;
    let m: i32 = m_str.trim().parse().ok()?;
    if !(0..=23).contains(&h) || !(0..=59).contains(&m) {
        return None;
    }
    Some(h * 60 + m)
}

/// Format minutes as a zero-padded "HH:MM" string.
///
/// Any integer is accepted: the value is normalized into [0, 1440) via
/// euclidean modulo first, which is how day-wrapped minutes render back
/// to wall-clock text.
pub fn format_time(minutes: i32) -> String {
    let mins = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", mins / 60, mins % 60)
}

/// Duration between two minute offsets, clamped at zero.
///
/// Overnight spans must go through the wrap-aware sleep rule in the
/// validator instead.
pub fn duration(start: i32, end: i32) -> i32 {
    (end - start).max(0)
}

/// Strict half-open interval overlap test.
///
/// Touching endpoints do not count as overlapping.
pub fn intervals_overlap(a_start: i32, a_end: i32, b_start: i32, b_end: i32) -> bool {
    a_start < b_end && b_start < a_end
}
