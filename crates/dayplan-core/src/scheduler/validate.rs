//! Day-profile normalization and sanity checks.
//!
//! Converts wall-clock inputs to minute form, drops fixed blocks the
//! engine cannot use, and detects pairwise overlaps among the survivors.

use crate::schedule::{BlockCategory, DayProfile, ScheduleBlock};
use crate::time::{intervals_overlap, parse_time, MINUTES_PER_DAY};

/// A profile normalized to minute-of-day form.
///
/// `day_start`/`day_end` are `None` when the corresponding wall-clock
/// string failed to parse; the orchestrator turns that into a fatal
/// `DAY_RANGE_INVALID`.
pub(crate) struct NormalizedDay {
    pub day_start: Option<i32>,
    pub day_end: Option<i32>,
    /// Surviving fixed blocks, ascending by start.
    pub fixed: Vec<ScheduleBlock>,
}

/// Convert the profile's day window and fixed blocks to minutes.
///
/// Fixed blocks whose times fail to parse, or whose end does not exceed
/// their start, are dropped without surfacing a warning; callers rely on
/// this tolerant behavior.
pub(crate) fn normalize(profile: &DayProfile) -> NormalizedDay {
    let day_start = parse_time(&profile.day_start);
    let day_end = parse_time(&profile.day_end);

    let mut fixed: Vec<ScheduleBlock> = profile
        .fixed_blocks
        .iter()
        .filter_map(|b| {
            let (start, end) = match (parse_time(&b.start), parse_time(&b.end)) {
                (Some(s), Some(e)) if e > s => (s, e),
                _ => {
                    tracing::warn!(id = %b.id, start = %b.start, end = %b.end,
                        "dropping fixed block with unusable time range");
                    return None;
                }
            };
            Some(ScheduleBlock {
                id: b.id.clone(),
                title: b.title.clone(),
                category: BlockCategory::Fixed,
                color: BlockCategory::Fixed.color(),
                start_minutes: start,
                end_minutes: end,
                locked: true,
                notes: None,
            })
        })
        .collect();

    fixed.sort_by_key(|b| b.start_minutes);

    NormalizedDay {
        day_start,
        day_end,
        fixed,
    }
}

/// Indices of every pair of blocks whose intervals overlap.
pub(crate) fn detect_overlaps(blocks: &[ScheduleBlock]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..blocks.len() {
        for j in (i + 1)..blocks.len() {
            if intervals_overlap(
                blocks[i].start_minutes,
                blocks[i].end_minutes,
                blocks[j].start_minutes,
                blocks[j].end_minutes,
            ) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Sleep duration in minutes, allowing the window to wrap past midnight.
pub(crate) fn sleep_duration(start: i32, end: i32) -> i32 {
    if end >= start {
        end - start
    } else {
        MINUTES_PER_DAY - start + end
    }
}
