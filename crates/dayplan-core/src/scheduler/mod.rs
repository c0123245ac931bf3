//! Day-scheduling engine.
//!
//! Turns a [`DayProfile`] and a list of [`TaskRequest`]s into a
//! conflict-free sequence of timed blocks plus advisory warnings:
//! - validates the day window and fixed commitments
//! - injects default meal/rest blocks where the day has room
//! - computes free slots and splits long focus tasks into chunks
//! - greedily packs tasks into slots, reporting what did not fit
//!
//! The engine is a pure function of its arguments: no I/O, no caching, no
//! shared state. "Re-optimization" is a deterministic rotation of the task
//! order driven by `seed_jitter`, not a search for a better packing.

mod autofill;
mod fill;
mod slots;
mod split;
mod validate;

pub use slots::{build_free_slots, FreeSlot};
pub use split::{split_task, MAX_CHUNK_MINUTES, SPLIT_THRESHOLD_MINUTES};

use crate::schedule::{AgentWarning, DayProfile, GenerateResult, TaskRequest, WarningCode};
use crate::time::{duration, MINUTES_PER_DAY};

/// Sleep below this many minutes draws a `SLEEP_LOW` warning.
const MIN_SLEEP_MINUTES: i32 = 6 * 60;

/// Compute a day's timetable.
///
/// Fatal conditions short-circuit: an unusable day window returns empty
/// blocks with `DAY_RANGE_INVALID`, and overlapping fixed commitments
/// return just those commitments with `FIXED_OVERLAP`. Everything else is
/// advisory. `seed_jitter` is clamped to the expanded task count and
/// rotates the task order left; jitter 0 reproduces the original order.
pub fn generate_schedule(
    profile: &DayProfile,
    tasks: &[TaskRequest],
    seed_jitter: usize,
) -> GenerateResult {
    let mut warnings = Vec::new();
    let day = validate::normalize(profile);

    let (day_start, day_end) = match (day.day_start, day.day_end) {
        (Some(s), Some(e)) if e > s => (s, e),
        _ => {
            return GenerateResult {
                blocks: Vec::new(),
                warnings: vec![AgentWarning::new(
                    WarningCode::DayRangeInvalid,
                    "Invalid day range. Check the day start and end times.",
                )],
            };
        }
    };

    // Unreachable through the HH:MM parser, which caps a day at 23:59;
    // guards callers that construct minute ranges some other way.
    if duration(day_start, day_end) > MINUTES_PER_DAY {
        warnings.push(AgentWarning::new(
            WarningCode::Overbooked,
            "The day window spans more than 24 hours. Adjust it to a single day.",
        ));
    }

    let overlap_pairs = validate::detect_overlaps(&day.fixed);
    if !overlap_pairs.is_empty() {
        tracing::debug!(pairs = overlap_pairs.len(), "fixed commitments overlap");
        warnings.push(AgentWarning::new(
            WarningCode::FixedOverlap,
            "Fixed commitments overlap. Resolve the conflict and regenerate.",
        ));
        return GenerateResult {
            blocks: day.fixed,
            warnings,
        };
    }

    if let (Some(sleep_start), Some(sleep_end)) = (
        profile.sleep_start.as_deref().and_then(crate::time::parse_time),
        profile.sleep_end.as_deref().and_then(crate::time::parse_time),
    ) {
        if validate::sleep_duration(sleep_start, sleep_end) < MIN_SLEEP_MINUTES {
            warnings.push(AgentWarning::new(
                WarningCode::SleepLow,
                "Estimated sleep is under 6 hours. Consider adjusting your routine.",
            ));
        }
    }

    let occupied = autofill::insert_auto_blocks(&day.fixed, &mut warnings);
    let free_slots = build_free_slots(day_start, day_end, &occupied);

    let mut expanded = split::expand_tasks(tasks);
    let jitter = seed_jitter.min(expanded.len());
    expanded.rotate_left(jitter);

    let outcome = fill::fill_slots(expanded, &free_slots);
    if !outcome.leftover.is_empty() {
        tracing::debug!(count = outcome.leftover.len(), "tasks left without a slot");
        warnings.push(AgentWarning::new(
            WarningCode::Overbooked,
            "Not every task fits into the free slots. Reduce the load or widen the day.",
        ));
    }

    let mut blocks = occupied;
    blocks.extend(outcome.blocks);
    blocks.sort_by_key(|b| b.start_minutes);

    GenerateResult { blocks, warnings }
}
