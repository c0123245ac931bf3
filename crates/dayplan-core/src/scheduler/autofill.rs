//! Automatic insertion of default meal and rest blocks.
//!
//! When the user has not placed their own meals or breaks, the engine
//! injects a small set of defaults wherever the day still has room.

use crate::schedule::{AgentWarning, BlockCategory, ScheduleBlock, WarningCode};
use crate::time::{intervals_overlap, parse_time};

struct DefaultBlock {
    title: &'static str,
    start: &'static str,
    end: &'static str,
}

/// Candidate defaults, tried in this order. Acceptance is cumulative: a
/// candidate must clear both the blocks the user defined and the
/// candidates already accepted in the same pass.
const DEFAULT_BLOCKS: [DefaultBlock; 4] = [
    DefaultBlock {
        title: "Comida",
        start: "14:00",
        end: "14:45",
    },
    DefaultBlock {
        title: "Cena",
        start: "21:00",
        end: "21:30",
    },
    DefaultBlock {
        title: "Descanso",
        start: "11:00",
        end: "11:15",
    },
    DefaultBlock {
        title: "Descanso",
        start: "17:30",
        end: "17:45",
    },
];

fn has_block_title(blocks: &[ScheduleBlock], title: &str) -> bool {
    let wanted = title.trim().to_lowercase();
    blocks
        .iter()
        .any(|b| b.title.trim().to_lowercase() == wanted)
}

/// Inject default meal/rest blocks into the occupied set where room exists.
///
/// Returns the full occupied set (fixed plus accepted candidates) sorted
/// ascending by start. Emits a single `AUTOFILL_INSERTED` warning when at
/// least one candidate was accepted, regardless of how many.
pub(crate) fn insert_auto_blocks(
    fixed: &[ScheduleBlock],
    warnings: &mut Vec<AgentWarning>,
) -> Vec<ScheduleBlock> {
    let mut occupied: Vec<ScheduleBlock> = fixed.to_vec();
    let mut inserted = 0usize;

    for candidate in &DEFAULT_BLOCKS {
        if has_block_title(&occupied, candidate.title) {
            continue;
        }
        let (start, end) = match (parse_time(candidate.start), parse_time(candidate.end)) {
            (Some(s), Some(e)) if e > s => (s, e),
            _ => continue,
        };

        let clashes = occupied
            .iter()
            .any(|b| intervals_overlap(b.start_minutes, b.end_minutes, start, end));
        if clashes {
            continue;
        }

        occupied.push(ScheduleBlock {
            id: format!("auto_{}_{}", candidate.title.to_lowercase(), start),
            title: candidate.title.to_string(),
            category: BlockCategory::Rest,
            color: BlockCategory::Rest.color(),
            start_minutes: start,
            end_minutes: end,
            locked: true,
            notes: Some("auto-inserted".to_string()),
        });
        inserted += 1;
    }

    if inserted > 0 {
        tracing::debug!(count = inserted, "auto-inserted default blocks");
        warnings.push(AgentWarning::new(
            WarningCode::AutofillInserted,
            "Default meal and rest blocks were added where the day had room.",
        ));
    }

    occupied.sort_by_key(|b| b.start_minutes);
    occupied
}
