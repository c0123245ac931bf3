//! Free-slot computation over the day window.
//!
//! Produces the ordered complement of the occupied blocks within
//! [day_start, day_end): the intervals the allocator may fill.

use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleBlock;

/// A free interval within the day window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FreeSlot {
    pub start: i32,
    pub end: i32,
}

impl FreeSlot {
    /// Length of the slot in minutes.
    pub fn duration_minutes(&self) -> i32 {
        self.end - self.start
    }

    /// Whether a task of the given length fits entirely in this slot.
    pub fn can_fit(&self, minutes: i32) -> bool {
        self.duration_minutes() >= minutes
    }
}

/// Compute the free slots of the day.
///
/// `occupied` must already be sorted ascending by start. Blocks outside
/// the window are ignored, blocks straddling its edges are clipped, and
/// zero-length slots are dropped.
pub fn build_free_slots(day_start: i32, day_end: i32, occupied: &[ScheduleBlock]) -> Vec<FreeSlot> {
    let mut slots = Vec::new();
    let mut cursor = day_start;

    for block in occupied {
        let (s, e) = (block.start_minutes, block.end_minutes);
        if e <= day_start || s >= day_end {
            continue;
        }
        let clipped_start = s.max(day_start);
        let clipped_end = e.min(day_end);
        if clipped_start > cursor {
            slots.push(FreeSlot {
                start: cursor,
                end: clipped_start,
            });
        }
        cursor = cursor.max(clipped_end);
    }

    if cursor < day_end {
        slots.push(FreeSlot {
            start: cursor,
            end: day_end,
        });
    }

    slots.retain(|s| s.end > s.start);
    slots
}
