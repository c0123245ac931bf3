//! Greedy allocation of tasks into free slots.

use std::collections::VecDeque;

use crate::schedule::{ScheduleBlock, TaskCategory, TaskRequest};
use crate::scheduler::slots::FreeSlot;

/// Coaching note attached to placed focus blocks.
const FOCUS_NOTE: &str = "Try 90-minute blocks or a Pomodoro cadence if focus drifts.";

pub(crate) struct FillOutcome {
    pub blocks: Vec<ScheduleBlock>,
    /// Tasks that fit in no slot, in queue order.
    pub leftover: Vec<TaskRequest>,
}

/// Place tasks into slots in a single greedy pass.
///
/// Task order is preserved: each slot keeps a cursor and consumes the
/// queue head while it fits. A head that does not fit closes the slot
/// immediately -- later, smaller tasks never jump the queue, so slots are
/// not fragmented by out-of-order placement. No retry or backtracking.
pub(crate) fn fill_slots(tasks: Vec<TaskRequest>, slots: &[FreeSlot]) -> FillOutcome {
    let mut blocks = Vec::new();
    let mut remaining: VecDeque<TaskRequest> = tasks.into();

    for slot in slots {
        let mut cursor = slot.start;
        while let Some(task) = remaining.pop_front() {
            let needed = task.duration_minutes as i32;
            if cursor >= slot.end || needed > slot.end - cursor {
                // Head does not fit; put it back and close this slot.
                remaining.push_front(task);
                break;
            }

            let is_focus = task.category == TaskCategory::Focus;
            let category = task.category.as_block_category();
            blocks.push(ScheduleBlock {
                id: task.id,
                title: task.title,
                category,
                color: category.color(),
                start_minutes: cursor,
                end_minutes: cursor + needed,
                locked: false,
                notes: is_focus.then(|| FOCUS_NOTE.to_string()),
            });
            cursor += needed;
        }
    }

    FillOutcome {
        blocks,
        leftover: remaining.into(),
    }
}
