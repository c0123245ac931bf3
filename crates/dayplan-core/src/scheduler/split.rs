//! Splitting of long high-focus tasks into bounded chunks.

use crate::schedule::{Intensity, TaskCategory, TaskRequest};

/// Minimum duration before a splittable focus task is fragmented.
pub const SPLIT_THRESHOLD_MINUTES: u32 = 120;

/// Upper bound on a single chunk.
pub const MAX_CHUNK_MINUTES: u32 = 90;

/// Decompose a task into schedulable chunks.
///
/// Only focus tasks flagged splittable and at least
/// [`SPLIT_THRESHOLD_MINUTES`] long are fragmented; everything else passes
/// through as a single-element sequence. Chunks peel off
/// [`MAX_CHUNK_MINUTES`] at a time until the remainder is exhausted, are
/// numbered from 1 in peel order, forced to high intensity, and are not
/// themselves re-splittable.
pub fn split_task(task: &TaskRequest) -> Vec<TaskRequest> {
    if task.category != TaskCategory::Focus
        || !task.splittable
        || task.duration_minutes < SPLIT_THRESHOLD_MINUTES
    {
        return vec![task.clone()];
    }

    let mut chunks = Vec::new();
    let mut remaining = task.duration_minutes;
    let mut idx = 1u32;
    while remaining > 0 {
        let chunk = MAX_CHUNK_MINUTES.min(remaining);
        chunks.push(TaskRequest {
            id: format!("{}_chunk_{idx}", task.id),
            title: format!("{} ({idx})", task.title),
            category: task.category,
            duration_minutes: chunk,
            intensity: Some(Intensity::High),
            splittable: false,
        });
        remaining -= chunk;
        idx += 1;
    }
    chunks
}

/// Expand a task list through the splitter, preserving relative order and
/// concatenating chunk sequences in place.
pub(crate) fn expand_tasks(tasks: &[TaskRequest]) -> Vec<TaskRequest> {
    tasks.iter().flat_map(|t| split_task(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focus_task(minutes: u32, splittable: bool) -> TaskRequest {
        TaskRequest {
            id: "study".to_string(),
            title: "Deep study".to_string(),
            category: TaskCategory::Focus,
            duration_minutes: minutes,
            intensity: Some(Intensity::High),
            splittable,
        }
    }

    #[test]
    fn splits_240_minutes_into_three_chunks() {
        let chunks = split_task(&focus_task(240, true));
        let durations: Vec<_> = chunks.iter().map(|c| c.duration_minutes).collect();
        assert_eq!(durations, [90, 90, 60]);

        let titles: Vec<_> = chunks.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Deep study (1)", "Deep study (2)", "Deep study (3)"]);

        let ids: Vec<_> = chunks.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["study_chunk_1", "study_chunk_2", "study_chunk_3"]);
    }

    #[test]
    fn chunks_are_high_intensity_and_not_resplittable() {
        let chunks = split_task(&focus_task(180, true));
        assert!(chunks
            .iter()
            .all(|c| c.intensity == Some(Intensity::High) && !c.splittable));
    }

    #[test]
    fn exact_multiple_has_no_remainder_chunk() {
        let chunks = split_task(&focus_task(180, true));
        let durations: Vec<_> = chunks.iter().map(|c| c.duration_minutes).collect();
        assert_eq!(durations, [90, 90]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let chunks = split_task(&focus_task(120, true));
        let durations: Vec<_> = chunks.iter().map(|c| c.duration_minutes).collect();
        assert_eq!(durations, [90, 30]);

        // One minute under the threshold passes through untouched
        let untouched = split_task(&focus_task(119, true));
        assert_eq!(untouched.len(), 1);
        assert_eq!(untouched[0].id, "study");
    }

    #[test]
    fn non_splittable_focus_passes_through() {
        let out = split_task(&focus_task(240, false));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0], focus_task(240, false));
    }

    #[test]
    fn non_focus_categories_pass_through() {
        let task = TaskRequest {
            id: "walk".to_string(),
            title: "Long walk".to_string(),
            category: TaskCategory::Health,
            duration_minutes: 240,
            intensity: None,
            splittable: true,
        };
        let out = split_task(&task);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0], task);
    }

    #[test]
    fn expansion_preserves_relative_order() {
        let tasks = vec![
            focus_task(200, true),
            TaskRequest {
                id: "mail".to_string(),
                title: "Email".to_string(),
                category: TaskCategory::Light,
                duration_minutes: 30,
                intensity: None,
                splittable: false,
            },
        ];
        let expanded = expand_tasks(&tasks);
        let ids: Vec<_> = expanded.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["study_chunk_1", "study_chunk_2", "study_chunk_3", "mail"]);
    }
}
