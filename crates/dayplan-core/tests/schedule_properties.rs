//! Property tests over the engine's invariants.

use dayplan_core::scheduler::split_task;
use dayplan_core::time::{format_time, intervals_overlap};
use dayplan_core::{
    generate_schedule, DayProfile, FixedBlockInput, Role, TaskCategory, TaskRequest, WarningCode,
};
use proptest::prelude::*;

fn category_strategy() -> impl Strategy<Value = TaskCategory> {
    prop_oneof![
        Just(TaskCategory::Focus),
        Just(TaskCategory::Light),
        Just(TaskCategory::Rest),
        Just(TaskCategory::Health),
    ]
}

fn task_strategy() -> impl Strategy<Value = TaskRequest> {
    (0u32..10_000, 15u32..=300, category_strategy(), any::<bool>()).prop_map(
        |(n, minutes, category, splittable)| TaskRequest {
            id: format!("t{n}"),
            title: format!("Task {n}"),
            category,
            duration_minutes: minutes,
            intensity: None,
            splittable,
        },
    )
}

/// Day window plus fixed blocks guaranteed disjoint and inside the window.
fn day_strategy() -> impl Strategy<Value = DayProfile> {
    (0i32..480, 600i32..1440)
        .prop_flat_map(|(day_start, day_end)| {
            let window = (day_start, day_end);
            let blocks = prop::collection::vec((0i32..1440, 15i32..120), 0..4).prop_map(
                move |spans| {
                    // Lay spans end-to-end from the window start so fixed
                    // blocks never overlap each other.
                    let mut cursor = window.0;
                    let mut fixed = Vec::new();
                    for (i, (gap, len)) in spans.into_iter().enumerate() {
                        let start = cursor + gap % 120;
                        let end = start + len;
                        if end >= window.1 {
                            break;
                        }
                        fixed.push(FixedBlockInput {
                            id: format!("f{i}"),
                            title: format!("Commitment {i}"),
                            start: format_time(start),
                            end: format_time(end),
                        });
                        cursor = end;
                    }
                    fixed
                },
            );
            (Just(day_start), Just(day_end), blocks)
        })
        .prop_map(|(day_start, day_end, fixed_blocks)| DayProfile {
            role: Role::Worker,
            day_start: format_time(day_start),
            day_end: format_time(day_end),
            desired_productive_hours: 6.0,
            fixed_blocks,
            sleep_start: None,
            sleep_end: None,
            daily_goal: None,
        })
}

fn window_minutes(profile: &DayProfile) -> (i32, i32) {
    (
        dayplan_core::time::parse_time(&profile.day_start).unwrap(),
        dayplan_core::time::parse_time(&profile.day_end).unwrap(),
    )
}

proptest! {
    #[test]
    fn generated_blocks_never_overlap(
        profile in day_strategy(),
        tasks in prop::collection::vec(task_strategy(), 0..6),
    ) {
        let result = generate_schedule(&profile, &tasks, 0);
        prop_assert!(!result.has_warning(WarningCode::FixedOverlap));

        for i in 0..result.blocks.len() {
            for j in (i + 1)..result.blocks.len() {
                let (a, b) = (&result.blocks[i], &result.blocks[j]);
                prop_assert!(
                    !intervals_overlap(
                        a.start_minutes, a.end_minutes,
                        b.start_minutes, b.end_minutes
                    ),
                    "{} overlaps {}", a.id, b.id
                );
            }
        }
    }

    #[test]
    fn allocated_blocks_stay_inside_the_window(
        profile in day_strategy(),
        tasks in prop::collection::vec(task_strategy(), 0..6),
    ) {
        let (day_start, day_end) = window_minutes(&profile);
        let result = generate_schedule(&profile, &tasks, 0);

        for block in result.blocks.iter().filter(|b| !b.locked) {
            prop_assert!(block.start_minutes >= day_start);
            prop_assert!(block.end_minutes <= day_end);
            prop_assert!(block.end_minutes > block.start_minutes);
        }
    }

    #[test]
    fn result_is_sorted_by_start(
        profile in day_strategy(),
        tasks in prop::collection::vec(task_strategy(), 0..6),
    ) {
        let result = generate_schedule(&profile, &tasks, 0);
        let starts: Vec<_> = result.blocks.iter().map(|b| b.start_minutes).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        prop_assert_eq!(starts, sorted);
    }

    #[test]
    fn full_rotation_reproduces_jitter_zero(
        profile in day_strategy(),
        tasks in prop::collection::vec(task_strategy(), 1..5),
    ) {
        let expanded_count: usize = tasks.iter().map(|t| split_task(t).len()).sum();
        let a = generate_schedule(&profile, &tasks, 0);
        let b = generate_schedule(&profile, &tasks, expanded_count);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn oversized_jitter_saturates_at_a_full_rotation(
        profile in day_strategy(),
        tasks in prop::collection::vec(task_strategy(), 1..5),
        excess in 1usize..100,
    ) {
        let expanded_count: usize = tasks.iter().map(|t| split_task(t).len()).sum();
        let a = generate_schedule(&profile, &tasks, expanded_count);
        let b = generate_schedule(&profile, &tasks, expanded_count + excess);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn every_task_is_placed_or_reported(
        profile in day_strategy(),
        tasks in prop::collection::vec(task_strategy(), 0..6),
    ) {
        let expanded_count: usize = tasks.iter().map(|t| split_task(t).len()).sum();
        let result = generate_schedule(&profile, &tasks, 0);
        let placed = result.blocks.iter().filter(|b| !b.locked).count();

        if placed < expanded_count {
            prop_assert!(result.has_warning(WarningCode::Overbooked));
        } else {
            prop_assert_eq!(placed, expanded_count);
        }
    }
}
