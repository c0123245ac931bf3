//! End-to-end scenarios for the scheduling engine.

use dayplan_core::time::intervals_overlap;
use dayplan_core::{
    generate_schedule, DayProfile, FixedBlockInput, Intensity, Role, TaskCategory, TaskRequest,
    WarningCode,
};

fn profile(day_start: &str, day_end: &str) -> DayProfile {
    DayProfile {
        role: Role::Student,
        day_start: day_start.to_string(),
        day_end: day_end.to_string(),
        desired_productive_hours: 6.0,
        fixed_blocks: Vec::new(),
        sleep_start: None,
        sleep_end: None,
        daily_goal: None,
    }
}

fn assert_no_overlaps(blocks: &[dayplan_core::ScheduleBlock]) {
    for i in 0..blocks.len() {
        for j in (i + 1)..blocks.len() {
            let (a, b) = (&blocks[i], &blocks[j]);
            assert!(
                !intervals_overlap(a.start_minutes, a.end_minutes, b.start_minutes, b.end_minutes),
                "{} [{}-{}] overlaps {} [{}-{}]",
                a.id,
                a.start_minutes,
                a.end_minutes,
                b.id,
                b.start_minutes,
                b.end_minutes
            );
        }
    }
}

#[test]
fn splittable_focus_day_places_every_chunk() {
    let profile = profile("07:00", "23:00");
    let tasks = vec![TaskRequest {
        id: "study".to_string(),
        title: "Deep study".to_string(),
        category: TaskCategory::Focus,
        duration_minutes: 240,
        intensity: Some(Intensity::High),
        splittable: true,
    }];

    let result = generate_schedule(&profile, &tasks, 0);

    assert!(result.has_warning(WarningCode::AutofillInserted));
    assert!(!result.has_warning(WarningCode::Overbooked));

    let chunk_titles: Vec<_> = result
        .blocks
        .iter()
        .filter(|b| b.id.starts_with("study_chunk_"))
        .map(|b| b.title.clone())
        .collect();
    assert_eq!(
        chunk_titles,
        ["Deep study (1)", "Deep study (2)", "Deep study (3)"]
    );

    let chunk_minutes: i32 = result
        .blocks
        .iter()
        .filter(|b| b.id.starts_with("study_chunk_"))
        .map(|b| b.end_minutes - b.start_minutes)
        .sum();
    assert_eq!(chunk_minutes, 240);

    assert_no_overlaps(&result.blocks);

    // Everything inside the day window
    assert!(result
        .blocks
        .iter()
        .all(|b| b.start_minutes >= 420 && b.end_minutes <= 1380));
}

#[test]
fn overlapping_commitments_return_only_the_commitments() {
    let mut profile = profile("07:00", "23:00");
    profile.fixed_blocks = vec![
        FixedBlockInput {
            id: "morning".to_string(),
            title: "Morning shift".to_string(),
            start: "09:00".to_string(),
            end: "14:00".to_string(),
        },
        FixedBlockInput {
            id: "meeting".to_string(),
            title: "Committee".to_string(),
            start: "13:00".to_string(),
            end: "15:00".to_string(),
        },
    ];
    let tasks = vec![TaskRequest {
        id: "t".to_string(),
        title: "Reading".to_string(),
        category: TaskCategory::Light,
        duration_minutes: 30,
        intensity: None,
        splittable: false,
    }];

    let result = generate_schedule(&profile, &tasks, 0);

    assert!(result.has_warning(WarningCode::FixedOverlap));
    let ids: Vec<_> = result.blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["morning", "meeting"]);
    assert!(!result.has_warning(WarningCode::AutofillInserted));
}

#[test]
fn half_hour_day_cannot_host_a_45_minute_task() {
    let profile = profile("07:00", "07:30");
    let tasks = vec![TaskRequest {
        id: "t".to_string(),
        title: "Errand".to_string(),
        category: TaskCategory::Light,
        duration_minutes: 45,
        intensity: None,
        splittable: false,
    }];

    let result = generate_schedule(&profile, &tasks, 0);

    assert!(result.has_warning(WarningCode::Overbooked));
    assert!(!result.blocks.iter().any(|b| b.id == "t"));
}

#[test]
fn malformed_fixed_blocks_are_dropped_not_fatal() {
    let mut profile = profile("07:00", "23:00");
    profile.fixed_blocks = vec![
        FixedBlockInput {
            id: "bad".to_string(),
            title: "Ghost".to_string(),
            start: "whenever".to_string(),
            end: "later".to_string(),
        },
        FixedBlockInput {
            id: "good".to_string(),
            title: "Lecture".to_string(),
            start: "09:00".to_string(),
            end: "11:00".to_string(),
        },
    ];

    let result = generate_schedule(&profile, &[], 0);

    assert!(!result.has_warning(WarningCode::DayRangeInvalid));
    assert!(result.blocks.iter().any(|b| b.id == "good"));
    assert!(!result.blocks.iter().any(|b| b.id == "bad"));
}

#[test]
fn reserved_warning_codes_are_never_emitted() {
    let profile = profile("07:00", "23:00");
    let tasks = vec![TaskRequest {
        id: "t".to_string(),
        title: "Work".to_string(),
        category: TaskCategory::Focus,
        duration_minutes: 600,
        intensity: None,
        splittable: true,
    }];

    let result = generate_schedule(&profile, &tasks, 0);
    assert!(!result.has_warning(WarningCode::WorkOverload));
    assert!(!result.has_warning(WarningCode::TaskTruncated));
}

#[test]
fn commitments_straddling_the_window_still_constrain_allocation() {
    let mut profile = profile("07:00", "23:00");
    profile.fixed_blocks = vec![FixedBlockInput {
        id: "early".to_string(),
        title: "Gym class".to_string(),
        start: "06:00".to_string(),
        end: "08:00".to_string(),
    }];
    let tasks = vec![TaskRequest {
        id: "t".to_string(),
        title: "Reading".to_string(),
        category: TaskCategory::Light,
        duration_minutes: 60,
        intensity: None,
        splittable: false,
    }];

    let result = generate_schedule(&profile, &tasks, 0);
    let placed = result.blocks.iter().find(|b| b.id == "t").unwrap();
    // The first free minute inside the window is 08:00
    assert_eq!(placed.start_minutes, 480);
    assert_no_overlaps(&result.blocks);
}
