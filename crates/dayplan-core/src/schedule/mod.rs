//! Data model for day profiles, task requests, and generated schedules.
//!
//! These types cross the boundary between the scheduling engine and its
//! callers (CLI, storage). Times on input types are "HH:MM" strings;
//! generated blocks carry integer minute-of-day offsets.

use serde::{Deserialize, Serialize};

/// User role, informational only -- the engine never branches on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full-time student
    Student,
    /// Preparing for a competitive exam
    ExamPrep,
    /// Salaried worker
    Worker,
    /// Freelancer with a flexible day
    Freelancer,
}

impl Default for Role {
    fn default() -> Self {
        Role::Student
    }
}

/// Category of a block on the generated timetable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlockCategory {
    /// Deep, high-concentration work
    Focus,
    /// Light administrative work
    Light,
    /// Breaks and meals
    Rest,
    /// Exercise and wellbeing
    Health,
    /// Immovable commitment supplied by the user
    Fixed,
}

impl BlockCategory {
    /// Lowercase label for display.
    pub fn display_name(self) -> &'static str {
        match self {
            BlockCategory::Focus => "focus",
            BlockCategory::Light => "light",
            BlockCategory::Rest => "rest",
            BlockCategory::Health => "health",
            BlockCategory::Fixed => "fixed",
        }
    }

    /// Display color for this category.
    ///
    /// Total over the enumeration; adding a category without a color is a
    /// compile error.
    pub fn color(self) -> BlockColor {
        match self {
            BlockCategory::Focus => BlockColor::Coral,
            BlockCategory::Light => BlockColor::Sky,
            BlockCategory::Rest => BlockColor::Mint,
            BlockCategory::Health => BlockColor::Lilac,
            BlockCategory::Fixed => BlockColor::Beige,
        }
    }
}

/// Category of a requested task.
///
/// Same set as [`BlockCategory`] minus `Fixed`: that tag is reserved for
/// commitments, and keeping it out of this enum makes the restriction
/// unrepresentable rather than validated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Focus,
    Light,
    Rest,
    Health,
}

impl TaskCategory {
    /// Widen into the block-category space.
    pub fn as_block_category(self) -> BlockCategory {
        match self {
            TaskCategory::Focus => BlockCategory::Focus,
            TaskCategory::Light => BlockCategory::Light,
            TaskCategory::Rest => BlockCategory::Rest,
            TaskCategory::Health => BlockCategory::Health,
        }
    }
}

/// Pastel display color keyed by category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlockColor {
    Coral,
    Sky,
    Mint,
    Lilac,
    Beige,
}

/// Subjective intensity of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

/// An immovable commitment in the user's day.
///
/// `end`, interpreted same-day, must exceed `start` for the block to be
/// considered valid; invalid blocks are silently dropped during
/// normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixedBlockInput {
    pub id: String,
    pub title: String,
    /// "HH:MM"
    pub start: String,
    /// "HH:MM"
    pub end: String,
}

/// The user's day context, treated as a read-only snapshot per generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayProfile {
    #[serde(default)]
    pub role: Role,
    /// "HH:MM" day window start
    pub day_start: String,
    /// "HH:MM" day window end
    pub day_end: String,
    /// Advisory productivity target in hours; not enforced by the allocator.
    pub desired_productive_hours: f32,
    #[serde(default)]
    pub fixed_blocks: Vec<FixedBlockInput>,
    /// Optional sleep window; may wrap past midnight.
    #[serde(default)]
    pub sleep_start: Option<String>,
    #[serde(default)]
    pub sleep_end: Option<String>,
    /// Free-text intent for the day.
    #[serde(default)]
    pub daily_goal: Option<String>,
}

/// A unit of work the engine must place into the day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskRequest {
    pub id: String,
    pub title: String,
    pub category: TaskCategory,
    pub duration_minutes: u32,
    #[serde(default)]
    pub intensity: Option<Intensity>,
    /// When true the engine may fragment this task into chunks.
    #[serde(default)]
    pub splittable: bool,
}

/// An entry on the generated timetable.
///
/// Minute offsets are in [0, 1440) scope and not wrapped. `locked` marks
/// commitments and auto-inserted blocks as not user-editable without an
/// explicit override; no two locked blocks of a settled schedule overlap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleBlock {
    pub id: String,
    pub title: String,
    pub category: BlockCategory,
    pub color: BlockColor,
    pub start_minutes: i32,
    pub end_minutes: i32,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Diagnostic code attached to a generation attempt.
///
/// `WorkOverload` and `TaskTruncated` are reserved for forward
/// compatibility and not currently emitted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    SleepLow,
    DayRangeInvalid,
    Overbooked,
    WorkOverload,
    TaskTruncated,
    FixedOverlap,
    AutofillInserted,
}

impl WarningCode {
    /// Wire-format label, matching the serialized form.
    pub fn display_name(self) -> &'static str {
        match self {
            WarningCode::SleepLow => "SLEEP_LOW",
            WarningCode::DayRangeInvalid => "DAY_RANGE_INVALID",
            WarningCode::Overbooked => "OVERBOOKED",
            WarningCode::WorkOverload => "WORK_OVERLOAD",
            WarningCode::TaskTruncated => "TASK_TRUNCATED",
            WarningCode::FixedOverlap => "FIXED_OVERLAP",
            WarningCode::AutofillInserted => "AUTOFILL_INSERTED",
        }
    }
}

/// A warning code plus its human-readable message.
///
/// Purely advisory except for `DayRangeInvalid` and `FixedOverlap`, which
/// also short-circuit generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentWarning {
    pub code: WarningCode,
    pub message: String,
}

impl AgentWarning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// The blocks/warnings pair returned per generation.
///
/// Stateless: fully replaced on each regeneration, never merged
/// incrementally by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenerateResult {
    pub blocks: Vec<ScheduleBlock>,
    pub warnings: Vec<AgentWarning>,
}

impl GenerateResult {
    /// Whether any warning with the given code was emitted.
    pub fn has_warning(&self, code: WarningCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}
