//! # Dayplan Core Library
//!
//! This library computes a single day's activity timetable from a user
//! profile (fixed commitments, sleep window, desired productive hours) and
//! a list of requested tasks. It follows a CLI-first philosophy: all
//! operations are available through a standalone CLI binary, which is a
//! thin layer over this library.
//!
//! ## Architecture
//!
//! - **Scheduler**: a pure, synchronous engine -- validation, automatic
//!   meal/rest insertion, free-slot computation, task splitting, and a
//!   greedy allocator with an advisory warnings model
//! - **Day state**: the explicit application-state object the calling
//!   layer owns between generations
//! - **Storage**: SQLite-backed day-state blobs and TOML-based settings
//!
//! ## Key Components
//!
//! - [`generate_schedule`]: the engine entry point
//! - [`DayState`]: profile, task list, and last result with mutation API
//! - [`DayStore`]: keyed, versioned persistence for [`DayState`]
//! - [`Settings`]: user settings

pub mod day;
pub mod error;
pub mod schedule;
pub mod scheduler;
pub mod storage;
pub mod time;

pub use day::DayState;
pub use error::{CoreError, SettingsError, StorageError};
pub use schedule::{
    AgentWarning, BlockCategory, BlockColor, DayProfile, FixedBlockInput, GenerateResult,
    Intensity, Role, ScheduleBlock, TaskCategory, TaskRequest, WarningCode,
};
pub use scheduler::{build_free_slots, generate_schedule, FreeSlot};
pub use storage::{DayStore, Settings};
