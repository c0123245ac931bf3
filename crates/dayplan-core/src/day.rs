//! Application day state: profile, task list, and the last generated result.
//!
//! The engine is a pure function; this is the stateful calling layer that
//! owns its inputs. Mutations happen here, generation snapshots the current
//! profile and tasks, and the caller persists the whole object through
//! [`crate::storage::DayStore`]. Re-optimization is a counter over the
//! previous jitter value, not a function of the previous output.

use serde::{Deserialize, Serialize};

use crate::schedule::{
    DayProfile, FixedBlockInput, GenerateResult, Intensity, Role, TaskCategory, TaskRequest,
};
use crate::scheduler::generate_schedule;
use crate::time::{format_time, parse_time, MINUTES_PER_DAY};

/// Everything the calling layer owns between generations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayState {
    pub profile: DayProfile,
    pub tasks: Vec<TaskRequest>,
    /// Result of the most recent generation, replaced wholesale each time.
    #[serde(default)]
    pub last_result: Option<GenerateResult>,
    /// Jitter used for the last generation; reoptimize advances it.
    #[serde(default)]
    pub last_seed: usize,
}

impl Default for DayState {
    fn default() -> Self {
        Self {
            profile: DayProfile {
                role: Role::Student,
                day_start: "07:00".to_string(),
                day_end: "23:00".to_string(),
                desired_productive_hours: 6.0,
                fixed_blocks: vec![FixedBlockInput {
                    id: "fixed_class".to_string(),
                    title: "Classes".to_string(),
                    start: "09:00".to_string(),
                    end: "14:00".to_string(),
                }],
                sleep_start: Some("00:00".to_string()),
                sleep_end: Some("07:00".to_string()),
                daily_goal: None,
            },
            tasks: vec![
                TaskRequest {
                    id: "t_focus_1".to_string(),
                    title: "Deep study".to_string(),
                    category: TaskCategory::Focus,
                    duration_minutes: 240,
                    intensity: Some(Intensity::High),
                    splittable: true,
                },
                TaskRequest {
                    id: "t_light_1".to_string(),
                    title: "Admin / email".to_string(),
                    category: TaskCategory::Light,
                    duration_minutes: 45,
                    intensity: Some(Intensity::Low),
                    splittable: false,
                },
                TaskRequest {
                    id: "t_health_1".to_string(),
                    title: "Exercise".to_string(),
                    category: TaskCategory::Health,
                    duration_minutes: 45,
                    intensity: Some(Intensity::Medium),
                    splittable: false,
                },
            ],
            last_result: None,
            last_seed: 0,
        }
    }
}

impl DayState {
    pub fn set_role(&mut self, role: Role) {
        self.profile.role = role;
    }

    pub fn set_day_range(&mut self, start: impl Into<String>, end: impl Into<String>) {
        self.profile.day_start = start.into();
        self.profile.day_end = end.into();
    }

    /// Set the advisory productivity target, clamped to [0, 24] hours.
    pub fn set_desired_hours(&mut self, hours: f32) {
        self.profile.desired_productive_hours = hours.clamp(0.0, 24.0);
    }

    pub fn set_sleep(&mut self, start: Option<String>, end: Option<String>) {
        self.profile.sleep_start = start;
        self.profile.sleep_end = end;
    }

    /// Derive a sleep window of `hours` that ends exactly at day start,
    /// wrapping past midnight when needed. No-op if the day start does not
    /// parse.
    pub fn set_sleep_hours(&mut self, hours: u32) {
        let Some(day_start) = parse_time(&self.profile.day_start) else {
            tracing::debug!(day_start = %self.profile.day_start,
                "cannot derive sleep window from unparsable day start");
            return;
        };
        let sleep_end = day_start;
        let sleep_start = (day_start - hours as i32 * 60).rem_euclid(MINUTES_PER_DAY);
        self.profile.sleep_start = Some(format_time(sleep_start));
        self.profile.sleep_end = Some(format_time(sleep_end));
    }

    /// Set the free-text goal; a blank string clears it.
    pub fn set_daily_goal(&mut self, goal: &str) {
        let trimmed = goal.trim();
        self.profile.daily_goal = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// Add a fixed commitment and return its generated id.
    pub fn add_fixed(
        &mut self,
        title: &str,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> String {
        let title = title.trim();
        let id = format!("fixed_{}", uuid::Uuid::new_v4());
        self.profile.fixed_blocks.push(FixedBlockInput {
            id: id.clone(),
            title: if title.is_empty() {
                "Fixed block".to_string()
            } else {
                title.to_string()
            },
            start: start.into(),
            end: end.into(),
        });
        id
    }

    /// Remove a fixed commitment by id; returns whether one was removed.
    pub fn remove_fixed(&mut self, id: &str) -> bool {
        let before = self.profile.fixed_blocks.len();
        self.profile.fixed_blocks.retain(|b| b.id != id);
        self.profile.fixed_blocks.len() != before
    }

    /// Add a task request and return its generated id.
    pub fn add_task(
        &mut self,
        title: &str,
        category: TaskCategory,
        duration_minutes: u32,
        intensity: Option<Intensity>,
        splittable: bool,
    ) -> String {
        let title = title.trim();
        let id = format!("task_{}", uuid::Uuid::new_v4());
        self.tasks.push(TaskRequest {
            id: id.clone(),
            title: if title.is_empty() {
                "Task".to_string()
            } else {
                title.to_string()
            },
            category,
            duration_minutes,
            intensity,
            splittable,
        });
        id
    }

    /// Remove a task by id; returns whether one was removed.
    pub fn remove_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Run the engine with jitter 0 and store the fresh result.
    pub fn generate(&mut self) -> &GenerateResult {
        let result = generate_schedule(&self.profile, &self.tasks, 0);
        self.last_seed = 0;
        self.last_result.insert(result)
    }

    /// Advance the jitter counter modulo the task count and regenerate.
    pub fn reoptimize(&mut self) -> &GenerateResult {
        let seed = (self.last_seed + 1) % self.tasks.len().max(1);
        let result = generate_schedule(&self.profile, &self.tasks, seed);
        self.last_seed = seed;
        self.last_result.insert(result)
    }

    /// Manually move one block of the last result.
    ///
    /// Applied directly to the stored result without re-running the engine
    /// and without overlap validation; callers accept that an edited block
    /// may collide with a locked one. Returns false when there is no result
    /// or no block with that id.
    pub fn update_block_time(&mut self, block_id: &str, start_minutes: i32, end_minutes: i32) -> bool {
        let Some(result) = self.last_result.as_mut() else {
            return false;
        };
        match result.blocks.iter_mut().find(|b| b.id == block_id) {
            Some(block) => {
                block.start_minutes = start_minutes;
                block.end_minutes = end_minutes;
                true
            }
            None => false,
        }
    }
}
