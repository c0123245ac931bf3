use clap::Subcommand;
use dayplan_core::Role;

use super::{load_state, with_state};
use dayplan_core::DayStore;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the current profile as JSON
    Show,
    /// Set the user role (student, exam-prep, worker, freelancer)
    SetRole { role: String },
    /// Set the day window, e.g. 07:00 23:00
    SetDay { start: String, end: String },
    /// Set the desired productive hours
    SetHours { hours: f32 },
    /// Set the sleep window explicitly
    SetSleep { start: String, end: String },
    /// Derive a sleep window of N hours ending at day start
    SleepHours { hours: u32 },
    /// Set the free-text daily goal (empty clears it)
    SetGoal { goal: String },
}

fn parse_role(raw: &str) -> Result<Role, Box<dyn std::error::Error>> {
    match raw.to_lowercase().as_str() {
        "student" => Ok(Role::Student),
        "exam-prep" | "exam_prep" => Ok(Role::ExamPrep),
        "worker" => Ok(Role::Worker),
        "freelancer" => Ok(Role::Freelancer),
        other => Err(format!(
            "unknown role '{other}' (expected student, exam-prep, worker, or freelancer)"
        )
        .into()),
    }
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Show => {
            let store = DayStore::open()?;
            let state = load_state(&store)?;
            println!("{}", serde_json::to_string_pretty(&state.profile)?);
        }
        ProfileAction::SetRole { role } => {
            let role = parse_role(&role)?;
            with_state(|state| {
                state.set_role(role);
                Ok(())
            })?;
            println!("role updated");
        }
        ProfileAction::SetDay { start, end } => {
            with_state(|state| {
                state.set_day_range(start, end);
                Ok(())
            })?;
            println!("day window updated");
        }
        ProfileAction::SetHours { hours } => {
            with_state(|state| {
                state.set_desired_hours(hours);
                Ok(())
            })?;
            println!("desired hours updated");
        }
        ProfileAction::SetSleep { start, end } => {
            with_state(|state| {
                state.set_sleep(Some(start), Some(end));
                Ok(())
            })?;
            println!("sleep window updated");
        }
        ProfileAction::SleepHours { hours } => {
            with_state(|state| {
                state.set_sleep_hours(hours);
                Ok(())
            })?;
            println!("sleep window derived from day start");
        }
        ProfileAction::SetGoal { goal } => {
            with_state(|state| {
                state.set_daily_goal(&goal);
                Ok(())
            })?;
            println!("daily goal updated");
        }
    }
    Ok(())
}
