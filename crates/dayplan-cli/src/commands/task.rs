use clap::Subcommand;
use dayplan_core::{DayStore, Intensity, TaskCategory};

use super::{load_state, with_state};

#[derive(Subcommand)]
pub enum TaskAction {
    /// List task requests as JSON
    List,
    /// Add a task request
    Add {
        title: String,
        /// focus, light, rest, or health
        #[arg(long, default_value = "light")]
        category: String,
        /// Duration in minutes
        #[arg(long, default_value_t = 60)]
        minutes: u32,
        /// low, medium, or high
        #[arg(long)]
        intensity: Option<String>,
        /// Allow the engine to fragment this task
        #[arg(long)]
        splittable: bool,
    },
    /// Remove a task by id
    Remove { id: String },
}

fn parse_category(raw: &str) -> Result<TaskCategory, Box<dyn std::error::Error>> {
    match raw.to_lowercase().as_str() {
        "focus" => Ok(TaskCategory::Focus),
        "light" => Ok(TaskCategory::Light),
        "rest" => Ok(TaskCategory::Rest),
        "health" => Ok(TaskCategory::Health),
        other => {
            Err(format!("unknown category '{other}' (expected focus, light, rest, or health)").into())
        }
    }
}

fn parse_intensity(raw: &str) -> Result<Intensity, Box<dyn std::error::Error>> {
    match raw.to_lowercase().as_str() {
        "low" => Ok(Intensity::Low),
        "medium" => Ok(Intensity::Medium),
        "high" => Ok(Intensity::High),
        other => Err(format!("unknown intensity '{other}' (expected low, medium, or high)").into()),
    }
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TaskAction::List => {
            let store = DayStore::open()?;
            let state = load_state(&store)?;
            println!("{}", serde_json::to_string_pretty(&state.tasks)?);
        }
        TaskAction::Add {
            title,
            category,
            minutes,
            intensity,
            splittable,
        } => {
            if minutes == 0 {
                return Err("task duration must be a positive number of minutes".into());
            }
            let category = parse_category(&category)?;
            let intensity = intensity.as_deref().map(parse_intensity).transpose()?;
            let mut new_id = String::new();
            with_state(|state| {
                new_id = state.add_task(&title, category, minutes, intensity, splittable);
                Ok(())
            })?;
            println!("task added: {new_id}");
        }
        TaskAction::Remove { id } => {
            let mut removed = false;
            with_state(|state| {
                removed = state.remove_task(&id);
                Ok(())
            })?;
            if removed {
                println!("task removed");
            } else {
                return Err(format!("no task with id '{id}'").into());
            }
        }
    }
    Ok(())
}
