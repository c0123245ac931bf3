use clap::Subcommand;
use dayplan_core::time::{format_time, parse_time};
use dayplan_core::{DayStore, GenerateResult};

use super::{load_state, with_state};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Generate a fresh schedule from the current profile and tasks
    Generate {
        /// Print the raw result as JSON instead of a timeline
        #[arg(long)]
        json: bool,
    },
    /// Regenerate with the task order rotated one step further
    Reoptimize {
        #[arg(long)]
        json: bool,
    },
    /// Show the last generated schedule
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Manually move one block of the last result, e.g. move <id> 16:00 17:00
    ///
    /// Applied without overlap validation; the engine does not re-check
    /// manually edited blocks.
    Move {
        id: String,
        start: String,
        end: String,
    },
}

fn render(result: &GenerateResult, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    if result.blocks.is_empty() {
        println!("(no blocks)");
    }
    for block in &result.blocks {
        let lock = if block.locked { " [locked]" } else { "" };
        println!(
            "{}-{}  {}  [{}]{}",
            format_time(block.start_minutes),
            format_time(block.end_minutes),
            block.title,
            block.category.display_name(),
            lock
        );
    }
    for warning in &result.warnings {
        println!("warning[{}]: {}", warning.code.display_name(), warning.message);
    }
    Ok(())
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScheduleAction::Generate { json } => {
            let mut result = GenerateResult::default();
            with_state(|state| {
                result = state.generate().clone();
                Ok(())
            })?;
            render(&result, json)?;
        }
        ScheduleAction::Reoptimize { json } => {
            let mut result = GenerateResult::default();
            with_state(|state| {
                result = state.reoptimize().clone();
                Ok(())
            })?;
            render(&result, json)?;
        }
        ScheduleAction::Show { json } => {
            let store = DayStore::open()?;
            let state = load_state(&store)?;
            match &state.last_result {
                Some(result) => render(result, json)?,
                None => println!("no schedule generated yet; run `schedule generate`"),
            }
        }
        ScheduleAction::Move { id, start, end } => {
            let start = parse_time(&start)
                .ok_or_else(|| format!("invalid start time '{start}' (expected HH:MM)"))?;
            let end = parse_time(&end)
                .ok_or_else(|| format!("invalid end time '{end}' (expected HH:MM)"))?;
            let mut moved = false;
            with_state(|state| {
                moved = state.update_block_time(&id, start, end);
                Ok(())
            })?;
            if moved {
                println!("block moved");
            } else {
                return Err(format!("no block with id '{id}' in the last result").into());
            }
        }
    }
    Ok(())
}
