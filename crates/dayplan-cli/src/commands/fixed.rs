use clap::Subcommand;
use dayplan_core::DayStore;

use super::{load_state, with_state};

#[derive(Subcommand)]
pub enum FixedAction {
    /// List fixed commitments as JSON
    List,
    /// Add a fixed commitment, e.g. add "Lecture" 09:00 11:00
    Add {
        title: String,
        start: String,
        end: String,
    },
    /// Remove a fixed commitment by id
    Remove { id: String },
}

pub fn run(action: FixedAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        FixedAction::List => {
            let store = DayStore::open()?;
            let state = load_state(&store)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&state.profile.fixed_blocks)?
            );
        }
        FixedAction::Add { title, start, end } => {
            let mut new_id = String::new();
            with_state(|state| {
                new_id = state.add_fixed(&title, start, end);
                Ok(())
            })?;
            println!("fixed block added: {new_id}");
        }
        FixedAction::Remove { id } => {
            let mut removed = false;
            with_state(|state| {
                removed = state.remove_fixed(&id);
                Ok(())
            })?;
            if removed {
                println!("fixed block removed");
            } else {
                return Err(format!("no fixed block with id '{id}'").into());
            }
        }
    }
    Ok(())
}
