pub mod config;
pub mod fixed;
pub mod profile;
pub mod schedule;
pub mod task;

use dayplan_core::{DayState, DayStore};

/// Load the persisted day state, falling back to the seeded defaults.
pub fn load_state(store: &DayStore) -> Result<DayState, Box<dyn std::error::Error>> {
    Ok(store.load_day()?.unwrap_or_default())
}

/// Apply one mutation to the day state and persist the result.
pub fn with_state<F>(mutate: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&mut DayState) -> Result<(), Box<dyn std::error::Error>>,
{
    let store = DayStore::open()?;
    let mut state = load_state(&store)?;
    mutate(&mut state)?;
    store.save_day(&state)?;
    Ok(())
}
