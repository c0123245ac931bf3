use clap::Subcommand;
use dayplan_core::Settings;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current settings
    Show,
    /// Set the display name
    SetUsername { name: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let settings = Settings::load_or_default();
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        ConfigAction::SetUsername { name } => {
            let mut settings = Settings::load_or_default();
            settings.username = name.trim().to_string();
            settings.save()?;
            println!("username updated");
        }
    }
    Ok(())
}
