//! Seed command.

use console::style;

use crate::config::Settings;
use crate::services::seed::{initialize_samples, SeedOutcome};

/// Insert the demonstration seed samples unless data already exists.
pub async fn cmd_seed(settings: &Settings) -> anyhow::Result<()> {
    settings.ensure_directories()?;

    let ctx = settings.create_db_context();
    ctx.init_schema().await?;

    match initialize_samples(&ctx.text_samples()).await? {
        SeedOutcome::Created(count) => {
            println!(
                "{} Created {} sample text entries",
                style("✓").green(),
                count
            );
        }
        SeedOutcome::AlreadyInitialized(count) => {
            println!(
                "{} Sample data already exists ({} samples), nothing inserted",
                style("!").yellow(),
                count
            );
        }
    }

    Ok(())
}
