//! Status command.

use console::style;

use crate::config::Settings;

/// Print per-collection counts and annotation progress.
pub async fn cmd_status(settings: &Settings) -> anyhow::Result<()> {
    settings.ensure_directories()?;

    let ctx = settings.create_db_context();
    ctx.init_schema().await?;

    let samples = ctx.text_samples().count().await?;
    let annotations = ctx.annotations().count().await?;
    let comparisons = ctx.comparisons().count().await?;

    let progress = if samples > 0 {
        format!("{}/{}", annotations, samples)
    } else {
        "0/0".to_string()
    };

    println!("{}", style("annotext status").bold());
    println!("  Database:             {}", settings.database_url());
    println!("  Text samples:         {}", samples);
    println!("  Annotations:          {}", annotations);
    println!("  Pairwise comparisons: {}", comparisons);
    println!("  Annotation progress:  {}", progress);

    Ok(())
}
