//! Single operation command

use anyhow::{bail, Context, Result};
use tracing::info;
use tutor_core::{Operation, TutorAgent};

/// Run one agent operation on a topic and print the answer
pub async fn run_command(
    operation: Operation,
    topic: String,
    config_loader: crate::config::CliConfigLoader,
) -> Result<()> {
    let topic = topic.trim();
    if topic.is_empty() {
        bail!("Topic must not be blank");
    }

    let model_config = config_loader.load().await?;
    info!("Running {} on '{}' with {}", operation, topic, model_config.model());

    let agent = TutorAgent::from_config(&model_config)?;
    let text = agent
        .run(operation, topic)
        .await
        .with_context(|| format!("{} failed for '{}'", operation, topic))?;

    println!("{}", text);

    Ok(())
}
