//! Interactive mode command

use crate::interactive::{ConsoleUi, FailurePolicy};
use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;
use tutor_core::TutorAgent;

/// Start interactive mode on stdin/stdout
pub async fn interactive_command(
    config_loader: crate::config::CliConfigLoader,
    policy: FailurePolicy,
) -> Result<()> {
    // Load model configuration
    let model_config = config_loader.load().await?;
    info!(
        "Using model {} at {} (timeout {}s)",
        model_config.model(),
        model_config.endpoint(),
        model_config.timeout().as_secs()
    );

    let agent = TutorAgent::from_config(&model_config)?;
    let ui = ConsoleUi::new(agent).with_failure_policy(policy);

    ui.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    Ok(())
}
