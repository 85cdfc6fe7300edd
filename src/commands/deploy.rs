// ABOUTME: Deploy command implementation.
// ABOUTME: Drives the rollout state machine phase by phase with progress output.

use strofi::artifact::{CodeArtifact, Color};
use strofi::config::Config;
use strofi::deploy::{DeployError, Rollout};
use strofi::error::Result;
use strofi::gate::{AutoGate, Gate, StdinGate};
use strofi::output::Output;
use strofi::platform::{AliasOps, FunctionOps, HttpPlatform, MemoryPlatform};

const GATE_PROMPT: &str = "Press <Enter> to deploy the green version...";

/// Run the full blue/green rollout against the configured platform.
pub async fn deploy(config: Config, yes: bool, dry_run: bool, mut output: Output) -> Result<()> {
    output.start_timer();

    let gate: Box<dyn Gate> = if yes {
        Box::new(AutoGate)
    } else {
        Box::new(StdinGate::new(GATE_PROMPT))
    };

    if dry_run {
        output.warning("dry-run: using in-memory platform, no real resources touched");
        let platform = MemoryPlatform::new();
        run_rollout(&platform, config, gate.as_ref(), &output).await?;
    } else {
        let platform = HttpPlatform::new(&config.platform.endpoint)?;
        run_rollout(&platform, config, gate.as_ref(), &output).await?;
    }

    output.success("Deployment complete!");
    Ok(())
}

/// Run the rollout state machine.
async fn run_rollout<P: FunctionOps + AliasOps>(
    platform: &P,
    config: Config,
    gate: &dyn Gate,
    output: &Output,
) -> Result<()> {
    output.progress(&format!(
        "Starting blue/green deployment of {} in {}",
        config.function, config.region
    ));

    // Blue half: publish, await readiness, cut the alias over
    output.progress("  → Reading blue artifact...");
    let blue = CodeArtifact::read(Color::Blue, config.artifact_path(Color::Blue))
        .await
        .map_err(DeployError::from)?;

    output.progress("  → Publishing blue version...");
    let rollout = Rollout::new(config).publish_blue(platform, blue).await?;

    output.progress(&format!(
        "  → Waiting for version {} to become active...",
        rollout.blue_version()
    ));
    let rollout = rollout.promote(platform).await?;
    output.progress(&format!(
        "  ✓ Alias '{}' points to blue version {}",
        rollout.alias(),
        rollout.blue_version()
    ));

    // Manual gate between the two halves
    let rollout = rollout.await_gate(gate).await?;

    // Green half: publish-on-update, await readiness, repoint the alias
    output.progress("  → Reading green artifact...");
    let green = CodeArtifact::read(Color::Green, rollout.config().artifact_path(Color::Green))
        .await
        .map_err(DeployError::from)?;

    output.progress("  → Publishing green version...");
    let rollout = rollout.publish_green(platform, green).await?;

    output.progress(&format!(
        "  → Waiting for version {} to become active...",
        rollout.green_version()
    ));
    let rollout = rollout.promote(platform).await?;

    let summary = rollout.finish();
    output.progress(&format!(
        "  ✓ Alias '{}' points to green version {}",
        summary.alias, summary.green
    ));

    Ok(())
}
